// src/core/sanitize.rs

/// Collapse runs of whitespace to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Turn an actor name into a safe file stem: ASCII alphanumerics kept,
/// whitespace runs become one `_`, `-`/`_` kept, everything else dropped.
/// Falls back to `fallback` when nothing survives.
pub fn sanitize_file_stem(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
            last_us = false;
        } else if ch.is_whitespace() || ch == '_' {
            if !last_us {
                out.push('_');
                last_us = true;
            }
        } else if ch == '-' {
            out.push(ch);
            last_us = false;
        }
    }
    let out = out.trim_matches('_');
    if out.is_empty() { fallback.to_string() } else { out.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_ws_collapses() {
        assert_eq!(normalize_ws("  Tom \t  Hanks \n"), "Tom Hanks");
        assert_eq!(normalize_ws(""), "");
    }

    #[test]
    fn stems() {
        assert_eq!(sanitize_file_stem("Tom Hanks", "x"), "tom_hanks");
        assert_eq!(sanitize_file_stem("  Jean-Luc  Picard ", "x"), "jean-luc_picard");
        assert_eq!(sanitize_file_stem("Zoë Kravitz", "x"), "zo_kravitz");
        assert_eq!(sanitize_file_stem("a__b", "x"), "a_b");
        assert_eq!(sanitize_file_stem("!!!", "filmography"), "filmography");
    }
}
