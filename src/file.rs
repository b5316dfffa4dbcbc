// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter},
    path::{Path, PathBuf},
};

use crate::config::consts::DEFAULT_FILE;
use crate::config::options::ExportOptions;
use crate::core::sanitize::sanitize_file_stem;
use crate::csv::write_table;
use crate::table::FilmographyTable;

/// Write `table` according to `export` and return the path written.
/// Errors with `InvalidInput` when no output path is configured.
pub fn write_export(
    export: &ExportOptions,
    actor_name: &str,
    table: &FilmographyTable,
) -> io::Result<PathBuf> {
    let out = export
        .out
        .as_deref()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "no output path configured"))?;
    let path = resolve_out_path(out, actor_name, export.format.ext())?;

    let file = File::create(&path)?; // truncate/overwrite
    write_table(BufWriter::new(file), table, export.include_headers, export.format.delim())?;
    Ok(path)
}

/// A directory (existing, or spelled with a trailing separator) gets
/// `<actor stem>.<ext>` inside it; anything else is taken as the file path.
/// Parent directories are created either way.
pub fn resolve_out_path(out: &Path, actor_name: &str, ext: &str) -> io::Result<PathBuf> {
    if out.is_dir() || looks_like_dir_hint(out) {
        ensure_directory(out)?;
        let stem = sanitize_file_stem(actor_name, DEFAULT_FILE);
        return Ok(out.join(format!("{stem}.{ext}")));
    }
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(out.to_path_buf())
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
