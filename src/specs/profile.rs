// src/specs/profile.rs

use crate::config::consts::{FILMOGRAPHY_SECTION, FILM_ROW, FILM_TITLE, FILM_YEAR};
use crate::core::html::{Document, text_or_empty};
use crate::error::MarkupError;
use crate::table::RawFilmRow;

/// What the profile page yielded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Listing {
    /// No `div#filmography` on the page.
    MissingSection,
    /// Section present, but no `div.filmo-row` inside it.
    NoEntries,
    Films(Vec<RawFilmRow>),
}

/// Pull title/year text out of every row of the filmography section.
/// Missing title or year elements give empty text; the row is still kept.
pub fn extract_listing(doc: &Document) -> Result<Listing, MarkupError> {
    let Some(section) = doc.find_first(&FILMOGRAPHY_SECTION)? else {
        return Ok(Listing::MissingSection);
    };

    let entries = section.find_all(&FILM_ROW)?;
    if entries.is_empty() {
        return Ok(Listing::NoEntries);
    }

    let mut rows = Vec::with_capacity(entries.len());
    for entry in &entries {
        let title = text_or_empty(entry, &FILM_TITLE)?;
        let year_text = text_or_empty(entry, &FILM_YEAR)?;
        rows.push(RawFilmRow { title, year_text });
    }
    Ok(Listing::Films(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(title: &str, year: &str) -> String {
        format!(
            r#"<div class="filmo-row odd">
                 <a class="ipc-metadata-list-summary-item__t" href="/title/tt1/">{title}</a>
                 <ul><li><span class="ipc-metadata-list-summary-item__li">{year}</span></li></ul>
               </div>"#
        )
    }

    fn page(inner: &str) -> Document {
        Document::parse(&format!(
            r#"<html><body><div id="filmography"><div class="head">Actor</div>{inner}</div></body></html>"#
        ))
    }

    #[test]
    fn rows_in_page_order() {
        let doc = page(&[row(" Forrest Gump ", "1994"), row("Upcoming Film", "")].concat());
        assert_eq!(
            extract_listing(&doc).unwrap(),
            Listing::Films(vec![
                RawFilmRow::new("Forrest Gump", "1994"),
                RawFilmRow::new("Upcoming Film", ""),
            ])
        );
    }

    #[test]
    fn missing_cells_become_empty() {
        let doc = page(
            r#"<div class="filmo-row"><span class="ipc-metadata-list-summary-item__li">2004</span></div>
               <div class="filmo-row"><a class="ipc-metadata-list-summary-item__t">Big</a></div>
               <div class="filmo-row"></div>"#,
        );
        assert_eq!(
            extract_listing(&doc).unwrap(),
            Listing::Films(vec![
                RawFilmRow::new("", "2004"),
                RawFilmRow::new("Big", ""),
                RawFilmRow::new("", ""),
            ])
        );
    }

    #[test]
    fn first_year_fragment_wins() {
        let doc = page(
            r#"<div class="filmo-row">
                 <a class="ipc-metadata-list-summary-item__t">Cast Away</a>
                 <span class="ipc-metadata-list-summary-item__li">2000</span>
                 <span class="ipc-metadata-list-summary-item__li">Chuck Noland</span>
               </div>"#,
        );
        assert_eq!(
            extract_listing(&doc).unwrap(),
            Listing::Films(vec![RawFilmRow::new("Cast Away", "2000")])
        );
    }

    #[test]
    fn no_section() {
        let doc = Document::parse(&format!("<div id=\"bio\">{}</div>", row("Big", "1988")));
        assert_eq!(extract_listing(&doc).unwrap(), Listing::MissingSection);
    }

    #[test]
    fn section_without_rows() {
        let doc = page("<p>Nothing yet</p>");
        assert_eq!(extract_listing(&doc).unwrap(), Listing::NoEntries);
    }

    #[test]
    fn rows_outside_section_ignored() {
        let doc = Document::parse(&format!(
            r#"<div>{}</div><div id="filmography"></div>"#,
            row("Elsewhere", "1999")
        ));
        assert_eq!(extract_listing(&doc).unwrap(), Listing::NoEntries);
    }
}
