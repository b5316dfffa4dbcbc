// src/specs/search.rs

use url::Url;

use crate::config::consts::{RESULT_LINK, SEARCH_PATH, SEARCH_QUERY_SUFFIX, SEARCH_RESULT};
use crate::core::html::Document;
use crate::error::FilmographyError;

/// Query-string form of a display name: each space becomes `+`, every piece
/// in between is percent-encoded.
pub fn format_query(actor_name: &str) -> String {
    actor_name
        .split(' ')
        .map(|part| urlencoding::encode(part).into_owned())
        .collect::<Vec<_>>()
        .join("+")
}

/// `{base}/find?q=<name>&s=nm&exact=true&ref_=fn_al_nm_ex`
pub fn search_url(base: &Url, actor_name: &str) -> Result<Url, url::ParseError> {
    let mut url = base.join(SEARCH_PATH)?;
    url.set_query(Some(&format!("q={}&{}", format_query(actor_name), SEARCH_QUERY_SUFFIX)));
    Ok(url)
}

/// First result's profile link, resolved against `base`.
///
/// `None` when there is no result cell, no link in it, or the link has no
/// `href`. An `href` that does not resolve is an error, not a miss.
pub fn profile_link(doc: &Document, base: &Url) -> Result<Option<Url>, FilmographyError> {
    let Some(cell) = doc.find_first(&SEARCH_RESULT)? else {
        return Ok(None);
    };
    let Some(href) = cell.find_first(&RESULT_LINK)?.and_then(|a| a.attr("href")) else {
        return Ok(None);
    };
    Ok(Some(base.join(href.trim())?))
}
