// src/config/consts.rs
use crate::core::html::Locator;

// Net config
pub const BASE_URL: &str = "https://www.imdb.com";
pub const SEARCH_PATH: &str = "/find";
pub const SEARCH_QUERY_SUFFIX: &str = "s=nm&exact=true&ref_=fn_al_nm_ex";
pub const USER_AGENT: &str = concat!("filmography_scrape/", env!("CARGO_PKG_VERSION"));

// Search results page
pub const SEARCH_RESULT: Locator = Locator::class("td", "result_text");
pub const RESULT_LINK: Locator = Locator::tag("a");

// Profile page
pub const FILMOGRAPHY_SECTION: Locator = Locator::id("div", "filmography");
pub const FILM_ROW: Locator = Locator::class("div", "filmo-row");
pub const FILM_TITLE: Locator = Locator::class("a", "ipc-metadata-list-summary-item__t");
pub const FILM_YEAR: Locator = Locator::class("span", "ipc-metadata-list-summary-item__li");

// Export
pub const DEFAULT_FILE: &str = "filmography";
pub const MISSING_YEAR: &str = "-";
