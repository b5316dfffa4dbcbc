//! # Page specs
//!
//! One module per remote page. Each spec knows *where the data lives in the
//! markup* and how to pull it out; nothing here fetches, logs, or decides what a
//! missing piece means for the overall lookup.
//!
//! ## What lives here
//! - **URL shaping** for the page (`search::search_url`).
//! - **Locator choice** (markers come from `config::consts`).
//! - **Tolerant extraction** via `core::html`: a missing cell becomes empty
//!   text, a missing container becomes an explicit `None` / enum variant.
//!
//! ## What does **not** live here
//! - Fetching, status checks, error wording: `filmography`.
//! - Year coercion and ordering: `table`.
//!
//! ## Typical call chain
//! ```text
//! cli → FilmographyFetcher::fetch_filmography
//!         → specs::search::{search_url, profile_link}
//!         → specs::profile::extract_listing
//!         → table::FilmographyTable::from_raw
//! ```
//!
//! Specs are testable offline against inline HTML fixtures.
pub mod profile;
pub mod search;
