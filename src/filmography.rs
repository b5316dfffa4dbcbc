// src/filmography.rs

// The lookup pipeline:
//   search URL → fetch → first profile link → fetch → filmography rows
//   → year coercion → sort (year desc, missing last).
// Each step either moves on or stops the whole lookup with a FilmographyError.

use url::Url;

use crate::config::options::FetchOptions;
use crate::core::html::Document;
use crate::core::net::{HttpFetcher, PageFetcher, Response};
use crate::error::{FetchError, FilmographyError, StructureError};
use crate::progress::{Progress, Stage};
use crate::specs::profile::{self, Listing};
use crate::specs::search;
use crate::table::FilmographyTable;

/// Stateless; one instance can serve any number of lookups.
pub struct FilmographyFetcher<F> {
    fetcher: F,
    base_url: Url,
}

impl FilmographyFetcher<HttpFetcher> {
    /// Real HTTP fetcher configured from `opts`.
    pub fn from_options(opts: &FetchOptions) -> Result<Self, FilmographyError> {
        let base_url = opts.base_url()?;
        let http = HttpFetcher::new(opts).map_err(|e| {
            FilmographyError::Unexpected(format!("could not build HTTP client: {e}"))
        })?;
        Ok(Self::new(http, base_url))
    }
}

impl<F: PageFetcher> FilmographyFetcher<F> {
    pub fn new(fetcher: F, base_url: Url) -> Self {
        Self { fetcher, base_url }
    }

    /// Look up `actor_name` and return the sorted filmography.
    pub fn fetch_filmography(
        &self,
        actor_name: &str,
        mut progress: Option<&mut dyn Progress>,
    ) -> Result<FilmographyTable, FilmographyError> {
        if let Some(p) = progress.as_deref_mut() {
            p.begin(Stage::COUNT);
        }
        let result = self.lookup(actor_name, &mut progress);
        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        result
    }

    /// Same lookup, failures reduced to `None` after logging the diagnostic.
    ///
    /// The diagnostic is emitted at error level through `tracing`; it is only
    /// visible once a subscriber is installed (see [`crate::log::init`]).
    pub fn get_actor_filmography(
        &self,
        actor_name: &str,
        progress: Option<&mut dyn Progress>,
    ) -> Option<FilmographyTable> {
        match self.fetch_filmography(actor_name, progress) {
            Ok(table) => Some(table),
            Err(e) => {
                loge!("{e}");
                None
            }
        }
    }

    fn lookup(
        &self,
        actor_name: &str,
        progress: &mut Option<&mut dyn Progress>,
    ) -> Result<FilmographyTable, FilmographyError> {
        // Locate profile
        let search_url = search::search_url(&self.base_url, actor_name)?;
        status(progress, &format!("Searching for '{actor_name}'…"));
        let page = self.get(&search_url)?;

        let profile_url = search::profile_link(&Document::parse(&page.body), &self.base_url)?
            .ok_or_else(|| FilmographyError::NotFound { actor: actor_name.to_string() })?;
        logd!("profile for '{actor_name}': {profile_url}");
        report(progress, Stage::Search);

        // Fetch profile
        status(progress, "Fetching profile…");
        let page = self.get(&profile_url)?;
        report(progress, Stage::Profile);

        // Extract, normalise, sort
        let raw = match profile::extract_listing(&Document::parse(&page.body))? {
            Listing::MissingSection => {
                return Err(StructureError::MissingSection { actor: actor_name.to_string() }.into());
            }
            Listing::NoEntries => {
                return Err(StructureError::NoFilms { actor: actor_name.to_string() }.into());
            }
            Listing::Films(rows) => rows,
        };

        let table = FilmographyTable::from_raw(raw);
        logf!("{} films for '{actor_name}'", table.len());
        report(progress, Stage::Extract);
        Ok(table)
    }

    fn get(&self, url: &Url) -> Result<Response, FetchError> {
        self.fetcher.fetch(url)?.error_for_status(url)
    }
}

/// One-call lookup against the live site with default options.
///
/// Failures are logged at error level and yield `None`. Nothing is printed
/// unless a `tracing` subscriber is installed, e.g. with [`crate::log::init`]:
///
/// ```no_run
/// filmography_scrape::log::init(false);
/// if let Some(table) = filmography_scrape::get_actor_filmography("Tom Hanks") {
///     println!("{table}");
/// }
/// ```
///
/// Use [`FilmographyFetcher::fetch_filmography`] to get the error itself.
pub fn get_actor_filmography(actor_name: &str) -> Option<FilmographyTable> {
    let fetcher = match FilmographyFetcher::from_options(&FetchOptions::default()) {
        Ok(f) => f,
        Err(e) => {
            loge!("{e}");
            return None;
        }
    };
    fetcher.get_actor_filmography(actor_name, None)
}

/* ---------- helpers ---------- */

fn status(progress: &mut Option<&mut dyn Progress>, msg: &str) {
    if let Some(p) = progress.as_deref_mut() {
        p.log(msg);
    }
}

fn report(progress: &mut Option<&mut dyn Progress>, stage: Stage) {
    if let Some(p) = progress.as_deref_mut() {
        p.stage_done(stage);
    }
}
