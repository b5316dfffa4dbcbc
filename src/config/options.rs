// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    /// Site root; search and profile URLs are resolved against it.
    pub base_url: String,
    pub user_agent: String,
    /// `None` leaves the HTTP client's own default in place.
    pub timeout: Option<Duration>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

impl FetchOptions {
    pub fn base_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.base_url)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// Where to write. `None` means print only, no file.
    pub out: Option<PathBuf>,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out: None,
            include_headers: true,
        }
    }
}

impl ExportOptions {
    pub fn enabled(&self) -> bool {
        self.out.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = AppOptions::default();
        assert_eq!(opts.fetch.base_url, BASE_URL);
        assert!(opts.fetch.timeout.is_none());
        assert!(opts.fetch.user_agent.starts_with("filmography_scrape/"));
        assert_eq!(opts.export.format, ExportFormat::Csv);
        assert!(opts.export.include_headers);
        assert!(!opts.export.enabled());
    }

    #[test]
    fn base_url_parses() {
        let opts = FetchOptions::default();
        assert_eq!(opts.base_url().unwrap().host_str(), Some("www.imdb.com"));

        let bad = FetchOptions { base_url: "not a url".into(), ..FetchOptions::default() };
        assert!(bad.base_url().is_err());
    }

    #[test]
    fn format_ext_and_delim() {
        assert_eq!(ExportFormat::Csv.ext(), "csv");
        assert_eq!(ExportFormat::Tsv.ext(), "tsv");
        assert_eq!(ExportFormat::Csv.delim(), ',');
        assert_eq!(ExportFormat::Tsv.delim(), '\t');
    }
}
