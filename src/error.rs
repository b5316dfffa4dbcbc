// src/error.rs
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Everything that can end a filmography lookup. The `Display` text of each
/// variant is the operator-facing diagnostic.
#[derive(Debug, Error)]
pub enum FilmographyError {
    #[error(
        "No actor found with the name '{actor}'. Please check the spelling or try a different search."
    )]
    NotFound { actor: String },

    #[error(transparent)]
    Structure(#[from] StructureError),

    #[error("An error occurred during the request: {0}")]
    Fetch(#[from] FetchError),

    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// The profile page was fetched but does not have the expected shape.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StructureError {
    #[error("No Filmography section found for {actor}")]
    MissingSection { actor: String },

    #[error("No films found for {actor}")]
    NoFilms { actor: String },
}

/// Either fetch in the pipeline failed. Transport faults and error statuses
/// stay distinct so callers can tell "unreachable" from "answered with 404".
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{source} ({url})")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("{status} status for url: {url}")]
    Status { url: String, status: u16 },
}

impl FetchError {
    pub fn transport(url: impl Into<String>, source: impl Into<BoxError>) -> Self {
        FetchError::Transport { url: url.into(), source: source.into() }
    }
}

/// A markup query could not be compiled.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MarkupError {
    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },
}

impl From<MarkupError> for FilmographyError {
    fn from(e: MarkupError) -> Self {
        FilmographyError::Unexpected(e.to_string())
    }
}

impl From<url::ParseError> for FilmographyError {
    fn from(e: url::ParseError) -> Self {
        FilmographyError::Unexpected(format!("bad URL: {e}"))
    }
}
