// src/lib.rs

#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod csv;
pub mod file;
pub mod filmography;
pub mod progress;
pub mod table;

pub use error::{FetchError, FilmographyError, StructureError};
pub use filmography::{FilmographyFetcher, get_actor_filmography};
pub use table::{FilmRow, FilmographyTable};
