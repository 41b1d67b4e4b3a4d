//! # Reelforge - Movie Catalog Normalizer
//!
//! Turns a denormalized movie catalog plus an actor appearance list into a set of
//! relational tables with surrogate keys, then replaces those tables in a load sink.
//!
//! ## Modules
//!
//! - **loader**: Read the raw CSV datasets, straight out of zip archives if needed
//! - **extract**: One extractor per entity (genres, directors, crew, actors, ...)
//! - **assemble**: Join the catalog into the final `movies` fact table
//! - **sink**: MySQL, JSON Lines and in-memory table sinks
//! - **pipeline**: Wire everything together
//!
//! ## Quick Start
//!
//! ```rust
//! use reelforge::pipeline::{normalize, write_catalog};
//! use reelforge::loader::RawDatasets;
//! use reelforge::sink::MemorySink;
//! use reelforge::types::RawMovie;
//!
//! # fn main() -> anyhow::Result<()> {
//! let raw = RawDatasets {
//!     movies: vec![RawMovie {
//!         id: 19995,
//!         title: Some("Avatar".to_string()),
//!         release_date: Some("2009-12-10".to_string()),
//!         director: Some("James Cameron".to_string()),
//!         original_language: Some("en".to_string()),
//!         spoken_languages: Some("[{'iso_639_1': 'en', 'name': 'English'}]".to_string()),
//!         status: Some("Released".to_string()),
//!         genres: Some("Action Science Fiction".to_string()),
//!         ..Default::default()
//!     }],
//!     appearances: vec![],
//! };
//!
//! let catalog = normalize(raw)?;
//! assert_eq!(catalog.movies.len(), 1);
//! assert_eq!(catalog.genres.len(), 2);
//!
//! let mut sink = MemorySink::new();
//! write_catalog(&catalog, &mut sink)?;
//! assert!(sink.get("movies").is_some());
//! # Ok(())
//! # }
//! ```

pub mod assemble;
pub mod config;
pub mod dates;
pub mod embedded;
pub mod error;
pub mod escape;
pub mod extract;
pub mod keys;
pub mod literal;
pub mod loader;
pub mod logging;
pub mod pipeline;
pub mod sink;
pub mod table;
pub mod types;

// Re-export commonly used types for convenience
pub use config::{DatabaseConfig, DatasetFiles};
pub use error::{NormalizeError, Result};
pub use loader::{load_datasets, RawDatasets};
pub use pipeline::{normalize, run, write_catalog, Catalog};
pub use sink::{JsonLinesSink, MemorySink, MySqlSink, TableSink};
pub use table::{Cell, Table};
