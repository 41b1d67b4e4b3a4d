//! Entity extractors
//!
//! Each extractor reads the date-normalized catalog (actors also read the
//! appearance list) and returns an entity table plus the link table pointing back
//! at movies. Extractors share nothing but a borrow of the catalog, so they can run
//! in any order.

pub mod actors;
pub mod crew;
pub mod directors;
pub mod genres;
pub mod languages;
pub mod production;
pub mod statuses;

pub use actors::extract_actors;
pub use crew::{extract_crew, CrewTables};
pub use directors::extract_directors;
pub use genres::extract_genres;
pub use languages::extract_languages;
pub use production::{extract_production_companies, extract_production_countries};
pub use statuses::extract_statuses;
