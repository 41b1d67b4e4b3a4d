//! Release date normalization
use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{NormalizeError, Result};
use crate::types::{Movie, MovieId, RawMovie};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parse a release date; blank text is a missing date, anything else must parse
pub fn parse_release_date(movie_id: MovieId, text: &str) -> Result<Option<NaiveDate>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
                .map(|dt| dt.date())
        })
        .map(Some)
        .ok_or_else(|| NormalizeError::DateParse {
            movie_id,
            text: text.to_string(),
        })
}

/// Convert every raw row into a [`Movie`] with a typed release date.
///
/// The first unparseable date aborts the whole conversion.
pub fn normalize_dates(raw: Vec<RawMovie>) -> Result<Vec<Movie>> {
    raw.into_iter()
        .map(|row| {
            let release_date = match row.release_date.as_deref() {
                Some(text) => parse_release_date(row.id, text)?,
                None => None,
            };

            Ok(Movie {
                id: row.id,
                title: row.title,
                homepage: row.homepage,
                budget: row.budget,
                popularity: row.popularity,
                release_date,
                revenue: row.revenue,
                runtime: row.runtime,
                vote_average: row.vote_average,
                vote_count: row.vote_count,
                tagline: row.tagline,
                original_language: row.original_language,
                overview: row.overview,
                genres: row.genres,
                director: row.director,
                production_companies: row.production_companies,
                production_countries: row.production_countries,
                crew: row.crew,
                spoken_languages: row.spoken_languages,
                status: row.status,
            })
        })
        .collect()
}
