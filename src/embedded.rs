//! Typed parsing of embedded record lists
//!
//! Company, country, language and crew columns hold a list of records serialized as
//! text. Most dumps use JSON, which goes through simd-json; anything simd-json
//! rejects is retried with the strict literal parser so `repr()`-style dumps work
//! too. A field that neither accepts is a hard error, never an empty list.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{NormalizeError, Result};
use crate::literal::{self, LiteralError};
use crate::types::MovieId;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompanyRecord {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountryRecord {
    pub iso_3166_1: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LanguageRecord {
    pub iso_639_1: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CrewRecord {
    pub id: i64,
    pub name: String,
    pub department: String,
    pub job: String,
}

/// Parse one embedded list into typed records
pub fn parse_records<T: DeserializeOwned>(text: &str) -> std::result::Result<Vec<T>, LiteralError> {
    // simd-json parses in place, so it needs its own buffer
    let mut bytes = text.as_bytes().to_vec();
    if let Ok(records) = simd_json::serde::from_slice::<Vec<T>>(&mut bytes) {
        return Ok(records);
    }

    let value = literal::parse(text)?;
    Ok(serde_json::from_value(value)?)
}

/// Parse the embedded list of every movie that has one.
///
/// Missing fields contribute nothing; the callback sees `(movie_id, record)` pairs
/// in source order.
pub fn for_each_record<'a, T, I, F>(column: &'static str, rows: I, mut emit: F) -> Result<()>
where
    T: DeserializeOwned,
    I: IntoIterator<Item = (MovieId, Option<&'a str>)>,
    F: FnMut(MovieId, T) -> Result<()>,
{
    for (movie_id, field) in rows {
        let Some(text) = field else {
            continue;
        };
        let records = parse_records::<T>(text).map_err(|source| NormalizeError::EmbeddedList {
            column,
            movie_id,
            source,
        })?;
        for record in records {
            emit(movie_id, record)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_companies() {
        let records: Vec<CompanyRecord> = parse_records(
            r#"[{"name": "Ingenious Film Partners", "id": 289}, {"name": "Twentieth Century Fox Film Corporation", "id": 306}]"#,
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], CompanyRecord { id: 289, name: "Ingenious Film Partners".to_string() });
    }

    #[test]
    fn test_python_repr_countries() {
        let records: Vec<CountryRecord> =
            parse_records("[{'iso_3166_1': 'GB', 'name': 'United Kingdom'}, {'iso_3166_1': 'US', 'name': 'United States of America'}]")
                .unwrap();
        assert_eq!(records[1].iso_3166_1, "US");
    }

    #[test]
    fn test_crew_ignores_extra_fields() {
        let records: Vec<CrewRecord> = parse_records(
            r#"[{"credit_id": "52fe48009251416c750aca23", "department": "Editing", "gender": 0, "id": 1721, "job": "Editor", "name": "Stephen E. Rivkin"}]"#,
        )
        .unwrap();
        assert_eq!(records[0].job, "Editor");
        assert_eq!(records[0].department, "Editing");
    }

    #[test]
    fn test_wrong_shape_is_an_error() {
        let err = parse_records::<LanguageRecord>(r#"[{"name": "English"}]"#).unwrap_err();
        assert!(matches!(err, LiteralError::Shape(_)));
    }

    #[test]
    fn test_malformed_field_aborts_with_context() {
        let rows = vec![(1, Some("[]")), (7, Some("[{'id': 1, 'name': ")), (9, None)];
        let err = for_each_record::<CompanyRecord, _, _>("production_companies", rows, |_, _| Ok(())).unwrap_err();
        match err {
            NormalizeError::EmbeddedList { column, movie_id, .. } => {
                assert_eq!(column, "production_companies");
                assert_eq!(movie_id, 7);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_fields_are_skipped() {
        let rows = vec![(1, None), (2, Some("[{'id': 5, 'name': 'Pixar'}]"))];
        let mut seen = Vec::new();
        for_each_record::<CompanyRecord, _, _>("production_companies", rows, |movie_id, record| {
            seen.push((movie_id, record.id));
            Ok(())
        })
        .unwrap();
        assert_eq!(seen, vec![(2, 5)]);
    }
}
