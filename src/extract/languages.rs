use crate::embedded::{for_each_record, LanguageRecord};
use crate::error::Result;
use crate::keys::{FirstSeen, LinkSet};
use crate::types::{Language, Movie, MovieSpokenLanguage};

/// Build `languages` and `movies_spoken_languages` from the spoken language lists.
///
/// Languages are keyed by their ISO 639-1 code; the Movie Assembler joins the
/// catalog's `original_language` against this table.
pub fn extract_languages(movies: &[Movie]) -> Result<(Vec<Language>, Vec<MovieSpokenLanguage>)> {
    let mut languages = FirstSeen::new();
    let mut links = LinkSet::new();

    let rows = movies.iter().map(|m| (m.id, m.spoken_languages.as_deref()));
    for_each_record("spoken_languages", rows, |movie_id, record: LanguageRecord| {
        let LanguageRecord { iso_639_1, name } = record;
        languages.insert_with(&iso_639_1, || name);
        links.insert(iso_639_1, movie_id);
        Ok(())
    })?;

    let languages = languages
        .into_entries()
        .into_iter()
        .map(|(language_short, language)| Language {
            language_short,
            language,
        })
        .collect();
    let links = links
        .into_pairs()
        .into_iter()
        .map(|(language_short, movie_id)| MovieSpokenLanguage {
            language_short,
            movie_id,
        })
        .collect();

    Ok((languages, links))
}
