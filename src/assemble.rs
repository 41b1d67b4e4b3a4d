//! Final `movies` fact table
use std::collections::{HashMap, HashSet};

use crate::keys::SurrogateId;
use crate::types::{Language, Movie, MovieDirector, MovieFact, MovieId, MovieStatus};

/// Join the catalog against the director, language and status tables.
///
/// Every step is an INNER join and filters rows: a movie without a director link,
/// whose original language is missing from `languages`, or without a status link
/// does not appear in the output. Row order follows the catalog; a movie matching
/// several link rows yields one fact row per combination.
pub fn assemble_movies(
    movies: &[Movie],
    movies_directors: &[MovieDirector],
    languages: &[Language],
    movies_statuses: &[MovieStatus],
) -> Vec<MovieFact> {
    let mut directors: HashMap<MovieId, Vec<SurrogateId>> = HashMap::new();
    for link in movies_directors {
        directors.entry(link.movie_id).or_default().push(link.director_id);
    }
    let mut statuses: HashMap<MovieId, Vec<SurrogateId>> = HashMap::new();
    for link in movies_statuses {
        statuses.entry(link.movie_id).or_default().push(link.status_id);
    }
    let language_codes: HashSet<&str> = languages.iter().map(|l| l.language_short.as_str()).collect();

    let mut facts = Vec::new();
    for movie in movies {
        let Some(director_ids) = directors.get(&movie.id) else {
            continue;
        };
        let Some(language) = movie
            .original_language
            .as_deref()
            .filter(|code| language_codes.contains(code))
        else {
            continue;
        };
        let Some(status_ids) = statuses.get(&movie.id) else {
            continue;
        };

        for director_id in director_ids {
            for status_id in status_ids {
                facts.push(MovieFact {
                    movie_id: movie.id,
                    title: movie.title.clone(),
                    homepage: movie.homepage.clone(),
                    budget: movie.budget,
                    popularity: movie.popularity,
                    release_date: movie.release_date,
                    director_id: *director_id,
                    revenue: movie.revenue,
                    runtime: movie.runtime,
                    vote_average: movie.vote_average,
                    vote_count: movie.vote_count,
                    tagline: movie.tagline.clone(),
                    original_language_short: language.to_string(),
                    overview: movie.overview.clone(),
                    status_id: *status_id,
                });
            }
        }
    }
    facts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: i64, language: &str) -> Movie {
        Movie {
            id,
            title: Some(format!("Movie {id}")),
            original_language: Some(language.to_string()),
            budget: Some(1000),
            ..Default::default()
        }
    }

    fn language(code: &str) -> Language {
        Language {
            language_short: code.to_string(),
            language: code.to_uppercase(),
        }
    }

    #[test]
    fn test_fully_linked_movie_is_projected() {
        let movies = vec![movie(1, "en")];
        let facts = assemble_movies(
            &movies,
            &[MovieDirector { movie_id: 1, director_id: 3 }],
            &[language("en")],
            &[MovieStatus { movie_id: 1, status_id: 2 }],
        );

        assert_eq!(facts.len(), 1);
        let fact = &facts[0];
        assert_eq!(fact.movie_id, 1);
        assert_eq!(fact.director_id, 3);
        assert_eq!(fact.status_id, 2);
        assert_eq!(fact.original_language_short, "en");
        assert_eq!(fact.title.as_deref(), Some("Movie 1"));
        assert_eq!(fact.budget, Some(1000));
    }

    #[test]
    fn test_inner_joins_drop_unmatched_movies() {
        let movies = vec![movie(1, "en"), movie(2, "en"), movie(3, "xx"), movie(4, "en"), movie(5, "en")];
        let directors = vec![
            MovieDirector { movie_id: 1, director_id: 1 },
            MovieDirector { movie_id: 3, director_id: 1 },
            MovieDirector { movie_id: 4, director_id: 2 },
            MovieDirector { movie_id: 5, director_id: 2 },
        ];
        let statuses = vec![
            MovieStatus { movie_id: 1, status_id: 1 },
            MovieStatus { movie_id: 2, status_id: 1 },
            MovieStatus { movie_id: 3, status_id: 1 },
            MovieStatus { movie_id: 5, status_id: 1 },
        ];
        let facts = assemble_movies(&movies, &directors, &[language("en")], &statuses);

        // 2 has no director, 3 an unknown language, 4 no status
        let ids: Vec<_> = facts.iter().map(|f| f.movie_id).collect();
        assert_eq!(ids, vec![1, 5]);
        assert!(facts.len() < movies.len());
    }

    #[test]
    fn test_missing_original_language_is_dropped() {
        let mut untagged = movie(1, "en");
        untagged.original_language = None;
        let facts = assemble_movies(
            &[untagged],
            &[MovieDirector { movie_id: 1, director_id: 1 }],
            &[language("en")],
            &[MovieStatus { movie_id: 1, status_id: 1 }],
        );
        assert!(facts.is_empty());
    }
}
