use crate::keys::{LinkSet, SurrogateKeys};
use crate::types::{Genre, Movie, MovieGenre};

/// Upstream splits "Science Fiction" on whitespace; these two tokens undo that
const SPLIT_GENRE_HEAD: &str = "Science";
const SPLIT_GENRE_TAIL: &str = "Fiction";
const SPLIT_GENRE: &str = "Science Fiction";

/// Map one whitespace token to its genre name, or `None` for the orphan tail
fn genre_token(token: &str) -> Option<&str> {
    match token {
        SPLIT_GENRE_HEAD => Some(SPLIT_GENRE),
        SPLIT_GENRE_TAIL => None,
        other => Some(other),
    }
}

/// Build `genres` and `movies_genres` from the whitespace-delimited genre column
pub fn extract_genres(movies: &[Movie]) -> (Vec<Genre>, Vec<MovieGenre>) {
    let mut keys = SurrogateKeys::new();
    let mut links = LinkSet::new();

    for movie in movies {
        let Some(genres) = movie.genres.as_deref() else {
            continue;
        };
        for name in genres.split_whitespace().filter_map(genre_token) {
            let genre_id = keys.get_or_create(&name.to_string());
            links.insert(movie.id, genre_id);
        }
    }

    let genres = keys
        .into_entries()
        .map(|(genre_id, genre)| Genre { genre_id, genre })
        .collect();
    let movies_genres = links
        .into_pairs()
        .into_iter()
        .map(|(movie_id, genre_id)| MovieGenre { movie_id, genre_id })
        .collect();

    (genres, movies_genres)
}
