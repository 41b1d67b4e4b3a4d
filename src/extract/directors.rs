use crate::escape::decode_escapes;
use crate::keys::{LinkSet, SurrogateKeys};
use crate::types::{Director, Movie, MovieDirector};

/// Build `directors` and `movies_directors` from the director column.
///
/// Links are resolved against the raw name. Escape decoding only touches the
/// finished `directors` rows, so two raw spellings that decode to the same text
/// stay separate directors.
pub fn extract_directors(movies: &[Movie]) -> (Vec<Director>, Vec<MovieDirector>) {
    let mut keys: SurrogateKeys<String> = SurrogateKeys::new();
    let mut links = LinkSet::new();

    for movie in movies {
        let Some(director) = movie.director.as_ref() else {
            continue;
        };
        let director_id = keys.get_or_create(director);
        links.insert(movie.id, director_id);
    }

    let directors = keys
        .into_entries()
        .map(|(director_id, raw_name)| Director {
            director_id,
            director_name: decode_escapes(&raw_name).into_owned(),
        })
        .collect();
    let movies_directors = links
        .into_pairs()
        .into_iter()
        .map(|(movie_id, director_id)| MovieDirector { movie_id, director_id })
        .collect();

    (directors, movies_directors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: i64, director: Option<&str>) -> Movie {
        Movie {
            id,
            director: director.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_directors_shared_across_movies() {
        let movies = vec![
            movie(19995, Some("James Cameron")),
            movie(285, Some("Gore Verbinski")),
            movie(597, Some("James Cameron")),
            movie(4, None),
        ];
        let (directors, links) = extract_directors(&movies);

        assert_eq!(directors.len(), 2);
        assert_eq!(directors[0], Director { director_id: 1, director_name: "James Cameron".to_string() });
        assert_eq!(
            links,
            vec![
                MovieDirector { movie_id: 19995, director_id: 1 },
                MovieDirector { movie_id: 285, director_id: 2 },
                MovieDirector { movie_id: 597, director_id: 1 },
            ]
        );
    }

    #[test]
    fn test_names_decoded_after_linking() {
        let movies = vec![
            movie(1, Some(r"Pedro Almod\xf3var")),
            movie(2, Some("Pedro Almodóvar")),
        ];
        let (directors, links) = extract_directors(&movies);

        // both spellings keep their own id; only the display text is decoded
        assert_eq!(directors.len(), 2);
        assert_eq!(directors[0].director_name, "Pedro Almodóvar");
        assert_eq!(directors[1].director_name, "Pedro Almodóvar");
        assert_eq!(links[0].director_id, 1);
        assert_eq!(links[1].director_id, 2);
    }
}
