use chrono::Datelike;
use std::collections::HashMap;

use crate::keys::{LinkSet, SurrogateKeys};
use crate::types::{Actor, Appearance, Movie, MovieActor, MovieId};

/// Index catalog movies by `(title, release year)`; undated or untitled movies
/// can never be matched
fn index_by_title_year(movies: &[Movie]) -> HashMap<(&str, i32), Vec<MovieId>> {
    let mut index: HashMap<(&str, i32), Vec<MovieId>> = HashMap::new();
    for movie in movies {
        if let (Some(title), Some(date)) = (movie.title.as_deref(), movie.release_date) {
            index.entry((title, date.year())).or_default().push(movie.id);
        }
    }
    index
}

/// Build `actors` and `movies_actors` from the appearance list.
///
/// The appearance list has no movie id, so each credit is matched to the catalog
/// by title and release year. This is an inner join: credits with no matching movie
/// are dropped before any actor id is minted, so an actor whose every credit misses
/// never shows up in `actors`. A credit matching several movies links to each.
pub fn extract_actors(appearances: &[Appearance], movies: &[Movie]) -> (Vec<Actor>, Vec<MovieActor>) {
    let index = index_by_title_year(movies);
    let mut keys: SurrogateKeys<String> = SurrogateKeys::new();
    let mut links = LinkSet::new();

    for appearance in appearances {
        let (Some(actor), Some(film), Some(year)) =
            (appearance.actor.as_ref(), appearance.film.as_deref(), appearance.year)
        else {
            continue;
        };
        let Some(movie_ids) = index.get(&(film, year)) else {
            continue;
        };
        let actor_id = keys.get_or_create(actor);
        for movie_id in movie_ids {
            links.insert(actor_id, *movie_id);
        }
    }

    let actors = keys
        .into_entries()
        .map(|(actor_id, actor)| Actor { actor_id, actor })
        .collect();
    let links = links
        .into_pairs()
        .into_iter()
        .map(|(actor_id, movie_id)| MovieActor { actor_id, movie_id })
        .collect();

    (actors, links)
}
