use crate::keys::{LinkSet, SurrogateKeys};
use crate::types::{Movie, MovieStatus, Status};

/// Build `statuses` and `movies_statuses` from the flat status column
pub fn extract_statuses(movies: &[Movie]) -> (Vec<Status>, Vec<MovieStatus>) {
    let mut keys: SurrogateKeys<String> = SurrogateKeys::new();
    let mut links = LinkSet::new();

    for movie in movies {
        if let Some(status) = movie.status.as_ref() {
            links.insert(movie.id, keys.get_or_create(status));
        }
    }

    let statuses = keys
        .into_entries()
        .map(|(status_id, status)| Status { status_id, status })
        .collect();
    let links = links
        .into_pairs()
        .into_iter()
        .map(|(movie_id, status_id)| MovieStatus { movie_id, status_id })
        .collect();

    (statuses, links)
}
