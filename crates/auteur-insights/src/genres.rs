//! Genre frequency across a director's films.

use auteur_tmdb::{MovieGenres, TmdbClient, TmdbError};

use crate::fanout::fetch_in_order;
use crate::filmography::directed_movie_ids;
use crate::tally::Tally;

/// Counts genre names over the given movies, keyed by name.
#[must_use]
pub fn tally_genres(movies: &[MovieGenres]) -> Tally<String> {
    let mut tally = Tally::new();
    for genre in movies.iter().flat_map(|m| &m.genres) {
        tally.increment(genre.name.clone());
    }
    tally
}

/// `GET /director/{id}/genres`.
///
/// One `/movie/{id}` call per directing credit; a film credited twice is
/// fetched and counted twice.
///
/// # Errors
///
/// Returns [`TmdbError`] if any upstream call fails.
pub async fn director_genres(
    client: &TmdbClient,
    person_id: u64,
    max_concurrent: usize,
) -> Result<Tally<String>, TmdbError> {
    let movie_ids = directed_movie_ids(client, person_id).await?;

    let movies = fetch_in_order(movie_ids, max_concurrent, |movie_id| {
        client.movie_genres(movie_id)
    })
    .await?;

    let tally = tally_genres(&movies);
    tracing::debug!(
        person_id,
        films = movies.len(),
        genres = tally.len(),
        "aggregated director genres"
    );
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn movie(genres: &[&str]) -> MovieGenres {
        let genres: Vec<_> = genres
            .iter()
            .enumerate()
            .map(|(i, name)| json!({"id": i, "name": name}))
            .collect();
        serde_json::from_value(json!({ "genres": genres })).expect("valid movie")
    }

    #[test]
    fn counts_shared_genres() {
        let movies = vec![movie(&["Drama"]), movie(&["Drama"]), movie(&["Comedy"])];
        let tally = tally_genres(&movies);
        assert_eq!(
            serde_json::to_value(&tally).unwrap(),
            json!({"Drama": 2, "Comedy": 1})
        );
    }

    #[test]
    fn serialises_in_discovery_order() {
        let movies = vec![movie(&["Thriller", "Drama"]), movie(&["Drama", "Action"])];
        let json = serde_json::to_string(&tally_genres(&movies)).unwrap();
        assert_eq!(json, r#"{"Thriller":1,"Drama":2,"Action":1}"#);
    }

    #[test]
    fn no_movies_is_an_empty_object() {
        let json = serde_json::to_string(&tally_genres(&[])).unwrap();
        assert_eq!(json, "{}");
    }
}
