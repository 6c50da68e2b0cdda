//! Most frequent actors and writers across a director's films.

use std::collections::HashMap;

use auteur_tmdb::{MovieCredits, TmdbClient, TmdbError};
use serde::Serialize;

use crate::fanout::fetch_in_order;
use crate::filmography::directed_movie_ids;
use crate::tally::Tally;

/// Length cap of each ranked list.
pub const TOP_COLLABORATORS: usize = 6;

/// Crew jobs counted as writing credits.
const WRITER_JOBS: [&str; 2] = ["Writer", "Screenplay"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collaborator {
    pub id: u64,
    pub name: String,
    pub count: usize,
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Collaborators {
    pub actors: Vec<Collaborator>,
    pub writers: Vec<Collaborator>,
}

/// Identity used for counting. The name is part of the key so the ranked
/// output needs no extra lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct PersonKey {
    id: u64,
    name: String,
}

/// Appearance counts plus the first profile image seen per person id.
#[derive(Debug, Default)]
struct CollaboratorTally {
    counts: Tally<PersonKey>,
    images: HashMap<u64, String>,
}

impl CollaboratorTally {
    /// Counts one appearance. Entries without an id or a name are skipped.
    fn record(&mut self, id: Option<u64>, name: Option<&str>, profile_path: Option<&str>) {
        let (Some(id), Some(name)) = (id, name) else {
            return;
        };
        self.counts.increment(PersonKey {
            id,
            name: name.to_owned(),
        });
        if let Some(path) = profile_path.filter(|p| !p.is_empty()) {
            self.images.entry(id).or_insert_with(|| path.to_owned());
        }
    }

    fn top(&self, n: usize) -> Vec<Collaborator> {
        self.counts
            .most_common(n)
            .into_iter()
            .map(|(key, count)| Collaborator {
                id: key.id,
                name: key.name.clone(),
                count,
                profile_path: self.images.get(&key.id).cloned(),
            })
            .collect()
    }
}

/// Ranks cast and writing crew over films given in filmography order.
///
/// The order of `films` decides both tie-breaks and which profile image is
/// kept, so callers must not reorder it.
#[must_use]
pub fn rank_collaborators(films: &[MovieCredits]) -> Collaborators {
    let mut actors = CollaboratorTally::default();
    let mut writers = CollaboratorTally::default();

    for film in films {
        for member in &film.cast {
            actors.record(
                member.id,
                member.name.as_deref(),
                member.profile_path.as_deref(),
            );
        }
        for member in film
            .crew
            .iter()
            .filter(|m| m.job.as_deref().is_some_and(|job| WRITER_JOBS.contains(&job)))
        {
            writers.record(
                member.id,
                member.name.as_deref(),
                member.profile_path.as_deref(),
            );
        }
    }

    Collaborators {
        actors: actors.top(TOP_COLLABORATORS),
        writers: writers.top(TOP_COLLABORATORS),
    }
}

/// `GET /director/{id}/collaborators`.
///
/// # Errors
///
/// Returns [`TmdbError`] if any upstream call fails.
pub async fn director_collaborators(
    client: &TmdbClient,
    person_id: u64,
    max_concurrent: usize,
) -> Result<Collaborators, TmdbError> {
    let movie_ids = directed_movie_ids(client, person_id).await?;

    let films = fetch_in_order(movie_ids, max_concurrent, |movie_id| {
        client.movie_credits(movie_id)
    })
    .await?;

    let ranked = rank_collaborators(&films);
    tracing::debug!(
        person_id,
        films = films.len(),
        actors = ranked.actors.len(),
        writers = ranked.writers.len(),
        "ranked director collaborators"
    );
    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn film(cast: Value, crew: Value) -> MovieCredits {
        serde_json::from_value(json!({ "cast": cast, "crew": crew })).expect("valid credits")
    }

    fn actor(id: u64, name: &str, profile_path: Option<&str>) -> Value {
        json!({"id": id, "name": name, "profile_path": profile_path})
    }

    fn crew(id: u64, name: &str, job: &str, profile_path: Option<&str>) -> Value {
        json!({"id": id, "name": name, "job": job, "profile_path": profile_path})
    }

    #[test]
    fn frequent_actor_ranks_first() {
        let regular = actor(1, "Regular", Some("/regular.jpg"));
        let guest = actor(2, "Guest", None);
        let films = vec![
            film(json!([guest]), json!([])),
            film(json!([regular.clone()]), json!([])),
            film(json!([regular.clone()]), json!([])),
            film(json!([regular]), json!([])),
        ];

        let ranked = rank_collaborators(&films);
        let names: Vec<&str> = ranked.actors.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Regular", "Guest"]);
        assert_eq!(ranked.actors[0].count, 3);
        assert_eq!(ranked.actors[1].count, 1);
    }

    #[test]
    fn ties_keep_first_encountered_order() {
        let films = vec![
            film(json!([actor(30, "C", None), actor(10, "A", None)]), json!([])),
            film(json!([actor(20, "B", None)]), json!([])),
        ];
        let ids: Vec<u64> = rank_collaborators(&films)
            .actors
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![30, 10, 20]);
    }

    #[test]
    fn lists_are_capped() {
        let cast: Vec<Value> = (1..=10)
            .map(|id| actor(id, &format!("Actor {id}"), None))
            .collect();
        let writers: Vec<Value> = (1..=10)
            .map(|id| crew(100 + id, &format!("Writer {id}"), "Writer", None))
            .collect();
        let ranked = rank_collaborators(&[film(json!(cast), json!(writers))]);
        assert_eq!(ranked.actors.len(), TOP_COLLABORATORS);
        assert_eq!(ranked.writers.len(), TOP_COLLABORATORS);
        assert_eq!(ranked.actors.last().map(|c| c.id), Some(6));
    }

    #[test]
    fn first_non_empty_image_wins() {
        let films = vec![
            film(json!([actor(1, "A", None)]), json!([])),
            film(json!([actor(1, "A", Some(""))]), json!([])),
            film(json!([actor(1, "A", Some("/first.jpg"))]), json!([])),
            film(json!([actor(1, "A", None)]), json!([])),
            film(json!([actor(1, "A", Some("/second.jpg"))]), json!([])),
        ];
        let ranked = rank_collaborators(&films);
        assert_eq!(ranked.actors[0].count, 5);
        assert_eq!(ranked.actors[0].profile_path.as_deref(), Some("/first.jpg"));
    }

    #[test]
    fn only_writing_jobs_count_as_writers() {
        let films = vec![film(
            json!([]),
            json!([
                crew(1, "Scribe", "Writer", Some("/scribe.jpg")),
                crew(2, "Adapter", "Screenplay", None),
                crew(3, "Novelist", "Novel", None),
                crew(4, "Boss", "Director", None),
                {"id": 5, "name": "Jobless"}
            ]),
        )];
        let ranked = rank_collaborators(&films);
        let ids: Vec<u64> = ranked.writers.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert!(ranked.actors.is_empty());
    }

    #[test]
    fn writer_and_actor_images_are_tracked_separately() {
        let films = vec![film(
            json!([actor(1, "Both", None)]),
            json!([crew(1, "Both", "Writer", Some("/writer.jpg"))]),
        )];
        let ranked = rank_collaborators(&films);
        assert!(ranked.actors[0].profile_path.is_none());
        assert_eq!(
            ranked.writers[0].profile_path.as_deref(),
            Some("/writer.jpg")
        );
    }

    #[test]
    fn incomplete_entries_are_skipped() {
        let films = vec![film(
            json!([{"name": "No Id"}, actor(1, "Lead", None), {"id": 2, "name": null}]),
            json!([
                {"id": 3, "name": null, "job": "Director of Photography"},
                {"id": 4, "job": "Writer"},
                crew(5, "Scribe", "Screenplay", None)
            ]),
        )];
        let ranked = rank_collaborators(&films);
        let actors: Vec<u64> = ranked.actors.iter().map(|c| c.id).collect();
        let writers: Vec<u64> = ranked.writers.iter().map(|c| c.id).collect();
        assert_eq!(actors, vec![1]);
        assert_eq!(writers, vec![5]);
    }

    #[test]
    fn same_id_with_different_names_counts_separately() {
        let films = vec![
            film(json!([actor(1, "Old Name", Some("/p.jpg"))]), json!([])),
            film(json!([actor(1, "New Name", None)]), json!([])),
        ];
        let ranked = rank_collaborators(&films);
        assert_eq!(ranked.actors.len(), 2);
        assert_eq!(ranked.actors[1].profile_path.as_deref(), Some("/p.jpg"));
    }

    #[test]
    fn no_films_is_empty() {
        assert_eq!(
            serde_json::to_value(rank_collaborators(&[])).unwrap(),
            json!({"actors": [], "writers": []})
        );
    }
}
