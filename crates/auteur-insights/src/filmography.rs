//! Directing filmography, newest first.

use auteur_core::format_release_date;
use auteur_tmdb::{PersonCredit, TmdbClient, TmdbError};
use serde::Serialize;

/// Crew `job` value that marks a directing credit.
pub const DIRECTOR_JOB: &str = "Director";

/// Sort key for credits without a release date. Collates below any real date.
const MISSING_DATE: &str = "0";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Filmography {
    pub latest_film: Option<PersonCredit>,
    pub filmography: Vec<PersonCredit>,
}

/// Keeps the credits whose job is exactly [`DIRECTOR_JOB`], in upstream order.
#[must_use]
pub fn directing_credits(crew: Vec<PersonCredit>) -> Vec<PersonCredit> {
    crew.into_iter()
        .filter(|credit| credit.job.as_deref() == Some(DIRECTOR_JOB))
        .collect()
}

/// Builds the filmography from a person's raw crew credits.
///
/// Sorting compares the raw date strings, so it has to happen before the
/// dates are rewritten for display.
#[must_use]
pub fn build_filmography(crew: Vec<PersonCredit>) -> Filmography {
    let mut films = directing_credits(crew);

    films.sort_by(|a, b| raw_date(b).cmp(raw_date(a)));

    for film in &mut films {
        film.release_date = Some(format_release_date(film.release_date.as_deref()));
    }

    Filmography {
        latest_film: films.first().cloned(),
        filmography: films,
    }
}

fn raw_date(credit: &PersonCredit) -> &str {
    credit.release_date.as_deref().unwrap_or(MISSING_DATE)
}

/// Fetches a person's movie credits and keeps the directing ones.
///
/// # Errors
///
/// Returns [`TmdbError`] if the upstream call fails.
pub async fn fetch_directing_credits(
    client: &TmdbClient,
    person_id: u64,
) -> Result<Vec<PersonCredit>, TmdbError> {
    let credits = client.person_movie_credits(person_id).await?;
    let directed = directing_credits(credits.crew);
    tracing::debug!(person_id, films = directed.len(), "resolved directing credits");
    Ok(directed)
}

/// Movie ids of a person's directing credits in filmography order, one per
/// credit. Credits without an id have no movie to fetch and are dropped.
pub(crate) async fn directed_movie_ids(
    client: &TmdbClient,
    person_id: u64,
) -> Result<Vec<u64>, TmdbError> {
    let credits = fetch_directing_credits(client, person_id).await?;
    let ids: Vec<u64> = credits.iter().filter_map(|credit| credit.id).collect();
    if ids.len() < credits.len() {
        tracing::debug!(
            person_id,
            skipped = credits.len() - ids.len(),
            "directing credits without a movie id"
        );
    }
    Ok(ids)
}

/// `GET /director/{id}/movies`.
///
/// # Errors
///
/// Returns [`TmdbError`] if the upstream call fails.
pub async fn director_filmography(
    client: &TmdbClient,
    person_id: u64,
) -> Result<Filmography, TmdbError> {
    let credits = client.person_movie_credits(person_id).await?;
    Ok(build_filmography(credits.crew))
}
