use std::future::Future;

use futures::{stream, StreamExt, TryStreamExt};

use auteur_tmdb::TmdbError;

/// Runs `fetch` for every id with at most `max_concurrent` calls in flight
/// and returns the results in input order.
///
/// Stops at the first error; calls still in flight are dropped.
pub(crate) async fn fetch_in_order<T, F, Fut>(
    ids: Vec<u64>,
    max_concurrent: usize,
    fetch: F,
) -> Result<Vec<T>, TmdbError>
where
    F: FnMut(u64) -> Fut,
    Fut: Future<Output = Result<T, TmdbError>>,
{
    stream::iter(ids)
        .map(fetch)
        .buffered(max_concurrent.max(1))
        .try_collect()
        .await
}
