use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde_json::Value;

use auteur_core::format_release_date;

use crate::middleware::RequestId;

use super::{map_upstream_error, ApiError, AppState};

pub(super) async fn movie_details(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(movie_id): Path<u64>,
) -> Result<Json<Value>, ApiError> {
    let mut movie = state
        .tmdb
        .movie_with_extras(movie_id)
        .await
        .map_err(|e| map_upstream_error(req_id.0, &e))?;

    reformat_release_date(&mut movie);
    Ok(Json(movie))
}

/// Rewrites the top-level `release_date` for display, inserting `"N/A"`
/// when the field is missing. Nested credits and similar titles keep their
/// raw dates.
fn reformat_release_date(movie: &mut Value) {
    if let Some(fields) = movie.as_object_mut() {
        let formatted = format_release_date(fields.get("release_date").and_then(Value::as_str));
        fields.insert("release_date".to_string(), Value::String(formatted));
    }
}
