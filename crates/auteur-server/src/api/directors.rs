use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::Deserialize;
use serde_json::Value;

use auteur_insights::{Collaborators, Filmography, Tally};

use crate::middleware::RequestId;

use super::{map_upstream_error, ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct SearchQuery {
    pub name: Option<String>,
}

pub(super) async fn search_director(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Value>, ApiError> {
    state
        .tmdb
        .search_person(query.name.as_deref())
        .await
        .map(Json)
        .map_err(|e| map_upstream_error(req_id.0, &e))
}

pub(super) async fn director_details(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(person_id): Path<u64>,
) -> Result<Json<Value>, ApiError> {
    state
        .tmdb
        .person_details(person_id)
        .await
        .map(Json)
        .map_err(|e| map_upstream_error(req_id.0, &e))
}

pub(super) async fn director_images(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(person_id): Path<u64>,
) -> Result<Json<Value>, ApiError> {
    state
        .tmdb
        .person_images(person_id)
        .await
        .map(Json)
        .map_err(|e| map_upstream_error(req_id.0, &e))
}

pub(super) async fn popular_directors(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<Value>, ApiError> {
    state
        .tmdb
        .popular_people()
        .await
        .map(Json)
        .map_err(|e| map_upstream_error(req_id.0, &e))
}

pub(super) async fn director_movies(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(person_id): Path<u64>,
) -> Result<Json<Filmography>, ApiError> {
    auteur_insights::director_filmography(&state.tmdb, person_id)
        .await
        .map(Json)
        .map_err(|e| map_upstream_error(req_id.0, &e))
}

pub(super) async fn director_genres(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(person_id): Path<u64>,
) -> Result<Json<Tally<String>>, ApiError> {
    auteur_insights::director_genres(&state.tmdb, person_id, state.max_concurrent)
        .await
        .map(Json)
        .map_err(|e| map_upstream_error(req_id.0, &e))
}

pub(super) async fn director_collaborators(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(person_id): Path<u64>,
) -> Result<Json<Collaborators>, ApiError> {
    auteur_insights::director_collaborators(&state.tmdb, person_id, state.max_concurrent)
        .await
        .map(Json)
        .map_err(|e| map_upstream_error(req_id.0, &e))
}
