mod directors;
mod movies;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use auteur_tmdb::{TmdbClient, TmdbError};

use crate::middleware::{request_id, REQUEST_ID_HEADER};

#[derive(Clone)]
pub struct AppState {
    pub tmdb: Arc<TmdbClient>,
    /// Fan-out limit for the per-film aggregates.
    pub max_concurrent: usize,
}

impl AppState {
    pub fn new(tmdb: TmdbClient, max_concurrent: usize) -> Self {
        Self {
            tmdb: Arc::new(tmdb),
            max_concurrent: max_concurrent.max(1),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

/// Body returned when the proxy itself fails to produce a result.
///
/// Upstream error payloads never take this path; they are relayed verbatim.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(self)).into_response()
    }
}

pub(super) fn map_upstream_error(request_id: String, error: &TmdbError) -> ApiError {
    tracing::error!(request_id = %request_id, error = %error, "TMDB request failed");
    ApiError::new(request_id, "upstream_error", "upstream request failed")
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(REQUEST_ID_HEADER)])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/search_director", get(directors::search_director))
        .route("/popular_directors", get(directors::popular_directors))
        .route("/director/{id}", get(directors::director_details))
        .route("/director/{id}/images", get(directors::director_images))
        .route("/director/{id}/movies", get(directors::director_movies))
        .route("/director/{id}/genres", get(directors::director_genres))
        .route(
            "/director/{id}/collaborators",
            get(directors::director_collaborators),
        )
        .route("/movie/{id}", get(movies::movie_details))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(HealthData { status: "ok" })
}
