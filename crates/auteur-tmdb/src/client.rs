//! HTTP client for the TMDB v3 REST API.
//!
//! Wraps `reqwest` with API key injection and lenient decoding. Upstream
//! status codes are logged but never turned into errors: TMDB's JSON error
//! envelope is returned to the caller like any other payload.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::TmdbError;
use crate::types::{MovieCredits, MovieGenres, PersonMovieCredits};

/// Query parameter carrying the credential on every request.
const API_KEY_PARAM: &str = "api_key";

/// Sub-resources appended to the single-movie detail request.
const MOVIE_EXTRAS: &str = "credits,similar,images";

/// Client for the TMDB REST API.
///
/// The API key and base URL are fixed at construction.
#[derive(Debug)]
pub struct TmdbClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl TmdbClient {
    /// Creates a client against `base_url`, normally
    /// `https://api.themoviedb.org/3`, or a wiremock server in tests.
    ///
    /// # Errors
    ///
    /// Returns [`TmdbError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`TmdbError::InvalidUrl`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(
        api_key: Option<&str>,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, TmdbError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("auteur/0.1 (director-browser)")
            .build()?;

        let base_url = base_url.trim_end_matches('/').to_owned();
        Url::parse(&base_url).map_err(|e| TmdbError::InvalidUrl {
            url: base_url.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.map(ToOwned::to_owned),
            base_url,
        })
    }

    /// Issues a GET against `endpoint` (a path such as `/person/42`) and
    /// returns the decoded JSON body, whatever the upstream status.
    ///
    /// A caller-supplied `api_key` pair is dropped in favour of the
    /// configured one.
    ///
    /// # Errors
    ///
    /// - [`TmdbError::Http`] on network failure or timeout.
    /// - [`TmdbError::Deserialize`] if the body is not JSON.
    /// - [`TmdbError::InvalidUrl`] if `endpoint` produces an unparseable URL.
    pub async fn fetch(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<Value, TmdbError> {
        let url = self.build_url(endpoint, params)?;
        tracing::debug!(endpoint, "TMDB request");

        // `without_url` keeps the api_key out of error messages and logs.
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                endpoint,
                status = status.as_u16(),
                "TMDB returned a non-success status; relaying payload"
            );
        }

        let body = response.text().await.map_err(reqwest::Error::without_url)?;
        serde_json::from_str(&body).map_err(|e| TmdbError::Deserialize {
            context: endpoint.to_string(),
            source: e,
        })
    }

    /// `/search/person`. A missing `query` is simply not sent.
    ///
    /// # Errors
    ///
    /// See [`TmdbClient::fetch`].
    pub async fn search_person(&self, query: Option<&str>) -> Result<Value, TmdbError> {
        let params: Vec<(&str, &str)> = query.map(|q| ("query", q)).into_iter().collect();
        self.fetch("/search/person", &params).await
    }

    /// `/person/{id}`: biography and details.
    ///
    /// # Errors
    ///
    /// See [`TmdbClient::fetch`].
    pub async fn person_details(&self, person_id: u64) -> Result<Value, TmdbError> {
        self.fetch(&format!("/person/{person_id}"), &[]).await
    }

    /// `/person/{id}/images`: profile gallery.
    ///
    /// # Errors
    ///
    /// See [`TmdbClient::fetch`].
    pub async fn person_images(&self, person_id: u64) -> Result<Value, TmdbError> {
        self.fetch(&format!("/person/{person_id}/images"), &[]).await
    }

    /// `/person/popular`.
    ///
    /// # Errors
    ///
    /// See [`TmdbClient::fetch`].
    pub async fn popular_people(&self) -> Result<Value, TmdbError> {
        self.fetch("/person/popular", &[]).await
    }

    /// `/movie/{id}` with credits, similar titles and images appended.
    ///
    /// # Errors
    ///
    /// See [`TmdbClient::fetch`].
    pub async fn movie_with_extras(&self, movie_id: u64) -> Result<Value, TmdbError> {
        self.fetch(
            &format!("/movie/{movie_id}"),
            &[("append_to_response", MOVIE_EXTRAS)],
        )
        .await
    }

    /// Crew credits of a person, decoded.
    ///
    /// # Errors
    ///
    /// See [`TmdbClient::fetch`]; also [`TmdbError::Deserialize`] when a
    /// credit entry has fields of the wrong type.
    pub async fn person_movie_credits(
        &self,
        person_id: u64,
    ) -> Result<PersonMovieCredits, TmdbError> {
        let endpoint = format!("/person/{person_id}/movie_credits");
        let body = self.fetch(&endpoint, &[]).await?;
        decode(body, endpoint)
    }

    /// Genre list of a movie, decoded from the plain `/movie/{id}` payload.
    ///
    /// # Errors
    ///
    /// See [`TmdbClient::fetch`]; also [`TmdbError::Deserialize`] when a
    /// genre lacks its `name`.
    pub async fn movie_genres(&self, movie_id: u64) -> Result<MovieGenres, TmdbError> {
        let endpoint = format!("/movie/{movie_id}");
        let body = self.fetch(&endpoint, &[]).await?;
        decode(body, endpoint)
    }

    /// Cast and crew of a movie, decoded.
    ///
    /// # Errors
    ///
    /// See [`TmdbClient::fetch`]; also [`TmdbError::Deserialize`] when a
    /// member has fields of the wrong type.
    pub async fn movie_credits(&self, movie_id: u64) -> Result<MovieCredits, TmdbError> {
        let endpoint = format!("/movie/{movie_id}/credits");
        let body = self.fetch(&endpoint, &[]).await?;
        decode(body, endpoint)
    }

    /// Builds the request URL with percent-encoded query parameters and the
    /// credential appended last.
    fn build_url(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Url, TmdbError> {
        let raw = format!("{}{endpoint}", self.base_url);
        let mut url = Url::parse(&raw).map_err(|e| TmdbError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params.iter().filter(|(k, _)| *k != API_KEY_PARAM) {
                pairs.append_pair(k, v);
            }
            if let Some(key) = &self.api_key {
                pairs.append_pair(API_KEY_PARAM, key);
            }
        }
        // `query_pairs_mut` leaves a dangling `?` when nothing was appended.
        if url.query() == Some("") {
            url.set_query(None);
        }
        Ok(url)
    }
}

fn decode<T: DeserializeOwned>(body: Value, context: String) -> Result<T, TmdbError> {
    serde_json::from_value(body).map_err(|source| TmdbError::Deserialize { context, source })
}
