use thiserror::Error;

/// Errors returned by the TMDB client.
///
/// Upstream error *payloads* (a 401 with `status_message`, say) are not
/// errors here; they are decoded like any other body.
#[derive(Debug, Error)]
pub enum TmdbError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured base URL, or a URL built from it, did not parse.
    #[error("invalid TMDB URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The response body was not JSON, or did not match the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
