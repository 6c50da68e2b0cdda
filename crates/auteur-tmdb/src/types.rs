//! TMDB response shapes used by the aggregation pipeline.
//!
//! Every collection is `#[serde(default)]` so that TMDB's error envelope
//! (`{"success": false, "status_code": 7, ...}`) decodes to empty lists
//! instead of failing the request. Person and credit identities are optional
//! too: an incomplete entry is skipped where it is counted rather than failing
//! the whole payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// /person/{id}/movie_credits
// ---------------------------------------------------------------------------

/// Wrapper for `/person/{id}/movie_credits`. Only the crew side is read.
#[derive(Debug, Default, Deserialize)]
pub struct PersonMovieCredits {
    #[serde(default)]
    pub crew: Vec<PersonCredit>,
}

/// One crew credit of a person on a movie.
///
/// Fields the pipeline does not interpret are kept in `extra` and written
/// back out unchanged, so filmography entries carry the full upstream record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonCredit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default)]
    pub job: Option<String>,
    /// Raw upstream date; `None` when missing or `null`.
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ---------------------------------------------------------------------------
// /movie/{id}
// ---------------------------------------------------------------------------

/// The genre list of `/movie/{id}`; everything else is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct MovieGenres {
    #[serde(default)]
    pub genres: Vec<Genre>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Genre {
    #[serde(default)]
    pub id: u64,
    pub name: String,
}

// ---------------------------------------------------------------------------
// /movie/{id}/credits
// ---------------------------------------------------------------------------

/// Cast and crew of one movie.
#[derive(Debug, Default, Deserialize)]
pub struct MovieCredits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CastMember {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CrewMember {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub job: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
}
