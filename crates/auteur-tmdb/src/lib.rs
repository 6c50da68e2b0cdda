//! Thin client for the TMDB v3 REST API.
//!
//! Raw endpoints return the upstream JSON untouched; the typed helpers decode
//! only the fields the aggregation pipeline needs and default the rest.

pub mod client;
pub mod error;
pub mod types;

pub use client::TmdbClient;
pub use error::TmdbError;
pub use types::{
    CastMember, CrewMember, Genre, MovieCredits, MovieGenres, PersonCredit, PersonMovieCredits,
};
