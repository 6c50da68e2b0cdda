//! Director-level aggregates built from TMDB credits.
//!
//! Each aggregate starts from a person's directing credits and, for genres
//! and collaborators, fans out one upstream call per film. Fan-out runs with
//! bounded concurrency but results are folded in filmography order, so the
//! output is identical to a sequential walk.

pub mod collaborators;
pub mod filmography;
pub mod genres;
pub mod tally;

mod fanout;

pub use collaborators::{
    director_collaborators, rank_collaborators, Collaborator, Collaborators, TOP_COLLABORATORS,
};
pub use filmography::{
    build_filmography, directing_credits, director_filmography, fetch_directing_credits,
    Filmography, DIRECTOR_JOB,
};
pub use genres::{director_genres, tally_genres};
pub use tally::Tally;
