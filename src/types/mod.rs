//! Core identifier types.

pub mod ids;

pub use ids::{InvalidRepoId, InvalidSha, RepoId, Sha};
