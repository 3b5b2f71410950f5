//! GitHub API client and the commit-check listings built on it.
//!
//! This module provides the octocrab-backed implementation of
//! [`CommitChecks`](crate::checks::CommitChecks). Requests are not retried: a
//! failed page surfaces as a [`GitHubApiError`] and ends the run.

mod checks;
mod client;
mod error;

pub use checks::{PER_PAGE, has_next_page};
pub use client::OctocrabClient;
pub use error::GitHubApiError;
