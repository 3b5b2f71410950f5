//! The paginated source of statuses and check runs for a commit.
//!
//! The trait-based seam lets the poll loop run against the GitHub API in
//! production and against scripted in-memory listings in tests.

use std::future::Future;

use crate::types::Sha;

use super::record::{CheckRunRecord, StatusRecord};

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// The records on this page.
    pub items: Vec<T>,

    /// Whether another page follows this one.
    pub has_next: bool,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, has_next: bool) -> Self {
        Page { items, has_next }
    }

    /// A page with no successor.
    pub fn last(items: Vec<T>) -> Self {
        Page::new(items, false)
    }
}

/// Lists the statuses and check runs reported against a commit.
///
/// Pages are 1-indexed. Implementations are read-only against the remote
/// listings; one instance is shared by both fetchers within a tick.
pub trait CommitChecks {
    /// The error type returned when a page cannot be fetched.
    type Error;

    /// Fetch one page of commit statuses for `sha`.
    fn status_page(
        &self,
        sha: &Sha,
        page: u32,
    ) -> impl Future<Output = Result<Page<StatusRecord>, Self::Error>> + Send;

    /// Fetch one page of check runs for `sha`.
    fn check_run_page(
        &self,
        sha: &Sha,
        page: u32,
    ) -> impl Future<Output = Result<Page<CheckRunRecord>, Self::Error>> + Send;
}
