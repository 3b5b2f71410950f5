//! Fetch-and-filter routines, one per record kind.
//!
//! Each routine drains every page of its listing, drops records whose name
//! does not match the configured pattern, and splits the rest into pending and
//! completed. Errors from the source are returned as-is; nothing is retried.

use std::future::Future;

use regex::Regex;
use tracing::{debug, info};

use crate::types::Sha;

use super::classify::CheckState;
use super::record::{CheckRecord, CheckRunRecord, StatusRecord};
use super::source::{CommitChecks, Page};

/// The matching records of one listing, split by whether they have finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<T> {
    /// Matching records that are still running.
    pub pending: Vec<T>,

    /// Matching records that reached a terminal state.
    pub completed: Vec<T>,

    /// Records seen across all pages, including those the filter dropped.
    pub total: usize,
}

impl<T> Default for Partition<T> {
    fn default() -> Self {
        Partition {
            pending: Vec::new(),
            completed: Vec::new(),
            total: 0,
        }
    }
}

impl<T: CheckRecord> Partition<T> {
    /// Number of records that matched the filter.
    pub fn kept(&self) -> usize {
        self.pending.len() + self.completed.len()
    }

    /// Returns true if any matching record is still running.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Names of completed records that failed, in listing order.
    pub fn failed_names(&self) -> Vec<String> {
        self.completed
            .iter()
            .filter(|record| record.state() == CheckState::Failed)
            .map(|record| record.name().to_string())
            .collect()
    }

    fn push(&mut self, record: T) {
        if record.state() == CheckState::Pending {
            self.pending.push(record);
        } else {
            self.completed.push(record);
        }
    }
}

/// Fetches every commit status for `sha` whose context matches `filter`.
pub async fn fetch_statuses<S: CommitChecks>(
    source: &S,
    sha: &Sha,
    filter: &Regex,
) -> Result<Partition<StatusRecord>, S::Error> {
    let partition = drain_pages(move |page| source.status_page(sha, page), filter).await?;

    info!(
        total = partition.total,
        kept = partition.kept(),
        "Found {} total statuses, keeping {}.",
        partition.total,
        partition.kept()
    );

    Ok(partition)
}

/// Fetches every check run for `sha` whose name matches `filter`.
pub async fn fetch_check_runs<S: CommitChecks>(
    source: &S,
    sha: &Sha,
    filter: &Regex,
) -> Result<Partition<CheckRunRecord>, S::Error> {
    let partition = drain_pages(move |page| source.check_run_page(sha, page), filter).await?;

    info!(
        total = partition.total,
        kept = partition.kept(),
        "Found {} total check runs, keeping {}.",
        partition.total,
        partition.kept()
    );

    Ok(partition)
}

/// Requests pages starting at 1 until the source reports no successor.
///
/// An empty page also ends the listing, so a source that keeps claiming more
/// pages without returning anything cannot spin forever.
async fn drain_pages<T, E, F, Fut>(mut next_page: F, filter: &Regex) -> Result<Partition<T>, E>
where
    T: CheckRecord,
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Page<T>, E>>,
{
    let mut partition = Partition::default();
    let mut page = 1u32;

    loop {
        let Page { items, has_next } = next_page(page).await?;
        let is_empty = items.is_empty();
        partition.total += items.len();

        for record in items {
            if filter.is_match(record.name()) {
                partition.push(record);
            }
        }

        if !has_next || is_empty {
            debug!(pages = page, "Listing drained");
            break;
        }
        page += 1;
    }

    Ok(partition)
}
