//! Commit status and check-run listings over the GitHub REST API.
//!
//! - Statuses: `GET /repos/{owner}/{repo}/commits/{ref}/status` (combined
//!   status, which lists the latest status per context)
//! - Check runs: `GET /repos/{owner}/{repo}/commits/{ref}/check-runs`
//!
//! Both are requested at the maximum page size. A page ends the listing when
//! it is short or when the running count reaches the reported `total_count`.

use serde::Deserialize;
use tracing::trace;

use crate::checks::{CheckRunRecord, CommitChecks, Page, StatusRecord};
use crate::types::Sha;

use super::client::OctocrabClient;
use super::error::GitHubApiError;

/// Page size requested from both listings (GitHub's maximum).
pub const PER_PAGE: u32 = 100;

#[derive(Debug, Deserialize)]
struct CombinedStatusResponse {
    #[serde(default)]
    total_count: Option<u64>,
    #[serde(default)]
    statuses: Vec<StatusRecord>,
}

#[derive(Debug, Deserialize)]
struct CheckRunsResponse {
    #[serde(default)]
    total_count: Option<u64>,
    #[serde(default)]
    check_runs: Vec<CheckRunRecord>,
}

impl CommitChecks for OctocrabClient {
    type Error = GitHubApiError;

    async fn status_page(&self, sha: &Sha, page: u32) -> Result<Page<StatusRecord>, Self::Error> {
        let url = listing_url(self.owner(), self.repo_name(), sha, "status", page);
        trace!(%url, "Requesting status page");

        let response: CombinedStatusResponse = self
            .inner()
            .get(&url, None::<&()>)
            .await
            .map_err(|e| {
                GitHubApiError::from_octocrab(format!("listing statuses for {}", sha.short()), e)
            })?;

        let has_next = has_next_page(page, response.statuses.len(), response.total_count);
        Ok(Page::new(response.statuses, has_next))
    }

    async fn check_run_page(
        &self,
        sha: &Sha,
        page: u32,
    ) -> Result<Page<CheckRunRecord>, Self::Error> {
        let url = listing_url(self.owner(), self.repo_name(), sha, "check-runs", page);
        trace!(%url, "Requesting check run page");

        let response: CheckRunsResponse = self
            .inner()
            .get(&url, None::<&()>)
            .await
            .map_err(|e| {
                GitHubApiError::from_octocrab(format!("listing check runs for {}", sha.short()), e)
            })?;

        let has_next = has_next_page(page, response.check_runs.len(), response.total_count);
        Ok(Page::new(response.check_runs, has_next))
    }
}

fn listing_url(owner: &str, repo: &str, sha: &Sha, listing: &str, page: u32) -> String {
    format!(
        "/repos/{}/{}/commits/{}/{}?per_page={}&page={}",
        urlencoding::encode(owner),
        urlencoding::encode(repo),
        urlencoding::encode(sha.as_str()),
        listing,
        PER_PAGE,
        page
    )
}

/// Decides whether another page follows page `page` (1-indexed) that held
/// `items` records.
///
/// This is a pure function extracted for testability.
pub fn has_next_page(page: u32, items: usize, total_count: Option<u64>) -> bool {
    if items < PER_PAGE as usize {
        return false;
    }
    match total_count {
        Some(total) => u64::from(page) * u64::from(PER_PAGE) < total,
        None => true,
    }
}
