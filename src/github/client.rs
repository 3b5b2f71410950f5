//! Octocrab client wrapper scoped to a specific repository.
//!
//! Both listings the poll loop reads are repo-scoped, so the repository is
//! fixed at construction and the [`CommitChecks`](crate::checks::CommitChecks)
//! methods only take a commit.

use octocrab::Octocrab;
use octocrab::service::middleware::retry::RetryConfig;

use crate::types::RepoId;

/// A GitHub API client scoped to a specific repository.
#[derive(Clone)]
pub struct OctocrabClient {
    /// The underlying octocrab client.
    client: Octocrab,

    /// The repository this client is scoped to.
    repo: RepoId,
}

impl OctocrabClient {
    /// Creates a new client scoped to the given repository.
    pub fn new(client: Octocrab, repo: RepoId) -> Self {
        Self { client, repo }
    }

    /// Creates a client from a GitHub token.
    ///
    /// `base_uri` overrides the API root, e.g. the `GITHUB_API_URL` of a
    /// GitHub Enterprise Server instance. Octocrab's built-in retry layer is
    /// disabled; a failed request ends the run.
    pub fn from_token(
        token: impl Into<String>,
        base_uri: Option<&str>,
        repo: RepoId,
    ) -> Result<Self, octocrab::Error> {
        let mut builder = Octocrab::builder().add_retry_config(RetryConfig::None);
        if let Some(uri) = base_uri {
            builder = builder.base_uri(uri)?;
        }
        let token: String = token.into();
        let client = builder.personal_token(token).build()?;
        Ok(Self::new(client, repo))
    }

    /// Returns a reference to the underlying octocrab client.
    pub fn inner(&self) -> &Octocrab {
        &self.client
    }

    /// Returns the repository owner.
    pub fn owner(&self) -> &str {
        &self.repo.owner
    }

    /// Returns the repository name.
    pub fn repo_name(&self) -> &str {
        &self.repo.repo
    }
}

impl std::fmt::Debug for OctocrabClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OctocrabClient")
            .field("repo", &self.repo)
            .finish_non_exhaustive()
    }
}
