//! The GitHub Actions trigger context.
//!
//! The commit to watch depends on the triggering event:
//!
//! | Event | Commit |
//! |-------|--------|
//! | `pull_request` | `pull_request.head.sha` from the event payload |
//! | anything else | `GITHUB_SHA` |
//!
//! For `pull_request` events `GITHUB_SHA` is the synthetic merge commit, which
//! CI does not report against.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::types::{InvalidRepoId, InvalidSha, RepoId, Sha};

/// Errors resolving the trigger context.
#[derive(Debug, Error)]
pub enum ContextError {
    /// A required environment variable is unset or empty.
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),

    /// The event payload file could not be read.
    #[error("failed to read event payload {path}: {source}")]
    ReadPayload {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The event payload is not a pull_request payload.
    #[error("failed to parse pull_request payload {path}: {source}")]
    ParsePayload {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    InvalidSha(#[from] InvalidSha),

    #[error(transparent)]
    InvalidRepo(#[from] InvalidRepoId),
}

/// Where the run was triggered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerContext {
    /// The triggering event, e.g. `push` or `pull_request`.
    pub event_name: String,

    /// The repository the workflow runs in.
    pub repo: RepoId,

    /// The commit whose checks are watched.
    pub sha: Sha,

    /// API root for GitHub Enterprise Server, if set.
    pub api_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PullRequestPayload {
    pull_request: PullRequestRef,
}

#[derive(Debug, Deserialize)]
struct PullRequestRef {
    head: HeadRef,
}

#[derive(Debug, Deserialize)]
struct HeadRef {
    sha: String,
}

impl TriggerContext {
    /// Reads the context from the process environment.
    pub fn from_env() -> Result<Self, ContextError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the context through `lookup`, treating empty values as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ContextError> {
        let var = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ContextError::MissingVar(name))
        };

        let event_name = var("GITHUB_EVENT_NAME")?;
        let repo = RepoId::parse(&var("GITHUB_REPOSITORY")?)?;
        let sha = if event_name == "pull_request" {
            pull_request_head_sha(Path::new(&var("GITHUB_EVENT_PATH")?))?
        } else {
            Sha::parse(var("GITHUB_SHA")?)?
        };
        let api_url = var("GITHUB_API_URL").ok();

        Ok(TriggerContext {
            event_name,
            repo,
            sha,
            api_url,
        })
    }
}

/// Reads `pull_request.head.sha` from an event payload file.
pub fn pull_request_head_sha(path: &Path) -> Result<Sha, ContextError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ContextError::ReadPayload {
        path: path.to_path_buf(),
        source,
    })?;
    let payload: PullRequestPayload =
        serde_json::from_str(&raw).map_err(|source| ContextError::ParsePayload {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(Sha::parse(payload.pull_request.head.sha)?)
}
