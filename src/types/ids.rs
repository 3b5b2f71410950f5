//! Newtype wrappers for domain identifiers.
//!
//! These keep commit SHAs and repository coordinates from being passed around
//! as bare strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A git commit SHA.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sha(String);

/// Error returned when a string is not a plausible commit SHA.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid commit SHA {0:?}: expected 4 to 64 hex characters")]
pub struct InvalidSha(pub String);

impl Sha {
    /// Creates a new Sha from a string.
    ///
    /// Note: This does not validate the format. Use [`Sha::parse`] for input
    /// coming from outside the process.
    pub fn new(s: impl Into<String>) -> Self {
        Sha(s.into())
    }

    /// Parses a SHA, accepting abbreviated and SHA-256 object names.
    pub fn parse(s: impl AsRef<str>) -> Result<Self, InvalidSha> {
        let s = s.as_ref().trim();
        let valid = (4..=64).contains(&s.len()) && s.chars().all(|c| c.is_ascii_hexdigit());
        if valid {
            Ok(Sha(s.to_ascii_lowercase()))
        } else {
            Err(InvalidSha(s.to_string()))
        }
    }

    /// Returns the SHA as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns a short (7-character) version of the SHA for display.
    pub fn short(&self) -> &str {
        self.0.get(..7).unwrap_or(&self.0)
    }
}

impl fmt::Display for Sha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A repository identifier (owner/repo format).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoId {
    pub owner: String,
    pub repo: String,
}

/// Error returned when a repository slug is not of the form `owner/repo`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid repository {0:?}: expected owner/repo")]
pub struct InvalidRepoId(pub String);

impl RepoId {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        RepoId {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Parses an `owner/repo` slug such as the one in `GITHUB_REPOSITORY`.
    pub fn parse(slug: &str) -> Result<Self, InvalidRepoId> {
        match slug.trim().split_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
                Ok(RepoId::new(owner, repo))
            }
            _ => Err(InvalidRepoId(slug.to_string())),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
