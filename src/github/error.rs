//! GitHub API error types.
//!
//! A listing request that fails ends the run. The error keeps the HTTP status
//! (when GitHub sent one) so the final message can tell an operator whether
//! the token lacks a permission, the commit does not exist, or GitHub was
//! unavailable.

use std::fmt;
use thiserror::Error;

/// A failed GitHub API request.
#[derive(Debug, Error)]
pub struct GitHubApiError {
    /// The HTTP status code, if available.
    pub status_code: Option<u16>,

    /// A human-readable description of the error.
    pub message: String,

    /// The underlying octocrab error, if available.
    #[source]
    pub source: Option<octocrab::Error>,
}

impl fmt::Display for GitHubApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status_code {
            Some(code) => write!(f, "GitHub API error (HTTP {}): {}", code, self.message)?,
            None => write!(f, "GitHub API error: {}", self.message)?,
        }
        if let Some(hint) = self.hint() {
            write!(f, " ({})", hint)?;
        }
        Ok(())
    }
}

impl GitHubApiError {
    /// Wraps an octocrab error raised while doing `what`.
    pub fn from_octocrab(what: impl fmt::Display, err: octocrab::Error) -> Self {
        let status_code = extract_status_code(&err);
        let detail = match &err {
            octocrab::Error::GitHub { source, .. } => source.message.clone(),
            other => other.to_string(),
        };

        Self {
            status_code,
            message: format!("{}: {}", what, detail),
            source: Some(err),
        }
    }

    /// A short operator-facing hint for well-known failure statuses.
    pub fn hint(&self) -> Option<&'static str> {
        match self.status_code {
            Some(401) => Some("check that the token is valid"),
            Some(403) if is_rate_limit_error(&self.message) => {
                Some("rate limited; re-run the job later")
            }
            Some(403) => Some("the token needs statuses:read and checks:read"),
            Some(404) => Some("repository or commit not found, or the token cannot see it"),
            Some(422) => Some("the commit reference was rejected"),
            Some(code) if (500..600).contains(&code) => Some("GitHub is unavailable; re-run the job"),
            _ => None,
        }
    }
}

/// Extracts the HTTP status code from an octocrab error, if present.
fn extract_status_code(err: &octocrab::Error) -> Option<u16> {
    match err {
        octocrab::Error::GitHub { source, .. } => Some(source.status_code.as_u16()),
        _ => None,
    }
}

/// Checks if an error message indicates a rate limit.
fn is_rate_limit_error(message: &str) -> bool {
    let message_lower = message.to_lowercase();
    message_lower.contains("rate limit")
        || message_lower.contains("api rate")
        || message_lower.contains("secondary rate")
        || message_lower.contains("abuse detection")
}
