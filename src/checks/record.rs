//! Raw status and check-run records as returned by the GitHub API.
//!
//! Lifecycle fields are kept as the strings GitHub sent. Interpreting them is
//! the classifier's job, so a value this crate has never seen still flows
//! through instead of failing deserialization.

use serde::{Deserialize, Serialize};

use super::classify::{CheckState, classify_check_run, classify_status};

/// A commit status (legacy Status API).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    /// The context (name) of the status, e.g. "ci/jenkins".
    pub context: String,

    /// The status state: `pending`, `success`, `failure` or `error`.
    pub state: String,
}

impl StatusRecord {
    pub fn new(context: impl Into<String>, state: impl Into<String>) -> Self {
        StatusRecord {
            context: context.into(),
            state: state.into(),
        }
    }
}

/// A check run (Checks API).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRunRecord {
    /// The check run name, e.g. "lint".
    pub name: String,

    /// Lifecycle status: `queued`, `in_progress`, `completed`, ...
    pub status: String,

    /// Outcome once completed: `success`, `failure`, `cancelled`, ...
    #[serde(default)]
    pub conclusion: Option<String>,
}

impl CheckRunRecord {
    /// A check run that has not finished yet.
    pub fn in_progress(name: impl Into<String>) -> Self {
        CheckRunRecord {
            name: name.into(),
            status: "in_progress".to_string(),
            conclusion: None,
        }
    }

    /// A finished check run with the given conclusion.
    pub fn completed(name: impl Into<String>, conclusion: impl Into<String>) -> Self {
        CheckRunRecord {
            name: name.into(),
            status: "completed".to_string(),
            conclusion: Some(conclusion.into()),
        }
    }
}

/// A record that can be filtered by name and classified.
pub trait CheckRecord {
    /// The name the configured pattern is matched against.
    fn name(&self) -> &str;

    /// The record's state at this instant.
    fn state(&self) -> CheckState;
}

impl CheckRecord for StatusRecord {
    fn name(&self) -> &str {
        &self.context
    }

    fn state(&self) -> CheckState {
        classify_status(self)
    }
}

impl CheckRecord for CheckRunRecord {
    fn name(&self) -> &str {
        &self.name
    }

    fn state(&self) -> CheckState {
        classify_check_run(self)
    }
}
