//! Polling configuration.
//!
//! # Polling Strategy
//!
//! - **Initial delay**: slept once before the first tick so checks triggered
//!   by the same push have time to register.
//! - **Interval**: fixed wait between ticks while anything is pending. No
//!   jitter and no backoff.
//! - **Timeout**: compared against the summed intervals after each wait.

use std::time::Duration;

use regex::Regex;
use thiserror::Error;

use crate::types::Sha;

/// Errors from building a [`PollConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The interval between ticks must be at least one second.
    #[error("interval must be a positive number of seconds")]
    ZeroInterval,

    /// A name pattern did not compile.
    #[error("invalid {which} pattern {pattern:?}: {source}")]
    InvalidPattern {
        which: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Configuration for one polling run against a single commit.
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// The commit whose checks are watched.
    pub sha: Sha,

    /// Wait before the first tick.
    pub initial_delay: Duration,

    /// Wait between ticks while anything is pending.
    pub interval: Duration,

    /// Elapsed waiting time at which the run gives up.
    pub timeout: Duration,

    /// Statuses whose context does not match are ignored.
    pub status_filter: Regex,

    /// Check runs whose name does not match are ignored.
    pub check_run_filter: Regex,
}

impl PollConfig {
    /// Creates a configuration, rejecting a zero interval.
    pub fn new(
        sha: Sha,
        initial_delay_secs: u64,
        interval_secs: u64,
        timeout_secs: u64,
        status_filter: Regex,
        check_run_filter: Regex,
    ) -> Result<Self, ConfigError> {
        if interval_secs == 0 {
            return Err(ConfigError::ZeroInterval);
        }

        Ok(PollConfig {
            sha,
            initial_delay: Duration::from_secs(initial_delay_secs),
            interval: Duration::from_secs(interval_secs),
            timeout: Duration::from_secs(timeout_secs),
            status_filter,
            check_run_filter,
        })
    }

    /// Creates a configuration from uncompiled name patterns.
    pub fn from_patterns(
        sha: Sha,
        initial_delay_secs: u64,
        interval_secs: u64,
        timeout_secs: u64,
        status_pattern: &str,
        check_run_pattern: &str,
    ) -> Result<Self, ConfigError> {
        let status_filter = compile("status", status_pattern)?;
        let check_run_filter = compile("check run", check_run_pattern)?;
        Self::new(
            sha,
            initial_delay_secs,
            interval_secs,
            timeout_secs,
            status_filter,
            check_run_filter,
        )
    }
}

fn compile(which: &'static str, pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
        which,
        pattern: pattern.to_string(),
        source,
    })
}
