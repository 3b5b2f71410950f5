//! Command-line and action-input configuration.
//!
//! Every option falls back to the `INPUT_*` variable GitHub Actions sets for
//! the matching action input, so the binary runs unchanged as an action step
//! or from a shell.

use clap::Parser;

use crate::poll::{ConfigError, PollConfig};
use crate::types::Sha;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "combined-status-check",
    version,
    about = "Wait for every matching commit status and check run to finish"
)]
pub struct Args {
    /// GitHub token with statuses:read and checks:read
    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Seconds to wait before the first poll
    #[arg(long, env = "INPUT_INITIAL-DELAY-SECONDS")]
    pub initial_delay_seconds: u64,

    /// Seconds between polls while checks are pending
    #[arg(long, env = "INPUT_INTERVAL-SECONDS")]
    pub interval_seconds: u64,

    /// Give up once this many seconds have been spent waiting
    #[arg(long, env = "INPUT_TIMEOUT-SECONDS")]
    pub timeout_seconds: u64,

    /// Only statuses whose context matches this regex are considered
    #[arg(long, env = "INPUT_STATUS-REGEX")]
    pub status_regex: String,

    /// Only check runs whose name matches this regex are considered
    #[arg(long, env = "INPUT_CHECK-RUN-REGEX")]
    pub check_run_regex: String,
}

impl Args {
    /// Builds the poll configuration for `sha`.
    pub fn poll_config(&self, sha: Sha) -> Result<PollConfig, ConfigError> {
        PollConfig::from_patterns(
            sha,
            self.initial_delay_seconds,
            self.interval_seconds,
            self.timeout_seconds,
            &self.status_regex,
            &self.check_run_regex,
        )
    }
}
