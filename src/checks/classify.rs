//! Classification of raw records into pending, succeeded or failed.
//!
//! Statuses and check runs use different field names and different terminal
//! vocabularies, so each has its own two-tier test: first "is it still
//! running", then "is the terminal value one of the known failures".
//!
//! Any terminal value not listed as a failure counts as success. A state GitHub
//! introduces later therefore reads as green until it is added here.

use serde::{Deserialize, Serialize};

use super::record::{CheckRunRecord, StatusRecord};

/// The status `state` of a check that has not reported a result yet.
pub const STATUS_PENDING: &str = "pending";

/// Status `state` values that count as failures.
pub const STATUS_FAILURE_STATES: [&str; 2] = ["error", "failure"];

/// The check-run `status` of a finished run.
pub const CHECK_RUN_COMPLETED: &str = "completed";

/// Check-run `conclusion` values that count as failures.
pub const CHECK_RUN_FAILURE_CONCLUSIONS: [&str; 3] = ["cancelled", "failure", "timed_out"];

/// The state of a status or check run at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckState {
    /// Not finished yet.
    Pending,
    /// Finished with a non-failure result.
    Succeeded,
    /// Finished with a failure result.
    Failed,
}

impl CheckState {
    /// Returns true if no further transition is expected.
    pub fn is_terminal(&self) -> bool {
        matches!(self, CheckState::Succeeded | CheckState::Failed)
    }
}

/// Classifies a commit status.
///
/// | `state` | Result |
/// |---------|--------|
/// | `pending` | `Pending` |
/// | `error` / `failure` | `Failed` |
/// | anything else | `Succeeded` |
pub fn classify_status(status: &StatusRecord) -> CheckState {
    if status.state == STATUS_PENDING {
        CheckState::Pending
    } else if STATUS_FAILURE_STATES.contains(&status.state.as_str()) {
        CheckState::Failed
    } else {
        CheckState::Succeeded
    }
}

/// Classifies a check run.
///
/// | `status` | `conclusion` | Result |
/// |----------|--------------|--------|
/// | not `completed` | any | `Pending` |
/// | `completed` | `cancelled` / `failure` / `timed_out` | `Failed` |
/// | `completed` | anything else, or none | `Succeeded` |
pub fn classify_check_run(run: &CheckRunRecord) -> CheckState {
    if run.status != CHECK_RUN_COMPLETED {
        return CheckState::Pending;
    }

    match run.conclusion.as_deref() {
        Some(conclusion) if CHECK_RUN_FAILURE_CONCLUSIONS.contains(&conclusion) => {
            CheckState::Failed
        }
        _ => CheckState::Succeeded,
    }
}
