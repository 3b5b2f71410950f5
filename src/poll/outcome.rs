//! Tick snapshots and the poll state machine.
//!
//! A tick produces a [`TickSnapshot`]; the snapshot yields a [`TickDecision`];
//! the decision, applied to the [`LoopState`], yields the next [`PollState`].
//! Every step here is pure so the transitions can be tested without a source
//! or a clock.
//!
//! # Transitions
//!
//! | Decision | Condition | Next state |
//! |----------|-----------|------------|
//! | `Wait` | `elapsed + interval < timeout` | `Waiting` |
//! | `Wait` | `elapsed + interval >= timeout` | `TimedOut` |
//! | `Fail` | - | `Failed` |
//! | `Succeed` | - | `Succeeded` |
//!
//! The timeout is only consulted on `Wait`, so a tick that resolves after the
//! nominal deadline still reports its success or failure.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::checks::{CheckRunRecord, Partition, StatusRecord};

/// The matching records of both listings at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickSnapshot {
    pub statuses: Partition<StatusRecord>,
    pub check_runs: Partition<CheckRunRecord>,
}

impl TickSnapshot {
    pub fn new(statuses: Partition<StatusRecord>, check_runs: Partition<CheckRunRecord>) -> Self {
        TickSnapshot {
            statuses,
            check_runs,
        }
    }

    /// Returns true if any matching status or check run is still running.
    pub fn has_pending(&self) -> bool {
        self.statuses.has_pending() || self.check_runs.has_pending()
    }

    /// Names of failed checks from both listings.
    pub fn failed(&self) -> FailedChecks {
        FailedChecks {
            statuses: self.statuses.failed_names(),
            check_runs: self.check_runs.failed_names(),
        }
    }

    /// What this tick means for the loop.
    pub fn decide(&self) -> TickDecision {
        if self.has_pending() {
            return TickDecision::Wait;
        }

        let failed = self.failed();
        if failed.is_empty() {
            TickDecision::Succeed
        } else {
            TickDecision::Fail(failed)
        }
    }
}

/// Names of failed checks, kept apart by listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedChecks {
    pub statuses: Vec<String>,
    pub check_runs: Vec<String>,
}

impl FailedChecks {
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty() && self.check_runs.is_empty()
    }
}

/// The decision a single tick reaches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickDecision {
    /// Something is still pending.
    Wait,
    /// Nothing is pending and at least one check failed.
    Fail(FailedChecks),
    /// Nothing is pending and nothing failed.
    Succeed,
}

/// State of the poll loop between ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollState {
    /// Waiting for the next tick.
    Waiting { elapsed: Duration },
    /// Every matching check finished without failure.
    Succeeded,
    /// Every matching check finished and some failed.
    Failed(FailedChecks),
    /// Checks were still pending when the timeout was reached.
    TimedOut { elapsed: Duration },
}

/// Elapsed waiting time, owned by the poll loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopState {
    pub elapsed: Duration,
}

impl LoopState {
    /// Applies a tick's decision.
    ///
    /// For `Wait`, the caller has already slept `interval`; it is added to the
    /// elapsed time before comparing against `timeout`.
    pub fn apply(
        &mut self,
        decision: TickDecision,
        interval: Duration,
        timeout: Duration,
    ) -> PollState {
        match decision {
            TickDecision::Wait => {
                self.elapsed += interval;
                if self.elapsed >= timeout {
                    PollState::TimedOut {
                        elapsed: self.elapsed,
                    }
                } else {
                    PollState::Waiting {
                        elapsed: self.elapsed,
                    }
                }
            }
            TickDecision::Fail(failed) => PollState::Failed(failed),
            TickDecision::Succeed => PollState::Succeeded,
        }
    }
}

/// The terminal result of a polling run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// All matching statuses and check runs completed successfully.
    Succeeded,

    /// All matching checks completed and these failed.
    Failed(FailedChecks),

    /// Checks were still pending after the configured timeout.
    TimedOut {
        /// The configured timeout.
        timeout: Duration,
        /// Total time spent waiting between ticks.
        elapsed: Duration,
    },
}

impl PollOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, PollOutcome::Succeeded)
    }
}
