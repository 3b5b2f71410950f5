//! The poll loop.
//!
//! Each tick fetches both listings concurrently and waits for both before
//! deciding anything. An error from either listing ends the run immediately;
//! there is no partial-tick recovery and no retry beyond the fixed cadence.

use tracing::{error, info, instrument};

use crate::checks::{CommitChecks, fetch_check_runs, fetch_statuses};

use super::config::PollConfig;
use super::outcome::{LoopState, PollOutcome, PollState, TickDecision, TickSnapshot};
use super::sleep::Sleeper;

/// Drives the poll loop for one commit.
#[derive(Debug)]
pub struct Poller<'a, S, Z> {
    source: &'a S,
    sleeper: &'a Z,
    config: &'a PollConfig,
}

impl<'a, S, Z> Poller<'a, S, Z>
where
    S: CommitChecks,
    Z: Sleeper,
{
    pub fn new(source: &'a S, sleeper: &'a Z, config: &'a PollConfig) -> Self {
        Poller {
            source,
            sleeper,
            config,
        }
    }

    /// Sleeps the initial delay, then polls until a terminal state.
    pub async fn run(&self) -> Result<PollOutcome, S::Error> {
        info!(
            "Waiting {} seconds for checks to start...",
            self.config.initial_delay.as_secs()
        );
        self.sleeper.sleep(self.config.initial_delay).await;

        self.poll().await
    }

    /// Polls until every matching check is terminal or the timeout is reached.
    #[instrument(skip_all, fields(sha = %self.config.sha.short()))]
    pub async fn poll(&self) -> Result<PollOutcome, S::Error> {
        info!("Starting combined status check loop...");

        let mut state = LoopState::default();

        loop {
            let snapshot = self.tick().await?;
            let decision = snapshot.decide();

            if decision == TickDecision::Wait {
                info!(
                    pending_statuses = snapshot.statuses.pending.len(),
                    pending_check_runs = snapshot.check_runs.pending.len(),
                    interval_secs = self.config.interval.as_secs(),
                    "Waiting for {} statuses and {} check runs to complete, checking again in {} seconds.",
                    snapshot.statuses.pending.len(),
                    snapshot.check_runs.pending.len(),
                    self.config.interval.as_secs()
                );
                self.sleeper.sleep(self.config.interval).await;
            }

            match state.apply(decision, self.config.interval, self.config.timeout) {
                PollState::Waiting { .. } => continue,
                PollState::Succeeded => {
                    info!("All statuses and check runs have completed successfully.");
                    return Ok(PollOutcome::Succeeded);
                }
                PollState::Failed(failed) => {
                    if !failed.statuses.is_empty() {
                        error!(
                            "The following statuses have failed: {}",
                            failed.statuses.join(", ")
                        );
                    }
                    if !failed.check_runs.is_empty() {
                        error!(
                            "The following check runs have failed: {}",
                            failed.check_runs.join(", ")
                        );
                    }
                    return Ok(PollOutcome::Failed(failed));
                }
                PollState::TimedOut { elapsed } => {
                    error!(
                        elapsed_secs = elapsed.as_secs(),
                        "Timed out after {} seconds.",
                        self.config.timeout.as_secs()
                    );
                    return Ok(PollOutcome::TimedOut {
                        timeout: self.config.timeout,
                        elapsed,
                    });
                }
            }
        }
    }

    /// Fetches both listings concurrently.
    ///
    /// Both results are resolved before this returns; if either fails the
    /// other is dropped and the error is returned.
    pub async fn tick(&self) -> Result<TickSnapshot, S::Error> {
        let sha = &self.config.sha;
        let (statuses, check_runs) = tokio::try_join!(
            fetch_statuses(self.source, sha, &self.config.status_filter),
            fetch_check_runs(self.source, sha, &self.config.check_run_filter),
        )?;

        Ok(TickSnapshot::new(statuses, check_runs))
    }
}
