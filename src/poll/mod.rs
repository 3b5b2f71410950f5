//! The poll loop and its configuration.
//!
//! Each tick fetches the commit's statuses and check runs concurrently, then
//! either waits another interval, reports failures, reports success, or gives
//! up once the accumulated waiting time reaches the timeout.

mod config;
mod orchestrator;
mod outcome;
mod sleep;

pub use config::{ConfigError, PollConfig};
pub use orchestrator::Poller;
pub use outcome::{FailedChecks, LoopState, PollOutcome, PollState, TickDecision, TickSnapshot};
pub use sleep::{Sleeper, TokioSleeper};
