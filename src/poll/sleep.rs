//! Suspend-for-duration, behind a trait so the poll loop can be driven
//! without real time passing.

use std::future::Future;
use std::time::Duration;

/// Suspends the current task.
pub trait Sleeper {
    /// Sleep for approximately `duration`.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Sleeps on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}
