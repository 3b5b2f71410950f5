//! Shared test utilities: arbitrary generators for property-based testing and
//! scripted in-memory stand-ins for the GitHub listings and the sleeper.

use std::future::{Future, ready};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use proptest::prelude::*;
use thiserror::Error;

use crate::checks::{CheckRunRecord, CommitChecks, Page, StatusRecord};
use crate::poll::Sleeper;
use crate::types::Sha;

pub fn arb_check_name() -> impl Strategy<Value = String> {
    prop_oneof![
        "ci/[a-z]{1,10}".prop_map(String::from),
        "docs/[a-z]{1,10}".prop_map(String::from),
        "[a-z][a-z0-9_-]{0,15}".prop_map(String::from),
    ]
}

/// Known status states plus arbitrary strings GitHub has never sent.
pub fn arb_status_state() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("pending".to_string()),
        Just("success".to_string()),
        Just("failure".to_string()),
        Just("error".to_string()),
        "[a-z_]{0,12}".prop_map(String::from),
    ]
}

pub fn arb_check_run_status() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("completed".to_string()),
        Just("queued".to_string()),
        Just("in_progress".to_string()),
        Just("waiting".to_string()),
        "[a-z_]{0,12}".prop_map(String::from),
    ]
}

pub fn arb_conclusion() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop_oneof![
        Just("success".to_string()),
        Just("failure".to_string()),
        Just("cancelled".to_string()),
        Just("timed_out".to_string()),
        Just("neutral".to_string()),
        Just("skipped".to_string()),
        Just("action_required".to_string()),
        "[a-z_]{0,12}".prop_map(String::from),
    ])
}

pub fn arb_status_record() -> impl Strategy<Value = StatusRecord> {
    (arb_check_name(), arb_status_state()).prop_map(|(context, state)| StatusRecord { context, state })
}

pub fn arb_check_run_record() -> impl Strategy<Value = CheckRunRecord> {
    (arb_check_name(), arb_check_run_status(), arb_conclusion()).prop_map(
        |(name, status, conclusion)| CheckRunRecord {
            name,
            status,
            conclusion,
        },
    )
}

/// Error returned by [`FakeChecks`] when a tick is scripted to fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("scripted {0} listing failure")]
pub struct FakeError(pub &'static str);

/// The remote state for one tick: the pages each listing returns.
#[derive(Debug, Clone, Default)]
pub struct FakeTick {
    pub status_pages: Vec<Vec<StatusRecord>>,
    pub check_run_pages: Vec<Vec<CheckRunRecord>>,
    pub fail_statuses: bool,
    pub fail_check_runs: bool,
}

impl FakeTick {
    pub fn with_statuses(self, statuses: Vec<StatusRecord>) -> Self {
        self.with_status_pages(vec![statuses])
    }

    pub fn with_status_pages(mut self, pages: Vec<Vec<StatusRecord>>) -> Self {
        self.status_pages = pages;
        self
    }

    pub fn with_check_runs(self, runs: Vec<CheckRunRecord>) -> Self {
        self.with_check_run_pages(vec![runs])
    }

    pub fn with_check_run_pages(mut self, pages: Vec<Vec<CheckRunRecord>>) -> Self {
        self.check_run_pages = pages;
        self
    }

    pub fn failing_statuses(mut self) -> Self {
        self.fail_statuses = true;
        self
    }

    pub fn failing_check_runs(mut self) -> Self {
        self.fail_check_runs = true;
        self
    }
}

/// Scripted [`CommitChecks`] implementation.
///
/// A request for page 1 starts the next tick for that listing. Once the script
/// runs out, the last tick repeats.
#[derive(Debug, Default)]
pub struct FakeChecks {
    ticks: Vec<FakeTick>,
    status_ticks: AtomicUsize,
    check_run_ticks: AtomicUsize,
    status_requests: Mutex<Vec<u32>>,
    check_run_requests: Mutex<Vec<u32>>,
    claim_more_pages: bool,
}

impl FakeChecks {
    pub fn new(ticks: Vec<FakeTick>) -> Self {
        FakeChecks {
            ticks,
            ..Self::default()
        }
    }

    /// Every page claims a successor, even the empty ones.
    pub fn claiming_more_pages(mut self) -> Self {
        self.claim_more_pages = true;
        self
    }

    /// Page numbers requested from the status listing, in order.
    pub fn status_pages_requested(&self) -> Vec<u32> {
        self.status_requests.lock().unwrap().clone()
    }

    /// Page numbers requested from the check-run listing, in order.
    pub fn check_run_pages_requested(&self) -> Vec<u32> {
        self.check_run_requests.lock().unwrap().clone()
    }

    /// Number of ticks that started a status listing.
    pub fn status_ticks(&self) -> usize {
        self.status_ticks.load(Ordering::SeqCst)
    }

    fn tick_for(&self, counter: &AtomicUsize, page: u32) -> &FakeTick {
        let started = if page == 1 {
            counter.fetch_add(1, Ordering::SeqCst) + 1
        } else {
            counter.load(Ordering::SeqCst)
        };
        let index = started.saturating_sub(1).min(self.ticks.len().saturating_sub(1));
        &self.ticks[index]
    }

    fn page_of<T: Clone>(&self, pages: &[Vec<T>], page: u32) -> Page<T> {
        let index = page as usize - 1;
        let items = pages.get(index).cloned().unwrap_or_default();
        let has_next = self.claim_more_pages || index + 1 < pages.len();
        Page::new(items, has_next)
    }
}

impl CommitChecks for FakeChecks {
    type Error = FakeError;

    fn status_page(
        &self,
        _sha: &Sha,
        page: u32,
    ) -> impl Future<Output = Result<Page<StatusRecord>, Self::Error>> + Send {
        self.status_requests.lock().unwrap().push(page);
        let tick = self.tick_for(&self.status_ticks, page);
        let result = if tick.fail_statuses {
            Err(FakeError("status"))
        } else {
            Ok(self.page_of(&tick.status_pages, page))
        };
        ready(result)
    }

    fn check_run_page(
        &self,
        _sha: &Sha,
        page: u32,
    ) -> impl Future<Output = Result<Page<CheckRunRecord>, Self::Error>> + Send {
        self.check_run_requests.lock().unwrap().push(page);
        let tick = self.tick_for(&self.check_run_ticks, page);
        let result = if tick.fail_check_runs {
            Err(FakeError("check run"))
        } else {
            Ok(self.page_of(&tick.check_run_pages, page))
        };
        ready(result)
    }
}

/// A [`Sleeper`] that records requested durations and returns immediately.
#[derive(Debug, Default)]
pub struct RecordingSleeper {
    sleeps: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }

    pub fn total(&self) -> Duration {
        self.sleeps().into_iter().sum()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        self.sleeps.lock().unwrap().push(duration);
        ready(())
    }
}
