//! Commit checks: the two record kinds GitHub reports against a commit, how
//! each is classified, and how a full listing is fetched and filtered.
//!
//! GitHub has two independent mechanisms for reporting CI results:
//!
//! - **Statuses** (legacy commit status API): a `context` name and a single
//!   `state` field (`pending`, `success`, `failure`, `error`).
//! - **Check runs** (Checks API): a `name`, a lifecycle `status` field and,
//!   once `completed`, a `conclusion`.
//!
//! The two vocabularies are classified separately, see [`classify`].

pub mod classify;
pub mod fetch;
pub mod record;
pub mod source;

pub use classify::{CheckState, classify_check_run, classify_status};
pub use fetch::{Partition, fetch_check_runs, fetch_statuses};
pub use record::{CheckRecord, CheckRunRecord, StatusRecord};
pub use source::{CommitChecks, Page};
