//! Combined Status Check - waits for the commit statuses and check runs on a
//! single commit to finish, then reports success or the failed checks.
//!
//! The library holds the classification rules, the paginated fetchers, the
//! poll loop, and the GitHub Actions glue used by the binary.

pub mod checks;
pub mod cli;
pub mod context;
pub mod github;
pub mod poll;
pub mod report;
pub mod types;

#[cfg(test)]
pub(crate) mod test_utils;
