//! Translating a poll outcome into what GitHub Actions understands: workflow
//! command annotations on stdout, step outputs in `$GITHUB_OUTPUT`, and the
//! process exit code.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use crate::poll::PollOutcome;

/// Exit code when every matching check succeeded.
pub const EXIT_SUCCESS: u8 = 0;

/// Exit code when a check failed or the run timed out.
pub const EXIT_CHECKS_NOT_GREEN: u8 = 1;

/// Exit code for configuration, context, or API errors.
pub const EXIT_FATAL: u8 = 2;

/// Escapes a workflow command message (`%`, `\r`, `\n`).
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Formats an `::error::` workflow command.
pub fn error_annotation(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

/// The annotations to print for an outcome.
pub fn annotations(outcome: &PollOutcome) -> Vec<String> {
    match outcome {
        PollOutcome::Succeeded => Vec::new(),
        PollOutcome::Failed(failed) => {
            let mut lines = Vec::new();
            if !failed.statuses.is_empty() {
                lines.push(error_annotation(&format!(
                    "The following statuses have failed: {}",
                    failed.statuses.join(", ")
                )));
            }
            if !failed.check_runs.is_empty() {
                lines.push(error_annotation(&format!(
                    "The following check runs have failed: {}",
                    failed.check_runs.join(", ")
                )));
            }
            lines
        }
        PollOutcome::TimedOut { timeout, .. } => vec![error_annotation(&format!(
            "Timed out after {} seconds.",
            timeout.as_secs()
        ))],
    }
}

/// The step outputs for an outcome, as `(name, value)` pairs.
pub fn outputs(outcome: &PollOutcome) -> Result<Vec<(&'static str, String)>, serde_json::Error> {
    let (result, statuses, check_runs) = match outcome {
        PollOutcome::Succeeded => ("success", &[][..], &[][..]),
        PollOutcome::Failed(failed) => (
            "failure",
            failed.statuses.as_slice(),
            failed.check_runs.as_slice(),
        ),
        PollOutcome::TimedOut { .. } => ("timeout", &[][..], &[][..]),
    };

    Ok(vec![
        ("result", result.to_string()),
        ("failed-statuses", serde_json::to_string(statuses)?),
        ("failed-check-runs", serde_json::to_string(check_runs)?),
    ])
}

/// Appends the outcome's step outputs to the `$GITHUB_OUTPUT` file.
pub fn write_outputs(path: &Path, outcome: &PollOutcome) -> io::Result<()> {
    let outputs = outputs(outcome).map_err(io::Error::other)?;
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    for (name, value) in outputs {
        writeln!(file, "{}={}", name, value)?;
    }
    Ok(())
}

/// The process exit code for an outcome.
pub fn exit_code(outcome: &PollOutcome) -> u8 {
    if outcome.is_success() {
        EXIT_SUCCESS
    } else {
        EXIT_CHECKS_NOT_GREEN
    }
}
