use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use combined_status_check::cli::Args;
use combined_status_check::context::TriggerContext;
use combined_status_check::github::OctocrabClient;
use combined_status_check::poll::{PollOutcome, Poller, TokioSleeper};
use combined_status_check::report;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "combined_status_check=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    match run(&args).await {
        Ok(outcome) => {
            for line in report::annotations(&outcome) {
                println!("{}", line);
            }
            if let Some(path) = std::env::var_os("GITHUB_OUTPUT") {
                if let Err(e) = report::write_outputs(Path::new(&path), &outcome) {
                    warn!(error = %e, "Failed to write step outputs");
                }
            }
            ExitCode::from(report::exit_code(&outcome))
        }
        Err(e) => {
            error!("{:#}", e);
            println!("{}", report::error_annotation(&format!("{:#}", e)));
            ExitCode::from(report::EXIT_FATAL)
        }
    }
}

async fn run(args: &Args) -> anyhow::Result<PollOutcome> {
    let context = TriggerContext::from_env().context("resolving trigger context")?;
    let config = args.poll_config(context.sha.clone())?;

    info!(
        event = %context.event_name,
        repo = %context.repo,
        "Executing combined-status-check on SHA {}.",
        config.sha
    );

    let client = OctocrabClient::from_token(
        args.token.clone(),
        context.api_url.as_deref(),
        context.repo.clone(),
    )
    .context("building GitHub client")?;

    let outcome = Poller::new(&client, &TokioSleeper, &config).run().await?;
    Ok(outcome)
}
