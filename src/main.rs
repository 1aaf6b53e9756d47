use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use community_labeller::action::{self, Conclusion, Invocation};

#[derive(Parser)]
#[command(
    name = "community-labeller",
    about = "Label issues and pull requests opened by people outside your organisations"
)]
struct Cli {
    /// Path to a configuration file supplying the action inputs
    #[arg(short, long)]
    config: Option<String>,

    /// Event payload to read instead of GITHUB_EVENT_PATH
    #[arg(long)]
    event_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Step debug logging turns on debug output
    let default_filter = match std::env::var("RUNNER_DEBUG").as_deref() {
        Ok("1") => "debug",
        _ => "info",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("Failed to install tracing subscriber")?;

    let cli = Cli::parse();

    tracing::info!("Starting community labeller");

    let invocation = Invocation {
        config_path: cli.config,
        event_path: cli.event_path,
    };

    let result = action::label(&invocation).await;
    if let Err(e) = &result {
        tracing::error!(kind = ?e.kind(), error = %e, "Labeller failed");
    }

    Ok(Conclusion::from_result(&result).emit())
}
