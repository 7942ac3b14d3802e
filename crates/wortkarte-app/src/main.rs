use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::signal;
use wortkarte_config::Config;
use wortkarte_core::types::Tier;

pub mod controller;
pub mod events;
pub mod profile;
pub mod state;

#[cfg(test)]
mod tests {
    mod session_flow_tests;
}

use self::controller::AppController;
use self::state::AppState;

/// Vocabulary flashcards in the terminal
#[derive(Debug, Parser)]
#[command(name = "wortkarte", version, about)]
struct Args {
    /// Level preselected on the start screen (A, B or C)
    #[arg(short, long)]
    tier: Option<Tier>,

    /// Profile JSON file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding vocabulary.json and examples.json
    #[arg(long)]
    data_dir: Option<String>,

    /// Fetch resources over HTTP from this base URL instead of the data directory
    #[arg(long)]
    base_url: Option<String>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Errors only
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let Some(tier) = self.tier {
            config.quiz.default_tier = tier;
        }
        if let Some(data_dir) = &self.data_dir {
            config.data.data_dir = data_dir.clone();
        }
        if let Some(base_url) = &self.base_url {
            config.data.base_url = Some(base_url.clone());
        }
    }
}

fn main() {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("wortkarte error: failed to start runtime: {e}");
            std::process::exit(1);
        }
    };

    let result = runtime.block_on(run());

    // stdin is read on a blocking thread that only returns on the next line
    runtime.shutdown_timeout(Duration::from_millis(100));

    if let Err(e) = result {
        eprintln!("wortkarte error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("wortkarte: ignoring .env: {e}");
        }
    }

    let args = Args::parse();
    init_tracing(args.quiet, args.verbose)?;

    let mut config = profile::load_config(args.config.as_deref())?;
    args.apply(&mut config);
    if !atty::is(atty::Stream::Stdout) {
        config.ui.color = false;
    }
    tracing::debug!("Config: {:?}", config);

    let channel_capacity = config.channel_capacity;
    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state, channel_capacity);
    let mut tasks = controller.spawn_tasks();

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::info!("Task finished, shutting down"),
                Ok(Err(e)) => tracing::error!("Task failed: {e:#}"),
                Err(e) => tracing::error!("Task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    tasks.abort_all();
    while tasks.join_next().await.is_some() {}

    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("WORTKARTE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
