mod alert;
mod catalog;
mod poller;
mod prompt;
#[cfg(test)]
mod test_support;
mod watch;

use clap::{Args, Parser, Subcommand};
use pickupwatch_core::{ConfigError, VariantId};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "pickupwatch")]
#[command(about = "Watch in-store pickup availability and alert the moment stock appears")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Poll the selected variants until interrupted (default)
    Watch(WatchArgs),
    /// Print the variant catalog with part numbers
    Catalog,
    /// Run a single availability round and exit
    Check {
        /// Part number to check, optionally labelled: `MYNF3ZP/A=iPhone 16 Pro`
        #[arg(long = "part", value_name = "PART[=LABEL]", required = true, value_parser = parse_part_arg)]
        parts: Vec<PartArg>,
    },
}

#[derive(Debug, Default, Args)]
struct WatchArgs {
    /// Part number to watch, optionally labelled: `MYNF3ZP/A=iPhone 16 Pro`.
    /// Repeatable; skips the interactive prompt when given.
    #[arg(long = "part", value_name = "PART[=LABEL]", value_parser = parse_part_arg)]
    parts: Vec<PartArg>,

    /// Print check count, hits and running time before every round
    #[arg(long)]
    stats: bool,

    /// Stop after this many rounds instead of running until interrupted
    #[arg(long)]
    rounds: Option<u64>,

    /// Print results only; no desktop notification or sound
    #[arg(long)]
    quiet: bool,
}

/// A part number given on the command line, with an optional display label.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PartArg {
    id: VariantId,
    label: Option<String>,
}

fn parse_part_arg(raw: &str) -> Result<PartArg, ConfigError> {
    let (id, label) = match raw.split_once('=') {
        Some((id, label)) => (id, Some(label.trim()).filter(|l| !l.is_empty())),
        None => (raw, None),
    };
    Ok(PartArg {
        id: VariantId::new(id)?,
        label: label.map(str::to_string),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = pickupwatch_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Watch(args)) => watch::run_watch(&config, args).await,
        Some(Commands::Catalog) => catalog::run_catalog(&config).await,
        Some(Commands::Check { parts }) => watch::run_check(&config, parts).await,
        None => watch::run_watch(&config, WatchArgs::default()).await,
    }
}

/// Resolves once the user asks the process to stop (Ctrl-C, or SIGTERM on unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::debug!("received shutdown signal");
}
