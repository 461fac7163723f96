#![forbid(unsafe_code)]

//! `mlgame-client`: stdio client binary for the MLGame engine.
//!
//! Reads the init line and per-frame scenes from stdin, drives the bundled
//! template player, and writes `__command__` lines to stdout. Diagnostics go
//! to stderr: the engine echoes any non-command stdout line to its console.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use mlgame_client::config::ClientConfig;
use mlgame_client::player::template::TemplatePlayer;
use mlgame_client::{run_session, AppError, InitArgs, Result};

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "mlgame-client", about = "MLGame stdio client", version, long_about = None)]
struct Cli {
    /// Path to an optional TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log output format on stderr (text or json).
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    /// Per-line read timeout in milliseconds; overrides the config file.
    #[arg(long)]
    read_timeout_ms: Option<u64>,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.log_format)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::Config(format!("failed to build tokio runtime: {err}")))?;
    let outcome = runtime.block_on(run(args));
    // A stdin read parked on the blocking pool must not hold the process open.
    runtime.shutdown_background();
    outcome
}

async fn run(args: Cli) -> Result<()> {
    let mut config = match args.config {
        Some(path) => ClientConfig::load_from_path(path)?,
        None => ClientConfig::default(),
    };
    if let Some(ms) = args.read_timeout_ms {
        config.read_timeout_ms = ms;
    }
    info!(?config, "configuration loaded");

    let player_config = config.player.clone();
    let factory = move |init: InitArgs| Ok::<_, AppError>(TemplatePlayer::new(init, player_config));

    match run_session(tokio::io::stdin(), tokio::io::stdout(), &config, factory).await {
        Ok(never) => match never {},
        Err(err) => {
            error!(%err, "session terminated");
            Err(err)
        }
    }
}

fn init_tracing(log_format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // stdout carries the protocol; logs must never land there.
    let subscriber = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal());

    match log_format {
        LogFormat::Text => subscriber
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
        LogFormat::Json => subscriber
            .json()
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
    }

    Ok(())
}
