//! `tally-app` — the follower aggregation server binary.
//!
//! Usage:
//!   tally-app [-c <config.yaml>] [--listen <addr>]
//!
//! Configuration comes from the YAML file plus `TALLY_`-prefixed environment
//! variables; the file may be absent entirely when the environment carries
//! the RapidAPI key (`TALLY_RAPIDAPI__KEY`).

mod routes;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tally_common::observability::{init_logging, LogConfig};
use tally_config::{TallyConfig, TallyConfigLoader};
use tally_social::SocialHub;
use tracing::info;

/// Follower counter service.
#[derive(Parser, Debug)]
#[command(name = "tally", about = "Social media follower counter service")]
struct Cli {
    /// Path to the YAML config file.
    #[arg(short = 'c', long = "config", default_value = "tally.yaml")]
    config: PathBuf,

    /// Listen address (overrides the configured value).
    #[arg(long = "listen")]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1) Load config (env wins over file).
    let cfg: TallyConfig = TallyConfigLoader::new()
        .with_file_if_exists(&cli.config)
        .load()?;

    let log_path = init_logging(LogConfig::default())?;
    info!(log = %log_path.display(), "logging initialised");

    // The hub is built once; the key is process-wide immutable config.
    let hub = Arc::new(SocialHub::new(&cfg.rapidapi.key));
    let app = routes::build_router(routes::AppState { hub }, &cfg.server.allowed_origins)?;

    let listen = cli.listen.unwrap_or(cfg.server.listen);
    let listener = tokio::net::TcpListener::bind(&listen).await?;
    info!("follower service listening on {listen}");
    axum::serve(listener, app).await?;

    Ok(())
}
