//! GuardianOS Stub API
//!
//! Serves the dashboard read endpoints from seeded fixture data.
//!
//! Run with: cargo run --bin guardian-stub-api
//!
//! Environment variables `GUARDIAN_SERVER_HOST` / `GUARDIAN_SERVER_PORT`
//! and `RUST_LOG` apply; flags take precedence.

use std::path::PathBuf;

use clap::Parser;

use guardian::config::{Config, ConfigOrigin};
use guardian::logging::{self, LogSink};
use guardian::server::{serve, AppState, StubStore};

#[derive(Parser, Debug)]
#[command(name = "guardian-stub-api")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Fixture-backed stand-in for the GuardianOS backend")]
struct Args {
    /// Config file (default: search standard locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(long, short)]
    port: Option<u16>,

    /// Start with no records
    #[arg(long)]
    empty: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (mut config, origin) = match &args.config {
        Some(path) => (Config::load_with_env(path)?, ConfigOrigin::explicit(path)),
        None => Config::load_default(),
    };
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    logging::init(&config.logging, LogSink::Stderr)?;
    origin.log();

    tracing::info!("Starting GuardianOS stub API v{}", env!("CARGO_PKG_VERSION"));

    let store = if args.empty {
        StubStore::new()
    } else {
        StubStore::seeded(chrono::Utc::now())
    };
    tracing::info!(
        complaints = store.complaint_count(),
        alerts = store.alert_count(),
        "Fixture store ready"
    );

    serve(AppState::new(store), &config.server).await?;

    tracing::info!("GuardianOS stub API stopped");
    Ok(())
}
