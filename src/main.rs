//! GuardianOS Console
//!
//! Terminal dashboard for the GuardianOS incident platform.
//!
//! Run with: cargo run --bin guardian -- --demo

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use guardian::backend::{BackendClient, DashboardSource};
use guardian::config::{Config, ConfigOrigin};
use guardian::logging::{self, LogSink};
use guardian::server::StubStore;
use guardian::sync::SyncConfig;
use guardian::tui::{self, App};

#[derive(Parser, Debug)]
#[command(name = "guardian")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Terminal admin dashboard for GuardianOS")]
struct Args {
    /// Config file (default: search standard locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Backend API base URL (overrides config)
    #[arg(long)]
    api_url: Option<String>,

    /// Dashboard refresh interval in seconds (overrides config)
    #[arg(long)]
    refresh_secs: Option<u64>,

    /// Use built-in fixture data instead of the backend API
    #[arg(long, short)]
    demo: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (mut config, origin) = match &args.config {
        Some(path) => (Config::load_with_env(path)?, ConfigOrigin::explicit(path)),
        None => Config::load_default(),
    };
    if let Some(url) = args.api_url {
        config.backend.base_url = url;
    }
    if let Some(secs) = args.refresh_secs {
        config.dashboard.refresh_interval_secs = secs;
    }

    let log_path = config.logging.tui_log_path();
    logging::init(&config.logging, LogSink::File(log_path.clone()))
        .with_context(|| format!("Failed to set up logging at {:?}", log_path))?;
    origin.log();

    tracing::info!("GuardianOS console v{}", env!("CARGO_PKG_VERSION"));

    let source: Arc<dyn DashboardSource> = if args.demo {
        tracing::info!("Demo mode: serving dashboard from fixtures");
        Arc::new(StubStore::seeded(chrono::Utc::now()))
    } else {
        tracing::info!(url = %config.backend.base_url, "Using backend API");
        Arc::new(BackendClient::new(config.backend.client_config())?)
    };

    let sync_config = SyncConfig {
        interval: config.dashboard.refresh_interval(),
    };

    tui::run(App::new(source, sync_config, args.demo)).await
}
