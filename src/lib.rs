//! # GuardianOS
//!
//! Admin dashboard for a civic-safety platform: incident reports, SOS
//! alerts and citizen accounts, rendered as a terminal console.
//!
//! ## Features
//!
//! - **Live dashboard**: periodic refresh of complaint and SOS statistics
//!   from the backend REST API
//! - **Reports and users**: list/detail views over seed records
//! - **Heat map**: layered incident intensity field with toggles
//! - **Stub backend**: an in-memory implementation of the three endpoints
//!   the dashboard polls
//!
//! ## Modules
//!
//! - [`model`]: Domain records and backend wire shapes
//! - [`fixtures`]: Built-in seed data
//! - [`backend`]: HTTP client for the dashboard endpoints
//! - [`sync`]: Interval refresh loop and dashboard state
//! - [`views`]: Navigation and per-page view state
//! - [`tui`]: ratatui front end
//! - [`server`]: Stub backend with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use guardian::backend::{BackendClient, BackendConfig};
//! use guardian::sync::{DashboardSync, SyncConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BackendClient::new(BackendConfig::default())?;
//!     let handle = DashboardSync::start(Arc::new(client), SyncConfig::default());
//!
//!     tokio::time::sleep(std::time::Duration::from_secs(1)).await;
//!     let state = handle.snapshot().await;
//!     if let Some(stats) = state.stats {
//!         println!("{} reports in total", stats.total_reports);
//!     }
//!
//!     handle.stop().await;
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod config;
pub mod fixtures;
pub mod logging;
pub mod model;
pub mod server;
pub mod sync;
pub mod tui;
pub mod views;

// Re-export top-level types for convenience
pub use backend::{BackendClient, BackendConfig, BackendError, DashboardSource};

pub use config::{Config, ConfigError, ConfigOrigin, LoggingConfig};

pub use model::{
    ComplaintStats, DashboardStats, RecentComplaint, RecordId, Report, SosStats, User,
};

pub use sync::{DashboardState, DashboardSync, SyncConfig, SyncHandle};

pub use server::{build_router, serve, AppState, ServerError, StubStore};
