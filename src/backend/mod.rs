//! Backend Data Sources
//!
//! Read access to the GuardianOS backend for the dashboard.
//!
//! ## Architecture
//!
//! - **DashboardSource**: the three reads the dashboard needs
//! - **BackendClient**: REST implementation over reqwest
//! - **StubStore** (in [`crate::server`]): in-process fixture implementation
//!   used by demo mode and tests

mod client;

pub use client::{BackendClient, BackendConfig, BackendError};

use async_trait::async_trait;

use crate::model::{ComplaintStats, RecentComplaint, SosStats};

/// Read-only source of dashboard data
///
/// Every method is an unconditional read with no parameters. Any error is
/// treated by callers as "fetch failed".
#[async_trait]
pub trait DashboardSource: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &str;

    /// `GET /complaints/stats`
    async fn complaint_stats(&self) -> Result<ComplaintStats, BackendError>;

    /// `GET /sos/stats`
    async fn sos_stats(&self) -> Result<SosStats, BackendError>;

    /// `GET /complaints/recent`
    async fn recent_complaints(&self) -> Result<Vec<RecentComplaint>, BackendError>;
}
