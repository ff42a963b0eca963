//! Dashboard Sync State
//!
//! The view-facing state produced by refresh cycles.

use chrono::{DateTime, Utc};

use crate::model::{ComplaintStats, DashboardStats, RecentComplaint, SosStats};

/// The three responses of one refresh cycle
#[derive(Debug, Clone, PartialEq)]
pub struct CycleData {
    pub complaints: ComplaintStats,
    pub sos: SosStats,
    pub recent: Vec<RecentComplaint>,
}

/// State rendered by the dashboard page
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    /// `None` until the first successful cycle
    pub stats: Option<DashboardStats>,
    /// Recent complaints, verbatim from the last successful cycle
    pub recent: Vec<RecentComplaint>,
    /// True until the first cycle completes, success or failure
    pub loading: bool,
    /// Completion time of the last successful cycle
    pub last_refreshed: Option<DateTime<Utc>>,
    /// Message of the latest failed cycle, cleared on success
    pub last_error: Option<String>,
    /// Successful cycles
    pub cycles_completed: u64,
    pub failed_cycles: u64,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            stats: None,
            recent: Vec::new(),
            loading: true,
            last_refreshed: None,
            last_error: None,
            cycles_completed: 0,
            failed_cycles: 0,
        }
    }
}

impl DashboardState {
    /// Replace stats and recent list wholesale with a cycle's result
    pub fn apply_success(&mut self, data: CycleData, at: DateTime<Utc>) {
        self.stats = Some(DashboardStats::from_responses(&data.complaints, &data.sos));
        self.recent = data.recent;
        self.loading = false;
        self.last_refreshed = Some(at);
        self.last_error = None;
        self.cycles_completed += 1;
    }

    /// Record a failed cycle; stats and recent list are left as they were
    pub fn apply_failure(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.last_error = Some(message.into());
        self.failed_cycles += 1;
    }

    /// The data on screen is from before the latest (failed) cycle
    pub fn is_stale(&self) -> bool {
        self.last_error.is_some() && self.stats.is_some()
    }
}
