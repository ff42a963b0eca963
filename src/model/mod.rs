//! Domain model
//!
//! Records shown by the dashboard and the wire shapes of the backend
//! endpoints it polls.
//!
//! - [`types`]: reports, users and activity log entries with their closed
//!   enumerations
//! - [`dashboard`]: aggregate statistics and recent-complaint records

pub mod dashboard;
pub mod types;

pub use dashboard::{
    display_count, format_count, ComplaintStats, DashboardStats, RecentComplaint, RecordId, SosStats,
};
pub use types::{
    ActivityKind, ActivityLog, Category, Coordinates, Report, ReportStatus, User, Verification,
};
