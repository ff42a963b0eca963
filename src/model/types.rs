//! Core record types for the GuardianOS dashboard
//!
//! - `Report`: a civic incident (crime complaint or SOS)
//! - `User`: a registered citizen account
//! - `ActivityLog`: a display-only audit entry
//!
//! Status, category, verification and activity kind are closed enumerations
//! that serialize with the exact labels the dashboard displays.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A civic incident report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Report {
    /// Display identifier, e.g. `#CR-92841`
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub category: Category,
    /// Free-text location
    pub location: String,
    pub status: ReportStatus,
    /// Display timestamp ("12 mins ago", "Oct 24, 2023 10:45 AM"); never parsed
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, rename = "latLng", skip_serializing_if = "Option::is_none")]
    pub lat_lng: Option<Coordinates>,
}

impl Report {
    /// Create a report without description or coordinates
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: Category,
        location: impl Into<String>,
        status: ReportStatus,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category,
            location: location.into(),
            status,
            timestamp: timestamp.into(),
            description: None,
            lat_lng: None,
        }
    }

    /// Builder method: set description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder method: set coordinates
    pub fn at(mut self, lat: f64, lng: f64) -> Self {
        self.lat_lng = Some(Coordinates { lat, lng });
        self
    }

    /// SOS reports carry an `#SOS-` identifier or the SOS category
    pub fn is_sos(&self) -> bool {
        self.category == Category::SosAlert || self.id.starts_with("#SOS-")
    }
}

/// Geographic coordinate pair
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Incident category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Theft,
    Behavioral,
    Critical,
    Property,
    Burglary,
    Other,
    Traffic,
    #[serde(rename = "SOS ALERT")]
    SosAlert,
}

impl Category {
    /// Get all categories for iteration
    pub fn all() -> &'static [Category] {
        &[
            Category::Theft,
            Category::Behavioral,
            Category::Critical,
            Category::Property,
            Category::Burglary,
            Category::Other,
            Category::Traffic,
            Category::SosAlert,
        ]
    }

    /// Display label
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Theft => "Theft",
            Category::Behavioral => "Behavioral",
            Category::Critical => "Critical",
            Category::Property => "Property",
            Category::Burglary => "Burglary",
            Category::Other => "Other",
            Category::Traffic => "Traffic",
            Category::SosAlert => "SOS ALERT",
        }
    }

    /// Parse a display label. Backend crime types are free-form, so this is
    /// only used for styling.
    pub fn from_label(label: &str) -> Option<Category> {
        Category::all()
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Report status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ReportStatus {
    Dispatched,
    Pending,
    #[serde(rename = "High Priority")]
    HighPriority,
    Resolved,
    Dismissed,
    Investigating,
    #[serde(rename = "Closed (Dispatched)")]
    ClosedDispatched,
}

impl ReportStatus {
    /// Get all statuses for iteration
    pub fn all() -> &'static [ReportStatus] {
        &[
            ReportStatus::Dispatched,
            ReportStatus::Pending,
            ReportStatus::HighPriority,
            ReportStatus::Resolved,
            ReportStatus::Dismissed,
            ReportStatus::Investigating,
            ReportStatus::ClosedDispatched,
        ]
    }

    /// Display label
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Dispatched => "Dispatched",
            ReportStatus::Pending => "Pending",
            ReportStatus::HighPriority => "High Priority",
            ReportStatus::Resolved => "Resolved",
            ReportStatus::Dismissed => "Dismissed",
            ReportStatus::Investigating => "Investigating",
            ReportStatus::ClosedDispatched => "Closed (Dispatched)",
        }
    }

    /// Parse a display label (case-insensitive)
    pub fn from_label(label: &str) -> Option<ReportStatus> {
        ReportStatus::all()
            .iter()
            .copied()
            .find(|s| s.as_str().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A registered citizen account
///
/// The complaint, active and SOS counts are stored as-is; nothing
/// recomputes them from the report list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub verification: Verification,
    pub complaints: u32,
    pub active_count: u32,
    pub sos_count: u32,
    /// Display string, e.g. "Jan 12, 2023"
    pub join_date: String,
    pub avatar: String,
}

/// Account verification state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Verification {
    Verified,
    Pending,
    Unverified,
}

impl Verification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verification::Verified => "Verified",
            Verification::Pending => "Pending",
            Verification::Unverified => "Unverified",
        }
    }
}

impl fmt::Display for Verification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A display-only activity log entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityLog {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Display time, e.g. "14:22 PM"
    pub time: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
}

/// Severity of an activity log entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Success,
    Danger,
    Info,
    Neutral,
}
