//! Fixture-backed backend store
//!
//! An in-memory stand-in for the complaints and SOS tables of the
//! GuardianOS backend. "Today" counts use a rolling 24-hour window ending at
//! the instant of the request, matching the real backend.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde_json::{Map, Value};

use crate::backend::{BackendError, DashboardSource};
use crate::fixtures;
use crate::model::{ComplaintStats, RecentComplaint, RecordId, SosStats};

/// Default number of records returned by `/complaints/recent`
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// A complaint row
#[derive(Debug, Clone, PartialEq)]
pub struct ComplaintRecord {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub crime_type: String,
    pub user_email: String,
    pub image_path: Option<String>,
    pub video_path: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl ComplaintRecord {
    fn to_recent(&self) -> RecentComplaint {
        let mut extra = Map::new();
        extra.insert("description".into(), Value::String(self.description.clone()));
        extra.insert("user_email".into(), Value::String(self.user_email.clone()));
        extra.insert("image_path".into(), option_value(&self.image_path));
        extra.insert("video_path".into(), option_value(&self.video_path));

        RecentComplaint {
            extra,
            ..RecentComplaint::new(
                RecordId::Number(self.id),
                self.title.as_str(),
                self.crime_type.as_str(),
                self.status.as_str(),
                self.created_at.to_rfc3339(),
            )
        }
    }
}

fn option_value(value: &Option<String>) -> Value {
    value.clone().map(Value::String).unwrap_or(Value::Null)
}

/// An SOS alert row
#[derive(Debug, Clone, PartialEq)]
pub struct SosRecord {
    pub id: i64,
    pub user_email: Option<String>,
    pub lat: String,
    pub long: String,
    pub created_at: DateTime<Utc>,
}

/// In-memory complaints and SOS alerts
#[derive(Debug, Clone, Default)]
pub struct StubStore {
    complaints: Vec<ComplaintRecord>,
    alerts: Vec<SosRecord>,
}

impl StubStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded from the report fixtures, with creation times placed
    /// relative to `now`
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let ages = [
            Duration::minutes(12),
            Duration::minutes(45),
            Duration::minutes(3),
            Duration::hours(1),
            Duration::days(30),
        ];

        let mut store = Self::new();
        for (idx, (report, age)) in fixtures::reports().iter().zip(ages).enumerate() {
            store.push_complaint(ComplaintRecord {
                id: 100 + idx as i64,
                title: report.title.clone(),
                description: report.description.clone().unwrap_or_default(),
                crime_type: report.category.to_string(),
                user_email: fixtures::users()[idx % fixtures::users().len()].email.clone(),
                image_path: None,
                video_path: None,
                status: report.status.to_string(),
                created_at: now - age,
            });
        }

        // Two alerts outside the 24h window, three inside it
        let alert_ages = [
            Duration::days(3),
            Duration::days(2),
            Duration::hours(20),
            Duration::hours(2),
            Duration::minutes(3),
        ];
        for (idx, age) in alert_ages.into_iter().enumerate() {
            store.push_alert(SosRecord {
                id: 1 + idx as i64,
                user_email: Some(fixtures::users()[0].email.clone()),
                lat: format!("{:.4}", 12.9716 + idx as f64 * 0.01),
                long: format!("{:.4}", 77.5946 - idx as f64 * 0.01),
                created_at: now - age,
            });
        }

        store
    }

    pub fn push_complaint(&mut self, record: ComplaintRecord) {
        self.complaints.push(record);
    }

    pub fn push_alert(&mut self, record: SosRecord) {
        self.alerts.push(record);
    }

    pub fn complaint_count(&self) -> usize {
        self.complaints.len()
    }

    pub fn alert_count(&self) -> usize {
        self.alerts.len()
    }

    /// Complaint totals as of `now`
    pub fn complaint_stats_at(&self, now: DateTime<Utc>) -> ComplaintStats {
        let cutoff = now - Duration::hours(24);
        ComplaintStats {
            total_complaints: self.complaints.len() as u64,
            today_complaints: self
                .complaints
                .iter()
                .filter(|c| c.created_at >= cutoff)
                .count() as u64,
        }
    }

    /// SOS totals as of `now`
    pub fn sos_stats_at(&self, now: DateTime<Utc>) -> SosStats {
        let cutoff = now - Duration::hours(24);
        SosStats {
            total_alerts: self.alerts.len() as u64,
            today_alerts: self.alerts.iter().filter(|a| a.created_at >= cutoff).count() as u64,
        }
    }

    /// The `limit` newest complaints, newest first
    pub fn recent(&self, limit: usize) -> Vec<RecentComplaint> {
        let mut sorted: Vec<&ComplaintRecord> = self.complaints.iter().collect();
        sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        sorted.into_iter().take(limit).map(ComplaintRecord::to_recent).collect()
    }
}

#[async_trait]
impl DashboardSource for StubStore {
    fn name(&self) -> &str {
        "fixtures"
    }

    async fn complaint_stats(&self) -> Result<ComplaintStats, BackendError> {
        Ok(self.complaint_stats_at(Utc::now()))
    }

    async fn sos_stats(&self) -> Result<SosStats, BackendError> {
        Ok(self.sos_stats_at(Utc::now()))
    }

    async fn recent_complaints(&self) -> Result<Vec<RecentComplaint>, BackendError> {
        Ok(self.recent(DEFAULT_RECENT_LIMIT))
    }
}
