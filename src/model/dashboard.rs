//! Dashboard aggregates
//!
//! Wire shapes of the three endpoints polled by the dashboard and the
//! stats record derived from them.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Response of `GET /complaints/stats`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ComplaintStats {
    pub total_complaints: u64,
    pub today_complaints: u64,
}

/// Response of `GET /sos/stats`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SosStats {
    pub total_alerts: u64,
    pub today_alerts: u64,
}

/// Stats card values shown on the dashboard
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_reports: u64,
    pub today_reports: u64,
    /// Today's alert count, not the all-time total
    pub sos_alerts: u64,
    /// No backend source exists yet; always `None` and shown as `--`
    pub high_priority: Option<u64>,
}

impl DashboardStats {
    /// The only derivation path from the two stats responses
    pub fn from_responses(complaints: &ComplaintStats, sos: &SosStats) -> Self {
        Self {
            total_reports: complaints.total_complaints,
            today_reports: complaints.today_complaints,
            sos_alerts: sos.today_alerts,
            high_priority: None,
        }
    }
}

/// Identifier of a backend record; numeric in the current backend, but
/// string ids and any other JSON value are accepted as-is
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
    Other(serde_json::Value),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "#{}", n),
            RecordId::Text(s) => f.pad(s),
            RecordId::Other(value) => f.pad(&value.to_string()),
        }
    }
}

/// One entry of `GET /complaints/recent`
///
/// Stored verbatim. Every column may be null or absent; fields beyond the
/// known ones are kept in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecentComplaint {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub crime_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// ISO-8601 string as sent by the backend
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl RecentComplaint {
    pub fn new(
        id: RecordId,
        title: impl Into<String>,
        crime_type: impl Into<String>,
        status: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id),
            title: Some(title.into()),
            crime_type: Some(crime_type.into()),
            status: Some(status.into()),
            created_at: Some(created_at.into()),
            extra: serde_json::Map::new(),
        }
    }

    /// Id as shown in tables, blank when missing
    pub fn id_display(&self) -> String {
        self.id.as_ref().map(ToString::to_string).unwrap_or_default()
    }

    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn crime_type_text(&self) -> &str {
        self.crime_type.as_deref().unwrap_or("")
    }

    pub fn status_text(&self) -> &str {
        self.status.as_deref().unwrap_or("")
    }

    /// `created_at` rendered in local time, the raw string when it does
    /// not parse, blank when missing
    pub fn created_display(&self) -> String {
        let Some(raw) = self.created_at.as_deref() else {
            return String::new();
        };
        parse_created_at(raw)
            .map(|dt| dt.format("%b %d, %H:%M").to_string())
            .unwrap_or_else(|| raw.to_string())
    }
}

fn parse_created_at(raw: &str) -> Option<DateTime<Local>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local));
    }
    // Naive timestamps (no offset) are treated as UTC
    chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc().with_timezone(&Local))
}

/// Render an optional count, `--` when unknown
pub fn display_count(value: Option<u64>) -> String {
    match value {
        Some(n) => format_count(n),
        None => "--".to_string(),
    }
}

/// Thousands-separated count, e.g. `1,284`
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_mapping() {
        let stats = DashboardStats::from_responses(
            &ComplaintStats {
                total_complaints: 1284,
                today_complaints: 42,
            },
            &SosStats {
                total_alerts: 5,
                today_alerts: 3,
            },
        );

        assert_eq!(stats.total_reports, 1284);
        assert_eq!(stats.today_reports, 42);
        assert_eq!(stats.sos_alerts, 3);
        assert_eq!(stats.high_priority, None);
    }

    #[test]
    fn test_recent_complaint_keeps_extra_fields() {
        let json = r#"{
            "id": 17,
            "title": "Broken streetlight",
            "description": "Pole 44 is dark",
            "crime_type": "Other",
            "user_email": "c@example.com",
            "image_path": null,
            "status": "Pending",
            "created_at": "2024-03-01T10:15:00+00:00"
        }"#;

        let record: RecentComplaint = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, Some(RecordId::Number(17)));
        assert_eq!(record.extra["description"], "Pole 44 is dark");
        assert!(record.extra["image_path"].is_null());

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["user_email"], "c@example.com");
    }

    #[test]
    fn test_recent_complaint_accepts_null_and_missing_columns() {
        let json = r#"{"id": 1, "title": "x", "crime_type": null, "created_at": null}"#;
        let record: RecentComplaint = serde_json::from_str(json).unwrap();

        assert_eq!(record.title_text(), "x");
        assert_eq!(record.crime_type, None);
        assert_eq!(record.crime_type_text(), "");
        assert_eq!(record.status_text(), "");
        assert_eq!(record.created_display(), "");
    }

    #[test]
    fn test_recent_complaint_odd_id_kept() {
        let json = r#"{"id": 2.5, "title": "x"}"#;
        let record: RecentComplaint = serde_json::from_str(json).unwrap();
        assert_eq!(record.id_display(), "2.5");

        let record: RecentComplaint = serde_json::from_str("{}").unwrap();
        assert_eq!(record.id_display(), "");
    }

    #[test]
    fn test_record_id_display() {
        assert_eq!(RecordId::Number(42).to_string(), "#42");
        assert_eq!(RecordId::Text("#CR-1".into()).to_string(), "#CR-1");
    }

    #[test]
    fn test_created_display_falls_back_to_raw() {
        let record = RecentComplaint::new(RecordId::Number(1), "t", "Theft", "Pending", "yesterday");
        assert_eq!(record.created_display(), "yesterday");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1284), "1,284");
        assert_eq!(format_count(1_000_000), "1,000,000");
        assert_eq!(display_count(None), "--");
    }
}
