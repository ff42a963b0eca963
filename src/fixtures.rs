//! Seed data
//!
//! Process-wide read-only records for the pages that are not wired to the
//! backend yet. There is no mutation API; the live dashboard state lives in
//! [`crate::sync`] and never touches these.

use std::sync::OnceLock;

use crate::model::{
    ActivityKind, ActivityLog, Category, Report, ReportStatus, User, Verification,
};

/// Seed incident reports, newest first
pub fn reports() -> &'static [Report] {
    static REPORTS: OnceLock<Vec<Report>> = OnceLock::new();
    REPORTS.get_or_init(|| {
        vec![
            Report::new(
                "#CR-92841",
                "Attempted Robbery",
                Category::Theft,
                "Oakridge Business Park",
                ReportStatus::Dispatched,
                "12 mins ago",
            )
            .at(12.9352, 77.6245)
            .description(
                "An unknown individual was spotted attempting to force entry into the rear \
                 service door of the business park center. Suspect wearing dark hoodie.",
            ),
            Report::new(
                "#CR-92840",
                "Public Nuisance",
                Category::Behavioral,
                "Central Metro Station",
                ReportStatus::Pending,
                "45 mins ago",
            )
            .at(12.9767, 77.5713)
            .description(
                "Loud disturbance reported near Terminal B. Group of youths obstructing \
                 transit flow.",
            ),
            Report::new(
                "#SOS-00421",
                "Medical Emergency - SOS",
                Category::Critical,
                "Harbor View Apartments",
                ReportStatus::HighPriority,
                "3 mins ago",
            )
            .at(12.9716, 77.5946)
            .description(
                "Panic button triggered. Elder citizen reported chest pains and difficulty \
                 breathing.",
            ),
            Report::new(
                "#CR-92838",
                "Vandalism Incident",
                Category::Property,
                "Sunset Blvd Park",
                ReportStatus::Resolved,
                "1 hour ago",
            )
            .at(12.9634, 77.5855)
            .description(
                "Graffiti discovered on the main monument. Clean-up crew dispatched and area \
                 cleared.",
            ),
            Report::new(
                "#CR-2023-402",
                "Attempted Burglary at Main St.",
                Category::Burglary,
                "Downtown, Sector 4",
                ReportStatus::Pending,
                "Oct 24, 2023 10:45 AM",
            )
            .description(
                "Suspect spotted trying to bypass lock on retail storefront. Fled when \
                 approached by witness.",
            ),
        ]
    })
}

/// Seed citizen accounts
pub fn users() -> &'static [User] {
    static USERS: OnceLock<Vec<User>> = OnceLock::new();
    USERS.get_or_init(|| {
        vec![
            User {
                id: "#99283-4".to_string(),
                name: "Marcus Richardson".to_string(),
                email: "marcus.r@example.gov".to_string(),
                verification: Verification::Verified,
                complaints: 12,
                active_count: 2,
                sos_count: 1,
                join_date: "Jan 12, 2023".to_string(),
                avatar: avatar_url("marcus-richardson"),
            },
            User {
                id: "#99283-5".to_string(),
                name: "Sarah Jenkins".to_string(),
                email: "s.jenkins@provider.com".to_string(),
                verification: Verification::Pending,
                complaints: 3,
                active_count: 0,
                sos_count: 0,
                join_date: "Mar 05, 2023".to_string(),
                avatar: avatar_url("sarah-jenkins"),
            },
            User {
                id: "#99283-6".to_string(),
                name: "David Chen".to_string(),
                email: "dchen_92@mail.net".to_string(),
                verification: Verification::Verified,
                complaints: 7,
                active_count: 1,
                sos_count: 0,
                join_date: "May 21, 2023".to_string(),
                avatar: avatar_url("david-chen"),
            },
        ]
    })
}

fn avatar_url(slug: &str) -> String {
    format!("https://avatars.guardianos.example/{}.png", slug)
}

/// Seed activity log, newest first
pub fn activity() -> &'static [ActivityLog] {
    static ACTIVITY: OnceLock<Vec<ActivityLog>> = OnceLock::new();
    ACTIVITY.get_or_init(|| {
        let entry = |id: &str, title: &str, description: &str, time: &str, kind| ActivityLog {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            time: time.to_string(),
            kind,
        };
        vec![
            entry(
                "1",
                "Dispatcher Assigned",
                "Unit 7 assigned to #CR-92841",
                "14:22 PM",
                ActivityKind::Success,
            ),
            entry(
                "2",
                "New SOS Alert",
                "Signal received from Harbor View",
                "14:19 PM",
                ActivityKind::Danger,
            ),
            entry(
                "3",
                "Status Update",
                "#CR-92838 marked as Resolved",
                "13:58 PM",
                ActivityKind::Info,
            ),
            entry(
                "4",
                "User Login",
                "Admin Miller authenticated",
                "13:30 PM",
                ActivityKind::Neutral,
            ),
        ]
    })
}

/// A region summary shown under the dashboard map snapshot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveRegion {
    pub name: &'static str,
    pub active_incidents: u32,
    pub critical: bool,
}

pub const ACTIVE_REGIONS: &[ActiveRegion] = &[
    ActiveRegion {
        name: "Downtown Central",
        active_incidents: 12,
        critical: true,
    },
    ActiveRegion {
        name: "Port District",
        active_incidents: 4,
        critical: false,
    },
];

/// Tint of a heat-map hot spot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotSpotTint {
    Primary,
    Danger,
    Cool,
}

/// A gaussian blob on the mock heat map. Positions and radius are
/// fractions of the map area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HotSpot {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub weight: f64,
    pub tint: HotSpotTint,
}

pub const HOT_SPOTS: &[HotSpot] = &[
    HotSpot {
        x: 0.25,
        y: 0.33,
        radius: 0.18,
        weight: 0.8,
        tint: HotSpotTint::Primary,
    },
    HotSpot {
        x: 0.5,
        y: 0.5,
        radius: 0.24,
        weight: 1.0,
        tint: HotSpotTint::Danger,
    },
    HotSpot {
        x: 0.67,
        y: 0.75,
        radius: 0.12,
        weight: 0.6,
        tint: HotSpotTint::Cool,
    },
];

/// The pulsing SOS marker on the heat map
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SosMarker {
    pub id: &'static str,
    pub label: &'static str,
    pub x: f64,
    pub y: f64,
}

pub const SOS_MARKER: SosMarker = SosMarker {
    id: "ID-8821",
    label: "Residential Disturbance",
    x: 0.33,
    y: 0.5,
};

/// Zone health panel figures
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneHealth {
    pub precinct: &'static str,
    pub incidents_24h: u32,
    pub trend_percent: i32,
    pub load_ratio: f64,
}

pub const ZONE_HEALTH: ZoneHealth = ZoneHealth {
    precinct: "Downtown Precinct",
    incidents_24h: 142,
    trend_percent: -12,
    load_ratio: 0.65,
};

/// Map layers and whether they start enabled
pub const MAP_LAYERS: &[(&str, bool)] = &[
    ("Crime Intensity", true),
    ("Active SOS Alerts", true),
    ("Patrol Units", false),
    ("CCTV Coverage", false),
];

/// Signed-in administrator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminProfile {
    pub name: &'static str,
    pub short_role: &'static str,
    pub role: &'static str,
    pub last_login: &'static str,
}

pub const ADMIN_PROFILE: AdminProfile = AdminProfile {
    name: "Insp. James Miller",
    short_role: "Senior Admin",
    role: "Senior Dispatcher / System Admin",
    last_login: "Oct 24, 2023 at 08:42 AM (10.0.1.25)",
};

/// Notification preference seed: (title, description, enabled by default)
pub const NOTIFICATION_DEFAULTS: &[(&str, &str, bool)] = &[
    (
        "Desktop SOS Alerts",
        "Receive immediate notifications for incoming high-priority signals.",
        true,
    ),
    (
        "Crime Report Email Digest",
        "Receive automated summaries of all crime reports within your jurisdiction.",
        true,
    ),
    (
        "SMS System Alerts",
        "Text messages for critical system maintenance or emergency status.",
        false,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_sizes() {
        assert_eq!(reports().len(), 5);
        assert_eq!(users().len(), 3);
        assert_eq!(activity().len(), 4);
    }

    #[test]
    fn test_seed_is_shared() {
        assert!(std::ptr::eq(reports(), reports()));
    }

    #[test]
    fn test_seed_ids_unique() {
        let mut ids: Vec<_> = reports().iter().map(|r| r.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), reports().len());
    }

    #[test]
    fn test_field_reports_are_located() {
        let located = reports().iter().filter(|r| r.lat_lng.is_some()).count();
        assert_eq!(located, 4);
        assert!(reports()[4].lat_lng.is_none());
    }

    #[test]
    fn test_one_sos_report() {
        assert_eq!(reports().iter().filter(|r| r.is_sos()).count(), 1);
    }
}
