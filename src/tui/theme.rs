//! Console color palette and shared styles

use ratatui::style::{Color, Modifier, Style, Stylize};

use crate::fixtures::HotSpotTint;
use crate::model::{Category, ReportStatus, Verification};

pub const PRIMARY: Color = Color::Rgb(19, 91, 236);
pub const DANGER: Color = Color::Rgb(239, 68, 68);
pub const WARNING: Color = Color::Rgb(245, 158, 11);
pub const SUCCESS: Color = Color::Rgb(16, 185, 129);
pub const COOL: Color = Color::Rgb(56, 189, 248);
pub const TEXT: Color = Color::Rgb(226, 232, 240);
pub const MUTED: Color = Color::Rgb(100, 116, 139);
pub const BG: Color = Color::Rgb(15, 23, 42);
pub const PANEL: Color = Color::Rgb(30, 41, 59);

pub fn panel() -> Style {
    Style::default().fg(TEXT).bg(PANEL)
}

pub fn border() -> Style {
    Style::default().fg(MUTED)
}

pub fn title() -> Style {
    Style::default().fg(TEXT).bold()
}

pub fn label() -> Style {
    Style::default().fg(MUTED).add_modifier(Modifier::DIM)
}

pub fn highlight() -> Style {
    Style::default().bg(PRIMARY).fg(Color::White)
}

/// Color for a free-form status string from the backend
pub fn status_color(status: &str) -> Color {
    match ReportStatus::from_label(status) {
        Some(status) => report_status_color(status),
        None => match status.to_ascii_lowercase().as_str() {
            "resolved" | "closed" => SUCCESS,
            "high priority" | "critical" => DANGER,
            _ => WARNING,
        },
    }
}

/// Color for a free-form crime type from the backend
pub fn crime_type_color(crime_type: &str) -> Color {
    Category::from_label(crime_type).map_or(TEXT, category_color)
}

pub fn category_color(category: Category) -> Color {
    match category {
        Category::SosAlert | Category::Critical => DANGER,
        Category::Theft | Category::Burglary => WARNING,
        Category::Traffic => COOL,
        _ => TEXT,
    }
}

pub fn report_status_color(status: ReportStatus) -> Color {
    match status {
        ReportStatus::Resolved | ReportStatus::ClosedDispatched => SUCCESS,
        ReportStatus::HighPriority => DANGER,
        ReportStatus::Dismissed => MUTED,
        _ => WARNING,
    }
}

pub fn verification_color(verification: Verification) -> Color {
    match verification {
        Verification::Verified => SUCCESS,
        Verification::Pending => WARNING,
        Verification::Unverified => MUTED,
    }
}

pub fn tint_color(tint: HotSpotTint) -> Color {
    match tint {
        HotSpotTint::Primary => PRIMARY,
        HotSpotTint::Danger => DANGER,
        HotSpotTint::Cool => COOL,
    }
}
