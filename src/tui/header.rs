//! Top header: page title, data source and refresh status

use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme;
use crate::sync::DashboardState;

pub struct HeaderInfo<'a> {
    pub title: &'a str,
    pub source: &'a str,
    pub demo: bool,
    /// Present only while the dashboard page is shown
    pub dashboard: Option<&'a DashboardState>,
}

pub fn render(frame: &mut Frame, area: Rect, info: &HeaderInfo<'_>) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme::border())
        .style(theme::panel());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [left, right] =
        Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(inner);

    let title = Line::from(Span::styled(format!(" {}", info.title), theme::title()));
    frame.render_widget(Paragraph::new(vec![Line::from(""), title]), left);

    let mut spans = Vec::new();
    if let Some(state) = info.dashboard {
        spans.extend(refresh_status(state));
        spans.push(Span::raw("  "));
    }

    let (mode, color) = if info.demo {
        ("DEMO", theme::WARNING)
    } else {
        ("LIVE", theme::SUCCESS)
    };
    spans.push(Span::styled(format!("[{}]", mode), Style::default().fg(color).bold()));
    spans.push(Span::styled(format!(" {} ", info.source), theme::label()));

    frame.render_widget(
        Paragraph::new(vec![Line::from(""), Line::from(spans)]).alignment(Alignment::Right),
        right,
    );
}

fn refresh_status(state: &DashboardState) -> Vec<Span<'static>> {
    if state.loading {
        return vec![Span::styled("Loading…", Style::default().fg(theme::MUTED))];
    }

    let updated = state
        .last_refreshed
        .map(|t| format!("Updated {}", t.with_timezone(&Local).format("%H:%M:%S")))
        .unwrap_or_else(|| "Never updated".to_string());

    let mut spans = Vec::new();
    if state.last_error.is_some() {
        spans.push(Span::styled(
            " STALE ",
            Style::default().fg(Color::White).bg(theme::DANGER).bold(),
        ));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(updated, Style::default().fg(theme::MUTED)));
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::test_support::render_to_string;

    fn header_text(info: &HeaderInfo<'_>) -> String {
        render_to_string(100, 3, |f| {
            let area = f.area();
            render(f, area, info)
        })
    }

    #[test]
    fn test_loading_status() {
        let state = DashboardState::default();
        let text = header_text(&HeaderInfo {
            title: "Dashboard Overview",
            source: "http://localhost:8000",
            demo: false,
            dashboard: Some(&state),
        });

        assert!(text.contains("Dashboard Overview"));
        assert!(text.contains("Loading"));
        assert!(text.contains("[LIVE]"));
    }

    #[test]
    fn test_stale_badge_after_failure() {
        let mut state = DashboardState::default();
        state.apply_failure("Backend unavailable");
        let text = header_text(&HeaderInfo {
            title: "Dashboard Overview",
            source: "fixtures",
            demo: true,
            dashboard: Some(&state),
        });

        assert!(text.contains("STALE"));
        assert!(text.contains("Never updated"));
    }

    #[test]
    fn test_no_refresh_status_off_dashboard() {
        let text = header_text(&HeaderInfo {
            title: "User Database",
            source: "fixtures",
            demo: true,
            dashboard: None,
        });

        assert!(!text.contains("Loading"));
        assert!(text.contains("[DEMO]"));
    }
}
