//! Dashboard page: stat cards, recent reports, activity and regions

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use super::{panel_block, status_span};
use crate::fixtures::{self, ACTIVE_REGIONS};
use crate::model::{display_count, format_count, ActivityKind};
use crate::sync::DashboardState;
use crate::tui::theme;

pub const EMPTY_RECENT: &str = "No recent reports";

pub fn render(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let [cards, recent, bottom] = Layout::vertical([
        Constraint::Length(5),
        Constraint::Min(7),
        Constraint::Length(8),
    ])
    .areas(area);

    render_cards(frame, cards, state);
    render_recent(frame, recent, state);

    let [activity, regions] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(bottom);
    render_activity(frame, activity);
    render_regions(frame, regions);
}

/// Card values in display order; all `--` before the first success
fn card_values(state: &DashboardState) -> [(&'static str, String, Color); 4] {
    let (total, today, high, sos) = match &state.stats {
        Some(stats) => (
            format_count(stats.total_reports),
            format_count(stats.today_reports),
            display_count(stats.high_priority),
            format_count(stats.sos_alerts),
        ),
        None => (
            display_count(None),
            display_count(None),
            display_count(None),
            display_count(None),
        ),
    };

    [
        ("Total Reports", total, theme::PRIMARY),
        ("Reports Today", today, theme::SUCCESS),
        ("High Priority", high, theme::WARNING),
        ("SOS Alerts", sos, theme::DANGER),
    ]
}

fn render_cards(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);

    for ((label, value, color), column) in card_values(state).into_iter().zip(columns.iter()) {
        let text = vec![
            Line::from(Span::styled(label, theme::label())),
            Line::from(""),
            Line::from(Span::styled(value, Style::default().fg(color).bold())),
        ];
        let card = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(theme::border())
                    .style(theme::panel()),
            );
        frame.render_widget(card, *column);
    }
}

fn render_recent(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let block = panel_block("Recent Reports");

    if state.loading || state.recent.is_empty() {
        let message = if state.loading {
            "Loading recent reports…"
        } else {
            EMPTY_RECENT
        };
        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(message, Style::default().fg(theme::MUTED).italic())),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vec!["ID", "TITLE", "TYPE", "REPORTED", "STATUS"])
        .style(theme::label().bold())
        .bottom_margin(1);

    let rows: Vec<Row> = state
        .recent
        .iter()
        .map(|item| {
            Row::new(vec![
                Cell::from(item.id_display()),
                Cell::from(Span::styled(item.title_text().to_string(), theme::title())),
                Cell::from(Span::styled(
                    item.crime_type_text().to_string(),
                    Style::default().fg(theme::crime_type_color(item.crime_type_text())),
                )),
                Cell::from(item.created_display()),
                Cell::from(status_span(item.status_text())),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Min(20),
            Constraint::Length(14),
            Constraint::Length(14),
            Constraint::Length(22),
        ],
    )
    .header(header)
    .block(block);

    frame.render_widget(table, area);
}

fn activity_color(kind: ActivityKind) -> Color {
    match kind {
        ActivityKind::Success => theme::SUCCESS,
        ActivityKind::Danger => theme::DANGER,
        ActivityKind::Info => theme::PRIMARY,
        ActivityKind::Neutral => theme::MUTED,
    }
}

fn render_activity(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = fixtures::activity()
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled("● ", Style::default().fg(activity_color(entry.kind))),
                Span::styled(entry.title.clone(), theme::title()),
                Span::raw("  "),
                Span::styled(entry.description.clone(), Style::default().fg(theme::TEXT)),
                Span::raw("  "),
                Span::styled(entry.time.clone(), theme::label()),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(panel_block("Activity Log")), area);
}

fn render_regions(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = ACTIVE_REGIONS
        .iter()
        .map(|region| {
            let mut spans = vec![
                Span::styled(region.name, theme::title()),
                Span::styled(
                    format!("  {} active incidents", region.active_incidents),
                    Style::default().fg(theme::TEXT),
                ),
            ];
            if region.critical {
                spans.push(Span::styled(" CRITICAL ", Style::default().fg(theme::DANGER).bold()));
            }
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(panel_block("Active Regions")), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ComplaintStats, RecentComplaint, RecordId, SosStats};
    use crate::sync::CycleData;
    use crate::tui::test_support::render_to_string;
    use chrono::Utc;

    fn render_state(state: &DashboardState) -> String {
        render_to_string(120, 30, |f| {
            let area = f.area();
            render(f, area, state)
        })
    }

    fn cycle(recent: Vec<RecentComplaint>) -> CycleData {
        CycleData {
            complaints: ComplaintStats {
                total_complaints: 1284,
                today_complaints: 42,
            },
            sos: SosStats {
                total_alerts: 5,
                today_alerts: 3,
            },
            recent,
        }
    }

    #[test]
    fn test_card_values_scenario() {
        let mut state = DashboardState::default();
        state.apply_success(cycle(Vec::new()), Utc::now());

        let values: Vec<String> = card_values(&state).into_iter().map(|(_, v, _)| v).collect();
        assert_eq!(values, vec!["1,284", "42", "--", "3"]);
    }

    #[test]
    fn test_cards_before_first_success() {
        let values: Vec<String> = card_values(&DashboardState::default())
            .into_iter()
            .map(|(_, v, _)| v)
            .collect();
        assert_eq!(values, vec!["--", "--", "--", "--"]);
    }

    #[test]
    fn test_empty_recent_message() {
        let mut state = DashboardState::default();
        state.apply_success(cycle(Vec::new()), Utc::now());

        let text = render_state(&state);
        assert!(text.contains(EMPTY_RECENT));
        assert!(text.contains("Total Reports"));
        assert!(text.contains("Downtown Central"));
    }

    #[test]
    fn test_loading_placeholder() {
        let text = render_state(&DashboardState::default());
        assert!(text.contains("Loading recent reports"));
        assert!(!text.contains(EMPTY_RECENT));
    }

    #[test]
    fn test_recent_rows_rendered() {
        let mut state = DashboardState::default();
        state.apply_success(
            cycle(vec![RecentComplaint::new(
                RecordId::Number(77),
                "Bicycle stolen",
                "Theft",
                "Pending",
                "not-a-date",
            )]),
            Utc::now(),
        );

        let text = render_state(&state);
        assert!(text.contains("#77"));
        assert!(text.contains("Bicycle stolen"));
        assert!(text.contains("not-a-date"));
        assert!(!text.contains(EMPTY_RECENT));
    }

    #[test]
    fn test_recent_row_with_missing_columns_renders_blank() {
        let sparse: RecentComplaint =
            serde_json::from_str(r#"{"id": 9, "title": "Stray cattle", "crime_type": null}"#)
                .unwrap();
        let mut state = DashboardState::default();
        state.apply_success(cycle(vec![sparse]), Utc::now());

        let text = render_state(&state);
        assert!(text.contains("#9"));
        assert!(text.contains("Stray cattle"));
        assert!(!text.contains("null"));
    }
}
