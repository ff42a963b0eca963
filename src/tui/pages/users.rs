//! Users page: registered citizens with a profile pane

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use super::panel_block;
use crate::fixtures;
use crate::model::User;
use crate::tui::theme;
use crate::views::ListDetail;

/// Reports listed under a user's history
const HISTORY_LEN: usize = 3;

pub fn render(frame: &mut Frame, area: Rect, view: &ListDetail<User>) {
    match view.selected() {
        Some(user) => {
            let [table, detail] =
                Layout::horizontal([Constraint::Percentage(58), Constraint::Percentage(42)])
                    .areas(area);
            render_table(frame, table, view);
            render_detail(frame, detail, user);
        }
        None => render_table(frame, area, view),
    }
}

fn render_table(frame: &mut Frame, area: Rect, view: &ListDetail<User>) {
    let header = Row::new(vec!["", "USER", "VERIFICATION", "COMPLAINTS", "JOIN DATE"])
        .style(theme::label().bold())
        .bottom_margin(1);

    let rows: Vec<Row> = view
        .items()
        .iter()
        .enumerate()
        .map(|(i, user)| {
            let marker = if view.selected_index() == Some(i) { "▌" } else { " " };
            Row::new(vec![
                Cell::from(Span::styled(marker, Style::default().fg(theme::PRIMARY))),
                Cell::from(vec![
                    Line::from(Span::styled(user.name.clone(), theme::title())),
                    Line::from(Span::styled(user.email.clone(), theme::label())),
                ]),
                Cell::from(Span::styled(
                    user.verification.as_str(),
                    Style::default().fg(theme::verification_color(user.verification)).bold(),
                )),
                Cell::from(user.complaints.to_string()),
                Cell::from(user.join_date.clone()),
            ])
            .height(2)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(1),
            Constraint::Min(26),
            Constraint::Length(13),
            Constraint::Length(11),
            Constraint::Length(13),
        ],
    )
    .header(header)
    .block(panel_block("Registered Users"))
    .row_highlight_style(theme::highlight());

    let mut state = TableState::default().with_selected(Some(view.cursor()));
    frame.render_stateful_widget(table, area, &mut state);
}

fn render_detail(frame: &mut Frame, area: Rect, user: &User) {
    let [profile, history] =
        Layout::vertical([Constraint::Length(9), Constraint::Min(4)]).areas(area);

    let totals = Line::from(vec![
        Span::styled("Total ", theme::label()),
        Span::styled(user.complaints.to_string(), theme::title()),
        Span::styled("   Active ", theme::label()),
        Span::styled(user.active_count.to_string(), Style::default().fg(theme::WARNING).bold()),
        Span::styled("   SOS ", theme::label()),
        Span::styled(user.sos_count.to_string(), Style::default().fg(theme::DANGER).bold()),
    ]);

    let lines = vec![
        Line::from(Span::styled(user.name.clone(), theme::title())),
        Line::from(Span::styled(format!("ID: {}", user.id), theme::label())),
        Line::from(Span::styled(user.email.clone(), Style::default().fg(theme::TEXT))),
        Line::from(vec![
            Span::styled(
                user.verification.as_str(),
                Style::default().fg(theme::verification_color(user.verification)).bold(),
            ),
            Span::styled(format!("  joined {}", user.join_date), theme::label()),
        ]),
        Line::from(""),
        totals,
    ];
    frame.render_widget(Paragraph::new(lines).block(panel_block("Citizen Profile")), profile);

    let entries: Vec<Line> = fixtures::reports()
        .iter()
        .take(HISTORY_LEN)
        .flat_map(|report| {
            [
                Line::from(vec![
                    Span::styled(report.id.clone(), Style::default().fg(theme::PRIMARY)),
                    Span::styled(format!("  {}  ", report.category), theme::label()),
                    Span::styled(report.timestamp.clone(), theme::label()),
                ]),
                Line::from(vec![
                    Span::styled(report.title.clone(), theme::title()),
                    Span::styled(
                        format!("  {}", report.status),
                        Style::default().fg(theme::report_status_color(report.status)),
                    ),
                ]),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(entries).block(panel_block("Report History")), history);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::test_support::render_to_string;

    fn render_view(view: &ListDetail<User>) -> String {
        render_to_string(130, 30, |f| {
            let area = f.area();
            render(f, area, view)
        })
    }

    #[test]
    fn test_detail_totals_and_history() {
        let mut view = ListDetail::new(fixtures::users());
        view.select(0);

        let text = render_view(&view);
        assert!(text.contains("Citizen Profile"));
        assert!(text.contains("ID: #99283-4"));
        assert!(text.contains("Report History"));
        for report in fixtures::reports().iter().take(HISTORY_LEN) {
            assert!(text.contains(report.id.as_str()), "missing {}", report.id);
        }
        let fourth = &fixtures::reports()[3];
        assert!(!text.contains(fourth.id.as_str()));
    }

    #[test]
    fn test_list_without_detail() {
        let mut view = ListDetail::new(fixtures::users());
        view.clear();

        let text = render_view(&view);
        assert!(!text.contains("Citizen Profile"));
        assert!(text.contains("Sarah Jenkins"));
        assert!(text.contains("Pending"));
    }
}
