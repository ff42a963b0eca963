//! Reports page: fixture report table with a detail pane

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

use super::panel_block;
use crate::model::Report;
use crate::tui::theme;
use crate::views::ListDetail;

const SOS_BADGE: &str = " [SOS]";

pub fn render(frame: &mut Frame, area: Rect, view: &ListDetail<Report>) {
    match view.selected() {
        Some(report) => {
            let [table, detail] =
                Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                    .areas(area);
            render_table(frame, table, view);
            render_detail(frame, detail, report);
        }
        None => render_table(frame, area, view),
    }
}

fn render_table(frame: &mut Frame, area: Rect, view: &ListDetail<Report>) {
    let [table_area, footer] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);

    let header = Row::new(vec!["", "COMPLAINT TITLE", "TYPE", "LOCATION", "STATUS"])
        .style(theme::label().bold())
        .bottom_margin(1);

    let rows: Vec<Row> = view
        .items()
        .iter()
        .enumerate()
        .map(|(i, report)| {
            let marker = if view.selected_index() == Some(i) { "▌" } else { " " };
            let mut title = vec![
                Span::styled(report.title.clone(), theme::title()),
                Span::styled(format!("  {}", report.id), theme::label()),
            ];
            if report.is_sos() {
                title.push(Span::styled(SOS_BADGE, Style::default().fg(theme::DANGER).bold()));
            }
            Row::new(vec![
                Cell::from(Span::styled(marker, Style::default().fg(theme::PRIMARY))),
                Cell::from(Line::from(title)),
                Cell::from(Span::styled(
                    report.category.as_str(),
                    Style::default().fg(theme::category_color(report.category)),
                )),
                Cell::from(report.location.clone()),
                Cell::from(Span::styled(
                    report.status.as_str(),
                    Style::default().fg(theme::report_status_color(report.status)).bold(),
                )),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(1),
            Constraint::Min(24),
            Constraint::Length(12),
            Constraint::Length(22),
            Constraint::Length(20),
        ],
    )
    .header(header)
    .block(panel_block("Reports"))
    .row_highlight_style(theme::highlight());

    let mut state = TableState::default().with_selected(Some(view.cursor()));
    frame.render_stateful_widget(table, table_area, &mut state);

    let total = view.items().len();
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(
                " Showing 1 to {} of {} reports   ↑/↓ move  Enter open  Esc close",
                total, total
            ),
            theme::label().italic(),
        )),
        footer,
    );
}

fn render_detail(frame: &mut Frame, area: Rect, report: &Report) {
    let field = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<12}", label), theme::label()),
            Span::styled(value, Style::default().fg(theme::TEXT)),
        ])
    };

    let mut lines = vec![
        Line::from(Span::styled("REPORT DETAILS", theme::label().bold())),
        Line::from(Span::styled(report.title.clone(), theme::title())),
        Line::from(Span::styled(
            format!("Case ID: {}", report.id),
            Style::default().fg(theme::PRIMARY).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{:<12}", "Status"), theme::label()),
            Span::styled(
                report.status.as_str(),
                Style::default().fg(theme::report_status_color(report.status)).bold(),
            ),
        ]),
        field("Type", report.category.as_str().to_string()),
        field("Reported", report.timestamp.clone()),
        field("Location", report.location.clone()),
    ];

    if let Some(coords) = report.lat_lng {
        lines.push(field("Coordinates", format!("{:.4}, {:.4}", coords.lat, coords.lng)));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Description", theme::label().bold())));
    lines.push(Line::from(Span::styled(
        report
            .description
            .clone()
            .unwrap_or_else(|| "No description provided.".to_string()),
        Style::default().fg(theme::TEXT),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[ Escalate ]  [ Reviewed ]  (read-only console)",
        theme::label(),
    )));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(panel_block("Detail")),
        area,
    );
}
