//! Page renderers

pub mod dashboard;
pub mod heatmap;
pub mod reports;
pub mod settings;
pub mod users;

use ratatui::{
    style::{Style, Stylize},
    text::Span,
    widgets::{Block, BorderType, Borders},
};

use super::theme;

/// Rounded panel with a bold title
pub(crate) fn panel_block(title: &str) -> Block<'static> {
    Block::default()
        .title(Span::styled(format!(" {} ", title), theme::title()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::panel())
}

/// Small colored status marker
pub(crate) fn status_span(status: &str) -> Span<'static> {
    Span::styled(
        format!("● {}", status),
        Style::default().fg(theme::status_color(status)).bold(),
    )
}
