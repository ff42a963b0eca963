//! Sidebar: brand, tab list and the signed-in admin

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme;
use crate::fixtures::ADMIN_PROFILE;
use crate::views::{Shell, NAV_ITEMS};

pub fn render(frame: &mut Frame, area: Rect, shell: &Shell) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(theme::border())
        .style(theme::panel());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [brand, nav, profile] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(NAV_ITEMS.len() as u16),
        Constraint::Length(3),
    ])
    .areas(inner);

    let brand_line = Line::from(vec![
        Span::styled(" ■ ", Style::default().fg(theme::PRIMARY).bold()),
        Span::styled("GuardianOS", theme::title()),
    ]);
    frame.render_widget(Paragraph::new(vec![Line::from(""), brand_line]), brand);

    let active = shell.active_index();
    let lines: Vec<Line> = NAV_ITEMS
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if active == Some(i) {
                theme::highlight().bold()
            } else {
                Style::default().fg(theme::TEXT)
            };
            let mut spans = vec![Span::styled(format!(" {} {:<14}", i + 1, item.label), style)];
            if item.badge {
                spans.push(Span::styled(" ●", Style::default().fg(theme::DANGER).bold()));
            }
            Line::from(spans)
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), nav);

    let profile_lines = vec![
        Line::from(Span::styled(format!(" {}", ADMIN_PROFILE.name), theme::title())),
        Line::from(Span::styled(format!(" {}", ADMIN_PROFILE.short_role), theme::label())),
    ];
    frame.render_widget(
        Paragraph::new(profile_lines).block(Block::default().borders(Borders::TOP).border_style(theme::border())),
        profile,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::test_support::render_to_string;

    #[test]
    fn test_lists_every_tab_and_admin() {
        let shell = Shell::new();
        let text = render_to_string(26, 16, |f| {
            let area = f.area();
            render(f, area, &shell)
        });

        for item in NAV_ITEMS {
            assert!(text.contains(item.label), "missing {}", item.label);
        }
        assert!(text.contains("●"));
        assert!(text.contains("Insp. James Miller"));
    }
}
