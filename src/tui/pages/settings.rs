//! Settings page: admin profile, notification toggles, session info

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::panel_block;
use crate::fixtures::ADMIN_PROFILE;
use crate::tui::theme;
use crate::views::{SettingsSection, SettingsView};

pub fn render(frame: &mut Frame, area: Rect, view: &SettingsView) {
    let [menu, content] =
        Layout::horizontal([Constraint::Length(30), Constraint::Min(30)]).areas(area);

    render_menu(frame, menu, view);

    match view.section {
        SettingsSection::Profile => render_profile(frame, content),
        SettingsSection::Notifications => render_notifications(frame, content, view),
        SettingsSection::Security => render_security(frame, content),
    }
}

fn render_menu(frame: &mut Frame, area: Rect, view: &SettingsView) {
    let mut lines: Vec<Line> = SettingsSection::all()
        .iter()
        .map(|section| {
            let style = if *section == view.section {
                theme::highlight().bold()
            } else {
                Style::default().fg(theme::TEXT)
            };
            Line::from(Span::styled(format!(" {:<26}", section.label()), style))
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" ←/→ switch section", theme::label())));

    frame.render_widget(Paragraph::new(lines).block(panel_block("Settings")), area);
}

fn render_profile(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("Full Name", theme::label())),
        Line::from(Span::styled(ADMIN_PROFILE.name, theme::title())),
        Line::from(""),
        Line::from(Span::styled("Administrative Role", theme::label())),
        Line::from(Span::styled(ADMIN_PROFILE.role, Style::default().fg(theme::TEXT))),
        Line::from(""),
        Line::from(Span::styled("Last Login", theme::label())),
        Line::from(Span::styled(ADMIN_PROFILE.last_login, Style::default().fg(theme::TEXT))),
    ];

    frame.render_widget(Paragraph::new(lines).block(panel_block("Admin Profile")), area);
}

fn render_notifications(frame: &mut Frame, area: Rect, view: &SettingsView) {
    let mut lines = Vec::new();

    for (i, pref) in view.preferences.iter().enumerate() {
        let (toggle, color) = if pref.enabled {
            ("[ON ]", theme::SUCCESS)
        } else {
            ("[OFF]", theme::MUTED)
        };
        let title_style = if i == view.cursor {
            theme::highlight().bold()
        } else {
            theme::title()
        };
        lines.push(Line::from(vec![
            Span::styled(toggle, Style::default().fg(color).bold()),
            Span::raw(" "),
            Span::styled(pref.title, title_style),
        ]));
        lines.push(Line::from(Span::styled(format!("      {}", pref.description), theme::label())));
        lines.push(Line::from(""));
    }

    let status = if view.is_modified() {
        "Modified locally, not saved"
    } else {
        "Defaults"
    };
    lines.push(Line::from(vec![
        Span::styled(status, Style::default().fg(theme::WARNING)),
        Span::styled("   Space toggle  r reset to defaults", theme::label()),
    ]));

    frame.render_widget(
        Paragraph::new(lines).block(panel_block("Notification Preferences")),
        area,
    );
}

fn render_security(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled("Signed in as ", theme::label()),
            Span::styled(ADMIN_PROFILE.name, theme::title()),
        ]),
        Line::from(Span::styled(
            format!("Last login {}", ADMIN_PROFILE.last_login),
            Style::default().fg(theme::TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled("Sign Out", Style::default().fg(theme::DANGER).bold())),
        Line::from(Span::styled(
            "Secure session will be terminated immediately. Press q to leave the console.",
            theme::label(),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(panel_block("Security & Access")), area);
}
