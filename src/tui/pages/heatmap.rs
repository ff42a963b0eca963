//! Heat map page: shaded density grid, layer toggles and zone health

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};

use super::panel_block;
use crate::fixtures::{SOS_MARKER, ZONE_HEALTH};
use crate::tui::theme;
use crate::views::heatmap::dominant_tint;
use crate::views::HeatMapView;

const SHADES: [char; 5] = [' ', '░', '▒', '▓', '█'];
const MARKER: &str = "◉";

fn shade(intensity: f64) -> char {
    match intensity {
        v if v < 0.08 => SHADES[0],
        v if v < 0.25 => SHADES[1],
        v if v < 0.5 => SHADES[2],
        v if v < 0.75 => SHADES[3],
        _ => SHADES[4],
    }
}

pub fn render(frame: &mut Frame, area: Rect, view: &HeatMapView) {
    let [map, side] =
        Layout::horizontal([Constraint::Min(30), Constraint::Length(36)]).areas(area);

    render_map(frame, map, view);

    let [layers, zone, legend] = Layout::vertical([
        Constraint::Length(view.layers.len() as u16 + 2),
        Constraint::Length(7),
        Constraint::Min(3),
    ])
    .areas(side);

    render_layers(frame, layers, view);
    render_zone(frame, zone);
    render_legend(frame, legend);
}

fn render_map(frame: &mut Frame, area: Rect, view: &HeatMapView) {
    let block = panel_block("Metropolitan");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let height = inner.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let field = view.field(width, height);
    let marker = view.sos_marker_visible().then(|| {
        (
            ((SOS_MARKER.x * width as f64) as usize).min(width - 1),
            ((SOS_MARKER.y * height as f64) as usize).min(height - 1),
        )
    });

    let lines: Vec<Line> = field
        .iter()
        .enumerate()
        .map(|(row, values)| {
            let spans: Vec<Span> = values
                .iter()
                .enumerate()
                .map(|(col, &v)| {
                    if marker == Some((col, row)) {
                        return Span::styled(MARKER, Style::default().fg(theme::DANGER).bold());
                    }
                    let x = (col as f64 + 0.5) / width as f64;
                    let y = (row as f64 + 0.5) / height as f64;
                    let color = dominant_tint(x, y)
                        .map(theme::tint_color)
                        .unwrap_or(theme::MUTED);
                    Span::styled(shade(v).to_string(), Style::default().fg(color))
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_layers(frame: &mut Frame, area: Rect, view: &HeatMapView) {
    let lines: Vec<Line> = view
        .layers
        .iter()
        .enumerate()
        .map(|(i, layer)| {
            let check = if layer.enabled { "[x]" } else { "[ ]" };
            let style = if i == view.cursor {
                theme::highlight()
            } else {
                Style::default().fg(theme::TEXT)
            };
            Line::from(Span::styled(format!(" {} {}", check, layer.name), style))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(panel_block("Layers")), area);
}

fn render_zone(frame: &mut Frame, area: Rect) {
    let block = panel_block("Zone Health");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [text, gauge] = Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(inner);

    let trend_color = if ZONE_HEALTH.trend_percent <= 0 {
        theme::SUCCESS
    } else {
        theme::DANGER
    };
    let lines = vec![
        Line::from(Span::styled(ZONE_HEALTH.precinct, theme::title())),
        Line::from(vec![
            Span::styled("Incidents (24h) ", theme::label()),
            Span::styled(ZONE_HEALTH.incidents_24h.to_string(), theme::title()),
            Span::styled(
                format!("  {:+}%", ZONE_HEALTH.trend_percent),
                Style::default().fg(trend_color).bold(),
            ),
        ]),
        Line::from(Span::styled(
            format!("SOS: {} {}", SOS_MARKER.id, SOS_MARKER.label),
            Style::default().fg(theme::DANGER),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), text);

    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(theme::WARNING).bg(theme::BG))
            .ratio(ZONE_HEALTH.load_ratio.clamp(0.0, 1.0))
            .label(format!("Load {:.0}%", ZONE_HEALTH.load_ratio * 100.0)),
        gauge,
    );
}

fn render_legend(frame: &mut Frame, area: Rect) {
    let ramp: String = SHADES[1..].iter().collect();
    let line = Line::from(vec![
        Span::styled("LOW ", theme::label()),
        Span::styled(ramp, Style::default().fg(theme::DANGER)),
        Span::styled(" HIGH", theme::label()),
        Span::styled(format!("   {} SOS", MARKER), Style::default().fg(theme::DANGER).bold()),
    ]);
    frame.render_widget(Paragraph::new(line).block(panel_block("Intensity Legend")), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::heatmap::{ACTIVE_SOS_ALERTS, CRIME_INTENSITY};
    use crate::tui::test_support::render_to_string;

    fn map_text(view: &HeatMapView) -> String {
        // Map only, so the legend's sample glyphs do not interfere
        render_to_string(60, 20, |f| {
            let area = f.area();
            render_map(f, area, view)
        })
    }

    #[test]
    fn test_shade_ramp() {
        assert_eq!(shade(0.0), ' ');
        assert_eq!(shade(0.3), '▒');
        assert_eq!(shade(1.0), '█');
    }

    #[test]
    fn test_default_map_has_field_and_marker() {
        let text = map_text(&HeatMapView::new());
        assert!(text.contains('█'));
        assert!(text.contains(MARKER));
    }

    #[test]
    fn test_layers_blank_field_and_hide_marker() {
        let mut view = HeatMapView::new();
        view.toggle(CRIME_INTENSITY);
        let text = map_text(&view);
        assert!(!text.contains('█'));
        assert!(!text.contains('▒'));
        assert!(text.contains(MARKER));

        view.toggle(ACTIVE_SOS_ALERTS);
        assert!(!map_text(&view).contains(MARKER));
    }

    #[test]
    fn test_full_page() {
        let text = render_to_string(110, 30, |f| {
            let area = f.area();
            render(f, area, &HeatMapView::new())
        });
        assert!(text.contains("Zone Health"));
        assert!(text.contains("Downtown Precinct"));
        assert!(text.contains("[x] Crime Intensity"));
        assert!(text.contains("[ ] Patrol Units"));
        assert!(text.contains("-12%"));
    }
}
