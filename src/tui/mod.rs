//! Terminal Dashboard
//!
//! ratatui front end: sidebar, header and one page at a time. The event
//! loop redraws on a short tick and reads the dashboard state from the
//! refresh loop on every frame.

pub mod app;
mod header;
mod pages;
mod sidebar;
pub mod theme;

pub use app::App;

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    layout::{Constraint, Layout},
    prelude::CrosstermBackend,
    widgets::Block,
    Frame, Terminal,
};

use crate::sync::DashboardState;
use crate::views::Page;

/// Redraw / input poll interval
const TICK_RATE: Duration = Duration::from_millis(200);

/// Draw one frame
pub fn draw(frame: &mut Frame, app: &App, dashboard: &DashboardState) {
    let area = frame.area();
    frame.render_widget(Block::default().style(theme::panel().bg(theme::BG)), area);

    let [side, main] = Layout::horizontal([Constraint::Length(26), Constraint::Min(40)]).areas(area);
    sidebar::render(frame, side, &app.shell);

    let [top, body] = Layout::vertical([Constraint::Length(3), Constraint::Min(5)]).areas(main);

    let page = app.shell.page();
    let live = (page == Page::Dashboard).then_some(dashboard);
    header::render(
        frame,
        top,
        &header::HeaderInfo {
            title: app.shell.title(),
            source: app.source_name(),
            demo: app.demo,
            dashboard: live,
        },
    );

    match page {
        Page::Dashboard => pages::dashboard::render(frame, body, dashboard),
        Page::Reports => pages::reports::render(frame, body, &app.reports),
        Page::HeatMap => pages::heatmap::render(frame, body, &app.heatmap),
        Page::Users => pages::users::render(frame, body, &app.users),
        Page::Settings => pages::settings::render(frame, body, &app.settings),
    }
}

/// Set up the terminal for TUI rendering.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restore the terminal to its original state.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run the console until the operator quits
pub async fn run(mut app: App) -> anyhow::Result<()> {
    use std::io::IsTerminal;
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("The GuardianOS console requires a terminal (TTY); try guardian-cli instead");
    }

    // Restore the terminal before the default panic output
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let mut terminal = setup_terminal()?;
    app.reconcile_sync();
    tracing::info!(source = app.source_name(), demo = app.demo, "Console started");

    let result = event_loop(&mut terminal, &mut app).await;

    restore_terminal(&mut terminal)?;
    tracing::info!("Console closed");
    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    loop {
        let dashboard = app.dashboard_snapshot().await;
        terminal.draw(|frame| draw(frame, app, &dashboard))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key) {
                    return Ok(());
                }
            }
        }

        // Let the refresh loop make progress between frames
        tokio::task::yield_now().await;
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::render_to_string;
    use super::*;
    use crate::backend::DashboardSource;
    use crate::model::{ComplaintStats, SosStats};
    use crate::server::StubStore;
    use crate::sync::{CycleData, SyncConfig};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::sync::Arc;

    fn app() -> App {
        let source: Arc<dyn DashboardSource> = Arc::new(StubStore::new());
        App::new(source, SyncConfig::default(), true)
    }

    fn loaded(total: u64, today: u64, alerts_today: u64) -> DashboardState {
        let mut state = DashboardState::default();
        state.apply_success(
            CycleData {
                complaints: ComplaintStats {
                    total_complaints: total,
                    today_complaints: today,
                },
                sos: SosStats {
                    total_alerts: 5,
                    today_alerts: alerts_today,
                },
                recent: Vec::new(),
            },
            chrono::Utc::now(),
        );
        state
    }

    #[test]
    fn test_dashboard_frame() {
        let app = app();
        let text = render_to_string(140, 40, |f| draw(f, &app, &loaded(1284, 42, 3)));

        assert!(text.contains("GuardianOS"));
        assert!(text.contains("Dashboard Overview"));
        assert!(text.contains("1,284"));
        assert!(text.contains("No recent reports"));
        assert!(text.contains("DEMO"));
    }

    #[test]
    fn test_unknown_tab_shows_dashboard_page() {
        let mut app = app();
        app.shell.set_active_tab("audit");
        let text = render_to_string(140, 40, |f| draw(f, &app, &loaded(7, 1, 0)));

        assert!(text.contains("GuardianOS"));
        assert!(text.contains("Total Reports"));
    }

    #[tokio::test]
    async fn test_other_pages_render() {
        let mut app = app();
        let state = DashboardState::default();

        for (key, needle) in [
            ('2', "Reports Management"),
            ('3', "Incident Heat Map"),
            ('5', "User Database"),
            ('6', "System Settings"),
        ] {
            app.handle_key(KeyEvent::new(KeyCode::Char(key), KeyModifiers::NONE));
            let text = render_to_string(140, 40, |f| draw(f, &app, &state));
            assert!(text.contains(needle), "missing {needle}");
        }
    }
}
