//! Console Application State
//!
//! Owns the shell, per-page view state and the dashboard refresh loop. The
//! refresh loop runs only while the dashboard page is shown; leaving the
//! page drops its handle, and coming back starts a fresh one.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::backend::DashboardSource;
use crate::fixtures;
use crate::model::{Report, User};
use crate::sync::{DashboardState, DashboardSync, SyncConfig, SyncHandle};
use crate::views::{HeatMapView, ListDetail, Page, SettingsView, Shell};

/// Terminal dashboard application
pub struct App {
    pub shell: Shell,
    pub reports: ListDetail<Report>,
    pub users: ListDetail<User>,
    pub heatmap: HeatMapView,
    pub settings: SettingsView,
    /// Fixture-backed source instead of the HTTP backend
    pub demo: bool,
    source: Arc<dyn DashboardSource>,
    sync_config: SyncConfig,
    sync: Option<SyncHandle>,
}

impl App {
    pub fn new(source: Arc<dyn DashboardSource>, sync_config: SyncConfig, demo: bool) -> Self {
        Self {
            shell: Shell::new(),
            reports: ListDetail::new(fixtures::reports()),
            users: ListDetail::new(fixtures::users()),
            heatmap: HeatMapView::new(),
            settings: SettingsView::new(),
            demo,
            source,
            sync_config,
            sync: None,
        }
    }

    /// Name of the data source shown in the header
    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    pub fn is_syncing(&self) -> bool {
        self.sync.is_some()
    }

    /// Start or stop the refresh loop to match the current page.
    /// Must be called from within a tokio runtime.
    pub fn reconcile_sync(&mut self) {
        match (self.shell.page(), self.sync.is_some()) {
            (Page::Dashboard, false) => {
                self.sync = Some(DashboardSync::start(
                    Arc::clone(&self.source),
                    self.sync_config.clone(),
                ));
            }
            (page, true) if page != Page::Dashboard => {
                tracing::debug!(tab = self.shell.active_tab(), "Leaving dashboard");
                self.sync = None;
            }
            _ => {}
        }
    }

    /// Current dashboard state, or the loading state when not syncing
    pub async fn dashboard_snapshot(&self) -> DashboardState {
        match &self.sync {
            Some(handle) => handle.snapshot().await,
            None => DashboardState::default(),
        }
    }

    /// Handle a key press. Returns `true` when the console should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q'), _) => return true,
            (KeyCode::Tab, _) => self.shell.next(),
            (KeyCode::BackTab, _) => self.shell.previous(),
            (KeyCode::Char(c @ '1'..='9'), _) => {
                let index = c as usize - '1' as usize;
                self.shell.jump(index);
            }
            (code, _) => self.handle_page_key(code),
        }

        self.reconcile_sync();
        false
    }

    fn handle_page_key(&mut self, code: KeyCode) {
        match self.shell.page() {
            Page::Reports => match code {
                KeyCode::Up => self.reports.cursor_up(),
                KeyCode::Down => self.reports.cursor_down(),
                KeyCode::Enter => self.reports.select_cursor(),
                KeyCode::Esc | KeyCode::Char('x') => self.reports.clear(),
                _ => {}
            },
            Page::Users => match code {
                KeyCode::Up => self.users.cursor_up(),
                KeyCode::Down => self.users.cursor_down(),
                KeyCode::Enter => self.users.select_cursor(),
                KeyCode::Esc | KeyCode::Char('x') => self.users.clear(),
                _ => {}
            },
            Page::HeatMap => match code {
                KeyCode::Up => self.heatmap.cursor_up(),
                KeyCode::Down => self.heatmap.cursor_down(),
                KeyCode::Enter | KeyCode::Char(' ') => self.heatmap.toggle_current(),
                _ => {}
            },
            Page::Settings => match code {
                KeyCode::Up => self.settings.cursor_up(),
                KeyCode::Down => self.settings.cursor_down(),
                KeyCode::Left | KeyCode::Right => self.settings.next_section(),
                KeyCode::Enter | KeyCode::Char(' ') => self.settings.toggle_current(),
                KeyCode::Char('r') => self.settings.reset(),
                _ => {}
            },
            Page::Dashboard => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::StubStore;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        let source: Arc<dyn DashboardSource> = Arc::new(StubStore::seeded(chrono::Utc::now()));
        App::new(source, SyncConfig::default(), true)
    }

    #[tokio::test]
    async fn test_sync_follows_dashboard_page() {
        let mut app = app();
        assert!(!app.is_syncing());

        app.reconcile_sync();
        assert!(app.is_syncing());

        app.handle_key(press(KeyCode::Char('2')));
        assert_eq!(app.shell.page(), Page::Reports);
        assert!(!app.is_syncing());

        // The SOS tab renders the dashboard, so it refreshes too
        app.handle_key(press(KeyCode::Char('4')));
        assert_eq!(app.shell.active_tab(), "sos");
        assert!(app.is_syncing());
    }

    #[tokio::test]
    async fn test_returning_to_dashboard_starts_loading_again() {
        let mut app = app();
        app.reconcile_sync();
        app.handle_key(press(KeyCode::Tab));
        app.handle_key(press(KeyCode::BackTab));

        assert!(app.is_syncing());
        assert!(app.dashboard_snapshot().await.loading);
    }

    #[tokio::test]
    async fn test_quit_keys() {
        let mut app = app();
        assert!(app.handle_key(press(KeyCode::Char('q'))));
        assert!(app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!app.handle_key(press(KeyCode::Esc)));
    }

    #[tokio::test]
    async fn test_report_selection_keys() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char('2')));
        app.handle_key(press(KeyCode::Down));
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.reports.selected_index(), Some(1));

        app.handle_key(press(KeyCode::Char('x')));
        assert!(app.reports.selected().is_none());
        assert_eq!(app.reports.cursor(), 1);
    }

    #[tokio::test]
    async fn test_out_of_range_digit_is_ignored() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char('5')));
        app.handle_key(press(KeyCode::Char('9')));
        assert_eq!(app.shell.active_tab(), "users");
    }

    #[tokio::test]
    async fn test_settings_keys_stay_local() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char('6')));
        app.handle_key(press(KeyCode::Char(' ')));
        assert!(app.settings.is_modified());
        app.handle_key(press(KeyCode::Char('r')));
        assert!(!app.settings.is_modified());
    }
}
