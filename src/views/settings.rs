//! Settings Page State
//!
//! Notification toggles are local only. There is no endpoint to save them,
//! so "save" is not offered and reset restores the seeded defaults.

use crate::fixtures::NOTIFICATION_DEFAULTS;

/// Settings sections shown in the left column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsSection {
    Profile,
    Notifications,
    Security,
}

impl SettingsSection {
    pub fn all() -> &'static [SettingsSection] {
        &[
            SettingsSection::Profile,
            SettingsSection::Notifications,
            SettingsSection::Security,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SettingsSection::Profile => "Profile",
            SettingsSection::Notifications => "Notifications",
            SettingsSection::Security => "Security",
        }
    }
}

/// One notification toggle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationPreference {
    pub title: &'static str,
    pub description: &'static str,
    pub enabled: bool,
}

/// Settings page state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsView {
    pub section: SettingsSection,
    pub preferences: Vec<NotificationPreference>,
    pub cursor: usize,
}

impl Default for SettingsView {
    fn default() -> Self {
        Self {
            section: SettingsSection::Profile,
            preferences: default_preferences(),
            cursor: 0,
        }
    }
}

fn default_preferences() -> Vec<NotificationPreference> {
    NOTIFICATION_DEFAULTS
        .iter()
        .map(|&(title, description, enabled)| NotificationPreference {
            title,
            description,
            enabled,
        })
        .collect()
}

impl SettingsView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cycle to the next section
    pub fn next_section(&mut self) {
        let all = SettingsSection::all();
        let index = all.iter().position(|s| *s == self.section).unwrap_or(0);
        self.section = all[(index + 1) % all.len()];
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.preferences.len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Flip the preference under the cursor
    pub fn toggle_current(&mut self) {
        if let Some(pref) = self.preferences.get_mut(self.cursor) {
            pref.enabled = !pref.enabled;
            tracing::debug!(preference = pref.title, enabled = pref.enabled, "Notification preference toggled");
        }
    }

    /// Restore seeded defaults
    pub fn reset(&mut self) {
        self.preferences = default_preferences();
    }

    /// Any toggle differs from its default
    pub fn is_modified(&self) -> bool {
        self.preferences != default_preferences()
    }
}
