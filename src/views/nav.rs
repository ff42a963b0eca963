//! Tab Navigation
//!
//! The shell holds a single active-tab id. Pages are resolved from the id;
//! ids without a page of their own fall back to the dashboard.

/// A sidebar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    /// Pulsing indicator next to the label
    pub badge: bool,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        id: "dashboard",
        label: "Dashboard",
        badge: false,
    },
    NavItem {
        id: "reports",
        label: "Reports",
        badge: false,
    },
    NavItem {
        id: "heatmap",
        label: "Heat Map",
        badge: false,
    },
    NavItem {
        id: "sos",
        label: "SOS Alerts",
        badge: true,
    },
    NavItem {
        id: "users",
        label: "Users",
        badge: false,
    },
    NavItem {
        id: "settings",
        label: "Settings",
        badge: false,
    },
];

/// The page rendered in the main area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Dashboard,
    Reports,
    HeatMap,
    Users,
    Settings,
}

impl Page {
    /// Resolve a tab id to its page
    pub fn for_tab(tab: &str) -> Page {
        match tab {
            "reports" => Page::Reports,
            "heatmap" => Page::HeatMap,
            "users" => Page::Users,
            "settings" => Page::Settings,
            _ => Page::Dashboard,
        }
    }
}

/// Header title for a tab id
pub fn page_title(tab: &str) -> &'static str {
    match tab {
        "dashboard" => "Dashboard Overview",
        "reports" => "Reports Management",
        "heatmap" => "Incident Heat Map",
        "sos" => "SOS Alerts Monitoring",
        "users" => "User Database",
        "settings" => "System Settings",
        _ => "GuardianOS",
    }
}

/// Active-tab holder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    active_tab: String,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl Shell {
    /// Start on the dashboard
    pub fn new() -> Self {
        Self {
            active_tab: "dashboard".to_string(),
        }
    }

    pub fn active_tab(&self) -> &str {
        &self.active_tab
    }

    /// Set the active tab. Any id is accepted.
    pub fn set_active_tab(&mut self, tab: impl Into<String>) {
        self.active_tab = tab.into();
    }

    pub fn page(&self) -> Page {
        Page::for_tab(&self.active_tab)
    }

    pub fn title(&self) -> &'static str {
        page_title(&self.active_tab)
    }

    /// Sidebar position of the active tab, if it has one
    pub fn active_index(&self) -> Option<usize> {
        NAV_ITEMS.iter().position(|item| item.id == self.active_tab)
    }

    /// Move to the next sidebar entry, wrapping
    pub fn next(&mut self) {
        let index = self.active_index().map(|i| (i + 1) % NAV_ITEMS.len()).unwrap_or(0);
        self.active_tab = NAV_ITEMS[index].id.to_string();
    }

    /// Move to the previous sidebar entry, wrapping
    pub fn previous(&mut self) {
        let len = NAV_ITEMS.len();
        let index = self.active_index().map(|i| (i + len - 1) % len).unwrap_or(0);
        self.active_tab = NAV_ITEMS[index].id.to_string();
    }

    /// Jump to the sidebar entry at `index`; false when out of range
    pub fn jump(&mut self, index: usize) -> bool {
        match NAV_ITEMS.get(index) {
            Some(item) => {
                self.active_tab = item.id.to_string();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_mapping() {
        assert_eq!(Page::for_tab("dashboard"), Page::Dashboard);
        assert_eq!(Page::for_tab("reports"), Page::Reports);
        assert_eq!(Page::for_tab("heatmap"), Page::HeatMap);
        assert_eq!(Page::for_tab("users"), Page::Users);
        assert_eq!(Page::for_tab("settings"), Page::Settings);
    }

    #[test]
    fn test_unknown_tabs_fall_back_to_dashboard() {
        assert_eq!(Page::for_tab("sos"), Page::Dashboard);
        assert_eq!(Page::for_tab("audit-log"), Page::Dashboard);
        assert_eq!(Page::for_tab(""), Page::Dashboard);
    }

    #[test]
    fn test_titles() {
        assert_eq!(page_title("dashboard"), "Dashboard Overview");
        assert_eq!(page_title("reports"), "Reports Management");
        assert_eq!(page_title("heatmap"), "Incident Heat Map");
        assert_eq!(page_title("sos"), "SOS Alerts Monitoring");
        assert_eq!(page_title("users"), "User Database");
        assert_eq!(page_title("settings"), "System Settings");
        assert_eq!(page_title("anything"), "GuardianOS");
    }

    #[test]
    fn test_sos_tab_keeps_title_but_shows_dashboard() {
        let mut shell = Shell::new();
        shell.set_active_tab("sos");
        assert_eq!(shell.page(), Page::Dashboard);
        assert_eq!(shell.title(), "SOS Alerts Monitoring");
        assert_eq!(shell.active_index(), Some(3));
    }

    #[test]
    fn test_cycling_wraps() {
        let mut shell = Shell::new();
        shell.previous();
        assert_eq!(shell.active_tab(), "settings");
        shell.next();
        assert_eq!(shell.active_tab(), "dashboard");
        shell.next();
        assert_eq!(shell.active_tab(), "reports");
    }

    #[test]
    fn test_cycling_from_unknown_tab_starts_at_first() {
        let mut shell = Shell::new();
        shell.set_active_tab("archive");
        assert_eq!(shell.active_index(), None);
        shell.next();
        assert_eq!(shell.active_tab(), "dashboard");
    }

    #[test]
    fn test_jump() {
        let mut shell = Shell::new();
        assert!(shell.jump(4));
        assert_eq!(shell.page(), Page::Users);
        assert!(!shell.jump(6));
        assert_eq!(shell.active_tab(), "users");
    }

    #[test]
    fn test_sidebar_badges() {
        let badged: Vec<_> = NAV_ITEMS.iter().filter(|i| i.badge).map(|i| i.id).collect();
        assert_eq!(badged, vec!["sos"]);
    }
}
