//! View State
//!
//! Terminal-independent state behind each page: which tab is active, which
//! record is selected, settings toggles and heat-map layers. Renderers in
//! [`crate::tui`] only read from these types.

pub mod heatmap;
pub mod nav;
pub mod selection;
pub mod settings;

pub use heatmap::{HeatMapView, MapLayer};
pub use nav::{page_title, NavItem, Page, Shell, NAV_ITEMS};
pub use selection::ListDetail;
pub use settings::{NotificationPreference, SettingsSection, SettingsView};
