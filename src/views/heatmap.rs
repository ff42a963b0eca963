//! Heat Map State
//!
//! Mock incident density built from the fixed hot spots, plus layer
//! toggles. Coordinates are fractions of the map area in `[0, 1]`.

use crate::fixtures::{HotSpot, HotSpotTint, HOT_SPOTS, MAP_LAYERS};

pub const CRIME_INTENSITY: &str = "Crime Intensity";
pub const ACTIVE_SOS_ALERTS: &str = "Active SOS Alerts";

/// A toggleable overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapLayer {
    pub name: &'static str,
    pub enabled: bool,
}

/// Combined density of all hot spots at a point, clamped to `[0, 1]`
pub fn intensity_at(x: f64, y: f64) -> f64 {
    HOT_SPOTS
        .iter()
        .map(|spot| spot_contribution(spot, x, y))
        .sum::<f64>()
        .min(1.0)
}

fn spot_contribution(spot: &HotSpot, x: f64, y: f64) -> f64 {
    let dx = x - spot.x;
    let dy = y - spot.y;
    let dist_sq = dx * dx + dy * dy;
    spot.weight * (-dist_sq / (2.0 * spot.radius * spot.radius)).exp()
}

/// Tint of the strongest hot spot at a point
pub fn dominant_tint(x: f64, y: f64) -> Option<HotSpotTint> {
    HOT_SPOTS
        .iter()
        .map(|spot| (spot.tint, spot_contribution(spot, x, y)))
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(tint, _)| tint)
}

/// Heat map page state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatMapView {
    pub layers: Vec<MapLayer>,
    pub cursor: usize,
}

impl Default for HeatMapView {
    fn default() -> Self {
        Self {
            layers: MAP_LAYERS
                .iter()
                .map(|&(name, enabled)| MapLayer { name, enabled })
                .collect(),
            cursor: 0,
        }
    }
}

impl HeatMapView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.layers.iter().any(|l| l.name == name && l.enabled)
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.layers.len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Flip the layer under the cursor
    pub fn toggle_current(&mut self) {
        if let Some(layer) = self.layers.get_mut(self.cursor) {
            layer.enabled = !layer.enabled;
        }
    }

    /// Flip a layer by name; false when no such layer exists
    pub fn toggle(&mut self, name: &str) -> bool {
        match self.layers.iter_mut().find(|l| l.name == name) {
            Some(layer) => {
                layer.enabled = !layer.enabled;
                true
            }
            None => false,
        }
    }

    pub fn sos_marker_visible(&self) -> bool {
        self.is_enabled(ACTIVE_SOS_ALERTS)
    }

    /// Sampled density for a `width` x `height` grid, row-major.
    /// All zeros while the intensity layer is off.
    pub fn field(&self, width: usize, height: usize) -> Vec<Vec<f64>> {
        let show = self.is_enabled(CRIME_INTENSITY);
        (0..height)
            .map(|row| {
                (0..width)
                    .map(|col| {
                        if show {
                            intensity_at(sample(col, width), sample(row, height))
                        } else {
                            0.0
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

/// Center of cell `i` of `n` as a fraction
fn sample(i: usize, n: usize) -> f64 {
    (i as f64 + 0.5) / n.max(1) as f64
}
