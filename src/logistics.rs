//! Route overlays for the logistics map.
//!
//! The map itself is a drawing surface; this module decides what gets drawn
//! on it for the selected route.

use crate::models::{Rgb, Route};

/// Line weight of the selected route
pub const SELECTED_WEIGHT: u8 = 5;
/// Line weight of the other routes
pub const DIMMED_WEIGHT: u8 = 3;
/// Opacity of the other routes
pub const DIMMED_OPACITY: f32 = 0.3;

/// One polyline to draw on the map
#[derive(Debug, Clone, PartialEq)]
pub struct RouteOverlay {
    pub route_id: u32,
    pub coordinates: Vec<(f64, f64)>,
    pub color: Rgb,
    pub weight: u8,
    pub opacity: f32,
    pub selected: bool,
    /// Only the selected route carries a popup
    pub popup: Option<String>,
}

/// Overlays for every route, with `selected` emphasised
pub fn route_overlays(routes: &[Route], selected: usize) -> Vec<RouteOverlay> {
    routes
        .iter()
        .enumerate()
        .map(|(index, route)| {
            let is_selected = index == selected;
            RouteOverlay {
                route_id: route.id,
                coordinates: route.coordinates.clone(),
                color: route.color,
                weight: if is_selected { SELECTED_WEIGHT } else { DIMMED_WEIGHT },
                opacity: if is_selected { 1.0 } else { DIMMED_OPACITY },
                selected: is_selected,
                popup: is_selected
                    .then(|| format!("{}\n{} • {}", route.name, route.distance, route.duration)),
            }
        })
        .collect()
}

/// Latitude/longitude bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl RouteBounds {
    /// Bounding box of `coordinates`, `None` when empty
    pub fn of(coordinates: &[(f64, f64)]) -> Option<Self> {
        let (first_lat, first_lon) = *coordinates.first()?;
        let init = RouteBounds {
            min_lat: first_lat,
            max_lat: first_lat,
            min_lon: first_lon,
            max_lon: first_lon,
        };

        Some(coordinates.iter().fold(init, |b, &(lat, lon)| RouteBounds {
            min_lat: b.min_lat.min(lat),
            max_lat: b.max_lat.max(lat),
            min_lon: b.min_lon.min(lon),
            max_lon: b.max_lon.max(lon),
        }))
    }

    /// Widen each side by `fraction` of the span
    pub fn padded(&self, fraction: f64) -> Self {
        let lat_pad = (self.max_lat - self.min_lat) * fraction;
        let lon_pad = (self.max_lon - self.min_lon) * fraction;
        RouteBounds {
            min_lat: self.min_lat - lat_pad,
            max_lat: self.max_lat + lat_pad,
            min_lon: self.min_lon - lon_pad,
            max_lon: self.max_lon + lon_pad,
        }
    }

    pub fn contains(&self, (lat, lon): (f64, f64)) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat) && (self.min_lon..=self.max_lon).contains(&lon)
    }
}

/// Colour band of an efficiency score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EfficiencyBand {
    High,
    Medium,
    Low,
}

pub fn efficiency_band(efficiency: u8) -> EfficiencyBand {
    if efficiency >= 90 {
        EfficiencyBand::High
    } else if efficiency >= 80 {
        EfficiencyBand::Medium
    } else {
        EfficiencyBand::Low
    }
}
