//! Route overlay tests

use pretty_assertions::assert_eq;
use test_log::test;

use harvest_flow::catalog;
use harvest_flow::logistics::{route_overlays, RouteBounds, DIMMED_OPACITY, DIMMED_WEIGHT, SELECTED_WEIGHT};

#[test]
fn test_only_selected_route_is_emphasised() {
    let routes = catalog::routes();
    let overlays = route_overlays(&routes, 2);

    assert_eq!(overlays.len(), routes.len());
    for overlay in &overlays {
        if overlay.route_id == 3 {
            assert!(overlay.selected);
            assert_eq!(overlay.weight, SELECTED_WEIGHT);
            assert_eq!(overlay.opacity, 1.0);
            assert_eq!(
                overlay.popup.as_deref(),
                Some("Route C - Scenic Route\n61.5 mi • 1h 45m")
            );
        } else {
            assert!(!overlay.selected);
            assert_eq!(overlay.weight, DIMMED_WEIGHT);
            assert_eq!(overlay.opacity, DIMMED_OPACITY);
            assert!(overlay.popup.is_none());
        }
    }
}

#[test]
fn test_overlays_keep_route_geometry_and_colour() {
    let routes = catalog::routes();
    let overlays = route_overlays(&routes, 0);

    for (overlay, route) in overlays.iter().zip(routes.iter()) {
        assert_eq!(overlay.coordinates, route.coordinates);
        assert_eq!(overlay.color, route.color);
    }
}

#[test]
fn test_out_of_range_selection_dims_everything() {
    let routes = catalog::routes();
    let overlays = route_overlays(&routes, routes.len());
    assert!(overlays.iter().all(|o| !o.selected && o.popup.is_none()));
}

#[test]
fn test_bounds_cover_every_route_point() {
    let routes = catalog::routes();
    let points: Vec<(f64, f64)> = routes.iter().flat_map(|r| r.coordinates.clone()).collect();
    let bounds = RouteBounds::of(&points).unwrap();

    assert!(points.iter().all(|p| bounds.contains(*p)));

    let padded = bounds.padded(0.1);
    assert!(padded.min_lat < bounds.min_lat);
    assert!(padded.max_lon > bounds.max_lon);
    assert!(padded.contains(catalog::distribution_center().position));
}
