// Host-side tests for the UV -> pixel shape synchronizer.

mod common;

use common::{assert_close, uv_rect};
use glam::DVec2;
use region_core::*;

#[test]
fn apply_places_handles_and_overlay_on_800x600() {
    let screen = ScreenDimensions::new(800.0, 600.0);
    let mut handles = HandleSet::new();

    let synced = ShapeSynchronizer::apply(&uv_rect(0.0, 0.0, 0.5, 0.5), screen, &mut handles);

    assert_eq!(handles.get(HandleType::TopLeft).position(), DVec2::new(0.0, 0.0));
    assert_eq!(handles.get(HandleType::TopRight).position(), DVec2::new(400.0, 0.0));
    assert_eq!(handles.get(HandleType::BottomLeft).position(), DVec2::new(0.0, 300.0));
    assert_eq!(handles.get(HandleType::BottomRight).position(), DVec2::new(400.0, 300.0));
    assert_eq!(
        synced.overlay,
        RectGeometry::new(DVec2::new(0.0, 0.0), DVec2::new(400.0, 300.0))
    );
    assert_eq!(synced.readout.to_string(), "50% x 50%");
}

#[test]
fn readout_is_rounded_to_two_decimals() {
    let screen = ScreenDimensions::new(1920.0, 1080.0);
    let mut handles = HandleSet::new();
    let synced = ShapeSynchronizer::apply(&uv_rect(0.1, 0.2, 0.123456, 0.87654), screen, &mut handles);
    assert_close(synced.readout.width_pct, 2.35);
    assert_close(synced.readout.height_pct, 67.65);
}

#[test]
fn inverted_rectangle_is_normalized_before_layout() {
    let screen = ScreenDimensions::new(800.0, 600.0);
    let mut handles = HandleSet::new();

    // corner A below/right of corner B
    let synced = ShapeSynchronizer::apply(&uv_rect(0.75, 0.5, 0.25, 0.0), screen, &mut handles);

    assert_eq!(
        synced.overlay,
        RectGeometry::new(DVec2::new(200.0, 0.0), DVec2::new(400.0, 300.0))
    );
    assert_eq!(handles.get(HandleType::TopLeft).position(), DVec2::new(200.0, 0.0));
    assert_eq!(handles.get(HandleType::BottomRight).position(), DVec2::new(600.0, 300.0));
    assert!(synced.readout.width_pct >= 0.0 && synced.readout.height_pct >= 0.0);
}

#[test]
fn apply_on_degenerate_screen_collapses_to_origin() {
    let screen = ScreenDimensions::new(0.0, 0.0);
    let mut handles = HandleSet::new();
    let synced = ShapeSynchronizer::apply(&uv_rect(0.2, 0.2, 0.8, 0.8), screen, &mut handles);
    for handle in handles.iter() {
        assert_eq!(handle.position(), DVec2::ZERO);
    }
    assert_eq!(synced.overlay.size, DVec2::ZERO);
}

#[test]
fn out_of_range_rectangle_keeps_overlay_on_the_handles() {
    let screen = ScreenDimensions::new(800.0, 600.0);
    let mut handles = HandleSet::new();

    let synced = ShapeSynchronizer::apply(&uv_rect(-0.1, 0.0, 1.2, 1.2), screen, &mut handles);

    let top_left = handles.get(HandleType::TopLeft).position();
    let bottom_right = handles.get(HandleType::BottomRight).position();
    assert_eq!(top_left, DVec2::new(0.0, 0.0));
    assert_eq!(bottom_right, DVec2::new(800.0, 600.0));
    assert_eq!(synced.overlay.origin, top_left);
    assert_eq!(synced.overlay.origin + synced.overlay.size, bottom_right);
    assert_eq!(synced.readout.to_string(), "100% x 100%");
}
