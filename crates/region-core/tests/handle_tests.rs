// Host-side tests for handle identity and positioning.

use glam::DVec2;
use region_core::*;

#[test]
fn handle_ids_map_both_ways() {
    for kind in HandleType::ALL {
        assert_eq!(HandleType::from_id(kind.id()), Ok(kind));
        assert_eq!(HandleType::from_index(kind.index()), Some(kind));
        assert_eq!(kind.id().parse::<HandleType>(), Ok(kind));
    }
    assert_eq!(HandleType::TopLeft.id(), "tl");
    assert_eq!(HandleType::TopRight.id(), "tr");
    assert_eq!(HandleType::BottomLeft.id(), "bl");
    assert_eq!(HandleType::BottomRight.id(), "br");
}

#[test]
fn unknown_handle_ids_are_rejected() {
    assert_eq!(
        Handle::from_id("center").unwrap_err(),
        RegionError::UnknownHandle("center".to_string())
    );
    assert!(HandleType::from_id("TL").is_err());
    assert!(HandleType::from_id("").is_err());
    assert_eq!(HandleType::from_index(4), None);
}

#[test]
fn handle_type_serializes_as_index() {
    let json = serde_json::to_string(&HandleType::BottomLeft).unwrap();
    assert_eq!(json, "2");
    let kind: HandleType = serde_json::from_str("3").unwrap();
    assert_eq!(kind, HandleType::BottomRight);
    assert!(serde_json::from_str::<HandleType>("7").is_err());
}

#[test]
fn set_position_without_sink_clamps_silently() {
    let screen = ScreenDimensions::new(800.0, 600.0);
    let mut handle = Handle::new(HandleType::TopRight);
    let applied = handle.set_position(DVec2::new(900.0, -20.0), screen, None);
    assert_eq!(applied, DVec2::new(800.0, 0.0));
    assert_eq!(handle.position(), applied);
}

#[test]
fn set_position_with_sink_reports_normalized_corner() {
    let screen = ScreenDimensions::new(800.0, 600.0);
    let mut sink: Vec<UvUpdate> = Vec::new();
    let mut handle = Handle::new(HandleType::TopLeft);

    let applied = handle.set_position(DVec2::new(-50.0, 700.0), screen, Some(&mut sink));

    assert_eq!(applied, DVec2::new(0.0, 600.0));
    assert_eq!(
        sink,
        vec![UvUpdate {
            x: 0.0,
            y: 1.0,
            kind: HandleType::TopLeft
        }]
    );
}

#[test]
fn degenerate_screen_moves_handle_but_skips_notification() {
    let screen = ScreenDimensions::new(0.0, 600.0);
    let mut sink: Vec<UvUpdate> = Vec::new();
    let mut handle = Handle::new(HandleType::BottomRight);
    let applied = handle.set_position(DVec2::new(30.0, 30.0), screen, Some(&mut sink));
    assert_eq!(applied, DVec2::new(0.0, 30.0));
    assert!(sink.is_empty());
}

#[test]
fn uv_update_matches_host_wire_format() {
    let update = UvUpdate::new(NormalizedPoint::new(0.25, 0.5), HandleType::TopRight);
    let value: serde_json::Value = serde_json::to_value(update).unwrap();
    assert_eq!(value, serde_json::json!({ "x": 0.25, "y": 0.5, "type": 1 }));
}
