// Host-side tests for the drag state machine.

use glam::DVec2;
use region_core::*;

#[test]
fn controller_starts_idle_and_ignores_moves() {
    let controller = DragController::new();
    assert_eq!(controller.state(), DragState::Idle);

    let mut queried = false;
    let routed = controller.route_move(DVec2::new(10.0, 10.0), || {
        queried = true;
        SurfaceTransform::IDENTITY
    });
    assert!(routed.is_none());
    assert!(!queried, "idle controller must not query the surface transform");
}

#[test]
fn begin_then_release_round_trips_state() {
    let mut controller = DragController::new();
    Handle::new(HandleType::BottomRight).begin_drag(&mut controller);
    assert_eq!(controller.state(), DragState::Dragging(HandleType::BottomRight));

    assert_eq!(controller.release(), Some(HandleType::BottomRight));
    assert_eq!(controller.state(), DragState::Idle);
}

#[test]
fn releasing_while_idle_is_a_no_op() {
    let mut controller = DragController::new();
    assert_eq!(controller.release(), None);
    assert_eq!(controller.release(), None);
    assert!(!controller.is_dragging());
}

#[test]
fn second_press_replaces_active_handle() {
    let mut controller = DragController::new();
    controller.begin(HandleType::TopLeft);
    controller.begin(HandleType::BottomLeft);
    assert_eq!(controller.active(), Some(HandleType::BottomLeft));
}

#[test]
fn route_move_applies_surface_transform() {
    let mut controller = DragController::new();
    controller.begin(HandleType::TopRight);
    let routed = controller.route_move(DVec2::new(210.0, 120.0), || {
        SurfaceTransform::new(0.5, 0.5, 10.0, 20.0)
    });
    assert_eq!(routed, Some((HandleType::TopRight, DVec2::new(400.0, 200.0))));
}

#[test]
fn route_move_drops_events_on_degenerate_transform() {
    let mut controller = DragController::new();
    controller.begin(HandleType::TopRight);
    let routed = controller.route_move(DVec2::ZERO, || SurfaceTransform::new(1.0, 0.0, 0.0, 0.0));
    assert!(routed.is_none());
    // The session itself survives a bad frame
    assert!(controller.is_dragging());
}
