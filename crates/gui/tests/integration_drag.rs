//! Integration tests for the drag pipeline: project → clamp → collide →
//! commit, driven through the headless harness.

use habita_gui_lib::fixtures::ten_meter_room;
use habita_gui_lib::harness::EditorHarness;

#[test]
fn test_drag_toward_wall_clamps_to_inset() {
    // Room bounds [-5, 5] × [-5, 5], ceiling 3; half extents (0.5, 0.5, 0.5).
    let mut h = EditorHarness::with_room(ten_meter_room());
    let id = h.add_box_at([1.0, 1.0, 1.0], [0.0, 0.5, 0.0]);
    h.select(id);
    assert!(h.begin_drag(id));

    // Raw target (7, 0.5, 0) must commit as (4.5, 0.5, 0).
    assert!(h.drag_to(7.0, 0.0));
    assert_eq!(h.position_of(id).unwrap(), [4.5, 0.5, 0.0]);

    h.end_drag();
}

#[test]
fn test_drag_into_overlap_holds_last_legal_position() {
    let mut h = EditorHarness::with_room(ten_meter_room());
    let moving = h.add_box_at([1.0, 1.0, 1.0], [-2.0, 0.5, 0.0]);
    let obstacle = h.add_box_at([1.0, 1.0, 1.0], [0.0, 0.5, 0.0]);
    h.select(moving);
    assert!(h.begin_drag(moving));

    // Legal move first.
    assert!(h.drag_to(-1.5, 0.0));
    assert_eq!(h.position_of(moving).unwrap(), [-1.5, 0.5, 0.0]);

    // A candidate overlapping the obstacle is rejected: no move, no
    // snap-back, the previous committed position stays.
    assert!(!h.drag_to(-0.3, 0.0));
    assert_eq!(h.position_of(moving).unwrap(), [-1.5, 0.5, 0.0]);
    assert_eq!(h.position_of(obstacle).unwrap(), [0.0, 0.5, 0.0]);

    // A later collision-free candidate moves again.
    assert!(h.drag_to(-1.8, 2.0));
    assert_eq!(h.position_of(moving).unwrap(), [-1.8, 0.5, 2.0]);
}

#[test]
fn test_face_contact_placement_is_allowed() {
    let mut h = EditorHarness::with_room(ten_meter_room());
    let moving = h.add_box_at([1.0, 1.0, 1.0], [-3.0, 0.5, 0.0]);
    h.add_box_at([1.0, 1.0, 1.0], [0.0, 0.5, 0.0]);
    h.select(moving);
    assert!(h.begin_drag(moving));

    // Flush against the obstacle's face: centers exactly 1 m apart.
    assert!(h.drag_to(-1.0, 0.0));
    assert_eq!(h.position_of(moving).unwrap(), [-1.0, 0.5, 0.0]);
}

#[test]
fn test_grab_offset_prevents_snap_to_cursor() {
    let mut h = EditorHarness::with_room(ten_meter_room());
    let id = h.add_box_at([1.0, 1.0, 1.0], [1.0, 0.5, 1.0]);
    h.select(id);
    // Grab 0.4 m off-center on X.
    assert!(h.begin_drag_at(id, [0.6, 0.5, 1.0]));

    assert!(h.drag_to(2.0, 1.0));
    assert_eq!(h.position_of(id).unwrap(), [2.4, 0.5, 1.0]);
}

#[test]
fn test_camera_control_balanced_across_release_and_deselect() {
    let mut h = EditorHarness::with_room(ten_meter_room());
    let id = h.add_box_at([1.0, 1.0, 1.0], [0.0, 0.5, 0.0]);
    assert!(h.camera_enabled());

    // Normal release path.
    h.select(id);
    assert!(h.begin_drag(id));
    assert!(!h.camera_enabled());
    h.end_drag();
    assert!(h.camera_enabled());

    // Deselection mid-drag must also restore camera control and discard
    // the session.
    assert!(h.begin_drag(id));
    assert!(!h.camera_enabled());
    h.clear_selection();
    assert!(h.camera_enabled());
    assert!(!h.drag.is_dragging());

    // Ending with no session active stays balanced.
    h.end_drag();
    assert!(h.camera_enabled());
}

#[test]
fn test_drag_requires_prior_selection() {
    let mut h = EditorHarness::with_room(ten_meter_room());
    let id = h.add_box_at([1.0, 1.0, 1.0], [0.0, 0.5, 0.0]);

    // Pointer-down over an unselected object selects, never drags.
    assert!(!h.begin_drag(id));
    assert!(h.camera_enabled());
    assert!(!h.drag_to(2.0, 0.0));
    assert_eq!(h.position_of(id).unwrap(), [0.0, 0.5, 0.0]);
}

#[test]
fn test_oversized_object_pins_to_midline() {
    let mut h = EditorHarness::with_room(ten_meter_room());
    // 14 m wide: wider than the 10 m room.
    let id = h.add_box_at([14.0, 1.0, 1.0], [0.0, 0.5, 0.0]);
    h.select(id);
    assert!(h.begin_drag(id));

    assert!(h.drag_to(3.0, 1.0));
    let pos = h.position_of(id).unwrap();
    assert_eq!(pos[0], 0.0);
    assert_eq!(pos[2], 1.0);
}

#[test]
fn test_object_taller_than_room_flags_ceiling() {
    let mut h = EditorHarness::with_room(ten_meter_room());
    // 4 m tall in a 3 m room: the resting height already exceeds the
    // ceiling inset, so every candidate reports the ceiling hit.
    let id = h.add_box_at([1.0, 4.0, 1.0], [0.0, 2.0, 0.0]);
    h.select(id);
    assert!(h.begin_drag(id));

    assert!(h.drag_to(1.0, 0.0));
    assert!(h.hit_ceiling());

    let pos = h.position_of(id).unwrap();
    // Y pinned to the floor/ceiling midline of the inverted interval.
    assert_eq!(pos[1], 1.5);
}

#[test]
fn test_collision_against_every_other_object() {
    let mut h = EditorHarness::with_room(ten_meter_room());
    let moving = h.add_box_at([1.0, 1.0, 1.0], [0.0, 0.5, 0.0]);
    h.add_box_at([1.0, 1.0, 1.0], [3.0, 0.5, 0.0]);
    h.add_box_at([1.0, 1.0, 1.0], [-3.0, 0.5, 0.0]);
    h.select(moving);
    assert!(h.begin_drag(moving));

    // Blocked on either side, free in between.
    assert!(!h.drag_to(2.4, 0.0));
    assert!(!h.drag_to(-2.4, 0.0));
    assert!(h.drag_to(0.0, 2.0));
    assert_eq!(h.position_of(moving).unwrap(), [0.0, 0.5, 2.0]);
}
