//! Drag session state machine.
//!
//! One `DragController` coordinates the pointer-down → pointer-move →
//! pointer-up gesture for the selected object and owns the authoritative
//! camera-control flag. Camera control is enabled in every state except an
//! active drag, and `end()` is the single teardown routine invoked from
//! every exit path (release, capture loss, deselection).

use glam::DVec3;

use shared::{ObjectId, RoomBounds, SceneObject};

use super::constraint::{clamp_to_room, collides_with_any};

/// Transient state of one drag gesture. At most one session exists at a
/// time (single-pointer manipulation).
#[derive(Debug, Clone, Copy)]
pub struct DragSession {
    pub object_id: ObjectId,
    /// Vector from the grab point to the object's center, preserved for the
    /// whole gesture so the object does not snap to the cursor.
    pub grab_offset: DVec3,
}

/// Outcome of resolving one pointer-move against the constraints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// Candidate position is legal; commit it through the scene's update
    /// entry point.
    Moved { position: DVec3, hit_ceiling: bool },
    /// Candidate collides with another object; the dragged object holds its
    /// last legal position for this frame.
    Blocked,
}

pub struct DragController {
    session: Option<DragSession>,
    camera_enabled: bool,
}

impl DragController {
    pub fn new() -> Self {
        Self {
            session: None,
            camera_enabled: true,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Whether orbit/pan/zoom camera input may be processed.
    pub fn camera_enabled(&self) -> bool {
        self.camera_enabled
    }

    /// Start a drag on the already-selected object. Suspends camera control
    /// for the duration of the gesture.
    pub fn begin(&mut self, object_id: ObjectId, object_position: DVec3, grab_point: DVec3) {
        self.session = Some(DragSession {
            object_id,
            grab_offset: object_position - grab_point,
        });
        self.camera_enabled = false;
    }

    /// Tear down the active session and restore camera control
    /// unconditionally. Safe to call from any state.
    pub fn end(&mut self) {
        self.session = None;
        self.camera_enabled = true;
    }

    /// Resolve one pointer-move: grab offset → resting height → room clamp
    /// → collision. Returns None when no session is active or `object` is
    /// not the dragged object.
    pub fn resolve_move(
        &self,
        ground_point: DVec3,
        object: &SceneObject,
        others: &[SceneObject],
        bounds: &RoomBounds,
    ) -> Option<DragOutcome> {
        let session = self.session.as_ref()?;
        if session.object_id != object.id {
            return None;
        }

        let half = DVec3::from(object.half_extents());
        let mut raw = ground_point + session.grab_offset;
        // Objects ride on the floor during a drag.
        raw.y = half.y;

        let clamped = clamp_to_room(raw, half, bounds);
        if collides_with_any(clamped.position, half, others, object.id) {
            Some(DragOutcome::Blocked)
        } else {
            Some(DragOutcome::Moved {
                position: clamped.position,
                hit_ceiling: clamped.hit_ceiling,
            })
        }
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::cube_at;

    fn bounds() -> RoomBounds {
        RoomBounds {
            min_x: -5.0,
            max_x: 5.0,
            min_z: -5.0,
            max_z: 5.0,
            ceiling_y: 3.0,
        }
    }

    #[test]
    fn test_camera_disabled_only_while_dragging() {
        let mut drag = DragController::new();
        assert!(drag.camera_enabled());

        drag.begin(1, DVec3::new(0.0, 0.5, 0.0), DVec3::new(0.2, 0.0, 0.1));
        assert!(drag.is_dragging());
        assert!(!drag.camera_enabled());

        drag.end();
        assert!(!drag.is_dragging());
        assert!(drag.camera_enabled());
    }

    #[test]
    fn test_end_is_idempotent() {
        let mut drag = DragController::new();
        drag.begin(1, DVec3::ZERO, DVec3::ZERO);
        drag.end();
        drag.end();
        assert!(drag.camera_enabled());
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_grab_offset_preserved_across_moves() {
        let obj = cube_at(1, [1.0, 0.5, 1.0], [1.0; 3]);
        let mut drag = DragController::new();
        // Grabbed 0.3 m off-center on X.
        drag.begin(1, DVec3::new(1.0, 0.5, 1.0), DVec3::new(0.7, 0.0, 1.0));

        let outcome = drag
            .resolve_move(DVec3::new(2.0, 0.0, 1.0), &obj, &[obj.clone()], &bounds())
            .unwrap();
        assert_eq!(
            outcome,
            DragOutcome::Moved {
                position: DVec3::new(2.3, 0.5, 1.0),
                hit_ceiling: false,
            }
        );
    }

    #[test]
    fn test_resolve_without_session_is_none() {
        let obj = cube_at(1, [0.0, 0.5, 0.0], [1.0; 3]);
        let drag = DragController::new();
        assert!(drag
            .resolve_move(DVec3::ZERO, &obj, &[obj.clone()], &bounds())
            .is_none());
    }

    #[test]
    fn test_resolve_blocked_by_other_object() {
        let dragged = cube_at(1, [-2.0, 0.5, 0.0], [1.0; 3]);
        let obstacle = cube_at(2, [0.0, 0.5, 0.0], [1.0; 3]);
        let mut drag = DragController::new();
        drag.begin(1, DVec3::new(-2.0, 0.5, 0.0), DVec3::new(-2.0, 0.0, 0.0));

        let outcome = drag
            .resolve_move(
                DVec3::new(0.3, 0.0, 0.0),
                &dragged,
                &[dragged.clone(), obstacle],
                &bounds(),
            )
            .unwrap();
        assert_eq!(outcome, DragOutcome::Blocked);
    }

    #[test]
    fn test_resolve_clamps_before_collision() {
        // Target beyond the wall clamps back inside, where no obstacle sits.
        let dragged = cube_at(1, [0.0, 0.5, 0.0], [1.0; 3]);
        let mut drag = DragController::new();
        drag.begin(1, DVec3::new(0.0, 0.5, 0.0), DVec3::new(0.0, 0.0, 0.0));

        let outcome = drag
            .resolve_move(DVec3::new(7.0, 0.0, 0.0), &dragged, &[dragged.clone()], &bounds())
            .unwrap();
        assert_eq!(
            outcome,
            DragOutcome::Moved {
                position: DVec3::new(4.5, 0.5, 0.0),
                hit_ceiling: false,
            }
        );
    }
}
