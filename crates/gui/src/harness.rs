//! Headless editor harness for programmatic scene manipulation.
//!
//! Drives the same scene state, selection and drag controller as the
//! interactive viewport, but takes ground-plane points directly instead of
//! pointer events. Integration tests use it to exercise the full
//! project → clamp → collide → commit pipeline without a window.

use glam::DVec3;

use shared::{FurnitureItem, ObjectId, ObjectKind, RoomConfig, SceneDescription};

use crate::state::scene::SceneState;
use crate::state::selection::SelectionState;
use crate::validation::SceneValidator;
use crate::viewport::drag::{DragController, DragOutcome};
use crate::viewport::measure::{measure, GroupMeasurement};

/// Headless editor: scene + selection + drag controller without a window.
pub struct EditorHarness {
    pub scene: SceneState,
    pub selection: SelectionState,
    pub drag: DragController,
    /// Ceiling flag from the last committed move
    last_hit_ceiling: bool,
}

impl EditorHarness {
    /// Create a harness with the default room.
    pub fn new() -> Self {
        Self {
            scene: SceneState::default(),
            selection: SelectionState::default(),
            drag: DragController::new(),
            last_hit_ceiling: false,
        }
    }

    /// Create a harness with a specific room configuration.
    pub fn with_room(room: RoomConfig) -> Self {
        let mut harness = Self::new();
        harness.scene.set_room(room);
        harness
    }

    // ── Scene manipulation ────────────────────────────────────

    /// Add a unit cube resting on the floor at the room center.
    pub fn add_cube(&mut self) -> ObjectId {
        self.scene.add_primitive(ObjectKind::Cube)
    }

    /// Add a unit sphere (bounding box 1×1×1).
    pub fn add_sphere(&mut self) -> ObjectId {
        self.scene.add_primitive(ObjectKind::Sphere)
    }

    /// Add a unit cylinder (bounding box 1×1×1).
    pub fn add_cylinder(&mut self) -> ObjectId {
        self.scene.add_primitive(ObjectKind::Cylinder)
    }

    /// Add a unit cone (bounding box 1×1×1).
    pub fn add_cone(&mut self) -> ObjectId {
        self.scene.add_primitive(ObjectKind::Cone)
    }

    /// Add a box of the given size at an explicit position.
    pub fn add_box_at(&mut self, scale: [f64; 3], position: [f64; 3]) -> ObjectId {
        let id = self
            .scene
            .add_object(ObjectKind::Cube, scale, crate::state::scene::DEFAULT_OBJECT_COLOR);
        // Creation placed it at the room center; move it where the test wants it.
        self.scene
            .set_object_position(id, position)
            .unwrap_or_else(|e| tracing::warn!("harness placement failed: {e}"));
        id
    }

    /// Add a furniture piece from a catalog item.
    pub fn add_furniture(&mut self, item: &FurnitureItem) -> ObjectId {
        self.scene.add_furniture(item)
    }

    pub fn object_count(&self) -> usize {
        self.scene.objects().len()
    }

    pub fn position_of(&self, id: ObjectId) -> Option<[f64; 3]> {
        self.scene.get_object(id).map(|o| o.position)
    }

    // ── Selection ─────────────────────────────────────────────

    pub fn select(&mut self, id: ObjectId) {
        self.selection.select(id);
    }

    /// Deselect. Terminates any live drag first, exactly like clicking
    /// empty space in the viewport.
    pub fn clear_selection(&mut self) {
        self.drag.end();
        self.selection.clear();
    }

    // ── Drag gestures ─────────────────────────────────────────

    /// Begin a drag on the selected object, grabbing it at its center.
    /// Returns false when the object is not selected (a pointer-down on an
    /// unselected object only selects it).
    pub fn begin_drag(&mut self, id: ObjectId) -> bool {
        if !self.selection.is_selected(id) {
            return false;
        }
        let Some(obj) = self.scene.get_object(id) else {
            return false;
        };
        let pos = DVec3::from(obj.position);
        self.drag.begin(id, pos, pos);
        true
    }

    /// Begin a drag with an explicit grab point (off-center grabs).
    pub fn begin_drag_at(&mut self, id: ObjectId, grab_point: [f64; 3]) -> bool {
        if !self.selection.is_selected(id) {
            return false;
        }
        let Some(obj) = self.scene.get_object(id) else {
            return false;
        };
        self.drag
            .begin(id, DVec3::from(obj.position), DVec3::from(grab_point));
        true
    }

    /// Process one pointer-move whose ground-plane projection is (x, 0, z).
    /// Commits through the scene's update entry point when the candidate is
    /// legal. Returns true when the object moved.
    pub fn drag_to(&mut self, x: f64, z: f64) -> bool {
        let Some(session) = self.drag.session().copied() else {
            return false;
        };
        let Some(object) = self.scene.get_object(session.object_id).cloned() else {
            return false;
        };
        let bounds = self.scene.bounds();
        let outcome = self.drag.resolve_move(
            DVec3::new(x, 0.0, z),
            &object,
            self.scene.objects(),
            &bounds,
        );
        match outcome {
            Some(DragOutcome::Moved {
                position,
                hit_ceiling,
            }) => {
                self.last_hit_ceiling = hit_ceiling;
                match self.scene.set_object_position(object.id, position.to_array()) {
                    Ok(()) => true,
                    Err(e) => {
                        tracing::warn!("drag commit rejected: {e}");
                        false
                    }
                }
            }
            _ => false,
        }
    }

    /// Release the pointer.
    pub fn end_drag(&mut self) {
        self.drag.end();
    }

    pub fn camera_enabled(&self) -> bool {
        self.drag.camera_enabled()
    }

    pub fn hit_ceiling(&self) -> bool {
        self.last_hit_ceiling
    }

    // ── Measurement ───────────────────────────────────────────

    /// Whole-scene measurement, as recomputed each frame while an object is
    /// selected.
    pub fn measurement(&self) -> Option<GroupMeasurement> {
        measure(self.scene.objects())
    }

    // ── Persistence ───────────────────────────────────────────

    /// Export the current scene as JSON
    pub fn export_scene_json(&self) -> String {
        serde_json::to_string_pretty(&self.scene.scene).unwrap_or_default()
    }

    /// Load a scene from a JSON string, logging validation findings
    pub fn load_scene_json(&mut self, json: &str) -> Result<(), String> {
        let scene: SceneDescription =
            serde_json::from_str(json).map_err(|e| format!("JSON parse error: {e}"))?;
        for finding in SceneValidator::new(&scene).validate_all() {
            tracing::warn!("loaded scene: {finding}");
        }
        self.scene.set_scene(scene);
        self.clear_selection();
        Ok(())
    }
}

impl Default for EditorHarness {
    fn default() -> Self {
        Self::new()
    }
}
