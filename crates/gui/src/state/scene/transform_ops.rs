//! Validated write entry points for object updates.
//!
//! Drag commits and property edits land here; both reject invalid input
//! instead of corrupting shared state (unknown id, non-positive scale).

use shared::{ObjectId, SceneObject};

use super::SceneState;

impl SceneState {
    /// Single write entry point for drag commits: one committed position
    /// update per object per processed pointer-move.
    pub fn set_object_position(&mut self, id: ObjectId, position: [f64; 3]) -> Result<(), String> {
        if !position.iter().all(|c| c.is_finite()) {
            return Err(format!("non-finite position for object {id}"));
        }
        let Some(obj) = self.get_object_mut(id) else {
            return Err(format!("unknown object id {id}"));
        };
        obj.position = position;
        self.version += 1;
        Ok(())
    }

    /// Full object update from the properties panel. The id is immutable;
    /// `data.id` must match.
    pub fn update_object(&mut self, id: ObjectId, data: SceneObject) -> Result<(), String> {
        if data.id != id {
            return Err(format!("object id is immutable ({} != {id})", data.id));
        }
        if data.scale.iter().any(|c| !(*c > 0.0)) {
            return Err(format!("object {id} has non-positive scale"));
        }
        let finite = data
            .position
            .iter()
            .chain(data.rotation.iter())
            .chain(data.scale.iter())
            .all(|c| c.is_finite());
        if !finite {
            return Err(format!("object {id} has non-finite transform"));
        }
        let Some(obj) = self.get_object_mut(id) else {
            return Err(format!("unknown object id {id}"));
        };
        *obj = data;
        self.version += 1;
        Ok(())
    }
}
