//! Scene state management
//!
//! The object list is the single source of truth for the whole editor; all
//! writes go through the methods here so no reader ever observes a
//! half-applied mutation.

mod display;
mod object_ops;
mod persistence;
mod transform_ops;

pub use display::{kind_icon, object_display_name};
pub use object_ops::DEFAULT_OBJECT_COLOR;

use shared::{ObjectId, RoomBounds, RoomConfig, SceneDescription, SceneObject};

/// Scene state: room configuration plus the placed objects.
#[derive(Default)]
pub struct SceneState {
    /// Current scene (room + objects)
    pub scene: SceneDescription,
    /// Next object id to assign
    pub(crate) next_id: ObjectId,
    /// Monotonically increasing version counter for autosave/cache invalidation
    pub(crate) version: u64,
}

impl SceneState {
    /// Current scene version (increments on every mutation)
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.scene.objects
    }

    pub fn room(&self) -> &RoomConfig {
        &self.scene.room
    }

    /// Room bounds derived from the current configuration
    pub fn bounds(&self) -> RoomBounds {
        self.scene.room.bounds()
    }

    /// Get an object by id
    pub fn get_object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.scene.objects.iter().find(|o| o.id == id)
    }

    pub(crate) fn get_object_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.scene.objects.iter_mut().find(|o| o.id == id)
    }

    /// Bump version without any other change
    pub fn notify_mutated(&mut self) {
        self.version += 1;
    }

    pub(crate) fn alloc_id(&mut self) -> ObjectId {
        self.next_id += 1;
        self.next_id
    }

    /// Recompute the id counter after loading a scene so new objects never
    /// reuse an existing id.
    pub(crate) fn reset_id_counter(&mut self) {
        self.next_id = self.scene.objects.iter().map(|o| o.id).max().unwrap_or(0);
    }
}
