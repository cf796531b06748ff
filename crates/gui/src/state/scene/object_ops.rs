//! Object CRUD operations

use shared::{
    FurnitureItem, ObjectId, ObjectKind, RoomConfig, SceneDescription, SceneObject, TransformMode,
};

use super::SceneState;

/// Color given to newly created primitives
pub const DEFAULT_OBJECT_COLOR: &str = "#3b82f6";

impl SceneState {
    /// Add an object of the given kind and size, resting on the floor at
    /// the room center. Returns the new object's id.
    pub fn add_object(&mut self, kind: ObjectKind, scale: [f64; 3], color: &str) -> ObjectId {
        let id = self.alloc_id();
        self.scene.objects.push(SceneObject {
            id,
            kind,
            name: None,
            position: [0.0, scale[1] / 2.0, 0.0],
            rotation: [0.0; 3],
            scale,
            color: color.to_string(),
            transform_mode: Some(TransformMode::Translate),
            furniture_id: None,
        });
        self.version += 1;
        id
    }

    /// Add a unit-sized primitive
    pub fn add_primitive(&mut self, kind: ObjectKind) -> ObjectId {
        self.add_object(kind, [1.0, 1.0, 1.0], DEFAULT_OBJECT_COLOR)
    }

    /// Add a furniture piece from a catalog item; scale comes from the
    /// catalog dimensions.
    pub fn add_furniture(&mut self, item: &FurnitureItem) -> ObjectId {
        let id = self.add_object(ObjectKind::Furniture, item.dimensions, &item.color);
        if let Some(obj) = self.get_object_mut(id) {
            obj.name = Some(item.name.clone());
            obj.furniture_id = Some(item.id.clone());
        }
        id
    }

    /// Add a placeholder box for an imported model
    pub fn add_model(&mut self, name: &str) -> ObjectId {
        let id = self.add_object(ObjectKind::Model, [1.0, 1.0, 1.0], DEFAULT_OBJECT_COLOR);
        if let Some(obj) = self.get_object_mut(id) {
            obj.name = Some(name.to_string());
        }
        id
    }

    /// Remove an object by id. Returns false if the id is unknown.
    pub fn remove_object(&mut self, id: ObjectId) -> bool {
        let before = self.scene.objects.len();
        self.scene.objects.retain(|o| o.id != id);
        if self.scene.objects.len() != before {
            self.version += 1;
            true
        } else {
            false
        }
    }

    /// Duplicate an object, offset one meter on X and Z.
    /// Returns the new object's id.
    pub fn duplicate_object(&mut self, id: ObjectId) -> Option<ObjectId> {
        let source = self.get_object(id)?.clone();
        let new_id = self.alloc_id();
        let mut copy = source;
        copy.id = new_id;
        copy.position[0] += 1.0;
        copy.position[2] += 1.0;
        self.scene.objects.push(copy);
        self.version += 1;
        Some(new_id)
    }

    /// Remove every object, keeping the room configuration
    pub fn clear(&mut self) {
        if !self.scene.objects.is_empty() {
            self.scene.objects.clear();
            self.version += 1;
        }
    }

    /// Replace the whole scene with loaded data
    pub fn set_scene(&mut self, scene: SceneDescription) {
        self.scene = scene;
        self.reset_id_counter();
        self.version += 1;
    }

    /// Replace the room configuration (bounds are re-derived on demand)
    pub fn set_room(&mut self, room: RoomConfig) {
        if self.scene.room != room {
            self.scene.room = room;
            self.version += 1;
        }
    }
}
