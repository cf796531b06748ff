//! Factory functions for creating test data.
//!
//! Convenient helpers to construct `SceneObject`, `RoomConfig` and
//! `SceneDescription` values used in unit and integration tests.

use shared::{
    FloorDims, ObjectId, ObjectKind, RoomConfig, SceneDescription, SceneObject, TransformMode,
};

/// Create a cube object at a specific position.
pub fn cube_at(id: ObjectId, position: [f64; 3], scale: [f64; 3]) -> SceneObject {
    SceneObject {
        id,
        kind: ObjectKind::Cube,
        name: None,
        position,
        rotation: [0.0; 3],
        scale,
        color: "#3b82f6".to_string(),
        transform_mode: Some(TransformMode::Translate),
        furniture_id: None,
    }
}

/// Create a unit cube resting on the floor at the origin.
pub fn unit_cube(id: ObjectId) -> SceneObject {
    cube_at(id, [0.0, 0.5, 0.0], [1.0; 3])
}

/// Create a named furniture object at a specific position.
pub fn furniture_at(
    id: ObjectId,
    name: &str,
    dimensions: [f64; 3],
    position: [f64; 3],
) -> SceneObject {
    SceneObject {
        id,
        kind: ObjectKind::Furniture,
        name: Some(name.to_string()),
        position,
        rotation: [0.0; 3],
        scale: dimensions,
        color: "#8d6e63".to_string(),
        transform_mode: Some(TransformMode::Translate),
        furniture_id: None,
    }
}

/// A 10×10 m room with a 3 m ceiling (bounds [-5, 5] on both axes).
pub fn ten_meter_room() -> RoomConfig {
    RoomConfig {
        floor: FloorDims {
            width: 10.0,
            depth: 10.0,
        },
        wall_height: 3.0,
        ..RoomConfig::default()
    }
}

/// A small sample scene: two cubes and a piece of furniture in the
/// default room.
pub fn sample_scene() -> SceneDescription {
    SceneDescription {
        room: RoomConfig::default(),
        objects: vec![
            cube_at(1, [-2.0, 0.5, 0.0], [1.0; 3]),
            cube_at(2, [2.0, 0.5, 1.0], [1.0; 3]),
            furniture_at(3, "Mesa", [1.4, 0.75, 0.8], [0.0, 0.375, -2.0]),
        ],
    }
}
