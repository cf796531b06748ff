//! Scene validation.
//!
//! Checks a loaded or constructed scene against the data-model invariants
//! and reports human-readable findings. Used by the load path (findings are
//! logged as warnings) and by tests.

use std::collections::HashSet;

use shared::SceneDescription;

/// Minimum floor side length in meters
pub const MIN_FLOOR_DIM: f64 = 2.0;

/// Validates a scene description
pub struct SceneValidator<'a> {
    scene: &'a SceneDescription,
}

impl<'a> SceneValidator<'a> {
    pub fn new(scene: &'a SceneDescription) -> Self {
        Self { scene }
    }

    /// Run all checks and collect findings
    pub fn validate_all(&self) -> Vec<String> {
        let mut findings = Vec::new();
        self.check_room(&mut findings);
        self.check_unique_ids(&mut findings);
        self.check_objects(&mut findings);
        findings
    }

    fn check_room(&self, findings: &mut Vec<String>) {
        let floor = &self.scene.room.floor;
        if floor.width < MIN_FLOOR_DIM || floor.depth < MIN_FLOOR_DIM {
            findings.push(format!(
                "floor {}x{} m is smaller than the {MIN_FLOOR_DIM} m minimum",
                floor.width, floor.depth
            ));
        }
        if !(self.scene.room.wall_height > 0.0) || !self.scene.room.wall_height.is_finite() {
            findings.push(format!(
                "wall height {} is not a positive finite number",
                self.scene.room.wall_height
            ));
        }
    }

    fn check_unique_ids(&self, findings: &mut Vec<String>) {
        let mut seen = HashSet::new();
        for obj in &self.scene.objects {
            if !seen.insert(obj.id) {
                findings.push(format!("duplicate object id {}", obj.id));
            }
        }
    }

    fn check_objects(&self, findings: &mut Vec<String>) {
        for obj in &self.scene.objects {
            if obj.scale.iter().any(|c| !(*c > 0.0)) {
                findings.push(format!("object {} has non-positive scale", obj.id));
            }
            let finite = obj
                .position
                .iter()
                .chain(obj.rotation.iter())
                .chain(obj.scale.iter())
                .all(|c| c.is_finite());
            if !finite {
                findings.push(format!("object {} has non-finite transform", obj.id));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{cube_at, sample_scene};
    use shared::FloorDims;

    #[test]
    fn test_sample_scene_is_valid() {
        let scene = sample_scene();
        assert!(SceneValidator::new(&scene).validate_all().is_empty());
    }

    #[test]
    fn test_duplicate_ids_reported() {
        let mut scene = sample_scene();
        scene.objects.push(cube_at(1, [3.0, 0.5, 3.0], [1.0; 3]));
        let findings = SceneValidator::new(&scene).validate_all();
        assert!(findings.iter().any(|f| f.contains("duplicate object id 1")));
    }

    #[test]
    fn test_non_positive_scale_reported() {
        let mut scene = sample_scene();
        scene.objects[0].scale = [1.0, -1.0, 1.0];
        let findings = SceneValidator::new(&scene).validate_all();
        assert!(findings.iter().any(|f| f.contains("non-positive scale")));
    }

    #[test]
    fn test_tiny_floor_reported() {
        let mut scene = sample_scene();
        scene.room.floor = FloorDims {
            width: 1.0,
            depth: 8.0,
        };
        let findings = SceneValidator::new(&scene).validate_all();
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn test_non_finite_transform_reported() {
        let mut scene = sample_scene();
        scene.objects[1].position[0] = f64::NAN;
        let findings = SceneValidator::new(&scene).validate_all();
        assert!(findings.iter().any(|f| f.contains("non-finite transform")));
    }
}
