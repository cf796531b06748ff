use glam::Vec3;

use shared::{ObjectId, SceneObject};

/// A ray in world space
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Point along the ray at parameter t
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Axis-aligned bounding box
#[derive(Clone, Copy)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Bounding box of a scene object: position ± scale/2, rotation ignored.
    pub fn from_object(obj: &SceneObject) -> Self {
        let min = obj.aabb_min();
        let max = obj.aabb_max();
        Self {
            min: Vec3::new(min[0] as f32, min[1] as f32, min[2] as f32),
            max: Vec3::new(max[0] as f32, max[1] as f32, max[2] as f32),
        }
    }

    /// Center of the bounding box
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

/// Ray-AABB intersection using the slab method.
/// Returns the distance along the ray to the nearest hit, or None.
pub fn ray_aabb(ray: &Ray, aabb: &Aabb) -> Option<f32> {
    let inv_dir = Vec3::new(
        1.0 / ray.direction.x,
        1.0 / ray.direction.y,
        1.0 / ray.direction.z,
    );

    let t1 = (aabb.min.x - ray.origin.x) * inv_dir.x;
    let t2 = (aabb.max.x - ray.origin.x) * inv_dir.x;
    let t3 = (aabb.min.y - ray.origin.y) * inv_dir.y;
    let t4 = (aabb.max.y - ray.origin.y) * inv_dir.y;
    let t5 = (aabb.min.z - ray.origin.z) * inv_dir.z;
    let t6 = (aabb.max.z - ray.origin.z) * inv_dir.z;

    let tmin = t1.min(t2).max(t3.min(t4)).max(t5.min(t6));
    let tmax = t1.max(t2).min(t3.max(t4)).min(t5.max(t6));

    if tmax < 0.0 || tmin > tmax {
        return None;
    }

    Some(if tmin < 0.0 { tmax } else { tmin })
}

/// Pick the nearest object whose bounding box is intersected by the ray.
/// The result is order-independent: the smallest hit distance wins.
pub fn pick_nearest(ray: &Ray, objects: &[SceneObject]) -> Option<ObjectId> {
    let mut best: Option<(ObjectId, f32)> = None;

    for obj in objects {
        let aabb = Aabb::from_object(obj);
        if let Some(dist) = ray_aabb(ray, &aabb) {
            if best.as_ref().is_none_or(|(_, d)| dist < *d) {
                best = Some((obj.id, dist));
            }
        }
    }

    best.map(|(id, _)| id)
}

/// Intersect the ray with the horizontal plane y = plane_y.
/// Returns None when the ray runs parallel to the plane or the hit lies
/// behind the origin; callers treat that as "no update this frame".
pub fn ray_ground_plane(ray: &Ray, plane_y: f32) -> Option<Vec3> {
    const EPSILON: f32 = 1e-6;

    if ray.direction.y.abs() < EPSILON {
        return None;
    }

    let t = (plane_y - ray.origin.y) / ray.direction.y;
    if t < 0.0 {
        return None;
    }

    Some(ray.at(t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::cube_at;

    #[test]
    fn test_ray_aabb_hit_and_miss() {
        let aabb = Aabb {
            min: Vec3::new(-1.0, -1.0, -1.0),
            max: Vec3::new(1.0, 1.0, 1.0),
        };

        let hit = Ray {
            origin: Vec3::new(0.0, 0.0, -5.0),
            direction: Vec3::new(0.0, 0.0, 1.0),
        };
        assert_eq!(ray_aabb(&hit, &aabb), Some(4.0));

        let miss = Ray {
            origin: Vec3::new(5.0, 0.0, -5.0),
            direction: Vec3::new(0.0, 0.0, 1.0),
        };
        assert!(ray_aabb(&miss, &aabb).is_none());
    }

    #[test]
    fn test_ray_aabb_behind_origin() {
        let aabb = Aabb {
            min: Vec3::new(-1.0, -1.0, -1.0),
            max: Vec3::new(1.0, 1.0, 1.0),
        };
        let ray = Ray {
            origin: Vec3::new(0.0, 0.0, 5.0),
            direction: Vec3::new(0.0, 0.0, 1.0),
        };
        assert!(ray_aabb(&ray, &aabb).is_none());
    }

    #[test]
    fn test_pick_nearest_closest_wins() {
        let near = cube_at(1, [0.0, 0.5, -2.0], [1.0; 3]);
        let far = cube_at(2, [0.0, 0.5, 2.0], [1.0; 3]);
        let ray = Ray {
            origin: Vec3::new(0.0, 0.5, -10.0),
            direction: Vec3::new(0.0, 0.0, 1.0),
        };
        // Both boxes lie on the ray; insertion order must not matter.
        assert_eq!(pick_nearest(&ray, &[far.clone(), near.clone()]), Some(1));
        assert_eq!(pick_nearest(&ray, &[near, far]), Some(1));
    }

    #[test]
    fn test_pick_nearest_miss() {
        let obj = cube_at(1, [0.0, 0.5, 0.0], [1.0; 3]);
        let ray = Ray {
            origin: Vec3::new(10.0, 0.5, -10.0),
            direction: Vec3::new(0.0, 0.0, 1.0),
        };
        assert!(pick_nearest(&ray, &[obj]).is_none());
    }

    #[test]
    fn test_ground_plane_hit() {
        let ray = Ray {
            origin: Vec3::new(1.0, 4.0, 1.0),
            direction: Vec3::new(0.0, -1.0, 0.0),
        };
        let pt = ray_ground_plane(&ray, 0.0).unwrap();
        assert_eq!(pt, Vec3::new(1.0, 0.0, 1.0));
    }

    #[test]
    fn test_ground_plane_parallel_ray_is_none() {
        let ray = Ray {
            origin: Vec3::new(0.0, 2.0, 0.0),
            direction: Vec3::new(1.0, 0.0, 0.0),
        };
        assert!(ray_ground_plane(&ray, 0.0).is_none());
    }

    #[test]
    fn test_ground_plane_behind_origin_is_none() {
        let ray = Ray {
            origin: Vec3::new(0.0, 2.0, 0.0),
            direction: Vec3::new(0.0, 1.0, 0.0),
        };
        assert!(ray_ground_plane(&ray, 0.0).is_none());
    }
}
