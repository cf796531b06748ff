//! Room bounds clamping and object-to-object collision tests.

use glam::DVec3;

use shared::{ObjectId, RoomBounds, SceneObject};

/// Result of clamping a candidate position into the room volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampResult {
    pub position: DVec3,
    /// True when the unclamped Y would exceed the ceiling limit.
    /// Visual-feedback signal only; Y is capped either way.
    pub hit_ceiling: bool,
}

/// Clamp a proposed center position so the object's box stays inside the
/// room: X and Z against the wall-inset interval, Y between the floor and
/// the ceiling. Pure and idempotent.
pub fn clamp_to_room(raw: DVec3, half: DVec3, bounds: &RoomBounds) -> ClampResult {
    let x = clamp_axis(raw.x, bounds.min_x + half.x, bounds.max_x - half.x);
    let z = clamp_axis(raw.z, bounds.min_z + half.z, bounds.max_z - half.z);

    let y_max = bounds.ceiling_y - half.y;
    let hit_ceiling = raw.y > y_max;
    let y = clamp_axis(raw.y, half.y, y_max);

    ClampResult {
        position: DVec3::new(x, y, z),
        hit_ceiling,
    }
}

// Degenerate interval (object larger than the room) pins to the midline.
fn clamp_axis(v: f64, lo: f64, hi: f64) -> f64 {
    if lo > hi {
        (lo + hi) * 0.5
    } else {
        v.clamp(lo, hi)
    }
}

/// Interior overlap test between two boxes given as center + half extents.
/// Face contact does not count as overlap.
pub fn boxes_overlap(center_a: DVec3, half_a: DVec3, center_b: DVec3, half_b: DVec3) -> bool {
    (center_a.x - center_b.x).abs() < half_a.x + half_b.x
        && (center_a.y - center_b.y).abs() < half_a.y + half_b.y
        && (center_a.z - center_b.z).abs() < half_a.z + half_b.z
}

/// Test a candidate placement against every other object in the scene.
/// Short-circuits on the first overlap; `exclude_id` (the moving object
/// itself) is never tested.
pub fn collides_with_any(
    center: DVec3,
    half: DVec3,
    objects: &[SceneObject],
    exclude_id: ObjectId,
) -> bool {
    objects.iter().any(|other| {
        other.id != exclude_id
            && boxes_overlap(
                center,
                half,
                DVec3::from(other.position),
                DVec3::from(other.half_extents()),
            )
    })
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
    fn test_clamp_pins_to_wall_inset() {
        let half = DVec3::new(0.5, 0.5, 0.5);
        let r = clamp_to_room(DVec3::new(7.0, 0.5, 0.0), half, &bounds());
        assert_eq!(r.position, DVec3::new(4.5, 0.5, 0.0));
        assert!(!r.hit_ceiling);
    }

    #[test]
    fn test_clamp_inside_is_identity() {
        let half = DVec3::new(0.5, 0.5, 0.5);
        let p = DVec3::new(1.0, 0.5, -2.0);
        let r = clamp_to_room(p, half, &bounds());
        assert_eq!(r.position, p);
    }

    #[test]
    fn test_clamp_is_idempotent() {
        let half = DVec3::new(0.75, 1.0, 0.25);
        let once = clamp_to_room(DVec3::new(-9.0, 8.0, 12.0), half, &bounds());
        let twice = clamp_to_room(once.position, half, &bounds());
        assert_eq!(twice.position, once.position);
    }

    #[test]
    fn test_clamp_ceiling_flag() {
        let half = DVec3::new(0.5, 0.5, 0.5);
        let r = clamp_to_room(DVec3::new(0.0, 10.0, 0.0), half, &bounds());
        assert!(r.hit_ceiling);
        assert_eq!(r.position.y, 2.5);

        let floor = clamp_to_room(DVec3::new(0.0, -3.0, 0.0), half, &bounds());
        assert!(!floor.hit_ceiling);
        assert_eq!(floor.position.y, 0.5);
    }

    #[test]
    fn test_clamp_oversized_object_pins_to_midline() {
        // 14 m wide object in a 10 m room: X interval inverts.
        let half = DVec3::new(7.0, 0.5, 0.5);
        let r = clamp_to_room(DVec3::new(3.0, 0.5, 0.0), half, &bounds());
        assert_eq!(r.position.x, 0.0);
        // Still idempotent in the degenerate branch.
        let again = clamp_to_room(r.position, half, &bounds());
        assert_eq!(again.position, r.position);
    }

    #[test]
    fn test_boxes_overlap_on_all_axes() {
        let half = DVec3::new(0.5, 0.5, 0.5);
        // 0.1 m overlap on X, full overlap on Y and Z.
        assert!(boxes_overlap(
            DVec3::new(0.0, 0.5, 0.0),
            half,
            DVec3::new(0.9, 0.5, 0.0),
            half
        ));
        // Separated on one axis only.
        assert!(!boxes_overlap(
            DVec3::new(0.0, 0.5, 0.0),
            half,
            DVec3::new(0.9, 0.5, 2.0),
            half
        ));
    }

    #[test]
    fn test_face_contact_is_not_collision() {
        let half = DVec3::new(0.5, 0.5, 0.5);
        assert!(!boxes_overlap(
            DVec3::new(0.0, 0.5, 0.0),
            half,
            DVec3::new(1.0, 0.5, 0.0),
            half
        ));
    }

    #[test]
    fn test_collides_excludes_self() {
        let obj = cube_at(1, [0.0, 0.5, 0.0], [1.0; 3]);
        let candidate = DVec3::new(0.1, 0.5, 0.0);
        let half = DVec3::new(0.5, 0.5, 0.5);
        // Candidate overlaps the object's own current box; with
        // self-exclusion this must not count.
        assert!(!collides_with_any(candidate, half, &[obj.clone()], 1));
        assert!(collides_with_any(candidate, half, &[obj], 2));
    }

    #[test]
    fn test_collides_short_circuit_result_is_order_independent() {
        let a = cube_at(1, [2.0, 0.5, 0.0], [1.0; 3]);
        let b = cube_at(2, [0.5, 0.5, 0.0], [1.0; 3]);
        let candidate = DVec3::new(0.0, 0.5, 0.0);
        let half = DVec3::new(0.5, 0.5, 0.5);
        assert!(collides_with_any(candidate, half, &[a.clone(), b.clone()], 99));
        assert!(collides_with_any(candidate, half, &[b, a], 99));
    }
}
