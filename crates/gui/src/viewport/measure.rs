//! Group measurement: one aggregate bounding box over every object in the
//! scene plus the three annotation-line placements derived from it.
//!
//! The displayed measurement always reflects the whole scene's footprint,
//! not just the selected object, and is recomputed every frame while a
//! selection exists (any object's move changes the aggregate box).

use glam::DVec3;

use shared::SceneObject;

/// Distance between a measurement line and the scene's bounding box, meters.
const LINE_OFFSET: f64 = 0.1;

/// Aggregate bounding box with spans in centimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupMeasurement {
    pub min: DVec3,
    pub max: DVec3,
    pub center: DVec3,
    pub width_cm: f64,
    pub height_cm: f64,
    pub depth_cm: f64,
}

/// Axis a dimension line annotates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureAxis {
    Width,
    Height,
    Depth,
}

/// One measurement line placement: the main segment, two extension lines
/// from the scene box to the segment's endpoints, and a label anchor.
#[derive(Debug, Clone, Copy)]
pub struct DimensionLine {
    pub axis: MeasureAxis,
    pub start: DVec3,
    pub end: DVec3,
    pub label: DVec3,
    pub extensions: [(DVec3, DVec3); 2],
    pub value_cm: f64,
}

/// Compute the aggregate box over all objects (`position ± scale/2` each).
/// Returns None for an empty scene.
pub fn measure(objects: &[SceneObject]) -> Option<GroupMeasurement> {
    let first = objects.first()?;
    let mut min = DVec3::from(first.aabb_min());
    let mut max = DVec3::from(first.aabb_max());

    for obj in &objects[1..] {
        min = min.min(DVec3::from(obj.aabb_min()));
        max = max.max(DVec3::from(obj.aabb_max()));
    }

    let size = max - min;
    Some(GroupMeasurement {
        min,
        max,
        center: (min + max) * 0.5,
        width_cm: size.x * 100.0,
        height_cm: size.y * 100.0,
        depth_cm: size.z * 100.0,
    })
}

/// Derive the three line placements with fixed, mutually non-interfering
/// offsets: width along X in front of the scene (+Z side), height along Y
/// on the +X side, depth along Z on the -X side. Each axis keeps its
/// dedicated side so extension lines and labels stay legible regardless of
/// how the scene is arranged.
pub fn dimension_lines(m: &GroupMeasurement) -> [DimensionLine; 3] {
    let off = LINE_OFFSET;
    let floor_y = m.min.y;

    let wy = floor_y + off;
    let wz = m.max.z + off;
    let width = DimensionLine {
        axis: MeasureAxis::Width,
        start: DVec3::new(m.min.x - off, wy, wz),
        end: DVec3::new(m.max.x + off, wy, wz),
        label: DVec3::new(m.center.x, wy, wz),
        extensions: [
            (
                DVec3::new(m.min.x, floor_y, m.max.z),
                DVec3::new(m.min.x - off, wy, wz),
            ),
            (
                DVec3::new(m.max.x, floor_y, m.max.z),
                DVec3::new(m.max.x + off, wy, wz),
            ),
        ],
        value_cm: m.width_cm,
    };

    let hx = m.max.x + off;
    let hz = m.center.z;
    let hy1 = floor_y + off;
    let hy2 = m.max.y + off;
    let height = DimensionLine {
        axis: MeasureAxis::Height,
        start: DVec3::new(hx, hy1, hz),
        end: DVec3::new(hx, hy2, hz),
        label: DVec3::new(hx, (hy1 + hy2) * 0.5, hz),
        extensions: [
            (DVec3::new(m.max.x, floor_y, hz), DVec3::new(hx, hy1, hz)),
            (DVec3::new(m.max.x, m.max.y, hz), DVec3::new(hx, hy2, hz)),
        ],
        value_cm: m.height_cm,
    };

    let dx = m.min.x - off;
    let dy = floor_y + off;
    let depth = DimensionLine {
        axis: MeasureAxis::Depth,
        start: DVec3::new(dx, dy, m.min.z - off),
        end: DVec3::new(dx, dy, m.max.z + off),
        label: DVec3::new(dx, dy, m.center.z),
        extensions: [
            (
                DVec3::new(m.min.x, floor_y, m.min.z),
                DVec3::new(dx, dy, m.min.z - off),
            ),
            (
                DVec3::new(m.min.x, floor_y, m.max.z),
                DVec3::new(dx, dy, m.max.z + off),
            ),
        ],
        value_cm: m.depth_cm,
    };

    [width, height, depth]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::cube_at;

    #[test]
    fn test_empty_scene_has_no_measurement() {
        assert!(measure(&[]).is_none());
    }

    #[test]
    fn test_two_cubes_span_six_meters() {
        let a = cube_at(1, [-2.0, 0.5, 0.0], [1.0; 3]);
        let b = cube_at(2, [3.0, 0.5, 0.0], [1.0; 3]);
        let m = measure(&[a, b]).unwrap();
        assert_eq!(m.width_cm, 600.0);
        assert_eq!(m.height_cm, 100.0);
        assert_eq!(m.depth_cm, 100.0);
        assert_eq!(m.min.x, -2.5);
        assert_eq!(m.max.x, 3.5);
    }

    #[test]
    fn test_measurement_covers_all_objects_not_selection() {
        let a = cube_at(1, [0.0, 0.5, 0.0], [1.0; 3]);
        let m1 = measure(std::slice::from_ref(&a)).unwrap();

        // Adding an object outside the current box must grow at least one span.
        let b = cube_at(2, [0.0, 0.5, 4.0], [1.0; 3]);
        let m2 = measure(&[a, b]).unwrap();
        assert_eq!(m2.width_cm, m1.width_cm);
        assert!(m2.depth_cm > m1.depth_cm);
        assert_eq!(m2.depth_cm, 500.0);
    }

    #[test]
    fn test_lines_keep_dedicated_sides() {
        let a = cube_at(1, [-1.0, 0.5, -1.0], [1.0; 3]);
        let b = cube_at(2, [1.5, 1.0, 2.0], [1.0, 2.0, 1.0]);
        let m = measure(&[a, b]).unwrap();
        let [w, h, d] = dimension_lines(&m);

        // Width line sits in front of the scene, height to the +X side,
        // depth to the -X side; the three never share a side.
        assert!(w.start.z > m.max.z && w.end.z > m.max.z);
        assert!(h.start.x > m.max.x && h.end.x > m.max.x);
        assert!(d.start.x < m.min.x && d.end.x < m.min.x);

        assert_eq!(w.value_cm, m.width_cm);
        assert_eq!(h.value_cm, m.height_cm);
        assert_eq!(d.value_cm, m.depth_cm);
    }

    #[test]
    fn test_width_line_spans_box_plus_offsets() {
        let a = cube_at(1, [0.0, 0.5, 0.0], [2.0, 1.0, 1.0]);
        let m = measure(&[a]).unwrap();
        let [w, _, _] = dimension_lines(&m);
        assert_eq!(w.start.x, -1.1);
        assert_eq!(w.end.x, 1.1);
        // Extension lines land on the segment endpoints.
        assert_eq!(w.extensions[0].1, w.start);
        assert_eq!(w.extensions[1].1, w.end);
    }
}
