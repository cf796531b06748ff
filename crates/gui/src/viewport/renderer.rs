//! Painter-based scene rendering: floor, grid, walls and object boxes.
//!
//! Everything is drawn through `egui::Painter` by projecting world points
//! with the camera; objects are sorted far-to-near so the painter's
//! algorithm keeps overlaps roughly correct.

use egui::{Color32, Painter, Pos2, Shape, Stroke};
use glam::Vec3;

use shared::{RoomBounds, SceneObject};

use crate::helpers::{parse_hex_color, to_vec3};
use crate::state::AppState;

use super::camera::ArcBallCamera;

const WALL_EDGE_COLOR: Color32 = Color32::from_rgb(90, 90, 100);
const HIT_CEILING_COLOR: Color32 = Color32::from_rgb(239, 68, 68);

/// Light direction for the flat per-face shading of object boxes
const LIGHT_DIR: Vec3 = Vec3::new(0.5, 0.8, 0.3);

pub fn draw_scene(
    painter: &Painter,
    rect: egui::Rect,
    camera: &ArcBallCamera,
    state: &AppState,
    transparent_walls: [bool; 4],
    hit_ceiling: bool,
) {
    let bounds = state.scene.bounds();

    draw_floor(painter, rect, camera, state, &bounds);
    draw_walls(painter, rect, camera, state, &bounds, transparent_walls);

    // Far-to-near so nearer boxes paint over farther ones.
    let eye = camera.eye_position();
    let mut objects: Vec<&SceneObject> = state.scene.objects().iter().collect();
    objects.sort_by(|a, b| {
        let da = (to_vec3(a.position) - eye).length_squared();
        let db = (to_vec3(b.position) - eye).length_squared();
        db.total_cmp(&da)
    });

    for obj in objects {
        let selected = state.selection.is_selected(obj.id);
        draw_object(painter, rect, camera, state, obj, selected, hit_ceiling);
    }
}

fn draw_floor(
    painter: &Painter,
    rect: egui::Rect,
    camera: &ArcBallCamera,
    state: &AppState,
    bounds: &RoomBounds,
) {
    let (min_x, max_x) = (bounds.min_x as f32, bounds.max_x as f32);
    let (min_z, max_z) = (bounds.min_z as f32, bounds.max_z as f32);

    let corners = [
        Vec3::new(min_x, 0.0, min_z),
        Vec3::new(max_x, 0.0, min_z),
        Vec3::new(max_x, 0.0, max_z),
        Vec3::new(min_x, 0.0, max_z),
    ];
    let floor_color = parse_hex_color(&state.scene.room().floor_color);
    fill_quad(painter, rect, camera, &corners, floor_color, None);

    // Floor grid
    let grid = &state.settings.grid;
    if grid.visible && grid.size > 0.05 {
        let alpha = (grid.opacity.clamp(0.0, 1.0) * 255.0) as u8;
        let grid_stroke = Stroke::new(1.0, Color32::from_rgba_unmultiplied(70, 70, 80, alpha));

        let mut x = min_x;
        while x <= max_x + 1e-3 {
            draw_segment(
                painter,
                rect,
                camera,
                Vec3::new(x, 0.0, min_z),
                Vec3::new(x, 0.0, max_z),
                grid_stroke,
            );
            x += grid.size;
        }
        let mut z = min_z;
        while z <= max_z + 1e-3 {
            draw_segment(
                painter,
                rect,
                camera,
                Vec3::new(min_x, 0.0, z),
                Vec3::new(max_x, 0.0, z),
                grid_stroke,
            );
            z += grid.size;
        }
    }
}

fn draw_walls(
    painter: &Painter,
    rect: egui::Rect,
    camera: &ArcBallCamera,
    state: &AppState,
    bounds: &RoomBounds,
    transparent: [bool; 4],
) {
    let room = state.scene.room();
    let h = bounds.ceiling_y as f32;
    let (min_x, max_x) = (bounds.min_x as f32, bounds.max_x as f32);
    let (min_z, max_z) = (bounds.min_z as f32, bounds.max_z as f32);

    let base = parse_hex_color(&room.wall_color);
    let translucent_alpha =
        (state.settings.viewport.transparent_wall_opacity.clamp(0.0, 1.0) * 255.0) as u8;

    // (visible, transparent index, corner loop) per side; south sits at
    // min_z, north at max_z, west at min_x, east at max_x.
    let walls: [(bool, usize, [Vec3; 4]); 4] = [
        (
            room.walls.south,
            0,
            [
                Vec3::new(min_x, 0.0, min_z),
                Vec3::new(max_x, 0.0, min_z),
                Vec3::new(max_x, h, min_z),
                Vec3::new(min_x, h, min_z),
            ],
        ),
        (
            room.walls.north,
            1,
            [
                Vec3::new(min_x, 0.0, max_z),
                Vec3::new(max_x, 0.0, max_z),
                Vec3::new(max_x, h, max_z),
                Vec3::new(min_x, h, max_z),
            ],
        ),
        (
            room.walls.west,
            2,
            [
                Vec3::new(min_x, 0.0, min_z),
                Vec3::new(min_x, 0.0, max_z),
                Vec3::new(min_x, h, max_z),
                Vec3::new(min_x, h, min_z),
            ],
        ),
        (
            room.walls.east,
            3,
            [
                Vec3::new(max_x, 0.0, min_z),
                Vec3::new(max_x, 0.0, max_z),
                Vec3::new(max_x, h, max_z),
                Vec3::new(max_x, h, min_z),
            ],
        ),
    ];

    // Draw transparent (camera-side) walls last so their tint overlays the
    // interior instead of being painted over by it.
    for pass in [false, true] {
        for (visible, idx, corners) in &walls {
            if !*visible || transparent[*idx] != pass {
                continue;
            }
            let alpha = if transparent[*idx] { translucent_alpha } else { 235 };
            let fill =
                Color32::from_rgba_unmultiplied(base.r(), base.g(), base.b(), alpha);
            fill_quad(
                painter,
                rect,
                camera,
                corners,
                fill,
                Some(Stroke::new(1.0, WALL_EDGE_COLOR)),
            );
        }
    }
}

fn draw_object(
    painter: &Painter,
    rect: egui::Rect,
    camera: &ArcBallCamera,
    state: &AppState,
    obj: &SceneObject,
    selected: bool,
    hit_ceiling: bool,
) {
    let min = to_vec3(obj.aabb_min());
    let max = to_vec3(obj.aabb_max());

    let corners = [
        Vec3::new(min.x, min.y, min.z),
        Vec3::new(max.x, min.y, min.z),
        Vec3::new(max.x, max.y, min.z),
        Vec3::new(min.x, max.y, min.z),
        Vec3::new(min.x, min.y, max.z),
        Vec3::new(max.x, min.y, max.z),
        Vec3::new(max.x, max.y, max.z),
        Vec3::new(min.x, max.y, max.z),
    ];

    // Faces as corner indices with outward normals.
    let faces: [([usize; 4], Vec3); 6] = [
        ([0, 1, 2, 3], Vec3::NEG_Z),
        ([5, 4, 7, 6], Vec3::Z),
        ([4, 0, 3, 7], Vec3::NEG_X),
        ([1, 5, 6, 2], Vec3::X),
        ([3, 2, 6, 7], Vec3::Y),
        ([4, 5, 1, 0], Vec3::NEG_Y),
    ];

    let base = parse_hex_color(&obj.color);
    let eye = camera.eye_position();
    let center = (min + max) * 0.5;
    let light = LIGHT_DIR.normalize();

    for (idx, normal) in &faces {
        // Back-face cull against the view direction.
        if normal.dot(eye - center) <= 0.0 {
            continue;
        }
        let shade = 0.55 + 0.45 * normal.dot(light).max(0.0);
        let fill = Color32::from_rgb(
            (base.r() as f32 * shade) as u8,
            (base.g() as f32 * shade) as u8,
            (base.b() as f32 * shade) as u8,
        );
        let quad = [corners[idx[0]], corners[idx[1]], corners[idx[2]], corners[idx[3]]];
        fill_quad(painter, rect, camera, &quad, fill, None);
    }

    // Wireframe edges; the selected object gets a heavier outline, tinted
    // red while the last drag candidate hit the ceiling.
    let edge_color = if selected {
        if hit_ceiling {
            HIT_CEILING_COLOR
        } else {
            let c = state.settings.viewport.selection_color;
            Color32::from_rgb(c[0], c[1], c[2])
        }
    } else {
        Color32::from_rgba_unmultiplied(20, 20, 25, 180)
    };
    let stroke = Stroke::new(if selected { 2.5 } else { 1.0 }, edge_color);

    const EDGES: [(usize, usize); 12] = [
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 0),
        (4, 5),
        (5, 6),
        (6, 7),
        (7, 4),
        (0, 4),
        (1, 5),
        (2, 6),
        (3, 7),
    ];
    for (a, b) in EDGES {
        draw_segment(painter, rect, camera, corners[a], corners[b], stroke);
    }
}

// ── Projection helpers ───────────────────────────────────────

fn project(camera: &ArcBallCamera, rect: egui::Rect, p: Vec3) -> Option<Pos2> {
    camera.project([p.x, p.y, p.z], rect)
}

fn fill_quad(
    painter: &Painter,
    rect: egui::Rect,
    camera: &ArcBallCamera,
    corners: &[Vec3; 4],
    fill: Color32,
    stroke: Option<Stroke>,
) {
    let screen: Vec<Pos2> = corners
        .iter()
        .filter_map(|c| project(camera, rect, *c))
        .collect();
    if screen.len() != 4 {
        return; // a corner is behind the camera; skip the quad this frame
    }
    painter.add(Shape::convex_polygon(
        screen,
        fill,
        stroke.unwrap_or(Stroke::NONE),
    ));
}

fn draw_segment(
    painter: &Painter,
    rect: egui::Rect,
    camera: &ArcBallCamera,
    a: Vec3,
    b: Vec3,
    stroke: Stroke,
) {
    if let (Some(pa), Some(pb)) = (project(camera, rect, a), project(camera, rect, b)) {
        painter.line_segment([pa, pb], stroke);
    }
}
