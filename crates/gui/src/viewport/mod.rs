//! 3D viewport panel: pointer interaction, camera control arbitration and
//! painter-based rendering.

mod camera;
mod overlays;
mod renderer;
pub use habita_gui_lib::viewport::{constraint, drag, measure, picking};

use egui::Ui;
use glam::{DVec3, Vec3};

use crate::state::AppState;
use camera::ArcBallCamera;
use drag::{DragController, DragOutcome};
use picking::{pick_nearest, ray_aabb, ray_ground_plane, Aabb};

/// 3D viewport panel
pub struct ViewportPanel {
    camera: ArcBallCamera,
    drag: DragController,
    /// Ceiling flag from the last committed move (render feedback)
    hit_ceiling: bool,
    /// Camera-relative wall transparency (south, north, west, east)
    transparent_walls: [bool; 4],
}

impl ViewportPanel {
    pub fn new() -> Self {
        Self {
            camera: ArcBallCamera::new(),
            drag: DragController::new(),
            hit_ceiling: false,
            transparent_walls: [false; 4],
        }
    }

    pub fn reset_camera(&mut self) {
        self.camera = ArcBallCamera::new();
    }

    /// Aim the camera at a world-space point
    pub fn focus_on(&mut self, target: Vec3) {
        self.camera.target = target;
    }

    /// Terminate any live drag (deselection, Delete, Escape paths).
    /// Restores camera control unconditionally.
    pub fn end_drag(&mut self) {
        self.drag.end();
        self.hit_ceiling = false;
    }

    pub fn hit_ceiling(&self) -> bool {
        self.hit_ceiling
    }

    pub fn show(&mut self, ui: &mut Ui, state: &mut AppState) {
        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

        // ── Drag gesture and camera controls ──────────────────
        self.handle_drag_and_camera(&response, ui, rect, state);

        // ── Object selection via click ────────────────────────
        self.handle_selection(&response, rect, state);

        // ── Per-frame tick: pure recomputation from camera + scene ──
        self.update_wall_transparency(state);

        if !ui.is_rect_visible(rect) {
            return;
        }

        // ── Painting ──────────────────────────────────────────
        let painter = ui.painter_at(rect);
        painter.rect_filled(
            rect,
            egui::CornerRadius::ZERO,
            egui::Color32::from_rgb(
                state.settings.viewport.background_color[0],
                state.settings.viewport.background_color[1],
                state.settings.viewport.background_color[2],
            ),
        );

        renderer::draw_scene(
            &painter,
            rect,
            &self.camera,
            state,
            self.transparent_walls,
            self.hit_ceiling,
        );

        if state.settings.viewport.show_axes {
            overlays::draw_axis_labels(&painter, rect, &self.camera);
        }

        // Measurement annotations are recomputed every frame while any
        // object is selected: the aggregate box covers the whole scene.
        if state.selection.current().is_some() {
            if let Some(m) = measure::measure(state.scene.objects()) {
                overlays::draw_dimension_lines(
                    &painter,
                    rect,
                    &self.camera,
                    &m,
                    &state.settings.dimensions,
                );
            }
        }
    }

    fn handle_drag_and_camera(
        &mut self,
        response: &egui::Response,
        ui: &Ui,
        rect: egui::Rect,
        state: &mut AppState,
    ) {
        // ── Drag start: primary press on the already-selected object ──
        if !self.drag.is_dragging()
            && response.drag_started_by(egui::PointerButton::Primary)
            && !ui.input(|i| i.modifiers.alt)
        {
            if let Some(pos) = response.interact_pointer_pos() {
                self.try_begin_drag(pos, rect, state);
            }
        }

        if self.drag.is_dragging() {
            if response.dragged_by(egui::PointerButton::Primary) {
                if let Some(pos) = response.hover_pos().or(response.interact_pointer_pos()) {
                    self.resolve_pointer_move(pos, rect, state);
                }
            }
            // End drag on button release or loss of the pointer capture.
            if response.drag_stopped() || !response.dragged_by(egui::PointerButton::Primary) {
                self.drag.end();
            }
        } else if self.drag.camera_enabled() {
            // ── Camera controls (every state except Dragging) ──
            if response.dragged_by(egui::PointerButton::Primary)
                || response.dragged_by(egui::PointerButton::Middle)
            {
                let delta = response.drag_delta();
                self.camera.rotate(delta.x * 0.5, delta.y * 0.5);
            }
            if response.dragged_by(egui::PointerButton::Secondary) {
                let delta = response.drag_delta();
                self.camera.pan(delta.x * 0.01, delta.y * 0.01);
            }
        }

        if self.drag.camera_enabled() && response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll.abs() > 0.1 {
                self.camera.zoom(scroll * 0.01);
            }
        }
    }

    /// Pointer-down over the selected object's box starts a drag session,
    /// grabbing the object at the ray hit point.
    fn try_begin_drag(&mut self, pos: egui::Pos2, rect: egui::Rect, state: &AppState) {
        let Some(id) = state.selection.current() else {
            return;
        };
        let Some(obj) = state.scene.get_object(id) else {
            return;
        };
        let ray = self.camera.screen_ray(pos, rect);
        let aabb = Aabb::from_object(obj);
        if let Some(t) = ray_aabb(&ray, &aabb) {
            let grab = ray.at(t);
            self.drag
                .begin(id, DVec3::from(obj.position), grab.as_dvec3());
        }
    }

    /// One pointer-move: project to the ground plane, resolve against the
    /// constraints, commit through the scene's update entry point. A
    /// degenerate projection or a blocked candidate leaves the object at
    /// its last legal position for this frame.
    fn resolve_pointer_move(&mut self, pos: egui::Pos2, rect: egui::Rect, state: &mut AppState) {
        let Some(session) = self.drag.session().copied() else {
            return;
        };
        let Some(object) = state.scene.get_object(session.object_id).cloned() else {
            return;
        };

        let ray = self.camera.screen_ray(pos, rect);
        let Some(ground) = ray_ground_plane(&ray, 0.0) else {
            return; // no update this frame
        };

        let bounds = state.scene.bounds();
        match self.drag.resolve_move(
            ground.as_dvec3(),
            &object,
            state.scene.objects(),
            &bounds,
        ) {
            Some(DragOutcome::Moved {
                position,
                hit_ceiling,
            }) => {
                self.hit_ceiling = hit_ceiling;
                if let Err(e) = state
                    .scene
                    .set_object_position(object.id, position.to_array())
                {
                    tracing::warn!("drag commit rejected: {e}");
                }
            }
            Some(DragOutcome::Blocked) | None => {}
        }
    }

    fn handle_selection(&mut self, response: &egui::Response, rect: egui::Rect, state: &mut AppState) {
        if !response.clicked() || self.drag.is_dragging() {
            return;
        }
        let Some(pos) = response.interact_pointer_pos() else {
            return;
        };

        let ray = self.camera.screen_ray(pos, rect);
        match pick_nearest(&ray, state.scene.objects()) {
            Some(id) => {
                state.selection.select(id);
            }
            None => {
                // Click on empty space: deselect, tearing down any session.
                self.end_drag();
                state.selection.clear();
            }
        }
    }

    /// Walls between the camera and the room interior render translucent so
    /// the scene stays visible from outside. Idempotent per-frame
    /// recomputation from the current camera and bounds.
    fn update_wall_transparency(&mut self, state: &AppState) {
        let b = state.scene.bounds();
        let eye = self.camera.eye_position();
        self.transparent_walls = [
            (eye.z as f64) < b.min_z, // south
            (eye.z as f64) > b.max_z, // north
            (eye.x as f64) < b.min_x, // west
            (eye.x as f64) > b.max_x, // east
        ];
    }
}

impl Default for ViewportPanel {
    fn default() -> Self {
        Self::new()
    }
}
