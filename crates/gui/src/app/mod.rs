//! Main application module

mod keyboard;
mod menus;
mod styles;

use eframe::egui;

use crate::state::scene::SceneState;
use crate::state::AppState;
use crate::ui::{properties, room_dialog, scene_tree, status_bar, toolbar};
use crate::validation::SceneValidator;
use crate::viewport::ViewportPanel;

/// Main application
pub struct HabitaApp {
    state: AppState,
    viewport: ViewportPanel,
    /// Last applied font size (to detect changes)
    last_font_size: f32,
    /// Last saved scene version (for autosave)
    last_saved_version: u64,
}

impl HabitaApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        initial_scene: Option<shared::SceneDescription>,
    ) -> Self {
        let mut state = AppState::default();

        // Load initial scene: CLI argument takes priority, then autosave.
        // With neither, open the room setup dialog first.
        if let Some(scene) = initial_scene {
            for finding in SceneValidator::new(&scene).validate_all() {
                tracing::warn!("initial scene: {finding}");
            }
            state.scene.set_scene(scene);
        } else if let Some(autosave) = SceneState::load_autosave() {
            state.scene.set_scene(autosave);
            tracing::info!("Loaded autosave scene");
        } else {
            state.room_dialog_open = true;
        }

        // Apply initial styles with font size from settings
        styles::configure_styles(&cc.egui_ctx, state.settings.ui.font_size);

        let last_font_size = state.settings.ui.font_size;
        let last_saved_version = state.scene.version();

        Self {
            state,
            viewport: ViewportPanel::new(),
            last_font_size,
            last_saved_version,
        }
    }
}

impl eframe::App for HabitaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply font size if changed
        if self.state.settings.ui.font_size != self.last_font_size {
            styles::apply_font_size(ctx, self.state.settings.ui.font_size);
            self.last_font_size = self.state.settings.ui.font_size;
        }

        // Autosave scene if changed
        let current_version = self.state.scene.version();
        if current_version != self.last_saved_version {
            self.state.scene.autosave();
            self.state.settings.save();
            self.last_saved_version = current_version;
        }

        keyboard::handle_keyboard(ctx, &mut self.state, &mut self.viewport);

        // ── Menu bar ──────────────────────────────────────────
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                menus::file_menu(ui, &mut self.state, &mut self.viewport);
                menus::edit_menu(ui, &mut self.state);
                menus::view_menu(ui, &mut self.state, &mut self.viewport);
                menus::add_menu(ui, &mut self.state);
                menus::room_menu(ui, &mut self.state);
            });
        });

        // ── Room setup dialog ─────────────────────────────────
        room_dialog::show(ctx, &mut self.state);

        // ── Toolbar ───────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .frame(
                egui::Frame::side_top_panel(&ctx.style())
                    .inner_margin(egui::Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                toolbar::show(ui, &mut self.state);
            });

        // ── Status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(22.0)
            .frame(
                egui::Frame::side_top_panel(&ctx.style())
                    .inner_margin(egui::Margin::symmetric(8, 2)),
            )
            .show(ctx, |ui| {
                status_bar::show(ui, &self.state, self.viewport.hit_ceiling());
            });

        // ── Left panel: object list ──────────────────────────
        if self.state.panels.scene_tree {
            egui::SidePanel::left("scene_tree")
                .default_width(210.0)
                .width_range(140.0..=400.0)
                .resizable(true)
                .frame(
                    egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(6)),
                )
                .show(ctx, |ui| {
                    scene_tree::show(ui, &mut self.state);
                });
        }

        // ── Right panel: properties ──────────────────────────
        if self.state.panels.properties {
            egui::SidePanel::right("properties")
                .default_width(270.0)
                .width_range(200.0..=450.0)
                .resizable(true)
                .frame(
                    egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(6)),
                )
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().id_salt("props_scroll").show(ui, |ui| {
                        properties::show(ui, &mut self.state);
                    });
                });
        }

        // ── Central panel: 3D viewport ───────────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.viewport.show(ui, &mut self.state);
            });
    }
}
