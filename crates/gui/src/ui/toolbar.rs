//! Toolbar actions and UI

use egui::Ui;
use shared::{FurnitureItem, ObjectKind};

use crate::i18n::t;
use crate::state::AppState;

use super::furniture;

// ── Public actions (callable from menus and shortcuts too) ───

pub fn action_create_cube(state: &mut AppState) {
    create_primitive(state, ObjectKind::Cube);
}

pub fn action_create_sphere(state: &mut AppState) {
    create_primitive(state, ObjectKind::Sphere);
}

pub fn action_create_cylinder(state: &mut AppState) {
    create_primitive(state, ObjectKind::Cylinder);
}

pub fn action_create_cone(state: &mut AppState) {
    create_primitive(state, ObjectKind::Cone);
}

pub fn action_add_furniture(state: &mut AppState, item: &FurnitureItem) {
    let id = state.scene.add_furniture(item);
    state.selection.select(id);
}

pub fn action_duplicate(state: &mut AppState) {
    if let Some(id) = state.selection.current() {
        if let Some(new_id) = state.scene.duplicate_object(id) {
            state.selection.select(new_id);
        }
    }
}

pub fn action_delete(state: &mut AppState) {
    if let Some(id) = state.selection.current() {
        state.scene.remove_object(id);
        state.selection.clear();
    }
}

fn create_primitive(state: &mut AppState, kind: ObjectKind) {
    let id = state.scene.add_primitive(kind);
    state.selection.select(id);
}

// ── Toolbar UI ───────────────────────────────────────────────

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label(t("tb.primitives"));
        if ui.button(t("prim.cube")).on_hover_text(t("tip.cube")).clicked() {
            action_create_cube(state);
        }
        if ui
            .button(t("prim.sphere"))
            .on_hover_text(t("tip.sphere"))
            .clicked()
        {
            action_create_sphere(state);
        }
        if ui
            .button(t("prim.cylinder"))
            .on_hover_text(t("tip.cylinder"))
            .clicked()
        {
            action_create_cylinder(state);
        }
        if ui.button(t("prim.cone")).on_hover_text(t("tip.cone")).clicked() {
            action_create_cone(state);
        }

        ui.separator();

        show_furniture_menu(ui, state);

        ui.separator();

        let has_selection = state.selection.current().is_some();
        if ui
            .add_enabled(has_selection, egui::Button::new(t("tb.duplicate")))
            .on_hover_text(t("tip.duplicate"))
            .clicked()
        {
            action_duplicate(state);
        }
        if ui
            .add_enabled(has_selection, egui::Button::new(t("tb.delete")))
            .on_hover_text(t("tip.delete"))
            .clicked()
        {
            action_delete(state);
        }

        ui.separator();

        if ui
            .button(t("tb.clear_all"))
            .on_hover_text(t("tip.clear_all"))
            .clicked()
        {
            state.scene.clear();
            state.selection.clear();
        }
    });
}

fn show_furniture_menu(ui: &mut Ui, state: &mut AppState) {
    ui.menu_button(format!("🪑 {}", t("tb.furniture")), |ui| {
        ui.text_edit_singleline(&mut state.furniture_search)
            .on_hover_text(t("catalog.search"));

        let items = furniture::filtered_catalog(&state.furniture_search);
        if items.is_empty() {
            ui.weak(t("catalog.none"));
            return;
        }
        for item in items {
            let label = format!(
                "{}  ({:.2}×{:.2}×{:.2} m)",
                item.name, item.dimensions[0], item.dimensions[1], item.dimensions[2]
            );
            if ui.button(label).clicked() {
                action_add_furniture(state, &item);
                ui.close_menu();
            }
        }
    });
}
