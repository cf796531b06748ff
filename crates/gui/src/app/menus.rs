//! Application menu bar

use eframe::egui;

use crate::i18n::{lang, set_lang, t, Lang};
use crate::state::AppState;
use crate::ui::{furniture, toolbar};
use crate::validation::SceneValidator;
use crate::viewport::ViewportPanel;

/// Show the file menu
pub fn file_menu(ui: &mut egui::Ui, state: &mut AppState, viewport: &mut ViewportPanel) {
    ui.menu_button(t("menu.file"), |ui| {
        if ui.button(t("menu.new")).clicked() {
            viewport.end_drag();
            state.scene.clear();
            state.selection.clear();
            ui.close_menu();
        }
        if ui.button(t("menu.open")).clicked() {
            ui.close_menu();
            if let Some(path) = rfd::FileDialog::new()
                .set_title(t("menu.open_title"))
                .add_filter("JSON", &["json"])
                .pick_file()
            {
                match std::fs::read_to_string(&path) {
                    Ok(json) => match serde_json::from_str::<shared::SceneDescription>(&json) {
                        Ok(scene) => {
                            for finding in SceneValidator::new(&scene).validate_all() {
                                tracing::warn!("loaded scene: {finding}");
                            }
                            viewport.end_drag();
                            state.scene.set_scene(scene);
                            state.selection.clear();
                            tracing::info!("Loaded scene from {}", path.display());
                        }
                        Err(e) => tracing::error!("Failed to parse scene: {e}"),
                    },
                    Err(e) => tracing::error!("Failed to read file: {e}"),
                }
            }
        }
        if ui.button(t("menu.save")).clicked() {
            ui.close_menu();
            if let Some(path) = rfd::FileDialog::new()
                .set_title(t("menu.save_title"))
                .add_filter("JSON", &["json"])
                .set_file_name("scene.json")
                .save_file()
            {
                match serde_json::to_string_pretty(&state.scene.scene) {
                    Ok(json) => {
                        if let Err(e) = std::fs::write(&path, json) {
                            tracing::error!("Failed to write scene: {e}");
                        } else {
                            tracing::info!("Saved scene to {}", path.display());
                        }
                    }
                    Err(e) => tracing::error!("Failed to serialize scene: {e}"),
                }
            }
        }
        ui.separator();
        if ui.button(t("menu.quit")).clicked() {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

/// Show the edit menu
pub fn edit_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button(t("menu.edit"), |ui| {
        let has_selection = state.selection.current().is_some();
        if ui
            .add_enabled(has_selection, egui::Button::new(t("menu.duplicate")))
            .clicked()
        {
            toolbar::action_duplicate(state);
            ui.close_menu();
        }
        if ui
            .add_enabled(has_selection, egui::Button::new(t("menu.delete")))
            .clicked()
        {
            toolbar::action_delete(state);
            ui.close_menu();
        }
        ui.separator();
        if ui.button(t("menu.deselect")).clicked() {
            state.selection.clear();
            ui.close_menu();
        }
    });
}

/// Show the view menu
pub fn view_menu(ui: &mut egui::Ui, state: &mut AppState, viewport: &mut ViewportPanel) {
    ui.menu_button(t("menu.view"), |ui| {
        ui.checkbox(&mut state.panels.scene_tree, t("menu.scene_tree"));
        ui.checkbox(&mut state.panels.properties, t("menu.properties"));
        ui.separator();
        if ui.button(t("menu.reset_camera")).clicked() {
            viewport.reset_camera();
            ui.close_menu();
        }
        ui.separator();
        ui.menu_button(t("menu.language"), |ui| {
            if ui.selectable_label(lang() == Lang::Es, "Español").clicked() {
                set_lang(Lang::Es);
                ui.close_menu();
            }
            if ui.selectable_label(lang() == Lang::En, "English").clicked() {
                set_lang(Lang::En);
                ui.close_menu();
            }
        });
    });
}

/// Show the add menu
pub fn add_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button(t("menu.add"), |ui| {
        ui.label(t("menu.primitives"));
        if ui.button(format!("  {}", t("prim.cube"))).clicked() {
            toolbar::action_create_cube(state);
            ui.close_menu();
        }
        if ui.button(format!("  {}", t("prim.sphere"))).clicked() {
            toolbar::action_create_sphere(state);
            ui.close_menu();
        }
        if ui.button(format!("  {}", t("prim.cylinder"))).clicked() {
            toolbar::action_create_cylinder(state);
            ui.close_menu();
        }
        if ui.button(format!("  {}", t("prim.cone"))).clicked() {
            toolbar::action_create_cone(state);
            ui.close_menu();
        }
        ui.separator();
        ui.label(t("menu.furniture"));
        for item in furniture::default_catalog() {
            if ui.button(format!("  {}", item.name)).clicked() {
                toolbar::action_add_furniture(state, &item);
                ui.close_menu();
            }
        }
        ui.separator();
        if ui.button(t("menu.import_model")).clicked() {
            ui.close_menu();
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("glTF", &["glb", "gltf"])
                .pick_file()
            {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "Model".to_string());
                // Mesh loading lives outside the editor; the scene keeps a
                // bounding-box placeholder for the imported model.
                let id = state.scene.add_model(&name);
                state.selection.select(id);
                tracing::info!("Imported model placeholder for {}", path.display());
            }
        }
    });
}

/// Show the room menu
pub fn room_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button(t("menu.room"), |ui| {
        if ui.button(t("menu.room_setup")).clicked() {
            state.room_dialog_open = true;
            ui.close_menu();
        }
    });
}
