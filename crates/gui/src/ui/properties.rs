//! Properties panel for the selected object.
//!
//! Edits go through the scene's validated `update_object` entry point; a
//! rejected edit leaves the object untouched.

use egui::Ui;
use shared::TransformMode;

use crate::helpers::{color_to_hex, parse_hex_color};
use crate::i18n::t;
use crate::state::scene::{kind_icon, object_display_name};
use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.heading(t("prop.title"));
    ui.separator();

    let Some(selected_id) = state.selection.current() else {
        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            ui.weak(t("prop.select_object"));
            ui.weak(t("prop.to_view"));
        });
        return;
    };

    let Some(obj) = state.scene.get_object(selected_id) else {
        ui.weak(t("prop.not_found"));
        return;
    };
    let mut edited = obj.clone();

    ui.horizontal(|ui| {
        ui.strong(kind_icon(edited.kind));
        ui.strong(object_display_name(&edited));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.monospace(format!("#{}", edited.id));
        });
    });
    ui.add_space(4.0);

    let mut name = edited.name.clone().unwrap_or_default();
    ui.horizontal(|ui| {
        ui.label(format!("{}:", t("prop.name")));
        if ui.text_edit_singleline(&mut name).changed() {
            edited.name = if name.is_empty() { None } else { Some(name.clone()) };
        }
    });
    ui.add_space(4.0);

    egui::Grid::new("object_props")
        .num_columns(4)
        .spacing([6.0, 4.0])
        .show(ui, |ui| {
            ui.label(t("prop.position"));
            for axis in 0..3 {
                ui.add(egui::DragValue::new(&mut edited.position[axis]).speed(0.1));
            }
            ui.end_row();

            ui.label(t("prop.rotation"));
            for axis in 0..3 {
                let mut degrees = edited.rotation[axis].to_degrees();
                if ui
                    .add(egui::DragValue::new(&mut degrees).speed(1.0))
                    .changed()
                {
                    edited.rotation[axis] = degrees.to_radians();
                }
            }
            ui.end_row();

            ui.label(t("prop.scale"));
            for axis in 0..3 {
                ui.add(
                    egui::DragValue::new(&mut edited.scale[axis])
                        .speed(0.1)
                        .range(0.1..=20.0),
                );
            }
            ui.end_row();
        });

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label(format!("{}:", t("prop.color")));
        let mut color = parse_hex_color(&edited.color);
        if ui.color_edit_button_srgba(&mut color).changed() {
            edited.color = color_to_hex(color);
        }
    });

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label(format!("{}:", t("prop.mode")));
        let mut mode = edited.transform_mode.unwrap_or_default();
        ui.selectable_value(&mut mode, TransformMode::Translate, t("mode.translate"));
        ui.selectable_value(&mut mode, TransformMode::Rotate, t("mode.rotate"));
        ui.selectable_value(&mut mode, TransformMode::Scale, t("mode.scale"));
        edited.transform_mode = Some(mode);
    });

    if &edited != state.scene.get_object(selected_id).unwrap_or(&edited) {
        if let Err(e) = state.scene.update_object(selected_id, edited) {
            tracing::warn!("property edit rejected: {e}");
        }
    }
}
