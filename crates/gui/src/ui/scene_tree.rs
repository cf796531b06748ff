//! Object list panel

use egui::Ui;

use crate::i18n::t;
use crate::state::scene::{kind_icon, object_display_name};
use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.heading(t("tree.scene"));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let count = state.scene.objects().len();
            ui.weak(format!("({count})"));
        });
    });
    ui.separator();

    if state.scene.objects().is_empty() {
        ui.add_space(20.0);
        ui.vertical_centered(|ui| {
            ui.weak(t("tree.no_objects"));
            ui.weak(t("tree.use_toolbar"));
            ui.weak(t("tree.to_add"));
        });
        return;
    }

    // Collect rows first to avoid borrow conflicts with selection updates.
    let rows: Vec<_> = state
        .scene
        .objects()
        .iter()
        .map(|obj| {
            (
                obj.id,
                format!("{} {}", kind_icon(obj.kind), object_display_name(obj)),
            )
        })
        .collect();

    egui::ScrollArea::vertical()
        .id_salt("scene_tree_scroll")
        .show(ui, |ui| {
            for (id, label) in rows {
                let selected = state.selection.is_selected(id);
                if ui.selectable_label(selected, label).clicked() {
                    if selected {
                        state.selection.clear();
                    } else {
                        state.selection.select(id);
                    }
                }
            }
        });
}
