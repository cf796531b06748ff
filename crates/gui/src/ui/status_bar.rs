use egui::Ui;

use crate::i18n::t;
use crate::state::scene::object_display_name;
use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &AppState, hit_ceiling: bool) {
    ui.horizontal(|ui| {
        let count = state.scene.objects().len();
        ui.weak(format!("{}: {count}", t("status.objects")));

        ui.separator();

        match state.selection.current().and_then(|id| state.scene.get_object(id)) {
            Some(obj) => {
                ui.label(format!("{}: {}", t("status.selected"), object_display_name(obj)));

                // Live whole-scene measurement, shown while a selection exists.
                if let Some(m) = crate::viewport::measure::measure(state.scene.objects()) {
                    ui.separator();
                    ui.monospace(format!(
                        "{:.0} × {:.0} × {:.0} cm",
                        m.width_cm, m.height_cm, m.depth_cm
                    ));
                }

                if hit_ceiling {
                    ui.separator();
                    ui.colored_label(egui::Color32::from_rgb(239, 68, 68), t("status.ceiling"));
                }
            }
            None => {
                ui.weak(t("status.ready"));
            }
        }

        // Right-aligned version
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak("Habita v0.1");
        });
    });
}
