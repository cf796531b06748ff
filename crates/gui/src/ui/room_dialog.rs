//! Room setup dialog: wall visibility, floor dimensions, colors.
//!
//! Shown on first run and reachable from the Room menu. Changes apply
//! live; bounds are re-derived from the configuration on demand.

use crate::helpers::{color_to_hex, parse_hex_color};
use crate::i18n::t;
use crate::state::AppState;
use crate::validation::MIN_FLOOR_DIM;

pub fn show(ctx: &egui::Context, state: &mut AppState) {
    if !state.room_dialog_open {
        return;
    }

    let mut room = state.scene.room().clone();
    let mut open = state.room_dialog_open;
    let mut done = false;

    egui::Window::new(t("room.title"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(t("room.walls"));
            ui.horizontal(|ui| {
                ui.checkbox(&mut room.walls.north, t("room.north"));
                ui.checkbox(&mut room.walls.south, t("room.south"));
                ui.checkbox(&mut room.walls.east, t("room.east"));
                ui.checkbox(&mut room.walls.west, t("room.west"));
            });

            ui.add_space(6.0);
            ui.label(t("room.floor_dims"));
            egui::Grid::new("room_dims")
                .num_columns(2)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    ui.label(t("room.width"));
                    ui.add(
                        egui::DragValue::new(&mut room.floor.width)
                            .speed(0.1)
                            .range(MIN_FLOOR_DIM..=40.0)
                            .suffix(" m"),
                    );
                    ui.end_row();

                    ui.label(t("room.depth"));
                    ui.add(
                        egui::DragValue::new(&mut room.floor.depth)
                            .speed(0.1)
                            .range(MIN_FLOOR_DIM..=40.0)
                            .suffix(" m"),
                    );
                    ui.end_row();

                    ui.label(t("room.wall_height"));
                    ui.add(
                        egui::DragValue::new(&mut room.wall_height)
                            .speed(0.1)
                            .range(2.0..=10.0)
                            .suffix(" m"),
                    );
                    ui.end_row();
                });

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(t("room.wall_color"));
                let mut wall = parse_hex_color(&room.wall_color);
                if ui.color_edit_button_srgba(&mut wall).changed() {
                    room.wall_color = color_to_hex(wall);
                }
                ui.label(t("room.floor_color"));
                let mut floor = parse_hex_color(&room.floor_color);
                if ui.color_edit_button_srgba(&mut floor).changed() {
                    room.floor_color = color_to_hex(floor);
                }
            });

            ui.add_space(10.0);
            ui.vertical_centered(|ui| {
                if ui.button(t("room.done")).clicked() {
                    done = true;
                }
            });
        });

    state.scene.set_room(room);
    state.room_dialog_open = open && !done;
}
