//! Keyboard shortcut handling

use eframe::egui;

use crate::helpers::to_vec3;
use crate::state::AppState;
use crate::ui::toolbar;
use crate::viewport::ViewportPanel;

/// Handle keyboard shortcuts for the application
pub fn handle_keyboard(ctx: &egui::Context, state: &mut AppState, viewport: &mut ViewportPanel) {
    // Don't handle shortcuts when a text field is focused
    if ctx.memory(|m| m.focused().is_some()) {
        return;
    }

    ctx.input(|i| {
        // Escape — deselect (tears down any live drag first)
        if i.key_pressed(egui::Key::Escape) {
            viewport.end_drag();
            state.selection.clear();
        }
        // Delete — remove selected object
        if i.key_pressed(egui::Key::Delete) {
            if let Some(id) = state.selection.current() {
                viewport.end_drag();
                state.scene.remove_object(id);
                state.selection.clear();
            }
        }
        // Ctrl+D — duplicate
        if i.modifiers.command && i.key_pressed(egui::Key::D) {
            toolbar::action_duplicate(state);
        }
        // F — focus camera on selected object
        if i.key_pressed(egui::Key::F) && !i.modifiers.command {
            if let Some(id) = state.selection.current() {
                if let Some(obj) = state.scene.get_object(id) {
                    viewport.focus_on(to_vec3(obj.position));
                }
            }
        }
    });
}
