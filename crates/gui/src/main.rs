mod app;
pub mod i18n;
mod ui;
mod viewport;

// Re-export library modules so that `crate::state`, `crate::helpers`, etc.
// resolve to the lib crate types everywhere in the binary.
pub use habita_gui_lib::helpers;
pub use habita_gui_lib::state;
pub use habita_gui_lib::validation;

use app::HabitaApp;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "habita_gui=info".into()),
        )
        .init();

    // Parse --scene <path> argument
    let initial_scene = parse_scene_arg();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Habita — 3D Room Planner")
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "habita-gui",
        native_options,
        Box::new(move |cc| Ok(Box::new(HabitaApp::new(cc, initial_scene)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}

fn parse_scene_arg() -> Option<shared::SceneDescription> {
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        if args[i] == "--scene" && i + 1 < args.len() {
            let path = &args[i + 1];
            match std::fs::read_to_string(path) {
                Ok(json) => match serde_json::from_str::<shared::SceneDescription>(&json) {
                    Ok(scene) => {
                        tracing::info!(
                            "Loaded scene from {path} ({} objects)",
                            scene.objects.len()
                        );
                        return Some(scene);
                    }
                    Err(e) => {
                        tracing::error!("Failed to parse scene JSON from {path}: {e}");
                    }
                },
                Err(e) => {
                    tracing::error!("Failed to read scene file {path}: {e}");
                }
            }
            break;
        }
        i += 1;
    }
    None
}
