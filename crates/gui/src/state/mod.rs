pub mod scene;
pub mod selection;
pub mod settings;

pub use scene::SceneState;
pub use selection::SelectionState;
pub use settings::{AppSettings, DimensionSettings, GridSettings, UiSettings, ViewportSettings};

/// Panel visibility flags
pub struct PanelVisibility {
    pub scene_tree: bool,
    pub properties: bool,
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self {
            scene_tree: true,
            properties: true,
        }
    }
}

/// Combined application state
pub struct AppState {
    pub scene: SceneState,
    pub selection: SelectionState,
    pub settings: AppSettings,
    pub panels: PanelVisibility,
    /// Room setup dialog visibility (opened on first run)
    pub room_dialog_open: bool,
    /// Search filter for the furniture catalog
    pub furniture_search: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            scene: SceneState::default(),
            selection: SelectionState::default(),
            settings: AppSettings::load(),
            panels: PanelVisibility::default(),
            room_dialog_open: false,
            furniture_search: String::new(),
        }
    }
}
