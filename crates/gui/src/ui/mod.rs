pub mod furniture;
pub mod properties;
pub mod room_dialog;
pub mod scene_tree;
pub mod status_bar;
pub mod toolbar;
