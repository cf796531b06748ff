// Library crate: exposes testable modules for integration tests and the
// headless harness. GUI-specific modules (app, ui, viewport rendering)
// remain in the binary crate.

pub mod fixtures;
pub mod harness;
pub mod helpers;
pub mod state;
pub mod validation;

/// Viewport logic with no rendering dependencies: picking rays, room
/// constraints, drag sessions, group measurements. The interactive
/// viewport (camera, renderer, overlays) stays in the binary crate.
pub mod viewport {
    pub mod constraint;
    pub mod drag;
    pub mod measure;
    pub mod picking;
}
