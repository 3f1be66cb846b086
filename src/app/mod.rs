// ModusKit - app/mod.rs
//
// Application layer: the theme and Dev Panel stores, OS preference tracking,
// and the composed application state.
// Dependencies: core, platform (storage seam).
// Must NOT depend on: ui.

pub mod dev_panel;
pub mod state;
pub mod system_theme;
pub mod theme_state;
