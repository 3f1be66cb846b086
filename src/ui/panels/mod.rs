// ModusKit - ui/panels/mod.rs

pub mod dev_panel;
pub mod showcase;
pub mod toolbar;
