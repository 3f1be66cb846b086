// ModusKit - platform/mod.rs
//
// Platform abstraction layer: directories, config file, preference storage.
// Dependencies: standard library, directories crate, core model types.
// Must NOT depend on: app, ui.

pub mod config;
pub mod store;
