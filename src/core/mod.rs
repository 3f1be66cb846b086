// ModusKit - core/mod.rs
//
// Core vocabulary: theme model types and the observer primitive.
// Dependencies: standard library and serde only.
// Must NOT depend on: ui, platform, app, or any I/O crate directly.

pub mod catalog;
pub mod model;
pub mod observer;
