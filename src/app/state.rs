// ModusKit - app/state.rs
//
// Application state management. Composes the theme store, the Dev Panel
// store, and the OS preference watcher with a few UI settings.
// Owned by the eframe::App implementation.

use crate::app::dev_panel::{DevPanelState, KeyDisposition};
use crate::app::system_theme::SystemThemeWatcher;
use crate::app::theme_state::ThemeState;
use crate::util::constants::DEFAULT_FONT_SIZE;

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Active theme family and mode.
    pub theme: ThemeState,

    /// Dev Panel visibility and selected tab.
    pub dev_panel: DevPanelState,

    /// Turns per-frame OS colour-scheme readings into change events.
    pub system_theme: SystemThemeWatcher,

    /// Body font size in points.
    pub font_size: f32,

    /// Non-fatal startup warnings (config problems), shown until dismissed.
    pub warnings: Vec<String>,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create state around already-constructed stores. The theme store is
    /// not initialised here; see `bootstrap`.
    pub fn new(theme: ThemeState, dev_panel: DevPanelState, debug_mode: bool) -> Self {
        Self {
            theme,
            dev_panel,
            system_theme: SystemThemeWatcher::default(),
            font_size: DEFAULT_FONT_SIZE,
            warnings: Vec::new(),
            debug_mode,
        }
    }

    /// One-time startup: resolve the theme against the OS preference and
    /// start watching that preference for changes.
    pub fn bootstrap(&mut self, system_prefers_dark: Option<bool>) {
        self.system_theme = SystemThemeWatcher::new(system_prefers_dark);
        self.theme.initialize(system_prefers_dark);
    }

    /// Per-frame OS preference reading.
    pub fn observe_system_theme(&mut self, prefers_dark: Option<bool>) {
        if let Some(prefers_dark) = self.system_theme.poll(prefers_dark) {
            self.theme.system_preference_changed(prefers_dark);
        }
    }

    /// Route a global key press. Returns whether it was consumed.
    pub fn handle_key(&mut self, key: egui::Key, modifiers: egui::Modifiers) -> KeyDisposition {
        self.dev_panel.handle_key(key, modifiers)
    }
}
