// ModusKit - app/dev_panel.rs
//
// Visibility state for the Dev Panel overlay.
//
// Two global keyboard triggers drive it besides direct calls:
//   Ctrl/Cmd + Shift + D  toggles, whatever has focus.
//   Escape                closes, but only while the panel is open.
// A trigger that fires reports `KeyDisposition::Consumed` so the caller can
// swallow the key event before any widget sees it.

use crate::core::observer::{SubscriptionId, Subscribers};
use egui::{Key, Modifiers};

/// Whether a key press was handled (and must not propagate further).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    Consumed,
    Ignored,
}

/// Browsing surfaces inside the Dev Panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DevPanelTab {
    #[default]
    Components,
    Colors,
    Icons,
}

impl DevPanelTab {
    pub fn all() -> &'static [DevPanelTab] {
        &[DevPanelTab::Components, DevPanelTab::Colors, DevPanelTab::Icons]
    }

    pub fn label(&self) -> &'static str {
        match self {
            DevPanelTab::Components => "Components",
            DevPanelTab::Colors => "Colors",
            DevPanelTab::Icons => "Icons",
        }
    }
}

/// Open/closed flag for the Dev Panel plus its selected tab.
#[derive(Debug, Default)]
pub struct DevPanelState {
    is_open: bool,
    active_tab: DevPanelTab,
    subscribers: Subscribers<bool>,
}

impl DevPanelState {
    /// Closed, showing the Components tab.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn toggle(&mut self) {
        self.set_open(!self.is_open);
    }

    pub fn open(&mut self) {
        self.set_open(true);
    }

    pub fn close(&mut self) {
        self.set_open(false);
    }

    pub fn active_tab(&self) -> DevPanelTab {
        self.active_tab
    }

    pub fn set_active_tab(&mut self, tab: DevPanelTab) {
        self.active_tab = tab;
    }

    /// Global key handler. See the module header for the bindings.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> KeyDisposition {
        if is_toggle_chord(key, modifiers) {
            self.toggle();
            return KeyDisposition::Consumed;
        }
        if key == Key::Escape && self.is_open {
            self.close();
            return KeyDisposition::Consumed;
        }
        KeyDisposition::Ignored
    }

    /// Register a callback invoked with the new visibility on every change.
    pub fn subscribe(&mut self, callback: impl FnMut(&bool) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    fn set_open(&mut self, open: bool) {
        if self.is_open == open {
            return;
        }
        self.is_open = open;
        tracing::debug!(open, "Dev Panel visibility changed");
        self.subscribers.notify(&self.is_open);
    }
}

/// Ctrl or Cmd, plus Shift, plus D. Alt must not be held.
fn is_toggle_chord(key: Key, modifiers: Modifiers) -> bool {
    let primary = modifiers.ctrl || modifiers.mac_cmd || modifiers.command;
    key == Key::D && primary && modifiers.shift && !modifiers.alt
}
