// ModusKit - app/system_theme.rs
//
// Edge detector for the OS colour-scheme preference.
//
// The windowing layer reports the current preference every frame; the theme
// store wants discrete change events. `SystemThemeWatcher` remembers the last
// reading and yields only transitions.

/// Tracks the last seen "OS prefers dark" reading.
#[derive(Debug, Default, Clone)]
pub struct SystemThemeWatcher {
    last: Option<bool>,
}

impl SystemThemeWatcher {
    /// Watcher primed with the startup reading, so the first `poll` with the
    /// same value reports nothing.
    pub fn new(initial: Option<bool>) -> Self {
        Self { last: initial }
    }

    /// Feed the current reading. Returns `Some(prefers_dark)` when it differs
    /// from the previous known value. Unknown readings (`None`) are skipped
    /// and do not reset the remembered value.
    pub fn poll(&mut self, current: Option<bool>) -> Option<bool> {
        let current = current?;
        if self.last == Some(current) {
            return None;
        }
        self.last = Some(current);
        tracing::debug!(prefers_dark = current, "System colour scheme changed");
        Some(current)
    }

    pub fn last(&self) -> Option<bool> {
        self.last
    }
}
