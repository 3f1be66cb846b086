// ModusKit - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "ModusKit";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "ModusKit";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Theme persistence
// =============================================================================

/// Key under which the `{family, mode}` JSON blob is persisted.
pub const THEME_STORAGE_KEY: &str = "modus-theme";

/// Root attribute carrying the full theme name (e.g. `modus-classic-dark`).
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Root attribute carrying the bare mode (`light` / `dark`).
pub const MODE_ATTRIBUTE: &str = "data-mode";

/// File name of the key-value preference store inside the data directory.
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

/// Preference files larger than this are treated as corrupt and ignored.
/// The store only ever holds a handful of short strings.
pub const MAX_PREFERENCES_FILE_BYTES: u64 = 64 * 1_024;

// =============================================================================
// Configuration
// =============================================================================

/// Name of the optional user configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default tracing filter when nothing else is configured.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Accepted values for `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// UI
// =============================================================================

/// Default body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Minimum user-configurable font size.
pub const MIN_FONT_SIZE: f32 = 9.0;

/// Maximum user-configurable font size.
pub const MAX_FONT_SIZE: f32 = 24.0;

/// Initial window size.
pub const WINDOW_SIZE: [f32; 2] = [1100.0, 760.0];

/// Smallest window size the layout still works at.
pub const MIN_WINDOW_SIZE: [f32; 2] = [720.0, 480.0];

/// Default width of the Dev Panel overlay window.
pub const DEV_PANEL_WIDTH: f32 = 420.0;

/// Side length of a colour swatch in the Dev Panel.
pub const SWATCH_SIZE: f32 = 28.0;
