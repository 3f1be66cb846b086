// ModusKit - tests/e2e_preferences.rs
//
// End-to-end tests for theme persistence across application restarts.
//
// These tests exercise the real on-disk FileStore in a temp directory: each
// "session" opens the store from disk, builds a fresh ThemeState, and
// initialises it the way main.rs does.

use moduskit::app::dev_panel::{DevPanelState, KeyDisposition};
use moduskit::app::state::AppState;
use moduskit::app::theme_state::ThemeState;
use moduskit::core::model::{ThemeConfig, ThemeFamily, ThemeMode};
use moduskit::platform::config::PlatformPaths;
use moduskit::platform::store::{FileStore, PreferenceStore};
use moduskit::util::constants::{MODE_ATTRIBUTE, THEME_ATTRIBUTE, THEME_STORAGE_KEY};
use std::path::Path;

// =============================================================================
// Helpers
// =============================================================================

/// Start a session: open the store from disk and initialise the theme.
fn session(prefs: &Path, system_prefers_dark: Option<bool>) -> AppState {
    let store = FileStore::open(prefs).expect("preference file should open");
    let mut state = AppState::new(
        ThemeState::new(Box::new(store)),
        DevPanelState::new(),
        false,
    );
    state.bootstrap(system_prefers_dark);
    state
}

fn prefs_path(dir: &tempfile::TempDir) -> std::path::PathBuf {
    PlatformPaths::rooted_at(dir.path()).preferences_file()
}

// =============================================================================
// Persistence E2E
// =============================================================================

/// First run with no preference file follows the OS and writes nothing.
#[test]
fn e2e_first_run_follows_system_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = prefs_path(&dir);

    let mut state = session(&prefs, Some(true));
    assert_eq!(state.theme.full_theme_name(), "modus-classic-dark");

    state.observe_system_theme(Some(false));
    assert_eq!(state.theme.full_theme_name(), "modus-classic-light");
    assert!(!prefs.exists(), "following the OS must not create the file");
}

/// An explicit choice survives a restart and beats the OS preference.
#[test]
fn e2e_explicit_choice_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = prefs_path(&dir);

    {
        let mut state = session(&prefs, Some(false));
        state.theme.set_theme(ThemeFamily::ModusModern, Some(ThemeMode::Dark));
    }

    let mut state = session(&prefs, Some(false));
    assert_eq!(
        state.theme.theme_config(),
        ThemeConfig::new(ThemeFamily::ModusModern, ThemeMode::Dark)
    );
    assert_eq!(
        state.theme.attributes().get(THEME_ATTRIBUTE),
        Some("modus-modern-dark")
    );
    assert_eq!(state.theme.attributes().get(MODE_ATTRIBUTE), Some("dark"));

    state.observe_system_theme(Some(true));
    state.observe_system_theme(Some(false));
    assert_eq!(state.theme.theme_config().mode, ThemeMode::Dark);
}

/// The persisted blob is the plain `{family, mode}` JSON object.
#[test]
fn e2e_persisted_blob_shape() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = prefs_path(&dir);

    let mut state = session(&prefs, None);
    state.theme.set_theme(ThemeFamily::Connect, None);
    state.theme.toggle_mode();

    let store = FileStore::open(&prefs).unwrap();
    let raw = store.get(THEME_STORAGE_KEY).unwrap().expect("value persisted");
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["family"], "connect");
    assert_eq!(value["mode"], "dark");
}

/// A corrupted theme value is treated as absent on the next start.
#[test]
fn e2e_corrupt_theme_value_falls_back_to_system() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = prefs_path(&dir);

    let mut store = FileStore::open(&prefs).unwrap();
    store.set(THEME_STORAGE_KEY, "{\"family\":").unwrap();

    let mut state = session(&prefs, Some(true));
    assert_eq!(state.theme.full_theme_name(), "modus-classic-dark");
    assert!(state.theme.is_following_system());

    state.observe_system_theme(Some(false));
    assert_eq!(state.theme.full_theme_name(), "modus-classic-light");
    assert!(state.theme.is_following_system());
}

/// Resetting the preference makes the next session follow the OS again.
#[test]
fn e2e_reset_preference_restores_system_following() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = prefs_path(&dir);

    {
        let mut state = session(&prefs, Some(false));
        state.theme.set_theme(ThemeFamily::Connect, Some(ThemeMode::Light));
    }

    let store = FileStore::open(&prefs).unwrap();
    let mut theme = ThemeState::new(Box::new(store));
    theme.reset_preference();
    theme.initialize(Some(true));

    assert_eq!(theme.full_theme_name(), "modus-classic-dark");
    assert!(theme.is_following_system());
}

/// A store that cannot be written still lets the theme change in memory.
#[test]
fn e2e_unwritable_store_keeps_in_memory_theme() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-directory");
    std::fs::write(&blocker, b"").unwrap();

    let store = FileStore::empty(&blocker.join("preferences.json"));
    let mut theme = ThemeState::new(Box::new(store));
    theme.initialize(None);
    theme.set_theme(ThemeFamily::ModusModern, Some(ThemeMode::Dark));

    assert_eq!(theme.full_theme_name(), "modus-modern-dark");
    assert_eq!(
        theme.attributes().get(THEME_ATTRIBUTE),
        Some("modus-modern-dark")
    );
}

// =============================================================================
// Dev Panel E2E
// =============================================================================

/// The keyboard triggers drive the panel through the app-level router.
#[test]
fn e2e_dev_panel_keyboard_triggers() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = session(&prefs_path(&dir), None);
    let chord = egui::Modifiers {
        ctrl: true,
        shift: true,
        command: true,
        ..Default::default()
    };

    assert_eq!(
        state.handle_key(egui::Key::Escape, egui::Modifiers::NONE),
        KeyDisposition::Ignored
    );
    assert_eq!(state.handle_key(egui::Key::D, chord), KeyDisposition::Consumed);
    assert!(state.dev_panel.is_open());
    assert_eq!(
        state.handle_key(egui::Key::Escape, egui::Modifiers::NONE),
        KeyDisposition::Consumed
    );
    assert!(!state.dev_panel.is_open());
}
