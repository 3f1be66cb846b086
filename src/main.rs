// ModusKit - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation
// 3. Construction of the theme and Dev Panel stores
// 4. eframe GUI launch (the theme store is initialised against the OS
//    colour scheme once the egui context exists)

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

pub use moduskit::app;
pub use moduskit::core;
pub use moduskit::platform;
pub use moduskit::ui;
pub use moduskit::util;

use clap::Parser;
use crate::core::model::ThemeFamily;
use crate::platform::store::{FileStore, PreferenceStore};
use std::path::PathBuf;

/// ModusKit - Modus design system dev shell.
///
/// Browse components, colours, and icons under any of the Modus themes.
/// Press Ctrl/Cmd+Shift+D to open the Dev Panel.
#[derive(Parser, Debug)]
#[command(name = "ModusKit", version, about)]
struct Cli {
    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Forget the saved theme and start from the system colour scheme.
    #[arg(long = "reset-theme")]
    reset_theme: bool,

    /// Directory holding config.toml and the preference store
    /// (defaults to the platform config/data directories).
    #[arg(short = 'c', long = "config-dir")]
    config_dir: Option<PathBuf>,

    /// Theme family to use until one has been chosen
    /// (modus-classic, modus-modern, connect).
    #[arg(short = 'f', long = "family", value_parser = parse_family)]
    family: Option<ThemeFamily>,
}

fn parse_family(s: &str) -> Result<ThemeFamily, String> {
    ThemeFamily::from_id(s).ok_or_else(|| {
        let valid: Vec<&str> = ThemeFamily::all().iter().map(|f| f.id()).collect();
        format!("unknown theme family '{s}' (expected one of: {})", valid.join(", "))
    })
}

/// Open the on-disk preference store.
fn open_preferences(path: &std::path::Path) -> util::error::Result<FileStore> {
    Ok(FileStore::open(path)?)
}

fn main() {
    let cli = Cli::parse();

    // Resolve paths and read config before logging so [logging] applies.
    let platform_paths = match cli.config_dir {
        Some(ref dir) => platform::config::PlatformPaths::rooted_at(dir),
        None => platform::config::PlatformPaths::resolve(),
    };
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    util::logging::init(
        cli.debug,
        config.log_level.as_deref(),
        config.log_file.as_deref(),
    );

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config = %platform_paths.config_dir.display(),
        "ModusKit starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    // Preference store: a corrupt file is reported and replaced on next save.
    let prefs_path = platform_paths.preferences_file();
    let store = match open_preferences(&prefs_path) {
        Ok(store) => store,
        Err(e) => {
            tracing::warn!(error = %e, "Preference store unusable; starting with an empty one");
            FileStore::empty(&prefs_path)
        }
    };
    let store: Box<dyn PreferenceStore> = Box::new(store);

    let default_family = cli.family.unwrap_or(config.default_family);
    let mut theme = app::theme_state::ThemeState::with_default_family(store, default_family);
    if cli.reset_theme {
        theme.reset_preference();
    }

    let mut dev_panel = app::dev_panel::DevPanelState::new();
    if config.panel_open_on_start {
        dev_panel.open();
    }

    let mut state = app::state::AppState::new(theme, dev_panel, cli.debug);
    state.font_size = config.font_size;
    state.warnings = config_warnings;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size(util::constants::WINDOW_SIZE)
            .with_min_inner_size(util::constants::MIN_WINDOW_SIZE),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            state.bootstrap(gui::system_prefers_dark(&cc.egui_ctx));
            Ok(Box::new(gui::ModusKitApp::new(state, &cc.egui_ctx)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch ModusKit GUI: {e}");
        std::process::exit(1);
    }
}
