// ModusKit - ui/theme.rs
//
// Colour palettes per theme family and mode, and their mapping onto egui
// visuals. The renderer only ever looks at the `data-theme` root attribute;
// the theme store decides what that attribute says.

use crate::core::model::{RootAttributes, ThemeConfig, ThemeFamily, ThemeMode};
use crate::util::constants::THEME_ATTRIBUTE;
use egui::Color32;

/// Named colours of one `<family>-<mode>` theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub primary: Color32,
    pub secondary: Color32,
    pub background: Color32,
    pub surface: Color32,
    pub border: Color32,
    pub text: Color32,
    pub text_weak: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub danger: Color32,
}

impl Palette {
    /// `(name, colour)` pairs in display order, for the Dev Panel swatches.
    pub fn swatches(&self) -> [(&'static str, Color32); 10] {
        [
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("background", self.background),
            ("surface", self.surface),
            ("border", self.border),
            ("text", self.text),
            ("text-weak", self.text_weak),
            ("success", self.success),
            ("warning", self.warning),
            ("danger", self.danger),
        ]
    }
}

/// Palette for a theme config.
pub fn palette(config: ThemeConfig) -> Palette {
    // Brand accent per family; neutrals per mode.
    let (primary, secondary) = match (config.family, config.mode) {
        (ThemeFamily::ModusClassic, ThemeMode::Light) => (rgb(0x0063a3), rgb(0x6a6e79)),
        (ThemeFamily::ModusClassic, ThemeMode::Dark) => (rgb(0x217cbb), rgb(0xa3a6b1)),
        (ThemeFamily::ModusModern, ThemeMode::Light) => (rgb(0x0e416c), rgb(0x019aeb)),
        (ThemeFamily::ModusModern, ThemeMode::Dark) => (rgb(0x019aeb), rgb(0x7dcef7)),
        (ThemeFamily::Connect, ThemeMode::Light) => (rgb(0x005f9e), rgb(0xfbad26)),
        (ThemeFamily::Connect, ThemeMode::Dark) => (rgb(0x4da3e0), rgb(0xfbad26)),
    };

    match config.mode {
        ThemeMode::Light => Palette {
            primary,
            secondary,
            background: rgb(0xf1f1f6),
            surface: rgb(0xffffff),
            border: rgb(0xcbcdd6),
            text: rgb(0x171c1e),
            text_weak: rgb(0x6a6e79),
            success: rgb(0x1e8a44),
            warning: rgb(0xe49325),
            danger: rgb(0xda212c),
        },
        ThemeMode::Dark => Palette {
            primary,
            secondary,
            background: rgb(0x171c1e),
            surface: rgb(0x252a2e),
            border: rgb(0x464b52),
            text: rgb(0xe0e1e9),
            text_weak: rgb(0xa3a6b1),
            success: rgb(0x4fb06d),
            warning: rgb(0xf9c475),
            danger: rgb(0xf06c72),
        },
    }
}

/// Parse a full theme name (`modus-modern-dark`) back into its config.
pub fn config_from_full_name(name: &str) -> Option<ThemeConfig> {
    ThemeFamily::all().iter().find_map(|&family| {
        [ThemeMode::Light, ThemeMode::Dark]
            .into_iter()
            .map(|mode| ThemeConfig::new(family, mode))
            .find(|config| config.full_theme_name() == name)
    })
}

/// Theme selected by the root attributes, or the default when the
/// attribute is missing or unrecognised.
pub fn config_from_attributes(attributes: &RootAttributes) -> ThemeConfig {
    attributes
        .get(THEME_ATTRIBUTE)
        .and_then(config_from_full_name)
        .unwrap_or_default()
}

/// egui visuals for a theme.
pub fn visuals(config: ThemeConfig) -> egui::Visuals {
    let p = palette(config);
    let mut visuals = if config.mode.is_dark() {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };

    visuals.panel_fill = p.background;
    visuals.window_fill = p.surface;
    visuals.extreme_bg_color = p.surface;
    visuals.faint_bg_color = p.background;
    visuals.override_text_color = Some(p.text);

    visuals.selection.bg_fill = p.primary;
    visuals.selection.stroke.color = p.surface;
    visuals.hyperlink_color = p.primary;

    visuals.widgets.noninteractive.bg_stroke.color = p.border;
    visuals.widgets.inactive.weak_bg_fill = p.surface;
    visuals.widgets.inactive.bg_stroke.color = p.border;
    visuals.widgets.hovered.bg_stroke.color = p.primary;
    visuals.widgets.active.bg_fill = p.primary;

    visuals.error_fg_color = p.danger;
    visuals.warn_fg_color = p.warning;
    visuals
}

const fn rgb(hex: u32) -> Color32 {
    Color32::from_rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

/// Layout constants.
pub const TOOLBAR_HEIGHT: f32 = 36.0;
pub const SECTION_SPACING: f32 = 12.0;
