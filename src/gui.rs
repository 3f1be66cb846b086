// ModusKit - gui.rs
//
// Top-level eframe::App implementation.
// Each frame: feed the OS colour scheme to the theme store, route global key
// presses to the Dev Panel store, apply the themed visuals, draw the panels.

use crate::app::dev_panel::KeyDisposition;
use crate::app::state::AppState;
use crate::core::model::ThemeConfig;
use crate::ui;
use crate::ui::panels::dev_panel::DevPanelView;
use crate::ui::panels::showcase::ShowcaseState;

/// The ModusKit application.
pub struct ModusKitApp {
    pub state: AppState,
    showcase: ShowcaseState,
    dev_panel_view: DevPanelView,
    /// Theme whose visuals are currently installed in the egui context.
    applied_theme: Option<ThemeConfig>,
}

impl ModusKitApp {
    /// Create a new application instance around bootstrapped state.
    pub fn new(state: AppState, ctx: &egui::Context) -> Self {
        apply_font_size(ctx, state.font_size);
        Self {
            state,
            showcase: ShowcaseState::default(),
            dev_panel_view: DevPanelView::default(),
            applied_theme: None,
        }
    }

    /// Remove consumed key presses from this frame's input so no widget
    /// reacts to them.
    fn handle_global_keys(&mut self, ctx: &egui::Context) {
        let state = &mut self.state;
        ctx.input_mut(|input| {
            input.events.retain(|event| match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    modifiers,
                    ..
                } => state.handle_key(*key, *modifiers) == KeyDisposition::Ignored,
                _ => true,
            });
        });
    }

    /// Install visuals for whatever the root attributes currently name.
    fn apply_theme(&mut self, ctx: &egui::Context) {
        let config = ui::theme::config_from_attributes(self.state.theme.attributes());
        if self.applied_theme == Some(config) {
            return;
        }

        let egui_theme = if config.mode.is_dark() {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        };
        ctx.set_theme(egui_theme);
        ctx.set_visuals_of(egui_theme, ui::theme::visuals(config));
        self.applied_theme = Some(config);
        tracing::debug!(theme = %config.full_theme_name(), "Visuals applied");
    }
}

impl eframe::App for ModusKitApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.observe_system_theme(system_prefers_dark(ctx));
        self.handle_global_keys(ctx);
        self.apply_theme(ctx);

        egui::TopBottomPanel::top("toolbar")
            .exact_height(ui::theme::TOOLBAR_HEIGHT)
            .show(ctx, |ui| {
                ui::panels::toolbar::render(ui, &mut self.state);
            });

        if !self.state.warnings.is_empty() {
            egui::TopBottomPanel::top("warnings").show(ctx, |ui| {
                ui::panels::toolbar::render_warnings(ui, &mut self.state);
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::showcase::render(ui, &self.state, &mut self.showcase);
        });

        ui::panels::dev_panel::render(ctx, &mut self.state, &mut self.dev_panel_view);

        // Toolbar and Dev Panel clicks may have changed the theme this frame.
        let before = self.applied_theme;
        self.apply_theme(ctx);
        if before != self.applied_theme {
            ctx.request_repaint();
        }
    }
}

/// The OS colour-scheme preference as reported by the windowing layer.
pub fn system_prefers_dark(ctx: &egui::Context) -> Option<bool> {
    ctx.system_theme().map(|theme| theme == egui::Theme::Dark)
}

/// Scale every text style relative to the body size.
fn apply_font_size(ctx: &egui::Context, body_size: f32) {
    let scale = body_size / egui::Style::default()
        .text_styles
        .get(&egui::TextStyle::Body)
        .map(|f| f.size)
        .unwrap_or(body_size);

    ctx.all_styles_mut(|style| {
        for font in style.text_styles.values_mut() {
            font.size *= scale;
        }
    });
    tracing::debug!(body_size, "Font size applied");
}
