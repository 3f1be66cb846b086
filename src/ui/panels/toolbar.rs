// ModusKit - ui/panels/toolbar.rs
//
// Top toolbar: theme family picker, light/dark toggle, Dev Panel button.

use crate::app::state::AppState;
use crate::core::model::ThemeFamily;

/// Render the toolbar contents.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal_centered(|ui| {
        ui.label(egui::RichText::new("Modus").strong());
        ui.separator();

        let current = state.theme.theme_config();
        let mut family = current.family;
        egui::ComboBox::from_id_salt("theme_family")
            .selected_text(family.label())
            .show_ui(ui, |ui| {
                for f in ThemeFamily::all() {
                    ui.selectable_value(&mut family, *f, f.label());
                }
            });
        if family != current.family {
            state.theme.set_theme_name(family);
        }

        let mode_label = if current.mode.is_dark() {
            "\u{2600} Light"
        } else {
            "\u{1f319} Dark"
        };
        if ui
            .button(mode_label)
            .on_hover_text("Switch between light and dark mode")
            .clicked()
        {
            state.theme.toggle_mode();
        }

        if state.theme.is_following_system() {
            ui.label(egui::RichText::new("following system").small().weak());
        }
        if state.debug_mode {
            ui.label(egui::RichText::new("debug").small().weak());
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = if state.dev_panel.is_open() {
                "Close Dev Panel"
            } else {
                "Dev Panel"
            };
            if ui
                .selectable_label(state.dev_panel.is_open(), label)
                .on_hover_text("Ctrl/Cmd+Shift+D")
                .clicked()
            {
                state.dev_panel.toggle();
            }
            ui.label(
                egui::RichText::new(state.theme.full_theme_name())
                    .monospace()
                    .weak(),
            );
        });
    });
}

/// Render dismissible startup warnings, if any.
pub fn render_warnings(ui: &mut egui::Ui, state: &mut AppState) {
    let mut dismiss = false;
    ui.horizontal(|ui| {
        ui.colored_label(ui.visuals().warn_fg_color, "\u{26a0}");
        ui.vertical(|ui| {
            for warning in &state.warnings {
                ui.label(egui::RichText::new(warning).small());
            }
        });
        if ui.small_button("Dismiss").clicked() {
            dismiss = true;
        }
    });
    if dismiss {
        state.warnings.clear();
    }
}
