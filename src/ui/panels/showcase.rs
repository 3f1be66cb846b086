// ModusKit - ui/panels/showcase.rs
//
// Central page: a handful of controls rendered under the active theme so a
// theme change is immediately visible.

use crate::app::state::AppState;
use crate::ui::theme::{self, SECTION_SPACING};

/// Values bound to the demo controls. UI-only, never persisted.
#[derive(Debug, Clone)]
pub struct ShowcaseState {
    pub text: String,
    pub checked: bool,
    pub switch_on: bool,
    pub slider: f32,
    pub choice: usize,
}

impl Default for ShowcaseState {
    fn default() -> Self {
        Self {
            text: String::new(),
            checked: true,
            switch_on: false,
            slider: 40.0,
            choice: 0,
        }
    }
}

const CHOICES: [&str; 3] = ["Small", "Medium", "Large"];

/// Render the showcase page.
pub fn render(ui: &mut egui::Ui, state: &AppState, demo: &mut ShowcaseState) {
    let palette = theme::palette(state.theme.theme_config());

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.heading("Component showcase");
        ui.label(
            egui::RichText::new("Press Ctrl/Cmd+Shift+D to open the Dev Panel.")
                .small()
                .weak(),
        );
        ui.add_space(SECTION_SPACING);

        ui.label(egui::RichText::new("Buttons").strong());
        ui.horizontal(|ui| {
            ui.add(
                egui::Button::new(egui::RichText::new("Primary").color(palette.surface))
                    .fill(palette.primary),
            );
            ui.add(
                egui::Button::new("Secondary")
                    .stroke(egui::Stroke::new(1.0, palette.secondary)),
            );
            ui.add(
                egui::Button::new(egui::RichText::new("Danger").color(palette.surface))
                    .fill(palette.danger),
            );
            ui.add_enabled(false, egui::Button::new("Disabled"));
        });
        ui.add_space(SECTION_SPACING);

        ui.label(egui::RichText::new("Inputs").strong());
        ui.add(egui::TextEdit::singleline(&mut demo.text).hint_text("Text input"));
        ui.checkbox(&mut demo.checked, "Checkbox");
        let label = switch_label(demo.switch_on);
        ui.toggle_value(&mut demo.switch_on, label);
        ui.add(egui::Slider::new(&mut demo.slider, 0.0..=100.0).text("Slider"));
        ui.horizontal(|ui| {
            for (i, label) in CHOICES.iter().enumerate() {
                ui.radio_value(&mut demo.choice, i, *label);
            }
        });
        ui.add_space(SECTION_SPACING);

        ui.label(egui::RichText::new("Feedback").strong());
        ui.add(egui::ProgressBar::new(demo.slider / 100.0).show_percentage());
        ui.colored_label(palette.success, "\u{2714} Saved successfully");
        ui.colored_label(palette.warning, "\u{26a0} Unsaved changes");
        ui.colored_label(palette.danger, "\u{2716} Something went wrong");
    });
}

fn switch_label(on: bool) -> &'static str {
    if on {
        "Switch: on"
    } else {
        "Switch: off"
    }
}
