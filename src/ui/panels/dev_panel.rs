// ModusKit - ui/panels/dev_panel.rs
//
// Dev Panel overlay: browse components, theme colours, and icons.
// Visibility comes from `state.dev_panel`; closing the window through its
// title-bar button goes through the same store.

use crate::app::dev_panel::DevPanelTab;
use crate::app::state::AppState;
use crate::core::catalog;
use crate::ui::theme;
use crate::util::constants::{DEV_PANEL_WIDTH, SWATCH_SIZE};

/// UI-only state of the panel (search box contents).
#[derive(Debug, Default, Clone)]
pub struct DevPanelView {
    pub query: String,
}

/// Render the Dev Panel window (if open).
pub fn render(ctx: &egui::Context, state: &mut AppState, view: &mut DevPanelView) {
    if !state.dev_panel.is_open() {
        return;
    }

    let mut open = true;
    egui::Window::new("Dev Panel")
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(DEV_PANEL_WIDTH)
        .anchor(egui::Align2::RIGHT_TOP, [-12.0, 48.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let mut tab = state.dev_panel.active_tab();
                for t in DevPanelTab::all() {
                    ui.selectable_value(&mut tab, *t, t.label());
                }
                state.dev_panel.set_active_tab(tab);
            });
            ui.separator();

            match state.dev_panel.active_tab() {
                DevPanelTab::Components => render_components(ui, view),
                DevPanelTab::Colors => render_colors(ui, state),
                DevPanelTab::Icons => render_icons(ui, view),
            }

            ui.separator();
            ui.label(
                egui::RichText::new("Esc or Ctrl/Cmd+Shift+D to close")
                    .small()
                    .weak(),
            );
        });

    if !open {
        state.dev_panel.close();
    }
}

fn search_box(ui: &mut egui::Ui, view: &mut DevPanelView) {
    ui.add(
        egui::TextEdit::singleline(&mut view.query)
            .hint_text("\u{1f50d} Search")
            .desired_width(f32::INFINITY),
    );
}

fn render_components(ui: &mut egui::Ui, view: &mut DevPanelView) {
    search_box(ui, view);
    let matches = catalog::filter_components(&view.query);
    ui.label(
        egui::RichText::new(format!("{} of {} components", matches.len(), catalog::COMPONENTS.len()))
            .small()
            .weak(),
    );

    egui::ScrollArea::vertical().max_height(360.0).show(ui, |ui| {
        let mut current = None;
        for info in matches {
            if current != Some(info.category) {
                current = Some(info.category);
                ui.add_space(4.0);
                ui.label(egui::RichText::new(info.category.label()).strong());
            }
            ui.horizontal(|ui| {
                ui.label(info.name);
                ui.label(egui::RichText::new(format!("<{}>", info.tag)).monospace().weak());
            });
        }
    });
}

fn render_colors(ui: &mut egui::Ui, state: &AppState) {
    let config = state.theme.theme_config();
    let palette = theme::palette(config);

    egui::Grid::new("dev_panel_theme_grid")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            for (name, value) in state.theme.attributes().iter() {
                ui.label(egui::RichText::new(name).monospace());
                ui.label(egui::RichText::new(value).monospace().strong());
                ui.end_row();
            }
            ui.label("source");
            ui.label(if state.theme.is_following_system() {
                "system preference"
            } else {
                "saved preference"
            });
            ui.end_row();
        });
    ui.add_space(6.0);

    egui::Grid::new("dev_panel_swatches")
        .num_columns(3)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            for (name, colour) in palette.swatches() {
                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2(SWATCH_SIZE, SWATCH_SIZE * 0.6),
                    egui::Sense::hover(),
                );
                ui.painter().rect_filled(rect, 3.0, colour);
                ui.label(name);
                ui.label(
                    egui::RichText::new(format!(
                        "#{:02x}{:02x}{:02x}",
                        colour.r(),
                        colour.g(),
                        colour.b()
                    ))
                    .monospace()
                    .weak(),
                );
                ui.end_row();
            }
        });
}

fn render_icons(ui: &mut egui::Ui, view: &mut DevPanelView) {
    search_box(ui, view);
    let matches = catalog::filter_icons(&view.query);

    egui::ScrollArea::vertical().max_height(360.0).show(ui, |ui| {
        egui::Grid::new("dev_panel_icons")
            .num_columns(4)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                for (i, icon) in matches.iter().enumerate() {
                    ui.vertical_centered(|ui| {
                        ui.label(egui::RichText::new(icon.glyph).size(20.0));
                        ui.label(egui::RichText::new(icon.name).small());
                    });
                    if i % 4 == 3 {
                        ui.end_row();
                    }
                }
            });
    });
}
