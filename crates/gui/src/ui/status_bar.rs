use egui::Ui;

use crate::i18n::t;
use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui| {
        ui.weak(format!("{}: {}", t("status.elements"), state.model.len()));

        if !state.diagnostics.is_empty() {
            ui.separator();
            ui.colored_label(
                egui::Color32::from_rgb(200, 120, 30),
                format!("{} {}", state.diagnostics.len(), t("status.skipped")),
            );
        }

        ui.separator();
        if state.loader.is_loading() {
            ui.colored_label(egui::Color32::from_rgb(255, 200, 100), t("status.loading"));
        } else {
            ui.weak(t("status.ready"));
        }

        // Right-aligned version
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak("jview v0.1");
        });
    });
}
