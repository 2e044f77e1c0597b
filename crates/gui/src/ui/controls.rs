//! Controls panel: model info, environment planes, contour coloring and
//! the attributes of the hovered element.

use egui::Ui;

use crate::build::ContourAttribute;
use crate::i18n::t;
use crate::ramp::RampKind;
use crate::state::AppState;
use crate::viewport::overlays::format_mm;

pub fn show(ui: &mut Ui, state: &mut AppState) {
    show_model_section(ui, state);
    ui.add_space(8.0);
    show_environment_section(ui, state);
    ui.add_space(8.0);
    show_contour_section(ui, state);
    ui.add_space(8.0);
    show_hover_section(ui, state);
}

fn show_model_section(ui: &mut Ui, state: &AppState) {
    ui.heading(t("ctrl.model"));
    ui.separator();

    if state.model.is_empty() && state.loaded_path.is_none() {
        ui.weak(t("ctrl.no_model"));
        ui.weak(t("ctrl.use_open"));
        return;
    }

    if let Some(path) = &state.loaded_path {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        ui.monospace(name);
    }
    ui.label(format!("{}: {}", t("ctrl.elements"), state.model.len()));
    if !state.diagnostics.is_empty() {
        ui.colored_label(
            egui::Color32::from_rgb(200, 120, 30),
            format!("{}: {}", t("ctrl.skipped"), state.diagnostics.len()),
        );
        for line in &state.diagnostics {
            ui.weak(line);
        }
    }
}

fn show_environment_section(ui: &mut Ui, state: &mut AppState) {
    ui.heading(t("ctrl.environment"));
    ui.separator();

    ui.checkbox(&mut state.settings.environment.show_sea, t("ctrl.sea"));
    ui.checkbox(&mut state.settings.environment.show_mudline, t("ctrl.mudline"));

    ui.horizontal(|ui| {
        ui.label(t("ctrl.mudline_elev"));
        ui.add(
            egui::DragValue::new(&mut state.settings.environment.mudline_elevation)
                .speed(0.5)
                .range(-1000.0..=0.0)
                .suffix(" m"),
        );
    });
}

fn attribute_label(attr: ContourAttribute) -> &'static str {
    match attr {
        ContourAttribute::OuterDiameter => t("attr.od"),
        ContourAttribute::InnerDiameter => t("attr.id"),
        ContourAttribute::WallThickness => t("attr.thk"),
    }
}

fn ramp_label(ramp: RampKind) -> &'static str {
    match ramp {
        RampKind::Rainbow => t("ramp.rainbow"),
        RampKind::Viridis => t("ramp.viridis"),
    }
}

fn show_contour_section(ui: &mut Ui, state: &mut AppState) {
    ui.heading(t("ctrl.contour"));
    ui.separator();

    let mut enabled = state.contour.is_enabled();
    if ui
        .checkbox(&mut enabled, t("ctrl.contour_enable"))
        .changed()
    {
        if enabled {
            if let Err(e) = state.contour.enable(&mut state.model) {
                tracing::warn!("cannot enable contouring: {e}");
            }
        } else {
            state.contour.disable(&mut state.model);
        }
    }

    ui.horizontal(|ui| {
        ui.label(t("ctrl.attribute"));
        let mut changed = false;
        egui::ComboBox::from_id_salt("contour_attr")
            .selected_text(attribute_label(state.contour.attribute))
            .show_ui(ui, |ui| {
                for attr in ContourAttribute::all() {
                    changed |= ui
                        .selectable_value(&mut state.contour.attribute, attr, attribute_label(attr))
                        .changed();
                }
            });
        if changed {
            state.contour.apply(&mut state.model);
        }
    });

    ui.horizontal(|ui| {
        ui.label(t("ctrl.ramp"));
        let mut changed = false;
        egui::ComboBox::from_id_salt("contour_ramp")
            .selected_text(ramp_label(state.contour.ramp))
            .show_ui(ui, |ui| {
                for ramp in RampKind::all() {
                    changed |= ui
                        .selectable_value(&mut state.contour.ramp, ramp, ramp_label(ramp))
                        .changed();
                }
            });
        if changed {
            state.contour.apply(&mut state.model);
        }
    });
}

fn show_hover_section(ui: &mut Ui, state: &AppState) {
    ui.heading(t("ctrl.hovered"));
    ui.separator();

    let element = state.hover.hovered().and_then(|id| state.model.element(id));
    let Some(element) = element else {
        ui.weak(t("ctrl.hover_none"));
        return;
    };

    let a = &element.attributes;
    egui::Grid::new("hover_attrs")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            ui.label(format!("{}:", t("attr.od")));
            ui.monospace(format_mm(a.outer_diameter));
            ui.end_row();

            ui.label(format!("{}:", t("attr.id")));
            ui.monospace(format_mm(a.inner_diameter));
            ui.end_row();

            ui.label(format!("{}:", t("attr.thk")));
            ui.monospace(format_mm(a.wall_thickness));
            ui.end_row();
        });
}
