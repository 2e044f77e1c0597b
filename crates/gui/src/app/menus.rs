//! Application menu bar and settings window

use eframe::egui;

use crate::i18n::{set_lang, t, Lang};
use crate::state::{AppState, Language};
use crate::viewport::ViewportPanel;

/// Show the file menu
pub fn file_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button(t("menu.file"), |ui| {
        if ui.button(t("menu.open")).clicked() {
            ui.close_menu();
            if let Some(path) = rfd::FileDialog::new()
                .set_title(t("menu.open_title"))
                .add_filter("JSON", &["json"])
                .pick_file()
            {
                state.loader.start_load(path);
            }
        }
        if ui
            .add_enabled(
                state.loaded_path.is_some(),
                egui::Button::new(t("menu.close_model")),
            )
            .clicked()
        {
            state.hover.reset(&mut state.model);
            state.contour.disable(&mut state.model);
            state.model.clear();
            state.diagnostics.clear();
            state.loaded_path = None;
            ui.close_menu();
        }
        ui.separator();
        if ui.button(t("menu.quit")).clicked() {
            std::process::exit(0);
        }
    });
}

/// Show the view menu
pub fn view_menu(ui: &mut egui::Ui, state: &mut AppState, viewport: &mut ViewportPanel) {
    ui.menu_button(t("menu.view"), |ui| {
        ui.checkbox(&mut state.show_controls_panel, t("menu.controls"));
        ui.separator();
        if ui.button(t("menu.reset_camera")).clicked() {
            viewport.reset_camera();
            ui.close_menu();
        }
        if ui
            .add_enabled(!state.model.is_empty(), egui::Button::new(t("menu.fit_view")))
            .clicked()
        {
            viewport.focus_on(state.model.focus_point());
            ui.close_menu();
        }
        ui.separator();
        ui.menu_button(t("menu.language"), |ui| {
            for language in Language::all() {
                let selected = state.settings.ui.language == *language;
                if ui.selectable_label(selected, language.display_name()).clicked() {
                    state.settings.ui.language = *language;
                    set_lang(match language {
                        Language::Russian => Lang::Ru,
                        Language::English => Lang::En,
                    });
                    ui.close_menu();
                }
            }
        });
    });
}

/// Show the settings menu
pub fn settings_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button(t("menu.settings"), |ui| {
        if ui.button(t("menu.preferences")).clicked() {
            state.show_settings_window = true;
            ui.close_menu();
        }
    });
}

/// Show the settings window
pub fn settings_window(ctx: &egui::Context, state: &mut AppState) {
    let mut open = state.show_settings_window;
    egui::Window::new(t("settings.title"))
        .open(&mut open)
        .resizable(true)
        .default_width(400.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                show_grid_settings(ui, state);
                show_axes_settings(ui, state);
                show_viewport_settings(ui, state);
                show_environment_settings(ui, state);
                show_ui_settings(ui, state);
                show_settings_buttons(ui, state);
            });
        });
    state.show_settings_window = open;
}

fn show_grid_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.grid"));
    ui.checkbox(&mut state.settings.grid.visible, t("settings.grid_visible"));

    ui.horizontal(|ui| {
        ui.label(t("settings.grid_size"));
        ui.add(
            egui::DragValue::new(&mut state.settings.grid.size)
                .speed(0.5)
                .range(0.5..=100.0)
                .suffix(" m"),
        );
    });

    ui.horizontal(|ui| {
        ui.label(t("settings.grid_range"));
        ui.add(
            egui::DragValue::new(&mut state.settings.grid.range)
                .speed(1)
                .range(1..=50),
        );
    });

    ui.horizontal(|ui| {
        ui.label(t("settings.grid_opacity"));
        ui.add(egui::Slider::new(&mut state.settings.grid.opacity, 0.0..=1.0));
    });
    ui.add_space(10.0);
}

fn show_axes_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.axes"));
    ui.checkbox(&mut state.settings.axes.visible, t("settings.axes_visible"));
    ui.checkbox(&mut state.settings.axes.show_labels, t("settings.axes_labels"));

    ui.horizontal(|ui| {
        ui.label(t("settings.axes_length"));
        ui.add(
            egui::DragValue::new(&mut state.settings.axes.length)
                .speed(0.5)
                .range(1.0..=100.0)
                .suffix(" m"),
        );
    });
    ui.add_space(10.0);
}

fn show_viewport_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.viewport"));
    ui.horizontal(|ui| {
        ui.label(t("settings.bg_color"));
        color_edit(ui, &mut state.settings.viewport.background_color);
    });
    ui.add_space(10.0);
}

fn show_environment_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.environment"));

    ui.checkbox(&mut state.settings.environment.show_sea, t("ctrl.sea"));
    ui.horizontal(|ui| {
        ui.label(t("settings.sea_color"));
        color_edit(ui, &mut state.settings.environment.sea_color);
    });

    ui.checkbox(&mut state.settings.environment.show_mudline, t("ctrl.mudline"));
    ui.horizontal(|ui| {
        ui.label(t("settings.mudline_color"));
        color_edit(ui, &mut state.settings.environment.mudline_color);
    });

    ui.horizontal(|ui| {
        ui.label(t("ctrl.mudline_elev"));
        ui.add(
            egui::DragValue::new(&mut state.settings.environment.mudline_elevation)
                .speed(0.5)
                .range(-1000.0..=0.0)
                .suffix(" m"),
        );
    });

    ui.horizontal(|ui| {
        ui.label(t("settings.plane_size"));
        ui.add(
            egui::DragValue::new(&mut state.settings.environment.plane_half_size)
                .speed(1.0)
                .range(10.0..=2000.0)
                .suffix(" m"),
        );
    });
    ui.add_space(10.0);
}

fn show_ui_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.ui"));
    ui.horizontal(|ui| {
        ui.label(t("settings.font_size"));
        ui.add(
            egui::DragValue::new(&mut state.settings.ui.font_size)
                .speed(0.5)
                .range(8.0..=24.0)
                .suffix(" pt"),
        );
    });
    ui.add_space(10.0);
}

fn show_settings_buttons(ui: &mut egui::Ui, state: &mut AppState) {
    ui.separator();
    ui.horizontal(|ui| {
        if ui.button(t("settings.apply")).clicked() {
            state.settings.save();
        }
        if ui.button(t("settings.reset")).clicked() {
            state.settings = crate::state::AppSettings::default();
        }
        if ui.button(t("settings.close")).clicked() {
            state.show_settings_window = false;
        }
    });
}

fn color_edit(ui: &mut egui::Ui, rgb: &mut [u8; 3]) {
    let mut color = egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2]);
    if ui.color_edit_button_srgba(&mut color).changed() {
        *rgb = [color.r(), color.g(), color.b()];
    }
}
