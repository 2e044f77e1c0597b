//! Main application module

mod menus;
mod styles;

use std::path::PathBuf;

use eframe::egui;

use crate::i18n::{set_lang, Lang};
use crate::state::{AppSettings, AppState, Language};
use crate::ui::{controls, status_bar};
use crate::viewport::ViewportPanel;

/// Main application
pub struct JviewApp {
    state: AppState,
    viewport: ViewportPanel,
    /// Last applied font size (to detect changes)
    last_font_size: f32,
    /// Snapshot of the last saved settings (for autosave)
    last_saved_settings: AppSettings,
}

impl JviewApp {
    pub fn new(cc: &eframe::CreationContext<'_>, initial_model: Option<PathBuf>) -> Self {
        let mut state = AppState::default();

        apply_language(state.settings.ui.language);

        // Apply initial styles with font size from settings
        styles::configure_styles(&cc.egui_ctx, state.settings.ui.font_size);

        let mut viewport = ViewportPanel::new();

        // Initialize GL renderer if glow context is available
        if let Some(gl) = cc.gl.as_ref() {
            viewport.init_gl(gl);
        }

        // Model passed on the command line loads in the background
        if let Some(path) = initial_model {
            state.loader.start_load(path);
        }

        let last_font_size = state.settings.ui.font_size;
        let last_saved_settings = state.settings.clone();

        Self {
            state,
            viewport,
            last_font_size,
            last_saved_settings,
        }
    }
}

impl eframe::App for JviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        apply_language(self.state.settings.ui.language);

        // Apply font size if changed
        if self.state.settings.ui.font_size != self.last_font_size {
            styles::apply_font_size(ctx, self.state.settings.ui.font_size);
            self.last_font_size = self.state.settings.ui.font_size;
        }

        // Autosave settings when they changed
        if self.state.settings != self.last_saved_settings {
            self.state.settings.save();
            self.last_saved_settings = self.state.settings.clone();
        }

        // Fold in a background load when one finished
        if let Some(outcome) = self.state.loader.poll() {
            self.state.apply_load_outcome(outcome);
            if !self.state.model.is_empty() {
                self.viewport.focus_on(self.state.model.focus_point());
            }
        }
        if self.state.loader.is_loading() {
            // Keep polling while the worker runs
            ctx.request_repaint();
        }

        // ── Menu bar ──────────────────────────────────────────
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                menus::file_menu(ui, &mut self.state);
                menus::view_menu(ui, &mut self.state, &mut self.viewport);
                menus::settings_menu(ui, &mut self.state);
            });
        });

        // ── Settings window ──────────────────────────────────
        menus::settings_window(ctx, &mut self.state);

        // ── Status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(22.0)
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 2)),
            )
            .show(ctx, |ui| {
                status_bar::show(ui, &self.state);
            });

        // ── Right panel: controls ────────────────────────────
        if self.state.show_controls_panel {
            egui::SidePanel::right("controls_panel")
                .default_width(260.0)
                .width_range(200.0..=420.0)
                .resizable(true)
                .frame(
                    egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(6)),
                )
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        controls::show(ui, &mut self.state);
                    });
                });
        }

        // ── Central panel: 3D viewport ───────────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.viewport.show(ui, &mut self.state);
            });
    }
}

fn apply_language(language: Language) {
    set_lang(match language {
        Language::Russian => Lang::Ru,
        Language::English => Lang::En,
    });
}
