//! 3D viewport panel with OpenGL rendering

mod camera;
mod gl_renderer;
pub mod overlays;
pub use jview_gui_lib::viewport::{mesh, picking};

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use egui::Ui;

use crate::i18n::t;
use crate::state::AppState;
use camera::ArcBallCamera;
use gl_renderer::GlRenderer;
use mesh::MeshData;

/// 3D viewport panel with OpenGL rendering
pub struct ViewportPanel {
    camera: ArcBallCamera,
    gl_renderer: Option<Arc<Mutex<GlRenderer>>>,
}

impl ViewportPanel {
    pub fn new() -> Self {
        Self {
            camera: ArcBallCamera::new(),
            gl_renderer: None,
        }
    }

    /// Initialize GL renderer (must be called with a GL context)
    pub fn init_gl(&mut self, gl: &glow::Context) {
        let renderer = GlRenderer::new(gl);
        self.gl_renderer = Some(Arc::new(Mutex::new(renderer)));
    }

    pub fn reset_camera(&mut self) {
        self.camera = ArcBallCamera::new();
    }

    /// Point the camera at the model without changing the orbit angles
    pub fn focus_on(&mut self, target: glam::Vec3) {
        self.camera.target = target;
    }

    pub fn show(&mut self, ui: &mut Ui, state: &mut AppState) {
        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

        // ── Camera controls ─────────────────────────────────────
        if response.dragged_by(egui::PointerButton::Middle)
            || (response.dragged_by(egui::PointerButton::Primary)
                && ui.input(|i| i.modifiers.alt))
        {
            let delta = response.drag_delta();
            self.camera.rotate(delta.x * 0.5, delta.y * 0.5);
        }

        if response.dragged_by(egui::PointerButton::Secondary) {
            let delta = response.drag_delta();
            // Pan speed follows the view distance so far-out views stay usable
            let scale = self.camera.distance * 0.0015;
            self.camera.pan(-delta.x * scale, delta.y * scale);
        }

        // ── Scroll zoom ─────────────────────────────────────────
        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll.abs() > 0.1 {
                self.camera.zoom(scroll * 0.01);
            }
        }

        // ── Hover pick ──────────────────────────────────────────
        self.update_hover(&response, rect, state);

        if !ui.is_rect_visible(rect) {
            return;
        }

        // ── GL rendering ────────────────────────────────────────
        self.render_gl(ui, rect, state);

        // ── Overlays ────────────────────────────────────────────
        self.draw_overlays(ui, rect, state);
    }

    /// Cast a ray under the cursor each frame and advance the hover machine
    fn update_hover(&self, response: &egui::Response, rect: egui::Rect, state: &mut AppState) {
        let nearest = response
            .hover_pos()
            .filter(|_| !response.dragged())
            .and_then(|pos| {
                let ray = self.camera.screen_ray(pos, rect);
                state.model.pick(&ray).first().map(|hit| hit.id.clone())
            });
        state.hover.update(&mut state.model, nearest);
    }

    fn render_gl(&self, ui: &mut Ui, rect: egui::Rect, state: &AppState) {
        let Some(gl_renderer) = &self.gl_renderer else {
            return;
        };

        let renderer_clone = gl_renderer.clone();
        let camera_yaw = self.camera.yaw;
        let camera_pitch = self.camera.pitch;
        let camera_distance = self.camera.distance;
        let camera_target = self.camera.target;
        let camera_fov = self.camera.fov;

        let meshes: HashMap<String, MeshData> = state
            .model
            .elements()
            .iter()
            .map(|e| (e.id.clone(), e.mesh.clone()))
            .collect();
        let version = state.model.version();

        let grid_settings = state.settings.grid.clone();
        let axes_settings = state.settings.axes.clone();
        let environment = state.settings.environment.clone();
        let bg_color = state.settings.viewport.background_color;

        let callback = egui::PaintCallback {
            rect,
            callback: Arc::new(eframe::egui_glow::CallbackFn::new(move |info, painter| {
                let gl = painter.gl();

                let camera = ArcBallCamera {
                    yaw: camera_yaw,
                    pitch: camera_pitch,
                    distance: camera_distance,
                    target: camera_target,
                    fov: camera_fov,
                };

                let clip = info.clip_rect_in_pixels();
                let viewport = [
                    clip.left_px as f32,
                    clip.from_bottom_px as f32,
                    clip.width_px as f32,
                    clip.height_px as f32,
                ];

                if let Ok(mut r) = renderer_clone.lock() {
                    r.update_grid(gl, &grid_settings);
                    r.update_axes(gl, &axes_settings);
                    r.update_environment(gl, &environment);
                    r.sync_from_meshes(gl, &meshes, version);

                    let render_params = gl_renderer::RenderParams {
                        viewport,
                        grid_visible: grid_settings.visible,
                        axes_visible: axes_settings.visible,
                        sea_visible: environment.show_sea,
                        mudline_visible: environment.show_mudline,
                        bg_color,
                    };
                    r.paint(gl, &camera, &render_params);
                }
            })),
        };

        ui.painter().add(callback);
    }

    fn draw_overlays(&self, ui: &mut Ui, rect: egui::Rect, state: &AppState) {
        let painter = ui.painter_at(rect);

        if state.settings.axes.visible && state.settings.axes.show_labels {
            overlays::draw_axis_labels(&painter, rect, &self.camera, state.settings.axes.length);
        }

        overlays::draw_contour_legend(&painter, rect, state);
        overlays::draw_hover_tooltip(&painter, rect, &self.camera, state);

        // Navigation hint on an empty scene
        if state.model.is_empty() {
            painter.text(
                egui::pos2(rect.center().x, rect.bottom() - 20.0),
                egui::Align2::CENTER_BOTTOM,
                t("status.nav_hint"),
                egui::FontId::proportional(11.0),
                egui::Color32::from_rgb(100, 100, 110),
            );
        }
    }
}
