//! Viewport overlay drawing (axis labels, hover tooltip, contour legend)

use egui::Painter;

use crate::build::ContourAttribute;
use crate::i18n::t;
use crate::state::AppState;

use super::camera::ArcBallCamera;

/// Draw axis labels just past the arrow tips
pub fn draw_axis_labels(
    painter: &Painter,
    rect: egui::Rect,
    camera: &ArcBallCamera,
    axes_length: f32,
) {
    let d = axes_length * 1.07;
    let labels = [
        ([d, 0.0, 0.0], "X", egui::Color32::from_rgb(220, 70, 70)),
        ([0.0, d, 0.0], "Z", egui::Color32::from_rgb(70, 200, 70)),
        ([0.0, 0.0, d], "Y", egui::Color32::from_rgb(70, 110, 220)),
    ];

    for (pos, label, color) in &labels {
        if let Some(screen) = camera.project(*pos, rect) {
            if rect.contains(screen) {
                painter.text(
                    screen,
                    egui::Align2::LEFT_BOTTOM,
                    *label,
                    egui::FontId::monospace(12.0),
                    *color,
                );
            }
        }
    }
}

/// Format a meter value as whole millimeters
pub fn format_mm(meters: f64) -> String {
    format!("{} mm", (meters * 1000.0).round() as i64)
}

/// Tooltip with the section attributes of the hovered element
pub fn draw_hover_tooltip(
    painter: &Painter,
    rect: egui::Rect,
    camera: &ArcBallCamera,
    state: &AppState,
) {
    let Some(id) = state.hover.hovered() else {
        return;
    };
    let Some(element) = state.model.element(id) else {
        return;
    };
    let center = element.aabb.center();
    let Some(anchor) = camera.project([center.x, center.y, center.z], rect) else {
        return;
    };
    if !rect.contains(anchor) {
        return;
    }

    let a = &element.attributes;
    let text = format!(
        "{}: {}\n{}: {}\n{}: {}",
        t("attr.od_short"),
        format_mm(a.outer_diameter),
        t("attr.id_short"),
        format_mm(a.inner_diameter),
        t("attr.thk_short"),
        format_mm(a.wall_thickness),
    );

    let galley = painter.layout_no_wrap(
        text,
        egui::FontId::monospace(12.0),
        egui::Color32::from_rgb(230, 230, 235),
    );
    let pos = anchor + egui::vec2(14.0, -10.0);
    let bg = egui::Rect::from_min_size(pos, galley.size()).expand(5.0);
    painter.rect_filled(bg, 4.0, egui::Color32::from_rgba_premultiplied(20, 20, 25, 210));
    painter.galley(pos, galley, egui::Color32::from_rgb(230, 230, 235));
}

fn attribute_label(attr: ContourAttribute) -> &'static str {
    match attr {
        ContourAttribute::OuterDiameter => t("attr.od"),
        ContourAttribute::InnerDiameter => t("attr.id"),
        ContourAttribute::WallThickness => t("attr.thk"),
    }
}

/// Vertical legend strip with labeled ticks, shown while contouring is on.
///
/// Top of the strip is the maximum, bottom the minimum, labels in mm.
pub fn draw_contour_legend(painter: &Painter, rect: egui::Rect, state: &AppState) {
    if !state.contour.is_enabled() {
        return;
    }
    let Some(ticks) = state.contour.legend_ticks() else {
        return;
    };

    let strip_w = 18.0;
    let strip_h = (rect.height() * 0.45).max(120.0);
    let top_left = egui::pos2(rect.left() + 14.0, rect.top() + 40.0);
    let strip = egui::Rect::from_min_size(top_left, egui::vec2(strip_w, strip_h));

    // Title
    painter.text(
        egui::pos2(strip.left(), strip.top() - 8.0),
        egui::Align2::LEFT_BOTTOM,
        attribute_label(state.contour.attribute),
        egui::FontId::proportional(12.0),
        egui::Color32::from_rgb(40, 40, 45),
    );

    // Gradient strip as stacked slices, max at the top
    let ramp = state.contour.ramp.ramp();
    let slices = 48;
    for i in 0..slices {
        let t0 = i as f32 / slices as f32;
        let t1 = (i + 1) as f32 / slices as f32;
        let c = ramp.sample(1.0 - (t0 + t1) * 0.5);
        let slice = egui::Rect::from_min_max(
            egui::pos2(strip.left(), strip.top() + t0 * strip_h),
            egui::pos2(strip.right(), strip.top() + t1 * strip_h),
        );
        painter.rect_filled(
            slice,
            0.0,
            egui::Color32::from_rgb(
                (c[0] * 255.0) as u8,
                (c[1] * 255.0) as u8,
                (c[2] * 255.0) as u8,
            ),
        );
    }
    painter.rect_stroke(
        strip,
        0.0,
        egui::Stroke::new(1.0, egui::Color32::from_rgb(90, 90, 95)),
        egui::StrokeKind::Outside,
    );

    // Tick labels, first tick at the top
    let n = ticks.len();
    for (i, value) in ticks.iter().enumerate() {
        let frac = if n > 1 { i as f32 / (n - 1) as f32 } else { 0.0 };
        let y = strip.top() + frac * strip_h;
        painter.line_segment(
            [
                egui::pos2(strip.right(), y),
                egui::pos2(strip.right() + 4.0, y),
            ],
            egui::Stroke::new(1.0, egui::Color32::from_rgb(90, 90, 95)),
        );
        painter.text(
            egui::pos2(strip.right() + 7.0, y),
            egui::Align2::LEFT_CENTER,
            format_mm(*value),
            egui::FontId::monospace(11.0),
            egui::Color32::from_rgb(40, 40, 45),
        );
    }
}
