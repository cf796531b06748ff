//! Viewport overlay drawing (axis labels, dimension annotations)

use egui::{Align2, Color32, Painter, Stroke};
use glam::DVec3;

use crate::state::settings::DimensionSettings;

use super::camera::ArcBallCamera;
use super::measure::{dimension_lines, GroupMeasurement, MeasureAxis};

const WIDTH_COLOR: Color32 = Color32::from_rgb(0xff, 0x6b, 0x6b);
const HEIGHT_COLOR: Color32 = Color32::from_rgb(0x4e, 0xcd, 0xc4);
const DEPTH_COLOR: Color32 = Color32::from_rgb(0x45, 0xb7, 0xd1);

/// Draw axis labels in the viewport
pub fn draw_axis_labels(painter: &Painter, rect: egui::Rect, camera: &ArcBallCamera) {
    let labels = [
        ([1.6_f32, 0.0, 0.0], "X", Color32::from_rgb(220, 70, 70)),
        ([0.0, 1.6, 0.0], "Y", Color32::from_rgb(70, 200, 70)),
        ([0.0, 0.0, 1.6], "Z", Color32::from_rgb(70, 110, 220)),
    ];

    for (pos, label, color) in &labels {
        if let Some(screen) = camera.project(*pos, rect) {
            if rect.contains(screen) {
                painter.text(
                    screen,
                    Align2::LEFT_BOTTOM,
                    *label,
                    egui::FontId::monospace(12.0),
                    *color,
                );
            }
        }
    }
}

/// Draw the three group measurement lines: main segment, extension lines,
/// endpoint dots and the centimeter label. Each axis keeps its fixed color
/// and side.
pub fn draw_dimension_lines(
    painter: &Painter,
    rect: egui::Rect,
    camera: &ArcBallCamera,
    measurement: &GroupMeasurement,
    settings: &DimensionSettings,
) {
    for line in dimension_lines(measurement) {
        let color = match line.axis {
            MeasureAxis::Width => WIDTH_COLOR,
            MeasureAxis::Height => HEIGHT_COLOR,
            MeasureAxis::Depth => DEPTH_COLOR,
        };
        let main_stroke = Stroke::new(2.0, color);
        let ext_stroke = Stroke::new(
            1.0,
            Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 140),
        );

        let (Some(a), Some(b)) = (
            project(camera, rect, line.start),
            project(camera, rect, line.end),
        ) else {
            continue;
        };

        for (from, to) in line.extensions {
            if let (Some(pa), Some(pb)) =
                (project(camera, rect, from), project(camera, rect, to))
            {
                painter.line_segment([pa, pb], ext_stroke);
            }
        }

        painter.line_segment([a, b], main_stroke);
        painter.circle_filled(a, 3.0, color);
        painter.circle_filled(b, 3.0, color);

        if let Some(label_pos) = project(camera, rect, line.label) {
            let (anchor, nudge) = match line.axis {
                MeasureAxis::Width => (Align2::CENTER_BOTTOM, egui::vec2(0.0, -4.0)),
                MeasureAxis::Height => (Align2::LEFT_CENTER, egui::vec2(6.0, 0.0)),
                MeasureAxis::Depth => (Align2::RIGHT_CENTER, egui::vec2(-6.0, 0.0)),
            };
            painter.text(
                label_pos + nudge,
                anchor,
                format!("{:.prec$} cm", line.value_cm, prec = settings.precision),
                egui::FontId::proportional(settings.font_size),
                color,
            );
        }
    }
}

fn project(camera: &ArcBallCamera, rect: egui::Rect, p: DVec3) -> Option<egui::Pos2> {
    camera.project([p.x as f32, p.y as f32, p.z as f32], rect)
}
