// src/draw/scene_draw.rs
// Scene geometry translation to Nannou Draw for drawing

use nannou::prelude::*;

use crate::draw::DrawStyle;
use crate::models::{ArcDescriptor, LineSegment};

// Scene coordinates to screen pixels
fn to_screen(point: Point2, pixels_per_unit: f32) -> Point2 {
    point * pixels_per_unit
}

pub fn draw_line_segment(
    draw: &Draw,
    segment: &LineSegment,
    style: &DrawStyle,
    pixels_per_unit: f32,
) {
    draw.line()
        .start(to_screen(segment.start, pixels_per_unit))
        .end(to_screen(segment.end, pixels_per_unit))
        .stroke_weight(style.stroke_weight)
        .color(style.color)
        .caps_round();
}

/// Draw an arc as a polyline sampled at `resolution` points along the
/// sweep. A zero-measure arc has nothing to draw.
pub fn draw_arc(
    draw: &Draw,
    arc: &ArcDescriptor,
    style: &DrawStyle,
    resolution: u32,
    pixels_per_unit: f32,
) {
    if arc.sweep_angle == 0.0 || resolution < 2 {
        return;
    }

    let points: Vec<Point2> = (0..=resolution)
        .map(|i| {
            let p = i as f32 / resolution as f32;
            to_screen(arc.point_from_proportion(p), pixels_per_unit)
        })
        .collect();

    // Draw the arc segments as individual lines with proper stroke weight
    for window in points.windows(2) {
        if let [p1, p2] = window {
            draw.line()
                .start(*p1)
                .end(*p2)
                .stroke_weight(style.stroke_weight)
                .color(style.color)
                .caps_round();
        }
    }
}

pub fn draw_label(
    draw: &Draw,
    text: &str,
    position: Point2,
    color: Rgb,
    font_size: u32,
    pixels_per_unit: f32,
) {
    draw.text(text)
        .xy(to_screen(position, pixels_per_unit))
        .font_size(font_size)
        .color(color);
}
