// src/draw/mod.rs

pub mod scene_draw;

pub use scene_draw::{draw_arc, draw_label, draw_line_segment};

use nannou::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct DrawStyle {
    pub color: Rgb,
    pub stroke_weight: f32,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            color: rgb(1.0, 1.0, 1.0),
            stroke_weight: 2.0,
        }
    }
}
