// src/config/config_types.rs
//
// Config types for the app

use nannou::prelude::*;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PathConfig {
    pub scene_file: String,
}

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize)]
pub struct RenderConfig {
    pub arc_resolution: u32,    // polyline samples per arc
    pub pixels_per_unit: f32,   // scene units to screen pixels
}

#[derive(Debug, Deserialize)]
pub struct StyleConfig {
    pub stroke_weight: f32,
    pub arc_stroke_weight: f32,
    pub label_font_size: u32,
    pub background_color: [f32; 3],
    pub reference_color: [f32; 3],
    pub rotating_color: [f32; 3],
    pub arc_color: [f32; 3],
    pub label_default_color: [f32; 3],
    pub label_highlight_color: [f32; 3],
}

#[derive(Debug, Deserialize)]
pub struct PlaybackConfig {
    pub loop_scene: bool,
}

pub fn color_from(components: [f32; 3]) -> Rgb {
    rgb(components[0], components[1], components[2])
}
