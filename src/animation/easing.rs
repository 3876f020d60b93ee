// src/animation/easing.rs
//
// Rate functions for timeline steps

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    Linear,
    Smooth,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl EasingType {
    /// Map raw progress t in [0, 1] to eased progress.
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            EasingType::Linear => t,
            EasingType::Smooth => smooth(t),
            EasingType::EaseIn => ease_in(t),
            EasingType::EaseOut => ease_out(t),
            EasingType::EaseInOut => ease_in_out(t),
        }
    }
}

// Quintic ease-in-out with zero velocity at both endpoints
fn smooth(t: f32) -> f32 {
    t * t * t * (10.0 - 15.0 * t + 6.0 * t * t)
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

fn ease_in(t: f32) -> f32 {
    t * t
}

fn ease_out(t: f32) -> f32 {
    t * (2.0 - t)
}
