// src/models/scene_model.rs
// the JSON-based scene script data model

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

use crate::animation::{EasingType, LabelPulse, PulseSchedule, Timeline, TimelineStep};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnits {
    Degrees,
    Radians,
}

impl AngleUnits {
    /// Factor converting script angle values into radians.
    pub fn to_radians_factor(&self) -> f32 {
        match self {
            AngleUnits::Degrees => std::f32::consts::PI / 180.0,
            AngleUnits::Radians => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PulseSpec {
    pub delay: f32,
    pub hold: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ScriptStep {
    Hold {
        duration: f32,
    },
    Animate {
        target: f32,
        duration: f32,
        easing: EasingType,
        #[serde(default)]
        pulse: Option<PulseSpec>,
    },
}

/// One scene, as authored in scene.json. Angles are in `units`;
/// positions and radii are in scene units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneScript {
    pub name: String,
    pub units: AngleUnits,
    pub pivot: [f32; 2],
    #[serde(rename = "referenceOffset")]
    pub reference_offset: [f32; 2],
    pub radius: f32,
    #[serde(rename = "labelRadiusOffset")]
    pub label_radius_offset: f32,
    #[serde(rename = "initialAngle")]
    pub initial_angle: f32,
    pub steps: Vec<ScriptStep>,
}

impl SceneScript {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(path)?;
        let script: SceneScript = serde_json::from_str(&content)?;
        script.validate()?;
        Ok(script)
    }

    /// Reject malformed geometry and schedules before the scene is built.
    /// There is no partial-rendering fallback for bad input.
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        self.validate_geometry()?;

        // Step durations are checked by the timeline, pulse containment
        // by the schedule
        let timeline = self.timeline()?;
        PulseSchedule::resolve(&self.pulses(), &timeline)?;
        Ok(())
    }

    /// The geometric half of validation; the scene builder runs this and
    /// then constructs the timeline and pulse schedule itself.
    pub fn validate_geometry(&self) -> Result<(), Box<dyn Error>> {
        if !self.pivot.iter().all(|c| c.is_finite()) {
            return Err("pivot must be finite".into());
        }
        if !self.reference_offset.iter().all(|c| c.is_finite()) {
            return Err("reference offset must be finite".into());
        }
        if self.reference_offset[0] == 0.0 && self.reference_offset[1] == 0.0 {
            return Err("reference offset must not be zero-length".into());
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(format!("radius must be positive, got {}", self.radius).into());
        }
        if !self.label_radius_offset.is_finite() || self.label_radius_offset < 0.0 {
            return Err(format!(
                "label radius offset must be non-negative, got {}",
                self.label_radius_offset
            )
            .into());
        }
        if !self.initial_angle.is_finite() {
            return Err("initial angle must be finite".into());
        }
        Ok(())
    }

    /// The script's steps as a radian-valued timeline.
    pub fn timeline(&self) -> Result<Timeline, Box<dyn Error>> {
        let scale = self.units.to_radians_factor();
        let steps = self
            .steps
            .iter()
            .map(|step| match step {
                ScriptStep::Hold { duration } => TimelineStep::Hold {
                    duration: *duration,
                },
                ScriptStep::Animate {
                    target,
                    duration,
                    easing,
                    ..
                } => TimelineStep::Animate {
                    target: target * scale,
                    duration: *duration,
                    easing: *easing,
                },
            })
            .collect();
        Timeline::new(self.initial_angle * scale, steps)
    }

    /// Pulses declared on animate steps, tagged with their step index.
    pub fn pulses(&self) -> Vec<LabelPulse> {
        self.steps
            .iter()
            .enumerate()
            .filter_map(|(i, step)| match step {
                ScriptStep::Animate {
                    pulse: Some(spec), ..
                } => Some(LabelPulse {
                    step_index: i,
                    delay: spec.delay,
                    hold: spec.hold,
                }),
                _ => None,
            })
            .collect()
    }

    pub fn initial_angle_radians(&self) -> f32 {
        self.initial_angle * self.units.to_radians_factor()
    }
}
