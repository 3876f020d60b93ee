// src/animation/label_pulse.rs
//
// The label highlight pulse.
//
// A pulse is scheduled relative to one Animate step of the timeline:
// wait `delay` seconds into the step, hold the highlight color for
// `hold` seconds, then restore the default. The pulse and the angle
// move share nothing but the scene clock.

use crate::animation::{Timeline, TimelineStep};
use std::error::Error;

#[derive(Debug, Clone, Copy)]
pub struct LabelPulse {
    pub step_index: usize,
    pub delay: f32,
    pub hold: f32,
}

/// Pulses resolved to absolute [start, end) windows on the scene clock.
#[derive(Debug, Clone, Default)]
pub struct PulseSchedule {
    windows: Vec<(f32, f32)>,
}

impl PulseSchedule {
    /// Resolve pulses against the timeline. A pulse that targets a hold
    /// step, a missing step, or a window running past the end of its
    /// step is a scheduling inconsistency and is rejected here.
    pub fn resolve(pulses: &[LabelPulse], timeline: &Timeline) -> Result<Self, Box<dyn Error>> {
        let mut windows = Vec::with_capacity(pulses.len());

        for pulse in pulses {
            if !pulse.delay.is_finite() || pulse.delay < 0.0 {
                return Err(format!("pulse delay {} is invalid", pulse.delay).into());
            }
            if !pulse.hold.is_finite() || pulse.hold < 0.0 {
                return Err(format!("pulse hold {} is invalid", pulse.hold).into());
            }

            let (start, duration) = timeline
                .step_span(pulse.step_index)
                .ok_or_else(|| format!("pulse targets missing step {}", pulse.step_index))?;
            match timeline.step(pulse.step_index) {
                Some(TimelineStep::Animate { .. }) => {}
                _ => {
                    return Err(
                        format!("pulse targets non-animate step {}", pulse.step_index).into(),
                    )
                }
            }
            if pulse.delay + pulse.hold > duration {
                return Err(format!(
                    "pulse on step {} runs {}s past the step's end",
                    pulse.step_index,
                    pulse.delay + pulse.hold - duration
                )
                .into());
            }

            windows.push((start + pulse.delay, start + pulse.delay + pulse.hold));
        }

        Ok(Self { windows })
    }

    pub fn is_highlighted(&self, time: f32) -> bool {
        self.windows
            .iter()
            .any(|&(start, end)| time >= start && time < end)
    }
}
