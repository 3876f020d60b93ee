// src/animation/timeline.rs
//
// The keyframe timeline driving the angle tracker.
//
// A Timeline is an ordered list of holds and eased moves for one scalar
// value. It is sampled by absolute scene time, so a frame's value is a
// pure function of the clock.

use crate::animation::EasingType;
use std::error::Error;

/// The single time-varying scalar the scene is derived from. Radians,
/// unbounded: values past 2pi mean the line has wound around.
#[derive(Debug, Clone, Copy, Default)]
pub struct AngleTracker {
    value: f32,
}

impl AngleTracker {
    pub fn new(value: f32) -> Self {
        Self { value }
    }

    pub fn get_value(&self) -> f32 {
        self.value
    }

    pub fn set_value(&mut self, value: f32) {
        self.value = value;
    }
}

#[derive(Debug, Clone, Copy)]
pub enum TimelineStep {
    Hold {
        duration: f32,
    },
    Animate {
        target: f32,
        duration: f32,
        easing: EasingType,
    },
}

impl TimelineStep {
    pub fn duration(&self) -> f32 {
        match self {
            TimelineStep::Hold { duration } => *duration,
            TimelineStep::Animate { duration, .. } => *duration,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Timeline {
    initial_value: f32,
    steps: Vec<TimelineStep>,
    // Absolute start time and start value of each step, precomputed
    step_starts: Vec<(f32, f32)>,
    total_duration: f32,
}

impl Timeline {
    /// Build a timeline, rejecting malformed schedules up front. There is
    /// no clamping fallback: a bad schedule is fatal to the run.
    pub fn new(initial_value: f32, steps: Vec<TimelineStep>) -> Result<Self, Box<dyn Error>> {
        if !initial_value.is_finite() {
            return Err("timeline initial value must be finite".into());
        }

        let mut step_starts = Vec::with_capacity(steps.len());
        let mut clock = 0.0;
        let mut value = initial_value;
        for (i, step) in steps.iter().enumerate() {
            let duration = step.duration();
            if !duration.is_finite() || duration < 0.0 {
                return Err(format!("step {}: invalid duration {}", i, duration).into());
            }
            if let TimelineStep::Animate { target, .. } = step {
                if !target.is_finite() {
                    return Err(format!("step {}: invalid target {}", i, target).into());
                }
            }
            step_starts.push((clock, value));
            clock += duration;
            if let TimelineStep::Animate { target, .. } = step {
                value = *target;
            }
        }

        Ok(Self {
            initial_value,
            steps,
            step_starts,
            total_duration: clock,
        })
    }

    pub fn duration(&self) -> f32 {
        self.total_duration
    }

    pub fn is_complete(&self, time: f32) -> bool {
        time >= self.total_duration
    }

    /// Absolute start time and duration of step `index`.
    pub fn step_span(&self, index: usize) -> Option<(f32, f32)> {
        let step = self.steps.get(index)?;
        Some((self.step_starts[index].0, step.duration()))
    }

    pub fn step(&self, index: usize) -> Option<&TimelineStep> {
        self.steps.get(index)
    }

    /// Tracker value at scene time `time`. Times before the first step
    /// give the initial value; times past the end give the final value.
    pub fn value_at(&self, time: f32) -> f32 {
        if self.steps.is_empty() || time <= 0.0 {
            return self.initial_value;
        }

        for (i, step) in self.steps.iter().enumerate() {
            let (start, from) = self.step_starts[i];
            let duration = step.duration();
            if time < start + duration {
                return match step {
                    TimelineStep::Hold { .. } => from,
                    TimelineStep::Animate { target, easing, .. } => {
                        let t = (time - start) / duration;
                        from + (target - from) * easing.apply(t)
                    }
                };
            }
        }

        // Past the end: rest at the final value
        match self.steps.last() {
            Some(TimelineStep::Animate { target, .. }) => *target,
            _ => self.step_starts.last().map(|(_, v)| *v).unwrap_or(self.initial_value),
        }
    }
}
