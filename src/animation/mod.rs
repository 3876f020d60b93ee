pub mod easing;
pub mod label_pulse;
pub mod timeline;

pub use easing::EasingType;
pub use label_pulse::{LabelPulse, PulseSchedule};
pub use timeline::{AngleTracker, Timeline, TimelineStep};
