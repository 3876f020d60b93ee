pub mod geometry;
pub mod scene_model;

pub use geometry::{rotate_point, ArcDescriptor, LineSegment};
pub use scene_model::{AngleUnits, PulseSpec, SceneScript, ScriptStep};
