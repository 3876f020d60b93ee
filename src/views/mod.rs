// src/views/mod.rs

pub mod angle_scene;

pub use angle_scene::{update_scene, AngleScene, SceneFrame, SceneStyle};
