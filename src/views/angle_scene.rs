// src/views/angle_scene.rs
//
// The AngleScene is the main updating entity in the visualisation.
//
// It holds the tracker, the timeline and the pulse schedule, and on
// every frame rebuilds the rotating line, the angle arc and the label
// position from the tracker's current value. The rebuild itself is
// update_scene, a pure function of its inputs.

use nannou::prelude::*;
use std::error::Error;

use crate::{
    animation::{AngleTracker, PulseSchedule, Timeline},
    config::{color_from, Config},
    draw::{draw_arc, draw_label, draw_line_segment, DrawStyle},
    models::{ArcDescriptor, LineSegment, SceneScript},
};

const LABEL_TEXT: &str = "θ";

/// The derived visual objects for one frame. Rebuilt, not mutated:
/// a frame's geometry is a value, the next frame replaces it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneFrame {
    pub rotating_line: LineSegment,
    pub arc: ArcDescriptor,
    pub label_arc: ArcDescriptor,
    pub label_position: Point2,
}

/// Rebuild the frame geometry for the current tracker value.
///
/// The rotating line is the reference offset rotated about the pivot,
/// the arc is swept counterclockwise from the reference direction, and
/// the label sits at proportion 0.5 along a concentric arc pushed out
/// by `label_radius_offset`.
pub fn update_scene(
    pivot: Point2,
    reference_offset: Vec2,
    angle_radians: f32,
    radius: f32,
    label_radius_offset: f32,
) -> SceneFrame {
    let reference_line = LineSegment::new(pivot, pivot + reference_offset);
    let rotating_line = reference_line.rotated_about(angle_radians, pivot);

    let arc = ArcDescriptor::between_lines(&reference_line, &rotating_line, radius);
    let label_arc =
        ArcDescriptor::between_lines(&reference_line, &rotating_line, radius + label_radius_offset);
    let label_position = label_arc.point_from_proportion(0.5);

    SceneFrame {
        rotating_line,
        arc,
        label_arc,
        label_position,
    }
}

/// Per-scene style, lifted out of the loaded config so the scene never
/// reads global state.
#[derive(Debug, Clone, Copy)]
pub struct SceneStyle {
    pub reference: DrawStyle,
    pub rotating: DrawStyle,
    pub arc: DrawStyle,
    pub label_default: Rgb,
    pub label_highlight: Rgb,
    pub label_font_size: u32,
    pub arc_resolution: u32,
    pub pixels_per_unit: f32,
}

impl SceneStyle {
    pub fn from_config(config: &Config) -> Self {
        Self {
            reference: DrawStyle {
                color: color_from(config.style.reference_color),
                stroke_weight: config.style.stroke_weight,
            },
            rotating: DrawStyle {
                color: color_from(config.style.rotating_color),
                stroke_weight: config.style.stroke_weight,
            },
            arc: DrawStyle {
                color: color_from(config.style.arc_color),
                stroke_weight: config.style.arc_stroke_weight,
            },
            label_default: color_from(config.style.label_default_color),
            label_highlight: color_from(config.style.label_highlight_color),
            label_font_size: config.style.label_font_size,
            arc_resolution: config.rendering.arc_resolution,
            pixels_per_unit: config.rendering.pixels_per_unit,
        }
    }
}

pub struct AngleScene {
    // scene geometry parameters
    pub pivot: Point2,
    pub reference_offset: Vec2,
    pub radius: f32,
    pub label_radius_offset: f32,
    reference_line: LineSegment,

    // timeline state
    tracker: AngleTracker,
    timeline: Timeline,
    pulses: PulseSchedule,

    // current frame state
    pub frame: SceneFrame,
    label_color: Rgb,

    style: SceneStyle,
}

impl AngleScene {
    pub fn new(script: &SceneScript, style: SceneStyle) -> Result<Self, Box<dyn Error>> {
        // The timeline and pulse schedule built here perform their own
        // schedule validation, so only the geometry checks run separately
        script.validate_geometry()?;

        let timeline = script.timeline()?;
        let pulses = PulseSchedule::resolve(&script.pulses(), &timeline)?;

        let pivot = pt2(script.pivot[0], script.pivot[1]);
        let reference_offset = vec2(script.reference_offset[0], script.reference_offset[1]);
        let reference_line = LineSegment::new(pivot, pivot + reference_offset);

        let initial_angle = script.initial_angle_radians();
        let frame = update_scene(
            pivot,
            reference_offset,
            initial_angle,
            script.radius,
            script.label_radius_offset,
        );

        Ok(Self {
            pivot,
            reference_offset,
            radius: script.radius,
            label_radius_offset: script.label_radius_offset,
            reference_line,
            tracker: AngleTracker::new(initial_angle),
            timeline,
            pulses,
            frame,
            label_color: style.label_default,
            style,
        })
    }

    /// Resample the timeline at scene time `elapsed` and rebuild the
    /// frame. The pulse schedule reads the same clock but shares no
    /// other state with the angle move.
    pub fn update(&mut self, elapsed: f32) {
        self.tracker.set_value(self.timeline.value_at(elapsed));

        self.frame = update_scene(
            self.pivot,
            self.reference_offset,
            self.tracker.get_value(),
            self.radius,
            self.label_radius_offset,
        );

        self.label_color = if self.pulses.is_highlighted(elapsed) {
            self.style.label_highlight
        } else {
            self.style.label_default
        };
    }

    pub fn is_complete(&self, elapsed: f32) -> bool {
        self.timeline.is_complete(elapsed)
    }

    pub fn duration(&self) -> f32 {
        self.timeline.duration()
    }

    pub fn current_angle(&self) -> f32 {
        self.tracker.get_value()
    }

    pub fn label_color(&self) -> Rgb {
        self.label_color
    }

    pub fn draw(&self, draw: &Draw) {
        let ppu = self.style.pixels_per_unit;

        draw_line_segment(draw, &self.reference_line, &self.style.reference, ppu);
        draw_line_segment(draw, &self.frame.rotating_line, &self.style.rotating, ppu);
        draw_arc(
            draw,
            &self.frame.arc,
            &self.style.arc,
            self.style.arc_resolution,
            ppu,
        );
        draw_label(
            draw,
            LABEL_TEXT,
            self.frame.label_position,
            self.label_color,
            self.style.label_font_size,
            ppu,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::rotate_point;
    use std::f32::consts::TAU;

    const EPSILON: f32 = 1e-4;

    fn assert_pt_eq(a: Point2, b: Point2) {
        assert!(
            (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON,
            "expected {:?}, got {:?}",
            b,
            a
        );
    }

    // The shipped scene's parameters
    fn scene_frame_at(angle: f32) -> SceneFrame {
        update_scene(pt2(-3.5, 0.0), vec2(2.5, 0.0), angle, 0.5, 0.1)
    }

    #[test]
    fn test_endpoint_stays_on_circle() {
        for i in 0..64 {
            let angle = i as f32 / 64.0 * 2.0 * TAU;
            let frame = scene_frame_at(angle);
            let distance = (frame.rotating_line.end - pt2(-3.5, 0.0)).length();
            assert!((distance - 2.5).abs() < EPSILON, "at angle {}", angle);
        }
    }

    #[test]
    fn test_arc_measure_tracks_angle() {
        for i in 0..64 {
            let angle = i as f32 / 64.0 * 2.0 * TAU;
            let frame = scene_frame_at(angle);
            assert!(
                (frame.arc.measure() - angle.rem_euclid(TAU)).abs() < 1e-3,
                "at angle {}",
                angle
            );
        }
    }

    #[test]
    fn test_scenario_110_degrees() {
        let frame = scene_frame_at(110.0f32.to_radians());
        let expected = rotate_point(pt2(-1.0, 0.0), 110.0f32.to_radians(), pt2(-3.5, 0.0));
        assert_pt_eq(frame.rotating_line.end, expected);
        assert_pt_eq(frame.rotating_line.start, pt2(-3.5, 0.0));
    }

    #[test]
    fn test_scenario_350_degrees_sweeps_the_long_way() {
        let angle = 350.0f32.to_radians();
        let frame = scene_frame_at(angle);

        let expected = rotate_point(pt2(-1.0, 0.0), angle, pt2(-3.5, 0.0));
        assert_pt_eq(frame.rotating_line.end, expected);

        // The arc must measure 350 degrees, not snap to the 10-degree
        // short side.
        assert!((frame.arc.measure() - angle).abs() < 1e-3);
    }

    #[test]
    fn test_zero_angle_boundary() {
        let frame = scene_frame_at(0.0);
        assert_eq!(frame.arc.measure(), 0.0);
        // Label sits on the reference direction at radius + offset
        assert_pt_eq(frame.label_position, pt2(-3.5 + 0.6, 0.0));
    }

    #[test]
    fn test_update_is_idempotent() {
        let a = scene_frame_at(2.1);
        let b = scene_frame_at(2.1);
        assert_eq!(a, b);
    }

    #[test]
    fn test_label_arc_is_concentric_and_larger() {
        let frame = scene_frame_at(1.0);
        assert_eq!(frame.label_arc.center, frame.arc.center);
        assert!((frame.label_arc.radius - frame.arc.radius - 0.1).abs() < EPSILON);
        assert!((frame.label_arc.sweep_angle - frame.arc.sweep_angle).abs() < EPSILON);
        assert_pt_eq(frame.label_position, frame.label_arc.point_from_proportion(0.5));
    }

    mod scene_instance_tests {
        use super::*;
        use crate::models::{AngleUnits, PulseSpec, ScriptStep};
        use crate::animation::EasingType;

        fn test_style() -> SceneStyle {
            SceneStyle {
                reference: DrawStyle::default(),
                rotating: DrawStyle::default(),
                arc: DrawStyle::default(),
                label_default: rgb(1.0, 1.0, 1.0),
                label_highlight: rgb(1.0, 0.0, 0.0),
                label_font_size: 28,
                arc_resolution: 64,
                pixels_per_unit: 100.0,
            }
        }

        fn test_script() -> SceneScript {
            SceneScript {
                name: "dynamic_angle".to_string(),
                units: AngleUnits::Degrees,
                pivot: [-3.5, 0.0],
                reference_offset: [2.5, 0.0],
                radius: 0.5,
                label_radius_offset: 0.1,
                initial_angle: 110.0,
                steps: vec![
                    ScriptStep::Hold { duration: 0.5 },
                    ScriptStep::Animate {
                        target: 40.0,
                        duration: 2.0,
                        easing: EasingType::Smooth,
                        pulse: None,
                    },
                    ScriptStep::Hold { duration: 0.5 },
                    ScriptStep::Animate {
                        target: 180.0,
                        duration: 2.5,
                        easing: EasingType::Smooth,
                        pulse: Some(PulseSpec {
                            delay: 0.7,
                            hold: 0.6,
                        }),
                    },
                    ScriptStep::Hold { duration: 0.5 },
                    ScriptStep::Animate {
                        target: 350.0,
                        duration: 3.0,
                        easing: EasingType::Smooth,
                        pulse: None,
                    },
                    ScriptStep::Hold { duration: 1.0 },
                ],
            }
        }

        #[test]
        fn test_scene_runs_the_scripted_sequence() {
            let mut scene = AngleScene::new(&test_script(), test_style()).unwrap();
            assert!((scene.duration() - 10.0).abs() < 1e-5);

            // Initial hold
            scene.update(0.25);
            assert!((scene.current_angle() - 110.0f32.to_radians()).abs() < 1e-4);

            // Between the first and second move
            scene.update(2.75);
            assert!((scene.current_angle() - 40.0f32.to_radians()).abs() < 1e-3);

            // Final rest value
            scene.update(9.5);
            assert!((scene.current_angle() - 350.0f32.to_radians()).abs() < 1e-3);
            assert!(scene.is_complete(10.0));
            assert!(!scene.is_complete(9.9));
        }

        #[test]
        fn test_label_pulse_colors() {
            let style = test_style();
            let mut scene = AngleScene::new(&test_script(), style).unwrap();

            // Step 4 starts at 3.0s; pulse window is [3.7, 4.3)
            scene.update(3.2);
            assert_eq!(scene.label_color(), style.label_default);
            scene.update(3.8);
            assert_eq!(scene.label_color(), style.label_highlight);
            scene.update(4.29);
            assert_eq!(scene.label_color(), style.label_highlight);
            scene.update(4.35);
            assert_eq!(scene.label_color(), style.label_default);
        }

        #[test]
        fn test_frame_tracks_tracker() {
            let mut scene = AngleScene::new(&test_script(), test_style()).unwrap();
            scene.update(9.5);
            assert!((scene.frame.arc.measure() - 350.0f32.to_radians()).abs() < 1e-3);
        }

        #[test]
        fn test_rejects_invalid_script() {
            let mut script = test_script();
            script.radius = -1.0;
            assert!(AngleScene::new(&script, test_style()).is_err());

            let mut script = test_script();
            script.steps[3] = ScriptStep::Animate {
                target: 180.0,
                duration: 2.5,
                easing: EasingType::Smooth,
                // Runs past the step's end
                pulse: Some(PulseSpec {
                    delay: 2.4,
                    hold: 0.5,
                }),
            };
            assert!(AngleScene::new(&script, test_style()).is_err());
        }
    }
}
