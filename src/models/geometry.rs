// src/models/geometry.rs
// Line and arc types for the angle scene

use nannou::prelude::*;
use std::f32::consts::TAU;

/// Rotate a point about a pivot by `angle` radians (counterclockwise).
pub fn rotate_point(point: Point2, angle: f32, pivot: Point2) -> Point2 {
    let offset = point - pivot;
    let cos_rot = angle.cos();
    let sin_rot = angle.sin();
    let rotated = pt2(
        offset.x * cos_rot - offset.y * sin_rot,
        offset.x * sin_rot + offset.y * cos_rot,
    );
    pivot + rotated
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Point2,
    pub end: Point2,
}

impl LineSegment {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    pub fn direction(&self) -> Vec2 {
        self.end - self.start
    }

    /// Heading of the segment in radians, measured from the +x axis.
    pub fn angle(&self) -> f32 {
        let d = self.direction();
        d.y.atan2(d.x)
    }

    pub fn length(&self) -> f32 {
        self.direction().length()
    }

    /// A new segment rotated about `pivot`. The rotation matrix keeps the
    /// motion continuous for any angle, including past full turns.
    pub fn rotated_about(&self, angle: f32, pivot: Point2) -> LineSegment {
        LineSegment {
            start: rotate_point(self.start, angle, pivot),
            end: rotate_point(self.end, angle, pivot),
        }
    }
}

/// A circular arc: `sweep_angle` radians counterclockwise from `start_angle`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcDescriptor {
    pub center: Point2,
    pub radius: f32,
    pub start_angle: f32,
    pub sweep_angle: f32,
}

impl ArcDescriptor {
    /// The arc swept from `reference` around to `rotating` at `radius`,
    /// centered on the shared pivot (the reference segment's start).
    ///
    /// Orientation policy: always counterclockwise from the reference
    /// direction, with the sweep reduced into [0, 2pi). Selecting the
    /// shorter of the two arcs instead would flip the drawing direction
    /// whenever the sweep crosses pi.
    pub fn between_lines(reference: &LineSegment, rotating: &LineSegment, radius: f32) -> Self {
        let start_angle = reference.angle();
        let sweep_angle = (rotating.angle() - start_angle).rem_euclid(TAU);
        Self {
            center: reference.start,
            radius,
            start_angle,
            sweep_angle,
        }
    }

    /// The angle the arc subtends, in [0, 2pi).
    pub fn measure(&self) -> f32 {
        self.sweep_angle
    }

    /// Point at arc-length proportion `p` along the arc. The arc is
    /// circular, so proportion of arc length is proportion of angle.
    pub fn point_from_proportion(&self, p: f32) -> Point2 {
        let angle = self.start_angle + self.sweep_angle * p;
        self.center + vec2(angle.cos(), angle.sin()) * self.radius
    }

    pub fn start_point(&self) -> Point2 {
        self.point_from_proportion(0.0)
    }

    pub fn end_point(&self) -> Point2 {
        self.point_from_proportion(1.0)
    }
}
