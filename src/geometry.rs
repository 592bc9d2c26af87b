//! Angle and arc geometry for the circular slider.
//!
//! Angles use a compass convention: `0` points up (12 o'clock) and angles
//! grow clockwise in screen space (y down). A point at angle `θ` on a circle
//! of radius `r` around the origin is `(r·sin θ, -r·cos θ)`.

use std::f64::consts::{FRAC_PI_2, TAU};

use floem::kurbo::{Arc, Point, Vec2};

use crate::constants;

/// Below this an arc length counts as zero, which is drawn as a full ring.
const FULL_RING_EPSILON: f64 = 1e-9;

/// Reduce an angle into `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if a >= TAU {
        0.0
    } else {
        a
    }
}

/// Reduce an arc length into `(0, 2π]` for drawing.
///
/// A length of zero (or a whole multiple of 2π) is the "start == stop"
/// position and is drawn as the whole ring.
fn visible_length(angle_length: f64) -> f64 {
    let len = normalize_angle(angle_length);
    if len < FULL_RING_EPSILON || TAU - len < FULL_RING_EPSILON {
        TAU
    } else {
        len
    }
}

/// Point on a circle of `radius` centered on the origin.
pub fn point_on_circle(radius: f64, angle: f64) -> Point {
    Point::new(radius * angle.sin(), -radius * angle.cos())
}

/// Angular sub-range covered by one segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentAngles {
    pub from: f64,
    pub to: f64,
}

impl SegmentAngles {
    /// The segment as a kurbo arc around `center`, including the seam overshoot.
    pub fn to_arc(self, center: Point, radius: f64) -> Arc {
        Arc {
            center,
            radii: Vec2::new(radius, radius),
            // kurbo measures from the +x axis; compass 0 is a quarter turn back.
            start_angle: self.from - FRAC_PI_2,
            sweep_angle: self.to + constants::SEAM_EPSILON - self.from,
            x_rotation: 0.0,
        }
    }
}

/// Angles of segment `index` when the arc `start_angle + angle_length` is cut
/// into `total_segments` equal slices.
///
/// # Panics
///
/// Panics if `total_segments` is zero or `index` is out of range.
pub fn segment_angles(
    index: usize,
    total_segments: usize,
    start_angle: f64,
    angle_length: f64,
) -> SegmentAngles {
    assert!(total_segments >= 1, "at least one segment is required");
    assert!(index < total_segments, "segment index out of range");
    let start = normalize_angle(start_angle);
    let step = visible_length(angle_length) / total_segments as f64;
    SegmentAngles {
        from: step * index as f64 + start,
        to: step * (index + 1) as f64 + start,
    }
}

/// Cartesian endpoints of one arc segment, relative to the circle center.
///
/// `to_*` is pushed past the real end by [`constants::SEAM_EPSILON`] so
/// neighbouring segments overlap; `real_to_*` is the exact end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcEndpoints {
    pub from_x: f64,
    pub from_y: f64,
    pub to_x: f64,
    pub to_y: f64,
    pub real_to_x: f64,
    pub real_to_y: f64,
}

impl ArcEndpoints {
    pub fn from_point(&self) -> Point {
        Point::new(self.from_x, self.from_y)
    }

    pub fn to_point(&self) -> Point {
        Point::new(self.to_x, self.to_y)
    }

    pub fn real_to_point(&self) -> Point {
        Point::new(self.real_to_x, self.real_to_y)
    }
}

/// Endpoints of segment `index` of `total_segments` on a circle of `radius`.
///
/// # Panics
///
/// Panics if `total_segments` is zero, `index` is out of range or `radius`
/// is not positive.
pub fn arc_endpoints(
    index: usize,
    total_segments: usize,
    radius: f64,
    start_angle: f64,
    angle_length: f64,
) -> ArcEndpoints {
    assert!(radius > 0.0, "radius must be positive");
    let SegmentAngles { from, to } =
        segment_angles(index, total_segments, start_angle, angle_length);
    let from_pt = point_on_circle(radius, from);
    let to_pt = point_on_circle(radius, to + constants::SEAM_EPSILON);
    let real_to = point_on_circle(radius, to);
    ArcEndpoints {
        from_x: from_pt.x,
        from_y: from_pt.y,
        to_x: to_pt.x,
        to_y: to_pt.y,
        real_to_x: real_to.x,
        real_to_y: real_to.y,
    }
}

/// Compass angle in `[0, 2π)` of `pointer` as seen from `center`.
pub fn angle_from_touch(pointer: Point, center: Point) -> f64 {
    let angle = (pointer.y - center.y).atan2(pointer.x - center.x) + FRAC_PI_2;
    normalize_angle(angle)
}

/// One pointer sample together with the circle center it is measured against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub pointer: Point,
    pub center: Point,
}

impl GestureSample {
    pub fn new(pointer: Point, center: Point) -> Self {
        Self { pointer, center }
    }

    pub fn angle(&self) -> f64 {
        angle_from_touch(self.pointer, self.center)
    }

    /// Distance from the circle center.
    pub fn distance(&self) -> f64 {
        self.pointer.distance(self.center)
    }
}

/// Whether `angle` lies on the clockwise arc from `start_angle` spanning
/// `angle_length`. A zero length covers the whole ring.
pub fn arc_contains(start_angle: f64, angle_length: f64, angle: f64) -> bool {
    let offset = normalize_angle(angle - start_angle);
    offset <= visible_length(angle_length)
}

/// Side of the square that holds the ring and its stroke.
pub fn container_width(stroke_width: f64, radius: f64) -> f64 {
    stroke_width + radius * 2.0 + constants::CONTAINER_PADDING
}
