//! Slider configuration.
//!
//! Fixed for the lifetime of a slider. Can be built with the chainable
//! setters or deserialized (colors as hex strings, missing fields take
//! their defaults).

use serde::{Deserialize, Serialize};

use crate::color::SolidColor;
use crate::constants;
use crate::error::ConfigError;

fn hex(s: &str) -> SolidColor {
    SolidColor::from_hex(s).unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SliderConfig {
    pub segments: usize,
    pub stroke_width: f64,
    pub radius: f64,
    pub gradient_color_from: SolidColor,
    pub gradient_color_to: SolidColor,
    pub show_clock_face: bool,
    pub clock_face_color: SolidColor,
    pub bg_circle_color: SolidColor,
    pub show_stop_knob: bool,
    pub show_start_knob: bool,
    /// Draw the arc at the initial range while drags update the value.
    pub keep_arc_visible: bool,
    pub rounded_ends: bool,
    /// When false, updates that would make the arc longer than
    /// `max_angle_length` (or the initial length) are dropped.
    pub allow_knob_beyond_limits: bool,
    pub knob_stroke_color: SolidColor,
    pub knob_fill_color: SolidColor,
    /// Defaults to `(stroke_width - 1) / 2`.
    pub knob_radius: Option<f64>,
    pub knob_stroke_width: f64,
    pub max_angle_length: Option<f64>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            segments: constants::SEGMENTS,
            stroke_width: constants::STROKE_WIDTH,
            radius: constants::RADIUS,
            gradient_color_from: hex(constants::GRADIENT_FROM),
            gradient_color_to: hex(constants::GRADIENT_TO),
            show_clock_face: false,
            clock_face_color: hex(constants::CLOCK_FACE_COLOR),
            bg_circle_color: hex(constants::BG_CIRCLE_COLOR),
            show_stop_knob: true,
            show_start_knob: true,
            keep_arc_visible: false,
            rounded_ends: false,
            allow_knob_beyond_limits: true,
            knob_stroke_color: hex(constants::KNOB_STROKE_COLOR),
            knob_fill_color: hex(constants::KNOB_FILL_COLOR),
            knob_radius: None,
            knob_stroke_width: 0.0,
            max_angle_length: None,
        }
    }
}

impl SliderConfig {
    pub fn segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    pub fn stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn gradient(mut self, from: SolidColor, to: SolidColor) -> Self {
        self.gradient_color_from = from;
        self.gradient_color_to = to;
        self
    }

    pub fn show_clock_face(mut self, show: bool) -> Self {
        self.show_clock_face = show;
        self
    }

    pub fn clock_face_color(mut self, color: SolidColor) -> Self {
        self.clock_face_color = color;
        self
    }

    pub fn bg_circle_color(mut self, color: SolidColor) -> Self {
        self.bg_circle_color = color;
        self
    }

    pub fn show_knobs(mut self, start: bool, stop: bool) -> Self {
        self.show_start_knob = start;
        self.show_stop_knob = stop;
        self
    }

    pub fn keep_arc_visible(mut self, keep: bool) -> Self {
        self.keep_arc_visible = keep;
        self
    }

    pub fn rounded_ends(mut self, rounded: bool) -> Self {
        self.rounded_ends = rounded;
        self
    }

    pub fn allow_knob_beyond_limits(mut self, allow: bool) -> Self {
        self.allow_knob_beyond_limits = allow;
        self
    }

    pub fn knob_colors(mut self, stroke: SolidColor, fill: SolidColor) -> Self {
        self.knob_stroke_color = stroke;
        self.knob_fill_color = fill;
        self
    }

    pub fn knob_radius(mut self, radius: f64) -> Self {
        self.knob_radius = Some(radius);
        self
    }

    pub fn knob_stroke_width(mut self, width: f64) -> Self {
        self.knob_stroke_width = width;
        self
    }

    pub fn max_angle_length(mut self, length: f64) -> Self {
        self.max_angle_length = Some(length);
        self
    }

    /// Knob disc radius, falling back to half the stroke width.
    ///
    /// A knob radius of zero counts as unset.
    pub fn effective_knob_radius(&self) -> f64 {
        self.knob_radius
            .filter(|&r| r > 0.0)
            .unwrap_or((self.stroke_width - 1.0) / 2.0)
            .max(0.0)
    }

    /// Space reserved around the ring so knobs are never clipped.
    pub fn knob_margin(&self) -> f64 {
        self.knob_radius.unwrap_or(0.0) + self.knob_stroke_width
    }

    /// Side length of the square the slider occupies.
    pub fn outer_width(&self) -> f64 {
        crate::geometry::container_width(self.stroke_width, self.radius) + self.knob_margin()
    }

    /// Check the values the geometry relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.segments == 0 {
            return Err(ConfigError::NoSegments);
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(ConfigError::InvalidRadius(self.radius));
        }
        let sizes = [
            ("stroke width", self.stroke_width),
            ("knob stroke width", self.knob_stroke_width),
            ("knob radius", self.knob_radius.unwrap_or(0.0)),
        ];
        for (field, value) in sizes {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::NegativeSize { field, value });
            }
        }
        if let Some(max) = self.max_angle_length {
            if !(max.is_finite() && max > 0.0) {
                return Err(ConfigError::InvalidMaxAngleLength(max));
            }
        }
        Ok(())
    }
}
