//! Clock face drawn inside the ring: 48 ticks and the hours 1–12.

use std::f64::consts::TAU;

use floem::context::PaintCx;
use floem::kurbo::{Line, Point, Stroke};
use floem::peniko::Color;
use floem::text::{Attrs, AttrsList, TextLayout};
use floem_renderer::Renderer;

use crate::constants;
use crate::geometry::point_on_circle;

/// One tick mark, relative to the circle center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockTick {
    pub outer: Point,
    pub inner: Point,
    pub major: bool,
}

/// An hour numeral and the point its text is centered on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourLabel {
    pub hour: u8,
    pub position: Point,
}

/// Tick marks for a face of radius `face_radius`; tick 0 is at 12 o'clock.
pub fn clock_ticks(face_radius: f64) -> Vec<ClockTick> {
    let outer_r = face_radius - constants::CLOCK_TICK_INSET;
    let inner_r = outer_r - constants::CLOCK_TICK_LENGTH;
    (0..constants::CLOCK_TICKS)
        .map(|i| {
            let angle = TAU * i as f64 / constants::CLOCK_TICKS as f64;
            ClockTick {
                outer: point_on_circle(outer_r, angle),
                inner: point_on_circle(inner_r, angle),
                major: i % constants::CLOCK_MAJOR_TICK_EVERY == 0,
            }
        })
        .collect()
}

/// Hour numerals 1–12, with 12 at the top.
pub fn hour_labels(face_radius: f64) -> Vec<HourLabel> {
    let r = face_radius - constants::CLOCK_LABEL_INSET;
    (1..=12u8)
        .map(|hour| HourLabel {
            hour,
            position: point_on_circle(r, TAU * hour as f64 / 12.0),
        })
        .collect()
}

/// Paint the clock face around `center`.
pub(crate) fn paint_clock_face(cx: &mut PaintCx, center: Point, face_radius: f64, color: Color) {
    for tick in clock_ticks(face_radius) {
        let width = if tick.major {
            constants::CLOCK_MAJOR_TICK_WIDTH
        } else {
            constants::CLOCK_MINOR_TICK_WIDTH
        };
        let line = Line::new(center + tick.outer.to_vec2(), center + tick.inner.to_vec2());
        cx.stroke(&line, color, &Stroke::new(width));
    }

    for label in hour_labels(face_radius) {
        let attrs = Attrs::new()
            .font_size(constants::CLOCK_LABEL_FONT)
            .color(color);
        let mut layout = TextLayout::new();
        layout.set_text(&label.hour.to_string(), AttrsList::new(attrs));
        let size = layout.size();
        let origin = center + label.position.to_vec2() - (size.to_vec2() / 2.0);
        cx.draw_text(&layout, origin);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_fourth_tick_is_major() {
        let ticks = clock_ticks(100.0);
        assert_eq!(ticks.len(), 48);
        assert_eq!(ticks.iter().filter(|t| t.major).count(), 12);
        assert!(ticks[0].major && !ticks[1].major && ticks[4].major);
    }

    #[test]
    fn first_tick_points_up() {
        let tick = clock_ticks(100.0)[0];
        assert!(tick.outer.x.abs() < 1e-9);
        assert!((tick.outer.y + 95.0).abs() < 1e-9);
        assert!((tick.inner.y + 88.0).abs() < 1e-9);
    }

    #[test]
    fn twelve_on_top_and_three_on_the_right() {
        let labels = hour_labels(100.0);
        assert_eq!(labels.len(), 12);
        let twelve = labels[11];
        assert_eq!(twelve.hour, 12);
        assert!(twelve.position.x.abs() < 1e-9);
        assert!((twelve.position.y + 74.0).abs() < 1e-9);
        let three = labels[2];
        assert_eq!(three.hour, 3);
        assert!((three.position.x - 74.0).abs() < 1e-9);
        assert!(three.position.y.abs() < 1e-9);
    }
}
