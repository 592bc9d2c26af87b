//! The slider's value and the pure updates a gesture applies to it.
//!
//! Every update takes the current range and one touch angle and returns the
//! proposed new range, or `None` when the limit policy drops the sample.
//! Dropping is not clamping: a knob dragged past the ceiling stops
//! producing updates and the previous range stays in effect.

use serde::{Deserialize, Serialize};

use crate::geometry::normalize_angle;

/// Active arc of the slider, in radians.
///
/// `angle_length` is measured clockwise from `start_angle`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SliderRange {
    pub start_angle: f64,
    pub angle_length: f64,
}

impl SliderRange {
    pub fn new(start_angle: f64, angle_length: f64) -> Self {
        Self {
            start_angle,
            angle_length,
        }
    }

    /// Angle of the stop knob, in `[0, 2π)`.
    pub fn stop_angle(&self) -> f64 {
        normalize_angle(self.start_angle + self.angle_length)
    }
}

/// Snapshot of the range the slider was created with.
///
/// Captured once and never updated; `max_angle_length` is the ceiling used
/// when knobs may not move beyond their limits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderBounds {
    pub initial: SliderRange,
    pub max_angle_length: f64,
}

impl SliderBounds {
    /// Ceiling is `max_angle_length` when given, else the initial length.
    pub fn capture(initial: SliderRange, max_angle_length: Option<f64>) -> Self {
        Self {
            initial,
            max_angle_length: max_angle_length.unwrap_or(initial.angle_length),
        }
    }
}

fn admit(
    proposed: SliderRange,
    allow_beyond_limits: bool,
    max_angle_length: f64,
) -> Option<SliderRange> {
    if !allow_beyond_limits && proposed.angle_length > max_angle_length {
        log::debug!(
            "dropping update: length {:.4} exceeds limit {:.4}",
            proposed.angle_length,
            max_angle_length
        );
        return None;
    }
    Some(proposed)
}

/// Move the stop knob to `touch_angle`; the start stays put.
pub fn update_from_stop_knob_drag(
    current: SliderRange,
    touch_angle: f64,
    allow_beyond_limits: bool,
    initial_max_length: f64,
) -> Option<SliderRange> {
    let angle_length = normalize_angle(touch_angle - current.start_angle);
    admit(
        SliderRange::new(current.start_angle, angle_length),
        allow_beyond_limits,
        initial_max_length,
    )
}

/// Move the start knob to `touch_angle`, keeping the stop knob fixed.
pub fn update_from_start_knob_drag(
    current: SliderRange,
    touch_angle: f64,
    allow_beyond_limits: bool,
    initial_max_length: f64,
) -> Option<SliderRange> {
    let angle_length = normalize_angle(current.stop_angle() - touch_angle);
    admit(
        SliderRange::new(touch_angle, angle_length),
        allow_beyond_limits,
        initial_max_length,
    )
}

/// A single press on the arc body moves the stop point there.
pub fn update_from_path_press(
    current: SliderRange,
    touch_angle: f64,
    allow_beyond_limits: bool,
    initial_max_length: f64,
) -> Option<SliderRange> {
    update_from_stop_knob_drag(current, touch_angle, allow_beyond_limits, initial_max_length)
}

/// One gesture sample, already converted to a compass angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KnobEvent {
    StartDrag(f64),
    StopDrag(f64),
    PathPress(f64),
}

impl KnobEvent {
    pub fn angle(&self) -> f64 {
        match *self {
            KnobEvent::StartDrag(a) | KnobEvent::StopDrag(a) | KnobEvent::PathPress(a) => a,
        }
    }

    /// Reduce this event against `current`.
    pub fn apply(
        self,
        current: SliderRange,
        allow_beyond_limits: bool,
        bounds: &SliderBounds,
    ) -> Option<SliderRange> {
        let limit = bounds.max_angle_length;
        match self {
            KnobEvent::StartDrag(a) => {
                update_from_start_knob_drag(current, a, allow_beyond_limits, limit)
            }
            KnobEvent::StopDrag(a) => {
                update_from_stop_knob_drag(current, a, allow_beyond_limits, limit)
            }
            KnobEvent::PathPress(a) => update_from_path_press(current, a, allow_beyond_limits, limit),
        }
    }

    /// Like [`KnobEvent::apply`], but a dropped sample yields `current`.
    pub fn reduce(
        self,
        current: SliderRange,
        allow_beyond_limits: bool,
        bounds: &SliderBounds,
    ) -> SliderRange {
        self.apply(current, allow_beyond_limits, bounds)
            .unwrap_or(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    const EPS: f64 = 1e-9;

    fn wrapped_diff(a: f64, b: f64) -> f64 {
        let d = normalize_angle(a - b);
        d.min(TAU - d)
    }

    #[test]
    fn stop_drag_sets_length_only() {
        let current = SliderRange::new(FRAC_PI_2, PI);
        let next = update_from_stop_knob_drag(current, PI, true, TAU).unwrap();
        assert_eq!(next.start_angle, FRAC_PI_2);
        assert!((next.angle_length - FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn stop_drag_behind_start_wraps_around() {
        let current = SliderRange::new(PI, FRAC_PI_2);
        let next = update_from_stop_knob_drag(current, FRAC_PI_2, true, TAU).unwrap();
        assert!((next.angle_length - 3.0 * FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn start_drag_keeps_stop_fixed() {
        let current = SliderRange::new(0.5, 2.0);
        let next = update_from_start_knob_drag(current, 1.0, true, TAU).unwrap();
        assert_eq!(next.start_angle, 1.0);
        assert!((next.angle_length - 1.5).abs() < EPS);
        assert!(wrapped_diff(next.stop_angle(), current.stop_angle()) < EPS);
    }

    #[test]
    fn start_drag_past_stop_wraps() {
        // Stop at 3 o'clock, start dragged to 6 o'clock.
        let current = SliderRange::new(0.0, FRAC_PI_2);
        let next = update_from_start_knob_drag(current, PI, true, TAU).unwrap();
        assert!((next.angle_length - 3.0 * FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn over_limit_update_is_rejected() {
        let current = SliderRange::new(0.0, FRAC_PI_2 / 2.0);
        assert_eq!(update_from_stop_knob_drag(current, 3.0 * PI / 4.0, false, FRAC_PI_2), None);
        assert_eq!(update_from_path_press(current, 3.0 * PI / 4.0, false, FRAC_PI_2), None);
        // Allowed when the policy permits it.
        assert!(update_from_stop_knob_drag(current, 3.0 * PI / 4.0, true, FRAC_PI_2).is_some());
        // Within the limit is always accepted.
        assert!(update_from_stop_knob_drag(current, FRAC_PI_2 / 2.0, false, FRAC_PI_2).is_some());
    }

    #[test]
    fn start_drag_obeys_limit() {
        let current = SliderRange::new(FRAC_PI_2, FRAC_PI_2);
        // Moving start from 3 o'clock to 12 o'clock doubles the length.
        assert_eq!(update_from_start_knob_drag(current, 0.0, false, 0.8 * PI), None);
        assert!(update_from_start_knob_drag(current, PI / 4.0, false, 0.8 * PI).is_some());
    }

    #[test]
    fn dropped_sample_keeps_previous_range() {
        let current = SliderRange::new(0.0, PI / 4.0);
        let bounds = SliderBounds::capture(current, Some(FRAC_PI_2));
        let next = KnobEvent::StopDrag(3.0 * PI / 4.0).reduce(current, false, &bounds);
        assert_eq!(next, current);
    }

    #[test]
    fn path_press_matches_stop_drag() {
        let current = SliderRange::new(1.0, 1.0);
        assert_eq!(
            update_from_path_press(current, 2.5, true, TAU),
            update_from_stop_knob_drag(current, 2.5, true, TAU)
        );
    }

    #[test]
    fn bounds_prefer_explicit_max() {
        let initial = SliderRange::new(0.0, 1.0);
        assert_eq!(SliderBounds::capture(initial, None).max_angle_length, 1.0);
        assert_eq!(SliderBounds::capture(initial, Some(2.0)).max_angle_length, 2.0);
    }

    #[test]
    fn events_reduce_against_range() {
        let bounds = SliderBounds::capture(SliderRange::new(0.0, PI), None);
        let mut range = bounds.initial;
        for event in [
            KnobEvent::StopDrag(FRAC_PI_2),
            KnobEvent::StartDrag(PI / 4.0),
            KnobEvent::StopDrag(3.0 * PI / 2.0),
        ] {
            if let Some(next) = event.apply(range, false, &bounds) {
                range = next;
            }
        }
        // The last drag would make the arc 5π/4 long and is dropped.
        assert_eq!(range.start_angle, PI / 4.0);
        assert!((range.angle_length - PI / 4.0).abs() < EPS);
    }

    proptest! {
        #[test]
        fn stop_drag_round_trips(
            start in 0.0f64..TAU,
            len in 0.0f64..TAU,
            touch in 0.0f64..TAU,
        ) {
            let next = update_from_stop_knob_drag(SliderRange::new(start, len), touch, true, TAU);
            let next = next.unwrap();
            prop_assert!((0.0..TAU).contains(&next.angle_length));
            prop_assert!(wrapped_diff(next.stop_angle(), touch) < 1e-9);
        }

        #[test]
        fn rejection_matches_limit(
            start in 0.0f64..TAU,
            touch in 0.0f64..TAU,
        ) {
            let current = SliderRange::new(start, 0.1);
            let bounds = SliderBounds::capture(current, Some(FRAC_PI_2));
            let next = KnobEvent::StopDrag(touch).apply(current, false, &bounds);
            let proposed = normalize_angle(touch - start);
            prop_assert_eq!(next.is_none(), proposed > FRAC_PI_2);
            if let Some(next) = next {
                prop_assert_eq!(next.start_angle, start);
            }
        }
    }
}
