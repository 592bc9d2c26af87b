//! # floem-circular-slider
//!
//! A circular range slider widget for [Floem](https://github.com/lapce/floem).
//!
//! The slider draws a ring with a gradient arc between a start and a stop
//! knob. Both knobs can be dragged, pressing the arc body reports the
//! implied range, and an optional clock face can be drawn inside the ring.
//!
//! Angles are in radians, `0` at 12 o'clock, growing clockwise. The angle
//! math is exposed on its own in [`geometry`] and [`range`] so it can be
//! used without a view.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_circular_slider::{circular_slider, SliderConfig, SliderRange};
//!
//! let range = RwSignal::new(SliderRange::new(0.0, std::f64::consts::PI));
//! let slider = circular_slider(range, SliderConfig::default().show_clock_face(true));
//! // Use `slider?` in your Floem view tree.
//! ```

mod clock_face;
mod color;
mod config;
mod constants;
mod error;
pub mod geometry;
mod math;
pub mod range;
mod slider;

pub use clock_face::{clock_ticks, hour_labels, ClockTick, HourLabel};
pub use color::{segment_color, SegmentColors, SolidColor};
pub use config::SliderConfig;
pub use error::ConfigError;
pub use geometry::{angle_from_touch, arc_endpoints, ArcEndpoints, GestureSample};
pub use range::{KnobEvent, SliderBounds, SliderRange};
pub use slider::{circular_slider, CircularSlider};
