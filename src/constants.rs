//! Sizing, color, and geometry constants for the slider.

/// Default number of gradient segments
pub const SEGMENTS: usize = 5;

/// Default ring stroke width
pub const STROKE_WIDTH: f64 = 40.0;

/// Default ring radius (center of the stroke)
pub const RADIUS: f64 = 145.0;

/// Default gradient start color
pub const GRADIENT_FROM: &str = "ff9800";

/// Default gradient end color
pub const GRADIENT_TO: &str = "ffcf00";

/// Default clock face tick/label color
pub const CLOCK_FACE_COLOR: &str = "9d9d9d";

/// Default background ring color
pub const BG_CIRCLE_COLOR: &str = "171717";

/// Default knob outline color
pub const KNOB_STROKE_COLOR: &str = "ffffff";

/// Default knob fill color
pub const KNOB_FILL_COLOR: &str = "ff9800";

/// Angular overshoot (radians) added to each segment end so that adjacent
/// segments overlap and no anti-aliasing seam shows between them.
pub const SEAM_EPSILON: f64 = 0.005;

/// Rounded end cap radius as a fraction of the stroke width
pub const ROUNDED_END_RATIO: f64 = 0.4933;

/// Extra padding around the ring inside the container
pub const CONTAINER_PADDING: f64 = 2.0;

/// Number of clock face ticks (one every 15 minutes)
pub const CLOCK_TICKS: usize = 48;

/// Every n-th tick is drawn as a major (hour) tick
pub const CLOCK_MAJOR_TICK_EVERY: usize = 4;

/// Inset of the tick ring from the clock face radius
pub const CLOCK_TICK_INSET: f64 = 5.0;

/// Length of a clock face tick
pub const CLOCK_TICK_LENGTH: f64 = 7.0;

/// Inset of the hour labels from the clock face radius
pub const CLOCK_LABEL_INSET: f64 = 26.0;

/// Stroke width of major and minor ticks
pub const CLOCK_MAJOR_TICK_WIDTH: f64 = 3.0;
pub const CLOCK_MINOR_TICK_WIDTH: f64 = 1.0;

/// Hour label font size
pub const CLOCK_LABEL_FONT: f32 = 16.0;
