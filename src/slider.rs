//! The circular slider view.
//!
//! Paints the background ring, the optional clock face, the gradient arc
//! segments and the two knobs, and turns pointer input into range updates.
//! All angle math lives in [`crate::geometry`] and [`crate::range`]; this
//! module only measures the circle center and routes samples.

use floem::kurbo::{Circle, Point, Rect, Stroke};
use floem::peniko::Gradient;

use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::clock_face;
use crate::color::segment_color;
use crate::config::SliderConfig;
use crate::constants;
use crate::error::ConfigError;
use crate::geometry::{arc_contains, arc_endpoints, segment_angles, GestureSample};
use crate::range::{KnobEvent, SliderBounds, SliderRange};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Knob {
    Start,
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Hit {
    Knob(Knob),
    Path,
}

/// A knob drag in progress. The center is measured once at pointer-down.
#[derive(Debug, Clone, Copy)]
struct Drag {
    knob: Knob,
    center: Point,
}

type RangeCallback = Box<dyn Fn(SliderRange)>;
type ReleaseCallback = Box<dyn Fn()>;

pub struct CircularSlider {
    id: ViewId,
    config: SliderConfig,
    bounds: SliderBounds,
    range: SliderRange,
    size: floem::taffy::prelude::Size<f32>,
    drag: Option<Drag>,
    on_change: RangeCallback,
    on_update: Option<RangeCallback>,
    on_release_start_knob: Option<ReleaseCallback>,
    on_release_stop_knob: Option<ReleaseCallback>,
    on_press_slider_path: Option<RangeCallback>,
}

/// Creates a circular range slider.
///
/// The slider reads from and writes to `range`: external changes are
/// reflected in the view, and accepted knob drags update the signal. The
/// range at creation time is kept as the limit for
/// [`SliderConfig::allow_knob_beyond_limits`] and as the arc shown when
/// [`SliderConfig::keep_arc_visible`] is set.
pub fn circular_slider(
    range: RwSignal<SliderRange>,
    config: SliderConfig,
) -> Result<CircularSlider, ConfigError> {
    config.validate()?;
    let initial = range.get_untracked();
    if !(initial.start_angle.is_finite() && initial.angle_length.is_finite()) {
        return Err(ConfigError::NonFiniteRange {
            start_angle: initial.start_angle,
            angle_length: initial.angle_length,
        });
    }

    let id = ViewId::new();

    create_effect(move |_| {
        let r = range.get();
        id.update_state(r);
    });

    let bounds = SliderBounds::capture(initial, config.max_angle_length);
    let side = config.outer_width();

    Ok(CircularSlider {
        id,
        config,
        bounds,
        range: initial,
        size: Default::default(),
        drag: None,
        on_change: Box::new(move |r| {
            range.set(r);
        }),
        on_update: None,
        on_release_start_knob: None,
        on_release_stop_knob: None,
        on_press_slider_path: None,
    }
    .style(move |s| {
        s.size(side, side)
            .cursor(floem::style::CursorStyle::Pointer)
    }))
}

impl CircularSlider {
    /// Called with every accepted drag sample, after the signal is written.
    pub fn on_update(mut self, f: impl Fn(SliderRange) + 'static) -> Self {
        self.on_update = Some(Box::new(f));
        self
    }

    /// Called once when a start knob drag ends.
    pub fn on_release_start_knob(mut self, f: impl Fn() + 'static) -> Self {
        self.on_release_start_knob = Some(Box::new(f));
        self
    }

    /// Called once when a stop knob drag ends.
    pub fn on_release_stop_knob(mut self, f: impl Fn() + 'static) -> Self {
        self.on_release_stop_knob = Some(Box::new(f));
        self
    }

    /// Called on a press on the arc body with the range the press implies.
    ///
    /// The press does not change the slider by itself; feed the range back
    /// into the signal to accept it.
    pub fn on_press_slider_path(mut self, f: impl Fn(SliderRange) + 'static) -> Self {
        self.on_press_slider_path = Some(Box::new(f));
        self
    }

    fn center(&self) -> Point {
        Point::new(
            self.size.width as f64 / 2.0,
            self.size.height as f64 / 2.0,
        )
    }

    /// Range the arc is drawn for.
    fn visible_range(&self) -> SliderRange {
        if self.config.keep_arc_visible {
            SliderRange::new(self.bounds.initial.start_angle, self.bounds.max_angle_length)
        } else {
            self.range
        }
    }

    /// Knob centers relative to the circle center.
    fn knob_offsets(&self) -> (Point, Point) {
        let n = self.config.segments;
        let r = self.config.radius;
        let SliderRange {
            start_angle,
            angle_length,
        } = self.range;
        let start = arc_endpoints(0, n, r, start_angle, angle_length).from_point();
        let stop = arc_endpoints(n - 1, n, r, start_angle, angle_length).to_point();
        (start, stop)
    }

    fn hit_test(&self, sample: &GestureSample) -> Option<Hit> {
        let rel = (sample.pointer - sample.center).to_point();
        // The knob stroke is centered on the disc edge.
        let knob_reach =
            self.config.effective_knob_radius() + self.config.knob_stroke_width / 2.0;
        let (start, stop) = self.knob_offsets();
        // Start knob is painted on top of the stop knob.
        if self.config.show_start_knob && rel.distance(start) <= knob_reach {
            return Some(Hit::Knob(Knob::Start));
        }
        if self.config.show_stop_knob && rel.distance(stop) <= knob_reach {
            return Some(Hit::Knob(Knob::Stop));
        }
        let half = self.config.stroke_width / 2.0;
        let dist = sample.distance();
        let vis = self.visible_range();
        if (dist - self.config.radius).abs() <= half
            && arc_contains(vis.start_angle, vis.angle_length, sample.angle())
        {
            return Some(Hit::Path);
        }
        None
    }

    fn drag_to(&mut self, drag: Drag, pointer: Point) {
        let angle = GestureSample::new(pointer, drag.center).angle();
        let event = match drag.knob {
            Knob::Start => KnobEvent::StartDrag(angle),
            Knob::Stop => KnobEvent::StopDrag(angle),
        };
        let Some(next) = event.apply(
            self.range,
            self.config.allow_knob_beyond_limits,
            &self.bounds,
        ) else {
            return;
        };
        log::trace!("{event:?} -> {next:?}");
        self.range = next;
        (self.on_change)(next);
        if let Some(cb) = &self.on_update {
            cb(next);
        }
        self.id.request_paint();
    }

    fn press_path(&self, sample: &GestureSample) {
        let event = KnobEvent::PathPress(sample.angle());
        let next = event.apply(
            self.range,
            self.config.allow_knob_beyond_limits,
            &self.bounds,
        );
        log::debug!("path press at {:.4}: {next:?}", event.angle());
        if let (Some(next), Some(cb)) = (next, &self.on_press_slider_path) {
            cb(next);
        }
    }

    fn release(&mut self) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        log::debug!("released {:?} knob at {:?}", drag.knob, self.range);
        let cb = match drag.knob {
            Knob::Start => &self.on_release_start_knob,
            Knob::Stop => &self.on_release_stop_knob,
        };
        if let Some(cb) = cb {
            cb();
        }
    }

    fn paint_knob(&self, cx: &mut PaintCx, at: Point) {
        let circle = Circle::new(at, self.config.effective_knob_radius());
        cx.fill(&circle, self.config.knob_fill_color.to_color(), 0.0);
        if self.config.knob_stroke_width > 0.0 {
            cx.stroke(
                &circle,
                self.config.knob_stroke_color.to_color(),
                &Stroke::new(self.config.knob_stroke_width),
            );
        }
    }
}

impl View for CircularSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(range) = state.downcast::<SliderRange>() {
            self.range = *range;
            self.id.request_paint();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                let sample = GestureSample::new(e.pos, self.center());
                match self.hit_test(&sample) {
                    Some(Hit::Knob(knob)) => {
                        cx.update_active(self.id());
                        log::debug!("grabbed {knob:?} knob");
                        self.drag = Some(Drag {
                            knob,
                            center: sample.center,
                        });
                        EventPropagation::Stop
                    }
                    Some(Hit::Path) => {
                        self.press_path(&sample);
                        EventPropagation::Stop
                    }
                    None => EventPropagation::Continue,
                }
            }
            Event::PointerMove(e) => match self.drag {
                Some(drag) => {
                    self.drag_to(drag, e.pos);
                    EventPropagation::Stop
                }
                None => EventPropagation::Continue,
            },
            Event::PointerUp(_) => {
                self.release();
                EventPropagation::Continue
            }
            Event::FocusLost => {
                self.drag = None;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }

        let config = &self.config;
        let center = self.center();
        let radius = config.radius;
        let stroke = Stroke::new(config.stroke_width);

        // Background ring
        cx.stroke(
            &Circle::new(center, radius),
            config.bg_circle_color.to_color(),
            &stroke,
        );

        if config.show_clock_face {
            clock_face::paint_clock_face(
                cx,
                center,
                radius - config.stroke_width / 2.0,
                config.clock_face_color.to_color(),
            );
        }

        // Gradient segments
        let n = config.segments;
        let vis = self.visible_range();
        let end_cap = config.stroke_width * constants::ROUNDED_END_RATIO;
        for i in 0..n {
            let ends = arc_endpoints(i, n, radius, vis.start_angle, vis.angle_length);
            let colors = segment_color(
                i,
                n,
                config.gradient_color_from,
                config.gradient_color_to,
            );
            let from = center + ends.from_point().to_vec2();
            let to = center + ends.to_point().to_vec2();

            if config.rounded_ends && i == 0 {
                cx.fill(
                    &Circle::new(from, end_cap),
                    config.gradient_color_from.to_color(),
                    0.0,
                );
            }
            if config.rounded_ends && i == n - 1 {
                cx.fill(
                    &Circle::new(to, end_cap),
                    config.gradient_color_to.to_color(),
                    0.0,
                );
            }

            let gradient = Gradient::new_linear(from, to)
                .with_stops([colors.from_color.to_color(), colors.to_color.to_color()]);
            let arc = segment_angles(i, n, vis.start_angle, vis.angle_length).to_arc(center, radius);
            cx.stroke(&arc, &gradient, &stroke);
        }

        // Knobs
        let (start, stop) = self.knob_offsets();
        if self.config.show_stop_knob {
            self.paint_knob(cx, center + stop.to_vec2());
        }
        if self.config.show_start_knob {
            self.paint_knob(cx, center + start.to_vec2());
        }
    }
}
