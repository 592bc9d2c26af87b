//! Standalone demo: opens a window with a bedtime-style circular slider.

use std::f64::consts::{PI, TAU};

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_circular_slider::{circular_slider, SliderConfig, SliderRange, SolidColor};

/// Clock time for a compass angle on a 12 hour face.
fn clock_time(angle: f64) -> String {
    let minutes = ((angle.rem_euclid(TAU) / TAU) * 12.0 * 60.0).round() as i64;
    let hours = match minutes / 60 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02}", hours, minutes % 60)
}

fn app_view(range: RwSignal<SliderRange>, config: SliderConfig) -> impl IntoView {
    let slider = match circular_slider(range, config) {
        Ok(slider) => slider
            .on_release_start_knob(|| log::info!("start knob released"))
            .on_release_stop_knob(|| log::info!("stop knob released"))
            .on_press_slider_path(move |r| range.set(r))
            .into_any(),
        Err(err) => label(move || err.to_string()).into_any(),
    };

    v_stack((
        slider,
        label(move || {
            let r = range.get();
            format!(
                "{} - {}",
                clock_time(r.start_angle),
                clock_time(r.start_angle + r.angle_length)
            )
        })
        .style(|s| s.font_size(18.0).color(Color::WHITE)),
    ))
    .style(|s| {
        s.size_full()
            .items_center()
            .justify_center()
            .gap(16.0)
            .background(Color::rgb8(12, 12, 12))
    })
}

fn main() {
    env_logger::init();

    let range = RwSignal::new(SliderRange::new(PI / 3.0, 2.0 * PI / 3.0));
    let config = SliderConfig::default()
        .segments(8)
        .show_clock_face(true)
        .rounded_ends(true)
        .knob_stroke_width(2.0)
        .gradient(
            SolidColor::from_rgb(0x4a, 0x00, 0xe0),
            SolidColor::from_rgb(0x8e, 0x2d, 0xe2),
        );

    floem::Application::new()
        .window(
            move |_| {
                app_view(range, config.clone()).on_event_stop(
                    floem::event::EventListener::WindowClosed,
                    |_| floem::quit_app(),
                )
            },
            Some(
                WindowConfig::default()
                    .size((420.0, 480.0))
                    .title("floem-circular-slider"),
            ),
        )
        .run();
}
