//! Circle gauge demo for desktop.
//!
//! Opens an SDL window via the embedded-graphics-simulator crate and runs
//! the sequential stroke-reveal animation: four colored arc segments, each
//! drawing itself around the ring before the next one starts.
//!
//! Keys: SPACE starts the sequence again, R resets to a blank ring and
//! starts over, C cancels the in-flight sweep (unsuccessful completion,
//! which stalls the sequence), X toggles the FPS readout, Y toggles the
//! debug page.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod profiling;
mod screens;
mod timing;

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use gauge_common::colors::BLACK;
use gauge_common::config::{PALETTE, SCREEN_HEIGHT, SCREEN_WIDTH, SEGMENT_GAP_DEGREES};
use gauge_common::logging::EventLog;
use gauge_common::sequencer::{GaugeController, SequenceEvent};

use crate::profiling::ProfilingMetrics;
use crate::screens::{Page, draw_debug_page, draw_gauge_page};
use crate::timing::FRAME_TIME;

fn main() {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Circle Gauge", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    // Demo state
    let mut controller = GaugeController::new();
    let mut log = EventLog::new();
    let mut metrics = ProfilingMetrics::new();

    controller.layout(&PALETTE, SEGMENT_GAP_DEGREES);
    log.push_indexed("Layout done, segments: ", controller.segments().len());

    // The window appearing is the external trigger that kicks things off.
    log_event(&mut log, &mut metrics, controller.start());

    // UI state
    let mut current_page = Page::default();
    let mut show_fps = false;
    let mut last_fps_calc = Instant::now();
    let mut fps_frame_count = 0u32;
    let mut current_fps = 0.0f32;

    loop {
        let frame_start = Instant::now();

        // Handle events
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::Space => {
                            log.push("Start requested");
                            log_event(&mut log, &mut metrics, controller.start());
                        }
                        Keycode::R => {
                            controller.reset();
                            log.push("Ring reset");
                            log_event(&mut log, &mut metrics, controller.start());
                        }
                        Keycode::C => {
                            log_event(&mut log, &mut metrics, controller.cancel_active());
                        }
                        Keycode::X => show_fps = !show_fps,
                        Keycode::Y => current_page = current_page.toggle(),
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // Advance the animation by one frame
        log_event(&mut log, &mut metrics, controller.tick());

        // FPS calculation
        fps_frame_count += 1;
        if last_fps_calc.elapsed().as_secs() >= 1 {
            current_fps = fps_frame_count as f32 / last_fps_calc.elapsed().as_secs_f32();
            fps_frame_count = 0;
            last_fps_calc = Instant::now();
        }

        // Render
        match current_page {
            Page::Gauge => draw_gauge_page(&mut display, &controller, show_fps, current_fps),
            Page::Debug => draw_debug_page(&mut display, &metrics, &log, &controller, current_fps),
        }

        let render_time = frame_start.elapsed();
        window.update(&display);

        let pre_sleep = frame_start.elapsed();
        if pre_sleep < FRAME_TIME {
            thread::sleep(FRAME_TIME - pre_sleep);
        }

        metrics.record_frame(frame_start.elapsed(), render_time);
    }
}

/// Record a sequencer event in the log and the counters.
fn log_event(
    log: &mut EventLog,
    metrics: &mut ProfilingMetrics,
    event: SequenceEvent,
) {
    match event {
        SequenceEvent::None => {}
        SequenceEvent::Started(index) => {
            log.push_indexed("Sweep started: ", index);
        }
        SequenceEvent::Advanced { finished, started } => {
            metrics.sweeps_completed += 1;
            log.push_indexed("Sweep done: ", finished);
            log.push_indexed("Sweep started: ", started);
        }
        SequenceEvent::Ended => {
            metrics.sweeps_completed += 1;
            metrics.sequences_completed += 1;
            log.push("Sequence complete");
        }
        SequenceEvent::Stalled(index) => {
            metrics.stalls += 1;
            log.push_indexed("Stalled at: ", index);
        }
    }
}
