//! The gauge page: title, key hints, FPS readout, and the animated ring.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;
use gauge_common::colors::{BLACK, WHITE};
use gauge_common::config::{CENTER_X, CENTER_Y, RING_RADIUS, SCREEN_HEIGHT, SCREEN_WIDTH};
use gauge_common::sequencer::GaugeController;
use gauge_common::styles::{CENTERED, HINT_STYLE, LABEL_FONT, RIGHT_ALIGNED, TITLE_STYLE};
use gauge_common::widgets::draw_arc_segment;
use heapless::String;

const TITLE_POS: Point = Point::new(CENTER_X, 24);
const HINT_POS: Point = Point::new(CENTER_X, (SCREEN_HEIGHT - 6) as i32);
const FPS_POS: Point = Point::new((SCREEN_WIDTH - 4) as i32, 12);

const TITLE: &str = "CIRCLE GAUGE";
const HINTS: &str = "SPACE start  R reset  C cancel  Y debug";

/// Draw the whole gauge page for one frame.
///
/// The ring redraws fully every frame; each revealed segment is drawn at
/// full extent except the one carrying the in-flight sweep, which is drawn
/// at its current fraction.
pub fn draw_gauge_page(
    display: &mut SimulatorDisplay<Rgb565>,
    controller: &GaugeController,
    show_fps: bool,
    fps: f32,
) {
    display.clear(BLACK).ok();

    Text::with_text_style(TITLE, TITLE_POS, TITLE_STYLE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(HINTS, HINT_POS, HINT_STYLE, CENTERED)
        .draw(display)
        .ok();

    if show_fps {
        let mut fps_str: String<12> = String::new();
        let _ = write!(fps_str, "{fps:.0} FPS");
        let fps_style = MonoTextStyle::new(LABEL_FONT, WHITE);
        Text::with_text_style(&fps_str, FPS_POS, fps_style, RIGHT_ALIGNED)
            .draw(display)
            .ok();
    }

    let center = Point::new(CENTER_X, CENTER_Y);
    let active = controller.active_sweep();
    for (index, segment) in controller.segments().iter().enumerate() {
        let progress = match active {
            Some((active_index, fraction)) if active_index == index => fraction,
            _ => 1.0,
        };
        draw_arc_segment(display, center, RING_RADIUS, segment, progress);
    }
}
