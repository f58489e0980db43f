//! Debug/profiling page rendering.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;
use gauge_common::colors::{BLACK, GRAY, GREEN, ORANGE, WHITE};
use gauge_common::config::SCREEN_WIDTH;
use gauge_common::logging::EventLog;
use gauge_common::sequencer::GaugeController;
use gauge_common::styles::LABEL_FONT;
use heapless::String;

use crate::profiling::ProfilingMetrics;

const HEADER_Y: i32 = 12;
const HEADER_DIVIDER_Y: i32 = 18;
const SECTION_HEADER_Y: i32 = 30;
const STATS_Y: i32 = 44;
const STAT_LINE_HEIGHT: i32 = 13;
const LOG_DIVIDER_Y: i32 = 130;
const LOG_Y: i32 = 140;
const LOG_LINE_HEIGHT: i32 = 12;
const COL1_X: i32 = 4;
const COL2_X: i32 = 165;

const HEADER_COLOR: Rgb565 = GREEN;
const SECTION_COLOR: Rgb565 = GRAY;
const VALUE_COLOR: Rgb565 = WHITE;
const LOG_PROMPT_COLOR: Rgb565 = GREEN;
const LOG_TEXT_COLOR: Rgb565 = ORANGE;
const DIVIDER_COLOR: Rgb565 = GRAY;

/// Draw the full debug page: header, timing and sequence columns, and the
/// event log terminal.
pub fn draw_debug_page(
    display: &mut SimulatorDisplay<Rgb565>,
    metrics: &ProfilingMetrics,
    log: &EventLog,
    controller: &GaugeController,
    fps: f32,
) {
    display.clear(BLACK).ok();
    draw_header(display, metrics, fps);
    draw_horizontal_line(display, HEADER_DIVIDER_Y);
    draw_section_headers(display);
    draw_timing_column(display, metrics);
    draw_sequence_column(display, metrics, controller);
    draw_horizontal_line(display, LOG_DIVIDER_Y);
    draw_log_terminal(display, log);
}

fn draw_header(
    display: &mut SimulatorDisplay<Rgb565>,
    metrics: &ProfilingMetrics,
    fps: f32,
) {
    let header_style = MonoTextStyle::new(LABEL_FONT, HEADER_COLOR);
    let info_style = MonoTextStyle::new(LABEL_FONT, VALUE_COLOR);

    Text::new("DEBUG VIEW", Point::new(COL1_X, HEADER_Y), header_style)
        .draw(display)
        .ok();

    let uptime = metrics.uptime_string();
    let mut uptime_str: String<24> = String::new();
    let _ = write!(uptime_str, "UP {uptime}");
    Text::new(&uptime_str, Point::new(160, HEADER_Y), info_style)
        .draw(display)
        .ok();

    let mut fps_str: String<12> = String::new();
    let _ = write!(fps_str, "{fps:.0} FPS");
    Text::new(&fps_str, Point::new(280, HEADER_Y), info_style)
        .draw(display)
        .ok();
}

fn draw_section_headers(display: &mut SimulatorDisplay<Rgb565>) {
    let style = MonoTextStyle::new(LABEL_FONT, SECTION_COLOR);
    Text::new("TIMING", Point::new(COL1_X, SECTION_HEADER_Y), style)
        .draw(display)
        .ok();
    Text::new("SEQUENCE", Point::new(COL2_X, SECTION_HEADER_Y), style)
        .draw(display)
        .ok();
}

fn draw_timing_column(
    display: &mut SimulatorDisplay<Rgb565>,
    metrics: &ProfilingMetrics,
) {
    let value_style = MonoTextStyle::new(LABEL_FONT, VALUE_COLOR);
    let x = COL1_X;
    let mut y = STATS_Y;

    let mut s: String<24> = String::new();
    let _ = write!(s, "Frame: {:.1}ms", metrics.frame_time_us as f32 / 1000.0);
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<24> = String::new();
    let _ = write!(s, "Render:{:.1}ms", metrics.render_time_us as f32 / 1000.0);
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<24> = String::new();
    let _ = write!(s, "Avg:   {:.1}ms", metrics.frame_time_avg_us() / 1000.0);
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<24> = String::new();
    if metrics.frame_time_min_us == u32::MAX {
        let _ = write!(s, "Min:   -");
    } else {
        let _ = write!(s, "Min:   {:.1}ms", metrics.frame_time_min_us as f32 / 1000.0);
    }
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<24> = String::new();
    let _ = write!(s, "Max:   {:.1}ms", metrics.frame_time_max_us as f32 / 1000.0);
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<24> = String::new();
    let _ = write!(s, "Frames:{}", metrics.total_frames);
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
}

fn draw_sequence_column(
    display: &mut SimulatorDisplay<Rgb565>,
    metrics: &ProfilingMetrics,
    controller: &GaugeController,
) {
    let value_style = MonoTextStyle::new(LABEL_FONT, VALUE_COLOR);
    let x = COL2_X;
    let mut y = STATS_Y;

    let mut s: String<24> = String::new();
    let _ = write!(s, "Cursor:   {}", controller.cursor());
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let state = if controller.is_animating() { "animating" } else { "idle" };
    let mut s: String<24> = String::new();
    let _ = write!(s, "State:    {state}");
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<24> = String::new();
    let _ = write!(s, "Sweeps:   {}", metrics.sweeps_completed);
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<24> = String::new();
    let _ = write!(s, "Sequences:{}", metrics.sequences_completed);
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<24> = String::new();
    let _ = write!(s, "Stalls:   {}", metrics.stalls);
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
}

fn draw_log_terminal(
    display: &mut SimulatorDisplay<Rgb565>,
    log: &EventLog,
) {
    let prompt_style = MonoTextStyle::new(LABEL_FONT, LOG_PROMPT_COLOR);
    let text_style = MonoTextStyle::new(LABEL_FONT, LOG_TEXT_COLOR);

    let count = log.len();
    for (i, line) in log.iter().enumerate() {
        let y = LOG_Y + i as i32 * LOG_LINE_HEIGHT;
        let style = if i == count - 1 { prompt_style } else { text_style };
        let mut full_line: String<48> = String::new();
        let prefix = if i == count - 1 { "> " } else { "  " };
        let _ = write!(full_line, "{prefix}{line}");
        Text::new(&full_line, Point::new(COL1_X, y), style).draw(display).ok();
    }
}

fn draw_horizontal_line(
    display: &mut SimulatorDisplay<Rgb565>,
    y: i32,
) {
    Line::new(Point::new(0, y), Point::new(SCREEN_WIDTH as i32 - 1, y))
        .into_styled(PrimitiveStyle::with_stroke(DIVIDER_COLOR, 1))
        .draw(display)
        .ok();
}
