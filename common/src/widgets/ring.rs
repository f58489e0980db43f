//! Arc segment rendering: glow, stroke, and the sweep tip dot.
//!
//! Each segment is drawn in passes, back to front:
//!
//! 1. Glow: the same arc with a wider stroke in dim white, emulating a soft
//!    white shadow behind the colored line. Two passes by default (outer
//!    faint, inner brighter); the `simple-glow` feature collapses this to a
//!    single pass for slower targets.
//! 2. Stroke: the arc itself at the configured line width.
//! 3. Tip dot: a small bright dot at the leading edge while the sweep is in
//!    flight, so the stroke visibly "draws itself".
//!
//! The drawn sweep covers `progress` of the segment's angular extent,
//! starting at its start angle. Hidden segments draw nothing.

use embedded_graphics::geometry::Angle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Arc, Circle, PrimitiveStyle};
use micromath::F32Ext;

use crate::colors::{GLOW_INNER, WHITE};
use crate::config::{GLOW_RADIUS, RING_STROKE_WIDTH, TIP_DOT_DIAMETER};
use crate::geometry::{ArcSegment, degrees_to_radians};

#[cfg(not(feature = "simple-glow"))]
use crate::colors::GLOW_OUTER;

/// Stroke width of the inner glow pass.
const GLOW_INNER_WIDTH: u32 = RING_STROKE_WIDTH + GLOW_RADIUS;

/// Stroke width of the outer glow pass.
#[cfg(not(feature = "simple-glow"))]
const GLOW_OUTER_WIDTH: u32 = RING_STROKE_WIDTH + 2 * GLOW_RADIUS;

/// Draw one arc segment with `progress` of its stroke revealed (0.0..=1.0).
pub fn draw_arc_segment<D>(
    display: &mut D,
    center: Point,
    radius: u32,
    segment: &ArcSegment,
    progress: f32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let progress = progress.clamp(0.0, 1.0);
    if segment.hidden || progress <= 0.0 {
        return;
    }

    let diameter = radius * 2;
    let sweep_deg = segment.sweep_deg() * progress;

    // embedded-graphics measures angles counterclockwise; the gauge runs
    // clockwise on screen, hence the negation.
    let angle_start = Angle::from_degrees(-segment.start_deg);
    let angle_sweep = Angle::from_degrees(-sweep_deg);

    // Glow passes first, widest to narrowest, so the stroke sits on top.
    #[cfg(not(feature = "simple-glow"))]
    Arc::with_center(center, diameter, angle_start, angle_sweep)
        .into_styled(PrimitiveStyle::with_stroke(GLOW_OUTER, GLOW_OUTER_WIDTH))
        .draw(display)
        .ok();

    Arc::with_center(center, diameter, angle_start, angle_sweep)
        .into_styled(PrimitiveStyle::with_stroke(GLOW_INNER, GLOW_INNER_WIDTH))
        .draw(display)
        .ok();

    Arc::with_center(center, diameter, angle_start, angle_sweep)
        .into_styled(PrimitiveStyle::with_stroke(segment.color, RING_STROKE_WIDTH))
        .draw(display)
        .ok();

    // Leading-edge dot only while the sweep is still growing.
    if progress < 1.0 {
        let tip = tip_point(center, radius, segment.start_deg + sweep_deg);
        Circle::with_center(tip, TIP_DOT_DIAMETER)
            .into_styled(PrimitiveStyle::with_fill(WHITE))
            .draw(display)
            .ok();
    }
}

/// Point on the ring at `angle_deg`, measured clockwise from 3 o'clock.
fn tip_point(
    center: Point,
    radius: u32,
    angle_deg: f32,
) -> Point {
    let angle_rad = degrees_to_radians(angle_deg);
    let x = center.x as f32 + radius as f32 * angle_rad.cos();
    let y = center.y as f32 + radius as f32 * angle_rad.sin();
    Point::new(x as i32, y as i32)
}
