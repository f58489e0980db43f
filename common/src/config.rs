//! Demo configuration constants.
//!
//! All layout and timing values are compile-time constants. Derived values
//! (screen center, ring diameter) are pre-computed here so the drawing code
//! never repeats the arithmetic per frame.

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{BLUE, GREEN, ORANGE, RED};

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (320x240, same panel class as ST7789 boards).
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

/// Screen center X coordinate. Pre-computed as i32 for drawing code.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate. Pre-computed as i32 for drawing code.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

// =============================================================================
// Ring Geometry
// =============================================================================

/// Radius of the gauge ring in pixels.
pub const RING_RADIUS: u32 = 100;

/// Stroke width of each arc segment in pixels.
pub const RING_STROKE_WIDTH: u32 = 3;

/// Extra stroke width (per side) of the white glow behind each segment.
pub const GLOW_RADIUS: u32 = 4;

/// Angular gap between a slice boundary and the start of its arc, in degrees.
pub const SEGMENT_GAP_DEGREES: f32 = 4.0;

/// Diameter of the bright dot drawn at the leading edge of an active sweep.
pub const TIP_DOT_DIAMETER: u32 = 5;

/// Upper bound on ring segments. The palette has 4; the heapless segment
/// vector is sized with headroom so alternative palettes fit.
pub const MAX_SEGMENTS: usize = 8;

// =============================================================================
// Segment Palette
// =============================================================================

/// Stroke colors of the ring segments, in animation order.
pub const PALETTE: [Rgb565; 4] = [BLUE, RED, GREEN, ORANGE];

// =============================================================================
// Animation Timing (frame-based)
// =============================================================================

/// Frames for one full stroke sweep (0 -> 1). 150 frames = 3 seconds at the
/// 50 FPS frame budget.
pub const SWEEP_DURATION_FRAMES: u32 = 150;

/// Sweep speed multiplier. 1.0 plays at the nominal duration; 2.0 halves it.
pub const SWEEP_SPEED: f32 = 1.0;
