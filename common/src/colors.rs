//! Color constants for the circle gauge demo.
//!
//! # Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)
//!
//! Where the `embedded_graphics` `RgbColor` trait provides a matching
//! constant we use it directly instead of constructing `Rgb565::new(r, g, b)`
//! by hand; the built-in values are guaranteed optimal.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black (0, 0, 0). Screen background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Title text and the sweep tip dot.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure blue (0, 0, 31). First segment of the ring.
pub const BLUE: Rgb565 = Rgb565::BLUE;

/// Pure red (31, 0, 0). Second segment of the ring.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green (0, 63, 0). Third segment of the ring.
pub const GREEN: Rgb565 = Rgb565::GREEN;

// =============================================================================
// Custom Colors (application-specific)
// =============================================================================

/// Orange. Fourth segment of the ring.
/// RGB565: (31, 32, 0) - slightly darker than yellow.
pub const ORANGE: Rgb565 = Rgb565::new(31, 32, 0);

/// Dark gray for dividers and de-emphasized debug text.
/// RGB565: (8, 16, 8) - roughly 25% brightness.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Dim white used for the outer halo pass of the segment glow.
/// RGB565: (8, 17, 8) - a faint white that reads as a soft shadow on black.
pub const GLOW_OUTER: Rgb565 = Rgb565::new(8, 17, 8);

/// Brighter white used for the inner halo pass of the segment glow.
/// RGB565: (16, 33, 16) - half brightness white.
pub const GLOW_INNER: Rgb565 = Rgb565::new(16, 33, 16);
