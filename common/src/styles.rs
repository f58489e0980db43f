//! Pre-computed static text styles.
//!
//! `MonoTextStyle` and `TextStyle` values are `const`-constructed once at
//! compile time and referenced directly by the drawing code, instead of
//! being rebuilt inside every draw call.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::FONT_6X10,
    },
    pixelcolor::Rgb565,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_18_POINT;

use crate::colors::{GRAY, WHITE};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text alignment. Used for the title above the ring.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned text. Used for the debug page columns and log terminal.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

/// Right-aligned text. Used for the FPS readout in the corner.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

// =============================================================================
// Fonts and Fixed Styles
// =============================================================================

/// Small font for debug text and labels. Callers needing a dynamic color
/// build `MonoTextStyle::new(LABEL_FONT, color)` themselves.
pub const LABEL_FONT: &MonoFont<'static> = &FONT_6X10;

/// Large title style for the heading above the ring.
pub const TITLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, WHITE);

/// De-emphasized style for the key hints at the bottom of the screen.
pub const HINT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, GRAY);
