//! Drawing widgets for the gauge ring.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` for platform
//! independence.

mod ring;

pub use ring::draw_arc_segment;
