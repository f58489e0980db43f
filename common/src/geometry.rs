//! Arc segment type and circle-partition math.
//!
//! The ring is divided into N contiguous slices of equal width `360/N`
//! degrees. Each segment's stroke starts `SEGMENT_GAP_DEGREES` after its
//! slice boundary and ends exactly at the next boundary, which leaves a
//! small visual gap between neighboring segments.
//!
//! Angle convention matches the display: 0 degrees points right (3 o'clock)
//! and positive angles sweep clockwise on screen.

use embedded_graphics::pixelcolor::Rgb565;

/// Full circle in degrees.
pub const FULL_CIRCLE_DEGREES: f32 = 360.0;

/// One colored arc of the gauge ring.
///
/// Angles are stored in degrees; conversion to radians happens only at the
/// trigonometry call sites (tip dot position).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSegment {
    /// Stroke color of this segment.
    pub color: Rgb565,
    /// Start angle in degrees, measured clockwise from 3 o'clock.
    pub start_deg: f32,
    /// End angle in degrees.
    pub end_deg: f32,
    /// Segments stay hidden until the sequencer reveals them.
    pub hidden: bool,
}

impl ArcSegment {
    /// Angular extent of the full stroke in degrees.
    #[inline]
    pub fn sweep_deg(&self) -> f32 { self.end_deg - self.start_deg }
}

/// Compute the start and end angle (in degrees) of slice `index` out of
/// `count` slices, with the stroke inset by `gap_degrees` from the slice
/// boundary.
///
/// Returns `(0.0, 0.0)` for `count == 0`; callers never index an empty ring.
pub fn slice_angles(
    count: usize,
    index: usize,
    gap_degrees: f32,
) -> (f32, f32) {
    if count == 0 {
        return (0.0, 0.0);
    }
    let slice = FULL_CIRCLE_DEGREES / count as f32;
    let start = slice * index as f32 + gap_degrees;
    let end = slice * (index + 1) as f32;
    (start, end)
}

/// Convert an angle in degrees to radians.
#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 { degrees * (core::f32::consts::PI / 180.0) }

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(
        a: f32,
        b: f32,
    ) -> bool {
        (a - b).abs() < EPSILON
    }

    // -------------------------------------------------------------------------
    // Slice Partition Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_four_slices_match_reference_layout() {
        // The observed configuration: 4 colors, 4 degree gap.
        let expected = [(4.0, 90.0), (94.0, 180.0), (184.0, 270.0), (274.0, 360.0)];
        for (i, (want_start, want_end)) in expected.iter().enumerate() {
            let (start, end) = slice_angles(4, i, 4.0);
            assert!(
                approx_eq(start, *want_start),
                "Slice {i}: start {start} != {want_start}"
            );
            assert!(approx_eq(end, *want_end), "Slice {i}: end {end} != {want_end}");
        }
    }

    #[test]
    fn test_slices_partition_full_circle() {
        // For any N >= 1, slice boundaries must partition [0, 360) into N
        // contiguous slices of equal width, each stroke inset by the gap.
        for count in [1usize, 2, 3, 5, 8, 12] {
            let slice = FULL_CIRCLE_DEGREES / count as f32;
            for index in 0..count {
                let (start, end) = slice_angles(count, index, 4.0);
                assert!(
                    approx_eq(start - 4.0, slice * index as f32),
                    "N={count} i={index}: stroke start should sit gap degrees past the boundary"
                );
                assert!(
                    approx_eq(end, slice * (index + 1) as f32),
                    "N={count} i={index}: stroke end should sit exactly on the next boundary"
                );
            }
            // Last slice ends on the full circle.
            let (_, last_end) = slice_angles(count, count - 1, 4.0);
            assert!(approx_eq(last_end, FULL_CIRCLE_DEGREES));
        }
    }

    #[test]
    fn test_slice_widths_are_equal() {
        for count in [2usize, 4, 6, 9] {
            let (first_start, first_end) = slice_angles(count, 0, 4.0);
            let width = first_end - first_start;
            for index in 1..count {
                let (start, end) = slice_angles(count, index, 4.0);
                assert!(
                    approx_eq(end - start, width),
                    "N={count} i={index}: all strokes should have equal angular width"
                );
            }
        }
    }

    #[test]
    fn test_zero_slices_is_harmless() {
        let (start, end) = slice_angles(0, 0, 4.0);
        assert!(approx_eq(start, 0.0));
        assert!(approx_eq(end, 0.0));
    }

    #[test]
    fn test_zero_gap_touches_boundaries() {
        let (start, end) = slice_angles(4, 1, 0.0);
        assert!(approx_eq(start, 90.0));
        assert!(approx_eq(end, 180.0));
    }

    // -------------------------------------------------------------------------
    // Angle Conversion Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_degrees_to_radians() {
        assert!(approx_eq(degrees_to_radians(0.0), 0.0));
        assert!(approx_eq(degrees_to_radians(180.0), core::f32::consts::PI));
        assert!(approx_eq(degrees_to_radians(360.0), core::f32::consts::TAU));
        assert!(approx_eq(degrees_to_radians(90.0), core::f32::consts::FRAC_PI_2));
    }

    // -------------------------------------------------------------------------
    // ArcSegment Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_segment_sweep_degrees() {
        let seg = ArcSegment {
            color: embedded_graphics::pixelcolor::Rgb565::new(0, 0, 31),
            start_deg: 4.0,
            end_deg: 90.0,
            hidden: true,
        };
        assert!(approx_eq(seg.sweep_deg(), 86.0));
    }
}
