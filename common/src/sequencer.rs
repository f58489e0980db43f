//! Sweep sequencer: the chained stroke-reveal animation state machine.
//!
//! The controller owns the ring's arc segments and a single cursor naming
//! the segment whose stroke animates next. One sweep runs at a time:
//!
//! ```text
//! Idle -> Animating(0) -> Animating(1) -> ... -> Animating(N-1) -> Idle
//! ```
//!
//! Each successful sweep reveals its segment permanently and chains straight
//! into the next one. When the last segment finishes, the cursor wraps back
//! to 0 and the sequence halts until [`GaugeController::start`] is called
//! again by an external trigger.
//!
//! # Frame-Based Timing
//!
//! A sweep is a plain frame counter ([`SweepProgress`]), advanced by one on
//! every [`GaugeController::tick`]. The host loop owns wall-clock pacing;
//! at the 50 FPS frame budget the 150-frame sweep takes 3 seconds.
//!
//! # Unsuccessful Completion
//!
//! A sweep reported as unsuccessful (e.g. cancelled by the host) performs no
//! state transition: the segment stays revealed, the cursor stays put, and
//! the sequence stalls. The stall is surfaced as [`SequenceEvent::Stalled`]
//! so the host can log it; recovery is another external `start()`.

use embedded_graphics::pixelcolor::Rgb565;
use heapless::Vec;

use crate::config::{MAX_SEGMENTS, SWEEP_DURATION_FRAMES, SWEEP_SPEED};
use crate::geometry::{ArcSegment, slice_angles};

// =============================================================================
// Sequence Events
// =============================================================================

/// What the sequencer did during one call, for host-side logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceEvent {
    /// Nothing to report (no active sweep, or the sweep merely progressed).
    None,
    /// The segment at this index was revealed and its sweep began.
    Started(usize),
    /// The sweep at `finished` completed and the sweep at `started` began.
    Advanced { finished: usize, started: usize },
    /// The last segment finished; the cursor wrapped to 0 and the sequence
    /// halted. Also returned by `start()` on an empty ring.
    Ended,
    /// A sweep completed unsuccessfully; the sequence is stalled at this
    /// index until restarted.
    Stalled(usize),
}

// =============================================================================
// Sweep Progress
// =============================================================================

/// Frame counter for one stroke-reveal sweep (value 0 -> 1).
///
/// Created fresh for every segment; never reused across arcs.
#[derive(Clone, Copy, Debug)]
pub struct SweepProgress {
    elapsed_frames: u32,
    duration_frames: u32,
}

impl SweepProgress {
    /// Create a sweep at progress 0 with the configured duration and speed.
    pub fn new() -> Self {
        // Speed scales the nominal duration; 1.0 leaves it unchanged.
        let duration = (SWEEP_DURATION_FRAMES as f32 / SWEEP_SPEED) as u32;
        Self {
            elapsed_frames: 0,
            duration_frames: duration.max(1),
        }
    }

    /// Advance by one frame. Returns `true` once the full duration elapsed.
    pub fn advance(&mut self) -> bool {
        if self.elapsed_frames < self.duration_frames {
            self.elapsed_frames += 1;
        }
        self.elapsed_frames >= self.duration_frames
    }

    /// Completed fraction of the sweep, clamped to `0.0..=1.0`.
    #[inline]
    pub fn fraction(&self) -> f32 {
        (self.elapsed_frames as f32 / self.duration_frames as f32).clamp(0.0, 1.0)
    }
}

impl Default for SweepProgress {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Gauge Controller
// =============================================================================

/// Owns the arc segments, the cursor, and the single active sweep.
pub struct GaugeController {
    segments: Vec<ArcSegment, MAX_SEGMENTS>,
    cursor: usize,
    active: Option<SweepProgress>,
}

impl GaugeController {
    /// Create an empty controller. Call [`Self::layout`] before starting.
    pub const fn new() -> Self {
        Self {
            segments: Vec::new(),
            cursor: 0,
            active: None,
        }
    }

    /// Build the ring: one segment per palette color, laid out as equal
    /// slices of the circle with `gap_degrees` inset from each boundary.
    ///
    /// All segments start hidden. Collection order matches palette order.
    /// Palettes longer than [`MAX_SEGMENTS`] are truncated.
    pub fn layout(
        &mut self,
        palette: &[Rgb565],
        gap_degrees: f32,
    ) {
        self.segments.clear();
        self.cursor = 0;
        self.active = None;

        for (index, color) in palette.iter().enumerate() {
            let (start_deg, end_deg) = slice_angles(palette.len(), index, gap_degrees);
            let segment = ArcSegment {
                color: *color,
                start_deg,
                end_deg,
                hidden: true,
            };
            if self.segments.push(segment).is_err() {
                break;
            }
        }
    }

    /// Reveal the segment at the cursor and attach a fresh sweep to it.
    ///
    /// A cursor past the last valid index (including the empty ring) means
    /// "sequence complete": nothing is revealed and [`SequenceEvent::Ended`]
    /// is returned instead of faulting.
    pub fn start(&mut self) -> SequenceEvent {
        let Some(segment) = self.segments.get_mut(self.cursor) else {
            return SequenceEvent::Ended;
        };
        segment.hidden = false;
        self.active = Some(SweepProgress::new());
        SequenceEvent::Started(self.cursor)
    }

    /// Advance the active sweep by one frame.
    ///
    /// When the sweep reaches its full duration this performs the successful
    /// completion transition and reports it.
    pub fn tick(&mut self) -> SequenceEvent {
        let Some(sweep) = &mut self.active else {
            return SequenceEvent::None;
        };
        if sweep.advance() {
            let finished = self.cursor;
            self.active = None;
            self.on_sweep_finished(finished, true)
        } else {
            SequenceEvent::None
        }
    }

    /// Completion notification for the sweep at `index`.
    ///
    /// On success the cursor advances and the next segment starts
    /// immediately; finishing the last segment wraps the cursor to 0 and
    /// halts. On failure nothing transitions: the sequence stalls with the
    /// cursor and all visibility unchanged.
    pub fn on_sweep_finished(
        &mut self,
        index: usize,
        success: bool,
    ) -> SequenceEvent {
        if !success {
            self.active = None;
            return SequenceEvent::Stalled(index);
        }

        if index + 1 < self.segments.len() {
            self.cursor = index + 1;
            match self.start() {
                SequenceEvent::Started(started) => SequenceEvent::Advanced {
                    finished: index,
                    started,
                },
                other => other,
            }
        } else {
            self.cursor = 0;
            SequenceEvent::Ended
        }
    }

    /// Cancel the in-flight sweep, delivering an unsuccessful completion.
    ///
    /// No-op when nothing is animating.
    pub fn cancel_active(&mut self) -> SequenceEvent {
        if self.active.is_some() {
            let index = self.cursor;
            self.on_sweep_finished(index, false)
        } else {
            SequenceEvent::None
        }
    }

    /// Hide every segment and return to the idle state (cursor 0, no sweep).
    pub fn reset(&mut self) {
        for segment in &mut self.segments {
            segment.hidden = true;
        }
        self.cursor = 0;
        self.active = None;
    }

    /// The laid-out segments, in palette order.
    #[inline]
    pub fn segments(&self) -> &[ArcSegment] { &self.segments }

    /// Index and completed fraction of the in-flight sweep, if any.
    pub fn active_sweep(&self) -> Option<(usize, f32)> {
        self.active.map(|sweep| (self.cursor, sweep.fraction()))
    }

    /// Index of the segment that animates next.
    #[inline]
    pub const fn cursor(&self) -> usize { self.cursor }

    /// Whether a sweep is currently in flight.
    #[inline]
    pub const fn is_animating(&self) -> bool { self.active.is_some() }
}

impl Default for GaugeController {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLUE, GREEN, ORANGE, RED};
    use crate::config::PALETTE;

    fn controller_with_palette() -> GaugeController {
        let mut controller = GaugeController::new();
        controller.layout(&PALETTE, 4.0);
        controller
    }

    /// Drive ticks until the current sweep completes, returning its
    /// completion event. Panics if nothing completes within the duration.
    fn run_sweep(controller: &mut GaugeController) -> SequenceEvent {
        for _ in 0..=SWEEP_DURATION_FRAMES {
            let event = controller.tick();
            if event != SequenceEvent::None {
                return event;
            }
        }
        panic!("sweep did not complete within its duration");
    }

    // -------------------------------------------------------------------------
    // Layout Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_layout_matches_palette_order() {
        let controller = controller_with_palette();
        let segments = controller.segments();
        assert_eq!(segments.len(), 4);
        assert_eq!(segments[0].color, BLUE);
        assert_eq!(segments[1].color, RED);
        assert_eq!(segments[2].color, GREEN);
        assert_eq!(segments[3].color, ORANGE);
    }

    #[test]
    fn test_layout_hides_all_segments() {
        let controller = controller_with_palette();
        assert!(
            controller.segments().iter().all(|s| s.hidden),
            "All segments should start hidden"
        );
        assert!(!controller.is_animating());
        assert_eq!(controller.cursor(), 0);
    }

    #[test]
    fn test_layout_truncates_oversized_palette() {
        let mut controller = GaugeController::new();
        let palette = [BLUE; MAX_SEGMENTS + 3];
        controller.layout(&palette, 4.0);
        assert_eq!(controller.segments().len(), MAX_SEGMENTS);
    }

    // -------------------------------------------------------------------------
    // Empty Ring Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_empty_palette_start_is_noop() {
        let mut controller = GaugeController::new();
        controller.layout(&[], 4.0);
        assert!(controller.segments().is_empty());

        // Starting an empty ring must not fault; it reports "complete".
        assert_eq!(controller.start(), SequenceEvent::Ended);
        assert!(!controller.is_animating());
        assert_eq!(controller.tick(), SequenceEvent::None);
    }

    // -------------------------------------------------------------------------
    // Sequence Start Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_start_reveals_first_segment() {
        let mut controller = controller_with_palette();
        assert_eq!(controller.start(), SequenceEvent::Started(0));

        assert!(!controller.segments()[0].hidden, "Segment 0 should be revealed");
        for (i, segment) in controller.segments().iter().enumerate().skip(1) {
            assert!(segment.hidden, "Segment {i} should remain hidden");
        }

        let (index, fraction) = controller.active_sweep().expect("sweep should be active");
        assert_eq!(index, 0);
        assert!(fraction.abs() < f32::EPSILON, "Fresh sweep starts at 0");
    }

    // -------------------------------------------------------------------------
    // Successful Completion Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_completion_chains_to_next_segment() {
        let mut controller = controller_with_palette();
        controller.start();

        let event = run_sweep(&mut controller);
        assert_eq!(
            event,
            SequenceEvent::Advanced {
                finished: 0,
                started: 1
            }
        );

        // The finished segment stays revealed, the next one is revealed,
        // and the rest did not change.
        assert!(!controller.segments()[0].hidden);
        assert!(!controller.segments()[1].hidden);
        assert!(controller.segments()[2].hidden);
        assert!(controller.segments()[3].hidden);
        assert_eq!(controller.cursor(), 1);
        assert!(controller.is_animating());
    }

    #[test]
    fn test_full_sequence_runs_in_order_then_halts() {
        let mut controller = controller_with_palette();
        controller.start();

        assert_eq!(
            run_sweep(&mut controller),
            SequenceEvent::Advanced {
                finished: 0,
                started: 1
            }
        );
        assert_eq!(
            run_sweep(&mut controller),
            SequenceEvent::Advanced {
                finished: 1,
                started: 2
            }
        );
        assert_eq!(
            run_sweep(&mut controller),
            SequenceEvent::Advanced {
                finished: 2,
                started: 3
            }
        );
        assert_eq!(run_sweep(&mut controller), SequenceEvent::Ended);

        // All revealed, cursor wrapped to 0, nothing animating, and no
        // automatic restart on further ticks.
        assert!(controller.segments().iter().all(|s| !s.hidden));
        assert_eq!(controller.cursor(), 0);
        assert!(!controller.is_animating());
        assert_eq!(controller.tick(), SequenceEvent::None);
    }

    #[test]
    fn test_last_completion_wraps_cursor() {
        let mut controller = GaugeController::new();
        controller.layout(&[BLUE], 4.0);
        controller.start();

        assert_eq!(run_sweep(&mut controller), SequenceEvent::Ended);
        assert_eq!(controller.cursor(), 0);
        assert!(!controller.is_animating());
    }

    #[test]
    fn test_restart_after_sequence_replays_from_zero() {
        let mut controller = controller_with_palette();
        controller.start();
        for _ in 0..4 {
            run_sweep(&mut controller);
        }

        // The external trigger fires again: the first segment re-animates
        // and already-revealed segments do not re-hide.
        assert_eq!(controller.start(), SequenceEvent::Started(0));
        assert!(controller.segments().iter().all(|s| !s.hidden));
    }

    // -------------------------------------------------------------------------
    // Unsuccessful Completion Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_failed_completion_stalls_sequence() {
        let mut controller = controller_with_palette();
        controller.start();
        controller.tick();

        let event = controller.on_sweep_finished(0, false);
        assert_eq!(event, SequenceEvent::Stalled(0));

        // No transition: cursor unchanged, visibility unchanged, no sweep.
        assert_eq!(controller.cursor(), 0);
        assert!(!controller.segments()[0].hidden);
        assert!(controller.segments()[1].hidden);
        assert!(!controller.is_animating());
        assert_eq!(controller.tick(), SequenceEvent::None);
    }

    #[test]
    fn test_cancel_active_delivers_failure() {
        let mut controller = controller_with_palette();
        controller.start();
        controller.tick();

        assert_eq!(controller.cancel_active(), SequenceEvent::Stalled(0));
        assert!(!controller.is_animating());

        // Cancelling with nothing in flight is a no-op.
        assert_eq!(controller.cancel_active(), SequenceEvent::None);
    }

    #[test]
    fn test_stalled_sequence_recovers_on_start() {
        let mut controller = controller_with_palette();
        controller.start();
        controller.cancel_active();

        assert_eq!(controller.start(), SequenceEvent::Started(0));
        assert!(controller.is_animating());
    }

    // -------------------------------------------------------------------------
    // Sweep Progress Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_sweep_fraction_is_monotonic_and_clamped() {
        let mut sweep = SweepProgress::new();
        let mut last = sweep.fraction();
        assert!(last.abs() < f32::EPSILON);

        for _ in 0..(SWEEP_DURATION_FRAMES * 2) {
            sweep.advance();
            let fraction = sweep.fraction();
            assert!(fraction >= last, "Fraction must never decrease");
            assert!(fraction <= 1.0, "Fraction must stay clamped to 1.0");
            last = fraction;
        }
        assert!((last - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_sweep_completes_after_duration_frames() {
        let mut sweep = SweepProgress::new();
        for frame in 1..SWEEP_DURATION_FRAMES {
            assert!(!sweep.advance(), "Sweep finished early at frame {frame}");
        }
        assert!(sweep.advance(), "Sweep should finish on the final frame");
    }

    #[test]
    fn test_tick_progress_drives_fraction() {
        let mut controller = controller_with_palette();
        controller.start();

        for _ in 0..(SWEEP_DURATION_FRAMES / 2) {
            controller.tick();
        }
        let (_, fraction) = controller.active_sweep().expect("sweep still active");
        assert!(
            (fraction - 0.5).abs() < 0.02,
            "Halfway through the duration the fraction should be ~0.5, got {fraction}"
        );
    }

    // -------------------------------------------------------------------------
    // Reset Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_reset_returns_to_idle() {
        let mut controller = controller_with_palette();
        controller.start();
        run_sweep(&mut controller);

        controller.reset();
        assert!(controller.segments().iter().all(|s| s.hidden));
        assert_eq!(controller.cursor(), 0);
        assert!(!controller.is_animating());
    }
}
