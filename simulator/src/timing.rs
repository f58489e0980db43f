//! Timing constants for the simulator.
//!
//! These constants use `std::time::Duration` which is not available in
//! `no_std` environments, so they live here rather than in the common crate.
//! The sweep duration itself is frame-based and defined in
//! `gauge_common::config`.

use std::time::Duration;

/// Target frame time (~50 FPS). The main loop sleeps if a frame completes
/// early; together with `SWEEP_DURATION_FRAMES` this gives the 3 second
/// stroke sweep.
pub const FRAME_TIME: Duration = Duration::from_millis(20);
