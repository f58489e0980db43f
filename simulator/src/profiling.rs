//! Profiling metrics with time-based measurements.
//!
//! Frame timing statistics plus counters for the animation sequence. The
//! event log lives in the common crate since it does not need time.

use core::fmt::Write;
use std::time::{Duration, Instant};

use heapless::String;

/// Frame timing and sequence statistics shown on the debug page.
pub struct ProfilingMetrics {
    // Frame timing (microseconds)
    pub frame_time_us: u32,
    pub render_time_us: u32,
    pub frame_time_min_us: u32,
    pub frame_time_max_us: u32,
    frame_time_avg_us: f32,

    // Counters
    pub total_frames: u64,
    pub sweeps_completed: u32,
    pub sequences_completed: u32,
    pub stalls: u32,

    // Uptime tracking
    start_time: Instant,
}

impl ProfilingMetrics {
    /// Smoothing factor for the frame time moving average.
    const EMA_ALPHA: f32 = 0.1;

    /// Create new profiling metrics with the uptime clock started.
    pub fn new() -> Self {
        Self {
            frame_time_us: 0,
            render_time_us: 0,
            frame_time_min_us: u32::MAX,
            frame_time_max_us: 0,
            frame_time_avg_us: 0.0,
            total_frames: 0,
            sweeps_completed: 0,
            sequences_completed: 0,
            stalls: 0,
            start_time: Instant::now(),
        }
    }

    /// Record timing for one completed frame.
    pub fn record_frame(
        &mut self,
        total_time: Duration,
        render_time: Duration,
    ) {
        self.frame_time_us = total_time.as_micros() as u32;
        self.render_time_us = render_time.as_micros() as u32;

        self.frame_time_min_us = self.frame_time_min_us.min(self.frame_time_us);
        self.frame_time_max_us = self.frame_time_max_us.max(self.frame_time_us);

        if self.total_frames == 0 {
            self.frame_time_avg_us = self.frame_time_us as f32;
        } else {
            self.frame_time_avg_us = Self::EMA_ALPHA * self.frame_time_us as f32
                + (1.0 - Self::EMA_ALPHA) * self.frame_time_avg_us;
        }

        self.total_frames += 1;
    }

    /// Smoothed frame time in microseconds.
    #[inline]
    pub const fn frame_time_avg_us(&self) -> f32 { self.frame_time_avg_us }

    /// Uptime formatted as `H:MM:SS`.
    pub fn uptime_string(&self) -> String<16> {
        let secs = self.start_time.elapsed().as_secs();
        let mut s: String<16> = String::new();
        let _ = write!(s, "{}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60);
        s
    }
}

impl Default for ProfilingMetrics {
    fn default() -> Self { Self::new() }
}
