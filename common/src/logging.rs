//! Event log ring buffer.
//!
//! Sequence transitions and input actions are recorded here and rendered on
//! the simulator's debug page. The buffer is heapless and time-free so it
//! stays usable from `no_std` code; timestamps, if wanted, belong to the
//! host side of a message.

use heapless::{Deque, String};

// =============================================================================
// Event Log Configuration
// =============================================================================

/// Number of log lines kept. Oldest lines fall off the end.
pub const EVENT_LOG_LINES: usize = 8;

/// Maximum characters per log line; longer messages are cut.
pub const EVENT_LINE_LENGTH: usize = 40;

// =============================================================================
// Event Log
// =============================================================================

/// Fixed-capacity ring buffer of short event messages.
pub struct EventLog {
    lines: Deque<String<EVENT_LINE_LENGTH>, EVENT_LOG_LINES>,
}

impl EventLog {
    /// Create an empty log.
    pub const fn new() -> Self { Self { lines: Deque::new() } }

    /// Record a message, dropping the oldest line when full and truncating
    /// anything past [`EVENT_LINE_LENGTH`] characters.
    pub fn push(
        &mut self,
        message: &str,
    ) {
        if self.lines.is_full() {
            self.lines.pop_front();
        }

        let mut line: String<EVENT_LINE_LENGTH> = String::new();
        for c in message.chars().take(EVENT_LINE_LENGTH - 1) {
            line.push(c).ok();
        }
        self.lines.push_back(line).ok();
    }

    /// Record a message followed by a decimal index, e.g. `"sweep done "` +
    /// `2`. Avoids `format!` so no allocator is needed.
    pub fn push_indexed(
        &mut self,
        message: &str,
        index: usize,
    ) {
        let mut line: String<EVENT_LINE_LENGTH> = String::new();
        for c in message.chars().take(EVENT_LINE_LENGTH - 12) {
            line.push(c).ok();
        }
        push_usize(&mut line, index);

        if self.lines.is_full() {
            self.lines.pop_front();
        }
        self.lines.push_back(line).ok();
    }

    /// Iterate over messages, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.lines.iter().map(|line| line.as_str()) }

    /// Number of stored lines.
    #[inline]
    pub const fn len(&self) -> usize { self.lines.len() }

    /// Whether the log holds no lines.
    #[inline]
    pub fn is_empty(&self) -> bool { self.lines.is_empty() }
}

impl Default for EventLog {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Append a decimal `usize` to a heapless string without `format!`.
pub fn push_usize<const N: usize>(
    s: &mut String<N>,
    mut value: usize,
) {
    if value == 0 {
        s.push('0').ok();
        return;
    }

    let mut digits = [0u8; 20];
    let mut count = 0;
    while value > 0 {
        digits[count] = (value % 10) as u8;
        value /= 10;
        count += 1;
    }
    while count > 0 {
        count -= 1;
        s.push((b'0' + digits[count]) as char).ok();
    }
}

// =============================================================================
// Tests
// =============================================================================
