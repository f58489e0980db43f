//! Screen modules: the gauge view itself and the debug overlay page.

mod debug;
mod gauge;

pub use debug::draw_debug_page;
pub use gauge::draw_gauge_page;

/// Which page the simulator window is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    /// The animated gauge ring.
    #[default]
    Gauge,
    /// Frame timing, sequence stats, and the event log.
    Debug,
}

impl Page {
    /// Switch to the other page.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Gauge => Self::Debug,
            Self::Debug => Self::Gauge,
        }
    }
}
