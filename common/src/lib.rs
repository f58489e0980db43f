//! Common types and logic for the circle gauge demo.
//!
//! This crate contains the platform-agnostic part of the demo: everything
//! needed to lay out the colored arc segments and drive the sequential
//! stroke-reveal animation, independent of any particular display backend:
//!
//! - [`colors`]: RGB565 color constants and the segment palette
//! - [`config`]: Layout, ring, and animation timing constants
//! - [`geometry`]: Arc segment type and circle-partition math
//! - [`sequencer`]: The sweep sequencer state machine
//! - [`logging`]: Ring buffer for sequence event messages
//! - [`styles`]: Pre-computed text styles
//! - [`widgets`]: Ring drawing, generic over `DrawTarget`
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` compatible and avoids any dependency on
//! `std::time` or platform-specific types. Animation timing is frame-based:
//! the host loop calls [`sequencer::GaugeController::tick`] once per frame.

#![no_std]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod geometry;
pub mod logging;
pub mod sequencer;
pub mod styles;
pub mod widgets;

// Re-export commonly used items
pub use colors::*;
pub use config::*;
pub use sequencer::{GaugeController, SequenceEvent};
