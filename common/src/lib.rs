//! Rendering engine for a 4-digit 7-segment display driven by an HT16K33.
//!
//! This crate contains the platform-agnostic code shared between the simulator
//! and the Pico 2 firmware:
//!
//! - [`font`]: Segment masks for hexadecimal digits and the fixed glyphs
//! - [`buffer`]: The 5-slot digit buffer (4 digits + colon) shipped to the chip
//! - [`display`]: [`SevenSegment`], the per-display value with stream writer
//!   and numeric formatter
//! - [`config`]: Slot layout and demo timing constants
//! - [`text`]: Decoding the buffer back into readable text
//! - [`modes`]: Demo display modes cycled by the firmware button
//! - [`demo`]: Deterministic demo waveform
//! - [`preview`]: Drawing the buffer as 7-segment glyphs with `embedded-graphics`
//! - [`colors`]: RGB565 colors for the preview
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` outside of tests. Nothing here touches the bus; the
//! HT16K33 driver lives in the firmware crate and only reads the buffer.
//!
//! # Testing
//!
//! ```bash
//! cargo test -p segment-common
//! ```

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod buffer;
pub mod colors;
pub mod config;
pub mod demo;
pub mod display;
pub mod font;
pub mod modes;
pub mod preview;
pub mod text;

// Re-export commonly used items
pub use buffer::DigitBuffer;
pub use display::SevenSegment;
pub use modes::Mode;
