//! HT16K33 backpack library - testable modules for the Pico 2 firmware.
//!
//! This library contains the bus driver and board configuration that can be
//! tested on the host machine. The binary (`main.rs`) uses this library and
//! adds the embassy-specific code.
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test -p ht16k33-pico2 --lib --target x86_64-unknown-linux-gnu  # Linux/macOS
//! cargo test -p ht16k33-pico2 --lib --target x86_64-pc-windows-msvc    # Windows
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

// Configuration
pub mod config;

// Bus driver
pub mod ht16k33;

pub use ht16k33::{BlinkRate, Ht16k33};
