//! Async tasks for the backpack firmware.
//!
//! - `demo`: publishes the demo waveform for the render loop

pub mod demo;

pub use demo::{DEMO_SAMPLES, demo_task};
