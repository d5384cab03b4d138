//! Deterministic demo waveform.
//!
//! Shared by the firmware demo task and the simulator so both show the same
//! sequence. The value is a slow sine sweep that crosses zero, which exercises
//! the sign slot, the decimal point and the overflow path of the formatter.

use core::f32::consts::TAU;

use micromath::F32;

use crate::config::{DEMO_AMPLITUDE, DEMO_OFFSET, DEMO_PERIOD_MS};

/// One demo sample.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DemoSample {
    /// Sweeping value in `DEMO_OFFSET ± DEMO_AMPLITUDE`.
    pub value: f32,
    /// Milliseconds since the demo started.
    pub elapsed_ms: u32,
}

impl DemoSample {
    /// Sample at `elapsed_ms` since start.
    pub fn at(elapsed_ms: u32) -> Self {
        let phase = (elapsed_ms % DEMO_PERIOD_MS) as f32 / DEMO_PERIOD_MS as f32 * TAU;
        Self {
            value: DEMO_OFFSET + DEMO_AMPLITUDE * F32(phase).sin().0,
            elapsed_ms,
        }
    }

    /// Whole seconds since start.
    #[inline]
    pub const fn seconds(&self) -> u32 { self.elapsed_ms / 1000 }
}
