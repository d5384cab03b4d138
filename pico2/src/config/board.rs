//! Board wiring and loop timing for the Pico 2.
//!
//! Wiring (Adafruit 0.56" backpack on I2C0):
//! - SDA: GPIO4
//! - SCL: GPIO5
//! - Mode button: GPIO15 to GND (internal pull-up)
//!
//! Pin numbers are documentation only; the firmware takes the matching
//! `embassy_rp` peripherals directly.

// =============================================================================
// I2C Bus
// =============================================================================

/// I2C clock. The HT16K33 supports fast mode (400 kHz).
pub const I2C_FREQUENCY_HZ: u32 = 400_000;

/// GPIO used for SDA.
pub const I2C_SDA_PIN: u8 = 4;

/// GPIO used for SCL.
pub const I2C_SCL_PIN: u8 = 5;

// =============================================================================
// Button
// =============================================================================

/// GPIO of the mode button (active-low).
pub const BUTTON_PIN: u8 = 15;

/// Debounce duration in milliseconds.
pub const DEBOUNCE_MS: u64 = 50;

// =============================================================================
// Loop Timing
// =============================================================================

/// Time between display refreshes. A 10-byte I2C write at 400 kHz takes
/// well under a millisecond, so the bus is mostly idle.
pub const FRAME_PERIOD_MS: u64 = 50;

/// Interval between frame statistics log lines.
pub const STATS_PERIOD_MS: u64 = 5_000;

const _: () = assert!(I2C_FREQUENCY_HZ <= 400_000);
const _: () = assert!(DEBOUNCE_MS < FRAME_PERIOD_MS * 2);
const _: () = assert!(STATS_PERIOD_MS > FRAME_PERIOD_MS);
