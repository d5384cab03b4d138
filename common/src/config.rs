//! Display layout and demo configuration constants.
//!
//! The backpack exposes five display RAM rows to the digit layer: four numeric
//! digits and a colon row wedged between the second and third digit.
//!
//! # Compile-Time Validation
//!
//! Relationships between the constants are checked with `const` assertions,
//! so an inconsistent layout fails the build instead of misrendering.

// =============================================================================
// Slot Layout
// =============================================================================

/// Total number of buffer slots (4 digits + 1 separator).
pub const SLOT_COUNT: usize = 5;

/// Number of slots that can hold a digit.
pub const NUMERIC_DIGITS: usize = 4;

/// Slot reserved for the colon. Never receives a digit.
pub const SEPARATOR_SLOT: usize = 2;

/// Rightmost (least significant) digit slot.
pub const LAST_SLOT: usize = SLOT_COUNT - 1;

/// Display RAM bytes covered by the buffer (two bytes per slot).
pub const DISPLAY_RAM_BYTES: usize = SLOT_COUNT * 2;

const _: () = assert!(NUMERIC_DIGITS + 1 == SLOT_COUNT);
const _: () = assert!(SEPARATOR_SLOT > 0 && SEPARATOR_SLOT < LAST_SLOT);

// =============================================================================
// Number Formatting
// =============================================================================

/// Smallest base the formatter accepts.
pub const MIN_BASE: u8 = 2;

/// Largest base the formatter accepts (the font stops at `f`).
pub const MAX_BASE: u8 = 16;

/// Fractional digits used by the decimal demo mode.
pub const DECIMAL_FRACTION_DIGITS: u8 = 1;

const _: () = assert!(MIN_BASE < MAX_BASE);
const _: () = assert!((DECIMAL_FRACTION_DIGITS as usize) < NUMERIC_DIGITS);

// =============================================================================
// Demo Timing
// =============================================================================

/// Period of the demo sine wave in milliseconds.
pub const DEMO_PERIOD_MS: u32 = 20_000;

/// Midpoint of the demo waveform.
pub const DEMO_OFFSET: f32 = 20.0;

/// Amplitude of the demo waveform. The sweep crosses zero so the sign slot
/// gets exercised.
pub const DEMO_AMPLITUDE: f32 = 45.0;

/// Colon blink half-period for the counter mode, in milliseconds.
pub const COLON_BLINK_MS: u32 = 500;

const _: () = assert!(DEMO_AMPLITUDE > DEMO_OFFSET);
const _: () = assert!(COLON_BLINK_MS > 0);
