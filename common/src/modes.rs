//! Demo display modes, cycled with a button on the firmware.
//!
//! # Modes
//!
//! - [`Mode::Decimal`]: the demo value with one fractional digit
//! - [`Mode::Hex`]: elapsed seconds in base 16
//! - [`Mode::Counter`]: elapsed seconds through the stream writer
//! - [`Mode::Clock`]: elapsed `mm:ss` with a blinking colon

use crate::config::{COLON_BLINK_MS, DECIMAL_FRACTION_DIGITS};
use crate::demo::DemoSample;
use crate::display::SevenSegment;

/// Available display modes.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Sweeping value, base 10, one fractional digit.
    #[default]
    Decimal,

    /// Elapsed seconds in hexadecimal.
    Hex,

    /// Elapsed seconds streamed character by character.
    Counter,

    /// Elapsed minutes and seconds with the colon.
    Clock,
}

impl Mode {
    /// Cycle to the next mode (Decimal → Hex → Counter → Clock → Decimal).
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Self::Decimal => Self::Hex,
            Self::Hex => Self::Counter,
            Self::Counter => Self::Clock,
            Self::Clock => Self::Decimal,
        }
    }

    /// Short name for logs and captions.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Decimal => "decimal",
            Self::Hex => "hex",
            Self::Counter => "counter",
            Self::Clock => "clock",
        }
    }

    /// Render `sample` into `display` in this mode.
    pub fn render(
        self,
        display: &mut SevenSegment,
        sample: &DemoSample,
    ) {
        let seconds = sample.seconds();
        match self {
            Self::Decimal => display.format(f64::from(sample.value), DECIMAL_FRACTION_DIGITS, 10),
            Self::Hex => display.print_number(i64::from(seconds), 16),
            Self::Counter => {
                // Spaces are dropped by the stream writer, so blank first
                display.clear();
                display.reset_cursor();
                display.print_line(format_args!("{:>4}", seconds % 10_000));
            }
            Self::Clock => {
                display.clear();
                display.reset_cursor();
                display.print_line(format_args!("{:02}{:02}", (seconds / 60) % 100, seconds % 60));
                display.draw_colon((sample.elapsed_ms / COLON_BLINK_MS).is_multiple_of(2));
            }
        }
    }
}
