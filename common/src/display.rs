//! Per-display state: the digit buffer plus the stream cursor.
//!
//! [`SevenSegment`] offers two ways of filling the buffer:
//!
//! - **Stream writer** ([`SevenSegment::write_char`]): teletype-style, one
//!   character at a time, decimal digits only. Non-digits are dropped but still
//!   advance the cursor so columns line up with the physical layout. `\n` and
//!   `\r` return the cursor to the first digit. Also reachable through
//!   [`core::fmt::Write`], so `write!(display, "{:04}", n)` works.
//! - **Numeric formatter** ([`SevenSegment::format`]): a whole signed value in
//!   any base from 2 to 16 with optional fractional digits, right aligned.
//!
//! # Formatter Algorithm
//!
//! 1. Negative values reserve the leftmost used slot for a minus sign, leaving
//!    three digits.
//! 2. The value is scaled by `base^fractional_digits` and rounded half up.
//! 3. While the scaled integer does not fit, one fractional digit is dropped.
//!    If no fractional digits are left to drop, the value is unrenderable and
//!    the error glyph is shown instead.
//! 4. Digits are emitted right to left starting at slot 4, stepping over the
//!    colon slot (which is blanked), with the decimal point on the first
//!    integer digit. At least one integer digit is always emitted.
//! 5. The sign goes left of the digits and everything further left is blanked.
//!
//! Nothing here returns an error: a passive display has no feedback channel,
//! so every input leaves the buffer in a well-defined state.

use core::fmt;

use crate::buffer::{DigitBuffer, next_digit_slot, prev_digit_slot};
use crate::config::{LAST_SLOT, MAX_BASE, MIN_BASE, NUMERIC_DIGITS, SEPARATOR_SLOT, SLOT_COUNT};
use crate::font::{BLANK, MINUS};

/// One 4-digit display: buffer plus stream cursor.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SevenSegment {
    buffer: DigitBuffer,
    /// Next slot for the stream writer. Saturates at `SLOT_COUNT`.
    cursor: usize,
}

impl SevenSegment {
    /// Create a blank display with the cursor on the first digit.
    pub const fn new() -> Self {
        Self {
            buffer: DigitBuffer::new(),
            cursor: 0,
        }
    }

    /// Buffer contents for the transport layer.
    #[inline]
    pub const fn buffer(&self) -> &DigitBuffer { &self.buffer }

    /// Current stream cursor.
    #[inline]
    pub const fn cursor(&self) -> usize { self.cursor }

    // =========================================================================
    // Buffer Mutators
    // =========================================================================

    /// Blank every slot. The cursor is left alone.
    #[inline]
    pub fn clear(&mut self) { self.buffer.clear(); }

    /// See [`DigitBuffer::write_raw`].
    #[inline]
    pub fn write_raw(
        &mut self,
        position: usize,
        mask: u16,
    ) {
        self.buffer.write_raw(position, mask);
    }

    /// See [`DigitBuffer::write_digit`].
    #[inline]
    pub fn write_digit(
        &mut self,
        position: usize,
        digit: u8,
        decimal_point: bool,
    ) {
        self.buffer.write_digit(position, digit, decimal_point);
    }

    /// Light or blank the colon.
    #[inline]
    pub fn draw_colon(
        &mut self,
        on: bool,
    ) {
        self.buffer.draw_colon(on);
    }

    /// Fill every digit slot with the error glyph.
    #[inline]
    pub fn show_error(&mut self) { self.buffer.show_error(); }

    // =========================================================================
    // Stream Writer
    // =========================================================================

    /// Feed one character to the stream writer.
    ///
    /// Returns the number of digits written (0 or 1).
    pub fn write_char(
        &mut self,
        c: u8,
    ) -> usize {
        if c == b'\n' || c == b'\r' {
            self.cursor = 0;
            return 0;
        }

        let written = if c.is_ascii_digit() {
            self.buffer.write_digit(self.cursor, c - b'0', false);
            1
        } else {
            0
        };

        self.cursor = next_digit_slot(self.cursor).min(SLOT_COUNT);
        written
    }

    /// Feed every byte of `s` to the stream writer.
    ///
    /// Returns the number of digits written.
    pub fn write_bytes(
        &mut self,
        s: &[u8],
    ) -> usize {
        s.iter().map(|&c| self.write_char(c)).sum()
    }

    /// Return the cursor to the first digit.
    #[inline]
    pub fn reset_cursor(&mut self) { self.cursor = 0; }

    /// Stream `args` and reset the cursor afterwards.
    pub fn print_line(
        &mut self,
        args: fmt::Arguments<'_>,
    ) {
        // Writing into the buffer cannot fail
        let _ = fmt::Write::write_fmt(self, args);
        self.reset_cursor();
    }

    // =========================================================================
    // Numeric Formatter
    // =========================================================================

    /// Render an integer right aligned in `base`.
    #[inline]
    pub fn print_number(
        &mut self,
        value: i64,
        base: u8,
    ) {
        self.format(value as f64, 0, base);
    }

    /// Render `value` right aligned with up to `fractional_digits` digits
    /// after the point, in `base` (2-16).
    ///
    /// Fractional digits are dropped from the right until the value fits.
    /// Values that do not fit even without a fractional part, non-finite
    /// values, and bases outside 2-16 show the error glyph.
    pub fn format(
        &mut self,
        value: f64,
        fractional_digits: u8,
        base: u8,
    ) {
        if !(MIN_BASE..=MAX_BASE).contains(&base) || !value.is_finite() {
            self.show_error();
            return;
        }

        let mut available = NUMERIC_DIGITS as u32;
        let negative = value < 0.0;
        let magnitude = if negative {
            available -= 1;
            -value
        } else {
            value
        };

        // Keep one digit left of the point in view
        let mut fractional = u32::from(fractional_digits).min(available - 1);

        let base_f = f64::from(base);
        let mut scale = 1.0f64;
        for _ in 0..fractional {
            scale *= base_f;
        }

        let limit = u64::from(base).pow(available);
        let mut display_number = round_scaled(magnitude, scale);

        while display_number >= limit {
            if fractional == 0 {
                // Decimal point would fall off the right edge
                self.show_error();
                return;
            }
            fractional -= 1;
            scale /= base_f;
            display_number = round_scaled(magnitude, scale);
        }

        let base = u64::from(base);
        let mut slot = Some(LAST_SLOT);

        if display_number == 0 {
            self.buffer.write_digit(LAST_SLOT, 0, false);
            slot = self.step_left(LAST_SLOT);
        } else {
            let mut emitted = 0u32;
            while display_number != 0 || emitted <= fractional {
                let decimal_point = fractional != 0 && emitted == fractional;
                if let Some(position) = slot {
                    self.buffer
                        .write_digit(position, (display_number % base) as u8, decimal_point);
                    slot = self.step_left(position);
                }
                display_number /= base;
                emitted += 1;
            }
        }

        if negative && let Some(position) = slot {
            self.buffer.write_raw(position, u16::from(MINUS));
            slot = self.step_left(position);
        }

        // Blank everything left of the output, colon row included
        while let Some(position) = slot {
            self.buffer.write_raw(position, u16::from(BLANK));
            slot = position.checked_sub(1);
        }
    }

    /// Move one digit slot to the left, blanking the colon row when crossing it.
    fn step_left(
        &mut self,
        position: usize,
    ) -> Option<usize> {
        let prev = prev_digit_slot(position)?;
        if prev + 1 == SEPARATOR_SLOT {
            self.buffer.write_raw(SEPARATOR_SLOT, u16::from(BLANK));
        }
        Some(prev)
    }
}

impl fmt::Write for SevenSegment {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        self.write_bytes(s.as_bytes());
        Ok(())
    }
}

/// `trunc(magnitude * scale + 0.5)`: round half up for non-negative input.
///
/// The float-to-int cast saturates, so huge magnitudes stay `>= limit` and
/// fall into the overflow path.
#[inline]
fn round_scaled(
    magnitude: f64,
    scale: f64,
) -> u64 {
    (magnitude * scale + 0.5) as u64
}

#[cfg(test)]
mod tests {
    use core::fmt::Write;

    use super::*;
    use crate::font::{DECIMAL_POINT, ERROR_GLYPH, digit_for, segments_for};

    const ERROR: [u16; SLOT_COUNT] = [0x40, 0x40, 0x00, 0x40, 0x40];

    fn d(digit: u8) -> u16 { u16::from(segments_for(digit)) }

    fn dp(digit: u8) -> u16 { u16::from(segments_for(digit) | DECIMAL_POINT) }

    const M: u16 = MINUS as u16;

    fn formatted(
        value: f64,
        fractional_digits: u8,
        base: u8,
    ) -> [u16; SLOT_COUNT] {
        let mut display = SevenSegment::new();
        display.format(value, fractional_digits, base);
        *display.buffer().slots()
    }

    /// Read back a base-10 integer rendering.
    fn decode(slots: &[u16; SLOT_COUNT]) -> Option<i64> {
        let mut value = 0i64;
        let mut negative = false;
        let mut seen_digit = false;
        for (i, &slot) in slots.iter().enumerate() {
            if i == SEPARATOR_SLOT {
                assert_eq!(slot, 0, "separator must be blank");
                continue;
            }
            let mask = slot as u8;
            if mask == 0 {
                assert!(!seen_digit, "blank after a digit");
                continue;
            }
            if mask == MINUS && !seen_digit {
                negative = true;
                continue;
            }
            value = value * 10 + i64::from(digit_for(mask)?);
            seen_digit = true;
        }
        Some(if negative { -value } else { value })
    }

    // -------------------------------------------------------------------------
    // Formatter
    // -------------------------------------------------------------------------

    #[test]
    fn test_format_zero() {
        assert_eq!(formatted(0.0, 0, 10), [0, 0, 0, 0, d(0)]);
    }

    #[test]
    fn test_format_zero_ignores_fraction() {
        assert_eq!(formatted(0.0, 2, 10), [0, 0, 0, 0, d(0)]);
    }

    #[test]
    fn test_format_negative_single_digit() {
        assert_eq!(formatted(-5.0, 0, 10), [0, 0, 0, M, d(5)]);
    }

    #[test]
    fn test_format_negative_two_digits_skips_separator() {
        assert_eq!(formatted(-12.0, 0, 10), [0, M, 0, d(1), d(2)]);
    }

    #[test]
    fn test_format_four_digits() {
        let slots = formatted(1234.0, 0, 10);
        assert_eq!(slots, [d(1), d(2), 0, d(3), d(4)]);
        assert!(slots.iter().all(|&s| s as u8 & DECIMAL_POINT == 0));
    }

    #[test]
    fn test_format_fraction_fits_without_reduction() {
        // 12.345 * 100 evaluates to exactly 1234.5 in f64, rounding up to 1235
        assert_eq!(formatted(12.345, 2, 10), [d(1), dp(2), 0, d(3), d(5)]);
    }

    #[test]
    fn test_format_overflow_drops_one_fraction_digit() {
        // 12345.6 does not fit; 1234.56 -> 1235 with one fractional digit
        assert_eq!(formatted(123.456, 2, 10), [d(1), d(2), 0, dp(3), d(5)]);
    }

    #[test]
    fn test_format_overflow_drops_all_fraction_digits() {
        assert_eq!(formatted(9876.4, 3, 10), [d(9), d(8), 0, d(7), d(6)]);
    }

    #[test]
    fn test_format_total_overflow_shows_error() {
        assert_eq!(formatted(99999.0, 0, 10), ERROR);
        assert_eq!(formatted(10000.0, 2, 10), ERROR);
    }

    #[test]
    fn test_format_rounding_into_overflow() {
        // 9999.5 rounds up to 10000, which no longer fits
        assert_eq!(formatted(9999.5, 0, 10), ERROR);
        assert_eq!(formatted(9999.4, 0, 10), [d(9), d(9), 0, d(9), d(9)]);
    }

    #[test]
    fn test_format_negative_limits() {
        assert_eq!(formatted(-999.0, 0, 10), [M, d(9), 0, d(9), d(9)]);
        assert_eq!(formatted(-1000.0, 0, 10), ERROR);
    }

    #[test]
    fn test_format_negative_fraction() {
        // -3.14159 with 3 requested digits: only 3 slots left after the sign
        assert_eq!(formatted(-3.14159, 3, 10), [M, dp(3), 0, d(1), d(4)]);
    }

    #[test]
    fn test_format_leading_zero_before_point() {
        assert_eq!(formatted(0.5, 2, 10), [0, dp(0), 0, d(5), d(0)]);
        assert_eq!(formatted(0.05, 1, 10), [0, 0, 0, dp(0), d(1)]);
    }

    #[test]
    fn test_format_fraction_clamped_to_visible_digits() {
        // Five requested fractional digits cannot all be shown next to the
        // integer digit; the point stays visible
        assert_eq!(formatted(0.001, 5, 10), [dp(0), d(0), 0, d(0), d(1)]);
    }

    #[test]
    fn test_format_rounds_half_up() {
        assert_eq!(formatted(2.5, 0, 10), [0, 0, 0, 0, d(3)]);
        assert_eq!(formatted(3.5, 0, 10), [0, 0, 0, 0, d(4)]);
        assert_eq!(formatted(-2.5, 0, 10), [0, 0, 0, M, d(3)]);
    }

    #[test]
    fn test_format_negative_rounding_to_zero_keeps_sign() {
        assert_eq!(formatted(-0.0001, 0, 10), [0, 0, 0, M, d(0)]);
    }

    #[test]
    fn test_format_negative_zero_has_no_sign() {
        assert_eq!(formatted(-0.0, 0, 10), [0, 0, 0, 0, d(0)]);
    }

    #[test]
    fn test_format_hex() {
        assert_eq!(formatted(f64::from(0xBEEF_u32), 0, 16), [d(0xB), d(0xE), 0, d(0xE), d(0xF)]);
        assert_eq!(formatted(255.0, 0, 16), [0, 0, 0, d(0xF), d(0xF)]);
        assert_eq!(formatted(65536.0, 0, 16), ERROR);
    }

    #[test]
    fn test_format_hex_fraction() {
        // 1.5 in base 16 is 1.8
        assert_eq!(formatted(1.5, 1, 16), [0, 0, 0, dp(1), d(8)]);
    }

    #[test]
    fn test_format_binary() {
        assert_eq!(formatted(5.0, 0, 2), [0, d(1), 0, d(0), d(1)]);
        assert_eq!(formatted(15.0, 0, 2), [d(1), d(1), 0, d(1), d(1)]);
        assert_eq!(formatted(16.0, 0, 2), ERROR);
    }

    #[test]
    fn test_format_invalid_base_shows_error() {
        assert_eq!(formatted(1.0, 0, 0), ERROR);
        assert_eq!(formatted(1.0, 0, 1), ERROR);
        assert_eq!(formatted(1.0, 0, 17), ERROR);
    }

    #[test]
    fn test_format_non_finite_shows_error() {
        assert_eq!(formatted(f64::NAN, 0, 10), ERROR);
        assert_eq!(formatted(f64::INFINITY, 0, 10), ERROR);
        assert_eq!(formatted(f64::NEG_INFINITY, 1, 10), ERROR);
    }

    #[test]
    fn test_format_huge_value_shows_error() {
        assert_eq!(formatted(1.0e30, 3, 10), ERROR);
    }

    #[test]
    fn test_format_blanks_colon_and_stale_digits() {
        let mut display = SevenSegment::new();
        display.format(8888.0, 0, 10);
        display.draw_colon(true);
        display.format(7.0, 0, 10);
        assert_eq!(display.buffer().slots(), &[0, 0, 0, 0, d(7)]);
    }

    #[test]
    fn test_format_error_then_recover() {
        let mut display = SevenSegment::new();
        display.format(123_456.0, 0, 10);
        assert_eq!(display.buffer().mask(0), ERROR_GLYPH);
        display.format(42.0, 0, 10);
        assert_eq!(display.buffer().slots(), &[0, 0, 0, d(4), d(2)]);
    }

    #[test]
    fn test_print_number() {
        let mut display = SevenSegment::new();
        display.print_number(-42, 10);
        assert_eq!(display.buffer().slots(), &[0, M, 0, d(4), d(2)]);
        display.print_number(0x1F, 16);
        assert_eq!(display.buffer().slots(), &[0, 0, 0, d(1), d(0xF)]);
    }

    #[test]
    fn test_format_round_trip_base10() {
        for v in (-999..=9999).step_by(7).chain([-999, -1, 0, 1, 9999]) {
            let slots = formatted(f64::from(v), 0, 10);
            assert_eq!(decode(&slots), Some(i64::from(v)), "value {v}");
        }
    }

    // -------------------------------------------------------------------------
    // Stream Writer
    // -------------------------------------------------------------------------

    #[test]
    fn test_stream_four_digits_skip_separator() {
        let mut display = SevenSegment::new();
        assert_eq!(display.write_bytes(b"1234"), 4);
        assert_eq!(display.buffer().slots(), &[d(1), d(2), 0, d(3), d(4)]);
    }

    #[test]
    fn test_stream_newline_resets_cursor() {
        let mut display = SevenSegment::new();
        display.write_bytes(b"12");
        assert_eq!(display.cursor(), 3);
        assert_eq!(display.write_char(b'\n'), 0);
        assert_eq!(display.cursor(), 0);
        display.write_bytes(b"34");
        assert_eq!(display.buffer().slots(), &[d(3), d(4), 0, 0, 0]);
    }

    #[test]
    fn test_stream_carriage_return_resets_cursor() {
        let mut display = SevenSegment::new();
        display.write_bytes(b"9\r8");
        assert_eq!(display.buffer().mask(0), segments_for(8));
        assert_eq!(display.cursor(), 1);
    }

    #[test]
    fn test_stream_non_digit_advances_cursor() {
        let mut display = SevenSegment::new();
        assert_eq!(display.write_bytes(b"1x:4"), 2);
        assert_eq!(display.buffer().slots(), &[d(1), 0, 0, 0, d(4)]);
    }

    #[test]
    fn test_stream_never_writes_separator() {
        let mut display = SevenSegment::new();
        display.draw_colon(true);
        display.write_bytes(b"12\n34\n5678");
        assert!(display.buffer().colon());
    }

    #[test]
    fn test_stream_overflow_dropped() {
        let mut display = SevenSegment::new();
        assert_eq!(display.write_bytes(b"123456"), 6);
        assert_eq!(display.buffer().slots(), &[d(1), d(2), 0, d(3), d(4)]);
        assert_eq!(display.cursor(), SLOT_COUNT);
    }

    #[test]
    fn test_reset_cursor() {
        let mut display = SevenSegment::new();
        display.write_bytes(b"12");
        display.reset_cursor();
        display.write_char(b'7');
        assert_eq!(display.buffer().mask(0), segments_for(7));
    }

    #[test]
    fn test_fmt_write() {
        let mut display = SevenSegment::new();
        write!(display, "{:04}", 42).unwrap();
        assert_eq!(display.buffer().slots(), &[d(0), d(0), 0, d(4), d(2)]);
    }

    #[test]
    fn test_print_line_resets_cursor() {
        let mut display = SevenSegment::new();
        display.print_line(format_args!("{:02}{:02}", 12, 5));
        assert_eq!(display.cursor(), 0);
        assert_eq!(display.buffer().slots(), &[d(1), d(2), 0, d(0), d(5)]);
    }

    #[test]
    fn test_clear_keeps_cursor() {
        let mut display = SevenSegment::new();
        display.write_bytes(b"12");
        display.clear();
        assert_eq!(display.cursor(), 3);
        assert_eq!(display.buffer(), &DigitBuffer::new());
    }
}
