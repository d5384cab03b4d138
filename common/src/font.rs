//! Segment masks for the HT16K33 7-segment backpack.
//!
//! Bit layout of a digit mask (one display RAM byte):
//! ```text
//!     aaa          bit 0 = a    bit 4 = e
//!    f   b         bit 1 = b    bit 5 = f
//!     ggg          bit 2 = c    bit 6 = g
//!    e   c         bit 3 = d    bit 7 = decimal point
//!     ddd  .
//! ```
//!
//! On the separator row bit 1 drives the center colon.

/// Segment masks for digit values 0-15 (`0`-`9`, then `A b C d E F`).
///
/// Bit 7 is always clear; the decimal point is or-ed in by the caller.
pub const SEGMENT_FONT: [u8; 16] = [
    0x3F, // 0
    0x06, // 1
    0x5B, // 2
    0x4F, // 3
    0x66, // 4
    0x6D, // 5
    0x7D, // 6
    0x07, // 7
    0x7F, // 8
    0x6F, // 9
    0x77, // A
    0x7C, // b
    0x39, // C
    0x5E, // d
    0x79, // E
    0x71, // F
];

/// Decimal point flag.
pub const DECIMAL_POINT: u8 = 0x80;

/// Single middle bar used as the minus sign.
pub const MINUS: u8 = 0x40;

/// Glyph filled into every digit slot when a value cannot be shown.
pub const ERROR_GLYPH: u8 = 0x40;

/// Separator row value with the colon lit.
pub const COLON_ON: u16 = 0x02;

/// Blank slot.
pub const BLANK: u8 = 0x00;

// Individual segment bits, used by the preview renderer.
pub const SEG_A: u8 = 1 << 0;
pub const SEG_B: u8 = 1 << 1;
pub const SEG_C: u8 = 1 << 2;
pub const SEG_D: u8 = 1 << 3;
pub const SEG_E: u8 = 1 << 4;
pub const SEG_F: u8 = 1 << 5;
pub const SEG_G: u8 = 1 << 6;

/// Segment mask for a digit value.
///
/// Only the low nibble is used, so out-of-range values wrap instead of
/// panicking. Callers are expected to stay within 0-15.
#[inline]
pub const fn segments_for(digit: u8) -> u8 { SEGMENT_FONT[(digit & 0x0F) as usize] }

/// Inverse of [`segments_for`], ignoring the decimal point.
///
/// Returns `None` for masks that are not in the font (blank, minus, ...).
pub fn digit_for(mask: u8) -> Option<u8> {
    let mask = mask & !DECIMAL_POINT;
    SEGMENT_FONT.iter().position(|&m| m == mask).map(|i| i as u8)
}
