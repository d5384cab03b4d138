//! Decoding the digit buffer back into readable text.
//!
//! Used for simulator captions and for asserting on rendered output. The
//! mapping is the inverse of the font where that is unambiguous:
//!
//! | Mask | Text |
//! |------|------|
//! | font glyph | `0`-`9`, `A b C d E F` |
//! | `0x40` | `-` (minus sign and error glyph look the same) |
//! | `0x00` | space |
//! | anything else | `?` |
//!
//! A lit decimal point appends `.` and a lit colon appears as `:`.

use heapless::String;

use crate::buffer::DigitBuffer;
use crate::config::{SEPARATOR_SLOT, SLOT_COUNT};
use crate::font::{BLANK, DECIMAL_POINT, MINUS, digit_for};

/// Maximum decoded length: every digit with a point, plus the colon.
pub const TEXT_LEN: usize = SLOT_COUNT * 2;

/// Character shown for each digit value.
const DIGIT_CHARS: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'b', 'C', 'd', 'E', 'F',
];

/// Character for a single digit mask, ignoring the decimal point.
pub fn mask_char(mask: u8) -> char {
    match mask & !DECIMAL_POINT {
        BLANK => ' ',
        MINUS => '-',
        glyph => digit_for(glyph).map_or('?', |d| DIGIT_CHARS[d as usize]),
    }
}

/// Decode the whole buffer, left to right.
pub fn buffer_text(buffer: &DigitBuffer) -> String<TEXT_LEN> {
    let mut text = String::new();
    for position in 0..SLOT_COUNT {
        if position == SEPARATOR_SLOT {
            if buffer.colon() {
                text.push(':').ok();
            }
            continue;
        }
        let mask = buffer.mask(position);
        text.push(mask_char(mask)).ok();
        if mask & DECIMAL_POINT != 0 {
            text.push('.').ok();
        }
    }
    text
}
