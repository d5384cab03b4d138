//! Digit buffer model.
//!
//! Holds one segment mask per display slot. Slots 0, 1, 3 and 4 are digits,
//! slot 2 is the colon row. Each slot is two bytes wide to mirror the HT16K33
//! display RAM layout (one row = two bytes, low byte first); digit slots only
//! use the low byte.
//!
//! The "skip the separator" rule lives in [`next_digit_slot`] and
//! [`prev_digit_slot`]. The stream writer, the formatter and the error
//! indicator all step through slots with these two helpers.

use core::iter;

use crate::config::{DISPLAY_RAM_BYTES, SEPARATOR_SLOT, SLOT_COUNT};
use crate::font::{BLANK, COLON_ON, DECIMAL_POINT, ERROR_GLYPH, segments_for};

// =============================================================================
// Slot Navigation
// =============================================================================

/// Slot after `position`, stepping over the separator.
///
/// May return [`SLOT_COUNT`] or more when walking off the right edge.
#[inline]
pub const fn next_digit_slot(position: usize) -> usize {
    let next = position + 1;
    if next == SEPARATOR_SLOT { next + 1 } else { next }
}

/// Slot before `position`, stepping over the separator.
///
/// Returns `None` when walking off the left edge.
#[inline]
pub const fn prev_digit_slot(position: usize) -> Option<usize> {
    if position == 0 {
        return None;
    }
    let prev = position - 1;
    if prev == SEPARATOR_SLOT { Some(prev - 1) } else { Some(prev) }
}

/// Digit slots from left to right (0, 1, 3, 4).
pub fn digit_slots() -> impl Iterator<Item = usize> {
    iter::successors(Some(0), |&p| Some(next_digit_slot(p))).take_while(|&p| p < SLOT_COUNT)
}

// =============================================================================
// Digit Buffer
// =============================================================================

/// Raw segment masks for the four digits and the colon.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitBuffer {
    slots: [u16; SLOT_COUNT],
}

impl DigitBuffer {
    /// Create a blank buffer.
    pub const fn new() -> Self { Self { slots: [0; SLOT_COUNT] } }

    /// Store `mask` verbatim at `position`.
    ///
    /// Positions past the last slot are ignored: callers that compute
    /// positions by subtraction must not fault.
    #[inline]
    pub fn write_raw(
        &mut self,
        position: usize,
        mask: u16,
    ) {
        if let Some(slot) = self.slots.get_mut(position) {
            *slot = mask;
        }
    }

    /// Store the font glyph for `digit`, optionally with the decimal point lit.
    #[inline]
    pub fn write_digit(
        &mut self,
        position: usize,
        digit: u8,
        decimal_point: bool,
    ) {
        let mut mask = segments_for(digit);
        if decimal_point {
            mask |= DECIMAL_POINT;
        }
        self.write_raw(position, u16::from(mask));
    }

    /// Light or blank the colon.
    #[inline]
    pub fn draw_colon(
        &mut self,
        on: bool,
    ) {
        self.slots[SEPARATOR_SLOT] = if on { COLON_ON } else { 0 };
    }

    /// Whether the colon is currently lit.
    #[inline]
    pub const fn colon(&self) -> bool { self.slots[SEPARATOR_SLOT] & COLON_ON != 0 }

    /// Blank every slot.
    pub fn clear(&mut self) { self.slots = [0; SLOT_COUNT]; }

    /// Fill every digit slot with the error glyph and blank the colon.
    pub fn show_error(&mut self) {
        self.write_raw(SEPARATOR_SLOT, u16::from(BLANK));
        for slot in digit_slots() {
            self.write_raw(slot, u16::from(ERROR_GLYPH));
        }
    }

    /// Current slot contents, in slot order.
    #[inline]
    pub const fn slots(&self) -> &[u16; SLOT_COUNT] { &self.slots }

    /// Low byte of a slot (the digit mask), or 0 past the end.
    #[inline]
    pub fn mask(
        &self,
        position: usize,
    ) -> u8 {
        self.slots.get(position).map_or(0, |&m| m as u8)
    }

    /// Display RAM image: each slot little-endian, in slot order.
    ///
    /// This is the payload of the block write starting at RAM address 0.
    pub fn to_bytes(&self) -> [u8; DISPLAY_RAM_BYTES] {
        let mut bytes = [0u8; DISPLAY_RAM_BYTES];
        for (chunk, slot) in bytes.chunks_exact_mut(2).zip(self.slots) {
            chunk.copy_from_slice(&slot.to_le_bytes());
        }
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LAST_SLOT;
    use crate::font::MINUS;

    #[test]
    fn test_new_is_blank() {
        assert_eq!(DigitBuffer::new().slots(), &[0; SLOT_COUNT]);
        assert_eq!(DigitBuffer::default(), DigitBuffer::new());
    }

    #[test]
    fn test_next_digit_slot_skips_separator() {
        assert_eq!(next_digit_slot(0), 1);
        assert_eq!(next_digit_slot(1), 3);
        assert_eq!(next_digit_slot(3), 4);
        assert_eq!(next_digit_slot(4), 5);
    }

    #[test]
    fn test_prev_digit_slot_skips_separator() {
        assert_eq!(prev_digit_slot(4), Some(3));
        assert_eq!(prev_digit_slot(3), Some(1));
        assert_eq!(prev_digit_slot(1), Some(0));
        assert_eq!(prev_digit_slot(0), None);
    }

    #[test]
    fn test_digit_slots_order() {
        let slots: Vec<usize> = digit_slots().collect();
        assert_eq!(slots, vec![0, 1, 3, 4]);
    }

    #[test]
    fn test_write_raw_out_of_range_ignored() {
        let mut buffer = DigitBuffer::new();
        buffer.write_raw(5, 0xFF);
        buffer.write_raw(usize::MAX, 0xFF);
        assert_eq!(buffer, DigitBuffer::new());
    }

    #[test]
    fn test_write_digit_with_decimal_point() {
        let mut buffer = DigitBuffer::new();
        buffer.write_digit(0, 7, false);
        buffer.write_digit(LAST_SLOT, 7, true);
        assert_eq!(buffer.mask(0), 0x07);
        assert_eq!(buffer.mask(LAST_SLOT), 0x87);
    }

    #[test]
    fn test_draw_colon() {
        let mut buffer = DigitBuffer::new();
        buffer.draw_colon(true);
        assert!(buffer.colon());
        assert_eq!(buffer.slots()[SEPARATOR_SLOT], 0x02);
        buffer.draw_colon(false);
        assert!(!buffer.colon());
        assert_eq!(buffer.slots()[SEPARATOR_SLOT], 0);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut buffer = DigitBuffer::new();
        buffer.write_digit(1, 3, true);
        buffer.draw_colon(true);
        buffer.clear();
        let once = buffer;
        buffer.clear();
        assert_eq!(buffer, once);
        assert_eq!(buffer.slots(), &[0; SLOT_COUNT]);
    }

    #[test]
    fn test_show_error() {
        let mut buffer = DigitBuffer::new();
        buffer.draw_colon(true);
        buffer.show_error();
        assert_eq!(buffer.slots(), &[0x40, 0x40, 0x00, 0x40, 0x40]);
        let once = buffer;
        buffer.show_error();
        assert_eq!(buffer, once);
    }

    #[test]
    fn test_to_bytes_little_endian() {
        let mut buffer = DigitBuffer::new();
        buffer.write_raw(0, 0x1234);
        buffer.draw_colon(true);
        buffer.write_raw(4, u16::from(MINUS));
        assert_eq!(buffer.to_bytes(), [0x34, 0x12, 0, 0, 0x02, 0, 0, 0, 0x40, 0]);
    }
}
