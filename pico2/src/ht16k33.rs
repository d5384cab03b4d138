//! HT16K33 LED driver over `embedded-hal` I2C.
//!
//! The driver only moves bytes: the digit layout lives in
//! [`segment_common::DigitBuffer`], which is shipped verbatim as the display RAM
//! image. All methods are synchronous and return the bus error unchanged, so
//! the caller decides whether a failed frame is worth reporting.
//!
//! # Display RAM Frame
//!
//! ```text
//! [0x00] [d0 lo] [d0 hi] [d1 lo] [d1 hi] [colon lo] [colon hi] [d3 lo] [d3 hi] [d4 lo] [d4 hi]
//!   ^ RAM pointer
//! ```

use embedded_hal::i2c::I2c;
use heapless::Vec;
use segment_common::config::{DISPLAY_RAM_BYTES, SEPARATOR_SLOT};
use segment_common::{DigitBuffer, SevenSegment};

use crate::config::device::{
    CMD_BRIGHTNESS,
    CMD_DISPLAY_SETUP,
    CMD_SYSTEM_SETUP,
    COLON_RAM_ADDRESS,
    DEFAULT_BRIGHTNESS,
    DISPLAY_ON,
    DISPLAY_RAM_START,
    MAX_BRIGHTNESS,
    OSCILLATOR_ON,
};

/// Bytes in one display RAM write: pointer + RAM image.
pub const FRAME_LEN: usize = DISPLAY_RAM_BYTES + 1;

// =============================================================================
// Blink Rate
// =============================================================================

/// Hardware blink rate of the whole display.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[repr(u8)]
pub enum BlinkRate {
    /// Steady on.
    #[default]
    Off = 0,
    /// 2 Hz.
    TwoHz = 1,
    /// 1 Hz.
    OneHz = 2,
    /// 0.5 Hz.
    HalfHz = 3,
}

impl BlinkRate {
    /// Map a raw rate (0-3). Anything else turns blinking off.
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            1 => Self::TwoHz,
            2 => Self::OneHz,
            3 => Self::HalfHz,
            _ => Self::Off,
        }
    }

    /// Display setup byte for this rate, display enabled.
    #[inline]
    pub const fn command(self) -> u8 { CMD_DISPLAY_SETUP | DISPLAY_ON | ((self as u8) << 1) }
}

// =============================================================================
// Driver
// =============================================================================

/// HT16K33 on an I2C bus.
pub struct Ht16k33<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> Ht16k33<I2C> {
    /// Wrap a bus. No bytes are sent until [`begin`](Self::begin).
    pub const fn new(
        i2c: I2C,
        address: u8,
    ) -> Self {
        Self { i2c, address }
    }

    /// Give the bus back.
    pub fn release(self) -> I2C { self.i2c }

    /// 7-bit device address.
    #[inline]
    pub const fn address(&self) -> u8 { self.address }

    /// Start the oscillator, enable the display without blinking and set full
    /// brightness.
    pub fn begin(&mut self) -> Result<(), I2C::Error> {
        self.command(CMD_SYSTEM_SETUP | OSCILLATOR_ON)?;
        self.set_blink_rate(BlinkRate::Off)?;
        self.set_brightness(DEFAULT_BRIGHTNESS)
    }

    /// Stop the oscillator (standby).
    pub fn end(&mut self) -> Result<(), I2C::Error> { self.command(CMD_SYSTEM_SETUP) }

    /// Set the dimming level, clamped to 0-15.
    pub fn set_brightness(
        &mut self,
        level: u8,
    ) -> Result<(), I2C::Error> {
        self.command(CMD_BRIGHTNESS | level.min(MAX_BRIGHTNESS))
    }

    /// Set the blink rate. The display stays enabled.
    pub fn set_blink_rate(
        &mut self,
        rate: BlinkRate,
    ) -> Result<(), I2C::Error> {
        self.command(rate.command())
    }

    /// Ship the whole buffer in one block write.
    pub fn write_display(
        &mut self,
        buffer: &DigitBuffer,
    ) -> Result<(), I2C::Error> {
        let mut frame: Vec<u8, FRAME_LEN> = Vec::new();
        frame.push(DISPLAY_RAM_START).ok();
        frame.extend_from_slice(&buffer.to_bytes()).ok();
        self.i2c.write(self.address, &frame)
    }

    /// Ship only the colon row.
    pub fn write_colon(
        &mut self,
        buffer: &DigitBuffer,
    ) -> Result<(), I2C::Error> {
        let [lo, hi] = buffer.slots()[SEPARATOR_SLOT].to_le_bytes();
        self.i2c.write(self.address, &[COLON_RAM_ADDRESS, lo, hi])
    }

    /// Ship the buffer of `display`.
    #[inline]
    pub fn flush(
        &mut self,
        display: &SevenSegment,
    ) -> Result<(), I2C::Error> {
        self.write_display(display.buffer())
    }

    fn command(
        &mut self,
        command: u8,
    ) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, &[command])
    }
}

// =============================================================================
// Tests
// =============================================================================
