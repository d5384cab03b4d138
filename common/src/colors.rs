//! Color constants for the segment preview.
//!
//! Rgb565 is used throughout so the same drawing code can target a real SPI
//! panel or the simulator without conversion.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Background behind the digits.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Caption text.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Lit segment. Close to the red of the 0.56" backpack LEDs.
/// RGB565: (31, 8, 2).
pub const SEGMENT_ON: Rgb565 = Rgb565::new(31, 8, 2);

/// Unlit segment, drawn faintly so the digit outline stays visible.
/// RGB565: (5, 4, 2) - roughly 15% brightness.
pub const SEGMENT_OFF: Rgb565 = Rgb565::new(5, 4, 2);
