//! HT16K33 device constants.
//!
//! Command bytes follow the HT16K33 datasheet (Holtek, rev 1.10):
//!
//! | Command | Byte | Notes |
//! |---------|------|-------|
//! | System setup | `0x20 \| on` | bit 0 starts the oscillator |
//! | Display setup | `0x80 \| blink << 1 \| on` | blink rate in bits 1-2 |
//! | Dimming | `0xE0 \| level` | 16 duty levels |
//! | Display RAM | `0x00 + row * 2` | data pointer for block writes |

// =============================================================================
// Addressing
// =============================================================================

/// Address with all backpack jumpers open.
pub const DEFAULT_ADDRESS: u8 = 0x70;

/// Highest address selectable with the three address jumpers.
pub const MAX_ADDRESS: u8 = 0x77;

/// Whether `address` can be selected on the backpack.
#[inline]
pub const fn is_valid_address(address: u8) -> bool { address >= DEFAULT_ADDRESS && address <= MAX_ADDRESS }

// =============================================================================
// Commands
// =============================================================================

/// System setup register.
pub const CMD_SYSTEM_SETUP: u8 = 0x20;

/// Oscillator enable bit of the system setup register.
pub const OSCILLATOR_ON: u8 = 0x01;

/// Display setup register.
pub const CMD_DISPLAY_SETUP: u8 = 0x80;

/// Display enable bit of the display setup register.
pub const DISPLAY_ON: u8 = 0x01;

/// Dimming register.
pub const CMD_BRIGHTNESS: u8 = 0xE0;

/// Display RAM address of the first digit row.
pub const DISPLAY_RAM_START: u8 = 0x00;

/// Display RAM address of the colon row (row 2).
pub const COLON_RAM_ADDRESS: u8 = 0x04;

// =============================================================================
// Defaults
// =============================================================================

/// Highest dimming level.
pub const MAX_BRIGHTNESS: u8 = 15;

/// Brightness applied by `begin()`.
pub const DEFAULT_BRIGHTNESS: u8 = MAX_BRIGHTNESS;

const _: () = assert!(is_valid_address(DEFAULT_ADDRESS));
const _: () = assert!(DEFAULT_BRIGHTNESS <= MAX_BRIGHTNESS);
const _: () = assert!(COLON_RAM_ADDRESS == DISPLAY_RAM_START + 2 * segment_common::config::SEPARATOR_SLOT as u8);
