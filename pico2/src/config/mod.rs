//! Application configuration.
//!
//! - `board`: I2C bus, pin mapping and loop timing for the Pico 2
//! - `device`: HT16K33 addressing, command bytes and defaults

pub mod board;
pub mod device;

// Re-export at config level for convenience
pub use board::{
    BUTTON_PIN,
    DEBOUNCE_MS,
    FRAME_PERIOD_MS,
    I2C_FREQUENCY_HZ,
    I2C_SCL_PIN,
    I2C_SDA_PIN,
    STATS_PERIOD_MS,
};
pub use device::{DEFAULT_ADDRESS, DEFAULT_BRIGHTNESS, MAX_BRIGHTNESS, is_valid_address};
