//! Mode button with time-based debounce.

use embassy_time::{Duration, Instant};

use crate::config::DEBOUNCE_MS;

/// Debounced edge detector for an active-low button.
pub struct ButtonState {
    was_pressed: bool,
    last_change: Option<Instant>,
}

impl ButtonState {
    pub const fn new() -> Self {
        Self {
            was_pressed: false,
            last_change: None,
        }
    }

    /// True once per press. Pass `input.is_low()`.
    ///
    /// Level changes inside the debounce window are ignored, so contact
    /// bounce after the first edge cannot trigger a second press.
    pub fn just_pressed(
        &mut self,
        is_low: bool,
    ) -> bool {
        if is_low == self.was_pressed {
            return false;
        }

        if let Some(last) = self.last_change
            && last.elapsed() < Duration::from_millis(DEBOUNCE_MS)
        {
            return false;
        }

        self.was_pressed = is_low;
        self.last_change = Some(Instant::now());
        is_low
    }
}

impl Default for ButtonState {
    fn default() -> Self { Self::new() }
}
