//! [`Board`] implementation over `embedded-hal` digital pins.
//!
//! Pin direction, pull resistors and clock setup belong to the target HAL; hand the
//! already-typed pins to [`PinBoard::new`]. [`Board::configure`] then only has to put
//! the LEDs into a known state.

use crate::board::Board;
use crate::pattern::KeyPattern;
use embedded_hal::digital::{InputPin, OutputPin, PinState};

/// Electrical level of a pressed button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyPolarity {
    /// Pressed pulls the pin low (button to ground, pull-up enabled).
    ActiveLow,
    /// Pressed drives the pin high.
    ActiveHigh,
}

/// Four buttons and four LEDs on individual GPIO pins.
///
/// Button `n` maps to bit `n` of the key pattern, LED `n` to bit `n` of the LED
/// pattern. LEDs are driven active high.
pub struct PinBoard<I, O>
where
    I: InputPin,
    O: OutputPin,
{
    keys: [I; 4],
    leds: [O; 4],
    polarity: KeyPolarity,
}

impl<I, O> PinBoard<I, O>
where
    I: InputPin,
    O: OutputPin,
{
    /// Creates a board from button and LED pins.
    ///
    /// # Arguments
    /// * `keys` - Button pins, index 0 first
    /// * `leds` - LED pins, index 0 first
    /// * `polarity` - Level a pressed button reads as
    pub fn new(keys: [I; 4], leds: [O; 4], polarity: KeyPolarity) -> Self {
        Self {
            keys,
            leds,
            polarity,
        }
    }

    /// Gives the pins back.
    pub fn release(self) -> ([I; 4], [O; 4]) {
        (self.keys, self.leds)
    }

    fn is_pressed(polarity: KeyPolarity, pin: &mut I) -> bool {
        // A pin that fails to read counts as released.
        match polarity {
            KeyPolarity::ActiveLow => pin.is_low().unwrap_or(false),
            KeyPolarity::ActiveHigh => pin.is_high().unwrap_or(false),
        }
    }
}

impl<I, O> Board for PinBoard<I, O>
where
    I: InputPin,
    O: OutputPin,
{
    fn configure(&mut self) {
        self.write_leds(KeyPattern::NONE);
    }

    fn read_keys(&mut self) -> KeyPattern {
        let mut bits = 0u8;
        for (i, pin) in self.keys.iter_mut().enumerate() {
            if Self::is_pressed(self.polarity, pin) {
                bits |= 1 << i;
            }
        }
        KeyPattern::from_bits(bits)
    }

    fn write_leds(&mut self, pattern: KeyPattern) {
        for (i, led) in self.leds.iter_mut().enumerate() {
            let state = PinState::from(pattern.bits() & (1 << i) != 0);
            let _ = led.set_state(state);
        }
    }
}
