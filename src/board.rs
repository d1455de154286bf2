//! Hardware abstraction for the four buttons and four LEDs.

use crate::pattern::KeyPattern;

/// Trait for abstracting the game's hardware.
///
/// Implement this for your board (GPIO pins, a port register, a simulator) to let the
/// game read the buttons and drive the LEDs. See [`crate::hal::PinBoard`] for an
/// implementation over `embedded-hal` pins.
pub trait Board {
    /// One-time hardware setup, called once at boot before anything else.
    ///
    /// Typical work: pin directions, disabling peripherals the game does not use.
    /// The default does nothing, for boards handed over already configured.
    fn configure(&mut self) {}

    /// Samples the buttons. A set bit means the button is pressed.
    ///
    /// Handle any hardware errors internally - this method cannot fail.
    fn read_keys(&mut self) -> KeyPattern;

    /// Lights exactly the LEDs set in `pattern`.
    ///
    /// Handle any hardware errors internally - this method cannot fail.
    fn write_leds(&mut self, pattern: KeyPattern);
}

impl<B: Board + ?Sized> Board for &mut B {
    fn configure(&mut self) {
        (**self).configure()
    }

    fn read_keys(&mut self) -> KeyPattern {
        (**self).read_keys()
    }

    fn write_leds(&mut self, pattern: KeyPattern) {
        (**self).write_leds(pattern)
    }
}
