//! Four-bit key and LED patterns.
//!
//! Bit `n` of a pattern stands for button `n` (pressed) or LED `n` (lit). The same type
//! is used for both directions because the game echoes pressed keys straight onto the
//! LEDs.

/// Mask covering the four buttons / LEDs.
pub const PATTERN_MASK: u8 = 0b1111;

/// Returned by [`bits_to_number`] for anything other than a single pressed key.
pub const INVALID_INDEX: u8 = 8;

/// Number of buttons, and of LEDs.
pub const KEY_COUNT: u8 = 4;

/// A 4-bit snapshot of the buttons, or a 4-bit LED image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyPattern(u8);

impl KeyPattern {
    /// No key pressed, all LEDs dark.
    pub const NONE: Self = KeyPattern(0);

    /// All four keys / LEDs.
    pub const ALL: Self = KeyPattern(PATTERN_MASK);

    /// Keys that start a session: key 0 selects sound, key 1 selects mute.
    pub const START_KEYS: Self = KeyPattern(0b0011);

    /// Creates a pattern from raw bits. Bits above the low nibble are dropped.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        KeyPattern(bits & PATTERN_MASK)
    }

    /// One-hot pattern for button `index`.
    ///
    /// Indices outside `0..4` produce [`KeyPattern::NONE`].
    #[inline]
    pub const fn from_index(index: u8) -> Self {
        KeyPattern::from_bits(number_to_bits(index))
    }

    /// Raw bits, always within [`PATTERN_MASK`].
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Button index if exactly one key is set.
    #[inline]
    pub const fn index(self) -> Option<u8> {
        match bits_to_number(self.0) {
            INVALID_INDEX => None,
            index => Some(index),
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if any key of `self` is also set in `other`.
    #[inline]
    pub const fn intersects(self, other: KeyPattern) -> bool {
        self.0 & other.0 != 0
    }

    /// True if exactly one key is set.
    #[inline]
    pub const fn is_single(self) -> bool {
        self.0.count_ones() == 1
    }
}

impl From<KeyPattern> for u8 {
    fn from(pattern: KeyPattern) -> Self {
        pattern.0
    }
}

/// Maps button index 0..=3 to its one-hot pattern (`1 << index`).
///
/// The result is masked to four bits, so an index of 4 or more maps to 0.
#[inline]
pub const fn number_to_bits(index: u8) -> u8 {
    if index >= KEY_COUNT {
        return 0;
    }
    1 << index
}

/// Inverse of [`number_to_bits`].
///
/// Returns [`INVALID_INDEX`] for zero or for more than one bit set.
#[inline]
pub const fn bits_to_number(bits: u8) -> u8 {
    match bits {
        0b0001 => 0,
        0b0010 => 1,
        0b0100 => 2,
        0b1000 => 3,
        _ => INVALID_INDEX,
    }
}
