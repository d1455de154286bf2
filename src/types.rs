//! Core types shared across the game.

use crate::pattern::KeyPattern;

/// Result of a whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Every prefix of the sequence was repeated correctly.
    Win,

    /// A wrong key, or no key before the timeout.
    Lose,
}

/// Audio choice made with the start key.
///
/// There is no audio output; both modes play identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SoundMode {
    /// Started with key 0.
    #[default]
    Sound,

    /// Started with key 1.
    Mute,
}

impl SoundMode {
    /// Mode selected by a start-prompt sample. Key 0 wins if both are held.
    pub fn from_keys(keys: KeyPattern) -> Self {
        if keys.intersects(KeyPattern::from_index(0)) {
            SoundMode::Sound
        } else {
            SoundMode::Mute
        }
    }
}

/// How the player answered one step of the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Response {
    /// The expected key, and only that key.
    Correct,

    /// Some other key combination.
    Wrong(KeyPattern),

    /// No key within the step timeout.
    TimedOut,
}

impl Response {
    /// Classifies a captured sample against the expected pattern.
    pub fn classify(sample: KeyPattern, expected: KeyPattern) -> Self {
        if sample.is_empty() {
            Response::TimedOut
        } else if sample == expected {
            Response::Correct
        } else {
            Response::Wrong(sample)
        }
    }

    #[inline]
    pub fn is_correct(&self) -> bool {
        matches!(self, Response::Correct)
    }
}

/// Sequence and level validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequenceError {
    /// Level outside 0..=3.
    InvalidLevel(u8),

    /// Button index outside 0..=3.
    InvalidIndex(u8),

    /// More slots than a sequence can hold.
    CapacityExceeded,
}

impl core::fmt::Display for SequenceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SequenceError::InvalidLevel(level) => {
                write!(f, "level {} is out of range (expected 0-3)", level)
            }
            SequenceError::InvalidIndex(index) => {
                write!(f, "button index {} is out of range (expected 0-3)", index)
            }
            SequenceError::CapacityExceeded => {
                write!(f, "sequence capacity exceeded")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SequenceError {}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Standby would time out before showing a single round.
    ZeroStandbyRounds,

    /// Every answer would time out.
    ZeroKeyTimeout,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroStandbyRounds => {
                write!(f, "standby must run for at least one round")
            }
            ConfigError::ZeroKeyTimeout => {
                write!(f, "key timeout must be at least one tick")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
