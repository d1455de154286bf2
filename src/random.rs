//! Sources of sequence material.
//!
//! A sequence is drawn as one 16-bit word holding two bits per slot, which covers the
//! longest sequence (8 slots).

use rand_core::RngCore;

/// The word [`FixedPattern`] returns by default.
pub const DEFAULT_PATTERN: u16 = 0b1110_0100_1110_0111;

/// Trait for pluggable pseudo-random sources.
pub trait RandomSource {
    /// Returns a word whose bit pairs, least significant first, are button indices.
    fn next_word(&mut self) -> u16;

    /// Called once for every key sample the game takes.
    ///
    /// Generators that advance here pick up entropy from how long the player takes to
    /// press. The default does nothing.
    fn stir(&mut self) {}
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_word(&mut self) -> u16 {
        (**self).next_word()
    }

    fn stir(&mut self) {
        (**self).stir()
    }
}

/// Always returns the same word, so every session plays the same sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPattern(pub u16);

impl Default for FixedPattern {
    fn default() -> Self {
        FixedPattern(DEFAULT_PATTERN)
    }
}

impl RandomSource for FixedPattern {
    fn next_word(&mut self) -> u16 {
        self.0
    }
}

/// 16-bit Galois linear-feedback shift register (taps 16, 14, 13, 11).
///
/// Steps once per [`RandomSource::stir`], so the state at the time a sequence is drawn
/// depends on the number of key samples taken since boot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lfsr16 {
    state: u16,
}

impl Lfsr16 {
    const TAPS: u16 = 0xB400;
    const FALLBACK_SEED: u16 = 0xACE1;

    /// Creates a generator. A zero seed would lock the register and is replaced.
    pub const fn new(seed: u16) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Current register contents.
    pub fn state(&self) -> u16 {
        self.state
    }

    #[inline]
    fn step(&mut self) {
        let lsb = self.state & 1;
        self.state >>= 1;
        if lsb != 0 {
            self.state ^= Self::TAPS;
        }
    }
}

impl Default for Lfsr16 {
    fn default() -> Self {
        Self::new(Self::FALLBACK_SEED)
    }
}

impl RandomSource for Lfsr16 {
    fn next_word(&mut self) -> u16 {
        for _ in 0..16 {
            self.step();
        }
        self.state
    }

    fn stir(&mut self) {
        self.step();
    }
}

/// Adapter for any `rand_core` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: RngCore> RandomSource for RngSource<R> {
    fn next_word(&mut self) -> u16 {
        self.0.next_u32() as u16
    }
}
