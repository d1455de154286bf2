use crate::pattern::{KEY_COUNT, KeyPattern};
use crate::random::RandomSource;
use crate::types::SequenceError;
use heapless::Vec;

/// Longest sequence a session can ask for.
pub const MAX_SEQUENCE_LEN: usize = 8;

/// Sequence length for each level.
pub const LEVEL_LENGTHS: [u8; 4] = [5, 6, 7, 8];

/// Difficulty level, 0 to 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Level(u8);

impl Level {
    /// Creates a level.
    ///
    /// # Errors
    /// * `InvalidLevel` - `level` is 4 or more
    pub fn new(level: u8) -> Result<Self, SequenceError> {
        if (level as usize) < LEVEL_LENGTHS.len() {
            Ok(Level(level))
        } else {
            Err(SequenceError::InvalidLevel(level))
        }
    }

    /// Level chosen by pressing a single key at the level prompt.
    ///
    /// Returns `None` unless exactly one key is set.
    pub fn from_pattern(pattern: KeyPattern) -> Option<Self> {
        pattern.index().map(Level)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Number of steps the player has to reach at this level.
    pub fn sequence_length(&self) -> usize {
        LEVEL_LENGTHS[self.0 as usize] as usize
    }
}

impl TryFrom<u8> for Level {
    type Error = SequenceError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Level::new(level)
    }
}

/// The button indices the player has to repeat.
///
/// Built from a packed word, two bits per slot with slot 0 in the least significant
/// bits. Once built it is not modified; a new session builds a new one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sequence {
    indices: Vec<u8, MAX_SEQUENCE_LEN>,
}

impl Sequence {
    /// A sequence with no steps. Playing it wins straight away.
    pub const fn empty() -> Self {
        Self { indices: Vec::new() }
    }

    /// Draws a sequence for `level` from `source`.
    pub fn generate<R: RandomSource + ?Sized>(level: Level, source: &mut R) -> Self {
        let word = source.next_word();
        let mut indices = Vec::new();
        for slot in 0..level.sequence_length() {
            // Level lengths never exceed capacity.
            let _ = indices.push(Self::slot(word, slot));
        }
        Self { indices }
    }

    /// Unpacks the first `len` slots of `word`.
    ///
    /// # Errors
    /// * `CapacityExceeded` - `len` is greater than [`MAX_SEQUENCE_LEN`]
    pub fn from_packed(word: u16, len: usize) -> Result<Self, SequenceError> {
        if len > MAX_SEQUENCE_LEN {
            return Err(SequenceError::CapacityExceeded);
        }
        let mut indices = Vec::new();
        for slot in 0..len {
            indices
                .push(Self::slot(word, slot))
                .map_err(|_| SequenceError::CapacityExceeded)?;
        }
        Ok(Self { indices })
    }

    /// Builds a sequence from explicit button indices.
    ///
    /// # Errors
    /// * `InvalidIndex` - an index is 4 or more
    /// * `CapacityExceeded` - more than [`MAX_SEQUENCE_LEN`] indices
    pub fn from_indices(indices: &[u8]) -> Result<Self, SequenceError> {
        let mut stored = Vec::new();
        for &index in indices {
            if index >= KEY_COUNT {
                return Err(SequenceError::InvalidIndex(index));
            }
            stored
                .push(index)
                .map_err(|_| SequenceError::CapacityExceeded)?;
        }
        Ok(Self { indices: stored })
    }

    #[inline]
    fn slot(word: u16, slot: usize) -> u8 {
        ((word >> (slot * 2)) & 0b11) as u8
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Button index at `step`.
    pub fn get(&self, step: usize) -> Option<u8> {
        self.indices.get(step).copied()
    }

    /// One-hot pattern for the button at `step`.
    pub fn pattern_at(&self, step: usize) -> Option<KeyPattern> {
        self.get(step).map(KeyPattern::from_index)
    }

    /// All button indices in play order.
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Packs the sequence back into a word. Unused slots are zero.
    pub fn packed(&self) -> u16 {
        self.indices
            .iter()
            .enumerate()
            .fold(0u16, |word, (slot, &index)| {
                word | ((index as u16) << (slot * 2))
            })
    }
}
