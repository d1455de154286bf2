//! Shared test infrastructure for memory-game integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::collections::VecDeque;

use memory_game::{Board, Game, GameConfig, KeyPattern, TimeDuration, TimeInstant, TimeSource};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Clock
// ============================================================================

/// Clock that moves forward 1ms every time it is read.
///
/// With a 1ms tick this makes every uninterrupted tick exactly one key sample, so
/// tests can script input sample by sample.
pub struct MockClock {
    current_time: core::cell::Cell<u64>,
}

impl MockClock {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(0),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        self.current_time.set(self.current_time.get() + duration.0);
    }

    pub fn elapsed(&self) -> u64 {
        self.current_time.get()
    }
}

impl TimeSource<TestInstant> for MockClock {
    fn now(&self) -> TestInstant {
        let now = self.current_time.get();
        self.current_time.set(now + 1);
        TestInstant(now)
    }
}

// ============================================================================
// Simulated Player
// ============================================================================

/// A deliberate error the player makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slip {
    /// Press button `index` instead of the right one at `round`/`step` (round from 1).
    Wrong { round: usize, step: usize, index: u8 },
    /// Press nothing at all from `round`/`step` on.
    Silent { round: usize, step: usize },
}

/// Watches the playback flashes and repeats them.
///
/// After seeing as many flashes as the current round number, it answers with
/// `lead_in` idle samples (covering the playback ticks that follow the last flash) and
/// then, for each step, one released sample, one press and one released sample.
pub struct Player {
    lead_in: usize,
    round: usize,
    seen: Vec<u8>,
    pending: VecDeque<u8>,
    slip: Option<Slip>,
    rounds_answered: usize,
}

impl Player {
    pub fn new(lead_in: usize) -> Self {
        Self {
            lead_in,
            round: 1,
            seen: Vec::new(),
            pending: VecDeque::new(),
            slip: None,
            rounds_answered: 0,
        }
    }

    /// A player whose lead-in matches the playback timing of `config`.
    pub fn for_config<D: TimeDuration>(config: &GameConfig<D>) -> Self {
        Self::new((config.flash_on + config.flash_off) as usize)
    }

    pub fn with_slip(mut self, slip: Slip) -> Self {
        self.slip = Some(slip);
        self
    }

    /// Rounds the player has heard and answered (or tried to).
    pub fn rounds_answered(&self) -> usize {
        self.rounds_answered
    }

    fn observe(&mut self, leds: u8) {
        if !self.pending.is_empty() || leds.count_ones() != 1 {
            return;
        }
        self.seen.push(leds);
        if self.seen.len() == self.round {
            self.answer();
        }
    }

    fn answer(&mut self) {
        self.pending.extend(std::iter::repeat(0).take(self.lead_in));
        for (step, &pattern) in self.seen.iter().enumerate() {
            match self.slip {
                Some(Slip::Wrong { round, step: s, index }) if round == self.round && s == step => {
                    self.pending.extend([0, 1 << index, 0]);
                    break;
                }
                Some(Slip::Silent { round, step: s }) if round == self.round && s == step => {
                    break;
                }
                _ => self.pending.extend([0, pattern, 0]),
            }
        }
        self.seen.clear();
        self.round += 1;
        self.rounds_answered += 1;
    }

    fn sample(&mut self) -> u8 {
        self.pending.pop_front().unwrap_or(0)
    }
}

// ============================================================================
// Mock Board
// ============================================================================

/// Board that replays scripted key samples and records every LED write.
///
/// Samples come from the script first, then from the player if there is one, then
/// `idle_keys` forever. The player only watches LED writes once the script is used up.
pub struct MockBoard {
    script: VecDeque<u8>,
    idle_keys: u8,
    player: Option<Player>,
    reads: usize,
    current_leds: KeyPattern,
    led_history: heapless::Vec<u8, 2048>,
    configured: bool,
}

impl MockBoard {
    pub fn new() -> Self {
        Self {
            script: VecDeque::new(),
            idle_keys: 0,
            player: None,
            reads: 0,
            current_leds: KeyPattern::NONE,
            led_history: heapless::Vec::new(),
            configured: false,
        }
    }

    pub fn with_script(samples: &[u8]) -> Self {
        let mut board = Self::new();
        board.script.extend(samples.iter().copied());
        board
    }

    pub fn idle_keys(mut self, keys: u8) -> Self {
        self.idle_keys = keys;
        self
    }

    pub fn with_player(mut self, player: Player) -> Self {
        self.player = Some(player);
        self
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub fn reads(&self) -> usize {
        self.reads
    }

    pub fn current_leds(&self) -> KeyPattern {
        self.current_leds
    }

    pub fn led_history(&self) -> &[u8] {
        &self.led_history
    }

    pub fn configured(&self) -> bool {
        self.configured
    }
}

impl Board for MockBoard {
    fn configure(&mut self) {
        self.configured = true;
    }

    fn read_keys(&mut self) -> KeyPattern {
        self.reads += 1;
        let bits = match self.script.pop_front() {
            Some(bits) => bits,
            None => match self.player.as_mut() {
                Some(player) => player.sample(),
                None => self.idle_keys,
            },
        };
        KeyPattern::from_bits(bits)
    }

    fn write_leds(&mut self, pattern: KeyPattern) {
        self.current_leds = pattern;
        let _ = self.led_history.push(pattern.bits());
        if self.script.is_empty() {
            if let Some(player) = self.player.as_mut() {
                player.observe(pattern.bits());
            }
        }
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub type TestGame<'a, R> = Game<'a, TestInstant, MockBoard, MockClock, R>;

/// Default tick counts with a 1ms tick: one key sample per uninterrupted tick.
pub fn test_config() -> GameConfig<TestDuration> {
    GameConfig::new(TestDuration(1))
}

/// Number of times `needle` occurs in `haystack` as a contiguous run.
pub fn count_runs(haystack: &[u8], needle: &[u8]) -> usize {
    haystack
        .windows(needle.len())
        .filter(|window| *window == needle)
        .count()
}
