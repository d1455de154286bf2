#![no_std]
#![no_main]

use core::cell::Cell;

use cortex_m_rt::entry;
use memory_game::{
    Board, FixedPattern, Game, GameConfig, KeyPattern, Lfsr16, SpinClock, SpinInstant,
    TimeDuration, TimeInstant, TimeSource,
};
use panic_halt as _;

// ============================================================================
// Minimal Time Types
// ============================================================================

/// Minimal 32-bit millisecond duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration32(u32);

impl TimeDuration for Duration32 {
    fn as_millis(&self) -> u64 {
        self.0 as u64
    }

    fn from_millis(millis: u64) -> Self {
        Duration32(millis as u32)
    }
}

/// Minimal 32-bit millisecond instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Instant32(u32);

impl TimeInstant for Instant32 {
    type Duration = Duration32;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        Duration32(self.0.wrapping_sub(earlier.0))
    }
}

/// Counter standing in for a hardware timer
pub struct MinimalTimeSource {
    ticks: Cell<u32>,
}

impl TimeSource<Instant32> for MinimalTimeSource {
    fn now(&self) -> Instant32 {
        let now = self.ticks.get().wrapping_add(1);
        self.ticks.set(now);
        Instant32(now)
    }
}

// ============================================================================
// Minimal Board Implementation
// ============================================================================

/// Zero-size board for measuring library overhead
pub struct MinimalBoard;

impl Board for MinimalBoard {
    fn read_keys(&mut self) -> KeyPattern {
        // Opaque to the optimizer so the polling loops survive
        KeyPattern::from_bits(core::hint::black_box(0))
    }

    fn write_leds(&mut self, pattern: KeyPattern) {
        core::hint::black_box(pattern);
    }
}

// ============================================================================
// Footprint
// ============================================================================

// Instantiates the game over a second time type so the generic code is counted twice
#[inline(never)]
fn hardware_timer_session() {
    let time_source = MinimalTimeSource {
        ticks: Cell::new(0),
    };
    let config = GameConfig::new(Duration32(100));
    let mut game: Game<'_, Instant32, _, _, _> =
        Game::new(MinimalBoard, &time_source, FixedPattern::default(), config);
    let outcome = game.session();
    core::hint::black_box(outcome);
}

#[entry]
fn main() -> ! {
    hardware_timer_session();

    // Spin-calibrated ticks with the LFSR, as on a board without a timer
    let clock = SpinClock::new();
    let mut game: Game<'_, SpinInstant, _, _, _> =
        Game::new(MinimalBoard, &clock, Lfsr16::default(), GameConfig::default());
    game.run()
}
