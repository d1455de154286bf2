//! Time abstraction traits for platform-agnostic ticks.
//!
//! The game measures every wait in ticks of [`crate::GameConfig::tick`], read from a
//! [`TimeSource`]. Targets with a timer plug their own instant type in; targets without
//! one can use [`SpinClock`], which turns polling itself into elapsed time.

use core::cell::Cell;

/// Default calibration for [`SpinClock`]: clock reads that make up one millisecond.
pub const DEFAULT_POLLS_PER_MILLI: u32 = 50;

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// Millisecond duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Millis(pub u64);

impl TimeDuration for Millis {
    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        Millis(millis)
    }
}

/// Instant reported by [`SpinClock`], in calibrated milliseconds since creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpinInstant(u64);

impl SpinInstant {
    /// Returns the instant as milliseconds since the clock was created.
    pub fn as_millis(&self) -> u64 {
        self.0
    }
}

impl TimeInstant for SpinInstant {
    type Duration = Millis;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        Millis(self.0.saturating_sub(earlier.0))
    }
}

/// Busy-wait time source for boards without a usable timer.
///
/// Every call to [`TimeSource::now`] is one poll: it spins once and bumps a counter.
/// Elapsed time is the poll count divided by a calibration constant, so the real length
/// of a millisecond depends on the CPU clock and on how much work the caller does
/// between reads. Tune the constant per board with [`SpinClock::with_calibration`].
pub struct SpinClock {
    polls: Cell<u64>,
    polls_per_milli: u32,
}

impl SpinClock {
    /// Creates a clock with [`DEFAULT_POLLS_PER_MILLI`].
    pub const fn new() -> Self {
        Self::with_calibration(DEFAULT_POLLS_PER_MILLI)
    }

    /// Creates a clock where `polls_per_milli` reads make up one millisecond.
    ///
    /// A calibration of zero is treated as one.
    pub const fn with_calibration(polls_per_milli: u32) -> Self {
        Self {
            polls: Cell::new(0),
            polls_per_milli: if polls_per_milli == 0 { 1 } else { polls_per_milli },
        }
    }

    /// Number of polls taken so far.
    pub fn polls(&self) -> u64 {
        self.polls.get()
    }
}

impl Default for SpinClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource<SpinInstant> for SpinClock {
    fn now(&self) -> SpinInstant {
        core::hint::spin_loop();
        let polls = self.polls.get().wrapping_add(1);
        self.polls.set(polls);
        SpinInstant(polls / self.polls_per_milli as u64)
    }
}
