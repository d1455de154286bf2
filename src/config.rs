//! Tunable timing for the game.
//!
//! All waits are counted in ticks. Only the tick itself has a real-time length, which
//! depends on the board; the tick counts shape the feel of the game.

use crate::time::TimeDuration;
use crate::types::ConfigError;

/// Standby animation rounds (four ticks each) before the game goes to sleep.
pub const STANDBY_TIMEOUT: u16 = 20;

/// Ticks the player gets to press each key of the sequence.
pub const KEY_TIMEOUT: u16 = 20;

/// Default tick length.
pub const DEFAULT_TICK_MILLIS: u64 = 100;

/// Game timing, in ticks of `tick`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig<D: TimeDuration> {
    /// Length of one tick.
    pub tick: D,
    /// Standby rounds before sleeping.
    pub standby_rounds: u16,
    /// Ticks to wait for each key press.
    pub key_timeout: u16,
    /// Pause before each playback.
    pub playback_pause: u16,
    /// Ticks an LED stays lit during playback.
    pub flash_on: u16,
    /// Ticks of darkness after each playback flash.
    pub flash_off: u16,
    /// Repetitions of the win animation.
    pub celebrate_rounds: u16,
    /// All-LED flashes of the lose animation.
    pub mock_flashes: u16,
}

impl<D: TimeDuration> GameConfig<D> {
    /// Default timing with the given tick length.
    pub fn new(tick: D) -> Self {
        Self {
            tick,
            standby_rounds: STANDBY_TIMEOUT,
            key_timeout: KEY_TIMEOUT,
            playback_pause: 12,
            flash_on: 4,
            flash_off: 4,
            celebrate_rounds: 3,
            mock_flashes: 15,
        }
    }

    /// Creates a builder starting from the defaults.
    pub fn builder(tick: D) -> ConfigBuilder<D> {
        ConfigBuilder::new(tick)
    }
}

impl<D: TimeDuration> Default for GameConfig<D> {
    fn default() -> Self {
        Self::new(D::from_millis(DEFAULT_TICK_MILLIS))
    }
}

/// Builder for validated game timing.
#[derive(Debug)]
pub struct ConfigBuilder<D: TimeDuration> {
    config: GameConfig<D>,
}

impl<D: TimeDuration> ConfigBuilder<D> {
    pub fn new(tick: D) -> Self {
        Self {
            config: GameConfig::new(tick),
        }
    }

    pub fn standby_rounds(mut self, rounds: u16) -> Self {
        self.config.standby_rounds = rounds;
        self
    }

    pub fn key_timeout(mut self, ticks: u16) -> Self {
        self.config.key_timeout = ticks;
        self
    }

    pub fn playback_pause(mut self, ticks: u16) -> Self {
        self.config.playback_pause = ticks;
        self
    }

    /// Sets how long each playback flash is lit and then dark.
    pub fn flash(mut self, on: u16, off: u16) -> Self {
        self.config.flash_on = on;
        self.config.flash_off = off;
        self
    }

    pub fn celebrate_rounds(mut self, rounds: u16) -> Self {
        self.config.celebrate_rounds = rounds;
        self
    }

    pub fn mock_flashes(mut self, flashes: u16) -> Self {
        self.config.mock_flashes = flashes;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    /// * `ZeroStandbyRounds` - standby would time out immediately
    /// * `ZeroKeyTimeout` - no answer could ever be accepted
    pub fn build(self) -> Result<GameConfig<D>, ConfigError> {
        if self.config.standby_rounds == 0 {
            return Err(ConfigError::ZeroStandbyRounds);
        }
        if self.config.key_timeout == 0 {
            return Err(ConfigError::ZeroKeyTimeout);
        }
        Ok(self.config)
    }
}
