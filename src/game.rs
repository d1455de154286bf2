//! The game context and its blocking primitives.
//!
//! Provides [`Game`], which owns everything a session touches: the board, the random
//! source, the last key sample, the sleep flag and the current sequence. All waiting is
//! done here by polling the keys inside ticks measured by a [`TimeSource`]. The state
//! machine driving these primitives lives in [`crate::machine`].

use crate::board::Board;
use crate::config::GameConfig;
use crate::pattern::KeyPattern;
use crate::random::RandomSource;
use crate::sequence::{Level, Sequence};
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::{Response, SoundMode};

/// Game context for one board.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `B` - Board implementation type
/// * `T` - Time source implementation type
/// * `R` - Random source implementation type
pub struct Game<'t, I: TimeInstant, B: Board, T: TimeSource<I>, R: RandomSource> {
    pub(crate) board: B,
    time_source: &'t T,
    pub(crate) rng: R,
    pub(crate) config: GameConfig<I::Duration>,
    pub(crate) sleeping: bool,
    pub(crate) keyboard: KeyPattern,
    pub(crate) sequence: Sequence,
    pub(crate) sound_mode: SoundMode,
}

impl<'t, I, B, T, R> Game<'t, I, B, T, R>
where
    I: TimeInstant,
    B: Board,
    T: TimeSource<I>,
    R: RandomSource,
{
    /// Creates a game in the sleeping state with no sequence.
    ///
    /// The board is not touched until boot, see [`Game::boot`].
    pub fn new(board: B, time_source: &'t T, rng: R, config: GameConfig<I::Duration>) -> Self {
        Self {
            board,
            time_source,
            rng,
            config,
            sleeping: true,
            keyboard: KeyPattern::NONE,
            sequence: Sequence::empty(),
            sound_mode: SoundMode::default(),
        }
    }

    /// Configures the board, blanks the LEDs and waits until no key is held.
    pub fn boot(&mut self) {
        self.board.configure();
        self.board.write_leds(KeyPattern::NONE);
        self.wait_until(KeyPattern::NONE);
        info!("boot complete");
    }

    #[inline]
    fn sample(&mut self) -> KeyPattern {
        self.keyboard = self.board.read_keys();
        self.keyboard
    }

    /// Waits one tick, sampling the keys the whole time.
    ///
    /// With `interruptible` set, the first non-empty sample ends the tick early: the
    /// pressed keys are shown on the LEDs and `true` is returned. Otherwise returns
    /// `false` once the tick has elapsed.
    pub fn delay(&mut self, interruptible: bool) -> bool {
        let start = self.time_source.now();
        let tick = self.config.tick.as_millis();
        loop {
            let keys = self.sample();
            if interruptible && !keys.is_empty() {
                self.board.write_leds(keys);
                return true;
            }
            self.rng.stir();
            if self.time_source.now().duration_since(start).as_millis() >= tick {
                return false;
            }
        }
    }

    /// Waits `count` ticks. Returns `true` as soon as one of them is interrupted.
    pub fn delay_long(&mut self, count: u16, interruptible: bool) -> bool {
        for _ in 0..count {
            if self.delay(interruptible) {
                return true;
            }
        }
        false
    }

    /// Samples the keys until they read exactly `keys`.
    ///
    /// No timeout. `wait_until(KeyPattern::NONE)` waits for every key to be released.
    pub fn wait_until(&mut self, keys: KeyPattern) {
        while self.sample() != keys {}
    }

    /// Samples the keys for as long as they read exactly `keys`.
    ///
    /// No timeout. `wait_while(KeyPattern::NONE)` waits for any key press.
    pub fn wait_while(&mut self, keys: KeyPattern) {
        while self.sample() == keys {}
    }

    /// Runs the standby animation until a key in `pattern` is pressed.
    ///
    /// Keys outside `pattern` restart the animation. If a whole standby run passes
    /// without any key, the game goes to sleep and `false` is returned; the last key
    /// sample is left as it was. On success the sleep flag is cleared and the pressed
    /// keys are available from [`Game::keyboard`].
    pub fn wait_for_any_of(&mut self, pattern: KeyPattern) -> bool {
        loop {
            if self.standby() {
                if !self.sleeping {
                    info!("idle timeout, going to sleep");
                }
                self.sleeping = true;
                return false;
            }
            if self.keyboard.intersects(pattern) {
                break;
            }
            trace!("ignoring keys {}", self.keyboard);
        }
        self.sleeping = false;
        true
    }

    /// Cycles a single lit LED across the four positions, one tick each.
    ///
    /// Runs for `standby_rounds` rounds. While sleeping the LEDs stay dark but the
    /// ticks are still spent. Returns `false` as soon as a key is pressed, or `true`
    /// if every round completed. The LEDs are dark on return.
    pub fn standby(&mut self) -> bool {
        self.board.write_leds(KeyPattern::NONE);
        for _ in 0..self.config.standby_rounds {
            let mut leds = KeyPattern::from_index(0);
            for _ in 0..4 {
                if !self.sleeping {
                    self.board.write_leds(leds);
                }
                if self.delay(true) {
                    self.board.write_leds(KeyPattern::NONE);
                    return false;
                }
                leds = KeyPattern::from_bits(leds.bits() << 1);
            }
        }
        self.board.write_leds(KeyPattern::NONE);
        true
    }

    /// Replaces the sequence with a fresh one for `level`.
    pub fn gen_seq(&mut self, level: Level) {
        self.sequence = Sequence::generate(level, &mut self.rng);
        debug!(
            "generated {} steps for level {}",
            self.sequence.len(),
            level.value()
        );
    }

    /// Replaces the sequence, e.g. to replay a known one.
    pub fn load_sequence(&mut self, sequence: Sequence) {
        self.sequence = sequence;
    }

    /// Lights the first `round` steps of the sequence one after another.
    ///
    /// Starts with the playback pause; each step is lit for `flash_on` ticks and
    /// followed by `flash_off` dark ticks. None of these ticks can be interrupted.
    pub fn play_back(&mut self, round: usize) {
        self.delay_long(self.config.playback_pause, false);
        for step in 0..round {
            let Some(pattern) = self.sequence.pattern_at(step) else {
                break;
            };
            self.board.write_leds(pattern);
            self.delay_long(self.config.flash_on, false);
            self.board.write_leds(KeyPattern::NONE);
            self.delay_long(self.config.flash_off, false);
        }
    }

    /// Waits for the player to press `expected`.
    ///
    /// Waits for a full release first, then gives the player `key_timeout` ticks to
    /// press something. The captured sample is echoed on the LEDs and compared for an
    /// exact match, then the release is awaited and echoed as well.
    pub fn wait_for_key(&mut self, expected: KeyPattern) -> Response {
        self.wait_until(KeyPattern::NONE);
        for _ in 0..self.config.key_timeout {
            if self.delay(true) {
                break;
            }
        }
        self.board.write_leds(self.keyboard);
        let response = Response::classify(self.keyboard, expected);
        self.wait_until(KeyPattern::NONE);
        self.board.write_leds(self.keyboard);
        response
    }

    /// Win animation: each LED flashes twice in turn, repeated `celebrate_rounds` times.
    pub fn celebrate(&mut self) {
        for _ in 0..self.config.celebrate_rounds {
            for index in 0..4 {
                for _ in 0..2 {
                    self.flash(KeyPattern::from_index(index));
                }
            }
        }
    }

    /// Lose animation: all LEDs flash together `mock_flashes` times.
    pub fn mock(&mut self) {
        for _ in 0..self.config.mock_flashes {
            self.flash(KeyPattern::ALL);
        }
    }

    fn flash(&mut self, pattern: KeyPattern) {
        self.board.write_leds(pattern);
        self.delay(false);
        self.board.write_leds(KeyPattern::NONE);
        self.delay(false);
    }

    /// Returns true while the game is idle and asleep.
    pub fn is_sleeping(&self) -> bool {
        self.sleeping
    }

    /// The last key sample.
    pub fn keyboard(&self) -> KeyPattern {
        self.keyboard
    }

    /// The current sequence, empty before the first session.
    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// Audio choice of the current session.
    pub fn sound_mode(&self) -> SoundMode {
        self.sound_mode
    }

    pub fn config(&self) -> &GameConfig<I::Duration> {
        &self.config
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }

    /// Consumes the game and returns the board.
    pub fn into_board(self) -> B {
        self.board
    }
}
