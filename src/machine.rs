//! Explicit state machine for a game session.
//!
//! Every state does one unit of work in [`Game::step`] and names its successor:
//!
//! | State | Work | Next |
//! |-------|------|------|
//! | `Boot` | configure board, blank LEDs, wait for release | `Idle` |
//! | `Idle` | standby until a start key | `ModeSelect`, or `Idle` asleep on timeout |
//! | `ModeSelect` | echo, latch sound/mute, wait for release | `LevelSelect` |
//! | `LevelSelect` | standby until any key, decode level, wait for release, generate | `Playback { round: 1 }`, `LevelSelect` on a chord, `Idle` on timeout |
//! | `Playback { round }` | pause, flash the first `round` steps | `Verify { round, step: 0 }`, or `Win` past the end |
//! | `Verify { round, step }` | wait for the step's key | next step, `Playback { round + 1 }`, or `Lose` |
//! | `Win` / `Lose` | animation, wait for release | `Idle` |

use crate::board::Board;
use crate::game::Game;
use crate::pattern::KeyPattern;
use crate::random::RandomSource;
use crate::sequence::Level;
use crate::time::{TimeInstant, TimeSource};
use crate::types::{Outcome, SoundMode};

/// The states of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameState {
    /// Power-up. Runs once.
    Boot,
    /// Standby animation, waiting for a start key. Also the sleep state.
    Idle,
    /// A start key is held; sound or mute is being chosen.
    ModeSelect,
    /// Waiting for the level key.
    LevelSelect,
    /// Showing the first `round` steps of the sequence.
    Playback { round: usize },
    /// Waiting for step `step` of round `round`.
    Verify { round: usize, step: usize },
    /// The whole sequence was repeated.
    Win,
    /// A step was missed.
    Lose,
}

impl GameState {
    /// State a session enters after the level is chosen.
    pub const FIRST_ROUND: GameState = GameState::Playback { round: 1 };

    /// True for the two end-of-session states.
    pub fn is_final(&self) -> bool {
        matches!(self, GameState::Win | GameState::Lose)
    }
}

impl<'t, I, B, T, R> Game<'t, I, B, T, R>
where
    I: TimeInstant,
    B: Board,
    T: TimeSource<I>,
    R: RandomSource,
{
    /// Performs the work of `state` and returns the state to run next.
    pub fn step(&mut self, state: GameState) -> GameState {
        let next = match state {
            GameState::Boot => {
                self.boot();
                GameState::Idle
            }
            GameState::Idle => {
                if self.wait_for_any_of(KeyPattern::START_KEYS) {
                    GameState::ModeSelect
                } else {
                    GameState::Idle
                }
            }
            GameState::ModeSelect => {
                self.board.write_leds(self.keyboard);
                self.sound_mode = SoundMode::from_keys(self.keyboard);
                self.wait_until(KeyPattern::NONE);
                GameState::LevelSelect
            }
            GameState::LevelSelect => self.select_level(),
            GameState::Playback { round } => {
                if round > self.sequence.len() {
                    GameState::Win
                } else {
                    self.play_back(round);
                    GameState::Verify { round, step: 0 }
                }
            }
            GameState::Verify { round, step } => self.verify(round, step),
            GameState::Win => {
                self.celebrate();
                self.wait_until(KeyPattern::NONE);
                GameState::Idle
            }
            GameState::Lose => {
                self.mock();
                self.wait_until(KeyPattern::NONE);
                GameState::Idle
            }
        };
        if next != state {
            debug!("{} -> {}", state, next);
        }
        next
    }

    fn select_level(&mut self) -> GameState {
        if !self.wait_for_any_of(KeyPattern::ALL) {
            return GameState::Idle;
        }
        self.board.write_leds(self.keyboard);
        let level = Level::from_pattern(self.keyboard);
        self.wait_until(KeyPattern::NONE);
        self.board.write_leds(self.keyboard);
        match level {
            Some(level) => {
                self.gen_seq(level);
                GameState::FIRST_ROUND
            }
            None => {
                warn!("level needs a single key, got {}", self.keyboard);
                GameState::LevelSelect
            }
        }
    }

    fn verify(&mut self, round: usize, step: usize) -> GameState {
        let Some(expected) = self.sequence.pattern_at(step) else {
            return GameState::Playback { round: round + 1 };
        };
        let response = self.wait_for_key(expected);
        if !response.is_correct() {
            info!("round {} step {}: {}", round, step, response);
            GameState::Lose
        } else if step + 1 < round {
            GameState::Verify {
                round,
                step: step + 1,
            }
        } else {
            GameState::Playback { round: round + 1 }
        }
    }

    /// Runs the start and level prompts.
    ///
    /// Returns with a new sequence loaded, or with the game asleep if either prompt
    /// timed out. Check [`Game::is_sleeping`] to tell the two apart.
    pub fn init(&mut self) {
        let mut state = GameState::Idle;
        loop {
            state = self.step(state);
            if matches!(state, GameState::Idle | GameState::Playback { .. }) {
                return;
            }
        }
    }

    /// Plays the loaded sequence round by round until the player wins or loses.
    ///
    /// Does not run the win or lose animation.
    pub fn play(&mut self) -> Outcome {
        let mut state = GameState::FIRST_ROUND;
        loop {
            state = self.step(state);
            match state {
                GameState::Win => return Outcome::Win,
                GameState::Lose => return Outcome::Lose,
                _ => {}
            }
        }
    }

    /// Runs one full pass of the outer loop: prompts, play, animation, release.
    ///
    /// Returns `None` if the prompts timed out and no session was played.
    pub fn session(&mut self) -> Option<Outcome> {
        self.init();
        if self.sleeping {
            return None;
        }
        let outcome = self.play();
        match outcome {
            Outcome::Win => self.celebrate(),
            Outcome::Lose => self.mock(),
        }
        self.wait_until(KeyPattern::NONE);
        Some(outcome)
    }

    /// Boots and plays forever.
    pub fn run(&mut self) -> ! {
        let mut state = GameState::Boot;
        loop {
            state = self.step(state);
        }
    }
}
