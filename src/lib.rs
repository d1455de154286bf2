#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Game`**: Owns the board, the random source and all session state
//! - **`GameState`**: The explicit states of a session, advanced by `Game::step`
//! - **`Board`**: Trait to implement for your buttons and LEDs
//! - **`TimeSource`**: Trait to implement for your timing system (or use `SpinClock`)
//! - **`RandomSource`**: Where sequences come from (`FixedPattern`, `Lfsr16`, `RngSource`)
//! - **`KeyPattern`**: A 4-bit snapshot of the buttons, or an LED image
//! - **`Sequence`**: The button indices the player has to repeat
//! - **`GameConfig`**: Tick length and every tick count of the game
//!
//! Every wait is counted in ticks. A tick is the only notion of time the game has; how
//! long it lasts in real time is set by `GameConfig::tick` and the `TimeSource`.

#[macro_use]
mod fmt;

pub mod board;
pub mod config;
pub mod game;
pub mod hal;
pub mod machine;
pub mod pattern;
pub mod random;
pub mod sequence;
pub mod time;
pub mod types;

pub use board::Board;
pub use config::{ConfigBuilder, DEFAULT_TICK_MILLIS, GameConfig, KEY_TIMEOUT, STANDBY_TIMEOUT};
pub use game::Game;
pub use hal::{KeyPolarity, PinBoard};
pub use machine::GameState;
pub use pattern::{INVALID_INDEX, KeyPattern, bits_to_number, number_to_bits};
pub use random::{DEFAULT_PATTERN, FixedPattern, Lfsr16, RandomSource, RngSource};
pub use sequence::{LEVEL_LENGTHS, Level, MAX_SEQUENCE_LEN, Sequence};
pub use time::{
    DEFAULT_POLLS_PER_MILLI, Millis, SpinClock, SpinInstant, TimeDuration, TimeInstant, TimeSource,
};
pub use types::{ConfigError, Outcome, Response, SequenceError, SoundMode};
