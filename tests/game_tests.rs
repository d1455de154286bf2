//! Integration tests for the game's timing and input primitives

mod common;
use common::*;

use memory_game::{FixedPattern, GameConfig, KeyPattern, Response, SoundMode};

#[test]
fn interruptible_tick_returns_on_first_press_and_echoes_it() {
    let clock = MockClock::new();
    let board = MockBoard::with_script(&[0, 0, 0b0100]);
    let config = GameConfig::new(TestDuration(10));
    let mut game = TestGame::new(board, &clock, FixedPattern::default(), config);

    assert!(game.delay(true));
    assert_eq!(game.board().reads(), 3);
    assert_eq!(game.board().current_leds(), KeyPattern::from_bits(0b0100));
    assert_eq!(game.keyboard(), KeyPattern::from_bits(0b0100));
}

#[test]
fn every_key_interrupts_an_interruptible_tick() {
    for bits in 1u8..16 {
        let clock = MockClock::new();
        let board = MockBoard::with_script(&[bits]);
        let mut game = TestGame::new(board, &clock, FixedPattern::default(), test_config());

        assert!(game.delay(true));
        assert_eq!(game.board().current_leds().bits(), bits);
    }
}

#[test]
fn plain_tick_ignores_keys_and_runs_full_length() {
    let clock = MockClock::new();
    let board = MockBoard::new().idle_keys(0b0001);
    let config = GameConfig::new(TestDuration(10));
    let mut game = TestGame::new(board, &clock, FixedPattern::default(), config);

    assert!(!game.delay(false));
    assert_eq!(game.board().reads(), 10);
    assert!(game.board().led_history().is_empty());
    assert_eq!(game.keyboard(), KeyPattern::from_bits(0b0001));
}

#[test]
fn delay_long_stops_at_first_interrupted_tick() {
    let clock = MockClock::new();
    let board = MockBoard::with_script(&[0, 0, 0, 0b1000]);
    let mut game = TestGame::new(board, &clock, FixedPattern::default(), test_config());

    assert!(game.delay_long(10, true));
    assert_eq!(game.board().reads(), 4);
}

#[test]
fn delay_long_completes_without_keys() {
    let clock = MockClock::new();
    let board = MockBoard::new();
    let mut game = TestGame::new(board, &clock, FixedPattern::default(), test_config());

    assert!(!game.delay_long(12, true));
    assert_eq!(game.board().reads(), 12);
}

#[test]
fn wait_until_and_wait_while_poll_until_the_keys_change() {
    let clock = MockClock::new();
    let board = MockBoard::with_script(&[0b0011, 0b0001, 0]);
    let mut game = TestGame::new(board, &clock, FixedPattern::default(), test_config());

    game.wait_until(KeyPattern::NONE);
    assert_eq!(game.board().reads(), 3);

    let clock = MockClock::new();
    let board = MockBoard::with_script(&[0, 0, 0b0010]);
    let mut game = TestGame::new(board, &clock, FixedPattern::default(), test_config());

    game.wait_while(KeyPattern::NONE);
    assert_eq!(game.board().reads(), 3);
    assert_eq!(game.keyboard(), KeyPattern::from_bits(0b0010));
}

#[test]
fn standby_times_out_after_all_rounds() {
    let clock = MockClock::new();
    let board = MockBoard::new();
    let config = test_config();
    let mut game = TestGame::new(board, &clock, FixedPattern::default(), config);

    assert!(game.standby());
    assert_eq!(game.board().reads(), config.standby_rounds as usize * 4);
    assert_eq!(game.board().current_leds(), KeyPattern::NONE);
}

#[test]
fn sleeping_standby_keeps_the_leds_dark() {
    let clock = MockClock::new();
    let board = MockBoard::new();
    let mut game = TestGame::new(board, &clock, FixedPattern::default(), test_config());

    assert!(game.is_sleeping());
    assert!(game.standby());
    assert_eq!(game.board().led_history(), &[0, 0]);
}

#[test]
fn standby_is_cancelled_by_a_press() {
    let clock = MockClock::new();
    let board = MockBoard::with_script(&[0, 0, 0, 0, 0, 0b0001]);
    let mut game = TestGame::new(board, &clock, FixedPattern::default(), test_config());

    assert!(!game.standby());
    assert_eq!(game.board().reads(), 6);
    assert_eq!(game.board().current_leds(), KeyPattern::NONE);
}

#[test]
fn idle_timeout_at_start_prompt_sleeps_without_a_session() {
    let clock = MockClock::new();
    let board = MockBoard::new();
    let config = test_config();
    let mut game = TestGame::new(board, &clock, FixedPattern::default(), config);

    game.init();

    assert!(game.is_sleeping());
    assert!(game.sequence().is_empty());
    assert_eq!(game.board().reads(), config.standby_rounds as usize * 4);
}

#[test]
fn awake_standby_cycles_one_led_at_a_time() {
    // Start with key 0, then let the level prompt time out.
    let clock = MockClock::new();
    let board = MockBoard::with_script(&[0b0001, 0]);
    let config = test_config();
    let mut game = TestGame::new(board, &clock, FixedPattern::default(), config);

    game.init();

    assert!(game.is_sleeping());
    assert_eq!(game.sound_mode(), SoundMode::Sound);
    assert_eq!(
        count_runs(game.board().led_history(), &[1, 2, 4, 8]),
        config.standby_rounds as usize
    );
}

#[test]
fn keys_outside_the_prompt_pattern_are_ignored() {
    let clock = MockClock::new();
    let board = MockBoard::with_script(&[0b0100, 0b0100, 0, 0b0010]);
    let mut game = TestGame::new(board, &clock, FixedPattern::default(), test_config());

    assert!(game.wait_for_any_of(KeyPattern::START_KEYS));
    assert!(!game.is_sleeping());
    assert_eq!(game.keyboard(), KeyPattern::from_bits(0b0010));
    assert_eq!(game.board().reads(), 4);
}

#[test]
fn wait_for_key_accepts_the_expected_key() {
    let clock = MockClock::new();
    let board = MockBoard::with_script(&[0b0010, 0, 0, 0b0010, 0b0010, 0]);
    let mut game = TestGame::new(board, &clock, FixedPattern::default(), test_config());

    let response = game.wait_for_key(KeyPattern::from_bits(0b0010));

    assert_eq!(response, Response::Correct);
    assert_eq!(game.board().reads(), 6);
    assert_eq!(game.board().led_history(), &[0b0010, 0b0010, 0]);
}

#[test]
fn wait_for_key_rejects_a_chord_containing_the_key() {
    let clock = MockClock::new();
    let board = MockBoard::with_script(&[0, 0b0011, 0]);
    let mut game = TestGame::new(board, &clock, FixedPattern::default(), test_config());

    let response = game.wait_for_key(KeyPattern::from_bits(0b0001));

    assert_eq!(response, Response::Wrong(KeyPattern::from_bits(0b0011)));
    assert!(!response.is_correct());
}

#[test]
fn wait_for_key_times_out_after_key_timeout_ticks() {
    let clock = MockClock::new();
    let board = MockBoard::new();
    let config = test_config();
    let mut game = TestGame::new(board, &clock, FixedPattern::default(), config);

    let response = game.wait_for_key(KeyPattern::from_bits(0b1000));

    assert_eq!(response, Response::TimedOut);
    // One release check, the timeout ticks, one release check.
    assert_eq!(game.board().reads(), config.key_timeout as usize + 2);
}

#[test]
fn press_on_the_last_tick_still_counts() {
    let config = test_config();
    let mut script = vec![0u8; config.key_timeout as usize];
    script.push(0b0100);
    script.push(0);
    let clock = MockClock::new();
    let board = MockBoard::with_script(&script);
    let mut game = TestGame::new(board, &clock, FixedPattern::default(), config);

    assert_eq!(
        game.wait_for_key(KeyPattern::from_bits(0b0100)),
        Response::Correct
    );
}

#[test]
fn celebrate_flashes_each_led_twice_per_round() {
    let clock = MockClock::new();
    let board = MockBoard::new();
    let config = test_config();
    let mut game = TestGame::new(board, &clock, FixedPattern::default(), config);

    game.celebrate();

    let round = [1, 0, 1, 0, 2, 0, 2, 0, 4, 0, 4, 0, 8, 0, 8, 0];
    assert_eq!(game.board().led_history().len(), round.len() * 3);
    assert_eq!(count_runs(game.board().led_history(), &round), 3);
    assert_eq!(game.board().reads(), round.len() * 3);
}

#[test]
fn mock_flashes_all_leds_fifteen_times() {
    let clock = MockClock::new();
    let board = MockBoard::new();
    let mut game = TestGame::new(board, &clock, FixedPattern::default(), test_config());

    game.mock();

    let history = game.board().led_history();
    assert_eq!(history.len(), 30);
    assert!(history.chunks(2).all(|pair| pair == [0b1111, 0]));
}
