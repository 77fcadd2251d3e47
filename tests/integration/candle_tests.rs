//! Control loop behaviour without button activity.

use embassy_futures::block_on;
use tinycandle::{Duty, PowerState};

use crate::mock_hw::{Board, HwEvent};

fn duty(a: u8, b: u8) -> Duty {
    Duty { a, b }
}

#[test]
fn startup_powers_the_led_stage() {
    let board = Board::new();
    let candle = board.candle(1);

    assert_eq!(
        board.events(),
        vec![HwEvent::OutputsEnabled, HwEvent::LoadOn]
    );
    assert!(candle.outputs().enabled);
    assert_eq!(candle.power_state(), PowerState::Running);
}

#[test]
fn first_ticks_from_seed_one() {
    let board = Board::new();
    let mut candle = board.candle(1);
    board.clear();

    for _ in 0..12 {
        block_on(candle.tick());
    }

    assert_eq!(
        board.duties(),
        vec![
            duty(255, 202),
            duty(223, 181),
            duty(171, 152),
            duty(115, 124),
            duty(118, 120),
            duty(130, 139),
            duty(155, 159),
            duty(192, 176),
            duty(178, 167),
            duty(150, 151),
            duty(122, 135),
            duty(116, 131),
        ]
    );
}

#[test]
fn tick_writes_exactly_one_duty_when_idle() {
    let board = Board::new();
    let mut candle = board.candle(0xACE1);
    board.clear();

    let written = block_on(candle.tick());

    assert_eq!(board.events(), vec![HwEvent::Duty(written)]);
    assert_eq!(written, candle.flame().state().duty());
}

#[test]
fn identical_seeds_give_identical_sequences() {
    let first = Board::new();
    let second = Board::new();
    let mut a = first.candle(0x5EED);
    let mut b = second.candle(0x5EED);

    for _ in 0..500 {
        block_on(a.tick());
        block_on(b.tick());
    }

    assert_eq!(first.duties(), second.duties());
    assert_eq!(a.flame().state(), b.flame().state());
}

#[test]
fn duties_stay_in_output_range() {
    let board = Board::new();
    let mut candle = board.candle(0xBEEF);

    for _ in 0..5_000 {
        let d = block_on(candle.tick());
        assert!((55..=255).contains(&d.a), "channel A out of range: {}", d.a);
        assert!((55..=255).contains(&d.b), "channel B out of range: {}", d.b);
    }
}
