//! Mock board for integration tests.
//!
//! Records every output, load, delay and suspend call in one shared log
//! so tests can assert on the exact order of the power sequence without
//! touching real PWM registers.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::digital::v2::{InputPin, OutputPin};
use tinycandle::ports::{Delay, DutyOutput, Suspend};
use tinycandle::{Button, Candle, Duty, Flame, Polarity, PowerController, Prng, WakeFlag};

// ── Call record ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwEvent {
    Duty(Duty),
    OutputsEnabled,
    OutputsDisabled,
    LoadOn,
    LoadOff,
    Delay(u32),
    Suspend,
}

pub type Log = Rc<RefCell<Vec<HwEvent>>>;

// ── Outputs ───────────────────────────────────────────────────

pub struct MockLeds {
    log: Log,
    pub enabled: bool,
}

impl DutyOutput for MockLeds {
    fn set_duty(&mut self, duty: Duty) {
        self.log.borrow_mut().push(HwEvent::Duty(duty));
    }

    fn enable(&mut self) {
        self.enabled = true;
        self.log.borrow_mut().push(HwEvent::OutputsEnabled);
    }

    fn disable(&mut self) {
        self.enabled = false;
        self.log.borrow_mut().push(HwEvent::OutputsDisabled);
    }
}

pub struct MockLoad {
    log: Log,
}

impl OutputPin for MockLoad {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(HwEvent::LoadOff);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(HwEvent::LoadOn);
        Ok(())
    }
}

// ── Button ────────────────────────────────────────────────────

/// Active-low button pin replaying a script of "pressed" samples.
/// Once the script runs out the button reads released.
#[derive(Clone, Default)]
pub struct ScriptedButton {
    presses: Rc<RefCell<VecDeque<bool>>>,
}

#[allow(dead_code)]
impl ScriptedButton {
    pub fn push(&self, samples: &[bool]) {
        self.presses.borrow_mut().extend(samples.iter().copied());
    }

    pub fn remaining(&self) -> usize {
        self.presses.borrow().len()
    }

    fn next_pressed(&self) -> bool {
        self.presses.borrow_mut().pop_front().unwrap_or(false)
    }
}

impl InputPin for ScriptedButton {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Self::Error> {
        Ok(!self.next_pressed())
    }

    fn is_low(&self) -> Result<bool, Self::Error> {
        Ok(self.next_pressed())
    }
}

// ── Timing ────────────────────────────────────────────────────

pub struct MockDelay {
    log: Log,
}

impl Delay for MockDelay {
    async fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(HwEvent::Delay(ms));
    }
}

/// Suspend that ends as soon as it is entered.
pub struct InstantWake {
    log: Log,
}

impl Suspend for InstantWake {
    async fn suspend(&mut self) {
        self.log.borrow_mut().push(HwEvent::Suspend);
    }
}

/// Suspend that blocks on a wake flag, like the firmware's STOP mode.
pub struct FlagWake<'a> {
    log: Log,
    flag: &'a WakeFlag,
}

impl Suspend for FlagWake<'_> {
    async fn suspend(&mut self) {
        self.flag.clear();
        self.log.borrow_mut().push(HwEvent::Suspend);
        self.flag.wait().await;
    }
}

// ── Assembled board ───────────────────────────────────────────

pub type MockCandle<S> = Candle<MockLeds, MockDelay, ScriptedButton, MockLoad, S>;

pub struct Board {
    pub log: Log,
    pub button: ScriptedButton,
}

#[allow(dead_code)]
impl Board {
    pub fn new() -> Self {
        Self {
            log: Rc::new(RefCell::new(Vec::new())),
            button: ScriptedButton::default(),
        }
    }

    pub fn candle(&self, seed: u16) -> MockCandle<InstantWake> {
        let suspend = InstantWake {
            log: self.log.clone(),
        };
        self.candle_with(Flame::new(Prng::new(seed)), suspend)
    }

    pub fn flag_candle<'a>(&self, seed: u16, flag: &'a WakeFlag) -> MockCandle<FlagWake<'a>> {
        let suspend = FlagWake {
            log: self.log.clone(),
            flag,
        };
        self.candle_with(Flame::new(Prng::new(seed)), suspend)
    }

    fn candle_with<S: Suspend>(&self, flame: Flame, suspend: S) -> MockCandle<S> {
        let power = PowerController::new(
            Button::new(self.button.clone(), Polarity::ActiveLow),
            MockLoad {
                log: self.log.clone(),
            },
            suspend,
        );
        Candle::new(
            flame,
            MockLeds {
                log: self.log.clone(),
                enabled: false,
            },
            MockDelay {
                log: self.log.clone(),
            },
            power,
        )
    }

    pub fn events(&self) -> Vec<HwEvent> {
        self.log.borrow().clone()
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }

    pub fn duties(&self) -> Vec<Duty> {
        self.log
            .borrow()
            .iter()
            .filter_map(|e| match e {
                HwEvent::Duty(d) => Some(*d),
                _ => None,
            })
            .collect()
    }
}
