//! Hardware abstraction and peripheral initialization.
//!
//! This module defines the pin mappings and peripheral initialization
//! for the candle board.
//!
//! # Pin Assignments
//!
//! ## LEDs
//! - **PA0**: TIM2_CH1 - PWM for LED1/2 (flame X axis)
//! - **PA1**: TIM2_CH2 - PWM for LED3/4 (flame Y axis)
//! - **PA4**: LOAD - MOSFET gate for the LED supply, active high
//!
//! ## Button
//! - **PA2**: BUTTON_N - Active-low push button with internal pull-up,
//!   also the EXTI line 2 wake source
//!
//! ## Low Power & RTC
//! - **PC14**: OSC32_IN - 32.768 kHz crystal input
//! - **PC15**: OSC32_OUT - 32.768 kHz crystal output
//!
//! ## Debug (SWD)
//! - **PA13**: SWDIO
//! - **PA14**: SWCLK

use embassy_stm32::{
    gpio::{Input, Level, Output, OutputType, Pull, Speed},
    time::Hertz,
    timer::{
        low_level::CountingMode,
        simple_pwm::{PwmPin, SimplePwm},
    },
};
use tinycandle::{Button, Polarity, config::PWM_FREQ_HZ};

use crate::led_channels::PwmLeds;

/// Top-level peripheral container for the candle.
///
/// Owns every pin the core needs and hands them out once to the
/// control loop.
pub struct Peripherals {
    /// PWM outputs for both LED channels
    pub leds: PwmLeds,
    /// Power button, sampled after every tick
    pub button: Button<Input<'static>>,
    /// LED supply switch
    pub load: Output<'static>,
}

impl Peripherals {
    /// Initializes all peripherals from STM32 peripheral singleton.
    ///
    /// # Initial GPIO States
    ///
    /// - PA0/PA1: TIM2 push-pull outputs, channels disabled
    /// - PA2 (BUTTON_N): Input, pull-up
    /// - PA4 (LOAD): Low (LEDs unpowered until the loop starts)
    ///
    /// # Arguments
    ///
    /// * `p` - STM32 peripheral singleton from embassy_stm32::init()
    pub fn new(p: embassy_stm32::Peripherals) -> Self {
        let pwm = SimplePwm::new(
            p.TIM2,
            Some(PwmPin::new(p.PA0, OutputType::PushPull)),
            Some(PwmPin::new(p.PA1, OutputType::PushPull)),
            None,
            None,
            Hertz::hz(PWM_FREQ_HZ),
            CountingMode::EdgeAlignedUp,
        );

        Self {
            leds: PwmLeds::new(pwm),
            button: Button::new(Input::new(p.PA2, Pull::Up), Polarity::ActiveLow),
            load: Output::new(p.PA4, Level::Low, Speed::Low),
        }
    }
}
