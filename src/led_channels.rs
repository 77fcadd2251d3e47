//! PWM drive for the two LED channels.
//!
//! Both channels sit on TIM2 of the STM32L031:
//!
//! - TIM2_CH1 (PA0): LED1/2 pair, flame X axis
//! - TIM2_CH2 (PA1): LED3/4 pair, flame Y axis
//!
//! The LEDs are fed through a low-side MOSFET on PA4 which the power
//! controller opens while the candle sleeps.

use embassy_stm32::{peripherals::TIM2, timer::simple_pwm::SimplePwm};
use tinycandle::{Duty, ports::DutyOutput};

/// Full-scale duty value of the simulation output.
const DUTY_FULL_SCALE: u16 = u8::MAX as u16;

/// Two-channel PWM output fed by the flame simulation.
pub struct PwmLeds {
    /// TIM2 in edge-aligned PWM mode with CH1 and CH2 attached
    pwm: SimplePwm<'static, TIM2>,
}

impl PwmLeds {
    /// Creates a new PwmLeds controller.
    ///
    /// Channels stay disabled until [`DutyOutput::enable`] is called.
    ///
    /// # Arguments
    ///
    /// * `pwm` - TIM2 PWM driver with CH1 and CH2 pins attached
    pub fn new(pwm: SimplePwm<'static, TIM2>) -> Self {
        Self { pwm }
    }
}

impl DutyOutput for PwmLeds {
    /// Scales 8-bit duties onto the timer's compare range.
    fn set_duty(&mut self, duty: Duty) {
        self.pwm
            .ch1()
            .set_duty_cycle_fraction(u16::from(duty.a), DUTY_FULL_SCALE);
        self.pwm
            .ch2()
            .set_duty_cycle_fraction(u16::from(duty.b), DUTY_FULL_SCALE);
    }

    fn enable(&mut self) {
        self.pwm.ch1().enable();
        self.pwm.ch2().enable();
    }

    /// Stops both compare outputs; the pins then idle low.
    fn disable(&mut self) {
        self.pwm.ch1().disable();
        self.pwm.ch2().disable();
    }
}
