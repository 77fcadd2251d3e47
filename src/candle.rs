//! Main control loop: one simulation tick, then one button sample.

use core::convert::Infallible;

use embedded_hal::digital::v2::{InputPin, OutputPin};

use crate::config::CANDLE_DELAY_MS;
use crate::flame::{Duty, Flame};
use crate::ports::{Delay, DutyOutput, Suspend};
use crate::power::{PowerController, PowerState};

/// Simulation context owned by the main loop.
///
/// The LED channels are written only here, from the flame simulation; the
/// power controller borrows them to switch them off and on.
pub struct Candle<O, D, P, L, S> {
    flame: Flame,
    outputs: O,
    delay: D,
    power: PowerController<P, L, S>,
}

impl<O, D, P, L, S> Candle<O, D, P, L, S>
where
    O: DutyOutput,
    D: Delay,
    P: InputPin<Error = Infallible>,
    L: OutputPin<Error = Infallible>,
    S: Suspend,
{
    /// Assembles the loop and switches the LED stage on.
    pub fn new(flame: Flame, mut outputs: O, delay: D, mut power: PowerController<P, L, S>) -> Self {
        outputs.enable();
        power.init_load();
        Self {
            flame,
            outputs,
            delay,
            power,
        }
    }

    pub fn flame(&self) -> &Flame {
        &self.flame
    }

    pub fn power_state(&self) -> PowerState {
        self.power.state()
    }

    pub fn outputs(&self) -> &O {
        &self.outputs
    }

    /// Advances the flame once, then handles a pending button press.
    ///
    /// Returns the duty written during this tick.
    pub async fn tick(&mut self) -> Duty {
        let duty = self.flame.step();
        self.outputs.set_duty(duty);

        if self.power.button_pressed() {
            #[cfg(feature = "debug-mode")]
            defmt::info!("Button pressed, powering down at {}", duty);

            self.power
                .power_cycle(&mut self.outputs, &mut self.delay)
                .await;
        }

        duty
    }

    /// Runs the candle forever at the fixed tick cadence.
    pub async fn run(&mut self) -> ! {
        loop {
            self.tick().await;
            self.delay.delay_ms(CANDLE_DELAY_MS).await;
        }
    }
}
