//! Power management for the candle.
//!
//! A button press while the flame is running powers the candle down: the
//! LED channels stop, the load MOSFET opens and the processor suspends
//! until the button line changes level again. The same button is the
//! wake source, so both edges wait for a release before moving on;
//! otherwise one press would be read as "sleep" and "wake" at once.
//!
//! # Sequence
//!
//! ```text
//! Running ─press─▶ outputs off, load off, debounce, wait release, debounce
//!         ─▶ Sleeping ─wake─▶ outputs on, load on, debounce, wait release
//!         ─▶ Running
//! ```
//!
//! Bounce shorter than [`DEBOUNCE_MS`] is absorbed, not reported.

use core::convert::Infallible;

use embedded_hal::digital::v2::{InputPin, OutputPin};

use crate::button::Button;
use crate::config::{DEBOUNCE_MS, RELEASE_POLL_MS};
use crate::ports::{Delay, DutyOutput, Suspend};

/// Whether the candle is simulating or powered down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    /// Outputs enabled, ticking
    #[default]
    Running,
    /// Outputs disabled, processor halted awaiting wake
    Sleeping,
}

/// Controller for the sleep/wake cycle.
///
/// Owns the button, the load switch driver and the suspend primitive. No
/// other component can put the processor to sleep.
pub struct PowerController<P, L, S> {
    /// Sleep trigger and wake source
    button: Button<P>,
    /// Load switch (MOSFET) feeding the LEDs, active high
    load: L,
    /// Platform power-down primitive
    suspend: S,
    /// Current power state
    state: PowerState,
}

impl<P, L, S> PowerController<P, L, S>
where
    P: InputPin<Error = Infallible>,
    L: OutputPin<Error = Infallible>,
    S: Suspend,
{
    /// Creates a new PowerController in the running state.
    ///
    /// # Arguments
    ///
    /// * `button` - Button used both to request sleep and to wake
    /// * `load` - Output driving the LED load switch
    /// * `suspend` - Blocking low-power primitive ended by the wake event
    pub fn new(button: Button<P>, load: L, suspend: S) -> Self {
        Self {
            button,
            load,
            suspend,
            state: PowerState::default(),
        }
    }

    pub fn state(&self) -> PowerState {
        self.state
    }

    /// Samples the button once.
    pub fn button_pressed(&self) -> bool {
        self.button.is_pressed()
    }

    /// Switches the load on. Called once during start-up.
    pub fn init_load(&mut self) {
        self.set_load(true);
    }

    /// Runs a complete sleep cycle.
    ///
    /// Call after a press has been sampled while running. Returns once the
    /// candle has been woken and the wake press has been released; the
    /// caller then resumes ticking from the flame state it already holds.
    ///
    /// # Arguments
    ///
    /// * `outputs` - LED channels to stop and restart
    /// * `delay` - Timer used for debouncing and release polling
    pub async fn power_cycle<O, D>(&mut self, outputs: &mut O, delay: &mut D)
    where
        O: DutyOutput,
        D: Delay,
    {
        self.power_down(outputs, delay).await;

        #[cfg(feature = "debug-mode")]
        defmt::info!("Suspending until wake event");

        self.suspend.suspend().await;

        #[cfg(feature = "debug-mode")]
        defmt::info!("Woken");

        self.power_up(outputs, delay).await;
    }

    /// Running → Sleeping.
    async fn power_down<O: DutyOutput, D: Delay>(&mut self, outputs: &mut O, delay: &mut D) {
        outputs.disable();
        self.set_load(false);
        delay.delay_ms(DEBOUNCE_MS).await;
        self.wait_for_release(delay).await;
        delay.delay_ms(DEBOUNCE_MS).await;
        self.state = PowerState::Sleeping;
    }

    /// Sleeping → Running.
    async fn power_up<O: DutyOutput, D: Delay>(&mut self, outputs: &mut O, delay: &mut D) {
        self.state = PowerState::Running;
        outputs.enable();
        self.set_load(true);
        delay.delay_ms(DEBOUNCE_MS).await;
        self.wait_for_release(delay).await;
    }

    async fn wait_for_release<D: Delay>(&self, delay: &mut D) {
        while self.button.is_pressed() {
            delay.delay_ms(RELEASE_POLL_MS).await;
        }
    }

    fn set_load(&mut self, on: bool) {
        let result = if on {
            self.load.set_high()
        } else {
            self.load.set_low()
        };
        match result {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }
}
