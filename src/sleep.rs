//! STOP-mode suspend and button wake interrupt.
//!
//! The button on PA2 is routed to EXTI line 2 on both edges. Any level
//! change fires `EXTI2_3`, whose handler clears the pending bit and raises
//! [`BUTTON_WAKE`]. Nothing else happens in interrupt context.
//!
//! While suspended the embassy executor has nothing to poll and parks the
//! core with WFE. With SLEEPDEEP set that becomes STOP mode; PWR_CR.PDDS is
//! left at its reset value, which selects STOP rather than STANDBY.

use embassy_stm32::pac;
use embassy_time::Timer;
use pac::interrupt;
use tinycandle::{
    WakeFlag,
    ports::{Delay, Suspend},
};

/// EXTI line of the button (PA2; EXTICR reset value maps port A)
const BUTTON_EXTI_LINE: usize = 2;

/// IMR register index for EXTI line 2 (lines 0-31 are in IMR1)
const IMR1_REG_IDX: usize = 0;

/// Wake event raised by the button interrupt.
pub static BUTTON_WAKE: WakeFlag = WakeFlag::new();

/// EXTI lines 2 and 3 interrupt handler.
///
/// Only the button uses these lines. Clears the pending flag so the
/// interrupt does not retrigger, then ends any suspend in progress.
#[interrupt]
fn EXTI2_3() {
    pac::EXTI
        .pr(IMR1_REG_IDX)
        .write(|w| w.set_line(BUTTON_EXTI_LINE, true));

    BUTTON_WAKE.raise();
}

/// Configures EXTI line 2 as the button wake source.
///
/// Both edges are enabled: the candle wakes on whatever the button does.
/// Unmasks `EXTI2_3` in the NVIC, so call it before the first suspend.
pub fn setup_button_wake() {
    let exti = pac::EXTI;

    exti.imr(IMR1_REG_IDX)
        .modify(|w| w.set_line(BUTTON_EXTI_LINE, true));
    exti.rtsr(IMR1_REG_IDX)
        .modify(|w| w.set_line(BUTTON_EXTI_LINE, true));
    exti.ftsr(IMR1_REG_IDX)
        .modify(|w| w.set_line(BUTTON_EXTI_LINE, true));

    unsafe {
        cortex_m::peripheral::NVIC::unmask(embassy_stm32::interrupt::EXTI2_3);
    };
}

/// Power-down primitive: STOP mode until the button wakes the core.
pub struct StopMode {
    wake: &'static WakeFlag,
}

impl StopMode {
    pub fn new(wake: &'static WakeFlag) -> Self {
        Self { wake }
    }
}

impl Suspend for StopMode {
    async fn suspend(&mut self) {
        // Bounce from the sleep press must not end this suspend.
        pac::EXTI
            .pr(IMR1_REG_IDX)
            .write(|w| w.set_line(BUTTON_EXTI_LINE, true));
        self.wake.clear();

        set_deep_sleep(true);
        self.wake.wait().await;
        set_deep_sleep(false);
    }
}

fn set_deep_sleep(enabled: bool) {
    // SAFETY: SCR is only touched from the main task.
    let mut core = unsafe { cortex_m::Peripherals::steal() };
    if enabled {
        core.SCB.set_sleepdeep();
    } else {
        core.SCB.clear_sleepdeep();
    }
}

/// Delay backed by the embassy time driver.
pub struct TimerDelay;

impl Delay for TimerDelay {
    async fn delay_ms(&mut self, ms: u32) {
        Timer::after_millis(u64::from(ms)).await;
    }
}
