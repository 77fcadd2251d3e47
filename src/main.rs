//! Firmware for a battery-powered two-channel LED candle.
//!
//! # Overview
//!
//! This firmware drives a tealight-style candle featuring:
//! - Two LED pairs on independent PWM channels flickering like a flame
//! - A single push button that powers the candle down and wakes it again
//! - Ultra-low power operation using STM32L031G6 in STOP mode while off
//!
//! # Hardware
//!
//! - **MCU**: STM32L031G6U6 (Cortex-M0+, ultra-low-power)
//! - **LEDs**: 4 warm white/yellow, two per PWM channel
//! - **Load switch**: N-channel MOSFET on the LED supply
//! - **Button**: momentary switch to ground
//! - **RTC**: 32.768 kHz crystal for timekeeping
//!
//! # Operation
//!
//! The main loop advances the flame simulation every 25 ms and writes the
//! two duties to TIM2. A button press disables the PWM, opens the MOSFET
//! and suspends the MCU in STOP mode; the next button edge fires EXTI line
//! 2, which wakes the core and the candle picks up where it stopped.
//!
//! # Module Organization
//!
//! - [`hardware`] - Pin mappings and peripheral initialization
//! - [`led_channels`] - TIM2 PWM output for both LED channels
//! - [`sleep`] - STOP-mode suspend, wake interrupt and time source

#![no_std]
#![no_main]

mod hardware;
mod led_channels;
mod sleep;

use embassy_executor::Spawner;
use embassy_stm32::{
    Config,
    rcc::{self, LsConfig, LseConfig, MSIRange},
    time::Hertz,
};
use embassy_time::Timer;
use tinycandle::{
    Candle, Flame, PowerController, Prng, config::PWM_TIMER_MIN_HZ, prng::seed_from_bytes,
};
use {defmt_rtt as _, panic_probe as _};

use hardware::Peripherals;
use sleep::{BUTTON_WAKE, StopMode, TimerDelay, setup_button_wake};

/// Slowest MSI range that still clocks TIM2 at `min_hz` or faster.
///
/// Only the ranges this board is run at are listed; anything above 1 MHz
/// falls through to 2 MHz.
fn msi_range_for(min_hz: u32) -> MSIRange {
    match min_hz {
        0..=65_536 => MSIRange::RANGE66K,
        65_537..=1_048_576 => MSIRange::RANGE1M,
        _ => MSIRange::RANGE2M,
    }
}

/// Clock tree for the candle.
///
/// MSI runs the core directly (no PLL, no HSI) at the slowest range TIM2
/// can use for 8-bit flicker, so the active current between ticks stays
/// low. Debug builds pin MSI to 2 MHz so the debugger stays attached.
/// The LSE crystal feeds the RTC.
fn candle_clock_config() -> rcc::Config {
    let mut clocks = rcc::Config::default();

    clocks.msi = if cfg!(feature = "debug-mode") {
        Some(MSIRange::RANGE2M)
    } else {
        Some(msi_range_for(PWM_TIMER_MIN_HZ))
    };
    clocks.hsi = false;
    clocks.sys = rcc::Sysclk::MSI;
    clocks.ls = LsConfig {
        rtc: rcc::RtcClockSource::LSE,
        lsi: false,
        lse: Some(LseConfig {
            frequency: Hertz::hz(32_768),
            mode: rcc::LseMode::Oscillator(rcc::LseDrive::Low),
        }),
    };
    clocks.voltage_scale = rcc::VoltageScale::RANGE1;

    clocks
}

/// Main entry point for candle firmware.
///
/// # Initialization Sequence
///
/// 1. Configure MSI clocking sized for the PWM resolution
/// 2. Initialize STM32 peripherals
/// 3. Setup EXTI wake on the button line
/// 4. Seed the flame PRNG from the device unique ID
/// 5. Initialize GPIO, PWM and the power controller
/// 6. Enter the candle loop (never returns)
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let mut config = Config::default();
    config.rcc = candle_clock_config();

    let p = embassy_stm32::init(config);

    #[cfg(feature = "debug-mode")]
    defmt::info!("Candle firmware starting...");

    // Wait 3 seconds after boot to allow debugger connection
    // before the first STOP mode entry. Negligible battery impact.
    #[cfg(feature = "debug-mode")]
    defmt::info!("Waiting 3 seconds for debugger connection...");

    Timer::after_secs(3).await;

    #[cfg(feature = "debug-mode")]
    defmt::info!("Setting up button wake...");

    setup_button_wake();

    let seed = seed_from_bytes(embassy_stm32::uid::uid());

    #[cfg(feature = "debug-mode")]
    defmt::info!("PRNG seed {=u16:#x}", seed);

    let peripherals = Peripherals::new(p);

    let power = PowerController::new(
        peripherals.button,
        peripherals.load,
        StopMode::new(&BUTTON_WAKE),
    );

    let mut candle = Candle::new(
        Flame::new(Prng::new(seed)),
        peripherals.leds,
        TimerDelay,
        power,
    );

    #[cfg(feature = "debug-mode")]
    defmt::info!("Entering candle loop...");

    candle.run().await
}
