//! Boundary traits between the candle core and the board.
//!
//! ```text
//!   Candle ──▶ DutyOutput   (two PWM channels)
//!          ──▶ Delay        (tick cadence, debounce)
//!   PowerController ──▶ Suspend (low-power halt until wake)
//! ```
//!
//! The button and the load switch are plain `embedded-hal` pins and do
//! not need a trait of their own.

use crate::flame::Duty;

/// Two-channel PWM sink driven by the flame simulation.
pub trait DutyOutput {
    /// Latches new compare values; the latest write wins.
    fn set_duty(&mut self, duty: Duty);

    /// Starts driving both channels.
    fn enable(&mut self);

    /// Stops driving both channels.
    fn disable(&mut self);
}

/// Fixed, non-cancellable wait.
#[allow(async_fn_in_trait)]
pub trait Delay {
    async fn delay_ms(&mut self, ms: u32);
}

/// Processor-wide low-power suspend.
///
/// Returns only once a wake event has ended the suspend. This is the
/// sole suspension point of the system.
#[allow(async_fn_in_trait)]
pub trait Suspend {
    async fn suspend(&mut self);
}
