//! Push button with configurable active level.

use core::convert::Infallible;

use embedded_hal::digital::v2::InputPin;

/// Electrical level that means "pressed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Switch to ground with a pull-up.
    #[default]
    ActiveLow,
    /// Switch to supply with a pull-down.
    ActiveHigh,
}

/// Button sampled synchronously by the control loop.
pub struct Button<P> {
    pin: P,
    polarity: Polarity,
}

impl<P> Button<P>
where
    P: InputPin<Error = Infallible>,
{
    pub fn new(pin: P, polarity: Polarity) -> Self {
        Self { pin, polarity }
    }

    /// Samples the pin once. Bounce is handled by the caller.
    pub fn is_pressed(&self) -> bool {
        let level = match self.polarity {
            Polarity::ActiveLow => self.pin.is_low(),
            Polarity::ActiveHigh => self.pin.is_high(),
        };
        match level {
            Ok(pressed) => pressed,
            Err(never) => match never {},
        }
    }
}
