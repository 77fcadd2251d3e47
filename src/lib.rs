//! Candle flicker simulation for a battery-powered two-channel LED light.
//!
//! # Overview
//!
//! Two PWM channels emulate the flicker of a tealight. The flicker comes
//! from a bounded spring-mass model kicked by a tiny pseudo-random source;
//! a single button powers the light down and wakes it again.
//!
//! Everything in this library is hardware independent and runs on the
//! host. The firmware binary (`firmware` feature) supplies the STM32
//! platform layer: PWM timer, pins, STOP-mode suspend and wake interrupt.
//!
//! # Module Organization
//!
//! - [`config`] - Compile-time tuning parameters
//! - [`prng`] - 16-bit Galois LFSR
//! - [`flame`] - Flame motion simulation and duty mapping
//! - [`power`] - Sleep/wake state machine
//! - [`candle`] - Main control loop
//! - [`ports`] - Traits the board implements
//! - [`button`] - Button polarity handling
//! - [`wake`] - Interrupt-to-task wake event

#![cfg_attr(not(test), no_std)]

pub mod button;
pub mod candle;
pub mod config;
pub mod flame;
pub mod ports;
pub mod power;
pub mod prng;
pub mod wake;

pub use button::{Button, Polarity};
pub use candle::Candle;
pub use flame::{Duty, Flame, FlameState};
pub use power::{PowerController, PowerState};
pub use prng::Prng;
pub use wake::WakeFlag;
