//! Compile-time parameters for the candle simulation and power handling.
//!
//! The flicker is tuned by feel, so every value here is a plain constant.
//! Inconsistent combinations are rejected by the `const` assertions at the
//! bottom of this file and never reach the device.

/// Lower bound of the agitation oscillation (most calm).
pub const MIN_UNCALM: u16 = 20 * 256;

/// Upper bound of the agitation oscillation (most agitated).
pub const MAX_UNCALM: u16 = 120 * 256;

/// Agitation change per tick.
pub const UNCALM_INC: i16 = 20;

/// Maximum flame deviation from centre, per axis.
pub const MAX_DEV: i16 = 100;

/// Duty value emitted for a perfectly centred flame.
pub const DUTY_CENTER: i16 = 155;

/// Power-on flame position.
pub const INITIAL_CENTER_X: i16 = MAX_DEV;
pub const INITIAL_CENTER_Y: i16 = MAX_DEV / 2;

/// Velocity damping ratio, applied once every `DAMPING_PERIOD_MASK + 1` ticks.
pub const DAMPING_NUM: i16 = 999;
pub const DAMPING_DEN: i16 = 1000;
pub const DAMPING_PERIOD_MASK: u8 = 3;

/// Galois LFSR tap mask (full period over 16 bits).
pub const LFSR_TAPS: u16 = 0xB400;

/// Seed used when the folded seed material is zero.
pub const DEFAULT_SEED: u16 = 0xACE1;

/// Time between two simulation ticks.
pub const CANDLE_DELAY_MS: u32 = 25;

/// Button debounce window.
pub const DEBOUNCE_MS: u32 = 10;

/// Spacing of button polls while waiting for a release.
pub const RELEASE_POLL_MS: u32 = 1;

/// PWM carrier frequency for both LED channels.
pub const PWM_FREQ_HZ: u32 = 600;

/// Timer clock needed for full 8-bit duty resolution at the PWM carrier.
pub const PWM_TIMER_MIN_HZ: u32 = PWM_FREQ_HZ * (u8::MAX as u32 + 1);

const _: () = assert!(MIN_UNCALM <= MAX_UNCALM, "MIN_UNCALM must not exceed MAX_UNCALM");
const _: () = assert!(UNCALM_INC > 0, "UNCALM_INC must be positive");
const _: () = assert!(
    MIN_UNCALM as i32 - UNCALM_INC as i32 >= 0
        && MAX_UNCALM as i32 + UNCALM_INC as i32 <= u16::MAX as i32,
    "agitation overshoot must stay within 16 bits"
);
const _: () = assert!(
    DUTY_CENTER - MAX_DEV >= 0 && DUTY_CENTER + MAX_DEV <= u8::MAX as i16,
    "duty range must fit in 8 bits"
);
const _: () = assert!(
    INITIAL_CENTER_X.abs() <= MAX_DEV && INITIAL_CENTER_Y.abs() <= MAX_DEV,
    "initial position must lie inside the clamp"
);
const _: () = assert!(DEFAULT_SEED != 0, "a zero seed locks the LFSR");
