//! Flame motion simulation.
//!
//! The flame centre is a mass on a spring, kicked every tick by a random
//! poke whose size follows a slow "agitation" oscillation. A quarter of a
//! tick's velocity is integrated into the position, the position is
//! clamped, and the spring pulls the velocity back towards the centre.
//! The two axes drive the two LED channels.
//!
//! All arithmetic is 16-bit and wraps as it does on an 8-bit AVR, where
//! `int` is 16 bits wide; the damping multiply in particular overflows
//! for velocities above 32 and that is part of the look.

use crate::config::{
    DAMPING_DEN, DAMPING_NUM, DAMPING_PERIOD_MASK, DUTY_CENTER, INITIAL_CENTER_X,
    INITIAL_CENTER_Y, MAX_DEV, MAX_UNCALM, MIN_UNCALM, UNCALM_INC,
};
use crate::prng::Prng;

/// Duty values for the two LED channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Duty {
    pub a: u8,
    pub b: u8,
}

/// Complete simulation state, mutated once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FlameState {
    pub center_x: i16,
    pub center_y: i16,
    pub vel_x: i16,
    pub vel_y: i16,
    /// How large the random pokes are; oscillates between the calm bounds.
    pub agitation: u16,
    /// Signed agitation increment, `±UNCALM_INC`.
    pub agitation_dir: i16,
    /// Wrapping tick counter driving the damping cadence.
    pub tick: u8,
}

impl Default for FlameState {
    fn default() -> Self {
        Self {
            center_x: INITIAL_CENTER_X,
            center_y: INITIAL_CENTER_Y,
            vel_x: 0,
            vel_y: 0,
            agitation: MIN_UNCALM,
            agitation_dir: UNCALM_INC,
            tick: 0,
        }
    }
}

impl FlameState {
    /// Maps the current position to channel duties.
    pub fn duty(&self) -> Duty {
        Duty {
            a: to_duty(self.center_x),
            b: to_duty(self.center_y),
        }
    }
}

/// Physics engine: owns the flame state and its random source.
#[derive(Debug, Clone)]
pub struct Flame {
    state: FlameState,
    rng: Prng,
}

impl Flame {
    /// Starts from the power-on flame state.
    pub fn new(rng: Prng) -> Self {
        Self::with_state(FlameState::default(), rng)
    }

    pub fn with_state(state: FlameState, rng: Prng) -> Self {
        Self { state, rng }
    }

    pub fn state(&self) -> &FlameState {
        &self.state
    }

    /// Advances the simulation by one tick and returns the new duties.
    pub fn step(&mut self) -> Duty {
        // X is drawn before Y; the sequence depends on it.
        let mov_x = self.poke();
        let mov_y = self.poke();

        let s = &mut self.state;

        // Direction reverses on the pre-update value, so agitation may
        // overshoot a bound by one increment.
        if s.agitation < MIN_UNCALM {
            s.agitation_dir = UNCALM_INC;
        }
        if s.agitation > MAX_UNCALM {
            s.agitation_dir = -UNCALM_INC;
        }
        s.agitation = s.agitation.wrapping_add_signed(s.agitation_dir);

        s.center_x = integrate(s.center_x, mov_x, s.vel_x);
        s.center_y = integrate(s.center_y, mov_y, s.vel_y);

        s.tick = s.tick.wrapping_add(1);
        if s.tick & DAMPING_PERIOD_MASK == 0 {
            s.vel_x = damp(s.vel_x);
            s.vel_y = damp(s.vel_y);
        }

        // Hooke's law.
        s.vel_x = s.vel_x.wrapping_sub(s.center_x);
        s.vel_y = s.vel_y.wrapping_sub(s.center_y);

        s.duty()
    }

    /// Random displacement roughly centred on zero, scaled by agitation.
    fn poke(&mut self) -> i16 {
        let agitation = self.state.agitation;
        let draw = self.rng.next_bounded(agitation >> 8);
        draw.wrapping_sub(agitation >> 9) as i16
    }
}

fn integrate(center: i16, poke: i16, vel: i16) -> i16 {
    center
        .wrapping_add(poke.wrapping_add(vel >> 2))
        .clamp(-MAX_DEV, MAX_DEV)
}

pub(crate) fn damp(vel: i16) -> i16 {
    vel.wrapping_mul(DAMPING_NUM) / DAMPING_DEN
}

fn to_duty(center: i16) -> u8 {
    (DUTY_CENTER + center) as u8
}
