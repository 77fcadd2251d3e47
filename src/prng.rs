//! Lightweight pseudo-random source for the flame simulation.
//!
//! A 16-bit Galois linear feedback shift register. Each draw shifts the
//! register right by one and folds the tap mask back in when the bit that
//! fell out was set. Draws are scaled into a bound by taking the high half
//! of a 32-bit product, so no division is needed on the Cortex-M0+.

use crate::config::{DEFAULT_SEED, LFSR_TAPS};

/// Galois LFSR with a bounded-draw interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Prng {
    rn: u16,
}

impl Prng {
    /// Creates a generator with the register set to `seed`.
    ///
    /// Zero is the register's fixed point: every draw then returns 0.
    /// Use [`seed_from_bytes`] to derive a usable seed from hardware.
    pub const fn new(seed: u16) -> Self {
        Self { rn: seed }
    }

    /// Current register contents.
    pub const fn state(&self) -> u16 {
        self.rn
    }

    /// Advances the register and returns a value in `[0, max)`.
    ///
    /// `max == 0` always yields 0.
    pub fn next_bounded(&mut self, max: u16) -> u16 {
        let lsb = self.rn & 1;
        self.rn = (self.rn >> 1) ^ (lsb.wrapping_neg() & LFSR_TAPS);
        ((u32::from(max) * u32::from(self.rn)) >> 16) as u16
    }
}

/// Folds seed material into a non-zero 16-bit seed.
///
/// Bytes are taken as little-endian pairs and XOR-ed together; an odd
/// trailing byte lands in the low half.
pub fn seed_from_bytes(bytes: &[u8]) -> u16 {
    let folded = bytes
        .chunks(2)
        .map(|pair| match pair {
            &[lo, hi] => u16::from_le_bytes([lo, hi]),
            &[lo] => u16::from(lo),
            _ => 0,
        })
        .fold(0u16, |acc, word| acc ^ word);

    if folded == 0 { DEFAULT_SEED } else { folded }
}
