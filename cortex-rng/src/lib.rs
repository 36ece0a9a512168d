#![deny(missing_docs)]
//! Seeded uniform random source.
//!
//! Experiment randomisation must replay identically from a configured
//! seed, across runs and across reimplementations in other languages, so
//! the generator is a fully specified linear congruential generator
//! rather than whatever the platform's math library provides.
//!
//! Recurrence (Knuth's MMIX constants, modulo 2^64):
//!
//! ```text
//! state' = state * 6364136223846793005 + 1442695040888963407
//! ```
//!
//! Uniform deviates take the top 53 bits of the state, yielding every
//! representable multiple of 2^-53 in `[0, 1)`.
//!
//! Seeding transform: a numeric seed contributes its IEEE-754 bit
//! pattern; a string seed contributes the 64-bit FNV-1a hash of its bytes.

use cortex0::config::Seed;

const MULTIPLIER: u64 = 6364136223846793005;
const INCREMENT: u64 = 1442695040888963407;

const FNV_OFFSET: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x100000001b3;

/// 64-bit linear congruential generator. One stateful instance is shared
/// per session.
pub struct Lcg64 {
    state: u64,
}

impl Lcg64 {
    /// Seed from a configured value.
    pub fn from_seed(seed: &Seed) -> Self {
        let state = match seed {
            Seed::Number(n) => n.to_bits(),
            Seed::Text(s) => fnv1a(s.as_bytes()),
        };
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT);
        self.state
    }

    /// The next uniform deviate in `[0, 1)`.
    pub fn random(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET;
    for &byte in bytes {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}
