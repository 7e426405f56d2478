//! Random number source.
//!
//! Only generators marked [`CryptoRng`] can be drawn from here, so a
//! time-seeded or other general-purpose PRNG cannot reach the sampler.

use rand::rngs::ThreadRng;
use rand::{CryptoRng, Rng};

/// Thread-local CSPRNG, seeded and periodically reseeded from the OS.
#[inline]
pub fn rng() -> ThreadRng {
    rand::rng()
}

/// Uniform index in `0..len`. Panics if `len` is zero.
#[inline(always)]
pub fn index<R: CryptoRng + ?Sized>(rng: &mut R, len: usize) -> usize {
    rng.random_range(0..len)
}
