//! Session random source.
//!
//! The scheme's callers need one generator seeded once per session, not
//! per call, so repeated splits within a run never reuse a seed. This
//! module wraps that policy in a type instead of leaving a global RNG
//! lying around: construct a [`SessionRng`] at startup and pass it to
//! every split and refresh.
//!
//! The threshold property itself only needs the coefficients to be
//! unpredictable to whoever collects shares, but there is no cost to
//! seeding from the OS, so [`SessionRng::new`] is backed by a CSPRNG
//! ([`rand::rngs::StdRng`]). [`SessionRng::seeded`] exists for
//! reproducible runs and tests.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_core::RngCore;

/// A process-wide random source, seeded exactly once at construction.
pub struct SessionRng(StdRng);

impl SessionRng {
    /// Seeds from OS entropy.
    pub fn new() -> Self {
        Self(StdRng::from_entropy())
    }

    /// Seeds deterministically; for reproducible runs and tests only.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl Default for SessionRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for SessionRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.0.try_fill_bytes(dest)
    }
}
