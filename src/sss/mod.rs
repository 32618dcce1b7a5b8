//! Shamir's Secret Sharing over the prime field Z/pZ.
//!
//! A secret is embedded as the constant term of a random degree-(t-1)
//! polynomial; shares are evaluations of that polynomial at x = 1..=n and
//! any t of them pin down the constant term via Lagrange interpolation at
//! x = 0.
//!
//! # Components
//! - `share`: Definition of a secret share.
//! - `split`: Parameter validation, polynomial generation and share
//!   evaluation.
//! - `reconstruct`: Lagrange interpolation for secret recovery.
//! - `refresh`: Proactive re-randomization of an existing share set.
//!
//! # Security
//! - **Zeroization**: Polynomial coefficients and share values are wiped on
//!   drop; `Debug` output redacts y-coordinates.
//! - **Validation**: Non-prime moduli, out-of-range secrets and duplicate
//!   x-coordinates are rejected before any field arithmetic runs.
//! - **Threshold property**: Fewer than t shares interpolate to a
//!   well-defined field element that carries no information about the
//!   secret. That is the scheme working, not an error.

pub mod reconstruct;
pub mod refresh;
pub mod share;
pub mod split;
pub(crate) mod polynomial;

pub use reconstruct::reconstruct_secret;
pub use refresh::refresh_shares;
pub use share::Share;
pub use split::split_secret;

use core::fmt;

use alloc::vec::Vec;
use rand_core::RngCore;

use crate::field::{FieldError, PrimeField};

/// Errors for secret sharing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SssError {
    /// The modulus is not prime.
    InvalidModulus,
    /// The threshold is zero (t >= 1 is required, t >= 2 for refresh).
    InvalidThreshold,
    /// The threshold exceeds the number of participants (t > n).
    ThresholdExceedsParticipants,
    /// The share count is zero or too large for the modulus (n >= p would
    /// repeat x-coordinates modulo p).
    InvalidShareCount,
    /// The secret is not a residue of the field (secret >= p).
    SecretOutOfRange,
    /// A share's x-coordinate is zero or not a residue of the field.
    InvalidShareIndex,
    /// Two supplied shares have the same x-coordinate.
    DuplicateShareIndex,
    /// No shares were supplied for reconstruction.
    InsufficientShares,
    /// A Lagrange denominator has no multiplicative inverse.
    InverseNotFound,
}

impl fmt::Display for SssError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SssError::InvalidModulus => write!(f, "Modulus is not prime"),
            SssError::InvalidThreshold => write!(f, "Threshold is too small"),
            SssError::ThresholdExceedsParticipants => {
                write!(f, "Threshold exceeds the number of participants")
            }
            SssError::InvalidShareCount => write!(f, "Share count is zero or exceeds the modulus"),
            SssError::SecretOutOfRange => write!(f, "Secret is not a residue of the field"),
            SssError::InvalidShareIndex => write!(f, "Share x-coordinate is not a nonzero residue"),
            SssError::DuplicateShareIndex => write!(f, "Duplicate share x-coordinate"),
            SssError::InsufficientShares => write!(f, "No shares supplied"),
            SssError::InverseNotFound => write!(f, "Lagrange denominator has no inverse"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SssError {}

impl From<FieldError> for SssError {
    fn from(e: FieldError) -> Self {
        match e {
            FieldError::NonPrimeModulus => SssError::InvalidModulus,
            FieldError::NoInverse => SssError::InverseNotFound,
        }
    }
}

/// A trait for secret sharing schemes.
///
/// Abstract interface to support other fields or schemes behind the same
/// surface.
pub trait SecretSharingScheme {
    type Share;
    type Secret;
    type Error;

    /// Splits a secret into n shares with threshold t.
    fn split<R: RngCore + ?Sized>(
        &self,
        secret: Self::Secret,
        t: u64,
        n: u64,
        rng: &mut R,
    ) -> Result<Vec<Self::Share>, Self::Error>;

    /// Reconstructs a secret from shares.
    fn reconstruct(&self, shares: &[Self::Share]) -> Result<Self::Secret, Self::Error>;
}

/// Shamir's scheme over Z/pZ with the modulus fixed for the session.
///
/// The modulus is validated prime exactly once, at construction; the
/// per-call entry points [`split_secret`] and [`reconstruct_secret`]
/// re-validate it instead, for callers that pass a bare integer.
#[derive(Debug, Clone, Copy)]
pub struct ShamirPrime {
    field: PrimeField,
}

impl ShamirPrime {
    /// Creates a scheme instance over Z/pZ.
    ///
    /// # Returns
    /// * `Ok(ShamirPrime)` if `modulus` is prime.
    /// * `Err(SssError::InvalidModulus)` otherwise.
    pub fn new(modulus: u64) -> Result<Self, SssError> {
        let field = PrimeField::new(modulus).map_err(|_| SssError::InvalidModulus)?;
        Ok(Self { field })
    }

    /// The session modulus p.
    pub fn modulus(&self) -> u64 {
        self.field.modulus()
    }

    /// Re-randomizes `shares` in place without touching the secret.
    ///
    /// See [`refresh_shares`].
    pub fn refresh<R: RngCore + ?Sized>(
        &self,
        shares: &mut [Share],
        t: u64,
        rng: &mut R,
    ) -> Result<(), SssError> {
        refresh::refresh_in_field(&self.field, shares, t, rng)
    }
}

impl SecretSharingScheme for ShamirPrime {
    type Share = Share;
    type Secret = u64;
    type Error = SssError;

    fn split<R: RngCore + ?Sized>(
        &self,
        secret: u64,
        t: u64,
        n: u64,
        rng: &mut R,
    ) -> Result<Vec<Share>, SssError> {
        split::split_in_field(&self.field, secret, t, n, rng)
    }

    fn reconstruct(&self, shares: &[Share]) -> Result<u64, SssError> {
        reconstruct::reconstruct_in_field(&self.field, shares)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic RNG for tests: yields an incrementing u64 sequence.
    struct SequenceRng {
        state: u64,
    }

    impl SequenceRng {
        fn new(start: u64) -> Self {
            Self { state: start }
        }
    }

    impl RngCore for SequenceRng {
        fn next_u32(&mut self) -> u32 {
            self.next_u64() as u32
        }
        fn next_u64(&mut self) -> u64 {
            let v = self.state;
            self.state = self.state.wrapping_add(1);
            v
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for chunk in dest.chunks_mut(8) {
                let bytes = self.next_u64().to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
        }
        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    #[test]
    fn test_scheme_round_trip() {
        let scheme = ShamirPrime::new(97).unwrap();
        let mut rng = SequenceRng::new(31);

        let shares = scheme.split(42, 3, 6, &mut rng).unwrap();
        assert_eq!(shares.len(), 6);
        assert_eq!(scheme.reconstruct(&shares[..3]).unwrap(), 42);
        assert_eq!(scheme.reconstruct(&shares[3..]).unwrap(), 42);
    }

    #[test]
    fn test_scheme_rejects_composite_modulus() {
        assert_eq!(ShamirPrime::new(24).unwrap_err(), SssError::InvalidModulus);
    }

    #[test]
    fn test_scheme_refresh_keeps_secret() {
        let scheme = ShamirPrime::new(23).unwrap();
        let mut rng = SequenceRng::new(9);

        let mut shares = scheme.split(7, 3, 5, &mut rng).unwrap();
        let before: alloc::vec::Vec<u64> = shares.iter().map(|s| s.y).collect();

        scheme.refresh(&mut shares, 3, &mut rng).unwrap();
        let after: alloc::vec::Vec<u64> = shares.iter().map(|s| s.y).collect();

        assert_ne!(before, after);
        assert_eq!(scheme.reconstruct(&shares[..3]).unwrap(), 7);
    }
}
