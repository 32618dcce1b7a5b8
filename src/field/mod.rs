//! Finite field arithmetic over Z/pZ for a runtime-chosen prime p.
//!
//! Unlike a fixed field such as GF(2^8), the modulus here is picked per
//! session, so the field is a value ([`PrimeField`]) rather than a wrapper
//! type: every operation goes through a validated field instance.
//!
//! # Design
//! - **Validated once**: [`PrimeField::new`] rejects non-prime moduli, so
//!   Fermat inversion inside [`PrimeField::inv`] is always sound.
//! - **Widened intermediates**: every multiply runs in `u128` before
//!   reduction; moduli up to `u64::MAX` cannot overflow.
//! - **Explicit failure**: a non-invertible element surfaces as
//!   [`FieldError::NoInverse`], never a silent default.

pub mod prime;

pub use prime::{is_prime, PrimeField};

use core::fmt;

/// Errors for field arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// The requested modulus is not prime.
    NonPrimeModulus,
    /// The element has no multiplicative inverse (gcd with the modulus is not 1).
    NoInverse,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::NonPrimeModulus => write!(f, "Modulus is not prime"),
            FieldError::NoInverse => write!(f, "Element has no multiplicative inverse"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FieldError {}
