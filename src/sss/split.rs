//! Share generation: threshold logic and the secret-bearing polynomial.
//!
//! Splitting builds a random polynomial of degree t-1 whose constant term
//! is the secret, then evaluates it at x = 1..=n. Never at x = 0, where the
//! value is the secret itself.
//!
//! # Security
//! - **Zeroization**: The coefficient buffer (secret included) is wiped
//!   after the shares are produced.
//! - **Validation**: All parameter checks run before any randomness is
//!   consumed; on failure nothing is returned and nothing is drawn.

use alloc::vec::Vec;
use rand_core::RngCore;
use zeroize::Zeroizing;

use crate::field::PrimeField;
use crate::sss::polynomial::{evaluate, random_coefficients};
use crate::sss::{share::Share, SssError};

/// Splits `secret` into `n` shares, any `t` of which reconstruct it.
///
/// # Arguments
/// * `secret` - The secret, a residue in `[0, modulus)`.
/// * `t` - The threshold number of shares required for reconstruction.
/// * `n` - The total number of shares to generate.
/// * `modulus` - The prime field modulus; must exceed both `secret` and `n`.
/// * `rng` - The session random source (seeded once, not per call).
///
/// # Returns
/// * `Ok(Vec<Share>)` containing `n` shares at x = 1..=n.
/// * `Err(SssError)` naming the violated precondition; no partial share
///   set is ever returned.
pub fn split_secret<R: RngCore + ?Sized>(
    secret: u64,
    t: u64,
    n: u64,
    modulus: u64,
    rng: &mut R,
) -> Result<Vec<Share>, SssError> {
    let field = PrimeField::new(modulus).map_err(|_| SssError::InvalidModulus)?;
    split_in_field(&field, secret, t, n, rng)
}

pub(crate) fn split_in_field<R: RngCore + ?Sized>(
    field: &PrimeField,
    secret: u64,
    t: u64,
    n: u64,
    rng: &mut R,
) -> Result<Vec<Share>, SssError> {
    if t == 0 {
        return Err(SssError::InvalidThreshold);
    }
    if n == 0 || n >= field.modulus() {
        // x = 1..=n must stay distinct nonzero residues mod p.
        return Err(SssError::InvalidShareCount);
    }
    if t > n {
        return Err(SssError::ThresholdExceedsParticipants);
    }
    if secret >= field.modulus() {
        return Err(SssError::SecretOutOfRange);
    }

    log::debug!(
        "split: t={} n={} modulus={}",
        t,
        n,
        field.modulus()
    );

    // Coefficients [c0, c1, ..., c(t-1)]: c0 is the secret, the rest are
    // random. Wrapped in Zeroizing so the secret is wiped with the buffer.
    let mut coeffs = Zeroizing::new(Vec::with_capacity(t as usize));
    coeffs.push(secret);
    coeffs.extend_from_slice(&random_coefficients(t as usize - 1, field, rng));

    let mut shares = Vec::with_capacity(n as usize);
    for x in 1..=n {
        let y = evaluate(&coeffs, x, field);
        shares.push(Share::new(x, y)?);
    }

    Ok(shares)
}
