//! Proactive refresh of an existing share set.
//!
//! Refreshing adds a fresh random polynomial g with g(0) = 0 to every
//! share: y' = y + g(x) mod p. The constant term is untouched, so the
//! secret is unchanged while every old share becomes useless on its own.
//!
//! # Security
//! - **Zeroization**: The refresh polynomial is wiped after use.
//! - **No reconstruction**: The secret never exists in memory during a
//!   refresh.

use rand_core::RngCore;
use zeroize::Zeroizing;

use crate::field::PrimeField;
use crate::sss::polynomial::{evaluate, random_coefficients};
use crate::sss::reconstruct::validate_indices;
use crate::sss::{share::Share, SssError};

/// Re-randomizes `shares` in place, preserving the underlying secret.
///
/// # Arguments
/// * `shares` - The shares to refresh; typically all n of them.
/// * `t` - The threshold of the original sharing (the refresh polynomial
///   has degree t-1). Must be at least 2: with t = 1 the refresh
///   polynomial is identically zero and the call would be a no-op.
/// * `modulus` - The prime modulus the shares were generated under.
/// * `rng` - The session random source.
///
/// # Returns
/// * `Ok(())` with every share's y replaced.
/// * `Err(SssError)` on invalid parameters; the shares are not modified.
pub fn refresh_shares<R: RngCore + ?Sized>(
    shares: &mut [Share],
    t: u64,
    modulus: u64,
    rng: &mut R,
) -> Result<(), SssError> {
    let field = PrimeField::new(modulus).map_err(|_| SssError::InvalidModulus)?;
    refresh_in_field(&field, shares, t, rng)
}

pub(crate) fn refresh_in_field<R: RngCore + ?Sized>(
    field: &PrimeField,
    shares: &mut [Share],
    t: u64,
    rng: &mut R,
) -> Result<(), SssError> {
    if shares.is_empty() {
        return Err(SssError::InsufficientShares);
    }
    if t < 2 {
        return Err(SssError::InvalidThreshold);
    }
    validate_indices(field, shares)?;

    log::debug!(
        "refresh: k={} t={} modulus={}",
        shares.len(),
        t,
        field.modulus()
    );

    // g(x) = 0 + c1*x + ... + c(t-1)*x^(t-1)
    let mut coeffs = Zeroizing::new(alloc::vec![0u64]);
    coeffs.extend_from_slice(&random_coefficients(t as usize - 1, field, rng));

    for share in shares.iter_mut() {
        share.y = field.add(share.y, evaluate(&coeffs, share.x, field));
    }

    Ok(())
}
