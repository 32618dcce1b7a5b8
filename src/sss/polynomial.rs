//! Polynomial operations shared by split, reconstruct and refresh.

use alloc::vec::Vec;
use rand_core::RngCore;
use zeroize::Zeroizing;

use crate::field::PrimeField;

/// Draws `count` coefficients uniformly from `[0, p)`.
///
/// Uses rejection sampling on `next_u64` so the draw carries no modulo
/// bias. The buffer is wrapped in `Zeroizing` and wiped on drop.
pub(crate) fn random_coefficients<R: RngCore + ?Sized>(
    count: usize,
    field: &PrimeField,
    rng: &mut R,
) -> Zeroizing<Vec<u64>> {
    let mut coeffs = Zeroizing::new(Vec::with_capacity(count));
    for _ in 0..count {
        coeffs.push(uniform(field.modulus(), rng));
    }
    coeffs
}

/// A uniform draw from `[0, modulus)`.
fn uniform<R: RngCore + ?Sized>(modulus: u64, rng: &mut R) -> u64 {
    // Largest multiple of `modulus` representable in u64; raw values at or
    // above it are redrawn so every residue is equally likely.
    let bound = u64::MAX - u64::MAX % modulus;
    loop {
        let v = rng.next_u64();
        if v < bound {
            return v % modulus;
        }
    }
}

/// Evaluates f(x) = c[0] + c[1]*x + ... + c[t-1]*x^(t-1) in Z/pZ.
///
/// Keeps a running power of x and reduces after every multiply-add, so no
/// intermediate leaves the field.
pub(crate) fn evaluate(coeffs: &[u64], x: u64, field: &PrimeField) -> u64 {
    let mut acc = 0u64;
    let mut power = 1u64; // x^i mod p
    for &c in coeffs {
        acc = field.add(acc, field.mul(c, power));
        power = field.mul(power, x);
    }
    acc
}
