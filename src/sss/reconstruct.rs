//! Secret reconstruction from shares.
//!
//! Lagrange interpolation at x = 0 recovers the constant term of the
//! unique degree-(k-1) polynomial through the k supplied points. That term
//! equals the original secret exactly when k >= t; with fewer shares the
//! result is a well-defined field element carrying no information about
//! the secret, which is the threshold property at work.
//!
//! # Security
//! - **Validation**: Duplicate or out-of-range x-coordinates are rejected
//!   up front instead of surfacing as an opaque inversion failure.

use crate::field::PrimeField;
use crate::sss::{share::Share, SssError};

/// Reconstructs the secret from `shares` over Z/modulus.
///
/// # Arguments
/// * `shares` - At least one share; x-coordinates must be pairwise
///   distinct nonzero residues.
/// * `modulus` - The prime modulus the shares were generated under.
///
/// # Returns
/// * `Ok(secret)` - The interpolated constant term.
/// * `Err(SssError)` - On invalid modulus, empty input, or bad
///   x-coordinates.
pub fn reconstruct_secret(shares: &[Share], modulus: u64) -> Result<u64, SssError> {
    let field = PrimeField::new(modulus).map_err(|_| SssError::InvalidModulus)?;
    reconstruct_in_field(&field, shares)
}

pub(crate) fn reconstruct_in_field(field: &PrimeField, shares: &[Share]) -> Result<u64, SssError> {
    if shares.is_empty() {
        return Err(SssError::InsufficientShares);
    }

    validate_indices(field, shares)?;

    log::debug!(
        "reconstruct: k={} modulus={}",
        shares.len(),
        field.modulus()
    );

    // secret = sum_i [ y_i * prod_{j != i} (0 - x_j) / (x_i - x_j) ] mod p.
    // Differences are normalized into [0, p) before inversion.
    let mut secret = 0u64;
    for (i, si) in shares.iter().enumerate() {
        let mut term = field.reduce(si.y);

        for (j, sj) in shares.iter().enumerate() {
            if i == j {
                continue;
            }
            term = field.mul(term, field.neg(sj.x));
            let denom = field.sub(si.x, sj.x);
            let inv = field.inv(denom).map_err(|_| SssError::InverseNotFound)?;
            term = field.mul(term, inv);
        }

        secret = field.add(secret, term);
    }

    Ok(secret)
}

/// Checks every x-coordinate is a nonzero residue and pairwise distinct.
///
/// Simple O(k^2) scan; share counts are small.
pub(crate) fn validate_indices(field: &PrimeField, shares: &[Share]) -> Result<(), SssError> {
    for (i, share) in shares.iter().enumerate() {
        if share.x == 0 || share.x >= field.modulus() {
            return Err(SssError::InvalidShareIndex);
        }
        for other in &shares[i + 1..] {
            if share.x == other.x {
                return Err(SssError::DuplicateShareIndex);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sss::split::split_secret;
    use alloc::vec::Vec;
    use rand_core::RngCore;

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

    fn share(x: u64, y: u64) -> Share {
        Share::new(x, y).unwrap()
    }

    #[test]
    fn test_reconstruct_mod23_subsets() {
        // modulus = 23, secret = 7, n = 5, t = 3.
        let mut rng = SequenceRng::new(77);
        let shares = split_secret(7, 3, 5, 23, &mut rng).unwrap();

        // subset at x = {1, 2, 3}
        assert_eq!(reconstruct_secret(&shares[..3], 23).unwrap(), 7);
        // subset at x = {2, 4, 5}
        let subset = [shares[1].clone(), shares[3].clone(), shares[4].clone()];
        assert_eq!(reconstruct_secret(&subset, 23).unwrap(), 7);
    }

    #[test]
    fn test_reconstruct_known_points() {
        // f(x) = 5 + 3x over Z/17Z: points (1, 8) and (2, 11).
        let shares = [share(1, 8), share(2, 11)];
        assert_eq!(reconstruct_secret(&shares, 17).unwrap(), 5);
    }

    #[test]
    fn test_subset_independence() {
        let mut rng = SequenceRng::new(3);
        let shares = split_secret(42, 3, 6, 97, &mut rng).unwrap();

        let mut results = Vec::new();
        for a in 0..6 {
            for b in (a + 1)..6 {
                for c in (b + 1)..6 {
                    let subset = [shares[a].clone(), shares[b].clone(), shares[c].clone()];
                    results.push(reconstruct_secret(&subset, 97).unwrap());
                }
            }
        }
        assert!(results.iter().all(|&r| r == 42));
    }

    #[test]
    fn test_below_threshold_does_not_recover() {
        // f(x) = 7 + 10x + 11x^2 over Z/23Z (t = 3), points hand-computed.
        let shares = [share(1, 5), share(2, 2), share(3, 21)];

        // Two shares interpolate a line, not the parabola: each pair lands
        // somewhere else, and neither lands on the secret.
        let pair_a = [shares[0].clone(), shares[1].clone()];
        let pair_b = [shares[0].clone(), shares[2].clone()];
        assert_eq!(reconstruct_secret(&pair_a, 23).unwrap(), 8);
        assert_eq!(reconstruct_secret(&pair_b, 23).unwrap(), 20);

        // All three recover the secret.
        assert_eq!(reconstruct_secret(&shares, 23).unwrap(), 7);
    }

    #[test]
    fn test_boundary_thresholds() {
        // t = n: every share is required.
        let mut rng = SequenceRng::new(11);
        let shares = split_secret(13, 4, 4, 29, &mut rng).unwrap();
        assert_eq!(reconstruct_secret(&shares, 29).unwrap(), 13);

        // t = 1: a single share is the secret.
        let shares = split_secret(13, 1, 3, 29, &mut rng).unwrap();
        assert_eq!(reconstruct_secret(&shares[..1], 29).unwrap(), 13);
    }

    #[test]
    fn test_reconstruct_errors() {
        // empty input
        assert_eq!(
            reconstruct_secret(&[], 23),
            Err(SssError::InsufficientShares)
        );
        // non-prime modulus, rejected before any arithmetic
        assert_eq!(
            reconstruct_secret(&[share(1, 5)], 24),
            Err(SssError::InvalidModulus)
        );
        // duplicate x-coordinates
        assert_eq!(
            reconstruct_secret(&[share(1, 5), share(1, 9)], 23),
            Err(SssError::DuplicateShareIndex)
        );
        // x not a residue of the field
        assert_eq!(
            reconstruct_secret(&[share(23, 5)], 23),
            Err(SssError::InvalidShareIndex)
        );
    }
}
