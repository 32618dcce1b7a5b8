//! The prime field Z/pZ with a runtime modulus.
//!
//! All values are `u64` residues in `[0, p)`; all products and sums are
//! computed in `u128` and reduced after every step, so no operation can
//! overflow for any 64-bit modulus.

use super::FieldError;

/// Primality test by trial division with a 6k±1 wheel.
///
/// Checks divisibility by 2 and 3, then by `6k - 1` and `6k + 1` up to
/// `sqrt(m)`. Returns `false` for `m <= 1`.
///
/// Cost is O(sqrt(m)); intended for the session-sized moduli this crate
/// works with, not for hunting large primes.
pub fn is_prime(m: u64) -> bool {
    if m <= 1 {
        return false;
    }
    if m <= 3 {
        return true;
    }
    if m % 2 == 0 || m % 3 == 0 {
        return false;
    }

    let mut i: u64 = 5;
    while let Some(sq) = i.checked_mul(i) {
        if sq > m {
            break;
        }
        if m % i == 0 || m % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Greatest common divisor (Euclid).
fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// The field Z/pZ for a validated prime modulus `p`.
///
/// Construction checks primality once; from then on every method may rely
/// on it (in particular Fermat inversion, which is only valid over a prime
/// modulus).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimeField {
    modulus: u64,
}

impl PrimeField {
    /// Creates the field Z/pZ.
    ///
    /// # Returns
    /// * `Ok(PrimeField)` if `modulus` is prime.
    /// * `Err(FieldError::NonPrimeModulus)` otherwise.
    pub fn new(modulus: u64) -> Result<Self, FieldError> {
        if !is_prime(modulus) {
            return Err(FieldError::NonPrimeModulus);
        }
        Ok(Self { modulus })
    }

    /// The prime modulus p.
    #[inline]
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Reduces an arbitrary `u64` into `[0, p)`.
    #[inline]
    pub fn reduce(&self, v: u64) -> u64 {
        v % self.modulus
    }

    /// (a + b) mod p.
    #[inline]
    pub fn add(&self, a: u64, b: u64) -> u64 {
        ((a as u128 + b as u128) % self.modulus as u128) as u64
    }

    /// (a - b) mod p, normalized into the nonnegative residue range.
    #[inline]
    pub fn sub(&self, a: u64, b: u64) -> u64 {
        let a = a % self.modulus;
        let b = b % self.modulus;
        if a >= b {
            a - b
        } else {
            self.modulus - (b - a)
        }
    }

    /// (a * b) mod p.
    #[inline]
    pub fn mul(&self, a: u64, b: u64) -> u64 {
        (a as u128 * b as u128 % self.modulus as u128) as u64
    }

    /// (-a) mod p.
    #[inline]
    pub fn neg(&self, a: u64) -> u64 {
        let a = a % self.modulus;
        if a == 0 {
            0
        } else {
            self.modulus - a
        }
    }

    /// base^exp mod p by square-and-multiply.
    ///
    /// O(log exp) multiplications, each reduced before the next, with the
    /// exponent treated as unsigned.
    pub fn pow(&self, base: u64, mut exp: u64) -> u64 {
        let p = self.modulus as u128;
        let mut base = base as u128 % p;
        let mut acc: u128 = 1 % p;

        while exp > 0 {
            if exp & 1 == 1 {
                acc = acc * base % p;
            }
            base = base * base % p;
            exp >>= 1;
        }
        acc as u64
    }

    /// Multiplicative inverse of `a` in Z/pZ.
    ///
    /// `a` is first reduced into `[0, p)`; callers may pass un-normalized
    /// values. The inverse is computed as `a^(p-2) mod p` (Fermat), which
    /// is sound because the modulus was validated prime at construction.
    ///
    /// # Returns
    /// * `Ok(inv)` with `a * inv ≡ 1 (mod p)`.
    /// * `Err(FieldError::NoInverse)` when `gcd(a, p) != 1`, i.e. `a ≡ 0`.
    pub fn inv(&self, a: u64) -> Result<u64, FieldError> {
        let a = a % self.modulus;
        if gcd(a, self.modulus) != 1 {
            return Err(FieldError::NoInverse);
        }
        Ok(self.pow(a, self.modulus - 2))
    }
}
