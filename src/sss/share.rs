//! Secret share definition.
//!
//! A share is a point (x, y) on the polynomial used to hide the secret:
//! - x: a nonzero evaluation point, unique to each participant.
//! - y: the polynomial evaluated at x, reduced mod p.
//!
//! # Security
//! - Implements `Zeroize` and `ZeroizeOnDrop` so y is wiped from memory.
//! - The `Debug` implementation redacts y.

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::SssError;

/// A share of a secret.
///
/// Shares are immutable once created and independent of each other; the
/// crate never persists them, that is the caller's job.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Share {
    /// The x-coordinate (1..=n).
    /// Public information (who owns the share).
    #[zeroize(skip)]
    pub x: u64,

    /// The y-coordinate, P(x) mod p.
    /// Sensitive: t of these reconstruct the secret.
    pub y: u64,
}

impl fmt::Debug for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Share")
            .field("x", &self.x)
            .field("y", &"***SENSITIVE***")
            .finish()
    }
}

impl Share {
    /// Creates a new share with validation.
    ///
    /// # Arguments
    /// * `x` - The evaluation point (must be nonzero; x = 0 would carry the
    ///   secret itself).
    /// * `y` - The polynomial value at x.
    ///
    /// # Returns
    /// * `Ok(Share)` if valid.
    /// * `Err(SssError::InvalidShareIndex)` if `x` is zero.
    pub fn new(x: u64, y: u64) -> Result<Self, SssError> {
        if x == 0 {
            return Err(SssError::InvalidShareIndex);
        }
        Ok(Self { x, y })
    }
}
