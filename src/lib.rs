//! Shamir threshold secret sharing over a runtime-chosen prime field Z/pZ.
//!
//! A secret `s` in `[0, p)` is split into `n` shares so that any `t` of them
//! reconstruct `s` exactly while any `t - 1` reveal nothing about it. The
//! crate is the algebraic core only: field arithmetic, random polynomial
//! construction, share evaluation and Lagrange interpolation. Prompting for
//! values and displaying results is the caller's business.
//!
//! # Components
//! - [`field`]: arithmetic in Z/pZ for a validated prime modulus.
//! - [`sss`]: the sharing scheme (split, reconstruct, proactive refresh).
//! - [`rng`]: a once-seeded session RNG (`std` only).
//!
//! # Example
//! ```
//! use primeshare::rng::SessionRng;
//! use primeshare::sss::{reconstruct_secret, split_secret};
//!
//! let mut rng = SessionRng::new();
//! let shares = split_secret(7, 3, 5, 23, &mut rng).unwrap();
//! let secret = reconstruct_secret(&shares[..3], 23).unwrap();
//! assert_eq!(secret, 7);
//! ```
//!
//! # Security
//! - Coefficient buffers and share values are zeroized on drop.
//! - Secrets and y-coordinates are never logged.
//! - The scheme itself does not require cryptographic randomness, but the
//!   secrecy of real deployments does; [`rng::SessionRng`] is CSPRNG-backed
//!   for that reason. Side-channel resistance is out of scope.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod field;
#[cfg(feature = "std")]
pub mod rng;
pub mod sss;

pub use field::{is_prime, PrimeField};
pub use sss::{
    reconstruct_secret, refresh_shares, split_secret, SecretSharingScheme, ShamirPrime, Share,
    SssError,
};
