//! `keccak-rs` — the Keccak sponge construction and the FIPS 202 hash and
//! extendable-output functions it powers (SHA3-224/256/384/512, SHAKE128/256,
//! RawSHAKE128/256).
//!
//! Messages are bit-precise: any bit length is accepted, not just whole
//! bytes, and output can be squeezed to any requested bit length.
//!
//! # Design principles
//!
//! - **No `unsafe`** — enforced by `#![deny(unsafe_code)]`.
//! - **One generic permutation** — Keccak-f is written once over a sealed
//!   lane-width strategy and monomorphized for lane lengths 8, 16, 32 and 64
//!   bits (permutation widths 200, 400, 800, 1600).
//! - **Lane-complementing χ** — the Bebigokimisa transform from the Keccak
//!   implementation overview is on by default and togglable per sponge, so
//!   the optimized path can always be checked against the plain one.
//! - **RAII zeroization** of the permutation state via the `zeroize` crate.
//!
//! # Examples
//!
//! ```
//! use keccak_rs::{ExtendableOutputFunction, HashFunction};
//!
//! let digest = HashFunction::Sha3_256.apply(b"abc");
//! assert_eq!(digest.len(), 32);
//!
//! let sponge = ExtendableOutputFunction::Shake128.with_output_length(1024)?;
//! let stretched = sponge.apply(b"abc");
//! assert_eq!(stretched.len(), 128);
//! # Ok::<(), keccak_rs::KeccakError>(())
//! ```
//!
//! Arbitrary Keccak instances — for example the pre-FIPS Keccak-256 with its
//! empty domain suffix — come from [`KeccakSponge::new`]:
//!
//! ```
//! use keccak_rs::KeccakSponge;
//!
//! let keccak256 = KeccakSponge::new(1088, 512, "", 256)?;
//! let digest = keccak256.apply(b"");
//! # Ok::<(), keccak_rs::KeccakError>(())
//! ```

#![deny(unsafe_code)]

pub mod error;
pub mod fips202;
mod lane;
pub mod sponge;
mod state;

// Re-export the public API surface.
pub use error::KeccakError;
pub use fips202::{ExtendableOutputFunction, HashFunction};
pub use sponge::KeccakSponge;
