//! The SHA-3 family standardised by NIST in FIPS PUB 202.
//!
//! | Function | `(r, c)` | Suffix | Output |
//! |----------|----------|--------|--------|
//! | SHA3-224 | (1152, 448) | `01` | 224 bits |
//! | SHA3-256 | (1088, 512) | `01` | 256 bits |
//! | SHA3-384 | (832, 768) | `01` | 384 bits |
//! | SHA3-512 | (576, 1024) | `01` | 512 bits |
//! | SHAKE128 / RawSHAKE128 | (1344, 256) | `1111` / `11` | caller-chosen |
//! | SHAKE256 / RawSHAKE256 | (1088, 512) | `1111` / `11` | caller-chosen |
//!
//! All eight run Keccak-f[1600]. The domain suffix keeps the applications
//! separated even on identical messages.

use core::fmt;
use std::io::Read;

use crate::error::KeccakError;
use crate::sponge::{DomainSuffix, KeccakSponge};

/// The four fixed-output SHA3 hash functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HashFunction {
    /// SHA3-224: 112-bit security level, 224-bit digest.
    Sha3_224,
    /// SHA3-256: 128-bit security level, 256-bit digest.
    Sha3_256,
    /// SHA3-384: 192-bit security level, 384-bit digest.
    Sha3_384,
    /// SHA3-512: 256-bit security level, 512-bit digest.
    Sha3_512,
}

impl HashFunction {
    /// The sponge behind this hash function; share or reuse it as needed.
    pub fn sponge(self) -> KeccakSponge {
        let (bitrate, capacity, output_bits) = match self {
            Self::Sha3_224 => (1152, 448, 224),
            Self::Sha3_256 => (1088, 512, 256),
            Self::Sha3_384 => (832, 768, 384),
            Self::Sha3_512 => (576, 1024, 512),
        };
        KeccakSponge::preset(bitrate, capacity, DomainSuffix::SHA3, output_bits)
    }

    /// Digest length in bits.
    pub fn output_bits(self) -> usize {
        match self {
            Self::Sha3_224 => 224,
            Self::Sha3_256 => 256,
            Self::Sha3_384 => 384,
            Self::Sha3_512 => 512,
        }
    }

    /// Hashes every bit of `message`.
    pub fn apply(self, message: &[u8]) -> Vec<u8> {
        self.sponge().apply(message)
    }

    /// Hashes the first `message_bits` bits of `message`.
    pub fn apply_bits(self, message: &[u8], message_bits: usize) -> Result<Vec<u8>, KeccakError> {
        self.sponge().apply_bits(message, message_bits)
    }

    /// Hashes every byte produced by `reader` until end of stream.
    pub fn apply_reader<R: Read>(self, reader: R) -> Result<Vec<u8>, KeccakError> {
        self.sponge().apply_reader(reader)
    }
}

impl fmt::Display for HashFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SHA3-{}", self.output_bits())
    }
}

/// The SHAKE and RawSHAKE extendable-output functions.
///
/// An XOF has no inherent output length, so a variant is turned into a
/// usable sponge with [`with_output_length`](Self::with_output_length):
///
/// ```
/// use keccak_rs::ExtendableOutputFunction;
///
/// let sponge = ExtendableOutputFunction::Shake256.with_output_length(4096)?;
/// let hash = sponge.apply(b"message");
/// # Ok::<(), keccak_rs::KeccakError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExtendableOutputFunction {
    /// SHAKE128: 128-bit security level, suffix `1111`.
    Shake128,
    /// SHAKE256: 256-bit security level, suffix `1111`.
    Shake256,
    /// RawSHAKE128: 128-bit security level, suffix `11`.
    RawShake128,
    /// RawSHAKE256: 256-bit security level, suffix `11`.
    RawShake256,
}

impl ExtendableOutputFunction {
    /// A sponge for this XOF producing `output_bits` bits of output.
    pub fn with_output_length(self, output_bits: usize) -> Result<KeccakSponge, KeccakError> {
        if output_bits < 1 {
            return Err(KeccakError::InvalidParameter(
                "output length must be greater than zero",
            ));
        }
        let (bitrate, capacity, suffix) = match self {
            Self::Shake128 => (1344, 256, DomainSuffix::SHAKE),
            Self::Shake256 => (1088, 512, DomainSuffix::SHAKE),
            Self::RawShake128 => (1344, 256, DomainSuffix::RAW_SHAKE),
            Self::RawShake256 => (1088, 512, DomainSuffix::RAW_SHAKE),
        };
        Ok(KeccakSponge::preset(bitrate, capacity, suffix, output_bits))
    }
}

impl fmt::Display for ExtendableOutputFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Shake128 => "SHAKE128",
            Self::Shake256 => "SHAKE256",
            Self::RawShake128 => "RawSHAKE128",
            Self::RawShake256 => "RawSHAKE256",
        })
    }
}
