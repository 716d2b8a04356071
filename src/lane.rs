//! Lane-width strategy for the Keccak-f permutation.
//!
//! The permutation state is a 5×5 array of lanes. Every supported lane length
//! (8, 16, 32, 64 bits) matches an unsigned machine word exactly, so rotation
//! and complement are the native `rotate_left` and `!` with no masking. The
//! per-width rotation offsets and round constants are derived from the 64-bit
//! reference tables at compile time.

use core::fmt::Debug;
use core::ops::{BitAnd, BitOr, BitXor, BitXorAssign};

use zeroize::Zeroize;

/// Rotation offsets for 64-bit lanes, indexed `[x][y]`, per the Keccak
/// reference. Narrower lanes use these offsets modulo the lane length.
const ROTATION_OFFSETS: [[u32; 5]; 5] = [
    [0, 36, 3, 41, 18],
    [1, 44, 10, 45, 2],
    [62, 6, 43, 15, 61],
    [28, 55, 25, 21, 56],
    [27, 20, 39, 8, 14],
];

/// The 24 round constants for 64-bit lanes. A lane length of `w` bits uses
/// the low `w` bits of the first `12 + 2*log2(w)` entries.
const ROUND_CONSTANTS_64: [u64; 24] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

const fn rotations_for(lane_bits: u32) -> [[u32; 5]; 5] {
    let mut table = [[0u32; 5]; 5];
    let mut x = 0;
    while x < 5 {
        let mut y = 0;
        while y < 5 {
            table[x][y] = ROTATION_OFFSETS[x][y] % lane_bits;
            y += 1;
        }
        x += 1;
    }
    table
}

mod sealed {
    pub trait Sealed {}
}

/// One lane of the permutation state. Sealed -- implemented only for the
/// unsigned word types whose widths are valid Keccak lane lengths.
pub(crate) trait Lane:
    sealed::Sealed
    + Copy
    + Default
    + Eq
    + Debug
    + Zeroize
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + BitXorAssign
    + 'static
{
    /// Lane length `w` in bits.
    const BITS: u32;

    /// Rounds per permutation, `12 + 2*log2(w)`.
    const ROUNDS: usize;

    /// Rho rotation offsets, indexed `[x][y]`, already reduced modulo `w`.
    const ROTATIONS: [[u32; 5]; 5];

    /// Iota constants, one per round.
    const ROUND_CONSTANTS: &'static [Self];

    fn rotate(self, by: u32) -> Self;
    fn complement(self) -> Self;

    /// Loads a lane from `w/8` little-endian bytes.
    fn from_le_slice(bytes: &[u8]) -> Self;

    /// Stores a lane into `w/8` little-endian bytes.
    fn write_le(self, out: &mut [u8]);

    fn bit(self, z: u32) -> bool;
    fn toggle_bit(self, z: u32) -> Self;
}

macro_rules! impl_lane {
    ($word:ty, $bits:literal, $rounds:literal) => {
        impl sealed::Sealed for $word {}

        impl Lane for $word {
            const BITS: u32 = $bits;
            const ROUNDS: usize = $rounds;
            const ROTATIONS: [[u32; 5]; 5] = rotations_for($bits);
            const ROUND_CONSTANTS: &'static [Self] = {
                const RC: [$word; $rounds] = {
                    let mut rc = [0; $rounds];
                    let mut round = 0;
                    while round < $rounds {
                        rc[round] = ROUND_CONSTANTS_64[round] as $word;
                        round += 1;
                    }
                    rc
                };
                &RC
            };

            #[inline]
            fn rotate(self, by: u32) -> Self {
                self.rotate_left(by)
            }

            #[inline]
            fn complement(self) -> Self {
                !self
            }

            #[inline]
            fn from_le_slice(bytes: &[u8]) -> Self {
                let mut word = [0u8; $bits / 8];
                word.copy_from_slice(bytes);
                Self::from_le_bytes(word)
            }

            #[inline]
            fn write_le(self, out: &mut [u8]) {
                out.copy_from_slice(&self.to_le_bytes());
            }

            #[inline]
            fn bit(self, z: u32) -> bool {
                self >> z & 1 != 0
            }

            #[inline]
            fn toggle_bit(self, z: u32) -> Self {
                self ^ (1 << z)
            }
        }
    };
}

impl_lane!(u8, 8, 18);
impl_lane!(u16, 16, 20);
impl_lane!(u32, 32, 22);
impl_lane!(u64, 64, 24);

const _: () = {
    assert!(u8::ROUND_CONSTANTS.len() == 18);
    assert!(u16::ROUND_CONSTANTS.len() == 20);
    assert!(u32::ROUND_CONSTANTS.len() == 22);
    assert!(u64::ROUND_CONSTANTS.len() == 24);
};
