//! The Keccak permutation state.
//!
//! A `KeccakState` owns the 5×5 lane array for one permutation width plus the
//! scratch arrays reused by every round. It absorbs bit-precise input blocks,
//! applies Keccak-f, and squeezes bit-precise output blocks. Single-use: a
//! sponge creates a fresh state per application and the state zeroizes itself
//! on drop.
//!
//! The χ step runs in one of two forms. The plain form is the textbook
//! `B[x] ^ (!B[x+1] & B[x+2])`. The lane-complementing form ("Bebigokimisa",
//! from the Keccak implementation overview v3.2) keeps six lanes complemented
//! across the whole permutation so χ can trade most of its NOTs for ORs; the
//! six-lane complement is applied before the first round and again after the
//! last, restoring the standard representation.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::lane::Lane;

/// Permutation state for lane type `L`, plus round scratch.
///
/// Scratch arrays `b`, `c` and `d` are fully overwritten before they are read
/// within each round, so they can live here and be reused across rounds.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct KeccakState<L: Lane> {
    lanes: [[L; 5]; 5],
    b: [[L; 5]; 5],
    c: [L; 5],
    d: [L; 5],
    #[zeroize(skip)]
    lane_complementing: bool,
}

impl<L: Lane> KeccakState<L> {
    pub(crate) fn new(lane_complementing: bool) -> Self {
        Self {
            lanes: [[L::default(); 5]; 5],
            b: [[L::default(); 5]; 5],
            c: [L::default(); 5],
            d: [L::default(); 5],
            lane_complementing,
        }
    }

    /// Absorbs a suffixed-and-padded input, permuting after each block of at
    /// most `bitrate` bits.
    pub(crate) fn absorb(&mut self, input: &[u8], input_bits: usize, bitrate: usize) {
        let mut offset = 0;
        while offset < input_bits {
            let block_bits = bitrate.min(input_bits - offset);
            self.absorb_bits(input, offset, block_bits);
            self.permute();
            offset += bitrate;
        }
    }

    /// XORs `len_bits` bits of `input`, starting at `start_bit`, into the
    /// state in lane order (0,0), (1,0), .., (4,0), (0,1), ..
    ///
    /// Whole byte-aligned lanes are loaded as little-endian words; as soon as
    /// that no longer holds the remaining bits go through the bit-by-bit
    /// path.
    pub(crate) fn absorb_bits(&mut self, input: &[u8], start_bit: usize, len_bits: usize) {
        let lane_bits = L::BITS as usize;
        let mut bit = start_bit;
        let mut remaining = len_bits;
        for y in 0..5 {
            for x in 0..5 {
                if bit % 8 == 0 && remaining >= lane_bits {
                    let byte = bit / 8;
                    self.lanes[x][y] ^= L::from_le_slice(&input[byte..byte + lane_bits / 8]);
                    bit += lane_bits;
                    remaining -= lane_bits;
                } else {
                    self.absorb_bit_by_bit(input, bit, remaining, x, y);
                    return;
                }
            }
        }
    }

    fn absorb_bit_by_bit(
        &mut self,
        input: &[u8],
        start_bit: usize,
        len_bits: usize,
        mut x: usize,
        mut y: usize,
    ) {
        let mut z = 0;
        for bit in start_bit..start_bit + len_bits {
            if input[bit / 8] >> (bit % 8) & 1 != 0 {
                self.lanes[x][y] = self.lanes[x][y].toggle_bit(z);
            }
            z += 1;
            if z == L::BITS {
                z = 0;
                x += 1;
            }
            if x == 5 {
                x = 0;
                y += 1;
            }
        }
    }

    /// Applies Keccak-f to the state.
    pub(crate) fn permute(&mut self) {
        if self.lane_complementing {
            self.apply_complementing_pattern();
        }
        for round in 0..L::ROUNDS {
            self.theta();
            self.rho_pi();
            if self.lane_complementing {
                self.chi_lane_complemented();
            } else {
                self.chi();
            }
            self.iota(round);
        }
        if self.lane_complementing {
            self.apply_complementing_pattern();
        }
    }

    /// Complements the six lanes that the OR-based χ expects inverted. Its
    /// own inverse, so the same call restores the state after the last round.
    fn apply_complementing_pattern(&mut self) {
        self.lanes[1][0] = self.lanes[1][0].complement();
        self.lanes[2][0] = self.lanes[2][0].complement();
        self.lanes[3][1] = self.lanes[3][1].complement();
        self.lanes[2][2] = self.lanes[2][2].complement();
        self.lanes[2][3] = self.lanes[2][3].complement();
        self.lanes[0][4] = self.lanes[0][4].complement();
    }

    fn theta(&mut self) {
        for x in 0..5 {
            self.c[x] = self.lanes[x][0]
                ^ self.lanes[x][1]
                ^ self.lanes[x][2]
                ^ self.lanes[x][3]
                ^ self.lanes[x][4];
        }
        self.d[0] = self.c[4] ^ self.c[1].rotate(1);
        self.d[1] = self.c[0] ^ self.c[2].rotate(1);
        self.d[2] = self.c[1] ^ self.c[3].rotate(1);
        self.d[3] = self.c[2] ^ self.c[4].rotate(1);
        self.d[4] = self.c[3] ^ self.c[0].rotate(1);
        for y in 0..5 {
            for x in 0..5 {
                self.lanes[x][y] ^= self.d[x];
            }
        }
    }

    /// ρ and π fused: `b[y][(2x + 3y) % 5] = rotate(lanes[x][y], ROT[x][y])`,
    /// hand-unrolled so the 25 assignments stay 25 assignments.
    fn rho_pi(&mut self) {
        let rot = L::ROTATIONS;
        self.b[0][0] = self.lanes[0][0].rotate(rot[0][0]);
        self.b[1][3] = self.lanes[0][1].rotate(rot[0][1]);
        self.b[2][1] = self.lanes[0][2].rotate(rot[0][2]);
        self.b[3][4] = self.lanes[0][3].rotate(rot[0][3]);
        self.b[4][2] = self.lanes[0][4].rotate(rot[0][4]);

        self.b[0][2] = self.lanes[1][0].rotate(rot[1][0]);
        self.b[1][0] = self.lanes[1][1].rotate(rot[1][1]);
        self.b[2][3] = self.lanes[1][2].rotate(rot[1][2]);
        self.b[3][1] = self.lanes[1][3].rotate(rot[1][3]);
        self.b[4][4] = self.lanes[1][4].rotate(rot[1][4]);

        self.b[0][4] = self.lanes[2][0].rotate(rot[2][0]);
        self.b[1][2] = self.lanes[2][1].rotate(rot[2][1]);
        self.b[2][0] = self.lanes[2][2].rotate(rot[2][2]);
        self.b[3][3] = self.lanes[2][3].rotate(rot[2][3]);
        self.b[4][1] = self.lanes[2][4].rotate(rot[2][4]);

        self.b[0][1] = self.lanes[3][0].rotate(rot[3][0]);
        self.b[1][4] = self.lanes[3][1].rotate(rot[3][1]);
        self.b[2][2] = self.lanes[3][2].rotate(rot[3][2]);
        self.b[3][0] = self.lanes[3][3].rotate(rot[3][3]);
        self.b[4][3] = self.lanes[3][4].rotate(rot[3][4]);

        self.b[0][3] = self.lanes[4][0].rotate(rot[4][0]);
        self.b[1][1] = self.lanes[4][1].rotate(rot[4][1]);
        self.b[2][4] = self.lanes[4][2].rotate(rot[4][2]);
        self.b[3][2] = self.lanes[4][3].rotate(rot[4][3]);
        self.b[4][0] = self.lanes[4][4].rotate(rot[4][4]);
    }

    fn chi(&mut self) {
        for y in 0..5 {
            self.lanes[0][y] = self.b[0][y] ^ (self.b[1][y].complement() & self.b[2][y]);
            self.lanes[1][y] = self.b[1][y] ^ (self.b[2][y].complement() & self.b[3][y]);
            self.lanes[2][y] = self.b[2][y] ^ (self.b[3][y].complement() & self.b[4][y]);
            self.lanes[3][y] = self.b[3][y] ^ (self.b[4][y].complement() & self.b[0][y]);
            self.lanes[4][y] = self.b[4][y] ^ (self.b[0][y].complement() & self.b[1][y]);
        }
    }

    /// χ over the complemented representation, sequenced per the
    /// `thetaRhoPiChiIota` macros (UseBebigokimisa branch) of the Keccak
    /// team's optimized reference code. One NOT per row instead of five.
    fn chi_lane_complemented(&mut self) {
        let inverted = self.b[2][0].complement();
        self.lanes[0][0] = self.b[0][0] ^ (self.b[1][0] | self.b[2][0]);
        self.lanes[1][0] = self.b[1][0] ^ (inverted | self.b[3][0]);
        self.lanes[2][0] = self.b[2][0] ^ (self.b[3][0] & self.b[4][0]);
        self.lanes[3][0] = self.b[3][0] ^ (self.b[4][0] | self.b[0][0]);
        self.lanes[4][0] = self.b[4][0] ^ (self.b[0][0] & self.b[1][0]);

        let inverted = self.b[4][1].complement();
        self.lanes[0][1] = self.b[0][1] ^ (self.b[1][1] | self.b[2][1]);
        self.lanes[1][1] = self.b[1][1] ^ (self.b[2][1] & self.b[3][1]);
        self.lanes[2][1] = self.b[2][1] ^ (self.b[3][1] | inverted);
        self.lanes[3][1] = self.b[3][1] ^ (self.b[4][1] | self.b[0][1]);
        self.lanes[4][1] = self.b[4][1] ^ (self.b[0][1] & self.b[1][1]);

        let inverted = self.b[3][2].complement();
        self.lanes[0][2] = self.b[0][2] ^ (self.b[1][2] | self.b[2][2]);
        self.lanes[1][2] = self.b[1][2] ^ (self.b[2][2] & self.b[3][2]);
        self.lanes[2][2] = self.b[2][2] ^ (inverted & self.b[4][2]);
        self.lanes[3][2] = inverted ^ (self.b[4][2] | self.b[0][2]);
        self.lanes[4][2] = self.b[4][2] ^ (self.b[0][2] & self.b[1][2]);

        let inverted = self.b[3][3].complement();
        self.lanes[0][3] = self.b[0][3] ^ (self.b[1][3] & self.b[2][3]);
        self.lanes[1][3] = self.b[1][3] ^ (self.b[2][3] | self.b[3][3]);
        self.lanes[2][3] = self.b[2][3] ^ (inverted | self.b[4][3]);
        self.lanes[3][3] = inverted ^ (self.b[4][3] & self.b[0][3]);
        self.lanes[4][3] = self.b[4][3] ^ (self.b[0][3] | self.b[1][3]);

        let inverted = self.b[1][4].complement();
        self.lanes[0][4] = self.b[0][4] ^ (inverted & self.b[2][4]);
        self.lanes[1][4] = inverted ^ (self.b[2][4] | self.b[3][4]);
        self.lanes[2][4] = self.b[2][4] ^ (self.b[3][4] & self.b[4][4]);
        self.lanes[3][4] = self.b[3][4] ^ (self.b[4][4] | self.b[0][4]);
        self.lanes[4][4] = self.b[4][4] ^ (self.b[0][4] & self.b[1][4]);
    }

    fn iota(&mut self, round: usize) {
        self.lanes[0][0] ^= L::ROUND_CONSTANTS[round];
    }

    /// Squeezes `output_bits` bits out of the state, permuting between
    /// blocks of `bitrate` bits. When `output_bits` is not a multiple of
    /// eight the high bits of the final byte stay zero.
    pub(crate) fn squeeze(&mut self, bitrate: usize, output_bits: usize) -> Vec<u8> {
        let mut output = vec![0u8; output_bits.div_ceil(8)];
        let mut written = bitrate.min(output_bits);
        self.squeeze_bits(&mut output, 0, written);
        while written < output_bits {
            self.permute();
            let block_bits = bitrate.min(output_bits - written);
            self.squeeze_bits(&mut output, written, block_bits);
            written += block_bits;
        }
        output
    }

    /// Copies `len_bits` state bits into `output` starting at `start_bit`,
    /// in the same lane order and little-endian layout as absorption. The
    /// output buffer must be zero wherever a bit may be raised.
    fn squeeze_bits(&mut self, output: &mut [u8], start_bit: usize, len_bits: usize) {
        let lane_bits = L::BITS as usize;
        let stop_bit = start_bit + len_bits;
        let mut bit = start_bit;
        for y in 0..5 {
            for x in 0..5 {
                if bit == stop_bit {
                    return;
                }
                if bit % 8 == 0 && stop_bit - bit >= lane_bits {
                    let byte = bit / 8;
                    self.lanes[x][y].write_le(&mut output[byte..byte + lane_bits / 8]);
                    bit += lane_bits;
                } else {
                    bit = self.squeeze_bit_by_bit(output, bit, stop_bit, x, y);
                }
            }
        }
    }

    fn squeeze_bit_by_bit(
        &self,
        output: &mut [u8],
        mut bit: usize,
        stop_bit: usize,
        x: usize,
        y: usize,
    ) -> usize {
        for z in 0..L::BITS {
            if bit == stop_bit {
                break;
            }
            if self.lanes[x][y].bit(z) {
                output[bit / 8] |= 1 << (bit % 8);
            }
            bit += 1;
        }
        bit
    }
}
