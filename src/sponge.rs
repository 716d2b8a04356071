//! The Keccak sponge function.
//!
//! A [`KeccakSponge`] is an immutable, validated `(bitrate, capacity,
//! domain suffix, output length)` configuration. It can be shared and reused
//! freely; every application allocates its own single-use permutation state.

use core::fmt;
use std::io::{self, Read};

use crate::error::KeccakError;
use crate::lane::Lane;
use crate::state::KeccakState;

/// Domain suffix: up to eight bits appended after the message and before the
/// pad10*1 padding, stored in the same LSB-first order as message bits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct DomainSuffix {
    bits: u8,
    len: u8,
}

impl DomainSuffix {
    /// "01", shared by the four SHA3 hash functions.
    pub(crate) const SHA3: Self = Self { bits: 0b10, len: 2 };
    /// "1111", shared by SHAKE128 and SHAKE256.
    pub(crate) const SHAKE: Self = Self { bits: 0b1111, len: 4 };
    /// "11", shared by RawSHAKE128 and RawSHAKE256.
    pub(crate) const RAW_SHAKE: Self = Self { bits: 0b11, len: 2 };

    /// Parses a bitstring such as `"01"`; the first character becomes the
    /// first appended bit.
    fn parse(suffix_bits: &str) -> Result<Self, KeccakError> {
        if suffix_bits.len() > 8 {
            return Err(KeccakError::InvalidParameter(
                "suffix must not be longer than eight bits",
            ));
        }
        let mut bits = 0u8;
        for (index, digit) in suffix_bits.chars().enumerate() {
            match digit {
                '0' => {}
                '1' => bits |= 1 << index,
                _ => {
                    return Err(KeccakError::InvalidParameter(
                        "suffix must be a bitstring of only 0 and 1 digits",
                    ))
                }
            }
        }
        Ok(Self {
            bits,
            len: suffix_bits.len() as u8,
        })
    }

    fn len(self) -> usize {
        self.len as usize
    }

    fn is_empty(self) -> bool {
        self.len == 0
    }

    fn iter(self) -> impl Iterator<Item = bool> {
        (0..self.len).map(move |index| self.bits >> index & 1 != 0)
    }
}

impl fmt::Debug for DomainSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DomainSuffix(\"{self}\")")
    }
}

impl fmt::Display for DomainSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for high in self.iter() {
            f.write_str(if high { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Lane length selected by the permutation width at construction time. Each
/// variant dispatches onto the state monomorphized for its word type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum LaneLength {
    L8,
    L16,
    L32,
    L64,
}

impl LaneLength {
    fn for_width(width: usize) -> Result<Self, KeccakError> {
        match width {
            200 => Ok(Self::L8),
            400 => Ok(Self::L16),
            800 => Ok(Self::L32),
            1600 => Ok(Self::L64),
            25 | 50 | 100 => Err(KeccakError::Unsupported(
                "permutation widths below 200 bits are not supported",
            )),
            _ => Err(KeccakError::InvalidParameter(
                "bitrate + capacity must equal a Keccak width: 25, 50, 100, 200, 400, 800 or 1600",
            )),
        }
    }

    fn bits(self) -> usize {
        match self {
            Self::L8 => 8,
            Self::L16 => 16,
            Self::L32 => 32,
            Self::L64 => 64,
        }
    }

    fn rounds(self) -> usize {
        match self {
            Self::L8 => <u8 as Lane>::ROUNDS,
            Self::L16 => <u16 as Lane>::ROUNDS,
            Self::L32 => <u32 as Lane>::ROUNDS,
            Self::L64 => <u64 as Lane>::ROUNDS,
        }
    }
}

/// The Keccak sponge function.
///
/// Construct one with [`KeccakSponge::new`] or through the FIPS 202 presets
/// in [`HashFunction`](crate::HashFunction) and
/// [`ExtendableOutputFunction`](crate::ExtendableOutputFunction), then apply
/// it to messages as often as needed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeccakSponge {
    bitrate: usize,
    capacity: usize,
    lane: LaneLength,
    suffix: DomainSuffix,
    output_bits: usize,
    lane_complementing: bool,
}

impl KeccakSponge {
    /// Builds a sponge from a bitrate, capacity, domain-suffix bitstring
    /// (such as `"01"`; may be empty) and output length in bits.
    ///
    /// The bitrate must be a positive multiple of eight, the capacity
    /// positive, and their sum one of the valid permutation widths. Widths
    /// below 200 bits are rejected as unsupported.
    pub fn new(
        bitrate: usize,
        capacity: usize,
        suffix_bits: &str,
        output_bits: usize,
    ) -> Result<Self, KeccakError> {
        if bitrate < 1 {
            return Err(KeccakError::InvalidParameter(
                "bitrate must be greater than zero",
            ));
        }
        if bitrate % 8 != 0 {
            return Err(KeccakError::Unsupported(
                "only bitrates divisible by eight are supported",
            ));
        }
        if bitrate >= 1600 {
            return Err(KeccakError::InvalidParameter(
                "bitrate must be less than 1600 bits",
            ));
        }
        if capacity < 1 {
            return Err(KeccakError::InvalidParameter(
                "capacity must be greater than zero",
            ));
        }
        if capacity >= 1600 {
            return Err(KeccakError::InvalidParameter(
                "capacity must be less than 1600 bits",
            ));
        }
        let suffix = DomainSuffix::parse(suffix_bits)?;
        if output_bits < 1 {
            return Err(KeccakError::InvalidParameter(
                "output length must be greater than zero",
            ));
        }
        let lane = LaneLength::for_width(bitrate + capacity)?;
        Ok(Self {
            bitrate,
            capacity,
            lane,
            suffix,
            output_bits,
            lane_complementing: true,
        })
    }

    /// Internal constructor for the FIPS 202 presets, which are all known
    /// valid width-1600 configurations.
    pub(crate) fn preset(
        bitrate: usize,
        capacity: usize,
        suffix: DomainSuffix,
        output_bits: usize,
    ) -> Self {
        debug_assert!(bitrate + capacity == 1600);
        Self {
            bitrate,
            capacity,
            lane: LaneLength::L64,
            suffix,
            output_bits,
            lane_complementing: true,
        }
    }

    /// Enables or disables the lane-complementing (Bebigokimisa) form of χ.
    /// Both forms produce identical output; the plain form exists so the
    /// optimized one can be validated against it.
    #[must_use]
    pub fn with_lane_complementing(mut self, enabled: bool) -> Self {
        self.lane_complementing = enabled;
        self
    }

    /// The number of bits exchanged with the state per block.
    pub fn bitrate(&self) -> usize {
        self.bitrate
    }

    /// The number of state bits never directly touched by absorb or squeeze.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Total state size in bits: `bitrate + capacity`.
    pub fn permutation_width(&self) -> usize {
        self.bitrate + self.capacity
    }

    /// The length in bits of each of the 25 lanes.
    pub fn lane_length(&self) -> usize {
        self.lane.bits()
    }

    /// Rounds per Keccak-f permutation for this width.
    pub fn rounds_per_permutation(&self) -> usize {
        self.lane.rounds()
    }

    /// The domain-suffix bitstring, empty when none is used.
    pub fn suffix_bits(&self) -> String {
        self.suffix.to_string()
    }

    /// The hash output length in bits.
    pub fn output_bits(&self) -> usize {
        self.output_bits
    }

    /// Hashes every bit of `message`.
    pub fn apply(&self, message: &[u8]) -> Vec<u8> {
        self.apply_inner(message, message.len() * 8)
    }

    /// Hashes the first `message_bits` bits of `message`, LSB-first within
    /// each byte. Bits past `message_bits` are ignored.
    pub fn apply_bits(&self, message: &[u8], message_bits: usize) -> Result<Vec<u8>, KeccakError> {
        if message_bits > message.len() * 8 {
            return Err(KeccakError::InvalidParameter(
                "message bit length exceeds the bits available in the message buffer",
            ));
        }
        Ok(self.apply_inner(message, message_bits))
    }

    /// Hashes every byte produced by `reader` until end of stream, absorbing
    /// block by block without buffering the whole message.
    pub fn apply_reader<R: Read>(&self, reader: R) -> Result<Vec<u8>, KeccakError> {
        match self.lane {
            LaneLength::L8 => self.apply_reader_with::<u8, R>(reader),
            LaneLength::L16 => self.apply_reader_with::<u16, R>(reader),
            LaneLength::L32 => self.apply_reader_with::<u32, R>(reader),
            LaneLength::L64 => self.apply_reader_with::<u64, R>(reader),
        }
    }

    fn apply_inner(&self, message: &[u8], message_bits: usize) -> Vec<u8> {
        match self.lane {
            LaneLength::L8 => self.apply_with::<u8>(message, message_bits),
            LaneLength::L16 => self.apply_with::<u16>(message, message_bits),
            LaneLength::L32 => self.apply_with::<u32>(message, message_bits),
            LaneLength::L64 => self.apply_with::<u64>(message, message_bits),
        }
    }

    fn apply_with<L: Lane>(&self, message: &[u8], message_bits: usize) -> Vec<u8> {
        let total_bits = self.padded_input_bits(message_bits);
        let mut input = vec![0u8; total_bits / 8];
        copy_message_bits(message, message_bits, &mut input);
        self.append_suffix(&mut input, message_bits);
        self.pad(&mut input, message_bits + self.suffix.len());
        let mut state = KeccakState::<L>::new(self.lane_complementing);
        state.absorb(&input, total_bits, self.bitrate);
        state.squeeze(self.bitrate, self.output_bits)
    }

    fn apply_reader_with<L: Lane, R: Read>(&self, mut reader: R) -> Result<Vec<u8>, KeccakError> {
        let mut state = KeccakState::<L>::new(self.lane_complementing);
        let block_bytes = self.bitrate / 8;
        let mut block = vec![0u8; block_bytes];
        let final_bytes = loop {
            let filled = read_block(&mut reader, &mut block)?;
            if filled < block_bytes {
                break filled;
            }
            state.absorb_bits(&block, 0, self.bitrate);
            state.permute();
        };
        // The final short block goes through the same suffix/pad path as a
        // buffered message; suffix plus padding can spill into a second
        // block when the stream stopped one byte short of the bitrate.
        let message_bits = final_bytes * 8;
        let total_bits = self.padded_input_bits(message_bits);
        let mut input = vec![0u8; total_bits / 8];
        input[..final_bytes].copy_from_slice(&block[..final_bytes]);
        self.append_suffix(&mut input, message_bits);
        self.pad(&mut input, message_bits + self.suffix.len());
        state.absorb(&input, total_bits, self.bitrate);
        Ok(state.squeeze(self.bitrate, self.output_bits))
    }

    /// Total absorbed length: message, suffix and pad10*1 rounded up to the
    /// smallest positive multiple of the bitrate that fits them.
    fn padded_input_bits(&self, message_bits: usize) -> usize {
        (message_bits + self.suffix.len() + 2).next_multiple_of(self.bitrate)
    }

    fn append_suffix(&self, input: &mut [u8], start_bit: usize) {
        for (index, high) in self.suffix.iter().enumerate() {
            if high {
                let bit = start_bit + index;
                input[bit / 8] |= 1 << (bit % 8);
            }
        }
    }

    /// pad10*1: raises the bit at `position` and the final bit of the padded
    /// input. When `position % bitrate == bitrate - 1` the two raised bits
    /// land in different blocks.
    fn pad(&self, input: &mut [u8], position: usize) {
        let total_bits = (position + 2).next_multiple_of(self.bitrate);
        input[position / 8] |= 1 << (position % 8);
        let last = total_bits - 1;
        input[last / 8] |= 1 << (last % 8);
    }
}

impl fmt::Display for KeccakSponge {
    /// Renders a summary such as `Keccak[1088, 512](M || 01, 256)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Keccak[{}, {}](M", self.bitrate, self.capacity)?;
        if !self.suffix.is_empty() {
            write!(f, " || {}", self.suffix)?;
        }
        write!(f, ", {})", self.output_bits)
    }
}

/// Copies the first `message_bits` bits of `message` into a zeroed input
/// buffer: whole bytes as a slice copy, the trailing partial byte masked.
fn copy_message_bits(message: &[u8], message_bits: usize, input: &mut [u8]) {
    let whole_bytes = message_bits / 8;
    input[..whole_bytes].copy_from_slice(&message[..whole_bytes]);
    let tail_bits = message_bits % 8;
    if tail_bits > 0 {
        let mask = (1u8 << tail_bits) - 1;
        input[whole_bytes] |= message[whole_bytes] & mask;
    }
}

/// Reads from `reader` until `block` is full or the stream ends; returns the
/// number of bytes filled.
fn read_block<R: Read>(reader: &mut R, block: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < block.len() {
        let read = reader.read(&mut block[filled..])?;
        if read == 0 {
            break;
        }
        filled += read;
    }
    Ok(filled)
}
