//! Byte-for-byte comparison against the RustCrypto `sha3` crate.
//! Both implement FIPS 202 — deterministic functions must produce identical
//! output for every message.

use std::io::Cursor;

use keccak_rs::{ExtendableOutputFunction, HashFunction};
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Digest, Sha3_224, Sha3_256, Sha3_384, Sha3_512, Shake128, Shake256};

/// Message lengths straddling every rate boundary of the eight variants
/// (72, 104, 136, 144 and 168 bytes).
const MESSAGE_LENGTHS: &[usize] = &[
    0, 1, 3, 7, 8, 31, 64, 71, 72, 73, 103, 104, 105, 135, 136, 137, 143, 144, 145, 167, 168, 169,
    200, 255, 300,
];

fn patterned(len: usize, tag: u8) -> Vec<u8> {
    (0..len)
        .map(|i| (i as u8).wrapping_mul(31).wrapping_add(tag.wrapping_mul(57)))
        .collect()
}

macro_rules! sha3_compare {
    ($name:ident, $ours:expr, $theirs:ty, $tag:literal) => {
        #[test]
        fn $name() {
            for &len in MESSAGE_LENGTHS {
                let message = patterned(len, $tag);
                let ours = $ours.apply(&message);
                let theirs = <$theirs>::digest(&message);
                assert_eq!(ours.as_slice(), theirs.as_slice(), "len={len}");

                let streamed = $ours
                    .apply_reader(Cursor::new(message.clone()))
                    .expect("reader");
                assert_eq!(streamed.as_slice(), theirs.as_slice(), "reader len={len}");

                let plain = $ours.sponge().with_lane_complementing(false).apply(&message);
                assert_eq!(plain.as_slice(), theirs.as_slice(), "plain chi len={len}");
            }
        }
    };
}

sha3_compare!(sha3_224_matches, HashFunction::Sha3_224, Sha3_224, 1);
sha3_compare!(sha3_256_matches, HashFunction::Sha3_256, Sha3_256, 2);
sha3_compare!(sha3_384_matches, HashFunction::Sha3_384, Sha3_384, 3);
sha3_compare!(sha3_512_matches, HashFunction::Sha3_512, Sha3_512, 4);

fn shake_reference<X: ExtendableOutput + Update + Default>(
    message: &[u8],
    output_bytes: usize,
) -> Vec<u8> {
    let mut hasher = X::default();
    hasher.update(message);
    let mut output = vec![0u8; output_bytes];
    hasher.finalize_xof().read(&mut output);
    output
}

macro_rules! shake_compare {
    ($name:ident, $ours:expr, $theirs:ty, $tag:literal) => {
        #[test]
        fn $name() {
            // 500 bytes of output forces several squeeze blocks at both
            // SHAKE rates.
            for &output_bytes in &[16usize, 32, 137, 500] {
                let sponge = $ours
                    .with_output_length(output_bytes * 8)
                    .expect("valid output length");
                for &len in MESSAGE_LENGTHS {
                    let message = patterned(len, $tag);
                    let theirs = shake_reference::<$theirs>(&message, output_bytes);
                    assert_eq!(sponge.apply(&message), theirs, "len={len} out={output_bytes}");

                    let streamed = sponge
                        .apply_reader(Cursor::new(message.clone()))
                        .expect("reader");
                    assert_eq!(streamed, theirs, "reader len={len} out={output_bytes}");

                    let plain = sponge
                        .clone()
                        .with_lane_complementing(false)
                        .apply(&message);
                    assert_eq!(plain, theirs, "plain chi len={len} out={output_bytes}");
                }
            }
        }
    };
}

shake_compare!(shake128_matches, ExtendableOutputFunction::Shake128, Shake128, 5);
shake_compare!(shake256_matches, ExtendableOutputFunction::Shake256, Shake256, 6);

/// The second half of the chained SHA3-224 scenario: hashing a digest again
/// must agree with the reference implementation.
#[test]
fn sha3_224_chained_matches() {
    let first = HashFunction::Sha3_224.apply(b"abc");
    assert_eq!(first.as_slice(), Sha3_224::digest(b"abc").as_slice());
    let second = HashFunction::Sha3_224.apply(&first);
    assert_eq!(second.as_slice(), Sha3_224::digest(&first).as_slice());
}
