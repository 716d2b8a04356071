//! FIPS 202 known-answer tests.
//!
//! Every vector is checked three ways: the buffered byte API, the plain-χ
//! path (lane complementing disabled), and the streaming reader path. The
//! hex convention is the FIPS 202 one: two digits per byte, high nibble
//! first.

use std::io::Cursor;

use keccak_rs::{ExtendableOutputFunction, HashFunction, KeccakSponge};

fn digest(expected_hex: &str) -> Vec<u8> {
    hex::decode(expected_hex).expect("valid hex vector")
}

fn check_sponge(sponge: &KeccakSponge, message: &[u8], expected_hex: &str) {
    let expected = digest(expected_hex);
    assert_eq!(sponge.apply(message), expected, "buffered path: {sponge}");
    let plain = sponge.clone().with_lane_complementing(false);
    assert_eq!(plain.apply(message), expected, "plain-chi path: {sponge}");
    let streamed = sponge
        .apply_reader(Cursor::new(message.to_vec()))
        .expect("reader path");
    assert_eq!(streamed, expected, "reader path: {sponge}");
}

fn check_hash(function: HashFunction, message: &[u8], expected_hex: &str) {
    check_sponge(&function.sponge(), message, expected_hex);
    assert_eq!(function.apply(message), digest(expected_hex));
}

fn check_xof(function: ExtendableOutputFunction, output_bits: usize, message: &[u8], expected_hex: &str) {
    let sponge = function
        .with_output_length(output_bits)
        .expect("valid output length");
    check_sponge(&sponge, message, expected_hex);
}

#[test]
fn sha3_224_empty() {
    check_hash(
        HashFunction::Sha3_224,
        b"",
        "6b4e03423667dbb73b6e15454f0eb1abd4597f9a1b078e3f5b5a6bc7",
    );
}

#[test]
fn sha3_224_abc() {
    check_hash(
        HashFunction::Sha3_224,
        b"abc",
        "e642824c3f8cf24ad09234ee7d3c766fc9a3a5168d0c94ad73b46fdf",
    );
}

#[test]
fn sha3_256_empty() {
    check_hash(
        HashFunction::Sha3_256,
        b"",
        "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a",
    );
}

#[test]
fn sha3_256_abc() {
    check_hash(
        HashFunction::Sha3_256,
        b"abc",
        "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532",
    );
}

#[test]
fn sha3_384_empty() {
    check_hash(
        HashFunction::Sha3_384,
        b"",
        "0c63a75b845e4f7d01107d852e4c2485c51a50aaaa94fc61995e71bbee983a2ac3713831264adb47fb6bd1e058d5f004",
    );
}

#[test]
fn sha3_384_abc() {
    check_hash(
        HashFunction::Sha3_384,
        b"abc",
        "ec01498288516fc926459f58e2c6ad8df9b473cb0fc08c2596da7cf0e49be4b298d88cea927ac7f539f1edf228376d25",
    );
}

#[test]
fn sha3_512_empty() {
    check_hash(
        HashFunction::Sha3_512,
        b"",
        "a69f73cca23a9ac5c8b567dc185a756e97c982164fe25859e0d1dcc1475c80a615b2123af1f5f94c11e3e9402c3ac558f500199d95b6d3e301758586281dcd26",
    );
}

#[test]
fn sha3_512_abc() {
    check_hash(
        HashFunction::Sha3_512,
        b"abc",
        "b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0",
    );
}

#[test]
fn shake128_empty_256_bits() {
    check_xof(
        ExtendableOutputFunction::Shake128,
        256,
        b"",
        "7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26",
    );
}

#[test]
fn shake256_empty_512_bits() {
    check_xof(
        ExtendableOutputFunction::Shake256,
        512,
        b"",
        "46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762fd75dc4ddd8c0f200cb05019d67b592f6fc821c49479ab48640292eacb3b7c4be",
    );
}

/// Pre-FIPS Keccak-256: same `(r, c)` as SHA3-256 but no domain suffix.
#[test]
fn keccak_256_empty() {
    let keccak256 = KeccakSponge::new(1088, 512, "", 256).expect("valid parameters");
    check_sponge(
        &keccak256,
        b"",
        "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470",
    );
}

#[test]
fn keccak_256_abc() {
    let keccak256 = KeccakSponge::new(1088, 512, "", 256).expect("valid parameters");
    check_sponge(
        &keccak256,
        b"abc",
        "4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45",
    );
}

/// NIST bit-oriented example: the 5-bit message `11001` (0x13, LSB first).
#[test]
fn sha3_256_five_bit_message() {
    let expected = digest("7b0047cf5a456882363cbf0fb05322cf65f4b7059a46365e830132e3b5d957af");
    let sponge = HashFunction::Sha3_256.sponge();
    assert_eq!(sponge.apply_bits(&[0x13], 5).expect("5 bits"), expected);
    let plain = sponge.with_lane_complementing(false);
    assert_eq!(plain.apply_bits(&[0x13], 5).expect("5 bits"), expected);
    // Bits past the message length are ignored.
    assert_eq!(
        HashFunction::Sha3_256
            .apply_bits(&[0x13 | 0xe0], 5)
            .expect("5 bits"),
        expected
    );
}

/// Chained application: the digest of "abc" hashed again. The first digest
/// is a published vector; the second is pinned by the differential tests
/// against the RustCrypto `sha3` crate.
#[test]
fn sha3_224_chained() {
    let first = HashFunction::Sha3_224.apply(b"abc");
    assert_eq!(
        first,
        digest("e642824c3f8cf24ad09234ee7d3c766fc9a3a5168d0c94ad73b46fdf")
    );
    let second = HashFunction::Sha3_224.apply(&first);
    check_hash(HashFunction::Sha3_224, &first, &hex::encode(&second));
    assert_ne!(first, second);
}
