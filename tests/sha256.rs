use usha256::hash::sha256;

use sha2::{Digest as _, Sha256};

fn sha256_hex(input: &[u8]) -> String {
    sha256(input).unwrap().to_hex()
}

fn reference(input: &[u8]) -> [u8; 32] {
    Sha256::digest(input).into()
}

fn expect_sha256_eq(input: &[u8], expected: &str) {
    let got = sha256_hex(input);

    assert_eq!(
        got,
        expected,
        "Digest mismatch for {}-byte input\nExpected {}\nGot      {}",
        input.len(),
        expected,
        got,
    );
}

fn expect_matches_reference(input: &[u8]) {
    let got = sha256(input).unwrap();

    assert_eq!(
        got.as_bytes(),
        &reference(input),
        "Digest mismatch against sha2 for {}-byte input",
        input.len()
    );
}

fn bit_distance(a: &[u8], b: &[u8]) -> u32 {
    a.iter().zip(b).map(|(x, y)| (x ^ y).count_ones()).sum()
}

// -------------------------------------------------------
// 1. OFFICIAL VECTOR TESTS (FIPS 180-4 / NIST CAVP)
// -------------------------------------------------------

#[test]
fn sha256_abc_vector() {
    expect_sha256_eq(
        b"abc",
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    );
}

#[test]
fn sha256_two_block_vector() {
    expect_sha256_eq(
        b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    );
}

#[test]
fn sha256_896_bit_vector() {
    expect_sha256_eq(
        b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
        "cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1",
    );
}

#[test]
fn sha256_million_a_vector() {
    let input = vec![b'a'; 1_000_000];

    expect_sha256_eq(
        &input,
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0",
    );
}

#[test]
fn sha256_single_byte() {
    expect_sha256_eq(
        b"a",
        "ca978112ca1bbdcafac231b39a23dc4da786eff8147c4e72b9807785afee48bb",
    );
}

#[test]
fn sha256_known_phrase() {
    expect_sha256_eq(
        b"The quick brown fox jumps over the lazy dog",
        "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592",
    );
}

// The core accepts empty input even though the CLI rejects it
#[test]
fn sha256_empty_vector() {
    expect_sha256_eq(
        &[],
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    );
}

// -------------------------------------------------------
// 2. CROSS-CHECK AGAINST THE sha2 CRATE
// -------------------------------------------------------

#[test]
fn sha256_lengths_1_to_300() {
    let mut buf = Vec::with_capacity(300);
    for i in 0..300 {
        buf.push((i * 31 + 7) as u8);
        expect_matches_reference(&buf);
    }
}

#[test]
fn sha256_block_boundaries() {
    for len in [55, 56, 57, 63, 64, 65, 119, 120, 127, 128, 129, 1023, 1024, 1025] {
        expect_matches_reference(&vec![0x00; len]);
        expect_matches_reference(&vec![0xFF; len]);
    }
}

#[test]
fn sha256_large_multiblock() {
    let buf: Vec<u8> = (0..100_000u32).map(|i| (i % 251) as u8).collect();
    expect_matches_reference(&buf);
}

// -------------------------------------------------------
// 3. PROPERTIES
// -------------------------------------------------------

#[test]
fn sha256_deterministic() {
    let input = b"same bytes, same digest";

    let first = sha256(input).unwrap();
    let second = sha256(input).unwrap();

    assert_eq!(first, second);
}

#[test]
fn sha256_does_not_mutate_input() {
    let input: Vec<u8> = (0..200u8).collect();
    let copy = input.clone();

    let _ = sha256(&input).unwrap();

    assert_eq!(input, copy);
}

#[test]
fn sha256_avalanche() {
    let mut total = 0u32;
    let mut flips = 0u32;

    for len in [1usize, 3, 55, 56, 64, 100] {
        let input: Vec<u8> = (0..len).map(|i| (i * 7 + 3) as u8).collect();
        let base = sha256(&input).unwrap();

        for bit in 0..len * 8 {
            let mut flipped = input.clone();
            flipped[bit / 8] ^= 1 << (bit % 8);

            let other = sha256(&flipped).unwrap();
            let distance = bit_distance(base.as_bytes(), other.as_bytes());

            assert!(
                (80..=176).contains(&distance),
                "flipping bit {bit} of a {len}-byte input changed {distance} digest bits"
            );

            let bytes_changed = base
                .as_bytes()
                .iter()
                .zip(other.as_bytes())
                .filter(|(x, y)| x != y)
                .count();
            assert!(bytes_changed >= 20);

            total += distance;
            flips += 1;
        }
    }

    let mean = total as f64 / flips as f64;
    assert!((124.0..=132.0).contains(&mean), "mean bit distance {mean}");
}
