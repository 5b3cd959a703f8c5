//! Diffusion Tests
//!
//! Header and seed sensitivity: single-bit input flips must scramble the
//! digest with no detectable structure. Thresholds are wide enough that a
//! correct implementation fails them with negligible probability.

#![allow(clippy::pedantic, clippy::nursery)]

use tensority::Cache;

fn differing_bits(a: &[u8; 32], b: &[u8; 32]) -> u32 {
    a.iter().zip(b).map(|(x, y)| (x ^ y).count_ones()).sum()
}

// =============================================================================
// HEADER SENSITIVITY
// =============================================================================

#[test]
fn test_header_bit_flip_diffusion() {
    let cache = Cache::with_capacity(1);
    let seed = [0u8; 32];
    let base_header = [0u8; 32];
    let base = cache.hash(&base_header, &seed);

    // Flip one bit in four different positions: first byte, lane boundaries,
    // last byte. All lanes share no header bytes, so each flip exercises a
    // different pipeline.
    let flips = [(0usize, 0u8), (8, 3), (16, 7), (31, 6)];
    let mut byte_disturbed = [false; 32];

    for (byte, bit) in flips {
        let mut header = base_header;
        header[byte] ^= 1 << bit;
        let digest = cache.hash(&header, &seed);

        assert_ne!(digest, base, "flip at byte {byte} bit {bit} had no effect");
        let bits = differing_bits(&base, &digest);
        assert!(
            (90..=166).contains(&bits),
            "flip at byte {byte} bit {bit}: {bits}/256 bits differ, expected ~128"
        );
        for (flag, (x, y)) in byte_disturbed.iter_mut().zip(base.iter().zip(&digest)) {
            *flag |= x != y;
        }
    }

    assert!(
        byte_disturbed.iter().all(|&d| d),
        "some output byte position was never disturbed across four flips"
    );
}

// =============================================================================
// SEED SENSITIVITY
// =============================================================================

#[test]
fn test_seed_bit_flip_diffusion() {
    let cache = Cache::with_capacity(4);
    let header = [0u8; 32];
    let base_seed = [0u8; 32];
    let base = cache.hash(&header, &base_seed);

    // A flipped seed rebuilds the entire matrix list; the digest must be
    // unrelated even though the header is unchanged.
    let flips = [(0usize, 0u8), (15, 4), (31, 7)];
    let mut byte_disturbed = [false; 32];

    for (byte, bit) in flips {
        let mut seed = base_seed;
        seed[byte] ^= 1 << bit;
        let digest = cache.hash(&header, &seed);

        assert_ne!(digest, base, "seed flip at byte {byte} bit {bit} had no effect");
        let bits = differing_bits(&base, &digest);
        assert!(
            (90..=166).contains(&bits),
            "seed flip at byte {byte} bit {bit}: {bits}/256 bits differ, expected ~128"
        );
        for (flag, (x, y)) in byte_disturbed.iter_mut().zip(base.iter().zip(&digest)) {
            *flag |= x != y;
        }
    }

    assert!(
        byte_disturbed.iter().all(|&d| d),
        "some output byte position was never disturbed across three seed flips"
    );
}
