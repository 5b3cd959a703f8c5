//! Official Test Vectors
//!
//! Replays the frozen seed-expansion vectors: for each seed, the first 32-bit
//! word of each of the 128 scrypt pads derived from it. These pin the Keccak
//! variant (original 0x01 padding), the seed expansion layout, and the scrypt
//! mix in one pass — any deviation in any of the three shifts every word
//! after the first.

#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]

use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;

use tensority::kernels::constants::PAD_PASSES;
use tensority::kernels::scrypt::ScryptPad;
use tensority::matrix::expand_seed;

#[derive(Deserialize)]
struct Vector {
    name: String,
    seed: String,
    /// 128 little-endian u32 values: pad word 0 at the start of each pass.
    pad_heads: String,
}

#[derive(Deserialize)]
struct TestVectors {
    vectors: Vec<Vector>,
}

#[test]
fn test_seed_pad_vectors() {
    let file = File::open("tests/test_vectors.json").expect("Failed to open test_vectors.json");
    let reader = BufReader::new(file);
    let data: TestVectors = serde_json::from_reader(reader).expect("Failed to parse JSON");
    assert_eq!(data.vectors.len(), 3);

    for vector in data.vectors {
        let seed: [u8; 32] = hex::decode(&vector.seed)
            .unwrap()
            .try_into()
            .expect("seed must be 32 bytes");
        let heads: Vec<u32> = hex::decode(&vector.pad_heads)
            .unwrap()
            .chunks_exact(4)
            .map(|c| u32::from_le_bytes(c.try_into().unwrap()))
            .collect();
        assert_eq!(heads.len(), PAD_PASSES);

        let mut x = expand_seed(&seed);
        let mut pad = ScryptPad::new();
        for (pass, &want) in heads.iter().enumerate() {
            // The pad stores the incoming state verbatim into slot 0, so the
            // state's word 0 at the start of the pass is the frozen value.
            assert_eq!(
                x.word(0),
                want,
                "vector {}: pad head mismatch at pass {pass}",
                vector.name
            );
            pad.scrypt(&mut x);
        }
    }
}

// Expansion row 0 is the raw seed; the frozen vectors encode this in their
// first word, but make the property explicit for a seed that is not in the
// fixture file.
#[test]
fn test_expansion_head_reads_seed_verbatim() {
    let mut seed = [0u8; 32];
    for (i, byte) in seed.iter_mut().enumerate() {
        *byte = i as u8;
    }
    let state = expand_seed(&seed);
    for w in 0..8 {
        let off = w * 4;
        assert_eq!(
            state.word(w),
            u32::from_le_bytes([seed[off], seed[off + 1], seed[off + 2], seed[off + 3]])
        );
    }
}
