//! Per-header evaluation pipeline.
//!
//! Four independent lanes each chain 64 matrix multiplies driven by a
//! Keccak-derived byte sequence; the byte-truncated lane results are summed,
//! folded through an FNV reduction, and hashed to the final 32-byte digest.
//! Lanes share nothing but the (immutable) matrix list, so they run on rayon
//! when the `multithread` feature is enabled; digests are identical either
//! way.

use crate::keccak::keccak256;
use crate::kernels::constants::{DIGEST_SIZE, FNV_PRIME, LANES, MAT_DIM, SWEEPS};
use crate::matrix::{Mat16, Mat8, MatrixList};
use crate::types::MulKernel;

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Evaluate one header against a derived matrix list.
#[must_use]
pub fn evaluate(
    header: &[u8; 32],
    matrices: &MatrixList,
    kernel: MulKernel,
) -> [u8; DIGEST_SIZE] {
    #[cfg(feature = "multithread")]
    {
        use rayon::prelude::*;

        let lanes: Vec<Mat8> = (0..LANES)
            .into_par_iter()
            .map(|k| run_lane(&header[k * 8..(k + 1) * 8], matrices, kernel))
            .collect();
        finish(lanes)
    }

    #[cfg(not(feature = "multithread"))]
    evaluate_serial(header, matrices, kernel)
}

/// Serial lane execution; the reference the parallel path must agree with.
#[must_use]
pub fn evaluate_serial(
    header: &[u8; 32],
    matrices: &MatrixList,
    kernel: MulKernel,
) -> [u8; DIGEST_SIZE] {
    let lanes: Vec<Mat8> = (0..LANES)
        .map(|k| run_lane(&header[k * 8..(k + 1) * 8], matrices, kernel))
        .collect();
    finish(lanes)
}

// =============================================================================
// LANES
// =============================================================================

/// One lane: hash the 8-byte header chunk into a 32-byte sequence, then fold
/// an identity matrix through two sweeps of chained multiplies, consuming two
/// sequence bytes per step.
fn run_lane(chunk: &[u8], matrices: &MatrixList, kernel: MulKernel) -> Mat8 {
    let sequence = keccak256(chunk);

    let mut t = Mat16::identity();
    let mut m = Mat16::zeroed();
    for _ in 0..SWEEPS {
        for pair in sequence.chunks_exact(2) {
            kernel(&mut m, &t, matrices.get(pair[0]));
            kernel(&mut t, &m, matrices.get(pair[1]));
        }
    }
    t.to_mat8()
}

/// Sum the lane results, FNV-fold, and hash down to the digest.
fn finish(lanes: Vec<Mat8>) -> [u8; DIGEST_SIZE] {
    let mut lanes = lanes.into_iter();
    let mut sum = lanes.next().expect("at least one lane");
    for lane in lanes {
        sum.accumulate(&lane);
    }
    keccak256(&fold(&sum))
}

// =============================================================================
// FNV FOLD
// =============================================================================

#[inline]
fn fnv(a: u32, b: u32) -> u32 {
    a.wrapping_mul(FNV_PRIME) ^ b
}

/// Reshape the summed matrix into 256 rows of 64 packed 32-bit words (four
/// zero-extended bytes each, columns 0/64/128/192), then halve the row count
/// with FNV until a single 256-byte row remains.
fn fold(sum: &Mat8) -> [u8; 256] {
    let mut arr = vec![0u32; MAT_DIM * 64];
    for r in 0..MAT_DIM {
        for c in 0..64 {
            arr[r * 64 + c] = u32::from(sum.at(r, c) as u8)
                | u32::from(sum.at(r, c + 64) as u8) << 8
                | u32::from(sum.at(r, c + 128) as u8) << 16
                | u32::from(sum.at(r, c + 192) as u8) << 24;
        }
    }

    let mut k = MAT_DIM;
    while k > 1 {
        for r in 0..k / 2 {
            for c in 0..64 {
                arr[r * 64 + c] = fnv(arr[r * 64 + c], arr[(r + k / 2) * 64 + c]);
            }
        }
        k /= 2;
    }

    let mut out = [0u8; 256];
    for (c, word) in arr[..64].iter().enumerate() {
        out[c * 4..(c + 1) * 4].copy_from_slice(&word.to_le_bytes());
    }
    out
}
