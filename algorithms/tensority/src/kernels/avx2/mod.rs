//! AVX2 matrix-multiply kernel.
//!
//! Sixteen-lane epi16 multiply-accumulate over 8-row blocks. The accumulator
//! wraps at 16 bits, which is exactly the truncation the byte-extraction
//! reduction specifies, so the final `t = acc + (acc << 8)` followed by an
//! arithmetic right shift reproduces the portable `reduce` bit-for-bit.

#![allow(unsafe_code)]

use crate::kernels::constants::MAT_DIM;
use crate::matrix::Mat16;

use core::arch::x86_64::{
    __m256i, _mm256_add_epi16, _mm256_loadu_si256, _mm256_mullo_epi16, _mm256_set1_epi16,
    _mm256_setzero_si256, _mm256_slli_epi16, _mm256_srai_epi16, _mm256_storeu_si256,
};

/// Rows accumulated per register batch.
const ROW_BLOCK: usize = 8;

/// i16 lanes per 256-bit register (columns per batch).
const COL_BLOCK: usize = 16;

/// `out = a · b`, bit-identical to `kernels::portable::mul`.
///
/// # Safety
///
/// Requires AVX2; callers must verify CPUID first (the dispatcher does).
#[target_feature(enable = "avx2")]
pub unsafe fn mul(out: &mut Mat16, a: &Mat16, b: &Mat16) {
    for i in (0..MAT_DIM).step_by(ROW_BLOCK) {
        for j in (0..MAT_DIM).step_by(COL_BLOCK) {
            let mut acc = [_mm256_setzero_si256(); ROW_BLOCK];

            for k in 0..MAT_DIM {
                // 16 consecutive columns of b's row k.
                let s = _mm256_loadu_si256(b.row(k).as_ptr().add(j).cast::<__m256i>());
                for (x, lane) in acc.iter_mut().enumerate() {
                    let u = _mm256_set1_epi16(a.row(i + x)[k]);
                    *lane = _mm256_add_epi16(*lane, _mm256_mullo_epi16(u, s));
                }
            }

            for (x, lane) in acc.into_iter().enumerate() {
                let t = _mm256_add_epi16(lane, _mm256_slli_epi16::<8>(lane));
                let v = _mm256_srai_epi16::<8>(t);
                _mm256_storeu_si256(out.row_mut(i + x).as_mut_ptr().add(j).cast::<__m256i>(), v);
            }
        }
    }
}
