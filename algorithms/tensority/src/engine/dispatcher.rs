//! Hardware dispatcher.
//!
//! Selects the fastest available matrix-multiply kernel for the current CPU.
//! The portable kernel is always compiled and is the bit-exact reference the
//! accelerated path must match.

use crate::kernels;
use crate::types::MulKernel;

// =============================================================================
// DISPATCHER
// =============================================================================

/// Returns the fastest kernel for this CPU.
#[must_use]
pub fn get_best_kernel() -> MulKernel {
    #[cfg(all(feature = "simd", target_arch = "x86_64"))]
    {
        if is_x86_feature_detected!("avx2") {
            return safe_avx2_wrapper;
        }
    }

    kernels::portable::mul
}

/// Returns the name of the active matrix-multiply backend.
#[must_use]
pub fn get_active_backend_name() -> &'static str {
    #[cfg(all(feature = "simd", target_arch = "x86_64"))]
    {
        if is_x86_feature_detected!("avx2") {
            return "AVX2";
        }
    }

    "Portable"
}

// =============================================================================
// WRAPPERS
// =============================================================================

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
#[allow(unsafe_code)]
fn safe_avx2_wrapper(out: &mut crate::matrix::Mat16, a: &crate::matrix::Mat16, b: &crate::matrix::Mat16) {
    // SAFETY: only reachable after the AVX2 CPUID check in `get_best_kernel`.
    unsafe { kernels::avx2::mul(out, a, b) }
}
