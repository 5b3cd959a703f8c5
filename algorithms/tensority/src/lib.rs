//! # Tensority
//!
//! Matrix-multiplication proof-of-work hash.
//! Accelerated by AVX2 where available, bit-identical portable fallback.
//!
//! The function maps a 32-byte block-header digest and a 32-byte epoch seed to
//! a 32-byte digest. Per-seed setup (a memory-hard derivation of 256 dense
//! 256×256 signed-byte matrices, ~32 MiB) dominates cost, so evaluations are
//! normally issued through a [`Cache`] that reuses the derived matrices across
//! headers within an epoch.
//!
//! # Usage
//! ```rust
//! use tensority::Cache;
//!
//! let cache = Cache::with_capacity(1);
//! let header = [0u8; 32];
//! let seed = [0u8; 32];
//!
//! let digest = cache.hash(&header, &seed);
//! let again = cache.hash(&header, &seed); // warm: matrix derivation skipped
//! assert_eq!(digest, again);
//! ```

// =============================================================================
// MODULES
// =============================================================================

mod cache;
mod keccak;

// Internals re-exported for tests and benches only, hidden from docs.
#[doc(hidden)]
pub mod engine;
#[doc(hidden)]
pub mod kernels;

pub mod matrix;
pub mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use cache::{Cache, CACHE_CAPACITY};
pub use matrix::MatrixList;

/// Compute the Tensority digest of one header under one seed, cache-free.
///
/// Derives the full matrix list (expensive, ~32 MiB of scratch) and drops it
/// afterwards. Use a [`Cache`] when hashing more than one header per seed.
#[must_use]
pub fn hash(header: &[u8; 32], seed: &[u8; 32]) -> [u8; 32] {
    let matrices = MatrixList::derive(seed);
    engine::evaluator::evaluate(header, &matrices, engine::dispatcher::get_best_kernel())
}

/// Returns the name of the matrix-multiply backend in use.
#[must_use]
pub fn active_backend() -> &'static str {
    engine::get_active_backend_name()
}
