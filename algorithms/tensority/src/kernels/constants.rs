//! Tensority algorithm constants.
//!
//! Every value here is fixed by the consensus algorithm; changing any of them
//! changes every digest.

// =============================================================================
// MATRICES
// =============================================================================

/// Matrix edge length (rows and columns).
pub const MAT_DIM: usize = 256;

/// Entries per matrix.
pub const MAT_AREA: usize = MAT_DIM * MAT_DIM;

/// Matrices derived per seed.
pub const MAT_COUNT: usize = 256;

// =============================================================================
// SCRYPT PAD
// =============================================================================

/// Slots in the scrypt scratch pad (N = 1024, r = 1, p = 1).
pub const PAD_SLOTS: usize = 1024;

/// Scrypt passes per seed; each pass yields two matrices (even/odd slots).
pub const PAD_PASSES: usize = MAT_COUNT / 2;

// =============================================================================
// EVALUATION
// =============================================================================

/// Independent chained-multiplication pipelines per header.
pub const LANES: usize = 4;

/// Full traversals of the 32-byte lane sequence; 32 multiplies each.
pub const SWEEPS: usize = 2;

/// FNV-1 32-bit prime, applied as `(a * PRIME) ^ b` in wrapping arithmetic.
pub const FNV_PRIME: u32 = 0x0100_0193;

/// Digest size in bytes (256-bit output).
pub const DIGEST_SIZE: usize = 32;
