//! Signed-byte matrices and the per-seed matrix list.
//!
//! A seed expands (three chained Keccak-256 rounds) into a 1024-bit state,
//! which 128 scrypt passes stretch into 256 dense 256×256 matrices of signed
//! bytes. `Mat16` holds int8-range values in int16 slots purely to absorb
//! multiplication output before the byte-extraction reduction; after every
//! public operation each entry is back in int8 range.

use core::fmt;

use crate::keccak::keccak256;
use crate::kernels::constants::{MAT_AREA, MAT_COUNT, MAT_DIM, PAD_PASSES};
use crate::kernels::scrypt::ScryptPad;
use crate::types::MixState;

// =============================================================================
// SEED EXPANSION
// =============================================================================

/// Expand a 32-byte seed into the 1024-bit scrypt input state.
///
/// Row 0 is the seed itself; rows 1..4 are chained Keccak-256 digests of the
/// previous row. The 128 bytes are then read as 32 little-endian words, lo
/// half first.
#[must_use]
pub fn expand_seed(seed: &[u8; 32]) -> MixState {
    let mut rows = [[0u8; 32]; 4];
    rows[0] = *seed;
    for i in 0..3 {
        rows[i + 1] = keccak256(&rows[i]);
    }

    let mut words = [0u32; 32];
    for (i, word) in words.iter_mut().enumerate() {
        let row = &rows[i / 8];
        let off = (i * 4) % 32;
        *word = u32::from_le_bytes([row[off], row[off + 1], row[off + 2], row[off + 3]]);
    }
    MixState::from_words(&words)
}

// =============================================================================
// MATRICES
// =============================================================================

/// 256×256 matrix of signed bytes. Addition wraps modulo 256.
#[derive(Clone, PartialEq, Eq)]
pub struct Mat8 {
    d: Box<[i8]>,
}

impl Mat8 {
    /// All-zero matrix.
    #[must_use]
    pub fn zeroed() -> Self {
        Self {
            d: vec![0i8; MAT_AREA].into_boxed_slice(),
        }
    }

    /// Entry at row `i`, column `j`.
    #[inline]
    #[must_use]
    pub fn at(&self, i: usize, j: usize) -> i8 {
        self.d[i * MAT_DIM + j]
    }

    /// Entry-wise `self += other`, each sum truncated to its low 8 bits.
    pub fn accumulate(&mut self, other: &Self) {
        for (entry, &add) in self.d.iter_mut().zip(other.d.iter()) {
            *entry = (*entry as u8).wrapping_add(add as u8) as i8;
        }
    }
}

impl fmt::Debug for Mat8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mat8({MAT_DIM}x{MAT_DIM})")
    }
}

/// 256×256 matrix of int8-range values in signed 16-bit slots.
#[derive(Clone, PartialEq, Eq)]
pub struct Mat16 {
    d: Box<[i16]>,
}

impl Mat16 {
    /// All-zero matrix.
    #[must_use]
    pub fn zeroed() -> Self {
        Self {
            d: vec![0i16; MAT_AREA].into_boxed_slice(),
        }
    }

    /// Identity matrix.
    #[must_use]
    pub fn identity() -> Self {
        let mut mat = Self::zeroed();
        for i in 0..MAT_DIM {
            mat.d[i * MAT_DIM + i] = 1;
        }
        mat
    }

    /// Row `i` as a contiguous slice of 256 entries.
    #[inline]
    #[must_use]
    pub fn row(&self, i: usize) -> &[i16] {
        &self.d[i * MAT_DIM..(i + 1) * MAT_DIM]
    }

    /// Mutable row `i`.
    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [i16] {
        &mut self.d[i * MAT_DIM..(i + 1) * MAT_DIM]
    }

    /// Populate from the even pad slots of one scrypt pass.
    pub fn fill_even(&mut self, pad: &ScryptPad) {
        self.fill_from_pad(pad, 0);
    }

    /// Populate from the odd pad slots of one scrypt pass.
    pub fn fill_odd(&mut self, pad: &ScryptPad) {
        self.fill_from_pad(pad, 1);
    }

    /// Column-by-column extraction: column `c` takes its 256 entries from pad
    /// slots `c*4 + off` and `c*4 + 2 + off` (64 words), each word feeding
    /// four consecutive rows with its little-endian bytes reinterpreted as
    /// signed.
    fn fill_from_pad(&mut self, pad: &ScryptPad, off: usize) {
        for c in 0..MAT_DIM {
            let lo = pad.slot(c * 4 + off);
            let hi = pad.slot(c * 4 + 2 + off);
            for j in 0..64 {
                let word = if j < 32 { lo.word(j) } else { hi.word(j - 32) };
                let bytes = word.to_le_bytes();
                for (b, &byte) in bytes.iter().enumerate() {
                    self.d[(j * 4 + b) * MAT_DIM + c] = i16::from(byte as i8);
                }
            }
        }
    }

    /// Truncate every entry to its low 8 bits, producing a [`Mat8`].
    #[must_use]
    pub fn to_mat8(&self) -> Mat8 {
        let mut out = Mat8::zeroed();
        for (entry, &wide) in out.d.iter_mut().zip(self.d.iter()) {
            *entry = wide as i8;
        }
        out
    }
}

impl fmt::Debug for Mat16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mat16({MAT_DIM}x{MAT_DIM})")
    }
}

// =============================================================================
// MATRIX LIST
// =============================================================================

/// The 256 matrices derived from one seed (~32 MiB), immutable once built.
pub struct MatrixList {
    mats: Vec<Mat16>,
}

impl MatrixList {
    /// Derive the full list: expand the seed, then run 128 scrypt passes,
    /// extracting one matrix from the even pad slots and one from the odd
    /// slots of each pass.
    #[must_use]
    pub fn derive(seed: &[u8; 32]) -> Self {
        let mut x = expand_seed(seed);
        let mut pad = ScryptPad::new();
        let mut mats = Vec::with_capacity(MAT_COUNT);

        for _ in 0..PAD_PASSES {
            pad.scrypt(&mut x);

            let mut even = Mat16::zeroed();
            even.fill_even(&pad);
            mats.push(even);

            let mut odd = Mat16::zeroed();
            odd.fill_odd(&pad);
            mats.push(odd);
        }

        Self { mats }
    }

    /// Matrix selected by one sequence byte.
    #[inline]
    #[must_use]
    pub fn get(&self, index: u8) -> &Mat16 {
        &self.mats[usize::from(index)]
    }
}

impl fmt::Debug for MatrixList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MatrixList({} matrices)", self.mats.len())
    }
}
