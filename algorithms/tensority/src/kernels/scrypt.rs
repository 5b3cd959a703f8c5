//! Memory-hard mixing: Salsa20/8 core plus the scrypt scratch pad.
//!
//! This is scrypt with N = 1024, r = 1, p = 1 over a 1024-bit state, except
//! that the BlockMix stage runs the Salsa20/8 core directly on the state
//! halves (`lo` keyed by `hi`, then `hi` keyed by `lo`) instead of the
//! standard block shuffle. The filled pad is not discarded after mixing: the
//! matrix builder reads all 1024 slots back out of it.

use crate::kernels::constants::PAD_SLOTS;
use crate::types::MixState;

// =============================================================================
// SALSA20/8 CORE
// =============================================================================

/// XOR `bx` into `b`, then run the 8-round Salsa20 core over `b` in place,
/// finishing with the feed-forward addition of the pre-round state.
#[allow(clippy::many_single_char_names)]
pub fn xor_salsa8(b: &mut [u32; 16], bx: &[u32; 16]) {
    for (w, k) in b.iter_mut().zip(bx) {
        *w ^= k;
    }
    let mut x = *b;

    for _ in 0..4 {
        // Operate on columns.
        x[4] ^= x[0].wrapping_add(x[12]).rotate_left(7);
        x[9] ^= x[5].wrapping_add(x[1]).rotate_left(7);
        x[14] ^= x[10].wrapping_add(x[6]).rotate_left(7);
        x[3] ^= x[15].wrapping_add(x[11]).rotate_left(7);

        x[8] ^= x[4].wrapping_add(x[0]).rotate_left(9);
        x[13] ^= x[9].wrapping_add(x[5]).rotate_left(9);
        x[2] ^= x[14].wrapping_add(x[10]).rotate_left(9);
        x[7] ^= x[3].wrapping_add(x[15]).rotate_left(9);

        x[12] ^= x[8].wrapping_add(x[4]).rotate_left(13);
        x[1] ^= x[13].wrapping_add(x[9]).rotate_left(13);
        x[6] ^= x[2].wrapping_add(x[14]).rotate_left(13);
        x[11] ^= x[7].wrapping_add(x[3]).rotate_left(13);

        x[0] ^= x[12].wrapping_add(x[8]).rotate_left(18);
        x[5] ^= x[1].wrapping_add(x[13]).rotate_left(18);
        x[10] ^= x[6].wrapping_add(x[2]).rotate_left(18);
        x[15] ^= x[11].wrapping_add(x[7]).rotate_left(18);

        // Operate on rows.
        x[1] ^= x[0].wrapping_add(x[3]).rotate_left(7);
        x[6] ^= x[5].wrapping_add(x[4]).rotate_left(7);
        x[11] ^= x[10].wrapping_add(x[9]).rotate_left(7);
        x[12] ^= x[15].wrapping_add(x[14]).rotate_left(7);

        x[2] ^= x[1].wrapping_add(x[0]).rotate_left(9);
        x[7] ^= x[6].wrapping_add(x[5]).rotate_left(9);
        x[8] ^= x[11].wrapping_add(x[10]).rotate_left(9);
        x[13] ^= x[12].wrapping_add(x[15]).rotate_left(9);

        x[3] ^= x[2].wrapping_add(x[1]).rotate_left(13);
        x[4] ^= x[7].wrapping_add(x[6]).rotate_left(13);
        x[9] ^= x[8].wrapping_add(x[11]).rotate_left(13);
        x[14] ^= x[13].wrapping_add(x[12]).rotate_left(13);

        x[0] ^= x[3].wrapping_add(x[2]).rotate_left(18);
        x[5] ^= x[4].wrapping_add(x[7]).rotate_left(18);
        x[10] ^= x[9].wrapping_add(x[8]).rotate_left(18);
        x[15] ^= x[14].wrapping_add(x[13]).rotate_left(18);
    }

    for (w, mixed) in b.iter_mut().zip(&x) {
        *w = w.wrapping_add(*mixed);
    }
}

// =============================================================================
// SCRATCH PAD
// =============================================================================

/// The 1024-slot scrypt scratch pad (128 KiB), reusable across passes.
pub struct ScryptPad {
    slots: Box<[MixState]>,
}

impl ScryptPad {
    /// Allocate a zeroed pad.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: vec![MixState::zeroed(); PAD_SLOTS].into_boxed_slice(),
        }
    }

    /// Read pad slot `i` (0..1024).
    #[inline]
    #[must_use]
    pub fn slot(&self, i: usize) -> &MixState {
        &self.slots[i]
    }

    /// One scrypt pass over `x`.
    ///
    /// Fill loop: store the running state into each slot, then mix. Read loop:
    /// XOR in a data-dependent slot (`hi` word 0, mod 1024), then mix again.
    /// On return `x` carries the mixed state and all 1024 slots hold the
    /// values the fill loop stored.
    pub fn scrypt(&mut self, x: &mut MixState) {
        for i in 0..PAD_SLOTS {
            self.slots[i] = *x;
            xor_salsa8(&mut x.lo, &x.hi);
            xor_salsa8(&mut x.hi, &x.lo);
        }
        for _ in 0..PAD_SLOTS {
            let j = (x.hi[0] as usize) & (PAD_SLOTS - 1);
            x.xor_assign(&self.slots[j]);
            xor_salsa8(&mut x.lo, &x.hi);
            xor_salsa8(&mut x.hi, &x.lo);
        }
    }
}

impl Default for ScryptPad {
    fn default() -> Self {
        Self::new()
    }
}
