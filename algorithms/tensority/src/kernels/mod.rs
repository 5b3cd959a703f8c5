//! Compute kernels.
//!
//! The memory-hard scrypt pad and the two matrix-multiply backends.

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
pub mod avx2;
pub mod constants;
pub mod portable;
pub mod scrypt;
