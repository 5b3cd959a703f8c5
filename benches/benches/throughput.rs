//! Tensority Criterion Benchmark
//!
//! Separates the three cost centers: per-seed matrix derivation, a single
//! matrix multiply (both backends), and the warm-cache per-header evaluation
//! that dominates steady-state mining.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, Criterion};
use rand::prelude::*;
use std::hint::black_box;

use tensority::engine::dispatcher;
use tensority::kernels::portable;
use tensority::matrix::{Mat16, MatrixList};
use tensority::Cache;

// =============================================================================
// BENCHMARK 1: MATRIX MULTIPLY KERNELS
// =============================================================================

fn bench_matmul(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Matmul");

    let matrices = MatrixList::derive(&[0x11u8; 32]);
    let a = matrices.get(0);
    let b = matrices.get(1);
    let mut out = Mat16::zeroed();

    group.bench_function("portable", |bench| {
        bench.iter(|| portable::mul(&mut out, black_box(a), black_box(b)));
    });

    let kernel = dispatcher::get_best_kernel();
    group.bench_function(tensority::active_backend(), |bench| {
        bench.iter(|| kernel(&mut out, black_box(a), black_box(b)));
    });

    group.finish();
}

// =============================================================================
// BENCHMARK 2: SEED SETUP
// =============================================================================

fn bench_seed_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Seed-Setup");
    group.sample_size(10); // 128 scrypt passes + 32 MiB of matrix extraction

    let mut seed = [0u8; 32];
    rand::rng().fill(&mut seed[..]);

    group.bench_function("derive-matrix-list", |bench| {
        bench.iter(|| MatrixList::derive(black_box(&seed)));
    });

    group.finish();
}

// =============================================================================
// BENCHMARK 3: PER-HEADER EVALUATION
// =============================================================================

fn bench_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Evaluation");
    group.sample_size(10); // 256 matrix multiplies per digest

    let seed = [0u8; 32];
    let cache = Cache::with_capacity(1);
    let mut header = [0u8; 32];
    rand::rng().fill(&mut header[..]);
    cache.hash(&header, &seed); // warm the cache outside the timing loop

    group.bench_function("warm-cache-hash", |bench| {
        bench.iter(|| cache.hash(black_box(&header), black_box(&seed)));
    });

    group.finish();
}

// =============================================================================
// MAIN
// =============================================================================

criterion_group!(benches, bench_matmul, bench_seed_derivation, bench_evaluation);
criterion_main!(benches);
