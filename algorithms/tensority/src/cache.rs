//! Seed cache.
//!
//! Maps raw 32-byte seeds to their derived matrix lists. One global mutex
//! serializes lookups, inserts, evictions, and the evaluation itself, so cache
//! state transitions are never observable mid-flight. Eviction is a wholesale
//! flush: epoch churn in the surrounding chain is low, and when a burst of
//! distinct seeds does arrive, dropping everything keeps residency bounded at
//! `capacity + 1` lists for the duration of one call.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::engine::{dispatcher, evaluator};
use crate::matrix::MatrixList;
use crate::types::MulKernel;

/// Default number of resident matrix lists (~32 MiB each, ~1.3 GiB total).
pub const CACHE_CAPACITY: usize = 42;

/// Seed-keyed cache of derived matrix lists.
pub struct Cache {
    state: Mutex<HashMap<[u8; 32], Arc<MatrixList>>>,
    capacity: usize,
    kernel: MulKernel,
}

impl Cache {
    /// Cache with the default capacity of [`CACHE_CAPACITY`] seeds.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(CACHE_CAPACITY)
    }

    /// Cache bounded to `capacity` seeds. Worst-case residency is
    /// `capacity + 1` matrix lists (~32 MiB each); memory-constrained callers
    /// should size accordingly.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            state: Mutex::new(HashMap::new()),
            capacity,
            kernel: dispatcher::get_best_kernel(),
        }
    }

    /// Compute the Tensority digest of `header` under `seed`.
    ///
    /// Derives and caches the seed's matrix list on first sight; later calls
    /// with the same seed reuse it. Deterministic regardless of cache state.
    #[must_use]
    pub fn hash(&self, header: &[u8; 32], seed: &[u8; 32]) -> [u8; 32] {
        let mut map = self.lock();

        let matrices = match map.entry(*seed) {
            Entry::Occupied(entry) => Arc::clone(entry.get()),
            Entry::Vacant(entry) => {
                let built = Arc::new(MatrixList::derive(seed));
                entry.insert(Arc::clone(&built));
                built
            }
        };

        let digest = evaluator::evaluate(header, &matrices, self.kernel);

        if map.len() > self.capacity {
            map.clear();
            map.insert(*seed, matrices);
        }

        digest
    }

    /// Number of resident matrix lists.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True when no matrix list is resident.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Acquire the cache mutex. The map is consistent after any panic (no
    /// mutation spans an unwind point), so a poisoned lock is recovered rather
    /// than propagated.
    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<[u8; 32], Arc<MatrixList>>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Cache {
    fn default() -> Self {
        Self::new()
    }
}
