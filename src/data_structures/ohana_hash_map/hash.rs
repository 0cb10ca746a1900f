// Copyright (c) 2025 Malama Triage Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Hashing utilities for the Ohana Hash Map.
//!
//! Bucket indices come from the FNV-1a hash reduced modulo the current
//! bucket count. FNV is deterministic across runs and processes, which
//! keeps the map's layout reproducible for a given key set, and it is
//! cheap on the short string keys (NHS numbers) the registry stores.

use std::hash::{Hash, Hasher};

/// Computes the FNV-1a hash of a key.
///
/// Equal keys always produce equal hashes: the function relies only on
/// the key's `Hash` implementation, never on its address or identity.
pub(crate) fn hash_key<Q: Hash + ?Sized>(key: &Q) -> u64 {
    let mut hasher = fnv::FnvHasher::default();
    key.hash(&mut hasher);
    hasher.finish()
}

/// Maps a key to a bucket index in `[0, bucket_count)`.
pub(crate) fn bucket_index<Q: Hash + ?Sized>(key: &Q, bucket_count: usize) -> usize {
    (hash_key(key) % bucket_count as u64) as usize
}
