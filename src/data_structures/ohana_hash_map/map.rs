// Copyright (c) 2025 Malama Triage Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Implementation of the Ohana separate-chaining hash map.

use std::borrow::Borrow;
use std::hash::Hash;
use std::mem;

use crate::data_structures::node::Node;
use crate::data_structures::ohana_hash_map::config::OhanaHashMapConfig;
use crate::data_structures::ohana_hash_map::error::{OhanaHashMapError, OhanaHashMapResult};
use crate::data_structures::ohana_hash_map::hash::bucket_index;

/// A key/value pair stored in a bucket chain.
#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// A bucket: the head of a chain of entries sharing a hash index.
type Chain<K, V> = Option<Box<Node<Entry<K, V>>>>;

/// A separate-chaining hash map with doubling resize.
///
/// Keys are located by equality only; the map never compares
/// identities or addresses. Every key appears in at most one chain
/// entry across the whole table.
///
/// # Type Parameters
///
/// * `K` - The key type. Must implement `Hash + Eq`.
/// * `V` - The value type.
#[derive(Debug)]
pub struct OhanaHashMap<K, V> {
    /// Bucket array; each slot heads a collision chain.
    buckets: Vec<Chain<K, V>>,

    /// Number of entries currently stored, tracked on every mutation.
    len: usize,

    /// The configuration the map was built with.
    config: OhanaHashMapConfig,
}

impl<K, V> OhanaHashMap<K, V>
where
    K: Hash + Eq,
{
    /// Creates a new empty map with default configuration.
    pub fn new() -> Self {
        Self::with_config(OhanaHashMapConfig::default())
            .expect("default configuration is valid")
    }

    /// Creates a new empty map with the specified configuration.
    ///
    /// # Errors
    ///
    /// Returns [`OhanaHashMapError::Configuration`] when the bucket
    /// count is zero or the load-factor threshold is not strictly
    /// between 0 and 1.
    pub fn with_config(config: OhanaHashMapConfig) -> OhanaHashMapResult<Self> {
        config.validate()?;

        let mut buckets = Vec::with_capacity(config.initial_bucket_count);
        buckets.resize_with(config.initial_bucket_count, || None);

        Ok(Self {
            buckets,
            len: 0,
            config,
        })
    }

    /// Returns the number of entries in the map.
    ///
    /// This reads the tracked counter; it never walks chains.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current number of buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the current ratio of entries to buckets.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Inserts a key/value pair, replacing the value in place when the
    /// key already exists.
    ///
    /// A new key is prepended to its bucket's chain in O(1); an
    /// existing key keeps its chain position and only swaps values.
    /// After an insertion that pushes the load factor past the
    /// configured threshold, the bucket array doubles and every entry
    /// is relinked against the new size.
    ///
    /// # Returns
    ///
    /// The previous value when the key was already present, `None`
    /// otherwise.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let index = bucket_index(&key, self.buckets.len());

        // Replacement case: scan the chain for the key.
        let mut cursor = self.buckets[index].as_deref_mut();
        while let Some(node) = cursor {
            if node.value.key == key {
                return Some(mem::replace(&mut node.value.value, value));
            }
            cursor = node.next.as_deref_mut();
        }

        // New key: prepend, then check the growth trigger.
        let rest = self.buckets[index].take();
        self.buckets[index] = Some(Box::new(Node::with_next(Entry { key, value }, rest)));
        self.len += 1;

        if self.load_factor() > self.config.max_load_factor {
            self.grow();
        }

        None
    }

    /// Looks up the value stored under a key.
    ///
    /// Absence is signalled with `None`; only the key's bucket chain is
    /// scanned, so lookups are O(1) on average.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = bucket_index(key, self.buckets.len());

        let mut cursor = self.buckets[index].as_deref();
        while let Some(node) = cursor {
            if node.value.key.borrow() == key {
                return Some(&node.value.value);
            }
            cursor = node.next.as_deref();
        }

        None
    }

    /// Looks up the value stored under a key, mutably.
    ///
    /// The key itself is never handed out mutably; chain placement
    /// depends on it staying fixed.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = bucket_index(key, self.buckets.len());

        let mut cursor = self.buckets[index].as_deref_mut();
        while let Some(node) = cursor {
            if node.value.key.borrow() == key {
                return Some(&mut node.value.value);
            }
            cursor = node.next.as_deref_mut();
        }

        None
    }

    /// Returns whether an entry with the given key exists.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Removes the entry stored under a key and returns its value.
    ///
    /// # Errors
    ///
    /// Returns [`OhanaHashMapError::KeyNotFound`] when no entry with
    /// the key exists; the map is left untouched.
    pub fn delete<Q>(&mut self, key: &Q) -> OhanaHashMapResult<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = bucket_index(key, self.buckets.len());

        // Locate the entry's depth in the chain before borrowing the
        // slots mutably.
        let mut depth = 0usize;
        let mut found = false;
        let mut cursor = self.buckets[index].as_deref();
        while let Some(node) = cursor {
            if node.value.key.borrow() == key {
                found = true;
                break;
            }
            depth += 1;
            cursor = node.next.as_deref();
        }

        if !found {
            return Err(OhanaHashMapError::KeyNotFound);
        }

        // Walk an owning slot cursor to the located node and unlink it;
        // the successor chain transfers to the predecessor's slot.
        let mut slot = &mut self.buckets[index];
        for _ in 0..depth {
            slot = &mut slot.as_mut().expect("chain ends before located entry").next;
        }

        let node = slot.take().expect("located entry vanished");
        let (entry, rest) = node.into_parts();
        *slot = rest;
        self.len -= 1;

        Ok(entry.value)
    }

    /// Doubles the bucket array and relinks every entry.
    ///
    /// The new array is fully populated before it replaces the old one,
    /// so callers never observe a partially migrated table. Entry count
    /// and values are unchanged; only bucket positions move.
    fn grow(&mut self) {
        let new_count = self.buckets.len() * 2;
        let mut new_buckets: Vec<Chain<K, V>> = Vec::with_capacity(new_count);
        new_buckets.resize_with(new_count, || None);

        for slot in self.buckets.iter_mut() {
            let mut chain = slot.take();
            while let Some(mut node) = chain {
                chain = node.next.take();
                let index = bucket_index(&node.value.key, new_count);
                node.next = new_buckets[index].take();
                new_buckets[index] = Some(node);
            }
        }

        self.buckets = new_buckets;

        tracing::debug!(
            bucket_count = new_count,
            entries = self.len,
            "Hash map resized"
        );
    }
}

impl<K, V> Default for OhanaHashMap<K, V>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}
