//! Tests for the Ohana Hash Map implementation.
//!
//! This module contains the heavier correctness suites: growth under
//! bulk insertion, overwrite semantics, and a model-based property
//! test against the standard library map.

use crate::data_structures::ohana_hash_map::{
    OhanaHashMap, OhanaHashMapConfig, OhanaHashMapError,
};
use proptest::prelude::*;
use std::collections::HashMap;

/// Bulk insertion far past the initial bucket count must preserve
/// every entry through the repeated doublings.
#[test]
fn test_resize_preserves_ten_thousand_entries() {
    const N: usize = 10_000;

    let config = OhanaHashMapConfig::new()
        .with_initial_bucket_count(16)
        .with_max_load_factor(0.7);
    let mut map = OhanaHashMap::with_config(config).unwrap();

    for i in 0..N {
        map.put(format!("patient_{i}"), i);
    }

    assert_eq!(map.len(), N);
    assert!(map.load_factor() <= 0.7);

    for i in 0..N {
        let key = format!("patient_{i}");
        assert_eq!(map.get(key.as_str()), Some(&i), "lost {key} in growth");
    }
}

/// Re-putting a key keeps exactly one entry holding the latest value.
#[test]
fn test_overwrite_semantics() {
    let mut map = OhanaHashMap::new();

    assert!(map.put("key".to_string(), "first").is_none());
    let before = map.len();

    assert_eq!(map.put("key".to_string(), "second"), Some("first"));

    assert_eq!(map.len(), before);
    assert_eq!(map.get("key"), Some(&"second"));
}

/// Values wider than 64 bits survive storage and retrieval bit-exactly.
#[test]
fn test_large_integer_values_round_trip() {
    let mut map = OhanaHashMap::new();

    let values: Vec<u128> = vec![
        u128::from(u64::MAX) + 1,
        u128::MAX,
        170_141_183_460_469_231_731_687_303_715_884_105_727,
    ];

    for (i, &v) in values.iter().enumerate() {
        map.put(format!("big_{i}"), v);
    }

    for (i, &v) in values.iter().enumerate() {
        assert_eq!(map.get(format!("big_{i}").as_str()), Some(&v));
    }
}

/// Deleting an absent key reports `KeyNotFound` and changes nothing.
#[test]
fn test_delete_absent_key() {
    let mut map = OhanaHashMap::new();
    map.put("present".to_string(), 1);

    assert_eq!(map.delete("absent"), Err(OhanaHashMapError::KeyNotFound));
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("present"), Some(&1));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// For any sequence of puts and deletes, the map agrees with the
    /// standard library model.
    #[test]
    fn proptest_map_matches_std_model(
        operations in prop::collection::vec(
            (prop::bool::ANY, 0u16..64, prop::num::i32::ANY),
            1..200,
        ),
    ) {
        let config = OhanaHashMapConfig::new()
            .with_initial_bucket_count(2)
            .with_max_load_factor(0.7);
        let mut map = OhanaHashMap::with_config(config).unwrap();
        let mut model: HashMap<String, i32> = HashMap::new();

        for (is_put, key_id, value) in operations {
            let key = format!("key_{key_id}");
            if is_put {
                prop_assert_eq!(map.put(key.clone(), value), model.insert(key, value));
            } else {
                match model.remove(&key) {
                    Some(expected) => prop_assert_eq!(map.delete(key.as_str()), Ok(expected)),
                    None => prop_assert_eq!(
                        map.delete(key.as_str()),
                        Err(OhanaHashMapError::KeyNotFound)
                    ),
                }
            }

            prop_assert_eq!(map.len(), model.len());
        }

        // Every surviving key resolves to its model value.
        for (key, expected) in &model {
            prop_assert_eq!(map.get(key.as_str()), Some(expected));
        }
    }
}
