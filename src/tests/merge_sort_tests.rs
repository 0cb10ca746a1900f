//! Tests for the stable merge sort.
//!
//! Stability is verified against the record ordering contract and, for
//! arbitrary inputs, against the standard library's stable sort as a
//! model.

use crate::sorting::{merge_sort, merge_sort_by};
use crate::tests::test_utils::{record, record_batch_strategy};
use proptest::prelude::*;

/// Equal-priority records retain arrival order.
#[test]
fn test_equal_priorities_keep_arrival_order() {
    let roster = vec![record(1, 1), record(2, 2), record(1, 3)];

    let sorted = merge_sort(&roster);

    let order: Vec<(u8, u64)> = sorted
        .iter()
        .map(|r| (r.priority(), r.sequence()))
        .collect();
    assert_eq!(order, vec![(1, 1), (1, 3), (2, 2)]);
}

/// Sorting by priority alone must not reorder same-priority records
/// even when their sequences would sort differently.
#[test]
fn test_stability_with_priority_only_comparator() {
    let roster = vec![
        record(3, 10),
        record(1, 9),
        record(3, 8),
        record(1, 7),
        record(3, 6),
    ];

    let sorted = merge_sort_by(&roster, |a, b| a.priority().cmp(&b.priority()));

    let order: Vec<u64> = sorted.iter().map(|r| r.sequence()).collect();
    // Among equals, original positions survive: 9 before 7, 10 before 8 before 6.
    assert_eq!(order, vec![9, 7, 10, 8, 6]);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Output is non-decreasing under the ordering contract and is a
    /// permutation of the input.
    #[test]
    fn proptest_sorted_permutation(roster in record_batch_strategy(64)) {
        let sorted = merge_sort(&roster);

        // Non-decreasing under (priority, sequence)
        for pair in sorted.windows(2) {
            prop_assert!(pair[0] <= pair[1]);
        }

        // Permutation: same multiset of (priority, sequence) pairs
        let mut input_keys: Vec<(u8, u64)> =
            roster.iter().map(|r| (r.priority(), r.sequence())).collect();
        let mut output_keys: Vec<(u8, u64)> =
            sorted.iter().map(|r| (r.priority(), r.sequence())).collect();
        input_keys.sort_unstable();
        output_keys.sort_unstable();
        prop_assert_eq!(input_keys, output_keys);
    }

    /// The result matches the standard library's stable sort exactly,
    /// including tie order.
    #[test]
    fn proptest_matches_std_stable_sort(roster in record_batch_strategy(64)) {
        let ours = merge_sort_by(&roster, |a, b| a.priority().cmp(&b.priority()));

        let mut model = roster.clone();
        model.sort_by(|a, b| a.priority().cmp(&b.priority()));

        let our_keys: Vec<u64> = ours.iter().map(|r| r.sequence()).collect();
        let model_keys: Vec<u64> = model.iter().map(|r| r.sequence()).collect();
        prop_assert_eq!(our_keys, model_keys);
    }
}
