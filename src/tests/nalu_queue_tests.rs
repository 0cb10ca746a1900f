//! Tests for the Nalu Linked Queue implementation.
//!
//! This module contains unit tests and property-based tests for the
//! FIFO contract.

use crate::data_structures::nalu_queue::{NaluQueue, NaluQueueError};
use proptest::prelude::*;

/// Dequeue order must equal enqueue order for any batch.
#[test]
fn test_fifo_order_for_full_drain() {
    let mut queue = NaluQueue::new();

    let values: Vec<u64> = (0..500).collect();
    for &v in &values {
        queue.enqueue(v);
    }

    let mut drained = Vec::new();
    while let Ok(v) = queue.dequeue() {
        drained.push(v);
    }

    assert_eq!(drained, values);
    assert!(queue.is_empty());
}

/// Peek must observe the same value the next dequeue returns.
#[test]
fn test_peek_agrees_with_dequeue() {
    let mut queue = NaluQueue::new();
    queue.enqueue("one");
    queue.enqueue("two");

    let peeked = *queue.peek().unwrap();
    assert_eq!(queue.dequeue().unwrap(), peeked);

    let peeked = *queue.peek().unwrap();
    assert_eq!(queue.dequeue().unwrap(), peeked);

    assert_eq!(queue.peek(), Err(NaluQueueError::Empty));
}

/// Failed dequeues must leave the queue usable.
#[test]
fn test_empty_error_does_not_corrupt_state() {
    let mut queue = NaluQueue::new();

    assert_eq!(queue.dequeue(), Err(NaluQueueError::Empty));
    assert_eq!(queue.dequeue(), Err(NaluQueueError::Empty));

    queue.enqueue(7);
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.dequeue(), Ok(7));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// For any interleaving of enqueues and dequeues, the queue agrees
    /// with a model FIFO.
    #[test]
    fn proptest_enqueue_dequeue_sequence(operations in prop::collection::vec(prop::bool::ANY, 1..100)) {
        let mut queue = NaluQueue::<i32>::new();
        let mut model = Vec::new();
        let mut next_value = 0;

        for &op_is_enqueue in &operations {
            if op_is_enqueue {
                queue.enqueue(next_value);
                model.push(next_value);
                next_value += 1;
            } else if !model.is_empty() {
                let expected = model.remove(0);
                prop_assert_eq!(queue.dequeue(), Ok(expected));
            } else {
                prop_assert_eq!(queue.dequeue(), Err(NaluQueueError::Empty));
            }
            prop_assert_eq!(queue.len(), model.len());
        }

        // Drain remaining items in model order
        for expected in model {
            prop_assert_eq!(queue.dequeue(), Ok(expected));
        }

        // Queue should be empty now
        prop_assert_eq!(queue.dequeue(), Err(NaluQueueError::Empty));
    }
}
