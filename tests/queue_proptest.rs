//! Property-based tests for the queue transforms, checked against a `Vec`
//! model.

use proptest::prelude::*;
use sentinel_queue::{Order, Queue, QueueGroup};
use std::iter::FromIterator;

// =============================================================================
// Test helpers
// =============================================================================

/// Short values over a small alphabet, so that duplicates are frequent.
fn values() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-d]{0,2}", 0..24)
}

fn queue_of(values: &[String]) -> Queue {
    Queue::from_iter(values.iter().map(String::as_str))
}

fn contents(queue: &Queue) -> Vec<String> {
    queue.iter().map(str::to_owned).collect()
}

#[derive(Clone, Debug)]
enum QueueOp {
    InsertHead(String),
    InsertTail(String),
    RemoveHead,
    RemoveTail,
}

fn queue_op() -> impl Strategy<Value = QueueOp> {
    prop_oneof![
        "[a-z]{0,4}".prop_map(QueueOp::InsertHead),
        "[a-z]{0,4}".prop_map(QueueOp::InsertTail),
        Just(QueueOp::RemoveHead),
        Just(QueueOp::RemoveTail),
    ]
}

fn model_reverse_k(values: &[String], k: usize) -> Vec<String> {
    let mut out = Vec::with_capacity(values.len());
    for chunk in values.chunks(k.max(1)) {
        if chunk.len() == k {
            out.extend(chunk.iter().rev().cloned());
        } else {
            out.extend(chunk.iter().cloned());
        }
    }
    out
}

/// Keep `values[i]` if no later value `v` has `dominates(v, values[i])`.
fn model_monotonic(values: &[String], dominates: fn(&String, &String) -> bool) -> Vec<String> {
    values
        .iter()
        .enumerate()
        .filter(|(i, value)| !values[i + 1..].iter().any(|later| dominates(later, value)))
        .map(|(_, value)| value.clone())
        .collect()
}

// =============================================================================
// Queue primitives
// =============================================================================

proptest! {
    #[test]
    fn size_follows_inserts_and_removes(ops in prop::collection::vec(queue_op(), 0..64)) {
        let mut queue = Queue::new();
        let mut model = std::collections::VecDeque::new();
        for op in ops {
            match op {
                QueueOp::InsertHead(value) => {
                    queue.insert_head(&value).unwrap();
                    model.push_front(value);
                }
                QueueOp::InsertTail(value) => {
                    queue.insert_tail(&value).unwrap();
                    model.push_back(value);
                }
                QueueOp::RemoveHead => {
                    let removed = queue.remove_head(None).map(|e| e.into_value());
                    prop_assert_eq!(removed, model.pop_front());
                }
                QueueOp::RemoveTail => {
                    let removed = queue.remove_tail(None).map(|e| e.into_value());
                    prop_assert_eq!(removed, model.pop_back());
                }
            }
            prop_assert_eq!(queue.size(), model.len());
        }
        prop_assert_eq!(contents(&queue), Vec::from_iter(model));
    }

    #[test]
    fn remove_head_never_overflows_buffer(value in "[a-z]{0,16}", capacity in 0usize..20) {
        let mut queue = Queue::from_iter([value.as_str()]);
        let mut buf = vec![0xff_u8; capacity + 4];
        queue.remove_head(Some(&mut buf[..capacity])).unwrap();
        prop_assert!(buf[capacity..].iter().all(|&b| b == 0xff));
        if capacity > 0 {
            let copied = value.len().min(capacity - 1);
            prop_assert_eq!(&buf[..copied], &value.as_bytes()[..copied]);
            prop_assert_eq!(buf[copied], 0);
        }
    }
}

// =============================================================================
// Structural transforms
// =============================================================================

proptest! {
    #[test]
    fn reverse_twice_restores(input in values()) {
        let mut queue = queue_of(&input);
        queue.reverse();
        let reversed = Vec::from_iter(input.iter().rev().cloned());
        prop_assert_eq!(contents(&queue), reversed);
        queue.reverse();
        prop_assert_eq!(contents(&queue), input);
    }

    #[test]
    fn reverse_k_matches_model(input in values(), k in 0usize..8) {
        let mut queue = queue_of(&input);
        queue.reverse_k(k);
        let expected = if k == 0 { input.clone() } else { model_reverse_k(&input, k) };
        prop_assert_eq!(contents(&queue), expected);
    }

    #[test]
    fn reverse_k_one_is_identity(input in values()) {
        let mut queue = queue_of(&input);
        queue.reverse_k(1);
        prop_assert_eq!(contents(&queue), input);
    }

    #[test]
    fn swap_is_reverse_in_pairs(input in values()) {
        let mut swapped = queue_of(&input);
        let mut paired = queue_of(&input);
        swapped.swap();
        paired.reverse_k(2);
        prop_assert_eq!(contents(&swapped), contents(&paired));
        if input.len() % 2 == 1 {
            prop_assert_eq!(swapped.peek_tail(), input.last().map(String::as_str));
        }
        swapped.swap();
        if input.len() % 2 == 0 {
            prop_assert_eq!(contents(&swapped), input);
        }
    }

    #[test]
    fn delete_mid_removes_later_middle(input in values()) {
        let mut queue = queue_of(&input);
        let mut expected = input.clone();
        if expected.is_empty() {
            prop_assert!(queue.delete_mid().is_err());
        } else {
            expected.remove(expected.len() / 2);
            prop_assert!(queue.delete_mid().is_ok());
        }
        prop_assert_eq!(contents(&queue), expected);
    }

    #[test]
    fn delete_dup_on_sorted_keeps_unique(mut input in values()) {
        input.sort();
        let mut queue = queue_of(&input);
        let removed = queue.delete_dup();
        let unique: Vec<String> = input
            .iter()
            .filter(|value| input.iter().filter(|other| other == value).count() == 1)
            .cloned()
            .collect();
        prop_assert_eq!(removed, input.len() - unique.len());
        prop_assert_eq!(contents(&queue), unique);
    }

    #[test]
    fn ascend_matches_model(input in values()) {
        let mut queue = queue_of(&input);
        let expected = model_monotonic(&input, |later, value| later < value);
        prop_assert_eq!(queue.ascend(), expected.len());
        prop_assert_eq!(contents(&queue), expected);
        prop_assert!(Order::Ascending.is_sorted(queue.iter()));
    }

    #[test]
    fn descend_matches_model(input in values()) {
        let mut queue = queue_of(&input);
        let expected = model_monotonic(&input, |later, value| later > value);
        prop_assert_eq!(queue.descend(), expected.len());
        prop_assert_eq!(contents(&queue), expected);
        prop_assert!(Order::Descending.is_sorted(queue.iter()));
    }

    #[test]
    fn sort_orders_the_same_multiset(input in values(), descend in any::<bool>()) {
        let order = Order::from_descend(descend);
        let mut queue = queue_of(&input);
        queue.sort(order);
        let mut expected = input.clone();
        expected.sort();
        if descend {
            expected.reverse();
        }
        // Equal values are indistinguishable, so comparing against a sorted
        // model checks both the order and the multiset.
        prop_assert_eq!(contents(&queue), expected);
    }
}

// =============================================================================
// Queue group merge
// =============================================================================

proptest! {
    #[test]
    fn merge_yields_sorted_union(
        inputs in prop::collection::vec(values(), 0..8),
        descend in any::<bool>(),
    ) {
        let order = Order::from_descend(descend);
        let mut queues: Vec<Queue> = inputs
            .iter()
            .map(|input| {
                let mut queue = queue_of(input);
                queue.sort(order);
                queue
            })
            .collect();

        let mut expected = Vec::from_iter(inputs.iter().flatten().cloned());
        expected.sort();
        if descend {
            expected.reverse();
        }

        let mut group = QueueGroup::new();
        for queue in queues.iter_mut() {
            group.push(queue);
        }
        let merged = group.merge(order);
        prop_assert_eq!(merged, expected.len());
        if let Some(first) = group.first() {
            prop_assert_eq!(first.size(), expected.len());
        }
        drop(group);

        if let Some((first, rest)) = queues.split_first() {
            prop_assert_eq!(contents(first), expected);
            prop_assert!(rest.iter().all(Queue::is_empty));
        }
    }
}
