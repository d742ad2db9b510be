//! Allocation failures leave the queue unchanged and leak nothing.
//!
//! The global allocator here fails a chosen allocation of the current thread
//! and counts the thread's live allocations, so these tests live in their own
//! binary.

use sentinel_queue::{Queue, QueueError};
use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;
use std::iter::FromIterator;
use std::mem::size_of;
use std::ptr;

struct FailingAlloc;

thread_local! {
    /// Number of allocations to let through before failing one.
    static FAIL_AFTER: Cell<Option<usize>> = const { Cell::new(None) };
    static LIVE: Cell<isize> = const { Cell::new(0) };
}

unsafe impl GlobalAlloc for FailingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let fail = FAIL_AFTER
            .try_with(|cell| match cell.get() {
                Some(0) => {
                    cell.set(None);
                    true
                }
                Some(n) => {
                    cell.set(Some(n - 1));
                    false
                }
                None => false,
            })
            .unwrap_or(false);
        if fail {
            return ptr::null_mut();
        }
        let raw = System.alloc(layout);
        if !raw.is_null() {
            let _ = LIVE.try_with(|live| live.set(live.get() + 1));
        }
        raw
    }

    unsafe fn dealloc(&self, raw: *mut u8, layout: Layout) {
        let _ = LIVE.try_with(|live| live.set(live.get() - 1));
        System.dealloc(raw, layout)
    }
}

#[global_allocator]
static ALLOC: FailingAlloc = FailingAlloc;

/// Run `f` with the allocation after the first `passing` ones failing, and
/// return its result with the change in live allocations.
fn fail_after<R>(passing: usize, f: impl FnOnce() -> R) -> (R, isize) {
    let before = LIVE.with(Cell::get);
    FAIL_AFTER.with(|cell| cell.set(Some(passing)));
    let result = f();
    FAIL_AFTER.with(|cell| cell.set(None));
    (result, LIVE.with(Cell::get) - before)
}

fn node_bytes() -> usize {
    2 * size_of::<usize>() + size_of::<String>()
}

#[test]
fn failed_payload_leaves_queue_unchanged() {
    let mut queue = Queue::from_iter(["kept"]);
    let value = "a payload of 23 bytes..";

    let (result, live) = fail_after(0, || queue.insert_tail(value));
    assert_eq!(result, Err(QueueError::AllocationFailure { bytes: value.len() }));
    assert_eq!(live, 0);

    let (result, live) = fail_after(0, || queue.insert_head(value));
    assert_eq!(result, Err(QueueError::AllocationFailure { bytes: value.len() }));
    assert_eq!(live, 0);

    assert_eq!(queue.size(), 1);
    assert_eq!(queue.iter().collect::<Vec<_>>(), ["kept"]);
}

#[test]
fn failed_node_releases_payload() {
    let mut queue = Queue::from_iter(["kept"]);

    // The payload is stored first, then the node fails.
    let (result, live) = fail_after(1, || queue.insert_head("lost"));
    assert_eq!(result, Err(QueueError::AllocationFailure { bytes: node_bytes() }));
    assert_eq!(live, 0);

    let (result, live) = fail_after(1, || queue.insert_tail("lost"));
    assert_eq!(result, Err(QueueError::AllocationFailure { bytes: node_bytes() }));
    assert_eq!(live, 0);

    assert_eq!(queue.size(), 1);
    assert_eq!(queue.iter().collect::<Vec<_>>(), ["kept"]);
    assert_eq!(queue.peek_head(), queue.peek_tail());
}

#[test]
fn empty_value_needs_only_a_node() {
    let mut queue = Queue::new();
    let (result, live) = fail_after(0, || queue.insert_tail(""));
    assert_eq!(result, Err(QueueError::AllocationFailure { bytes: node_bytes() }));
    assert_eq!(live, 0);
    assert!(queue.is_empty());

    queue.insert_tail("").unwrap();
    assert_eq!(queue.iter().collect::<Vec<_>>(), [""]);
}

#[test]
fn failed_sentinel_reports_error() {
    let (result, live) = fail_after(0, || Queue::try_new().err());
    assert!(matches!(result, Some(QueueError::AllocationFailure { .. })));
    assert_eq!(live, 0);
}

#[test]
fn queue_recovers_after_failure() {
    let mut queue = Queue::from_iter(["b"]);
    let (result, _) = fail_after(1, || queue.insert_head("a"));
    assert!(result.is_err());
    queue.insert_head("a").unwrap();
    queue.insert_tail("c").unwrap();
    assert_eq!(queue.iter().collect::<Vec<_>>(), ["a", "b", "c"]);

    let before = LIVE.with(Cell::get);
    drop(queue);
    // Three payloads, three nodes and the sentinel.
    assert_eq!(before - LIVE.with(Cell::get), 7);
}
