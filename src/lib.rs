//! This crate provides a double-ended queue of strings on a doubly-linked
//! list with owned nodes, implemented as a cyclic list with a sentinel node,
//! together with in-place structural transforms and a k-way merge of sorted
//! queues.
//!
//! Here is a quick example showing how the queue works.
//!
//! ```
//! use sentinel_queue::{Order, Queue};
//!
//! let mut queue = Queue::new();
//! queue.insert_tail("b").unwrap();
//! queue.insert_tail("a").unwrap();
//! queue.insert_head("c").unwrap();
//! assert_eq!(queue.size(), 3);
//!
//! queue.sort(Order::Ascending);
//! assert_eq!(queue.iter().collect::<Vec<_>>(), ["a", "b", "c"]);
//!
//! let element = queue.remove_head(None).unwrap();
//! assert_eq!(element.value(), "a");
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!          ┌─────────────────────────────────────────────────────────────────────┐
//!          ↓                                                     (Ghost) Node N  │
//!    ╔═══════════╗           ╔═══════════╗                        ┌───────────┐  │
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ │   next    │ ─┘
//!    ╟───────────╢           ╟───────────╢     Node 2, 3, ...     ├───────────┤
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←──────── │   prev    │
//! │  ╟───────────╢           ╟───────────╢                        ├───────────┤
//! │  ║ payload T ║           ║ payload T ║                        ┊No payload ┊
//! │  ╚═══════════╝           ╚═══════════╝                        └╌╌╌╌╌╌╌╌╌╌╌┘
//! │      Node 0                  Node 1                               ↑   ↑
//! └───────────────────────────────────────────────────────────────────┘   │
//! ╔═══════════╗                                                           │
//! ║   ghost   ║ ──────────────────────────────────────────────────────────┘
//! ╚═══════════╝
//!     List
//! ```
//! The `List` only contains a pointer `ghost` that points to the ghost node.
//! Its length is not stored: [`List::len`] and [`Queue::size`] walk the list.
//!
//! Each node of the list `List<T>` is allocated on heap, which contains:
//! - the `next` pointer that points to the next element (or the ghost node if it
//!   is the last element in the list);
//! - the `prev` pointer that points to the previous element (or the ghost node if
//!   it is the first element in the list);
//! - the actual payload `T` that depends on the element type of the list, except
//!   the ghost node.
//!
//! Initially, there is a ghost node in an empty list, of which the `next` and `prev`
//! pointer point to itself. A node detached from a list points to itself the
//! same way.
//!
//! A [`Queue`] is a `List<Element>`, where each [`Element`] owns a copy of its
//! string.
//!
//! # Transforms
//!
//! All transforms relink the existing nodes and never allocate:
//! - [`reverse`] and [`reverse_k`]: reverse the whole queue, or every block of
//!   `k` elements ([`swap`] is `k = 2`);
//! - [`delete_mid`] and [`delete_dup`]: delete the middle element, or every run
//!   of adjacent duplicates;
//! - [`ascend`] and [`descend`]: keep a monotonic subsequence with a stack laid
//!   over the list links;
//! - [`sort`]: a selection sort in either [`Order`].
//!
//! # Merging
//!
//! A [`QueueGroup`] borrows several sorted queues and merges them pairwise,
//! pass after pass, into the first one.
//!
//! ```
//! use sentinel_queue::{Order, Queue, QueueGroup};
//! use std::iter::FromIterator;
//!
//! let mut q1 = Queue::from_iter(["a", "d"]);
//! let mut q2 = Queue::from_iter(["b", "e"]);
//! let mut q3 = Queue::from_iter(["c"]);
//!
//! let mut group = QueueGroup::new();
//! group.push(&mut q1);
//! group.push(&mut q2);
//! group.push(&mut q3);
//! assert_eq!(group.merge(Order::Ascending), 5);
//! drop(group);
//!
//! assert_eq!(q1.iter().collect::<Vec<_>>(), ["a", "b", "c", "d", "e"]);
//! ```
//!
//! # Errors
//!
//! Fallible operations return [`QueueError`]: allocation failures are reported
//! instead of aborting, and a partially built element is dropped before the
//! error is returned.
//!
//! [`List`]: crate::List
//! [`reverse`]: crate::Queue::reverse
//! [`reverse_k`]: crate::Queue::reverse_k
//! [`swap`]: crate::Queue::swap
//! [`delete_mid`]: crate::Queue::delete_mid
//! [`delete_dup`]: crate::Queue::delete_dup
//! [`ascend`]: crate::Queue::ascend
//! [`descend`]: crate::Queue::descend
//! [`sort`]: crate::Queue::sort

#[doc(inline)]
pub use error::QueueError;
#[doc(inline)]
pub use group::{QueueContext, QueueGroup};
#[doc(inline)]
pub use list::iterator::{Iter, IterMut};
#[doc(inline)]
pub use list::{List, Order};
#[doc(inline)]
pub use queue::{Element, Queue};

pub mod error;
pub mod group;
pub mod list;
pub mod queue;
