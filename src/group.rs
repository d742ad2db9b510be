//! A chain of borrowed queues, merged into one sorted queue.
//!
//! The group never owns its queues. Each entry borrows a [`Queue`] mutably for
//! the lifetime of the group and caches its size; since nothing else can
//! touch a borrowed queue, the cache only drifts inside [`QueueGroup::merge`],
//! which restores it before returning.

use std::fmt;

use crate::list::{List, Order};
use crate::queue::Queue;

/// An entry of a [`QueueGroup`].
pub struct QueueContext<'q> {
    queue: &'q mut Queue,
    size: usize,
    id: usize,
}

impl<'q> QueueContext<'q> {
    /// A read-only view of the borrowed queue.
    #[inline]
    pub fn queue(&self) -> &Queue {
        &*self.queue
    }

    /// The cached size of the queue.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The id assigned when the queue joined the group, counted from 0.
    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }

    /// Move every element of `donor` into this (empty) entry.
    fn take_from(&mut self, donor: &mut QueueContext<'q>) {
        debug_assert!(self.queue.is_empty());
        self.queue.list.append(&mut donor.queue.list);
        self.size = donor.size;
        donor.size = 0;
    }

    /// Merge the sorted queue of `other` into this one, leaving `other` empty.
    fn merge_from(&mut self, other: &mut QueueContext<'q>, order: Order) {
        self.queue.merge_from(other.queue, order);
        self.size += other.size;
        other.size = 0;
    }
}

impl fmt::Debug for QueueContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueueContext")
            .field("id", &self.id)
            .field("size", &self.size)
            .field("queue", &self.queue)
            .finish()
    }
}

/// A group of queues chained on a cyclic list of [`QueueContext`] entries.
///
/// # Examples
///
/// ```
/// use sentinel_queue::{Order, Queue, QueueGroup};
/// use std::iter::FromIterator;
///
/// let mut q1 = Queue::from_iter(["1", "3", "5"]);
/// let mut q2 = Queue::from_iter(["2", "4"]);
///
/// let mut group = QueueGroup::new();
/// group.push(&mut q1);
/// group.push(&mut q2);
/// assert_eq!(group.merge(Order::Ascending), 5);
/// drop(group);
///
/// assert_eq!(q1.iter().collect::<Vec<_>>(), ["1", "2", "3", "4", "5"]);
/// assert!(q2.is_empty());
/// ```
#[derive(Default)]
pub struct QueueGroup<'q> {
    chain: List<QueueContext<'q>>,
    next_id: usize,
}

impl<'q> QueueGroup<'q> {
    /// Create a group with no queue.
    pub fn new() -> Self {
        Self {
            chain: List::new(),
            next_id: 0,
        }
    }

    /// Chain `queue` at the end of the group and return its id.
    pub fn push(&mut self, queue: &'q mut Queue) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        let size = queue.size();
        self.chain.push_back(QueueContext { queue, size, id });
        id
    }

    /// The number of chained queues, empty ones included.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Returns `true` if no queue was pushed.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Iterate over the entries in push order.
    pub fn iter(&self) -> impl Iterator<Item = &QueueContext<'q>> + '_ {
        self.chain.iter()
    }

    /// The first chained entry, which holds the result after a merge.
    pub fn first(&self) -> Option<&QueueContext<'q>> {
        self.chain.front()
    }

    fn live(&self) -> usize {
        self.chain.iter().filter(|ctx| !ctx.queue.is_empty()).count()
    }

    /// Merge all the queues, each already sorted in `order`, into the queue of
    /// the first entry, and return its size.
    ///
    /// Every other queue is left empty but still owned by its creator. Each
    /// pass merges consecutive pairs of non-empty queues, so the merge takes
    /// ⌈log₂ *k*⌉ passes over *k* non-empty queues.
    pub fn merge(&mut self, order: Order) -> usize {
        let live = self.live();
        if live == 0 {
            return 0;
        }

        let mut entries = self.chain.iter_mut();
        if let Some(first) = entries.next() {
            if first.queue.is_empty() {
                if let Some(donor) = entries.find(|ctx| !ctx.queue.is_empty()) {
                    log::trace!("moving queue {} into empty queue {}", donor.id, first.id);
                    first.take_from(donor);
                }
            }
        }

        let mut passes = 0;
        while self.live() > 1 {
            let mut pending: Option<&mut QueueContext<'q>> = None;
            for ctx in self.chain.iter_mut() {
                if ctx.queue.is_empty() {
                    continue;
                }
                match pending.take() {
                    None => pending = Some(ctx),
                    Some(acc) => acc.merge_from(ctx, order),
                }
            }
            passes += 1;
        }
        log::debug!("merged {} queues in {} passes", live, passes);

        match self.chain.iter_mut().next() {
            Some(first) => {
                debug_assert_eq!(first.size, first.queue.size());
                first.size = first.queue.size();
                first.size
            }
            None => 0,
        }
    }
}

impl fmt::Debug for QueueGroup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.chain.iter()).finish()
    }
}
