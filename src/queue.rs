use std::fmt;
use std::iter::FromIterator;

use crate::error::QueueError;
use crate::list::{List, Order};

/// A queue element owning its string payload.
///
/// Elements compare by their values, byte-wise and lexicographically.
/// Releasing an element is dropping it.
#[derive(PartialEq, Eq, PartialOrd, Ord)]
pub struct Element {
    value: String,
}

impl Element {
    /// Copy `value` into a new element, or return
    /// [`QueueError::AllocationFailure`] if the payload cannot be stored.
    pub fn try_new(value: &str) -> Result<Self, QueueError> {
        let mut owned = String::new();
        owned
            .try_reserve_exact(value.len())
            .map_err(|_| QueueError::AllocationFailure { bytes: value.len() })?;
        owned.push_str(value);
        Ok(Self { value: owned })
    }

    /// The stored string.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Take the stored string out of the element.
    #[inline]
    pub fn into_value(self) -> String {
        self.value
    }

    /// Copy the value into `buf` as a NUL-terminated byte string, truncated to
    /// `buf.len() - 1` bytes. Returns the number of copied bytes, the NUL
    /// excluded. Nothing is written into an empty buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_queue::Element;
    ///
    /// let element = Element::try_new("gerbil").unwrap();
    /// let mut buf = [0xff_u8; 4];
    /// assert_eq!(element.copy_to(&mut buf), 3);
    /// assert_eq!(&buf, b"ger\0");
    /// ```
    pub fn copy_to(&self, buf: &mut [u8]) -> usize {
        let capacity = match buf.len().checked_sub(1) {
            Some(capacity) => capacity,
            None => return 0,
        };
        let bytes = self.value.as_bytes();
        let copied = bytes.len().min(capacity);
        buf[..copied].copy_from_slice(&bytes[..copied]);
        buf[copied] = 0;
        copied
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.value, f)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// A double-ended queue of strings on a sentinel-based cyclic list.
///
/// The queue exclusively owns its elements. [`Queue::size`] walks the queue,
/// the size is never cached.
///
/// # Examples
///
/// ```
/// use sentinel_queue::{Order, Queue};
///
/// let mut queue = Queue::new();
/// queue.insert_tail("b").unwrap();
/// queue.insert_tail("a").unwrap();
/// queue.insert_tail("c").unwrap();
///
/// queue.sort(Order::Ascending);
/// assert_eq!(queue.iter().collect::<Vec<_>>(), ["a", "b", "c"]);
///
/// queue.reverse();
/// assert_eq!(queue.iter().collect::<Vec<_>>(), ["c", "b", "a"]);
/// ```
#[derive(Default, PartialEq, Eq)]
pub struct Queue {
    pub(crate) list: List<Element>,
}

impl Queue {
    /// Create an empty queue.
    #[inline]
    pub fn new() -> Self {
        Self { list: List::new() }
    }

    /// Create an empty queue, or return [`QueueError::AllocationFailure`] if
    /// its sentinel cannot be allocated.
    pub fn try_new() -> Result<Self, QueueError> {
        Ok(Self {
            list: List::try_new()?,
        })
    }

    /// Release every element, then the sentinel. The same happens when a
    /// queue is dropped.
    pub fn free(mut self) {
        let released = self.list.detach_all_nodes().map_or(0, |nodes| nodes.release());
        log::trace!("freed queue with {} elements", released);
    }

    /// Insert a copy of `value` at the head of the queue.
    ///
    /// On [`QueueError::AllocationFailure`] the queue is left unchanged and
    /// nothing is leaked.
    pub fn insert_head(&mut self, value: &str) -> Result<(), QueueError> {
        let element = Element::try_new(value)?;
        self.list.try_push_front(element).map_err(|err| {
            log::debug!("insert_head failed: {}", err);
            err
        })
    }

    /// Insert a copy of `value` at the tail of the queue.
    ///
    /// On [`QueueError::AllocationFailure`] the queue is left unchanged and
    /// nothing is leaked.
    pub fn insert_tail(&mut self, value: &str) -> Result<(), QueueError> {
        let element = Element::try_new(value)?;
        self.list.try_push_back(element).map_err(|err| {
            log::debug!("insert_tail failed: {}", err);
            err
        })
    }

    /// Remove the head element and hand it over to the caller, or return
    /// `None` if the queue is empty.
    ///
    /// If `buf` is given, the value is copied into it as by
    /// [`Element::copy_to`].
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["dolphin", "bear"]);
    /// let mut buf = [0_u8; 8];
    /// let element = queue.remove_head(Some(&mut buf)).unwrap();
    /// assert_eq!(element.value(), "dolphin");
    /// assert_eq!(&buf, b"dolphin\0");
    /// assert_eq!(queue.size(), 1);
    /// ```
    pub fn remove_head(&mut self, buf: Option<&mut [u8]>) -> Option<Element> {
        let element = self.list.pop_front()?;
        if let Some(buf) = buf {
            element.copy_to(buf);
        }
        Some(element)
    }

    /// Remove the tail element and hand it over to the caller, or return
    /// `None` if the queue is empty.
    ///
    /// If `buf` is given, the value is copied into it as by
    /// [`Element::copy_to`].
    pub fn remove_tail(&mut self, buf: Option<&mut [u8]>) -> Option<Element> {
        let element = self.list.pop_back()?;
        if let Some(buf) = buf {
            element.copy_to(buf);
        }
        Some(element)
    }

    /// Count the elements by walking the queue.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    #[inline]
    pub fn size(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the queue holds no element, in *O*(1) time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns `true` if the queue holds exactly one element.
    #[inline]
    pub fn is_singular(&self) -> bool {
        self.list.is_singular()
    }

    /// The value at the head, or `None` if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let queue = Queue::from_iter(["otter", "heron"]);
    /// assert_eq!(queue.peek_head(), Some("otter"));
    /// assert_eq!(queue.peek_tail(), Some("heron"));
    /// assert_eq!(Queue::new().peek_head(), None);
    /// ```
    pub fn peek_head(&self) -> Option<&str> {
        self.list.front().map(Element::value)
    }

    /// The value at the tail, or `None` if the queue is empty.
    pub fn peek_tail(&self) -> Option<&str> {
        self.list.back().map(Element::value)
    }

    /// Iterate over the values from head to tail.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + '_ {
        self.list.iter().map(Element::value)
    }

    /// Delete the middle element, the later one of the two middles of an
    /// even-length queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_queue::{Queue, QueueError};
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["a", "b", "c", "d"]);
    /// queue.delete_mid().unwrap();
    /// assert_eq!(queue.iter().collect::<Vec<_>>(), ["a", "b", "d"]);
    ///
    /// assert_eq!(Queue::new().delete_mid(), Err(QueueError::Empty));
    /// ```
    pub fn delete_mid(&mut self) -> Result<(), QueueError> {
        let middle = self.list.remove_middle().ok_or(QueueError::Empty)?;
        log::trace!("deleted middle element {:?}", middle);
        Ok(())
    }

    /// Delete every run of adjacent equal values, the first occurrence
    /// included, and return the number of deleted elements.
    ///
    /// On a sorted queue, only the values occurring once remain.
    pub fn delete_dup(&mut self) -> usize {
        self.list.remove_duplicate_runs()
    }

    /// Swap every two adjacent elements.
    #[inline]
    pub fn swap(&mut self) {
        self.list.swap_pairs();
    }

    /// Reverse the queue in place.
    #[inline]
    pub fn reverse(&mut self) {
        self.list.reverse();
    }

    /// Reverse every block of `k` elements; a trailing partial block keeps
    /// its order. `k == 0` is a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["1", "2", "3", "4", "5"]);
    /// queue.reverse_k(2);
    /// assert_eq!(queue.iter().collect::<Vec<_>>(), ["2", "1", "4", "3", "5"]);
    /// ```
    #[inline]
    pub fn reverse_k(&mut self, k: usize) {
        self.list.reverse_k(k);
    }

    /// Keep only the elements without a strictly smaller value to their
    /// right, and return the resulting size.
    #[inline]
    pub fn ascend(&mut self) -> usize {
        self.list.retain_ascending()
    }

    /// Keep only the elements without a strictly greater value to their
    /// right, and return the resulting size.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["5", "2", "9", "3", "8"]);
    /// assert_eq!(queue.descend(), 2);
    /// assert_eq!(queue.iter().collect::<Vec<_>>(), ["9", "8"]);
    /// ```
    #[inline]
    pub fn descend(&mut self) -> usize {
        self.list.retain_descending()
    }

    /// Sort the queue with a selection sort. The relative order of equal
    /// values is unspecified.
    pub fn sort(&mut self, order: Order) {
        self.list.selection_sort(order);
    }

    /// Merge the sorted queue `other` into this sorted queue; `other` is left
    /// empty.
    pub(crate) fn merge_from(&mut self, other: &mut Queue, order: Order) {
        self.list.merge(&mut other.list, order);
    }
}

impl fmt::Debug for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> FromIterator<&'a str> for Queue {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

impl<'a> Extend<&'a str> for Queue {
    /// Insert every value at the tail.
    ///
    /// # Panics
    ///
    /// Panics if a value cannot be stored. Use [`Queue::insert_tail`] to
    /// handle allocation failures.
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for value in iter {
            if let Err(err) = self.insert_tail(value) {
                panic!("cannot extend queue: {}", err);
            }
        }
    }
}
