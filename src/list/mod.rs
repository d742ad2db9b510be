use std::alloc::{self, Layout};
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::{self, NonNull};

use crate::error::QueueError;
use crate::{Iter, IterMut};

pub mod iterator;

mod algorithms;

pub use algorithms::Order;

/// The `List` is a doubly-linked list with owned nodes, implemented as a cyclic
/// list rooted at a sentinel ("ghost") node.
///
/// The ghost node never holds a payload. The list is empty if and only if the
/// ghost node links to itself in both directions, and every node of a
/// non-empty list is reachable from the ghost node in both directions.
///
/// The length is not cached, [`List::len`] counts the nodes in *O*(*n*) time.
///
/// # Naming Conventions
///
/// - `front..=back`: a closed range of list nodes, both inclusive;
/// - `start..end`: a half-open range of list nodes, left inclusive and right
///   exclusive (probably the ghost node).
pub struct List<T> {
    ghost: Box<Node<Erased>>,
    _marker: PhantomData<Box<Node<T>>>,
}

#[repr(C)]
pub(crate) struct Node<T> {
    pub(crate) next: NonNull<Node<T>>,
    pub(crate) prev: NonNull<Node<T>>,
    pub(crate) element: T,
}

#[derive(Default)]
struct Erased;

/// Nodes fragment detached from a list, used in list splitting or
/// splicing.
///
/// When detached from a list, reading of `front.prev` and `back.next`
/// is invalid.
pub(crate) struct DetachedNodes<T> {
    pub(crate) front: NonNull<Node<T>>,
    pub(crate) back: NonNull<Node<T>>,
    _marker: PhantomData<Box<Node<T>>>,
}

// private methods
impl<T> List<T> {
    pub(crate) fn ghost_node(&self) -> NonNull<Node<T>> {
        NonNull::from(self.ghost.as_ref()).cast()
    }
    pub(crate) fn front_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `ghost.next` is always valid (either `ghost` itself, or the first element
        // in the list).
        unsafe { next_of(self.ghost_node()) }
    }
    pub(crate) fn back_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `ghost.prev` is always valid (either `ghost` itself, or the last element
        // in the list).
        unsafe { prev_of(self.ghost_node()) }
    }

    /// Detach a single node `node` from the list, and return it as a box.
    ///
    /// The links of the returned node point to the node itself.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the list.
    ///
    /// If the `node` does not belong to the list, this function call will make
    /// the list ill-formed.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        debug_assert_ne!(node, self.ghost_node(), "Cannot detach the ghost node");
        let mut node = Box::from_raw(node.as_ptr());
        connect(node.prev, node.next);
        let this = NonNull::from(node.as_ref());
        node.next = this;
        node.prev = this;
        node
    }

    /// Attach a single node `node` to the list, between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next` belongs
    /// to the list, or whether the `prev` and `next` is adjacent (only in
    /// `#[cfg(debug_assertions)]`).
    ///
    /// If the `prev` and `next` does not belong to the list, or they are not
    /// adjacent nodes, this function call will make the list ill-formed.
    pub(crate) unsafe fn attach_node(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        node: NonNull<Node<T>>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, node);
        connect(node, next);
        #[cfg(debug_assertions)]
        {
            assert_adjacent(prev, node);
            assert_adjacent(node, next);
        }
    }

    /// Detach a range of nodes `front..=back` from the list, and return the detached
    /// nodes.
    ///
    /// It is unsafe because it does not check whether `front..=back` is a valid range
    /// (i.e. `front` must **NOT** be at the right of `back`), or whether it belongs
    /// to the list.
    ///
    /// If `front..=back` is not a valid range or it does not belong to the list,
    /// this function call will make the list ill-formed.
    pub(crate) unsafe fn detach_nodes(
        &mut self,
        front: NonNull<Node<T>>,
        back: NonNull<Node<T>>,
    ) -> DetachedNodes<T> {
        connect(front.as_ref().prev, back.as_ref().next);
        DetachedNodes::new(front, back)
    }

    /// Attach a range of detached nodes to the list, between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next` belongs
    /// to the list, or whether the `prev` and `next` is adjacent (only in
    /// `#[cfg(debug_assertions)]`).
    ///
    /// If the `prev` and `next` does not belong to the list, or they are not
    /// adjacent nodes, this function call will make the list ill-formed.
    pub(crate) unsafe fn attach_nodes(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        detached: DetachedNodes<T>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, detached.front);
        connect(detached.back, next);
        #[cfg(debug_assertions)]
        {
            assert_adjacent(prev, detached.front);
            assert_adjacent(detached.back, next);
        }
    }

    /// Detach all nodes from the list, and return the detached nodes, or return
    /// `None` if the list is empty. The list is left in the empty (self-looped)
    /// state.
    ///
    /// It is safe because `self.front_node()..=self.back_node()` is a valid range.
    pub(crate) fn detach_all_nodes(&mut self) -> Option<DetachedNodes<T>> {
        if self.is_empty() {
            return None;
        }
        unsafe { Some(self.detach_nodes(self.front_node(), self.back_node())) }
    }

    /// Release a node that is no longer linked into any list.
    ///
    /// It is unsafe because `node` must be a node allocated by this module and
    /// unreachable from every list.
    pub(crate) unsafe fn release_node(node: NonNull<Node<T>>) {
        drop(Box::from_raw(node.as_ptr()));
    }
}

impl<T> List<T> {
    /// Create an empty `List`.
    ///
    /// Aborts through [`std::alloc::handle_alloc_error`] if the ghost node cannot
    /// be allocated; see [`List::try_new`] for the fallible version.
    ///
    /// # Examples
    /// ```
    /// use sentinel_queue::List;
    /// let list: List<u32> = List::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            ghost: new_ghost(),
            _marker: PhantomData,
        }
    }

    /// Create an empty `List`, or return [`QueueError::AllocationFailure`]
    /// if the ghost node cannot be allocated.
    ///
    /// # Examples
    /// ```
    /// use sentinel_queue::List;
    /// let list = List::<u32>::try_new().unwrap();
    /// assert_eq!(list.len(), 0);
    /// ```
    pub fn try_new() -> Result<Self, QueueError> {
        let ghost = Node::try_new_detached(Erased::default())?;
        Ok(Self {
            // SAFETY: `ghost` is freshly allocated with the layout of `Node<Erased>`.
            ghost: unsafe { Box::from_raw(ghost.as_ptr()) },
            _marker: PhantomData,
        })
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_queue::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front_node() == self.ghost_node()
    }

    /// Returns `true` if the `List` holds exactly one element.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn is_singular(&self) -> bool {
        !self.is_empty() && self.front_node() == self.back_node()
    }

    /// Returns the length of the `List` by walking it.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_queue::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// list.push_back(3);
    /// assert_eq!(list.len(), 3);
    /// ```
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Removes all elements from the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_queue::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.iter().next()
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_queue::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.iter().next_back()
    }

    /// Adds an element first in the list, or returns
    /// [`QueueError::AllocationFailure`] if its node cannot be allocated.
    ///
    /// On failure `elt` is dropped and the list is left unchanged.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn try_push_front(&mut self, elt: T) -> Result<(), QueueError> {
        let node = Node::try_new_detached(elt)?;
        // SAFETY: the ghost node and the front node are adjacent nodes of the list.
        unsafe { self.attach_node(self.ghost_node(), self.front_node(), node) };
        Ok(())
    }

    /// Appends an element to the back of a list, or returns
    /// [`QueueError::AllocationFailure`] if its node cannot be allocated.
    ///
    /// On failure `elt` is dropped and the list is left unchanged.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn try_push_back(&mut self, elt: T) -> Result<(), QueueError> {
        let node = Node::try_new_detached(elt)?;
        // SAFETY: the back node and the ghost node are adjacent nodes of the list.
        unsafe { self.attach_node(self.back_node(), self.ghost_node(), node) };
        Ok(())
    }

    /// Adds an element first in the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_queue::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front().unwrap(), &2);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front().unwrap(), &1);
    /// ```
    pub fn push_front(&mut self, elt: T) {
        let node = Node::new_detached(elt);
        unsafe { self.attach_node(self.ghost_node(), self.front_node(), node) };
    }

    /// Appends an element to the back of a list.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_queue::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back().unwrap(), &3);
    /// ```
    pub fn push_back(&mut self, elt: T) {
        let node = Node::new_detached(elt);
        unsafe { self.attach_node(self.back_node(), self.ghost_node(), node) };
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_queue::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the list is not empty, so the front node is an element node.
        Some(unsafe { self.detach_node(self.front_node()) }.into_element())
    }

    /// Removes the last element from a list and returns it, or `None` if
    /// it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_queue::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_back(), None);
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back(), Some(3));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the list is not empty, so the back node is an element node.
        Some(unsafe { self.detach_node(self.back_node()) }.into_element())
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_queue::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_queue::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&10));
    /// assert_eq!(iter.next(), Some(&11));
    /// assert_eq!(iter.next(), Some(&12));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Moves all elements from `other` to the end of the list.
    ///
    /// This reuses all the nodes from `other` and moves them into `self`. After
    /// this operation, `other` becomes empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_queue::List;
    ///
    /// let mut list1 = List::new();
    /// list1.push_back('a');
    ///
    /// let mut list2 = List::new();
    /// list2.push_back('b');
    /// list2.push_back('c');
    ///
    /// list1.append(&mut list2);
    ///
    /// let mut iter = list1.iter();
    /// assert_eq!(iter.next(), Some(&'a'));
    /// assert_eq!(iter.next(), Some(&'b'));
    /// assert_eq!(iter.next(), Some(&'c'));
    /// assert!(iter.next().is_none());
    ///
    /// assert!(list2.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        if let Some(detached) = other.detach_all_nodes() {
            // `self.back_node()` and `self.ghost_node()` are valid
            // nodes in the list and they are adjacent, so it is safe.
            unsafe { self.attach_nodes(self.back_node(), self.ghost_node(), detached) }
        }
    }

    /// Returns `true` if the links form a single cycle through the ghost node,
    /// with every `next` link mirrored by a `prev` link.
    ///
    /// Every node has a unique predecessor under this check, so the forward
    /// walk either fails or returns to the ghost node.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([3, 1, 2]);
    /// list.reverse();
    /// assert!(list.is_well_formed());
    /// ```
    pub fn is_well_formed(&self) -> bool {
        let ghost = self.ghost_node();
        let mut current = ghost;
        loop {
            // SAFETY: every link reachable from the ghost node is a live node of
            // the list.
            let next = unsafe { next_of(current) };
            if unsafe { prev_of(next) } != current {
                return false;
            }
            if next == ghost {
                return true;
            }
            current = next;
        }
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Allocate a detached node with given element. The links of a detached
    /// node point to the node itself.
    ///
    /// If the allocation fails, `element` is dropped before the error is
    /// returned.
    pub(crate) fn try_new_detached(element: T) -> Result<NonNull<Node<T>>, QueueError> {
        let layout = Layout::new::<Node<T>>();
        // SAFETY: `Node<T>` holds two pointers, so `layout` has a non-zero size.
        let raw = unsafe { alloc::alloc(layout) }.cast::<Node<T>>();
        let node = NonNull::new(raw).ok_or(QueueError::AllocationFailure {
            bytes: layout.size(),
        })?;
        // SAFETY: `node` is freshly allocated with the layout of `Node<T>`, and
        // `Box::from_raw` accepts memory allocated this way.
        unsafe {
            ptr::write(
                node.as_ptr(),
                Node {
                    next: node,
                    prev: node,
                    element,
                },
            );
        }
        Ok(node)
    }

    /// Like [`Node::try_new_detached`], but aborts on allocation failure as
    /// the standard collections do.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        match Self::try_new_detached(element) {
            Ok(node) => node,
            Err(_) => alloc::handle_alloc_error(Layout::new::<Node<T>>()),
        }
    }

    pub(crate) fn into_element(self: Box<Self>) -> T {
        self.element
    }
}

impl<T> DetachedNodes<T> {
    /// If is unsafe because it must be guaranteed that `front..=back` is
    /// a valid range.
    unsafe fn new(front: NonNull<Node<T>>, back: NonNull<Node<T>>) -> Self {
        let _marker = PhantomData;
        Self {
            front,
            back,
            _marker,
        }
    }

    /// Drop every node of `front..=back` with its element, and return the
    /// number of released nodes.
    ///
    /// It is safe because the detached nodes is guaranteed to be a valid range
    /// when construction, and no list reaches them any more.
    pub(crate) fn release(self) -> usize {
        let mut released = 0;
        let mut node = self.front;
        loop {
            // SAFETY: `node` lies in `front..=back`, so its `next` is read
            // before the node is dropped, and `back.next` is never followed.
            let is_back = node == self.back;
            let next = unsafe { node.as_ref().next };
            unsafe { drop(Box::from_raw(node.as_ptr())) };
            released += 1;
            if is_back {
                return released;
            }
            node = next;
        }
    }
}

fn new_ghost() -> Box<Node<Erased>> {
    let ghost_ptr = Node::new_detached(Erased::default());
    // SAFETY:
    // - `ghost.next`, `ghost.prev` already point to `ghost` itself.
    // - `ghost.element` is never read, so it is erased out.
    unsafe { Box::from_raw(ghost_ptr.as_ptr()) }
}

/// Read the `next` link of `node` without forming a reference to the node,
/// so `node` may be the ghost node.
#[inline]
pub(crate) unsafe fn next_of<T>(node: NonNull<Node<T>>) -> NonNull<Node<T>> {
    (*node.as_ptr()).next
}

/// Read the `prev` link of `node`, which may be the ghost node.
#[inline]
pub(crate) unsafe fn prev_of<T>(node: NonNull<Node<T>>) -> NonNull<Node<T>> {
    (*node.as_ptr()).prev
}

/// Link `prev` and `next` to each other.
///
/// Fields are written through raw pointers, so `prev` or `next` may be the
/// ghost node.
pub(crate) unsafe fn connect<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    (*prev.as_ptr()).next = next;
    (*next.as_ptr()).prev = prev;
}

#[cfg(debug_assertions)]
fn assert_adjacent<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    unsafe {
        assert_eq!(next_of(prev), next);
        assert_eq!(prev_of(next), prev);
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for List<T> {}

unsafe impl<T: Sync> Sync for List<T> {}

// Ensure that `List` and its read-only iterator are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
}
