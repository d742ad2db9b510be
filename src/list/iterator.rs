use crate::list::{next_of, prev_of, List, Node};
use std::fmt;
use std::iter::{FromIterator, FusedIterator};
use std::marker::PhantomData;
use std::ptr::NonNull;

/// A half-open range `start..end` of list nodes. `end` is usually the ghost
/// node, and the range is empty once both ends meet.
struct Span<T> {
    start: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
}

impl<T> Clone for Span<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Span<T> {}

impl<T> Span<T> {
    fn of(list: &List<T>) -> Self {
        Self {
            start: list.front_node(),
            end: list.ghost_node(),
        }
    }

    /// Take the node at `start` off the range.
    ///
    /// It is unsafe because the range must still lie in a well-formed list.
    unsafe fn take_front(&mut self) -> Option<NonNull<Node<T>>> {
        if self.start == self.end {
            return None;
        }
        let node = self.start;
        self.start = next_of(node);
        Some(node)
    }

    /// Take the node before `end` off the range.
    ///
    /// It is unsafe because the range must still lie in a well-formed list.
    unsafe fn take_back(&mut self) -> Option<NonNull<Node<T>>> {
        if self.start == self.end {
            return None;
        }
        self.end = prev_of(self.end);
        Some(self.end)
    }
}

/// An iterator over the elements of a `List`, front to back.
///
/// The iterator borrows the list immutably for `'a`, so the list cannot be
/// modified while it is alive.
///
/// ```compile_fail
/// use sentinel_queue::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut iter = list.iter();
/// list.push_back(4);
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    span: Span<T>,
    _marker: PhantomData<&'a List<T>>,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        Self {
            span: Span::of(list),
            _marker: PhantomData,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            span: self.span,
            _marker: PhantomData,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.clone().collect::<Vec<_>>()).finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: the list is borrowed for `'a`, so every node of the span is
        // an element node alive for `'a`.
        unsafe { self.span.take_front().map(|node| &(*node.as_ptr()).element) }
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        // SAFETY: same as `next`.
        unsafe { self.span.take_back().map(|node| &(*node.as_ptr()).element) }
    }
}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// A front-to-back iterator with mutable access to the elements, never to
/// the links.
///
/// The list is not readable while an `IterMut` is alive.
/// ```compile_fail
/// use sentinel_queue::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut iter = list.iter_mut();
/// println!("{:?}", list.back());
/// println!("{:?}", iter.next());
/// ```
pub struct IterMut<'a, T: 'a> {
    span: Span<T>,
    _marker: PhantomData<&'a mut List<T>>,
}

impl<'a, T: 'a> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>) -> Self {
        Self {
            span: Span::of(list),
            _marker: PhantomData,
        }
    }
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: the list is borrowed mutably for `'a` and each node leaves
        // the span once, so no element is handed out twice.
        unsafe {
            self.span
                .take_front()
                .map(|node| &mut (*node.as_ptr()).element)
        }
    }
}

impl<'a, T: 'a> FusedIterator for IterMut<'a, T> {}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.push_back(item));
    }
}
