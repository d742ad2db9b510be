use crate::list::List;

mod merge;
mod monotonic;
mod remove;
mod reverse;
mod sort;

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

/// The direction of a sorted list, used by sorting and merging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Order {
    /// Non-decreasing from front to back.
    #[default]
    Ascending,
    /// Non-increasing from front to back.
    Descending,
}

impl Order {
    /// `Order::Descending` if `descend` is set, `Order::Ascending` otherwise.
    #[inline]
    pub fn from_descend(descend: bool) -> Self {
        if descend {
            Order::Descending
        } else {
            Order::Ascending
        }
    }

    /// Returns `true` if `a` must come strictly before `b` in this order.
    ///
    /// Equal elements never come strictly before each other.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_queue::Order;
    ///
    /// assert!(Order::Ascending.before(&1, &2));
    /// assert!(Order::Descending.before(&2, &1));
    /// assert!(!Order::Ascending.before(&1, &1));
    /// ```
    #[inline]
    pub fn before<T: Ord + ?Sized>(self, a: &T, b: &T) -> bool {
        match self {
            Order::Ascending => a < b,
            Order::Descending => a > b,
        }
    }

    /// Returns `true` if the items are sorted in this order.
    pub fn is_sorted<'a, T, I>(self, items: I) -> bool
    where
        T: Ord + ?Sized + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let mut items = items.into_iter();
        let mut prev = match items.next() {
            Some(prev) => prev,
            None => return true,
        };
        for item in items {
            if self.before(item, prev) {
                return false;
            }
            prev = item;
        }
        true
    }
}

impl<T> List<T> {
    /// Reverse the list in place by swapping the links of every node,
    /// the ghost node included.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// list.reverse();
    /// assert_eq!(list, List::from_iter([3, 2, 1]));
    /// ```
    pub fn reverse(&mut self) {
        reverse::reverse(self);
        debug_assert!(self.is_well_formed());
    }

    /// Reverse every block of `k` consecutive elements in place. A trailing
    /// block shorter than `k` keeps its order.
    ///
    /// `k == 0` and `k == 1` leave the list unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(1..=8);
    /// list.reverse_k(3);
    /// assert_eq!(list, List::from_iter([3, 2, 1, 6, 5, 4, 7, 8]));
    /// ```
    pub fn reverse_k(&mut self, k: usize) {
        let blocks = reverse::reverse_in_blocks(self, k);
        log::trace!("reversed {} blocks of {}", blocks, k);
        debug_assert!(self.is_well_formed());
    }

    /// Swap every two adjacent elements, the same as `reverse_k(2)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(1..=5);
    /// list.swap_pairs();
    /// assert_eq!(list, List::from_iter([2, 1, 4, 3, 5]));
    /// ```
    #[inline]
    pub fn swap_pairs(&mut self) {
        self.reverse_k(2);
    }

    /// Remove the middle element and return it, or `None` if the list is
    /// empty.
    ///
    /// The middle of a list of length *n* is the element at index ⌊*n*/2⌋,
    /// so the later one of the two middles of an even-length list is removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3, 4]);
    /// assert_eq!(list.remove_middle(), Some(3));
    /// assert_eq!(list.remove_middle(), Some(2));
    /// ```
    pub fn remove_middle(&mut self) -> Option<T> {
        let middle = remove::remove_middle(self);
        debug_assert!(self.is_well_formed());
        middle
    }

    /// Remove every run of two or more adjacent equal elements, including the
    /// first element of the run, and return the number of removed elements.
    ///
    /// On a sorted list this leaves exactly the elements that occur once.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 2, 3, 3, 3, 4]);
    /// assert_eq!(list.remove_duplicate_runs(), 5);
    /// assert_eq!(list, List::from_iter([1, 4]));
    /// ```
    pub fn remove_duplicate_runs(&mut self) -> usize
    where
        T: PartialEq,
    {
        let removed = remove::remove_duplicate_runs(self);
        log::trace!("removed {} duplicated elements", removed);
        debug_assert!(self.is_well_formed());
        removed
    }

    /// Remove every element that has a strictly smaller element anywhere to
    /// its right, and return the number of remaining elements.
    ///
    /// The remaining elements keep their relative order and are non-decreasing.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 5, 2, 2, 3]);
    /// assert_eq!(list.retain_ascending(), 4);
    /// assert_eq!(list, List::from_iter([1, 2, 2, 3]));
    /// ```
    pub fn retain_ascending(&mut self) -> usize
    where
        T: Ord,
    {
        let kept = monotonic::retain_monotonic(self, |top, incoming| top > incoming);
        debug_assert!(self.is_well_formed());
        kept
    }

    /// Remove every element that has a strictly greater element anywhere to
    /// its right, and return the number of remaining elements.
    ///
    /// The remaining elements keep their relative order and are non-increasing.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([5, 2, 13, 3, 8]);
    /// assert_eq!(list.retain_descending(), 2);
    /// assert_eq!(list, List::from_iter([13, 8]));
    /// ```
    pub fn retain_descending(&mut self) -> usize
    where
        T: Ord,
    {
        let kept = monotonic::retain_monotonic(self, |top, incoming| top < incoming);
        debug_assert!(self.is_well_formed());
        kept
    }

    /// Sort the list in the given order with a selection sort.
    ///
    /// The relative order of equal elements is unspecified.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*²) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_queue::{List, Order};
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([5, 2, 4, 3, 1]);
    ///
    /// list.selection_sort(Order::Ascending);
    /// assert_eq!(list, List::from_iter([1, 2, 3, 4, 5]));
    ///
    /// list.selection_sort(Order::Descending);
    /// assert_eq!(list, List::from_iter([5, 4, 3, 2, 1]));
    /// ```
    pub fn selection_sort(&mut self, order: Order)
    where
        T: Ord,
    {
        sort::selection_sort(self, order);
        debug_assert!(self.is_well_formed());
    }

    /// Merge the sorted list `other` into this sorted list, keeping the result
    /// sorted in `order`. After this operation, `other` becomes empty.
    ///
    /// Of two equal elements, the one from `self` comes first.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* + *m*) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_queue::{List, Order};
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 3, 5]);
    /// let mut other = List::from_iter([2, 4]);
    /// list.merge(&mut other, Order::Ascending);
    /// assert_eq!(list, List::from_iter([1, 2, 3, 4, 5]));
    /// assert!(other.is_empty());
    /// ```
    pub fn merge(&mut self, other: &mut Self, order: Order)
    where
        T: Ord,
    {
        merge::merge_sorted(self, other, order);
        debug_assert!(self.is_well_formed());
        debug_assert!(other.is_empty());
    }
}

#[cfg(test)]
mod tests {
    use crate::list::{List, Order};
    use std::iter::FromIterator;

    #[test]
    fn order_from_descend() {
        assert_eq!(Order::from_descend(false), Order::Ascending);
        assert_eq!(Order::from_descend(true), Order::Descending);
        assert_eq!(Order::default(), Order::Ascending);
    }

    #[test]
    fn order_is_sorted() {
        assert!(Order::Ascending.is_sorted(&[1, 1, 2, 3]));
        assert!(!Order::Ascending.is_sorted(&[1, 3, 2]));
        assert!(Order::Descending.is_sorted(&[3, 3, 1]));
        assert!(!Order::Descending.is_sorted(&[1, 2]));
        assert!(Order::Ascending.is_sorted(&Vec::<i32>::new()));
        assert!(Order::Descending.is_sorted(&[7]));
    }

    #[test]
    fn list_eq_walks_both_lists() {
        let list = List::from_iter(["a", "b", "c"]);
        assert_eq!(list, List::from_iter(["a", "b", "c"]));
        assert_ne!(list, List::from_iter(["a", "b"]));
        assert_ne!(list, List::from_iter(["a", "b", "c", "d"]));
        assert_eq!(List::<&str>::new(), List::new());
    }
}
