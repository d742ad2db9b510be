use crate::list::{connect, List, Order};

/// Selection sort over a ring detached from the ghost node.
///
/// Each round scans the remaining ring for its maximum. In ascending order the
/// maximum is pushed to the front of the list, and the last scanned of equal
/// maxima wins. In descending order it is pushed to the back, and the first
/// scanned wins.
pub(crate) fn selection_sort<T: Ord>(list: &mut List<T>, order: Order) {
    if list.is_singular() {
        return;
    }
    let detached = match list.detach_all_nodes() {
        Some(detached) => detached,
        None => return,
    };
    // SAFETY: the detached nodes are closed into a ring of their own, and
    // every selected node is unlinked from that ring before it is attached to
    // the (adjacent) ends of the list.
    unsafe {
        connect(detached.back, detached.front);
        let mut start = Some(detached.front);
        while let Some(first) = start {
            let mut max = first;
            let mut node = first.as_ref().next;
            while node != first {
                let (current, candidate) = (&max.as_ref().element, &node.as_ref().element);
                let replace = match order {
                    Order::Ascending => current <= candidate,
                    Order::Descending => current < candidate,
                };
                if replace {
                    max = node;
                }
                node = node.as_ref().next;
            }

            let next = max.as_ref().next;
            start = if next == max {
                None
            } else {
                connect(max.as_ref().prev, next);
                Some(if max == first { next } else { first })
            };

            match order {
                Order::Ascending => list.attach_node(list.ghost_node(), list.front_node(), max),
                Order::Descending => list.attach_node(list.back_node(), list.ghost_node(), max),
            }
        }
    }
}
