use crate::list::{List, Order};

/// Merge sorted `other` into sorted `list` by moving runs of `other`'s nodes
/// in front of the first node of `list` they must precede. Whatever is left of
/// `other` is appended.
pub(crate) fn merge_sorted<T: Ord>(list: &mut List<T>, other: &mut List<T>, order: Order) {
    let ghost = list.ghost_node();
    let other_ghost = other.ghost_node();
    let mut cursor = list.front_node();
    // SAFETY: `cursor` is always a node of `list` (maybe its ghost node), and
    // `front..=back` is always a non-empty range at the front of `other`.
    unsafe {
        while cursor != ghost && !other.is_empty() {
            let front = other.front_node();
            let target = &cursor.as_ref().element;
            if !order.before(&front.as_ref().element, target) {
                cursor = cursor.as_ref().next;
                continue;
            }
            let mut back = front;
            loop {
                let next = back.as_ref().next;
                if next == other_ghost || !order.before(&next.as_ref().element, target) {
                    break;
                }
                back = next;
            }
            let detached = other.detach_nodes(front, back);
            list.attach_nodes(cursor.as_ref().prev, cursor, detached);
        }
    }
    list.append(other);
}
