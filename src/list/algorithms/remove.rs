use crate::list::{prev_of, List};

/// Find the node at index ⌊n/2⌋ with a fast and a slow walker, and detach it.
pub(crate) fn remove_middle<T>(list: &mut List<T>) -> Option<T> {
    if list.is_empty() {
        return None;
    }
    let ghost = list.ghost_node();
    let (mut slow, mut fast) = (list.front_node(), list.front_node());
    // SAFETY: `fast` only moves past a node that is not the ghost node, and
    // `slow` trails behind it, so both stay in the list.
    unsafe {
        while fast != ghost && fast.as_ref().next != ghost {
            slow = slow.as_ref().next;
            fast = fast.as_ref().next.as_ref().next;
        }
        Some(list.detach_node(slow).into_element())
    }
}

pub(crate) fn remove_duplicate_runs<T: PartialEq>(list: &mut List<T>) -> usize {
    let ghost = list.ghost_node();
    let mut removed = 0;
    let mut first = list.front_node();
    // SAFETY: `first..end` is always a range of list nodes holding equal
    // elements, and `end` is the first node after it (maybe the ghost node).
    unsafe {
        while first != ghost {
            let mut end = first.as_ref().next;
            while end != ghost && end.as_ref().element == first.as_ref().element {
                end = end.as_ref().next;
            }
            if end != first.as_ref().next {
                removed += list.detach_nodes(first, prev_of(end)).release();
            }
            first = end;
        }
    }
    removed
}
