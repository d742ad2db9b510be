use crate::list::{connect, List};

/// Filter the list with a stack laid over its own links: the stack runs from
/// the ghost node to `top` through `next`, and pops go back through `prev`.
///
/// `dominated(top, incoming)` tells whether `top` is removed when `incoming`
/// arrives. Returns the number of remaining elements.
pub(crate) fn retain_monotonic<T, F>(list: &mut List<T>, mut dominated: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    if list.is_empty() {
        return 0;
    }
    if list.is_singular() {
        return 1;
    }
    let ghost = list.ghost_node();
    let mut top = ghost;
    let mut kept = 0_usize;
    let mut node = list.front_node();
    // SAFETY: nodes not yet visited are reached through `next` links which are
    // read before `node` is pushed. Popped nodes are unreachable from both the
    // stack and the unvisited nodes, so they are released immediately.
    unsafe {
        while node != ghost {
            let next = node.as_ref().next;
            while top != ghost && dominated(&top.as_ref().element, &node.as_ref().element) {
                let popped = top;
                top = popped.as_ref().prev;
                List::release_node(popped);
                kept -= 1;
            }
            connect(top, node);
            top = node;
            kept += 1;
            node = next;
        }
        connect(top, ghost);
    }
    log::trace!("monotonic filter kept {} elements", kept);
    kept
}
