use crate::list::{connect, next_of, List, Node};
use std::ptr::{self, NonNull};

pub(crate) fn reverse<T>(list: &mut List<T>) {
    if list.is_empty() {
        return;
    }
    // SAFETY: the ghost node anchors the ring of all nodes of the list.
    unsafe { reverse_ring(list.ghost_node()) };
}

/// Reverse every full block of `k` nodes, and return the number of reversed
/// blocks.
pub(crate) fn reverse_in_blocks<T>(list: &mut List<T>, k: usize) -> usize {
    if k < 2 || list.is_empty() {
        return 0;
    }
    let ghost = list.ghost_node();
    let mut before = ghost;
    let mut blocks = 0;
    // SAFETY: `before` is always the ghost node or the back of the last
    // reversed block, and `front..=back` is a range of `k` list nodes.
    unsafe {
        loop {
            let front = next_of(before);
            let mut back = before;
            for _ in 0..k {
                back = next_of(back);
                if back == ghost {
                    return blocks;
                }
            }
            let after = next_of(back);

            // Close `front..=back` into a ring of its own and reverse it. The
            // ring then runs from `back` to `front`.
            connect(back, front);
            reverse_ring(front);
            connect(before, back);
            connect(front, after);

            blocks += 1;
            before = front;
        }
    }
}

/// Swap `next` and `prev` of every node in the ring through `anchor`, the
/// anchor included.
///
/// It is unsafe because `anchor` must be part of a well-formed ring.
pub(crate) unsafe fn reverse_ring<T>(anchor: NonNull<Node<T>>) {
    let mut node = anchor;
    loop {
        let raw = node.as_ptr();
        // The anchor may be a ghost node, so only the link fields are touched.
        ptr::swap(ptr::addr_of_mut!((*raw).next), ptr::addr_of_mut!((*raw).prev));
        // After the swap, `prev` holds the old `next`.
        node = (*raw).prev;
        if node == anchor {
            return;
        }
    }
}
