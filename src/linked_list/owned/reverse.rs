use super::node::Chain;

/// Reverses an owned chain in place and returns the new head.
///
/// The former tail becomes the head and the former head ends with no
/// successor. Each `next` box is moved, never reallocated, so node
/// addresses are stable across the call. One pass, O(1) extra space.
///
/// The returned chain still drops recursively. Dispose of long chains through
/// [`SinglyLinkedList::from_chain`](super::SinglyLinkedList::from_chain).
pub fn reverse<T>(head: Chain<T>) -> Chain<T> {
    let mut previous = None;
    let mut current = head;

    while let Some(mut node) = current {
        current = node.next.take();
        node.next = previous;
        previous = Some(node);
    }

    previous
}
