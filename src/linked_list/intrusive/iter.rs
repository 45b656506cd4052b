use core::iter::FusedIterator;
use core::ptr::NonNull;

use super::traits::{List, Node};

/// Walks the node pointers of an intrusive chain from its head.
///
/// Yields `NonNull` rather than references since the nodes are caller-owned.
pub struct LinkedListIter<'a, T: Node, L: List> {
    _list: &'a L,
    current: Option<NonNull<T>>,
}

impl<'a, T, L> LinkedListIter<'a, T, L>
where
    T: Node,
    L: List<Target = T>,
{
    /// # Safety
    ///
    /// The chain must not be relinked (pushed, popped, reversed) while the
    /// iterator is alive.
    pub unsafe fn new(list: &'a L) -> Self {
        Self {
            current: list.head(),
            _list: list,
        }
    }
}

impl<'a, T, L> Iterator for LinkedListIter<'a, T, L>
where
    T: Node,
    L: List<Target = T>,
{
    type Item = NonNull<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = unsafe { node.as_ref().next() }.map(NonNull::cast);
        Some(node)
    }
}

impl<'a, T, L> FusedIterator for LinkedListIter<'a, T, L>
where
    T: Node,
    L: List<Target = T>,
{
}
