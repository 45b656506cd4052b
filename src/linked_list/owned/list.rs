use core::fmt;

use log::trace;

use super::{
    iter::{IntoIter, Iter, IterMut},
    node::{Chain, ChainNode},
    reverse::reverse,
};

/// An owned singly linked list with a tracked length.
pub struct SinglyLinkedList<T> {
    head: Chain<T>,
    len: usize,
}

impl<T> SinglyLinkedList<T> {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Takes ownership of an existing chain, counting its nodes.
    pub fn from_chain(head: Chain<T>) -> Self {
        let mut len = 0;
        let mut current = head.as_deref();
        while let Some(node) = current {
            len += 1;
            current = node.next();
        }
        Self { head, len }
    }

    /// Hands the chain back to the caller.
    ///
    /// A bare [`Chain`] drops recursively, one stack frame per node. Pass a
    /// long chain back through [`SinglyLinkedList::from_chain`] to dispose
    /// of it.
    pub fn into_chain(mut self) -> Chain<T> {
        self.len = 0;
        self.head.take()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the first node of the list
    pub fn head(&self) -> Option<&ChainNode<T>> {
        self.head.as_deref()
    }

    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(ChainNode::with_next(value, next));
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|mut node| {
            self.head = node.take_next();
            self.len -= 1;
            node.into_value()
        })
    }

    pub fn peek_front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| node.value())
    }

    pub fn peek_front_mut(&mut self) -> Option<&mut T> {
        self.head.as_mut().map(|node| node.value_mut())
    }

    pub fn clear(&mut self) {
        while let Some(mut node) = self.head.take() {
            self.head = node.take_next();
        }
        self.len = 0;
    }

    /// Reverses the list in place without allocating.
    pub fn reverse(&mut self) {
        self.head = reverse(self.head.take());
        trace!("reversed owned chain of {} nodes", self.len);
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head.as_deref(), self.len)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.head.as_deref_mut(), self.len)
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    /// Appends in iteration order by pushing onto the reversed chain and
    /// reversing back, which keeps the walk to the tail out of the loop.
    ///
    /// The reverse back runs on drop, so a panicking iterator still leaves
    /// the list in order with the values pushed so far appended.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        struct Restore<'a, T>(&'a mut SinglyLinkedList<T>);

        impl<T> Drop for Restore<'_, T> {
            fn drop(&mut self) {
                self.0.reverse();
            }
        }

        self.reverse();
        let mut guard = Restore(self);
        for value in iter {
            guard.0.push_front(value);
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SinglyLinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
