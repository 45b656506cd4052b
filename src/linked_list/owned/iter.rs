use super::{list::SinglyLinkedList, node::ChainNode};

/// Borrowing iterator over a [`SinglyLinkedList`].
pub struct Iter<'a, T> {
    next: Option<&'a ChainNode<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(head: Option<&'a ChainNode<T>>, len: usize) -> Self {
        Self { next: head, remaining: len }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Mutably borrowing iterator over a [`SinglyLinkedList`].
pub struct IterMut<'a, T> {
    next: Option<&'a mut ChainNode<T>>,
    remaining: usize,
}

impl<'a, T> IterMut<'a, T> {
    pub(super) fn new(head: Option<&'a mut ChainNode<T>>, len: usize) -> Self {
        Self { next: head, remaining: len }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            self.remaining -= 1;
            &mut node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

/// Owning iterator over a [`SinglyLinkedList`].
pub struct IntoIter<T>(SinglyLinkedList<T>);

impl<T> IntoIter<T> {
    pub(super) fn new(list: SinglyLinkedList<T>) -> Self {
        Self(list)
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
