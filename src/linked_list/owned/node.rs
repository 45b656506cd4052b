use alloc::boxed::Box;

/// A handle to the first node of an owned chain. `None` is the empty chain.
pub type Chain<T> = Option<Box<ChainNode<T>>>;

/// A node of an owned singly linked chain.
///
/// Dropping a bare [`Chain`] drops its nodes recursively. Long chains should
/// be kept in a [`SinglyLinkedList`](super::SinglyLinkedList), which unlinks
/// them one at a time.
#[derive(Debug)]
pub struct ChainNode<T> {
    pub(super) value: T,
    pub(super) next: Chain<T>,
}

impl<T> ChainNode<T> {
    /// Creates a tail node holding `value`.
    pub const fn new(value: T) -> Self {
        Self { value, next: None }
    }

    /// Creates a boxed node holding `value` in front of `next`.
    pub fn with_next(value: T, next: Chain<T>) -> Box<Self> {
        Box::new(Self { value, next })
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    /// Get the successor of this node
    pub fn next(&self) -> Option<&ChainNode<T>> {
        self.next.as_deref()
    }

    /// Get the successor of this node mutably
    pub fn next_mut(&mut self) -> Option<&mut ChainNode<T>> {
        self.next.as_deref_mut()
    }

    /// Replace the successor, returning the old one.
    pub fn set_next(&mut self, next: Chain<T>) -> Chain<T> {
        core::mem::replace(&mut self.next, next)
    }

    /// Detach and return the successor, leaving this node as a tail.
    pub fn take_next(&mut self) -> Chain<T> {
        self.next.take()
    }
}
