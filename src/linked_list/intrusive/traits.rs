use core::ptr::NonNull;

use super::iter::LinkedListIter;

/// A trait for an intrusive singly linked chain with a tracked head.
pub trait List: Link {
    /// Get the head of the chain
    fn head(&self) -> Option<NonNull<Self::Target>>;

    /// Set the head of the chain
    fn set_head(&mut self, head: Option<NonNull<Self::Target>>);

    /// Push a new node to the front of the chain
    fn push(&mut self, node: NonNull<Self::Target>);

    /// Pop a node from the front of the chain
    fn pop(&mut self) -> Option<NonNull<Self::Target>>;

    /// Remove a node from the chain
    fn remove(&mut self, node: NonNull<Self::Target>) -> Option<NonNull<Self::Target>>;

    /// Quick remove a node from the chain without checking if it exists
    ///
    /// This directly detaches the node given its predecessor. Usually you will
    /// need a custom structure(index) to prove that the node is in the chain.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the node exists in the chain and that
    /// `parent` is its predecessor, or `None` when the node is the head.
    unsafe fn quick_remove(&mut self, node: NonNull<Self::Target>, parent: Option<NonNull<Self::Target>>) -> Option<NonNull<Self::Target>>;

    /// Reverse the chain in place.
    ///
    /// Every node's `next` is rewritten to point at its former predecessor and
    /// the former tail becomes the head. No node is added or removed.
    fn reverse(&mut self)
    where
        Self::Target: Link<Target = Self::Target>;

    /// Check if the chain is empty
    fn is_empty(&self) -> bool;

    /// Get the number of nodes in the chain
    fn count(&self) -> usize;

    /// Get an iterator over the chain
    /// # Safety
    /// The caller must ensure that the chain is not modified while iterating.
    unsafe fn iter<'a>(&'a self) -> LinkedListIter<'a, Self::Target, Self>
    where
        Self::Target: Node
    {
        unsafe { LinkedListIter::new(self) }
    }
}

/// A trait for the `next` relation of a chain.
pub trait Link: Sized {
    /// The target type of the link.
    type Target;

    /// Get the next pointer in the chain
    fn next(&self) -> Option<NonNull<Self::Target>>;

    /// Set the next pointer in the chain
    fn set_next(&mut self, next: Option<NonNull<Self::Target>>);
}

/// A trait for a node in a chain.
pub trait Node: Link {
    /// Append the node to the front of a chain
    fn append_to<L>(&mut self, list: &mut L)
    where
        L: List<Target = Self>;

    /// Detach the node from the chain
    ///
    /// # Safety
    ///
    /// The parent must be the node or `List` whose `next` is this node.
    /// It will update the parent's next pointer to skip this node.
    unsafe fn detach<L>(&mut self, parent: Option<&mut L>)
    where
        L: Link<Target = Self>;
}

/// A trait for a node that carries a value.
pub trait NodeWithValue: Node {
    /// The type of value stored in the node.
    type Value;

    /// Get the value associated with the node
    fn value(&self) -> &Self::Value;

    /// Get a mutable reference to the value associated with the node
    fn value_mut(&mut self) -> &mut Self::Value;
}
