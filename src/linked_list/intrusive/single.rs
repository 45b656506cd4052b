use core::ptr::NonNull;

use mola_chain_derive::Node;

use super::traits::{Link, List, Node};

/// A caller-owned node in an intrusive singly linked chain.
#[derive(Node)]
#[node(crate_path = "crate")]
#[repr(C)]
pub struct SingleNode<T> {
    link: SingleLink,
    value: T,
}

impl<T> SingleNode<T> {
    /// Creates an unlinked node holding `value`.
    pub const fn new(value: T) -> Self {
        Self {
            link: SingleLink::new(),
            value,
        }
    }

    /// Consumes the node and returns its value.
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T: Default> Default for SingleNode<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// The `next` relation of an intrusive singly linked chain.
#[derive(Debug, Clone, Copy, Default)]
#[repr(transparent)]
pub struct SingleLink {
    next: Option<NonNull<Self>>,
}

impl SingleLink {
    /// Creates a link with no successor.
    pub const fn new() -> Self {
        Self { next: None }
    }
}

impl Link for SingleLink {
    type Target = Self;

    #[inline]
    fn next(&self) -> Option<NonNull<Self>> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: Option<NonNull<Self>>) {
        self.next = next;
    }
}

impl Node for SingleLink {
    #[inline]
    fn append_to<L>(&mut self, list: &mut L)
    where
        L: List<Target = Self>,
    {
        self.set_next(list.next());
        list.set_next(Some(NonNull::from(self)));
    }

    #[inline]
    unsafe fn detach<L>(&mut self, parent: Option<&mut L>)
    where
        L: Link<Target = Self>,
    {
        let parent = parent.expect("Parent must be provided for detaching");
        parent.set_next(self.next());
        self.set_next(None);
    }
}

unsafe impl Send for SingleLink {}
unsafe impl Sync for SingleLink {}
