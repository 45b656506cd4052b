//! Owned singly linked chains.
//!
//! Each [`node::ChainNode`] owns its successor through `Option<Box<_>>`, so
//! a chain is acyclic by construction and [`reverse::reverse`] needs no
//! `unsafe`. Reversal moves the boxes; no node is allocated or freed.

pub mod node;
pub mod reverse;
pub mod list;
pub mod iter;

pub use list::SinglyLinkedList;
pub use node::{Chain, ChainNode};
pub use reverse::reverse;
