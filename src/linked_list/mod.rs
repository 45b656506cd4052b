//! Singly linked chains and in-place reversal.
//!
//! Two ownership models are provided. In [`owned`] each node owns its
//! successor through a `Box`. In [`intrusive`] the caller owns every node and
//! the chain only threads `next` pointers through them. Both reverse in one
//! pass by rewriting `next` relations, without allocating.
//!
//! # Examples
//!
//! ```
//! use mola_chain::linked_list::intrusive::{
//!     list::LinkedList,
//!     single::SingleNode,
//!     traits::{Link, List, NodeWithValue},
//! };
//! use mola_chain::linked_list::owned::SinglyLinkedList;
//! use core::ptr::NonNull;
//!
//! let mut owned: SinglyLinkedList<i32> = (1..=3).collect();
//! owned.reverse();
//! assert_eq!(owned.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
//!
//! let mut list = LinkedList::<SingleNode<i32>>::new();
//! let mut node1 = SingleNode::new(1);
//! let mut node2 = SingleNode::new(2);
//! let mut node3 = SingleNode::new(3);
//!
//! list.push(NonNull::from(&mut node1));
//! list.push(NonNull::from(&mut node2));
//! list.push(NonNull::from(&mut node3));
//! list.reverse();
//!
//! assert_eq!(list.count(), 3);
//!
//! unsafe {
//!     let mut current = list.head();
//!     let mut values = vec![];
//!     while let Some(node) = current {
//!         let node_ref = node.as_ref();
//!         values.push(*node_ref.value());
//!         current = node_ref.next();
//!     }
//!     assert_eq!(values, vec![1, 2, 3]);
//! }
//! ```
pub mod intrusive;
pub mod owned;
