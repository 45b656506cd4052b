//! # Intrusive Singly Linked Chains
//!
//! Nodes live wherever the caller puts them (on the stack, in an arena, or
//! embedded in a larger struct) and carry their own `next` relation. Reversing
//! such a chain only rewires those relations; the nodes stay caller-owned.
//!
//! ## Core Components
//!
//! - [`traits`]: `Link`, `Node`, `NodeWithValue` and `List`.
//! - [`single::SingleLink`] and [`single::SingleNode`]: the link and a ready-made node.
//! - [`list::LinkedList`]: a head plus count over caller-owned nodes.
//! - [`reverse`]: in-place reversal over raw heads, with an opt-in cycle check.
//!
//! Custom node structs derive `Node` and must be `#[repr(C)]` with a
//! `link: SingleLink` first field and an optional `value` field.
//!
//! ```
//! use mola_chain::linked_list::intrusive::single::SingleLink;
//! use mola_chain_derive::Node;
//!
//! #[derive(Node)]
//! #[repr(align(16), C)]
//! struct Frame {
//!     link: SingleLink,
//!     value: u64,
//! }
//! ```
//!
//! Anything else is rejected at compile time. Without `#[repr(C)]`:
//!
//! ```compile_fail
//! use mola_chain::linked_list::intrusive::single::SingleLink;
//! use mola_chain_derive::Node;
//!
//! #[derive(Node)]
//! struct Frame {
//!     link: SingleLink,
//!     value: u64,
//! }
//! ```
//!
//! With `link` after another field:
//!
//! ```compile_fail
//! use mola_chain::linked_list::intrusive::single::SingleLink;
//! use mola_chain_derive::Node;
//!
//! #[derive(Node)]
//! #[repr(C)]
//! struct Frame {
//!     value: u64,
//!     link: SingleLink,
//! }
//! ```
//!
//! With a link that is not a `SingleLink`:
//!
//! ```compile_fail
//! use core::ptr::NonNull;
//! use mola_chain_derive::Node;
//!
//! struct OtherLink {
//!     next: Option<NonNull<OtherLink>>,
//! }
//!
//! #[derive(Node)]
//! #[repr(C)]
//! struct Frame {
//!     link: OtherLink,
//!     value: u64,
//! }
//! ```
//!
//! With a field other than `link` and `value`:
//!
//! ```compile_fail
//! use mola_chain::linked_list::intrusive::single::SingleLink;
//! use mola_chain_derive::Node;
//!
//! #[derive(Node)]
//! #[repr(C)]
//! struct Frame {
//!     link: SingleLink,
//!     payload: u64,
//! }
//! ```
//!
//! ## Safety
//!
//! The user of this module is responsible for upholding several invariants:
//!
//! - Nodes must outlive the list they are in.
//! - A node must not be in two lists at the same time.
//! - When iterating, the list must not be modified.
//! - When removing a node, the provided parent (if any) must be the correct parent of the node.
//! - Chains handed to [`reverse::reverse`] must be acyclic.

pub mod traits;
pub mod wrapper;
pub mod single;
pub mod list;
pub mod iter;
pub mod reverse;

#[cfg(test)]
mod tests;
