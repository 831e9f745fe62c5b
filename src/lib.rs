//! Two node-based collections that are generic over their elements and over how those elements
//! are compared.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree stores values in `Node`s that each have up to two children. The
//! invariants of the tree are:
//!
//! 1. For every `Node`, all the `Node`s in its lesser subtree hold values that compare less
//!    than its own value.
//! 2. For every `Node`, all the `Node`s in its greater subtree hold values that compare greater
//!    than or equal to its own value.
//!
//! Searching takes `O(depth)`. [`BinarySearchTree`] does no rebalancing, so the depth depends
//! on insertion order: random insertions keep it near `O(lg N)` while sorted insertions make
//! it `O(N)`. Every node also points back at its parent, which is what lets
//! [`in_order`](BinarySearchTree::in_order), [`pre_order`](BinarySearchTree::pre_order) and
//! [`reverse_order`](BinarySearchTree::reverse_order) step through the tree lazily in constant
//! space.
//!
//! ## Singly Linked List
//!
//! [`SinglyLinkedList`] is a chain of boxed nodes that each point at the next one. It supports
//! positional access and a stable merge sort that relinks nodes instead of moving values.
//!
//! ## Comparing elements
//!
//! The tree is ordered by a [`Comparer`](compare::Comparer) and the list searches with an
//! [`Equality`](compare::Equality). Both default to the natural [`Ord`] and [`PartialEq`] of the
//! element type, and both are implemented for closures.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]
#![warn(clippy::undocumented_unsafe_blocks)]

pub mod compare;
pub mod error;
pub mod list;
pub mod tree;

pub(crate) mod util;

#[cfg(test)]
mod test;

pub use list::SinglyLinkedList;
pub use tree::BinarySearchTree;
