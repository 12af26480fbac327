//! This crate exposes an unbalanced, ordered Binary Search Tree (BST) together with the
//! rotation primitives a balancing scheme is built from.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree stores values so that they can be found again by comparing against a
//! handful of nodes instead of all of them. BSTs are defined recursively using the notion of a
//! [`Node`]. A `Node` stores one value and may have up to two child `Node`s. The invariants of
//! this BST are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value less than or equal to
//!    its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value greater than its own
//!    value.
//!
//! > Note that equal values therefore always go left, so duplicates are kept and stack up
//! > along the left side of the first one inserted.
//!
//! Searching takes `O(height)`, where `height` is the longest path from the root `Node` to a
//! leaf `Node`. [`OrderedTree`] never rebalances itself, so inserting sorted values builds a
//! chain whose height equals its length.
//!
//! ## Rotations
//!
//! A rotation changes which node roots a subtree while keeping the in-order sequence of its
//! values. The four kinds are listed in [`Rotation`]. They're available two ways:
//!
//! - On an owned subtree (`Box<Node<E>>`) via [`Node::rotate_left`] and friends. These take the
//!   old subtree root and return the new one; re-attaching it is up to the caller. Calling one
//!   on a subtree without the needed child panics.
//! - Inside a tree via [`NodeMut::rotate`] (or [`OrderedTree::rotate_root`]), which re-attaches
//!   the promoted node for you and returns a [`RotationError`] instead of panicking.
//!
//! After rotating, values equal to a node may sit on either side of it, but an in-order walk is
//! still sorted and [`OrderedTree::contains`] still finds every value.
//!
//! ## Concurrency
//!
//! Nothing here synchronizes. Share a tree between threads behind a single lock covering both
//! lookups and mutations.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod node;
mod rotation;
mod tree;

#[cfg(test)]
mod test;

pub use node::{Iter, Node};
pub use rotation::{Child, Rotation, RotationError};
pub use tree::{NodeMut, OrderedTree};
