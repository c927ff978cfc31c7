//! This crate grows Binary Search Trees (BSTs) from random keys and measures
//! them, mostly for checking the average-case analyses of BST algorithms
//! against experiment.
//!
//! ## Random Binary Search Trees
//!
//! A Binary Search Tree stores keys in `Node`s, each with up to two child
//! `Node`s. For every `Node`, all the keys in its left subtree are smaller
//! than its own key and all the keys in its right subtree are larger.
//!
//! Nothing here rebalances. A [`RandomBst`] is built by drawing `N` keys
//! uniformly from `[1, N]` and inserting them one after another, so its shape
//! is the one the textbook analyses average over. From that tree we read:
//!
//! - the height, i.e. the number of levels,
//! - the number of leaves (`Node`s with no children),
//! - the internal path length (sum of the depths of all `Node`s) and the
//!   external path length (sum of the depths of all empty child slots),
//! - the expected number of compares for a search hit and a search miss.
//!
//! > For any binary tree with `S` nodes the external path length is the
//! > internal path length plus `2S`, and there are `S + 1` empty slots.
//!
//! [`stats`] repeats these measurements over a range of `N` and pairs the
//! averages with the closed-form predictions in [`model`].

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod model;
pub mod random;
pub mod stats;
mod util;

pub use error::{Error, Result};
pub use random::{Node, RandomBst, Violation};
