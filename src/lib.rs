//! An ordered, in-memory index of keys backed by a self-balancing AVL tree.
//!
//! [`AvlTree`] supports `O(log n)` insertion and lookup with a deterministic
//! worst-case height of roughly `1.44 * log2(n + 2)`, regardless of the order
//! in which keys are inserted. Keys are yielded in ascending order by
//! [`AvlTree::inorder()`].
//!
//! ```
//! use avl_index::AvlTree;
//!
//! let mut t = AvlTree::new();
//! for v in [10, 20, 30] {
//!     t.insert(v);
//! }
//!
//! assert!(t.search(&20));
//! assert!(!t.search(&25));
//! assert_eq!(t.height(), 2);
//! assert_eq!(t.inorder().copied().collect::<Vec<_>>(), [10, 20, 30]);
//! ```
//!
//! Duplicate keys are retained, and keys cannot be removed.
//!
//! The balancing engine emits [`tracing`] events at the `TRACE` level for
//! each rotation performed.

#![deny(rust_2018_idioms, missing_debug_implementations, unreachable_pub)]
#![warn(missing_docs)]

mod error;
mod iter;
mod node;
mod tree;

#[cfg(test)]
mod test_utils;

pub use error::*;
pub use iter::*;
pub use tree::*;
