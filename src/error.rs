use thiserror::Error;

/// A violation of the structural invariants of an [`AvlTree`].
///
/// These errors never occur during normal use of the tree: they signal a
/// defect in the balancing logic, or are reported by
/// [`AvlTree::validate()`] when inspecting a tree.
///
/// [`AvlTree`]: crate::AvlTree
/// [`AvlTree::validate()`]: crate::AvlTree::validate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// A right rotation was requested on a node with no left child.
    #[error("cannot rotate right: node has no left child")]
    MissingLeftChild,

    /// A left rotation was requested on a node with no right child.
    #[error("cannot rotate left: node has no right child")]
    MissingRightChild,

    /// A key is not ordered relative to one of its ancestors.
    #[error("binary search ordering violated")]
    Unordered,

    /// The cached height of a node does not match its children.
    #[error("cached node height {cached} does not match expected height {expected}")]
    HeightMismatch {
        /// The height computed from the child subtrees.
        expected: u8,
        /// The height stored in the node.
        cached: u8,
    },

    /// The height difference between the two subtrees of a node exceeds 1.
    #[error("node balance factor {balance} out of range")]
    Unbalanced {
        /// The balance factor of the offending node.
        balance: i8,
    },
}
