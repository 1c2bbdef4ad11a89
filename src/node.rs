use tracing::trace;

use crate::error::InvariantViolation;

/// The child pointer of a [`Node`] to descend into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub(crate) struct Node<K> {
    /// Child nodes pointers.
    left: Option<Box<Node<K>>>,
    right: Option<Box<Node<K>>>,

    /// The cached AVL height of the subtree rooted at this node.
    ///
    /// A leaf has a height of 1, and an absent subtree a height of 0.
    ///
    /// A u8 holds a maximum value of 255, meaning it can represent the height
    /// of a balanced tree of up to 5.78*10⁷⁶ entries.
    height: u8,

    key: K,
}

impl<K> Node<K> {
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
            height: 1,
        }
    }

    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    pub(crate) fn height(&self) -> u8 {
        self.height
    }

    /// Compute the "balance factor" of the subtree rooted at `self`.
    ///
    /// Returns the subtree height skew / magnitude, which is a positive number
    /// when left heavy, and a negative number when right heavy.
    pub(crate) fn balance_factor(&self) -> i8 {
        // Correctness: the height is a u8, the maximal value of which fits in
        // an i16 without truncation or sign inversion.
        (height(self.left()) as i16 - height(self.right()) as i16) as i8
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Remove the left child, if any.
    pub(crate) fn take_left(&mut self) -> Option<Box<Self>> {
        self.left.take()
    }

    /// Remove the right child, if any.
    pub(crate) fn take_right(&mut self) -> Option<Box<Self>> {
        self.right.take()
    }

    /// Detach the child on `side`, leaving the slot empty.
    ///
    /// The cached height of `self` is left untouched until the child is
    /// reattached with [`Node::set_child()`].
    pub(crate) fn take_child(&mut self, side: Side) -> Option<Box<Self>> {
        match side {
            Side::Left => self.take_left(),
            Side::Right => self.take_right(),
        }
    }

    /// Link `child` as the `side` descendent of `self`, replacing any existing
    /// subtree in that slot.
    pub(crate) fn set_child(&mut self, side: Side, child: Box<Self>) {
        let slot = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        *slot = Some(child);
        update_height(self);
    }

    pub(crate) fn into_key(self) -> K {
        self.key
    }
}

/// Return the cached height of `n`, or 0 if there is no subtree.
pub(crate) fn height<K>(n: Option<&Node<K>>) -> u8 {
    n.map(|v| v.height()).unwrap_or_default()
}

/// Return the balance factor of `n`, or 0 if there is no subtree.
pub(crate) fn balance_factor<K>(n: Option<&Node<K>>) -> i8 {
    n.map(Node::balance_factor).unwrap_or_default()
}

fn update_height<K>(n: &mut Node<K>) {
    n.height = 1 + height(n.left()).max(height(n.right()));
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// The height of `x` is recomputed before that of `P`, its new parent.
///
/// Returns [`InvariantViolation::MissingRightChild`] if `x` has no right
/// pointer (cannot be rotated), leaving `x` unchanged.
pub(crate) fn rotate_left<K>(x: &mut Box<Node<K>>) -> Result<(), InvariantViolation> {
    let mut p = x
        .take_right()
        .ok_or(InvariantViolation::MissingRightChild)?;
    std::mem::swap(x, &mut p);

    p.right = x.take_left();
    update_height(&mut p);

    x.left = Some(p);
    update_height(x);

    trace!(height = x.height, "rotated left");
    Ok(())
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// The height of `y` is recomputed before that of `P`, its new parent.
///
/// Returns [`InvariantViolation::MissingLeftChild`] if `y` has no left pointer
/// (cannot be rotated), leaving `y` unchanged.
pub(crate) fn rotate_right<K>(y: &mut Box<Node<K>>) -> Result<(), InvariantViolation> {
    let mut p = y.take_left().ok_or(InvariantViolation::MissingLeftChild)?;
    std::mem::swap(y, &mut p);

    p.left = y.take_right();
    update_height(&mut p);

    y.right = Some(p);
    update_height(y);

    trace!(height = y.height, "rotated right");
    Ok(())
}

/// Restore the AVL property of the subtree rooted at `n`, replacing `n` with
/// the new subtree root if a rotation is performed.
///
/// Both child subtrees of `n` must already be balanced; descendents are never
/// visited, making this an O(1) operation intended to be applied to each
/// ancestor of a modified node, bottom-up.
///
/// # Panics
///
/// Panics if a rotation precondition does not hold, which indicates the cached
/// node heights are corrupt.
pub(crate) fn rebalance<K>(n: &mut Box<Node<K>>) {
    if let Err(e) = try_rebalance(n) {
        panic!("avl rebalance failed: {e}");
    }

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed 1.
    debug_assert!(n.balance_factor().abs() <= 1);
}

fn try_rebalance<K>(n: &mut Box<Node<K>>) -> Result<(), InvariantViolation> {
    update_height(n);

    match n.balance_factor() {
        // Left-heavy
        2.. => {
            if balance_factor(n.left()) < 0 {
                trace!("rebalancing left-right case");
                let left = n.left.as_mut().ok_or(InvariantViolation::MissingLeftChild)?;
                rotate_left(left)?;
            } else {
                trace!("rebalancing left-left case");
            }
            rotate_right(n)
        }
        // Right-heavy
        ..=-2 => {
            if balance_factor(n.right()) > 0 {
                trace!("rebalancing right-left case");
                let right = n
                    .right
                    .as_mut()
                    .ok_or(InvariantViolation::MissingRightChild)?;
                rotate_right(right)?;
            } else {
                trace!("rebalancing right-right case");
            }
            rotate_left(n)
        }
        #[allow(clippy::manual_range_patterns)]
        -1 | 0 | 1 => Ok(()), // The tree is well balanced
    }
}
