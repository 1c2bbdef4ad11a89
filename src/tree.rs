use std::{borrow::Borrow, cmp::Ordering};

use crate::{
    error::InvariantViolation,
    iter::{IntoIter, Iter},
    node::{height, rebalance, Node, Side},
};

/// An ordered collection of keys, kept height-balanced as an AVL tree.
///
/// Insertion and lookup are `O(log n)` in the worst case regardless of the
/// order in which keys are inserted. Duplicate keys are permitted and are all
/// retained, yielded adjacently by [`AvlTree::inorder()`].
///
/// Keys cannot be removed once inserted.
#[derive(Debug, Clone)]
pub struct AvlTree<K> {
    root: Option<Box<Node<K>>>,
    len: usize,
}

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self {
            root: None,
            len: 0,
        }
    }
}

impl<K> AvlTree<K> {
    /// Construct an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the number of keys inserted into the tree, including
    /// duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return true if no keys have been inserted.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Return the height of the tree: 0 when empty, 1 for a single key.
    pub fn height(&self) -> u8 {
        height(self.root.as_deref())
    }

    /// Iterate over all keys in ascending order.
    ///
    /// Duplicate keys are yielded adjacently.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// Return the in-order sequence of all keys, ascending.
    ///
    /// The sequence is computed fresh on each call.
    pub fn inorder(&self) -> Iter<'_, K> {
        self.iter()
    }
}

impl<K> AvlTree<K>
where
    K: Ord,
{
    /// Insert `key` into the tree, rebalancing as necessary.
    ///
    /// A key equal to one already in the tree is inserted alongside it.
    pub fn insert(&mut self, key: K) {
        // Detach each node along the path from the root to the insertion
        // point, recording the child slot the descent continued through.
        //
        // Keys that compare equal to a node descend to the right.
        let mut path = Vec::with_capacity(self.height() as usize);
        let mut ptr = self.root.take();
        while let Some(mut n) = ptr {
            let side = if key < *n.key() {
                Side::Left
            } else {
                Side::Right
            };
            ptr = n.take_child(side);
            path.push((n, side));
        }

        // Reattach the path bottom-up, starting with the new leaf, correcting
        // the balance of each ancestor before linking it to its own parent.
        let mut subtree = Box::new(Node::new(key));
        while let Some((mut parent, side)) = path.pop() {
            parent.set_child(side, subtree);
            rebalance(&mut parent);
            subtree = parent;
        }

        self.root = Some(subtree);
        self.len += 1;
    }

    /// Return true if a key equal to `key` exists in the tree.
    pub fn search<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut ptr = self.root.as_deref();
        while let Some(n) = ptr {
            ptr = match key.cmp(n.key().borrow()) {
                Ordering::Less => n.left(),
                Ordering::Equal => return true,
                Ordering::Greater => n.right(),
            };
        }

        false
    }

    /// Walk the entire tree, asserting the binary search ordering, the cached
    /// node heights and the AVL balance of every node.
    ///
    /// A well-formed tree always returns `Ok(())`; an error indicates a defect
    /// in the balancing logic.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        validate_subtree(self.root.as_deref(), None, None).map(|_| ())
    }
}

/// Validate the subtree rooted at `n`, the keys of which must lie within the
/// inclusive `lower` and `upper` bounds, returning the subtree height.
///
/// Rotations may move a key equal to its parent into either subtree, so the
/// bounds are inclusive on both sides.
fn validate_subtree<K>(
    n: Option<&Node<K>>,
    lower: Option<&K>,
    upper: Option<&K>,
) -> Result<u8, InvariantViolation>
where
    K: Ord,
{
    let n = match n {
        Some(v) => v,
        None => return Ok(0),
    };

    if lower.is_some_and(|v| n.key() < v) || upper.is_some_and(|v| n.key() > v) {
        return Err(InvariantViolation::Unordered);
    }

    let left = validate_subtree(n.left(), lower, Some(n.key()))?;
    let right = validate_subtree(n.right(), Some(n.key()), upper)?;

    let expected = 1 + left.max(right);
    if n.height() != expected {
        return Err(InvariantViolation::HeightMismatch {
            expected,
            cached: n.height(),
        });
    }

    let balance = n.balance_factor();
    if balance.abs() > 1 {
        return Err(InvariantViolation::Unbalanced { balance });
    }

    Ok(expected)
}

impl<K> IntoIterator for AvlTree<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.root, self.len)
    }
}

impl<'a, K> IntoIterator for &'a AvlTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K> Extend<K> for AvlTree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K> FromIterator<K> for AvlTree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut t = Self::new();
        t.extend(iter);
        t
    }
}
