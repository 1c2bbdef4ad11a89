use std::iter::FusedIterator;

use crate::node::Node;

/// An iterator of owned keys as the underlying tree `into_iter()` impl,
/// yielding keys in ascending order.
#[derive(Debug)]
pub struct IntoIter<K> {
    stack: Vec<Box<Node<K>>>,
    remaining: usize,
}

impl<K> IntoIter<K> {
    pub(crate) fn new(root: Option<Box<Node<K>>>, len: usize) -> Self {
        let mut this = Self {
            stack: vec![],
            remaining: len,
        };

        // Descend down the left side of the tree.
        if let Some(root) = root {
            this.push_subtree(root);
        }

        this
    }

    fn push_subtree(&mut self, subtree_root: Box<Node<K>>) {
        let mut ptr = Some(subtree_root);

        while let Some(mut v) = ptr {
            ptr = v.take_left();
            self.stack.push(v);
        }
    }
}

impl<K> Iterator for IntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        let mut v = self.stack.pop()?;

        // Descend down the left side of the right hand child of this node, if
        // any.
        if let Some(right) = v.take_right() {
            self.push_subtree(right);
        }

        self.remaining -= 1;
        Some(v.into_key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for IntoIter<K> {}
impl<K> FusedIterator for IntoIter<K> {}
