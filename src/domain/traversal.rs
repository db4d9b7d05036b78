//! Traversal iterators over a [`TernaryTree`](crate::domain::TernaryTree).
//!
//! Every iterator borrows the tree for its whole life, so the tree cannot be
//! mutated while a traversal is in progress. Iterators are single-pass: once
//! exhausted they stay exhausted, and a new traversal starts from the tree again.

use std::collections::VecDeque;
use std::fmt;

use tracing::{instrument, trace};

use crate::domain::error::{TreeError, TreeResult};
use crate::domain::node::TernaryNode;

/// Cursor-style access on top of [`Iterator`].
pub trait TraversalIterator<'a, T: 'a>: Iterator<Item = &'a T> {
    /// True iff at least one more value remains.
    fn has_next(&self) -> bool;

    /// Like [`Iterator::next`], but exhaustion is an error.
    fn try_next(&mut self) -> TreeResult<&'a T> {
        self.next().ok_or(TreeError::NoSuchElement)
    }

    /// Traversals are read-only; removal is never supported.
    fn remove(&mut self) -> TreeResult<()> {
        Err(TreeError::UnsupportedOperation("remove"))
    }
}

/// Node, then left, middle and right subtrees.
pub struct Preorder<'a, T> {
    stack: Vec<&'a TernaryNode<T>>,
}

impl<'a, T> Preorder<'a, T> {
    pub(crate) fn new(root: Option<&'a TernaryNode<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = &'a T;

    #[instrument(level = "trace", skip(self))]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reverse slot order so the left child is popped first
        self.stack.extend(node.children().rev());
        Some(node.data())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), None)
    }
}

impl<'a, T: 'a> TraversalIterator<'a, T> for Preorder<'a, T> {
    fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }
}

/// Left, middle and right subtrees, then the node.
///
/// The full sequence is collected when the iterator is created and replayed
/// one value per call.
pub struct Postorder<'a, T> {
    sequence: std::vec::IntoIter<&'a T>,
}

impl<'a, T> Postorder<'a, T> {
    pub(crate) fn new(root: Option<&'a TernaryNode<T>>) -> Self {
        let mut sequence = Vec::new();
        if let Some(root) = root {
            Self::collect(root, &mut sequence);
        }
        trace!(len = sequence.len(), "postorder sequence collected");
        Self {
            sequence: sequence.into_iter(),
        }
    }

    fn collect(node: &'a TernaryNode<T>, sequence: &mut Vec<&'a T>) {
        for child in node.children() {
            Self::collect(child, sequence);
        }
        sequence.push(node.data());
    }
}

impl<'a, T> Iterator for Postorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.sequence.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.sequence.size_hint()
    }
}

impl<'a, T> ExactSizeIterator for Postorder<'a, T> {}

impl<'a, T: 'a> TraversalIterator<'a, T> for Postorder<'a, T> {
    fn has_next(&self) -> bool {
        self.sequence.len() > 0
    }
}

/// Breadth first: depth 0, then depth 1, and so on; left to right within a depth.
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a TernaryNode<T>>,
}

impl<'a, T> LevelOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a TernaryNode<T>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    #[instrument(level = "trace", skip(self))]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.children());
        Some(node.data())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), None)
    }
}

impl<'a, T: 'a> TraversalIterator<'a, T> for LevelOrder<'a, T> {
    fn has_next(&self) -> bool {
        !self.queue.is_empty()
    }
}

/// Traversal order selector for [`TernaryTree::traverse`](crate::domain::TernaryTree::traverse).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    Preorder,
    Postorder,
    LevelOrder,
    /// Undefined for ternary trees; requesting it always fails.
    Inorder,
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TraversalOrder::Preorder => "preorder",
            TraversalOrder::Postorder => "postorder",
            TraversalOrder::LevelOrder => "level-order",
            TraversalOrder::Inorder => "inorder",
        };
        write!(f, "{}", name)
    }
}

/// One of the supported traversals, chosen at runtime.
pub enum Traversal<'a, T> {
    Preorder(Preorder<'a, T>),
    Postorder(Postorder<'a, T>),
    LevelOrder(LevelOrder<'a, T>),
}

impl<'a, T> Iterator for Traversal<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Traversal::Preorder(iter) => iter.next(),
            Traversal::Postorder(iter) => iter.next(),
            Traversal::LevelOrder(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Traversal::Preorder(iter) => iter.size_hint(),
            Traversal::Postorder(iter) => iter.size_hint(),
            Traversal::LevelOrder(iter) => iter.size_hint(),
        }
    }
}

impl<'a, T: 'a> TraversalIterator<'a, T> for Traversal<'a, T> {
    fn has_next(&self) -> bool {
        match self {
            Traversal::Preorder(iter) => iter.has_next(),
            Traversal::Postorder(iter) => iter.has_next(),
            Traversal::LevelOrder(iter) => iter.has_next(),
        }
    }
}

impl<'a, T> fmt::Debug for Traversal<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order = match self {
            Traversal::Preorder(_) => TraversalOrder::Preorder,
            Traversal::Postorder(_) => TraversalOrder::Postorder,
            Traversal::LevelOrder(_) => TraversalOrder::LevelOrder,
        };
        f.debug_tuple("Traversal").field(&order).finish()
    }
}
