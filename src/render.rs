/*
Rendering goes through termtree, which only knows ordered lists of leaves.
A ternary node has fixed slot positions, so absent slots of an inner node are
drawn as a placeholder to keep left/middle/right distinguishable.
 */
use std::fmt::Display;

use termtree::Tree;
use tracing::instrument;

use crate::domain::{TernaryNode, TernaryTree};

/// Marker drawn for an absent slot of a non-leaf node.
pub const ABSENT: &str = "·";

pub trait TreeRender {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<T: Display> TreeRender for TernaryNode<T> {
    fn to_tree_string(&self) -> Tree<String> {
        let root = Tree::new(self.data().to_string());
        if self.is_leaf() {
            return root;
        }

        let leaves: Vec<_> = self
            .slots()
            .map(|(_, child)| match child {
                Some(child) => child.to_tree_string(),
                None => Tree::new(ABSENT.to_string()),
            })
            .collect();

        root.with_leaves(leaves)
    }
}

impl<T: Display> TreeRender for TernaryTree<T> {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        match self.root_node() {
            Some(root) => root.to_tree_string(),
            None => Tree::new("Empty tree".to_string()),
        }
    }
}
