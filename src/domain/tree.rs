use tracing::{debug, instrument};

use crate::domain::error::{TreeError, TreeResult};
use crate::domain::node::{Link, Slot, TernaryNode};
use crate::domain::traversal::{LevelOrder, Postorder, Preorder, Traversal, TraversalOrder};

/// Source of one subtree when building a tree with [`TernaryTree::set_tree_with`].
///
/// Rust cannot hand the same `&mut` tree to several parameters, so a caller that
/// wants several branches built from one source names the repetition
/// explicitly instead.
#[derive(Debug)]
pub enum Branch<T> {
    /// Leave the slot unset.
    Empty,
    /// Adopt the nodes of a distinct source tree by move.
    Tree(TernaryTree<T>),
    /// Same source as an earlier slot of the same call: receives a deep copy of it.
    SameAs(Slot),
    /// The contents the tree being rebuilt held before the call.
    Current,
}

impl<T> From<TernaryTree<T>> for Branch<T> {
    fn from(tree: TernaryTree<T>) -> Self {
        Branch::Tree(tree)
    }
}

impl<T> From<Option<TernaryTree<T>>> for Branch<T> {
    fn from(tree: Option<TernaryTree<T>>) -> Self {
        tree.map_or(Branch::Empty, Branch::Tree)
    }
}

/// Generic tree in which every node has up to three children.
///
/// The tree exclusively owns its node graph; dropping or clearing it releases
/// every node. Not synchronized: sharing one across threads for mutation needs
/// an external lock.
#[derive(Debug, PartialEq, Eq)]
pub struct TernaryTree<T> {
    root: Link<T>,
}

impl<T> Default for TernaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for TernaryTree<T> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.as_deref().map(|root| Box::new(root.copy())),
        }
    }
}

impl<T> TernaryTree<T> {
    pub fn new() -> Self {
        Self { root: None }
    }

    pub fn with_root(root_data: T) -> Self {
        Self {
            root: Some(Box::new(TernaryNode::new(root_data))),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    #[instrument(level = "debug", skip(self))]
    pub fn clear(&mut self) {
        self.root = None;
    }

    pub fn root_data(&self) -> TreeResult<&T> {
        self.root
            .as_deref()
            .map(TernaryNode::data)
            .ok_or(TreeError::EmptyTree)
    }

    /// Replaces the whole tree with a single node holding `root_data`.
    #[instrument(level = "debug", skip_all)]
    pub fn set_tree(&mut self, root_data: T) {
        self.root = Some(Box::new(TernaryNode::new(root_data)));
    }

    /// Height of the tree; a single node has height 1.
    ///
    /// An empty tree has no height and yields [`TreeError::EmptyTree`], the same
    /// as [`TernaryTree::root_data`].
    #[instrument(level = "trace", skip(self))]
    pub fn height(&self) -> TreeResult<usize> {
        self.root
            .as_deref()
            .map(TernaryNode::height)
            .ok_or(TreeError::EmptyTree)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn node_count(&self) -> usize {
        self.root.as_deref().map_or(0, TernaryNode::node_count)
    }

    pub fn root_node(&self) -> Option<&TernaryNode<T>> {
        self.root.as_deref()
    }

    pub fn root_node_mut(&mut self) -> Option<&mut TernaryNode<T>> {
        self.root.as_deref_mut()
    }

    /// Swaps in a new root node (or empties the tree), returning the old root.
    pub fn set_root_node(&mut self, root: Option<TernaryNode<T>>) -> Option<TernaryNode<T>> {
        std::mem::replace(&mut self.root, root.map(Box::new)).map(|previous| *previous)
    }

    /// Replaces the root payload and keeps the children in place.
    pub fn set_root_data(&mut self, root_data: T) -> TreeResult<T> {
        self.root
            .as_deref_mut()
            .map(|root| root.set_data(root_data))
            .ok_or(TreeError::EmptyTree)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn preorder(&self) -> Preorder<'_, T> {
        Preorder::new(self.root_node())
    }

    #[instrument(level = "trace", skip(self))]
    pub fn postorder(&self) -> Postorder<'_, T> {
        Postorder::new(self.root_node())
    }

    #[instrument(level = "trace", skip(self))]
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder::new(self.root_node())
    }

    /// Always fails: a node with three children has no position "between" its
    /// left and right subtrees, so inorder is undefined for ternary trees.
    #[instrument(level = "trace", skip(self))]
    pub fn inorder(&self) -> TreeResult<Traversal<'_, T>> {
        Err(TreeError::UnsupportedOperation("inorder"))
    }

    pub fn traverse(&self, order: TraversalOrder) -> TreeResult<Traversal<'_, T>> {
        match order {
            TraversalOrder::Preorder => Ok(Traversal::Preorder(self.preorder())),
            TraversalOrder::Postorder => Ok(Traversal::Postorder(self.postorder())),
            TraversalOrder::LevelOrder => Ok(Traversal::LevelOrder(self.level_order())),
            TraversalOrder::Inorder => self.inorder(),
        }
    }
}

impl<T: Clone> TernaryTree<T> {
    pub fn from_branches(
        root_data: T,
        left: Branch<T>,
        middle: Branch<T>,
        right: Branch<T>,
    ) -> TreeResult<Self> {
        let mut tree = Self::new();
        tree.set_tree_with(root_data, left, middle, right)?;
        Ok(tree)
    }

    /// Rebuilds the tree as a fresh root holding `root_data` with the given branches.
    ///
    /// Branches are filled left, then middle, then right. The first use of a source
    /// adopts its nodes by move; every repeated use of that source ([`Branch::SameAs`],
    /// or a second [`Branch::Current`]) attaches a deep copy of what the first use
    /// attached, so no two branches ever share nodes.
    ///
    /// Fails with [`TreeError::InvalidAlias`] when a `SameAs` names its own slot or a
    /// later one; the tree is left untouched in that case.
    #[instrument(level = "debug", skip_all)]
    pub fn set_tree_with(
        &mut self,
        root_data: T,
        left: Branch<T>,
        middle: Branch<T>,
        right: Branch<T>,
    ) -> TreeResult<()> {
        let branches = [left, middle, right];
        for (slot, branch) in Slot::ALL.into_iter().zip(&branches) {
            if let Branch::SameAs(target) = branch {
                if target.index() >= slot.index() {
                    return Err(TreeError::InvalidAlias {
                        slot,
                        target: *target,
                    });
                }
            }
        }

        let mut previous = self.root.take();
        let mut current_slot: Option<Slot> = None;
        let mut root = TernaryNode::new(root_data);

        for (slot, branch) in Slot::ALL.into_iter().zip(branches) {
            let link = match branch {
                Branch::Empty => None,
                Branch::Tree(source) => source.root,
                Branch::SameAs(target) => {
                    debug!(%slot, %target, "copying aliased branch");
                    Self::copy_link(&root, target)
                }
                Branch::Current => match current_slot {
                    None => {
                        current_slot = Some(slot);
                        previous.take()
                    }
                    Some(first) => {
                        debug!(%slot, first = %first, "copying current tree again");
                        Self::copy_link(&root, first)
                    }
                },
            };
            root.replace_link(slot, link);
        }

        debug!(
            left = root.has_child(Slot::Left),
            middle = root.has_child(Slot::Middle),
            right = root.has_child(Slot::Right),
            "tree rebuilt"
        );
        self.root = Some(Box::new(root));
        Ok(())
    }

    fn copy_link(root: &TernaryNode<T>, slot: Slot) -> Link<T> {
        root.child(slot).map(|child| Box::new(child.copy()))
    }
}
