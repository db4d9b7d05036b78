use std::fmt;

/// One of the three fixed child positions of a [`TernaryNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    Left,
    Middle,
    Right,
}

impl Slot {
    /// All slots in traversal order.
    pub const ALL: [Slot; 3] = [Slot::Left, Slot::Middle, Slot::Right];

    pub fn index(self) -> usize {
        match self {
            Slot::Left => 0,
            Slot::Middle => 1,
            Slot::Right => 2,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Slot::Left => "left",
            Slot::Middle => "middle",
            Slot::Right => "right",
        };
        write!(f, "{}", name)
    }
}

pub(crate) type Link<T> = Option<Box<TernaryNode<T>>>;

/// Tree vertex holding a payload and up to three exclusively owned children.
///
/// A node and everything reachable from it always form a strict tree: a child
/// is owned by exactly one slot of exactly one parent.
#[derive(Debug, PartialEq, Eq)]
pub struct TernaryNode<T> {
    data: T,
    children: [Link<T>; 3],
}

impl<T> TernaryNode<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            children: [None, None, None],
        }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Replaces the payload, returning the previous one.
    pub fn set_data(&mut self, data: T) -> T {
        std::mem::replace(&mut self.data, data)
    }

    pub fn child(&self, slot: Slot) -> Option<&TernaryNode<T>> {
        self.children[slot.index()].as_deref()
    }

    pub fn child_mut(&mut self, slot: Slot) -> Option<&mut TernaryNode<T>> {
        self.children[slot.index()].as_deref_mut()
    }

    /// Attaches `child` at `slot` (or clears the slot with `None`) and hands back
    /// whatever subtree was attached there before.
    pub fn set_child(
        &mut self,
        slot: Slot,
        child: Option<TernaryNode<T>>,
    ) -> Option<TernaryNode<T>> {
        self.replace_link(slot, child.map(Box::new)).map(|previous| *previous)
    }

    pub(crate) fn replace_link(&mut self, slot: Slot, link: Link<T>) -> Link<T> {
        std::mem::replace(&mut self.children[slot.index()], link)
    }

    pub fn has_child(&self, slot: Slot) -> bool {
        self.children[slot.index()].is_some()
    }

    /// Present children in slot order (left, middle, right).
    pub fn children(&self) -> impl DoubleEndedIterator<Item = &TernaryNode<T>> {
        self.children.iter().filter_map(|child| child.as_deref())
    }

    /// Every slot paired with its child, absent ones included.
    pub fn slots(&self) -> impl Iterator<Item = (Slot, Option<&TernaryNode<T>>)> {
        Slot::ALL.into_iter().map(move |slot| (slot, self.child(slot)))
    }

    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }

    /// Number of nodes in the subtree rooted here, this node included.
    pub fn node_count(&self) -> usize {
        1 + self.children().map(TernaryNode::node_count).sum::<usize>()
    }

    /// Height of the subtree rooted here; a leaf has height 1.
    pub fn height(&self) -> usize {
        1 + self.children().map(TernaryNode::height).max().unwrap_or(0)
    }
}

impl<T: Clone> TernaryNode<T> {
    /// Deep copy of the subtree rooted here. The copy shares no nodes with `self`.
    pub fn copy(&self) -> TernaryNode<T> {
        let mut new_root = TernaryNode::new(self.data.clone());
        for (slot, child) in self.slots() {
            if let Some(child) = child {
                new_root.replace_link(slot, Some(Box::new(child.copy())));
            }
        }
        new_root
    }
}

// Detach descendants onto a heap stack so dropping a deep chain never recurses
impl<T> Drop for TernaryNode<T> {
    fn drop(&mut self) {
        let mut pending: Vec<Box<TernaryNode<T>>> =
            self.children.iter_mut().filter_map(Option::take).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}

impl<T: Clone> Clone for TernaryNode<T> {
    fn clone(&self) -> Self {
        self.copy()
    }
}
