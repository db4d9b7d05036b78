//! Domain layer: the ternary tree, its nodes and traversals
//!
//! This layer is independent of external concerns (no I/O, no CLI, no parsing).

pub mod error;
pub mod node;
pub mod traversal;
pub mod tree;

pub use error::{TreeError, TreeResult};
pub use node::{Slot, TernaryNode};
pub use traversal::{LevelOrder, Postorder, Preorder, Traversal, TraversalIterator, TraversalOrder};
pub use tree::{Branch, TernaryTree};
