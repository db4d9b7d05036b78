//! Generic ternary tree with preorder, postorder and level-order traversals.
//!
//! ```
//! use tritree::domain::{Branch, Slot, TernaryTree};
//!
//! let tree = TernaryTree::from_branches(
//!     1,
//!     TernaryTree::with_root(2).into(),
//!     Branch::SameAs(Slot::Left),
//!     TernaryTree::with_root(4).into(),
//! )
//! .unwrap();
//!
//! assert_eq!(tree.node_count(), 4);
//! assert_eq!(tree.height(), Ok(2));
//! assert_eq!(tree.preorder().copied().collect::<Vec<_>>(), vec![1, 2, 2, 4]);
//! assert_eq!(tree.postorder().copied().collect::<Vec<_>>(), vec![2, 2, 4, 1]);
//! assert!(tree.inorder().is_err());
//! ```

pub mod cli;
pub mod domain;
pub mod exitcode;
pub mod parser;
pub mod render;
pub mod util;

pub use domain::{
    Branch, Slot, TernaryNode, TernaryTree, Traversal, TraversalIterator, TraversalOrder,
    TreeError, TreeResult,
};
