//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::node::Slot;

/// Errors raised by tree queries, construction and traversal.
///
/// None of these are transient: each one marks a contract the caller broke or a
/// capability the tree does not have.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("tree is empty")]
    EmptyTree,

    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    #[error("no more elements in traversal")]
    NoSuchElement,

    #[error("{slot} branch cannot alias the {target} branch: only earlier branches can be aliased")]
    InvalidAlias { slot: Slot, target: Slot },
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
