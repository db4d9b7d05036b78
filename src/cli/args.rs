//! CLI argument definitions using clap

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::TraversalOrder;

/// Build ternary trees from expressions like `a(b,c,d)` and walk them
#[derive(Parser, Debug)]
#[command(name = "tritree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the labels of a tree in traversal order
    Traverse {
        /// Tree expression, e.g. "1(2,3,4)"
        expression: String,

        /// Traversal order
        #[arg(short, long, value_enum, env = "TRITREE_ORDER", default_value_t = OrderArg::Preorder)]
        order: OrderArg,
    },

    /// Show node count, height and leaf status of a tree
    Stats {
        /// Tree expression
        expression: String,
    },

    /// Draw a tree
    Show {
        /// Tree expression
        expression: String,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Traversal order as accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderArg {
    Preorder,
    Postorder,
    LevelOrder,
    Inorder,
}

impl From<OrderArg> for TraversalOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Preorder => TraversalOrder::Preorder,
            OrderArg::Postorder => TraversalOrder::Postorder,
            OrderArg::LevelOrder => TraversalOrder::LevelOrder,
            OrderArg::Inorder => TraversalOrder::Inorder,
        }
    }
}
