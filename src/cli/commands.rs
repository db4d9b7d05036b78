use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Generator};
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::domain::{TernaryTree, TraversalOrder};
use crate::parser::parse_tree;
use crate::render::TreeRender;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Traverse { expression, order }) => {
            output::info(&_traverse(expression, (*order).into())?);
            Ok(())
        }
        Some(Commands::Stats { expression }) => {
            for (label, value) in _stats(expression)? {
                output::action(label, &value);
            }
            Ok(())
        }
        Some(Commands::Show { expression }) => {
            // termtree output already ends with a newline
            print!("{}", _show(expression)?);
            Ok(())
        }
        Some(Commands::Completion { shell }) => {
            print_completions(*shell, &mut Cli::command());
            Ok(())
        }
        None => Err(CliError::Usage("no command given, see --help".to_string())),
    }
}

fn print_completions<G: Generator>(gen: G, cmd: &mut clap::Command) {
    let name = cmd.get_name().to_string();
    generate(gen, cmd, name, &mut io::stdout());
}

/// Labels of the tree in `order`, separated by single spaces.
#[instrument]
pub fn _traverse(expression: &str, order: TraversalOrder) -> CliResult<String> {
    let tree = parse_tree(expression)?;
    let sequence = tree.traverse(order)?.join(" ");
    debug!(%order, visited = tree.node_count(), "traversal done");
    Ok(sequence)
}

#[instrument]
pub fn _stats(expression: &str) -> CliResult<Vec<(&'static str, String)>> {
    let tree = parse_tree(expression)?;
    let height = tree.height()?;
    let leaf = tree.root_node().is_some_and(|root| root.is_leaf());
    Ok(vec![
        ("nodes", tree.node_count().to_string()),
        ("height", height.to_string()),
        ("leaf", leaf.to_string()),
    ])
}

#[instrument]
pub fn _show(expression: &str) -> CliResult<String> {
    let tree: TernaryTree<String> = parse_tree(expression)?;
    Ok(tree.to_tree_string().to_string())
}
