//! Parser for textual tree expressions such as `a(b(_,c,_),_,d)`.
//!
//! A node is a label optionally followed by exactly three comma separated
//! branches in parentheses. An empty branch or a lone `_` is an absent child.

use nom::bytes::complete::take_while1;
use nom::character::complete::{char, multispace0};
use nom::combinator::{all_consuming, cut, map, opt};
use nom::error::{ErrorKind, ParseError as NomParseError};
use nom::sequence::{delimited, preceded, terminated, tuple};
use nom::{IResult, Parser};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::domain::TernaryTree;

/// Label that stands for an absent child.
pub const PLACEHOLDER: &str = "_";

/// Deepest node nesting an expression may contain; the root is level 1.
pub const MAX_NESTING: usize = 256;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid tree expression at position {position}: {message}")]
pub struct ParseError {
    /// Byte offset into the expression
    pub position: usize,
    pub message: String,
}

pub type ParseResult<T> = Result<T, ParseError>;

/// A combinator that takes a parser `inner` and produces a parser that also consumes both leading and
/// trailing whitespace, returning the output of `inner`.
fn ws<'a, F, O, E: NomParseError<&'a str>>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O, E>
where
    F: Parser<&'a str, O, E>,
{
    delimited(multispace0, inner, multispace0)
}

fn label(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !matches!(c, '(' | ')' | ',') && !c.is_whitespace())(input)
}

fn branch(input: &str, depth: usize) -> IResult<&str, TernaryTree<String>> {
    map(ws(opt(|i| subtree(i, depth))), Option::unwrap_or_default)(input)
}

fn children(
    input: &str,
    depth: usize,
) -> IResult<&str, (TernaryTree<String>, TernaryTree<String>, TernaryTree<String>)> {
    preceded(
        preceded(multispace0, char('(')),
        cut(terminated(
            tuple((
                |i| branch(i, depth),
                preceded(char(','), |i| branch(i, depth)),
                preceded(char(','), |i| branch(i, depth)),
            )),
            char(')'),
        )),
    )(input)
}

fn subtree(input: &str, depth: usize) -> IResult<&str, TernaryTree<String>> {
    if depth > MAX_NESTING {
        return Err(nom::Err::Failure(nom::error::Error::new(input, ErrorKind::TooLarge)));
    }
    let (rest, name) = label(input)?;
    if name == PLACEHOLDER {
        return Ok((rest, TernaryTree::new()));
    }

    let (rest, branches) = opt(|i| children(i, depth + 1))(rest)?;
    let tree = match branches {
        None => TernaryTree::with_root(name.to_string()),
        Some((left, middle, right)) => {
            TernaryTree::from_branches(name.to_string(), left.into(), middle.into(), right.into())
                .map_err(|_| nom::Err::Failure(nom::error::Error::new(input, ErrorKind::Verify)))?
        }
    };
    Ok((rest, tree))
}

/// Parses a whole expression into a tree. The expression `_` is the empty tree.
#[instrument(level = "debug")]
pub fn parse_tree(expression: &str) -> ParseResult<TernaryTree<String>> {
    match all_consuming(ws(|i| subtree(i, 1)))(expression) {
        Ok((_, tree)) => {
            debug!(nodes = tree.node_count(), "parsed tree expression");
            Ok(tree)
        }
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            Err(to_parse_error(expression, e.input, e.code))
        }
        Err(nom::Err::Incomplete(_)) => Err(ParseError {
            position: expression.len(),
            message: "unexpected end of input".to_string(),
        }),
    }
}

fn to_parse_error(expression: &str, remaining: &str, code: ErrorKind) -> ParseError {
    let position = expression.len() - remaining.len();
    let message = match remaining.chars().next() {
        None => "unexpected end of input".to_string(),
        Some(c) => match code {
            ErrorKind::Char => format!("unexpected '{}', expected ',', '(' or ')'", c),
            ErrorKind::Eof => format!("unexpected trailing input starting with '{}'", c),
            ErrorKind::TakeWhile1 => format!("expected a label, found '{}'", c),
            ErrorKind::TooLarge => format!("nesting deeper than {} levels", MAX_NESTING),
            other => format!("unexpected '{}' ({:?})", c, other),
        },
    };
    ParseError { position, message }
}
