//! Newick-style parser and writer for trees.
//!
//! This module provides [NewickParser] to parse simplified Newick strings
//! into a [Tree], and [to_newick] to write a [Tree] back as a string.
//!
//! # Quick API
//! For simple use cases with default settings:
//! * [`parse_str`] - parses a single string, returns a [Tree]
//! * [`to_newick`] - writes a [Tree] in canonical form
//!
//! # Format
//! The accepted notation has the following simple grammar:
//! * `tree ::= leaf | node`
//! * `node ::= '(' tree* ')'`
//! * `leaf ::= word_char+`
//!
//! Furthermore:
//! * Word characters are Unicode alphanumerics and `_`
//! * All other characters (commas, whitespace, `:`, `;`, ...) are ignored,
//!   so siblings are separated by nesting alone and `A:0.5` reads as
//!   the three leaves `A`, `0`, and `5`
//! * `()` is a node without children
//! * Exactly one top-level tree is allowed
//!
//! Not supported: branch lengths, quoted labels, comments, annotations.
//!
//! Written trees use `,` between siblings and no whitespace, e.g. `(A,(B,C))`.

mod defs;
pub mod parser;
pub mod writer;

pub use parser::NewickParser;
pub use writer::{to_newick, write_newick};

use crate::model::Tree;
use crate::parser::ParsingError;

// ============================================================================
// QUICK PARSING API (pub)
// ============================================================================
/// Parses a single Newick string to obtain a [Tree].
///
/// This is a convenience function for quick parsing of a single Newick string
/// using default settings and thus not requiring configuration of a parser.
///
/// # Arguments
/// * `newick` - The Newick-style string to parse
///
/// # Returns
/// * [Tree] - Tree parsed from the string
/// * [ParsingError] - If parentheses are unbalanced, the input is empty,
///   or more than one top-level tree is given
///
/// # Example
/// ```
/// use stackwick::newick::parse_str;
///
/// let tree = parse_str("(Fratercula_cirrhata, (Fratercula_arctica, Fratercula_corniculata))")?;
/// assert_eq!(tree.num_leaves(), 3);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_str<S: AsRef<str>>(newick: S) -> Result<Tree, ParsingError> {
    NewickParser::new().parse_str(newick.as_ref())
}
