//! Stackwick is a library to parse trees from simplified Newick strings
//! and to write them back.
//!
//! Core functionality provided:
//! - Tokenizer: Scans text into `(`, `)`, and name tokens, ignoring
//!   everything else. See [crate::parser::tokenizer].
//! - Parser: A single-pass shift-reduce parser working on an explicit
//!   [Stack](crate::parser::Stack) instead of recursion, so deeply nested
//!   input cannot exhaust the call stack. See [crate::newick::NewickParser].
//! - Tree model: [Tree] is either a [Leaf](model::Leaf) with a name or a
//!   [Node](model::Node) with an ordered list of children.
//!   See [crate::model].
//! - Writer: Canonical Newick output, e.g. `(A,(B,C))`, which parses back
//!   to an equal tree.
//!
//! Limitations:
//! - No branch lengths, quoted labels, comments, or annotations
//! - Exactly one tree per string, no terminating semicolon needed
//!
//! Parsing keeps no state between calls, so [parse] can be called
//! concurrently from any number of threads.
//!
//! # Usage patterns
//! 1. [parse] and [serialize] provide quick access with default settings.
//! 2. Configure a [NewickParser](crate::newick::NewickParser) for control
//!    over pre-allocation.
//!
//! ## Example
//!
//! ```
//! use stackwick::model::Tree;
//! use stackwick::{parse, serialize};
//!
//! let tree = parse("(A, (B, C))").unwrap();
//! assert_eq!(
//!     tree,
//!     Tree::node(vec![
//!         Tree::leaf("A"),
//!         Tree::node(vec![Tree::leaf("B"), Tree::leaf("C")]),
//!     ])
//! );
//! assert_eq!(serialize(&tree), "(A,(B,C))");
//! ```
//!
//! Failures are reported as [ParsingError]:
//!
//! ```
//! use stackwick::parse;
//! use stackwick::parser::{ParsingErrorType, Underflow};
//!
//! let err = parse(")(").unwrap_err();
//! assert_eq!(*err.kind(), ParsingErrorType::EmptyStack(Underflow::UnmatchedClose));
//! ```

pub mod model;
pub mod newick;
pub mod parser;

use crate::model::Tree;
use crate::parser::ParsingError;

// ============================================================================
// Quick API
// ============================================================================
/// Parses a Newick string using default settings, returning a [Tree].
///
/// See [`newick::parse_str`] for full documentation.
pub fn parse<S: AsRef<str>>(text: S) -> Result<Tree, ParsingError> {
    newick::parse_str(text)
}

/// Writes a [Tree] as canonical Newick string.
///
/// See [`newick::to_newick`] for full documentation.
pub fn serialize(tree: &Tree) -> String {
    newick::to_newick(tree)
}
