//! Error types for the Newick parser.
//!
//! This module provides [ParsingError] and [ParsingErrorType] for representing
//! and reporting errors that occur while parsing a Newick string.

use crate::parser::stack::EmptyStack;
use std::error::Error;
use std::fmt;

/// Default length of context provided by error from parser
const DEFAULT_CONTEXT_LENGTH: usize = 50;

// =#========================================================================#=
// PARSING ERROR TYPE
// =#========================================================================$=
/// Error types that can occur during parsing.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum ParsingErrorType {
    /// The parser's stack underflowed, see [Underflow] for the cause.
    EmptyStack(Underflow),
    /// All parentheses are closed, but `extra_trees` complete trees remain
    /// at top level besides the root.
    MalformedTree { extra_trees: usize },
}

/// Reasons for running out of stack values.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Underflow {
    /// A `)` has no matching `(`.
    UnmatchedClose,
    /// The input contains no tokens at all.
    EmptyInput,
    /// A `(` is never closed, so its marker is still on the stack at the end.
    UnclosedOpen,
}

// =#========================================================================#=
// PARSING ERROR
// =#========================================================================$=
/// Parsing error with contextual information (position and following input).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsingError {
    kind: ParsingErrorType,
    position: usize,
    context: String,
}

impl ParsingError {
    /// Create a ParsingError from an error type and the position in `text`
    /// where it occurred.
    pub fn at(kind: ParsingErrorType, text: &str, position: usize) -> Self {
        Self {
            kind,
            position,
            context: context_at(text, position, DEFAULT_CONTEXT_LENGTH),
        }
    }

    /// Convenience constructor for [Underflow::UnmatchedClose] at the `)` at `position`
    pub fn unmatched_close(text: &str, position: usize) -> Self {
        Self::at(ParsingErrorType::EmptyStack(Underflow::UnmatchedClose), text, position)
    }

    /// Convenience constructor for [Underflow::EmptyInput]
    pub fn empty_input(text: &str) -> Self {
        Self::at(ParsingErrorType::EmptyStack(Underflow::EmptyInput), text, text.len())
    }

    /// Convenience constructor for [Underflow::UnclosedOpen] at the `(` at `position`
    pub fn unclosed_open(text: &str, position: usize) -> Self {
        Self::at(ParsingErrorType::EmptyStack(Underflow::UnclosedOpen), text, position)
    }

    /// Convenience constructor for [ParsingErrorType::MalformedTree],
    /// reported at the end of `text`
    pub fn malformed_tree(text: &str, extra_trees: usize) -> Self {
        Self::at(ParsingErrorType::MalformedTree { extra_trees }, text, text.len())
    }

    /// Get the error kind
    pub fn kind(&self) -> &ParsingErrorType {
        &self.kind
    }

    /// Get the byte position where the error occurred
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns whether this is a stack underflow ([ParsingErrorType::EmptyStack]).
    pub fn is_empty_stack(&self) -> bool {
        matches!(self.kind, ParsingErrorType::EmptyStack(_))
    }

    /// Returns whether this is residue after the root ([ParsingErrorType::MalformedTree]).
    pub fn is_malformed_tree(&self) -> bool {
        matches!(self.kind, ParsingErrorType::MalformedTree { .. })
    }
}

/// Up to `max_len` bytes of `text` starting at `position`, cut at char boundaries.
fn context_at(text: &str, position: usize, max_len: usize) -> String {
    let Some(rest) = text.get(position..) else {
        return String::new();
    };
    let mut end = rest.len().min(max_len);
    while !rest.is_char_boundary(end) {
        end -= 1;
    }
    rest[..end].to_string()
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Main error message
        match &self.kind {
            ParsingErrorType::EmptyStack(Underflow::UnmatchedClose) => {
                write!(f, "Unbalanced parentheses - ')' without matching '('")?
            }
            ParsingErrorType::EmptyStack(Underflow::EmptyInput) => {
                write!(f, "Empty input - no tree to parse")?
            }
            ParsingErrorType::EmptyStack(Underflow::UnclosedOpen) => {
                write!(f, "Unbalanced parentheses - '(' is never closed")?
            }
            ParsingErrorType::MalformedTree { extra_trees } => write!(
                f,
                "Malformed tree - {extra_trees} trailing top-level tree(s) after the root"
            )?,
        }

        // Additional position information
        write!(f, " at position {}", self.position)?;

        // Additional context if available
        if !self.context.is_empty() {
            write!(f, "\n  Context (next {} bytes): {}", self.context.len(), self.context)?;
        }

        Ok(())
    }
}

impl Error for ParsingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

/// A bare stack underflow, as raised when a `)` pops past the bottom of the
/// stack. Carries neither position nor context; the parser itself maps
/// underflows with [ParsingError::unmatched_close] to keep both.
impl From<EmptyStack> for ParsingError {
    fn from(_: EmptyStack) -> Self {
        Self {
            kind: ParsingErrorType::EmptyStack(Underflow::UnmatchedClose),
            position: 0,
            context: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_is_cut_at_char_boundary() {
        // 'ū' takes two bytes, limit falls in its middle
        assert_eq!(context_at("Tūī", 0, 2), "T");
        assert_eq!(context_at("Tūī", 1, 50), "ūī");
        assert_eq!(context_at("Tūī", 5, 50), "");
        assert_eq!(context_at("Tūī", 99, 50), "");
    }

    #[test]
    fn test_display_names_condition_and_position() {
        let err = ParsingError::unmatched_close(")(", 0);
        let msg = err.to_string();
        assert!(msg.starts_with("Unbalanced parentheses - ')' without matching '('"));
        assert!(msg.contains("at position 0"));
        assert!(msg.contains("Context (next 2 bytes): )("));

        let err = ParsingError::empty_input("");
        assert_eq!(err.to_string(), "Empty input - no tree to parse at position 0");
    }

    #[test]
    fn test_from_empty_stack() {
        let err = ParsingError::from(EmptyStack);
        assert!(err.is_empty_stack());
        assert_eq!(*err.kind(), ParsingErrorType::EmptyStack(Underflow::UnmatchedClose));
        assert_eq!(
            err.to_string(),
            "Unbalanced parentheses - ')' without matching '(' at position 0"
        );
    }

    #[test]
    fn test_malformed_tree_points_past_input() {
        let err = ParsingError::malformed_tree("(A)(B)", 1);
        assert!(err.is_malformed_tree());
        assert_eq!(err.position(), 6);
        assert_eq!(
            err.to_string(),
            "Malformed tree - 1 trailing top-level tree(s) after the root at position 6"
        );
    }
}
