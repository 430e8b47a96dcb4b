//! Lexical scanning and parser infrastructure.
//!
//! This module provides the [tokenizer] turning text into tokens, the
//! [stack] used as working memory by the
//! [NewickParser](crate::newick::NewickParser), and error handling.

pub mod parsing_error;
pub mod stack;
pub mod tokenizer;

pub use parsing_error::{ParsingError, ParsingErrorType, Underflow};
pub use stack::{EmptyStack, Stack};
pub use tokenizer::{Token, Tokenizer, tokenize};
