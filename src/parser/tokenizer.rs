//! Lexical scanner turning raw text into [Token]s.
//!
//! This module provides [Tokenizer], a character-by-character scanner over a
//! string slice with support for peeking and consuming, and the convenience
//! function [tokenize]. Only three kinds of tokens exist:
//! - `(` becomes [Token::Open]
//! - `)` becomes [Token::Close]
//! - a maximal run of word characters becomes [Token::Name]
//!
//! Every other character (commas, whitespace, colons, semicolons, any other
//! punctuation) is skipped without producing a token. Siblings are separated
//! by parenthesis nesting alone, so commas carry no information.
//!
//! Word characters are Unicode alphanumerics and `_`. Digits are word
//! characters, so a branch length like `:0.5` results in the names `0` and `5`.

use std::iter::FusedIterator;
use std::str::CharIndices;

// =#========================================================================#=
// TOKEN
// =#========================================================================$=
/// Minimal lexical unit of a Newick-style string.
///
/// A [Token::Name] borrows its text from the scanned input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Literal `(`
    Open,
    /// Literal `)`
    Close,
    /// One or more contiguous word characters
    Name(&'a str),
}

/// Returns whether `c` is a word character (alphanumeric or `_`).
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Returns whether `name` is non-empty and consists of word characters only,
/// i.e. whether the [Tokenizer] would read it back as a single [Token::Name].
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_word_char)
}

/// Scans `text` into its ordered sequence of [Token]s.
///
/// No validation of parenthesis balance happens here.
///
/// # Example
/// ```
/// use stackwick::parser::tokenizer::{Token, tokenize};
///
/// let tokens = tokenize("(A, (B, C))");
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Open,
///         Token::Name("A"),
///         Token::Open,
///         Token::Name("B"),
///         Token::Name("C"),
///         Token::Close,
///         Token::Close,
///     ]
/// );
/// assert!(tokenize("").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    Tokenizer::new(text).map(|(_, token)| token).collect()
}

// =#========================================================================#=
// TOKENIZER
// =#========================================================================$=
/// A character-by-character scanner yielding [Token]s with their byte position.
///
/// Iterating a [Tokenizer] yields `(position, token)` pairs, where `position`
/// is the byte offset of the first character of the token in the input.
///
/// # Example
/// ```
/// use stackwick::parser::tokenizer::{Token, Tokenizer};
///
/// let mut tokenizer = Tokenizer::new("(Kiwi, Weka)");
/// assert_eq!(tokenizer.next(), Some((0, Token::Open)));
/// assert_eq!(tokenizer.next(), Some((1, Token::Name("Kiwi"))));
/// assert_eq!(tokenizer.next(), Some((7, Token::Name("Weka"))));
/// assert_eq!(tokenizer.next(), Some((11, Token::Close)));
/// assert_eq!(tokenizer.next(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    text: &'a str,
    chars: CharIndices<'a>,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new [Tokenizer] positioned at the start of `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.char_indices(),
        }
    }

    /// Byte offset of the next unconsumed character
    /// (length of the input once exhausted).
    #[inline]
    pub fn offset(&self) -> usize {
        self.text.len() - self.chars.as_str().len()
    }

    /// Returns whether all characters have been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.chars.as_str().is_empty()
    }

    /// Peeks at the next character without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.chars.as_str().chars().next()
    }

    /// Consumes and returns the next character.
    #[inline]
    fn next_char(&mut self) -> Option<char> {
        self.chars.next().map(|(_, c)| c)
    }

    /// Skips (consumes) all characters that cannot start a token.
    pub fn skip_ignored(&mut self) {
        while let Some(c) = self.peek() {
            if c == '(' || c == ')' || is_word_char(c) {
                break;
            }
            self.next_char();
        }
    }

    /// Consumes a maximal run of word characters and returns it as a slice.
    ///
    /// Returns an empty slice if the next character is not a word character.
    fn consume_name(&mut self) -> &'a str {
        let text = self.text;
        let start = self.offset();
        while self.peek().is_some_and(is_word_char) {
            self.next_char();
        }
        &text[start..self.offset()]
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = (usize, Token<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_ignored();
        let position = self.offset();

        match self.peek()? {
            '(' => {
                self.next_char();
                Some((position, Token::Open))
            }
            ')' => {
                self.next_char();
                Some((position, Token::Close))
            }
            _ => Some((position, Token::Name(self.consume_name()))),
        }
    }
}

impl FusedIterator for Tokenizer<'_> {}
