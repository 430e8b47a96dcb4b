//! Shift-reduce parsing of Newick strings.
//!
//! This module provides the [NewickParser] struct. Parsing is a single
//! left-to-right pass over the [Token]s of the input, driving a [Stack]
//! instead of recursing, so nesting depth is only bounded by memory.

use crate::model::{Leaf, Node, Tree};
use crate::newick::defs::DEFAULT_STACK_CAPACITY_GUESS;
use crate::parser::parsing_error::ParsingError;
use crate::parser::stack::Stack;
use crate::parser::tokenizer::{Token, Tokenizer};
use tracing::{debug, trace};

// =#========================================================================#=
// NEWICK PARSER
// =#========================================================================$=
/// Parser (configuration) for simplified Newick strings.
///
/// The parser holds configuration only. Every call to
/// [parse_str](Self::parse_str) works on its own fresh stack, so a parser
/// can be shared by reference between threads and reused for any number
/// of strings.
///
/// # Configuration
/// * [`with_stack_capacity(capacity)`](Self::with_stack_capacity)
///     - Number of stack values to pre-allocate per parse, e.g. the number
///       of tokens of the expected input. Defaults to a small guess.
///
/// # Example
/// ```
/// use stackwick::model::Tree;
/// use stackwick::newick::NewickParser;
///
/// let parser = NewickParser::new().with_stack_capacity(8);
/// let tree = parser.parse_str("(Kea, (Kaka, Kakapo))").unwrap();
/// assert_eq!(
///     tree,
///     Tree::node(vec![
///         Tree::leaf("Kea"),
///         Tree::node(vec![Tree::leaf("Kaka"), Tree::leaf("Kakapo")]),
///     ])
/// );
/// ```
#[derive(Debug, Clone)]
pub struct NewickParser {
    stack_capacity: usize,
}

// ============================================================================
// Construction & Configuration (pub)
// ============================================================================
impl NewickParser {
    /// Creates a new [NewickParser] with default settings.
    pub fn new() -> Self {
        Self {
            stack_capacity: DEFAULT_STACK_CAPACITY_GUESS,
        }
    }

    /// Sets the number of stack values to pre-allocate for each parse.
    ///
    /// This allows pre-allocation for better performance on large inputs.
    pub fn with_stack_capacity(mut self, stack_capacity: usize) -> Self {
        self.stack_capacity = stack_capacity;
        self
    }

    /// Number of stack values pre-allocated for each parse
    pub fn stack_capacity(&self) -> usize {
        self.stack_capacity
    }
}

impl Default for NewickParser {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// API Parsing (pub)
// ============================================================================
impl NewickParser {
    /// Parses a single tree from `text`.
    ///
    /// # Arguments
    /// * `text` - Newick-style string; anything but parentheses and
    ///   word characters is ignored (see [tokenizer](crate::parser::tokenizer))
    ///
    /// # Returns
    /// * `Ok(Tree)` - The parsed tree
    /// * `Err(ParsingError)` - With kind
    ///   [EmptyStack](crate::parser::ParsingErrorType::EmptyStack) if the
    ///   input is empty or any parenthesis is unbalanced, or with kind
    ///   [MalformedTree](crate::parser::ParsingErrorType::MalformedTree)
    ///   if parentheses balance but more than one top-level tree remains
    pub fn parse_str(&self, text: &str) -> Result<Tree, ParsingError> {
        let result = self.shift_reduce(text);
        if let Err(err) = &result {
            debug!(error = %err, "parse failed");
        }
        result
    }

    fn shift_reduce(&self, text: &str) -> Result<Tree, ParsingError> {
        let mut state = ShiftReduce::new(text, self.stack_capacity);

        for (position, token) in Tokenizer::new(text) {
            match token {
                Token::Open => state.shift_open(position),
                Token::Name(name) => state.shift_leaf(name),
                Token::Close => state.reduce(position)?,
            }
        }

        state.finish()
    }
}

// =#========================================================================#=
// SHIFT-REDUCE STATE
// =#========================================================================$=
/// Value on the parser stack: either the marker of an unclosed `(`
/// or a completed (sub)tree.
#[derive(Debug)]
enum StackValue {
    /// `(` at the given byte position
    Open(usize),
    Tree(Tree),
}

/// Working memory of a single parse, dropped when the parse returns.
struct ShiftReduce<'a> {
    text: &'a str,
    stack: Stack<StackValue>,
    num_tokens: usize,
    num_leaves: usize,
    open_depth: usize,
    max_depth: usize,
}

impl<'a> ShiftReduce<'a> {
    fn new(text: &'a str, stack_capacity: usize) -> Self {
        Self {
            text,
            stack: Stack::with_capacity(stack_capacity),
            num_tokens: 0,
            num_leaves: 0,
            open_depth: 0,
            max_depth: 0,
        }
    }

    /// Shift: pushes the marker of a `(`.
    fn shift_open(&mut self, position: usize) {
        self.num_tokens += 1;
        self.open_depth += 1;
        self.max_depth = self.max_depth.max(self.open_depth);
        self.stack.push(StackValue::Open(position));
    }

    /// Shift: wraps a name into a [Leaf] and pushes it.
    fn shift_leaf(&mut self, name: &str) {
        self.num_tokens += 1;
        self.num_leaves += 1;
        self.stack.push(StackValue::Tree(Tree::Leaf(Leaf::new(name))));
    }

    /// Reduce: pops trees until the matching `(` marker and pushes a
    /// [Node] with these trees as children.
    ///
    /// # Errors
    /// [Underflow::UnmatchedClose](crate::parser::Underflow::UnmatchedClose)
    /// if the stack runs empty before a marker is found.
    fn reduce(&mut self, position: usize) -> Result<(), ParsingError> {
        self.num_tokens += 1;

        // Pop order is right to left
        let mut children = Vec::new();
        loop {
            let value = self
                .stack
                .pop()
                .map_err(|_| ParsingError::unmatched_close(self.text, position))?;
            match value {
                StackValue::Open(_) => break,
                StackValue::Tree(tree) => children.push(tree),
            }
        }
        children.reverse();

        trace!(position, num_children = children.len(), "reduce");
        self.open_depth -= 1;
        self.stack.push(StackValue::Tree(Tree::Node(Node::new(children))));
        Ok(())
    }

    /// Pops the root and checks that nothing remains on the stack.
    ///
    /// # Errors
    /// [Underflow::UnclosedOpen](crate::parser::Underflow::UnclosedOpen) at
    /// the outermost `(` if any marker is left, wherever it sits on the stack.
    /// Otherwise [MalformedTree](crate::parser::ParsingErrorType::MalformedTree)
    /// if complete trees remain below the root.
    fn finish(mut self) -> Result<Tree, ParsingError> {
        let top = self
            .stack
            .pop()
            .map_err(|_| ParsingError::empty_input(self.text))?;

        let mut extra_trees = 0;
        let mut outermost_open = None;
        while let Ok(value) = self.stack.pop() {
            match value {
                // Keeps overwriting, so the bottom-most marker wins
                StackValue::Open(position) => outermost_open = Some(position),
                StackValue::Tree(_) => extra_trees += 1,
            }
        }

        match (top, outermost_open) {
            (_, Some(position)) | (StackValue::Open(position), None) => {
                Err(ParsingError::unclosed_open(self.text, position))
            }
            (StackValue::Tree(root), None) if extra_trees == 0 => {
                debug!(
                    num_tokens = self.num_tokens,
                    num_leaves = self.num_leaves,
                    depth = self.max_depth,
                    "parsed tree"
                );
                Ok(root)
            }
            (StackValue::Tree(_), None) => Err(ParsingError::malformed_tree(self.text, extra_trees)),
        }
    }
}
