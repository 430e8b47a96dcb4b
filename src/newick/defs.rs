//! Constants and definitions for the Newick parser.

/// Default guess for the number of stack values needed during parsing, when unknown
pub(crate) const DEFAULT_STACK_CAPACITY_GUESS: usize = 32;
