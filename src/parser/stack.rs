//! LIFO stack used as working memory of the shift-reduce parser.
//!
//! Unlike [Vec::pop], which signals an empty stack with [None], the
//! [Stack] reports underflow as an explicit [EmptyStack] error, so that the
//! parser can propagate it with `?` at every pop.

use std::error::Error;
use std::fmt;

// =#========================================================================#=
// EMPTY STACK
// =#========================================================================$=
/// Error returned by [Stack::pop] and [Stack::top] when the stack holds no elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyStack;

impl fmt::Display for EmptyStack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Stack is empty")
    }
}

impl Error for EmptyStack {}

// =#========================================================================#=
// STACK
// =#========================================================================$=
/// Unbounded last-in-first-out container.
///
/// # Example
/// ```
/// use stackwick::parser::stack::{EmptyStack, Stack};
///
/// let mut stack = Stack::new();
/// stack.push("Kea");
/// stack.push("Kaka");
/// assert_eq!(stack.top(), Ok(&"Kaka"));
/// assert_eq!(stack.pop(), Ok("Kaka"));
/// assert_eq!(stack.pop(), Ok("Kea"));
/// assert_eq!(stack.pop(), Err(EmptyStack));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates a new, empty [Stack].
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates a new, empty [Stack] with room for `capacity` elements
    /// before it reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Pushes `value` on top of the stack.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Removes and returns the top value.
    ///
    /// # Errors
    /// [EmptyStack] if the stack has no elements.
    #[inline]
    pub fn pop(&mut self) -> Result<T, EmptyStack> {
        self.items.pop().ok_or(EmptyStack)
    }

    /// Returns a reference to the top value without removing it.
    ///
    /// # Errors
    /// [EmptyStack] if the stack has no elements.
    #[inline]
    pub fn top(&self) -> Result<&T, EmptyStack> {
        self.items.last().ok_or(EmptyStack)
    }

    /// Returns whether the stack has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of elements on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
