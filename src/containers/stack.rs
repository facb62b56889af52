//! LIFO stack.

use std::fmt;

use serde::Serialize;

use crate::types::{FgError, FgResult};

/// Last-in, first-out stack backed by a `Vec`. The end of the vec is the top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create a stack from existing items. The last item is the top.
    pub fn from_vec(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Push an item onto the top.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the top item.
    pub fn pop(&mut self) -> FgResult<T> {
        self.items.pop().ok_or(FgError::StackEmpty)
    }

    /// The top item, if any.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Is the stack empty?
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Pop the top two items, top first.
    ///
    /// Fails without touching the stack when it holds fewer than two items.
    pub fn top_two(&mut self) -> FgResult<[T; 2]> {
        if self.items.len() < 2 {
            return Err(FgError::StackEmpty);
        }
        let first = self.pop()?;
        let second = self.pop()?;
        Ok([first, second])
    }

    /// Iterator that pops items until the stack is empty.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain { stack: self }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.peek() {
            None => write!(f, "<Stack (empty)>"),
            Some(top) => write!(f, "<Stack tail={} length={}>", top, self.len()),
        }
    }
}

/// Popping iterator returned by [`Stack::drain`].
pub struct Drain<'a, T> {
    stack: &'a mut Stack<T>,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.stack.items.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.stack.len();
        (len, Some(len))
    }
}
