//! Error types for the friend-graph library.

use thiserror::Error;

use super::PersonId;

/// All errors that can occur in the friend-graph library.
#[derive(Error, Debug)]
pub enum FgError {
    /// A precondition on an argument was violated.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Handle does not refer to a person in this graph.
    #[error("Person {0} not found")]
    PersonNotFound(PersonId),

    /// No person carries the given name.
    #[error("No person named {0:?}")]
    UnknownPerson(String),

    /// Not enough items on the stack.
    #[error("Stack is empty")]
    StackEmpty,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON input.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for friend-graph operations.
pub type FgResult<T> = Result<T, FgError>;
