//! Core data types for the friend-graph library.

pub mod error;
pub mod person;

pub use error::{FgError, FgResult};
pub use person::{Person, PersonId};
