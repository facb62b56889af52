//! Command implementations behind the `fgraph` binary.

pub mod commands;
