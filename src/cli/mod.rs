//! Command-line interface.
//!
//! Argument parsing, command execution and output formatting are split
//! into submodules so each is testable without a terminal or process
//! spawn.

pub mod args;
pub mod commands;
pub mod output;

pub use args::{Args, Command};
