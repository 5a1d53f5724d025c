//! CLI module - command-line interface
//!
//! Contains the REPL and input classification.

pub mod commands;
pub mod repl;

pub use repl::Repl;
