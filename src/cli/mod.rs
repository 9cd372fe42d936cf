//! Command-line interface for mgr.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`operations`] - The operation registry and usage table
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;
pub mod operations;

pub use args::Cli;
pub use commands::{AppContext, Command, CommandDispatcher, CommandResult};
pub use operations::{usage_table, Operation};
