//! External program execution.

pub mod command;
pub mod editor;

pub use command::{
    display_command, execute, execute_checked, CommandOptions, CommandResult,
};
pub use editor::{refresh_plugins, PLUGIN_REFRESH_ARGS};
