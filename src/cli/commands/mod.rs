//! CLI command implementations.
//!
//! Each operation is a [`Command`]; [`CommandDispatcher`] maps the single
//! operation name on the command line to one of them.

pub mod dispatcher;
pub mod install;
pub mod link;
pub mod plugins;

pub use dispatcher::{AppContext, Command, CommandDispatcher, CommandResult};
