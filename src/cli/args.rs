//! CLI argument definitions.
//!
//! The operation is a plain positional list rather than a clap subcommand:
//! the dispatcher, not clap, decides what zero or several names mean.

use clap::Parser;
use std::path::PathBuf;

/// mgr - workstation bootstrap and maintenance.
#[derive(Debug, Parser)]
#[command(name = "mgr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Operation to run (exactly one; run without arguments to list them)
    #[arg(value_name = "OPERATION")]
    pub operations: Vec<String>,

    /// Install this version instead of the latest release (zig, kotlin-lsp)
    #[arg(long, value_name = "VERSION")]
    pub pin: Option<String>,

    /// Reinstall tools that are already present (langup)
    #[arg(short, long)]
    pub force: bool,

    /// Path to settings file (overrides ~/.dotmgr/config.yml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Dotfiles directory holding the canonical config files
    #[arg(long, env = "DOTFILES_DIR", value_name = "DIR")]
    pub dotfiles: Option<PathBuf>,

    /// Directory toolchains are installed into
    #[arg(long, env = "MGR_TOOLS_DIR", value_name = "DIR")]
    pub tools_dir: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Only show errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
