//! dotmgr - dotfiles and developer toolchain maintenance.
//!
//! The `mgr` binary runs one named operation per invocation: link config
//! files out of a dotfiles directory, refresh editor plugins, or download
//! and unpack toolchains such as zig and kotlin-language-server.
//!
//! # Modules
//!
//! - [`cli`] - Argument parsing, the operation registry and commands
//! - [`config`] - Settings file loading and path resolution
//! - [`error`] - Error types and result aliases
//! - [`fetch`] - HTTP downloads and release metadata
//! - [`install`] - Tool resolution, archive extraction and installation
//! - [`links`] - Config symlink maintenance
//! - [`platform`] - Host platform detection
//! - [`shell`] - External program execution
//! - [`ui`] - Spinners and terminal output
//!
//! # Example
//!
//! ```
//! use dotmgr::install::{Tool, VersionRequest};
//! use dotmgr::config::Endpoints;
//! use dotmgr::platform::PlatformKey;
//!
//! let url = Tool::Zig.pinned_url("0.14.1", PlatformKey::LinuxX86_64, &Endpoints::default());
//! assert_eq!(url, "https://ziglang.org/download/0.14.1/zig-x86_64-linux-0.14.1.tar.xz");
//! assert_eq!(VersionRequest::parse("master"), VersionRequest::Latest);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod install;
pub mod links;
pub mod platform;
pub mod shell;
pub mod ui;

pub use error::{MgrError, Result};
