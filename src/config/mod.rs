//! Settings loading and path resolution.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Home, dotfiles and tools directory resolution in [`paths`]
//!
//! # Example
//!
//! ```
//! use dotmgr::config::{load_settings_file, Paths};
//! use tempfile::TempDir;
//! use std::fs;
//! use std::path::PathBuf;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("config.yml");
//! fs::write(&path, "tools_dir: ~/tools").unwrap();
//!
//! let settings = load_settings_file(&path).unwrap();
//! let paths = Paths::resolve_with_home(PathBuf::from("/home/dev"), &settings, None, None);
//! assert_eq!(paths.tools_dir, PathBuf::from("/home/dev/tools"));
//! ```
//!
//! # Settings File Location
//!
//! `--config <PATH>` if given, otherwise `~/.dotmgr/config.yml` when it
//! exists. A missing default file is not an error.

pub mod loader;
pub mod paths;
pub mod schema;

pub use loader::{default_settings_path, load_settings, load_settings_file};
pub use paths::{expand_home, Paths, DOTFILES_ENV, TOOLS_DIR_ENV};
pub use schema::{Endpoints, LinkEntry, Settings};
