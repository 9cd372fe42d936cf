//! Config symlinks from the dotfiles directory into their expected homes.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::{LinkEntry, Paths};

/// One symlink to maintain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSpec {
    /// File inside the dotfiles directory.
    pub source: PathBuf,
    /// Where the config is expected to live.
    pub dest: PathBuf,
}

impl LinkSpec {
    /// Resolve a settings entry against the dotfiles and home directories.
    pub fn from_entry(entry: &LinkEntry, paths: &Paths) -> Self {
        Self {
            source: paths.dotfiles_dir.join(&entry.source),
            dest: paths.home.join(&entry.dest),
        }
    }
}

/// Whether anything, a dangling symlink included, already sits at the
/// destination.
pub fn is_present(spec: &LinkSpec) -> bool {
    match fs::symlink_metadata(&spec.dest) {
        Ok(meta) => meta.file_type().is_symlink() || meta.is_file(),
        Err(_) => false,
    }
}

/// Create `spec.dest -> spec.source`, creating parent directories first.
pub fn create_link(spec: &LinkSpec) -> io::Result<()> {
    if let Some(parent) = spec.dest.parent() {
        fs::create_dir_all(parent)?;
    }
    symlink(&spec.source, &spec.dest)
}

#[cfg(unix)]
fn symlink(source: &Path, dest: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(source, dest)
}

#[cfg(windows)]
fn symlink(source: &Path, dest: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(source, dest)
}
