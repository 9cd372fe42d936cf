//! Resolution of the three directories every operation works against.

use std::path::{Path, PathBuf};

use crate::config::schema::Settings;
use crate::error::{MgrError, Result};

/// Environment variable overriding the dotfiles directory.
pub const DOTFILES_ENV: &str = "DOTFILES_DIR";

/// Environment variable overriding the tools directory.
pub const TOOLS_DIR_ENV: &str = "MGR_TOOLS_DIR";

/// Resolved filesystem locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    /// The user's home directory.
    pub home: PathBuf,
    /// Source-of-truth directory for config files.
    pub dotfiles_dir: PathBuf,
    /// Where downloaded toolchains live.
    pub tools_dir: PathBuf,
}

impl Paths {
    /// Resolve paths from CLI overrides, then settings, then defaults.
    ///
    /// CLI overrides already include their environment variable fallback
    /// (clap reads `DOTFILES_DIR` / `MGR_TOOLS_DIR`).
    pub fn resolve(
        settings: &Settings,
        dotfiles_override: Option<&Path>,
        tools_override: Option<&Path>,
    ) -> Result<Self> {
        let home = dirs::home_dir().ok_or(MgrError::NoHomeDir)?;
        Ok(Self::resolve_with_home(
            home,
            settings,
            dotfiles_override,
            tools_override,
        ))
    }

    /// Same as [`Paths::resolve`] with an explicit home directory.
    pub fn resolve_with_home(
        home: PathBuf,
        settings: &Settings,
        dotfiles_override: Option<&Path>,
        tools_override: Option<&Path>,
    ) -> Self {
        let dotfiles_dir = match (dotfiles_override, &settings.dotfiles_dir) {
            (Some(p), _) => p.to_path_buf(),
            (None, Some(s)) => expand_home(s, &home),
            (None, None) => home.join("dotfiles"),
        };

        let tools_dir = match (tools_override, &settings.tools_dir) {
            (Some(p), _) => p.to_path_buf(),
            (None, Some(s)) => expand_home(s, &home),
            (None, None) => home.join(".local/share/nvim/lsp"),
        };

        Self {
            home,
            dotfiles_dir,
            tools_dir,
        }
    }

    /// vim-plug's autoload location.
    pub fn vim_plug_path(&self) -> PathBuf {
        self.home
            .join(".local/share/nvim/site/autoload")
            .join("plug.vim")
    }
}

/// Expand a leading `~` against `home`.
pub fn expand_home(path: &str, home: &Path) -> PathBuf {
    if path == "~" {
        home.to_path_buf()
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(path)
    }
}
