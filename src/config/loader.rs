//! Settings file discovery and loading.

use crate::config::schema::Settings;
use crate::error::{MgrError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default settings location: `~/.dotmgr/config.yml`.
pub fn default_settings_path() -> Option<PathBuf> {
    Some(dirs::home_dir()?.join(".dotmgr").join("config.yml"))
}

/// Load settings.
///
/// An explicit path must exist. Without one, the default location is used
/// when present, and built-in defaults otherwise.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    match explicit {
        Some(path) => load_settings_file(path),
        None => match default_settings_path() {
            Some(path) if path.exists() => load_settings_file(&path),
            _ => {
                tracing::debug!("No settings file found, using defaults");
                Ok(Settings::default())
            }
        },
    }
}

/// Parse a single settings file.
pub fn load_settings_file(path: &Path) -> Result<Settings> {
    tracing::debug!("Loading settings from {}", path.display());
    let content = fs::read_to_string(path)?;
    parse_settings(&content, path)
}

fn parse_settings(content: &str, path: &Path) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    serde_yaml::from_str(content).map_err(|e| MgrError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_explicit_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "editor: vim\n").unwrap();

        let settings = load_settings(Some(&path)).unwrap();
        assert_eq!(settings.editor, "vim");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.yml");
        let result = load_settings(Some(&path));
        assert!(matches!(result, Err(MgrError::Io(_))));
    }

    #[test]
    fn empty_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "\n").unwrap();

        let settings = load_settings_file(&path).unwrap();
        assert_eq!(settings.editor, "nvim");
    }

    #[test]
    fn invalid_yaml_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "links: [unclosed\n").unwrap();

        let err = load_settings_file(&path).unwrap_err();
        assert!(matches!(err, MgrError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.yml"));
    }

    #[test]
    fn default_path_ends_with_config_yml() {
        if let Some(path) = default_settings_path() {
            assert!(path.ends_with(".dotmgr/config.yml"));
        }
    }
}
