//! Archive extraction.
//!
//! `.tar.gz` and `.zip` are unpacked in-process. `.tar.xz` is handed to the
//! system `tar`, which every supported platform ships with xz support.

use anyhow::Context;
use flate2::read::GzDecoder;
use std::ffi::OsStr;
use std::fs::{self, File};
use std::path::{Component, Path, PathBuf};
use tar::Archive;

use crate::error::{MgrError, Result};
use crate::shell::execute_checked;

/// Archive formats dotmgr can unpack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    TarGz,
    TarXz,
    Zip,
}

impl ArchiveKind {
    /// Detect the format from the file name.
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
            Ok(ArchiveKind::TarGz)
        } else if name.ends_with(".tar.xz") || name.ends_with(".txz") {
            Ok(ArchiveKind::TarXz)
        } else if name.ends_with(".zip") {
            Ok(ArchiveKind::Zip)
        } else {
            Err(MgrError::UnsupportedArchive {
                path: path.to_path_buf(),
            })
        }
    }
}

/// Extract `archive_path` into `dest_dir`, creating it if needed.
pub fn extract_archive(archive_path: &Path, dest_dir: &Path) -> Result<()> {
    let kind = ArchiveKind::from_path(archive_path)?;
    fs::create_dir_all(dest_dir)?;
    tracing::debug!(
        "Extracting {} ({:?}) into {}",
        archive_path.display(),
        kind,
        dest_dir.display()
    );

    match kind {
        ArchiveKind::TarGz => extract_tar_gz(archive_path, dest_dir),
        ArchiveKind::TarXz => extract_tar_xz(archive_path, dest_dir),
        ArchiveKind::Zip => extract_zip(archive_path, dest_dir),
    }
}

/// Reject absolute entries and entries containing `..`.
fn check_entry_path(entry_path: &Path) -> Result<()> {
    let escapes = entry_path.is_absolute()
        || entry_path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)));
    if escapes {
        return Err(MgrError::UnsafeArchiveEntry {
            entry: entry_path.display().to_string(),
        });
    }
    Ok(())
}

fn extract_tar_gz(archive_path: &Path, dest_dir: &Path) -> Result<()> {
    let file = File::open(archive_path)
        .with_context(|| format!("Failed to open archive: {}", archive_path.display()))?;
    let mut archive = Archive::new(GzDecoder::new(file));
    archive.set_preserve_permissions(true);

    let entries = archive
        .entries()
        .with_context(|| format!("Failed to read tar entries: {}", archive_path.display()))?;

    for entry in entries {
        let mut entry = entry
            .with_context(|| format!("Failed to read tar entry: {}", archive_path.display()))?;
        let entry_path = entry
            .path()
            .context("Failed to get entry path")?
            .into_owned();
        check_entry_path(&entry_path)?;

        entry
            .unpack_in(dest_dir)
            .with_context(|| format!("Failed to extract: {}", entry_path.display()))?;
    }
    Ok(())
}

fn extract_tar_xz(archive_path: &Path, dest_dir: &Path) -> Result<()> {
    let args = [
        OsStr::new("-xJf"),
        archive_path.as_os_str(),
        OsStr::new("-C"),
        dest_dir.as_os_str(),
    ];
    execute_checked("tar", &args)?;
    Ok(())
}

fn extract_zip(archive_path: &Path, dest_dir: &Path) -> Result<()> {
    let file = File::open(archive_path)
        .with_context(|| format!("Failed to open archive: {}", archive_path.display()))?;
    let mut archive = zip::ZipArchive::new(file)
        .with_context(|| format!("Failed to read ZIP archive: {}", archive_path.display()))?;

    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .with_context(|| format!("Failed to read archive entry {i}"))?;

        let entry_path = entry
            .enclosed_name()
            .ok_or_else(|| MgrError::UnsafeArchiveEntry {
                entry: entry.name().to_string(),
            })?;
        check_entry_path(&entry_path)?;

        let output_path = dest_dir.join(&entry_path);
        if entry.is_dir() {
            fs::create_dir_all(&output_path)?;
            continue;
        }

        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut outfile = File::create(&output_path)
            .with_context(|| format!("Failed to create file: {}", output_path.display()))?;
        std::io::copy(&mut entry, &mut outfile)
            .with_context(|| format!("Failed to extract: {}", output_path.display()))?;

        #[cfg(unix)]
        if let Some(mode) = entry.unix_mode() {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&output_path, fs::Permissions::from_mode(mode))?;
        }
    }
    Ok(())
}

/// The directory that should be installed from a staging directory.
///
/// Release archives usually wrap everything in one top-level directory
/// (`zig-x86_64-linux-0.14.1/`, `server/`); that directory is the root.
/// Anything else means the staging directory itself is the root.
pub fn extracted_root(staging: &Path) -> Result<PathBuf> {
    let entries: Vec<_> = fs::read_dir(staging)?
        .collect::<std::io::Result<Vec<_>>>()?;

    if let [only] = entries.as_slice() {
        if only.file_type()?.is_dir() {
            return Ok(only.path());
        }
    }
    Ok(staging.to_path_buf())
}
