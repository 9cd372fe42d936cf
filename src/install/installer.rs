//! The install routine: download, verify, extract, relocate.

use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{MgrError, Result};
use crate::fetch::HttpClient;
use crate::ui::SpinnerHandle;

use super::archive::{extract_archive, extracted_root};
use super::tool::ReleaseSpec;

/// What an install produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    pub tool: String,
    pub version: String,
    /// Final install directory.
    pub path: PathBuf,
    /// Size of the downloaded archive.
    pub archive_bytes: u64,
    /// Whether an existing install was removed first.
    pub replaced: bool,
}

/// Installs releases into a tools directory.
pub struct Installer<'a> {
    client: &'a HttpClient,
    tools_dir: PathBuf,
}

impl<'a> Installer<'a> {
    pub fn new(client: &'a HttpClient, tools_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            tools_dir: tools_dir.into(),
        }
    }

    pub fn tools_dir(&self) -> &Path {
        &self.tools_dir
    }

    /// Where a tool with this directory name lives.
    pub fn install_path(&self, dir_name: &str) -> PathBuf {
        self.tools_dir.join(dir_name)
    }

    /// A tool counts as installed when its directory exists.
    pub fn is_installed(&self, dir_name: &str) -> bool {
        self.install_path(dir_name).exists()
    }

    /// Download `spec`, unpack it and move it to its install directory.
    ///
    /// An existing install of the same name is removed without backup. On
    /// failure, whatever was already written stays on disk.
    pub fn install(
        &self,
        spec: &ReleaseSpec,
        progress: &mut dyn SpinnerHandle,
    ) -> Result<InstallOutcome> {
        fs::create_dir_all(&self.tools_dir)?;

        let archive_path = self.tools_dir.join(spec.archive_file_name());
        progress.set_message(&format!("Downloading {} {}", spec.tool, spec.version));
        let archive_bytes = self.client.download_to(&spec.url, &archive_path)?;

        if let Some(expected) = &spec.sha256 {
            progress.set_message(&format!("Verifying {}", spec.tool));
            if let Err(e) = verify_sha256(&archive_path, expected) {
                fs::remove_file(&archive_path).ok();
                return Err(e);
            }
        }

        progress.set_message(&format!("Extracting {}", spec.tool));
        let staging = self.tools_dir.join(format!(".{}-staging", spec.dir_name));
        if staging.exists() {
            fs::remove_dir_all(&staging)?;
        }
        extract_archive(&archive_path, &staging)?;
        fs::remove_file(&archive_path)?;

        let dest = self.install_path(&spec.dir_name);
        let replaced = remove_existing(&dest)?;
        let root = extracted_root(&staging)?;
        tracing::debug!("Moving {} -> {}", root.display(), dest.display());
        fs::rename(&root, &dest)?;
        if staging.exists() {
            fs::remove_dir_all(&staging)?;
        }

        tracing::debug!("Installed {} {} to {}", spec.tool, spec.version, dest.display());
        Ok(InstallOutcome {
            tool: spec.tool.clone(),
            version: spec.version.clone(),
            path: dest,
            archive_bytes,
            replaced,
        })
    }
}

/// Remove a previous install (directory, file or symlink). Returns whether
/// anything was there.
fn remove_existing(dest: &Path) -> Result<bool> {
    match fs::symlink_metadata(dest) {
        Ok(meta) if meta.is_dir() => {
            tracing::debug!("Removing previous install at {}", dest.display());
            fs::remove_dir_all(dest)?;
            Ok(true)
        }
        Ok(_) => {
            fs::remove_file(dest)?;
            Ok(true)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Hex SHA-256 of a file.
pub fn sha256_file(path: &Path) -> Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; 16 * 1024];
    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// Compare a file's SHA-256 against a hex digest (case-insensitive).
pub fn verify_sha256(path: &Path, expected: &str) -> Result<()> {
    let actual = sha256_file(path)?;
    if !actual.eq_ignore_ascii_case(expected.trim()) {
        return Err(MgrError::ChecksumMismatch {
            path: path.to_path_buf(),
            expected: expected.trim().to_lowercase(),
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockSpinner;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use httpmock::prelude::*;
    use tempfile::TempDir;

    fn tar_gz_bytes(files: &[(&str, &[u8])]) -> Vec<u8> {
        let encoder = GzEncoder::new(Vec::new(), Compression::default());
        let mut builder = tar::Builder::new(encoder);
        for (name, data) in files {
            let mut header = tar::Header::new_gnu();
            header.set_size(data.len() as u64);
            header.set_mode(0o644);
            header.set_cksum();
            builder.append_data(&mut header, name, *data).unwrap();
        }
        builder.into_inner().unwrap().finish().unwrap()
    }

    fn spec_for(server: &MockServer, path: &str, sha256: Option<String>) -> ReleaseSpec {
        ReleaseSpec {
            tool: "zig".to_string(),
            dir_name: "zig".to_string(),
            version: "0.14.1".to_string(),
            url: server.url(path),
            sha256,
        }
    }

    #[test]
    fn sha256_of_known_input() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("abc");
        fs::write(&path, b"abc").unwrap();
        assert_eq!(
            sha256_file(&path).unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert!(verify_sha256(
            &path,
            "BA7816BF8F01CFEA414140DE5DAE2223B00361A396177A9CB410FF61F20015AD"
        )
        .is_ok());
    }

    #[test]
    fn install_relocates_single_root() {
        let body = tar_gz_bytes(&[
            ("zig-x86_64-linux-0.14.1/zig", b"binary"),
            ("zig-x86_64-linux-0.14.1/lib/std.zig", b"std"),
        ]);
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/zig-x86_64-linux-0.14.1.tar.gz");
            then.status(200).body(body.clone());
        });

        let temp = TempDir::new().unwrap();
        let tools = temp.path().join("tools");
        let client = HttpClient::new().unwrap();
        let installer = Installer::new(&client, &tools);
        let mut spinner = MockSpinner::new();

        let outcome = installer
            .install(
                &spec_for(&server, "/zig-x86_64-linux-0.14.1.tar.gz", None),
                &mut spinner,
            )
            .unwrap();

        assert_eq!(outcome.path, tools.join("zig"));
        assert_eq!(outcome.archive_bytes, body.len() as u64);
        assert!(!outcome.replaced);
        assert_eq!(fs::read(tools.join("zig/zig")).unwrap(), b"binary");
        assert_eq!(fs::read(tools.join("zig/lib/std.zig")).unwrap(), b"std");

        // Only the install directory remains: no archive, no staging dir.
        let leftovers: Vec<_> = fs::read_dir(&tools)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(leftovers, ["zig"]);
        assert!(installer.is_installed("zig"));
        assert!(spinner.messages().iter().any(|m| m.starts_with("Extracting")));
    }

    #[test]
    fn install_replaces_previous_version() {
        let body = tar_gz_bytes(&[("zig-new/zig", b"new")]);
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/zig-new.tar.gz");
            then.status(200).body(body.clone());
        });

        let temp = TempDir::new().unwrap();
        let tools = temp.path().join("tools");
        fs::create_dir_all(tools.join("zig")).unwrap();
        fs::write(tools.join("zig/stale-file"), "old").unwrap();

        let client = HttpClient::new().unwrap();
        let installer = Installer::new(&client, &tools);
        let outcome = installer
            .install(
                &spec_for(&server, "/zig-new.tar.gz", None),
                &mut MockSpinner::new(),
            )
            .unwrap();

        assert!(outcome.replaced);
        assert!(!tools.join("zig/stale-file").exists());
        assert_eq!(fs::read(tools.join("zig/zig")).unwrap(), b"new");
    }

    #[test]
    fn flat_archive_becomes_install_dir() {
        let body = tar_gz_bytes(&[("bin/tool", b"x"), ("README", b"y")]);
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/flat.tar.gz");
            then.status(200).body(body.clone());
        });

        let temp = TempDir::new().unwrap();
        let client = HttpClient::new().unwrap();
        let installer = Installer::new(&client, temp.path());
        installer
            .install(
                &spec_for(&server, "/flat.tar.gz", None),
                &mut MockSpinner::new(),
            )
            .unwrap();

        assert_eq!(fs::read(temp.path().join("zig/bin/tool")).unwrap(), b"x");
        assert_eq!(fs::read(temp.path().join("zig/README")).unwrap(), b"y");
        assert!(!temp.path().join(".zig-staging").exists());
    }

    #[test]
    fn checksum_mismatch_removes_archive_and_keeps_old_install() {
        let body = tar_gz_bytes(&[("zig-1/zig", b"x")]);
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/zig-1.tar.gz");
            then.status(200).body(body.clone());
        });

        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("zig")).unwrap();
        let client = HttpClient::new().unwrap();
        let installer = Installer::new(&client, temp.path());

        let err = installer
            .install(
                &spec_for(&server, "/zig-1.tar.gz", Some("00".repeat(32))),
                &mut MockSpinner::new(),
            )
            .unwrap_err();

        assert!(matches!(err, MgrError::ChecksumMismatch { .. }));
        assert!(!temp.path().join("zig-1.tar.gz").exists());
        assert!(temp.path().join("zig").exists());
    }

    #[test]
    fn matching_checksum_installs() {
        let body = tar_gz_bytes(&[("zig-2/zig", b"ok")]);
        let digest = hex::encode(Sha256::digest(&body));
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/zig-2.tar.gz");
            then.status(200).body(body.clone());
        });

        let temp = TempDir::new().unwrap();
        let client = HttpClient::new().unwrap();
        let installer = Installer::new(&client, temp.path());
        installer
            .install(
                &spec_for(&server, "/zig-2.tar.gz", Some(digest)),
                &mut MockSpinner::new(),
            )
            .unwrap();

        assert_eq!(fs::read(temp.path().join("zig/zig")).unwrap(), b"ok");
    }

    #[test]
    fn download_failure_propagates() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/gone.tar.gz");
            then.status(404);
        });

        let temp = TempDir::new().unwrap();
        let client = HttpClient::new().unwrap();
        let installer = Installer::new(&client, temp.path());
        let err = installer
            .install(
                &spec_for(&server, "/gone.tar.gz", None),
                &mut MockSpinner::new(),
            )
            .unwrap_err();

        assert!(matches!(err, MgrError::HttpStatus { status: 404, .. }));
        assert!(!installer.is_installed("zig"));
    }
}
