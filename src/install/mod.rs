//! Toolchain installation.
//!
//! - [`tool`] - the tool registry and release resolution
//! - [`archive`] - archive extraction
//! - [`installer`] - download, verify, extract and relocate
//!
//! Presence of `<tools_dir>/<tool dir>` is the only record of an install;
//! there is no version ledger.

pub mod archive;
pub mod installer;
pub mod tool;

pub use archive::{extract_archive, extracted_root, ArchiveKind};
pub use installer::{sha256_file, verify_sha256, InstallOutcome, Installer};
pub use tool::{parse_zig_master, ReleaseSpec, Tool, VersionRequest, ZigMaster};
