//! Error types for dotmgr operations.
//!
//! This module defines [`MgrError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `MgrError` for failures the CLI reports with a specific message
//! - Use `anyhow::Error` (via `MgrError::Other`) inside the HTTP and archive
//!   helpers, where context strings matter more than the variant
//! - Nothing is retried; every error ends the current operation

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for dotmgr operations.
#[derive(Debug, Error)]
pub enum MgrError {
    /// Host is not one of the supported (system, machine) pairs.
    #[error("Unrecognized platform, aborting: {system}_{machine}")]
    UnsupportedPlatform { system: String, machine: String },

    /// Operation name not present in the registry.
    #[error("Unknown operation: {name}")]
    UnknownOperation { name: String },

    /// Tool name not present in the tool registry.
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    /// Remote server answered with a non-success status.
    #[error("HTTP {status} fetching {url}")]
    HttpStatus { status: u16, url: String },

    /// Release metadata was missing a field we need.
    #[error("Malformed release metadata from {source_url}: {message}")]
    ReleaseMetadata { source_url: String, message: String },

    /// Downloaded archive does not match the published checksum.
    #[error("Checksum mismatch for {path}: expected {expected}, got {actual}")]
    ChecksumMismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    /// Archive file name has no extractor.
    #[error("Unsupported archive format: {path}")]
    UnsupportedArchive { path: PathBuf },

    /// Archive entry would escape the extraction directory.
    #[error("Refusing to extract unsafe path: {entry}")]
    UnsafeArchiveEntry { entry: String },

    /// External command failed to start or exited non-zero.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Settings file could not be parsed.
    #[error("Failed to parse settings at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Home directory could not be determined.
    #[error("Could not determine home directory")]
    NoHomeDir,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for dotmgr operations.
pub type Result<T> = std::result::Result<T, MgrError>;
