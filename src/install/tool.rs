//! Tool registry and release resolution.
//!
//! A [`Tool`] knows where its releases live; resolving it against a
//! [`VersionRequest`] and the host [`PlatformKey`] yields a [`ReleaseSpec`]
//! the installer can act on.

use std::fmt;

use crate::config::Endpoints;
use crate::error::{MgrError, Result};
use crate::fetch::HttpClient;
use crate::platform::PlatformKey;

const KOTLIN_LSP_REPO: &str = "fwcd/kotlin-language-server";

/// Which release of a tool to install.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VersionRequest {
    /// Newest release (zig's `master` build).
    #[default]
    Latest,
    /// An exact version or tag.
    Pinned(String),
}

impl VersionRequest {
    /// `latest` and `master` (any case) request the newest release.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("latest")
            || trimmed.eq_ignore_ascii_case("master")
        {
            VersionRequest::Latest
        } else {
            VersionRequest::Pinned(trimmed.to_string())
        }
    }
}

impl fmt::Display for VersionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionRequest::Latest => f.write_str("latest"),
            VersionRequest::Pinned(v) => f.write_str(v),
        }
    }
}

/// Everything needed to download and place one release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseSpec {
    /// Tool name, for messages.
    pub tool: String,
    /// Directory name under the tools directory.
    pub dir_name: String,
    /// Resolved version label.
    pub version: String,
    /// Archive URL.
    pub url: String,
    /// Expected SHA-256 of the archive, hex encoded, when published.
    pub sha256: Option<String>,
}

impl ReleaseSpec {
    /// File name the archive is saved under: the last URL path segment.
    pub fn archive_file_name(&self) -> String {
        let path = self.url.split(['?', '#']).next().unwrap_or_default();
        match path.rsplit('/').next() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("{}.download", self.dir_name),
        }
    }
}

/// Tools dotmgr knows how to install.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// The zig toolchain.
    Zig,
    /// fwcd's Kotlin language server.
    KotlinLanguageServer,
}

impl Tool {
    /// Every registered tool.
    pub const ALL: [Tool; 2] = [Tool::Zig, Tool::KotlinLanguageServer];

    /// Canonical name, as used in the settings `tools` map.
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Zig => "zig",
            Tool::KotlinLanguageServer => "kotlin-language-server",
        }
    }

    /// Look a tool up by canonical name or short alias.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "zig" => Ok(Tool::Zig),
            "kotlin-language-server" | "kotlin-lsp" => Ok(Tool::KotlinLanguageServer),
            _ => Err(MgrError::UnknownTool {
                name: name.to_string(),
            }),
        }
    }

    /// Directory the tool is installed under inside the tools directory.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Tool::Zig => "zig",
            Tool::KotlinLanguageServer => "kotlin",
        }
    }

    /// Download URL for an exact version.
    pub fn pinned_url(&self, version: &str, platform: PlatformKey, endpoints: &Endpoints) -> String {
        match self {
            Tool::Zig => format!(
                "{}/{version}/zig-{}-{version}.tar.xz",
                endpoints.zig_download.trim_end_matches('/'),
                platform.archive_name(),
            ),
            Tool::KotlinLanguageServer => format!(
                "{}/{KOTLIN_LSP_REPO}/releases/download/{version}/server.zip",
                endpoints.github_download.trim_end_matches('/'),
            ),
        }
    }

    /// Resolve a version request into a concrete release.
    ///
    /// Pinned versions never touch the network; `Latest` queries the zig
    /// download index or the GitHub releases API.
    pub fn resolve(
        &self,
        request: &VersionRequest,
        platform: PlatformKey,
        endpoints: &Endpoints,
        client: &HttpClient,
    ) -> Result<ReleaseSpec> {
        let spec = match (self, request) {
            (_, VersionRequest::Pinned(version)) => self.spec(
                version.clone(),
                self.pinned_url(version, platform, endpoints),
                None,
            ),
            (Tool::Zig, VersionRequest::Latest) => {
                let index = client.get_json(&endpoints.zig_index)?;
                let master = parse_zig_master(&index, platform, &endpoints.zig_index)?;
                self.spec(master.version, master.tarball, Some(master.shasum))
            }
            (Tool::KotlinLanguageServer, VersionRequest::Latest) => {
                let tag = client.latest_release_tag(&endpoints.github_api, KOTLIN_LSP_REPO)?;
                let url = self.pinned_url(&tag, platform, endpoints);
                self.spec(tag, url, None)
            }
        };
        tracing::debug!(
            "Resolved {} {} -> {} {}",
            self.name(),
            request,
            spec.version,
            spec.url
        );
        Ok(spec)
    }

    fn spec(&self, version: String, url: String, sha256: Option<String>) -> ReleaseSpec {
        ReleaseSpec {
            tool: self.name().to_string(),
            dir_name: self.dir_name().to_string(),
            version,
            url,
            sha256,
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The `master` entry of zig's download index for one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZigMaster {
    pub version: String,
    pub tarball: String,
    pub shasum: String,
}

/// Read `master.version` and `master.<platform>.{tarball,shasum}`.
pub fn parse_zig_master(
    index: &serde_json::Value,
    platform: PlatformKey,
    source_url: &str,
) -> Result<ZigMaster> {
    let missing = |field: String| MgrError::ReleaseMetadata {
        source_url: source_url.to_string(),
        message: format!("missing {}", field),
    };

    let master = &index["master"];
    let key = platform.archive_name();
    let entry = &master[key];

    let version = master["version"]
        .as_str()
        .ok_or_else(|| missing("master.version".to_string()))?;
    let tarball = entry["tarball"]
        .as_str()
        .ok_or_else(|| missing(format!("master.{key}.tarball")))?;
    let shasum = entry["shasum"]
        .as_str()
        .ok_or_else(|| missing(format!("master.{key}.shasum")))?;

    Ok(ZigMaster {
        version: version.to_string(),
        tarball: tarball.to_string(),
        shasum: shasum.to_string(),
    })
}
