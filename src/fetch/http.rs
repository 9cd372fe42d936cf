//! Blocking HTTP client for release lookups and archive downloads.
//!
//! Requests carry no overall timeout: toolchain archives can be large and
//! nothing here retries, so a slow download simply takes as long as it takes.

use anyhow::Context;
use reqwest::blocking::{Client, Response};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{MgrError, Result};

const USER_AGENT: &str = concat!("dotmgr/", env!("CARGO_PKG_VERSION"));

/// Thin wrapper over a blocking reqwest client.
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a client with the dotmgr user agent.
    ///
    /// The GitHub API rejects requests without a user agent.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }

    /// GET a URL and parse the body as JSON.
    pub fn get_json(&self, url: &str) -> Result<serde_json::Value> {
        tracing::debug!("GET {}", url);
        let response = self.get(url)?;
        let value = response
            .json()
            .with_context(|| format!("Failed to parse JSON from {}", url))?;
        Ok(value)
    }

    /// Look up the tag of the latest GitHub release of `repo` (`owner/name`).
    pub fn latest_release_tag(&self, api_base: &str, repo: &str) -> Result<String> {
        let url = format!(
            "{}/repos/{}/releases/latest",
            api_base.trim_end_matches('/'),
            repo
        );
        let body = self.get_json(&url)?;
        parse_tag_name(&body, &url)
    }

    /// Stream the body of `url` into `dest`, creating parent directories.
    ///
    /// Returns the number of bytes written.
    pub fn download_to(&self, url: &str, dest: &Path) -> Result<u64> {
        tracing::debug!("Downloading {} -> {}", url, dest.display());
        let mut response = self.get(url)?;

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = File::create(dest)?;
        let mut writer = BufWriter::new(file);
        let written = std::io::copy(&mut response, &mut writer)
            .with_context(|| format!("Failed to write download to {}", dest.display()))?;
        writer.flush()?;

        tracing::debug!("Wrote {} bytes to {}", written, dest.display());
        Ok(written)
    }

    fn get(&self, url: &str) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Failed to fetch {}", url))?;

        if !response.status().is_success() {
            return Err(MgrError::HttpStatus {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response)
    }
}

/// Pull `tag_name` out of a GitHub release document.
pub fn parse_tag_name(body: &serde_json::Value, url: &str) -> Result<String> {
    body["tag_name"]
        .as_str()
        .map(String::from)
        .ok_or_else(|| MgrError::ReleaseMetadata {
            source_url: url.to_string(),
            message: "no tag_name in response".to_string(),
        })
}
