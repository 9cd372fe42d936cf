//! Settings file schema.
//!
//! Every field is optional; anything missing falls back to the built-in
//! defaults below.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root structure of `~/.dotmgr/config.yml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding the canonical config files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dotfiles_dir: Option<String>,

    /// Directory downloaded toolchains are unpacked into.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools_dir: Option<String>,

    /// Editor binary used for plugin refresh.
    pub editor: String,

    /// Tools installed by `langup`, mapped to a version or `latest`.
    pub tools: BTreeMap<String, String>,

    /// Config symlinks created by `link`.
    pub links: Vec<LinkEntry>,

    /// Remote endpoints.
    pub endpoints: Endpoints,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dotfiles_dir: None,
            tools_dir: None,
            editor: "nvim".to_string(),
            tools: default_tools(),
            links: default_links(),
            endpoints: Endpoints::default(),
        }
    }
}

/// One symlink: `source` is relative to the dotfiles directory, `dest` is
/// relative to the home directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    pub source: String,
    pub dest: String,
}

impl LinkEntry {
    fn new(source: &str, dest: &str) -> Self {
        Self {
            source: source.to_string(),
            dest: dest.to_string(),
        }
    }
}

/// Base URLs for everything fetched over the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    /// GitHub REST API root.
    pub github_api: String,
    /// Prefix for GitHub release asset downloads.
    pub github_download: String,
    /// Zig's static download index.
    pub zig_index: String,
    /// Prefix for pinned zig tarballs.
    pub zig_download: String,
    /// vim-plug bootstrap script.
    pub vim_plug: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            github_api: "https://api.github.com".to_string(),
            github_download: "https://github.com".to_string(),
            zig_index: "https://ziglang.org/download/index.json".to_string(),
            zig_download: "https://ziglang.org/download".to_string(),
            vim_plug: "https://raw.githubusercontent.com/junegunn/vim-plug/master/plug.vim"
                .to_string(),
        }
    }
}

fn default_tools() -> BTreeMap<String, String> {
    let mut tools = BTreeMap::new();
    tools.insert("zig".to_string(), "latest".to_string());
    tools.insert("kotlin-language-server".to_string(), "latest".to_string());
    tools
}

fn default_links() -> Vec<LinkEntry> {
    vec![
        LinkEntry::new("init.lua", ".config/nvim/init.lua"),
        LinkEntry::new("tmux.conf", ".tmux.conf"),
        LinkEntry::new("ghostty.conf", ".config/ghostty/config"),
    ]
}
