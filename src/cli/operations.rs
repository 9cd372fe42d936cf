//! The fixed registry of operations and the usage table.

use crate::error::{MgrError, Result};

/// Every operation `mgr` can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Link,
    RefreshPlugins,
    Vimplug,
    Zig,
    KotlinLsp,
    Langup,
}

impl Operation {
    /// Registry order, which is also usage-table order.
    pub const ALL: [Operation; 6] = [
        Operation::Link,
        Operation::RefreshPlugins,
        Operation::Vimplug,
        Operation::Zig,
        Operation::KotlinLsp,
        Operation::Langup,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Link => "link",
            Operation::RefreshPlugins => "refresh-plugins",
            Operation::Vimplug => "vimplug",
            Operation::Zig => "zig",
            Operation::KotlinLsp => "kotlin-lsp",
            Operation::Langup => "langup",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Operation::Link => "symlinks configs for nvim, tmux and ghostty",
            Operation::RefreshPlugins => "installs, cleans and updates neovim plugins",
            Operation::Vimplug => "downloads and installs vim-plug",
            Operation::Zig => "installs the zig toolchain (--pin VERSION, default master)",
            Operation::KotlinLsp => "installs kotlin-language-server (--pin TAG, default latest)",
            Operation::Langup => "installs every configured tool that is missing",
        }
    }

    /// Look an operation up by name.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == name)
            .ok_or_else(|| MgrError::UnknownOperation {
                name: name.to_string(),
            })
    }
}

/// Usage line followed by one ` name<TAB>description` row per operation.
pub fn usage_table() -> Vec<String> {
    let mut lines = vec!["Usage: mgr <operation>".to_string()];
    lines.extend(
        Operation::ALL
            .iter()
            .map(|op| format!(" {}\t{}", op.name(), op.description())),
    );
    lines
}
