//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`AppContext`] for the settings and paths every command shares
//! - [`CommandDispatcher`] for routing the operation name

use crate::cli::args::Cli;
use crate::cli::operations::{usage_table, Operation};
use crate::config::{load_settings, Paths, Settings};
use crate::error::Result;
use crate::install::{Tool, VersionRequest};
use crate::links::LinkSpec;
use crate::platform::PlatformKey;
use crate::ui::UserInterface;

use super::install::{InstallCommand, LangupCommand};
use super::link::LinkCommand;
use super::plugins::{RefreshPluginsCommand, VimPlugCommand};

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Everything resolved before an operation runs.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub platform: PlatformKey,
    pub settings: Settings,
    pub paths: Paths,
}

impl AppContext {
    /// Load settings and resolve paths for the given command line.
    pub fn load(cli: &Cli, platform: PlatformKey) -> Result<Self> {
        let settings = load_settings(cli.config.as_deref())?;
        let paths = Paths::resolve(&settings, cli.dotfiles.as_deref(), cli.tools_dir.as_deref())?;
        tracing::debug!(
            "dotfiles: {}, tools: {}",
            paths.dotfiles_dir.display(),
            paths.tools_dir.display()
        );
        Ok(Self {
            platform,
            settings,
            paths,
        })
    }
}

/// Dispatches the operation named on the command line.
pub struct CommandDispatcher {
    context: AppContext,
}

impl CommandDispatcher {
    pub fn new(context: AppContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    /// Pick the single operation named on the command line.
    ///
    /// Anything other than exactly one name prints the usage table and
    /// yields `None`; the caller exits with status 1. A name missing from
    /// the registry is an error. Needs no settings, so a broken settings
    /// file never hides the usage table.
    pub fn select_operation(cli: &Cli, ui: &mut dyn UserInterface) -> Result<Option<Operation>> {
        let [name] = cli.operations.as_slice() else {
            ui.show_usage(&usage_table());
            return Ok(None);
        };
        Operation::from_name(name).map(Some)
    }

    /// Execute a selected operation.
    pub fn dispatch(
        &self,
        op: Operation,
        cli: &Cli,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        tracing::debug!("Dispatching {}", op.name());

        if cli.pin.is_some() && !matches!(op, Operation::Zig | Operation::KotlinLsp) {
            ui.warning(&format!("--pin has no effect on {}", op.name()));
        }

        let ctx = &self.context;
        let pinned = cli
            .pin
            .as_deref()
            .map(VersionRequest::parse)
            .unwrap_or_default();

        match op {
            Operation::Link => {
                let links = ctx
                    .settings
                    .links
                    .iter()
                    .map(|e| LinkSpec::from_entry(e, &ctx.paths))
                    .collect();
                LinkCommand::new(links).execute(ui)
            }
            Operation::RefreshPlugins => {
                RefreshPluginsCommand::new(&ctx.settings.editor).execute(ui)
            }
            Operation::Vimplug => VimPlugCommand::new(
                &ctx.settings.endpoints.vim_plug,
                ctx.paths.vim_plug_path(),
            )
            .execute(ui),
            Operation::Zig => InstallCommand::new(ctx, Tool::Zig, pinned).execute(ui),
            Operation::KotlinLsp => {
                InstallCommand::new(ctx, Tool::KotlinLanguageServer, pinned).execute(ui)
            }
            Operation::Langup => LangupCommand::new(ctx, cli.force).execute(ui),
        }
    }
}
