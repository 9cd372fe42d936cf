//! The `zig`, `kotlin-lsp` and `langup` commands.

use crate::error::Result;
use crate::fetch::HttpClient;
use crate::install::{InstallOutcome, Installer, Tool, VersionRequest};
use crate::ui::UserInterface;

use super::dispatcher::{AppContext, Command, CommandResult};

/// Install a single tool, replacing any existing install.
pub struct InstallCommand<'a> {
    ctx: &'a AppContext,
    tool: Tool,
    request: VersionRequest,
}

impl<'a> InstallCommand<'a> {
    pub fn new(ctx: &'a AppContext, tool: Tool, request: VersionRequest) -> Self {
        Self { ctx, tool, request }
    }
}

impl Command for InstallCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let client = HttpClient::new()?;
        ui.message(&format!("Installing {}...", self.tool));
        install_tool(self.ctx, &client, self.tool, &self.request, ui)?;
        Ok(CommandResult::success())
    }
}

/// Install every tool in the settings `tools` map that is not already there.
pub struct LangupCommand<'a> {
    ctx: &'a AppContext,
    force: bool,
}

impl<'a> LangupCommand<'a> {
    pub fn new(ctx: &'a AppContext, force: bool) -> Self {
        Self { ctx, force }
    }

    /// Configured tools with their version requests, in settings order.
    fn planned(&self) -> Result<Vec<(Tool, VersionRequest)>> {
        self.ctx
            .settings
            .tools
            .iter()
            .map(|(name, version)| Ok((Tool::from_name(name)?, VersionRequest::parse(version))))
            .collect()
    }
}

impl Command for LangupCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let plan = self.planned()?;
        let client = HttpClient::new()?;
        let installer = Installer::new(&client, &self.ctx.paths.tools_dir);

        ui.show_header("langup");
        let mut installed = 0;
        for (tool, request) in &plan {
            if !self.force && installer.is_installed(tool.dir_name()) {
                let mut spinner = ui.start_spinner(&format!("Checking {}", tool));
                spinner.finish_skipped(&format!(
                    "{} already installed at {}",
                    tool,
                    installer.install_path(tool.dir_name()).display()
                ));
                continue;
            }
            install_tool(self.ctx, &client, *tool, request, ui)?;
            installed += 1;
        }

        if installed == 0 {
            ui.message("All tools present");
        }
        Ok(CommandResult::success())
    }
}

/// Resolve and install one tool behind a spinner.
fn install_tool(
    ctx: &AppContext,
    client: &HttpClient,
    tool: Tool,
    request: &VersionRequest,
    ui: &mut dyn UserInterface,
) -> Result<InstallOutcome> {
    let installer = Installer::new(client, &ctx.paths.tools_dir);
    let mut spinner = ui.start_spinner(&format!("Resolving {} {}", tool, request));

    let result = tool
        .resolve(request, ctx.platform, &ctx.settings.endpoints, client)
        .and_then(|spec| {
            if ui.output_mode().shows_detail() {
                spinner.set_message(&format!("Fetching {}", spec.url));
            }
            installer.install(&spec, spinner.as_mut())
        });

    match result {
        Ok(outcome) => {
            spinner.finish_success(&format!(
                "Installed {} {} to {}",
                outcome.tool,
                outcome.version,
                outcome.path.display()
            ));
            Ok(outcome)
        }
        Err(e) => {
            spinner.finish_error(&format!("Failed to install {}", tool));
            Err(e)
        }
    }
}
