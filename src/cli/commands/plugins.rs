//! The `refresh-plugins` and `vimplug` commands.

use std::path::PathBuf;

use crate::error::Result;
use crate::fetch::HttpClient;
use crate::shell::{refresh_plugins, PLUGIN_REFRESH_ARGS};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Run the editor's plugin install/clean/update cycle.
pub struct RefreshPluginsCommand {
    editor: String,
}

impl RefreshPluginsCommand {
    pub fn new(editor: &str) -> Self {
        Self {
            editor: editor.to_string(),
        }
    }
}

impl Command for RefreshPluginsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if ui.output_mode().shows_detail() {
            ui.message(&format!(
                "Running {} {}",
                self.editor,
                PLUGIN_REFRESH_ARGS.join(" ")
            ));
        }

        // The editor's own exit status is not ours.
        match refresh_plugins(&self.editor) {
            Ok(result) if result.success => {}
            Ok(result) => ui.warning(&format!(
                "{} exited with status {}",
                self.editor,
                result
                    .exit_code
                    .map_or_else(|| "unknown".to_string(), |c| c.to_string())
            )),
            Err(e) => ui.warning(&e.to_string()),
        }

        Ok(CommandResult::success())
    }
}

/// Download vim-plug into the editor's autoload directory.
pub struct VimPlugCommand {
    url: String,
    dest: PathBuf,
}

impl VimPlugCommand {
    pub fn new(url: &str, dest: PathBuf) -> Self {
        Self {
            url: url.to_string(),
            dest,
        }
    }
}

impl Command for VimPlugCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let client = HttpClient::new()?;
        let mut spinner = ui.start_spinner("Downloading vim-plug");

        match client.download_to(&self.url, &self.dest) {
            Ok(_) => {
                spinner.finish_success(&format!("Installed vim-plug to {}", self.dest.display()));
                Ok(CommandResult::success())
            }
            Err(e) => {
                spinner.finish_error("Failed to download vim-plug");
                Err(e)
            }
        }
    }
}
