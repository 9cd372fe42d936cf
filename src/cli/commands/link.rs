//! The `link` command.

use crate::error::Result;
use crate::links::{create_link, is_present, LinkSpec};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Create any missing config symlinks.
///
/// Failures are reported and skipped; the command itself always succeeds.
pub struct LinkCommand {
    links: Vec<LinkSpec>,
}

impl LinkCommand {
    pub fn new(links: Vec<LinkSpec>) -> Self {
        Self { links }
    }
}

impl Command for LinkCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.message("Checking for missing config symlinks...");

        for link in &self.links {
            let dest = link.dest.display();
            if is_present(link) {
                if ui.output_mode().shows_detail() {
                    ui.message(&format!("Link {} present", dest));
                }
                continue;
            }

            ui.message(&format!(
                "Link {} not found, creating {} -> {}",
                dest,
                link.source.display(),
                dest
            ));
            if let Err(e) = create_link(link) {
                tracing::debug!("symlink {} failed: {}", dest, e);
                ui.warning(&format!("Could not create {}: {}", dest, e));
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::ui::{MockUI, OutputMode};
    use std::fs;
    use tempfile::TempDir;

    fn links(temp: &TempDir) -> Vec<LinkSpec> {
        ["init.lua", "tmux.conf"]
            .iter()
            .map(|name| LinkSpec {
                source: temp.path().join("dotfiles").join(name),
                dest: temp.path().join("home").join(name),
            })
            .collect()
    }

    #[test]
    fn creates_missing_links_and_reports_them() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let result = LinkCommand::new(links(&temp)).execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.messages()[0], "Checking for missing config symlinks...");
        assert_eq!(ui.messages().len(), 3);
        assert!(ui.has_message("init.lua not found, creating"));
        assert!(fs::symlink_metadata(temp.path().join("home/tmux.conf")).is_ok());
    }

    #[test]
    fn second_run_is_quiet() {
        let temp = TempDir::new().unwrap();
        LinkCommand::new(links(&temp))
            .execute(&mut MockUI::new())
            .unwrap();

        let mut ui = MockUI::new();
        LinkCommand::new(links(&temp)).execute(&mut ui).unwrap();
        assert_eq!(ui.messages(), ["Checking for missing config symlinks..."]);
    }

    #[test]
    fn verbose_reports_present_links() {
        let temp = TempDir::new().unwrap();
        LinkCommand::new(links(&temp))
            .execute(&mut MockUI::new())
            .unwrap();

        let mut ui = MockUI::with_mode(OutputMode::Verbose);
        LinkCommand::new(links(&temp)).execute(&mut ui).unwrap();
        assert!(ui.has_message("present"));
    }

    #[test]
    fn failure_is_a_warning_and_continues() {
        let temp = TempDir::new().unwrap();
        let links = links(&temp);
        fs::create_dir_all(&links[0].dest).unwrap();

        let mut ui = MockUI::new();
        let result = LinkCommand::new(links).execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.warnings().len(), 1);
        assert!(ui.has_warning("Could not create"));
        assert!(ui.has_message("init.lua not found, creating"));
        assert!(ui.has_message("tmux.conf not found, creating"));
    }
}
