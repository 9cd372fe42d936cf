//! Editor plugin refresh.

use crate::error::Result;

use super::command::{execute, CommandOptions, CommandResult};

/// Startup commands that install, clean and update vim-plug plugins, then
/// re-register remote plugins.
pub const PLUGIN_REFRESH_ARGS: [&str; 4] = [
    "+PlugInstall",
    "+PlugClean",
    "+PlugUpdate",
    "+UpdateRemotePlugins",
];

/// Launch `editor` with the plugin refresh commands attached to the terminal.
///
/// The editor stays in the foreground until the user quits it.
pub fn refresh_plugins(editor: &str) -> Result<CommandResult> {
    tracing::debug!("Refreshing plugins with {}", editor);
    execute(editor, &PLUGIN_REFRESH_ARGS, &CommandOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MgrError;

    #[test]
    fn refresh_args_are_fixed() {
        assert_eq!(
            PLUGIN_REFRESH_ARGS.join(" "),
            "+PlugInstall +PlugClean +PlugUpdate +UpdateRemotePlugins"
        );
    }

    #[test]
    fn missing_editor_is_command_failure() {
        let err = refresh_plugins("no-such-editor-dotmgr").unwrap_err();
        match err {
            MgrError::CommandFailed { command, .. } => {
                assert!(command.starts_with("no-such-editor-dotmgr +PlugInstall"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn runs_editor_with_refresh_args() {
        // `true` ignores its arguments and exits 0.
        let result = refresh_plugins("true").unwrap();
        assert!(result.success);
    }
}
