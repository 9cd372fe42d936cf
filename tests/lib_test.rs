//! Library integration tests.

use dotmgr::MgrError;

#[test]
fn error_types_are_public() {
    let err = MgrError::UnknownOperation {
        name: "langdown".into(),
    };
    assert_eq!(err.to_string(), "Unknown operation: langdown");
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> dotmgr::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use dotmgr::cli::Cli;
    use clap::Parser;

    let cli = Cli::parse_from(["mgr", "kotlin-lsp", "--pin", "1.3.12"]);
    assert_eq!(cli.operations, ["kotlin-lsp"]);
    assert_eq!(cli.pin.as_deref(), Some("1.3.12"));
}

#[test]
fn operation_registry_is_public() {
    use dotmgr::cli::{usage_table, Operation};

    assert_eq!(Operation::from_name("langup").unwrap(), Operation::Langup);
    assert_eq!(usage_table().len(), Operation::ALL.len() + 1);
}

#[test]
fn unsupported_platform_message() {
    use dotmgr::platform::PlatformKey;

    let err = PlatformKey::from_parts("Windows", "x86_64").unwrap_err();
    assert_eq!(err.to_string(), "Unrecognized platform, aborting: Windows_x86_64");
}

#[test]
fn settings_load_from_file() {
    use dotmgr::config::load_settings;
    use std::fs;
    use tempfile::TempDir;

    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.yml");
    fs::write(&path, "editor: vim\ntools:\n  zig: 0.14.1\n").unwrap();

    let settings = load_settings(Some(&path)).unwrap();
    assert_eq!(settings.editor, "vim");
    assert_eq!(settings.tools.len(), 1);
    assert_eq!(settings.links.len(), 3);
}

#[test]
fn tool_urls_are_public() {
    use dotmgr::config::Endpoints;
    use dotmgr::install::Tool;
    use dotmgr::platform::PlatformKey;

    let url = Tool::KotlinLanguageServer.pinned_url(
        "1.3.12",
        PlatformKey::DarwinArm64,
        &Endpoints::default(),
    );
    assert_eq!(
        url,
        "https://github.com/fwcd/kotlin-language-server/releases/download/1.3.12/server.zip"
    );
}
