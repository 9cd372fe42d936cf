//! mgr CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use dotmgr::cli::{AppContext, Cli, CommandDispatcher};
use dotmgr::platform::PlatformKey;
use dotmgr::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("dotmgr=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dotmgr=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("mgr starting with args: {:?}", cli);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = create_ui(OutputMode::from_flags(cli.quiet, cli.verbose));

    let platform = match PlatformKey::detect() {
        Ok(platform) => platform,
        Err(e) => {
            ui.error(&e.to_string());
            return ExitCode::from(1);
        }
    };

    let op = match CommandDispatcher::select_operation(&cli, ui.as_mut()) {
        Ok(Some(op)) => op,
        Ok(None) => return ExitCode::from(1),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(1);
        }
    };

    let result = AppContext::load(&cli, platform)
        .and_then(|ctx| CommandDispatcher::new(ctx).dispatch(op, &cli, ui.as_mut()));

    match result {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
