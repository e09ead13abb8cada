//! Drive CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use drive::cli::{Cli, CommandDispatcher};
use drive::config::Settings;
use drive::store::{default_store_path, BookmarkStore};
use drive::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr; stdout carries the chosen path.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("drive=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("drive=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Drive starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = create_ui(output_mode);

    let store_path = match &cli.store {
        Some(path) => Ok(path.clone()),
        None => default_store_path(),
    };
    let store_path = match store_path {
        Ok(path) => path,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(1);
        }
    };
    tracing::debug!("Using bookmark file {:?}", store_path);

    let dispatcher = CommandDispatcher::new(BookmarkStore::open(store_path), Settings::from_env());

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
