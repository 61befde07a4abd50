//! viewsitter CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use viewsitter::cli::{Cli, CommandDispatcher};
use viewsitter::manifest::Manifest;
use viewsitter::report::{terminal::should_use_colors, Reporter, TerminalReporter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("viewsitter=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("viewsitter=info"))
    };

    // stdout carries command output (possibly JSON), so logs go to stderr.
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("viewsitter starting with args: {:?}", cli);

    let mut reporter = TerminalReporter::new(!cli.no_color && should_use_colors());

    let root = std::env::current_dir().unwrap_or_default();
    let manifest_path = Manifest::locate(&root, cli.manifest.as_deref());

    let dispatcher = CommandDispatcher::new(manifest_path);

    match dispatcher.dispatch(&cli, &mut reporter) {
        Ok(result) => ExitCode::from(u8::try_from(result.exit_code).unwrap_or(1)),
        Err(e) => {
            reporter.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
