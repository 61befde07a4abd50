//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for loading the manifest and routing subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, ListArgs};
use crate::container::Container;
use crate::error::{Result, SitterError};
use crate::manifest::Manifest;
use crate::report::Reporter;
use crate::view::ViewRecord;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `container` - Container seeded from the manifest
    /// * `reporter` - Where output and diagnostics go
    fn execute(
        &self,
        container: &mut Container<ViewRecord>,
        reporter: &mut dyn Reporter,
    ) -> Result<CommandResult>;
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

/// Loads the manifest and dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    manifest_path: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given manifest.
    pub fn new(manifest_path: PathBuf) -> Self {
        Self { manifest_path }
    }

    /// Get the manifest path.
    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    /// Dispatch and execute a command.
    ///
    /// The container gets its own clone of `reporter`, so skipped manifest
    /// entries are reported alongside command output.
    pub fn dispatch<R>(&self, cli: &Cli, reporter: &mut R) -> Result<CommandResult>
    where
        R: Reporter + Clone + 'static,
    {
        let manifest = match Manifest::load(&self.manifest_path) {
            Ok(m) => m,
            Err(e @ SitterError::ManifestNotFound { .. })
            | Err(e @ SitterError::ManifestUnreadable { .. })
            | Err(e @ SitterError::ManifestParseError { .. }) => {
                reporter.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        let mut container = manifest.into_container(reporter.clone());

        match &cli.command {
            Some(Commands::List(args)) => {
                let cmd = super::list::ListCommand::new(args.clone());
                cmd.execute(&mut container, reporter)
            }
            Some(Commands::Find(args)) => {
                let cmd = super::find::FindCommand::new(args.clone());
                cmd.execute(&mut container, reporter)
            }
            Some(Commands::Pluck(args)) => {
                let cmd = super::pluck::PluckCommand::new(args.clone());
                cmd.execute(&mut container, reporter)
            }
            Some(Commands::Call(args)) => {
                let cmd = super::call::CallCommand::new(args.clone());
                cmd.execute(&mut container, reporter)
            }
            None => {
                // Default to list with default args
                let cmd = super::list::ListCommand::new(ListArgs::default());
                cmd.execute(&mut container, reporter)
            }
        }
    }
}
