//! List command implementation.
//!
//! The `viewsitter list` command prints every view in container order.

use crate::cli::args::ListArgs;
use crate::container::Container;
use crate::error::Result;
use crate::report::Reporter;
use crate::view::ViewRecord;

use super::dispatcher::{Command, CommandResult};
use super::display::{describe, show_json};

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }
}

impl Command for ListCommand {
    fn execute(
        &self,
        container: &mut Container<ViewRecord>,
        reporter: &mut dyn Reporter,
    ) -> Result<CommandResult> {
        if self.args.json {
            show_json(reporter, &container.views())?;
            return Ok(CommandResult::success());
        }

        if container.is_empty() {
            reporter.message("No views.");
            return Ok(CommandResult::success());
        }

        for (position, view) in container.iter().enumerate() {
            reporter.message(&format!("{:>3}  {}", position, describe(view)));
        }

        Ok(CommandResult::success())
    }
}
