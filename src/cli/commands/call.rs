//! Call command implementation.
//!
//! The `viewsitter call` command invokes a method on every view and shows
//! what each one returned. Views without the method are listed as such.

use serde_json::{json, Value};

use crate::cli::args::CallArgs;
use crate::container::Container;
use crate::error::Result;
use crate::report::Reporter;
use crate::view::ViewRecord;

use super::dispatcher::{Command, CommandResult};
use super::display::{parse_arg, show_json};

/// The call command implementation.
pub struct CallCommand {
    args: CallArgs,
}

impl CallCommand {
    /// Create a new call command.
    pub fn new(args: CallArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CallArgs {
        &self.args
    }
}

impl Command for CallCommand {
    fn execute(
        &self,
        container: &mut Container<ViewRecord>,
        reporter: &mut dyn Reporter,
    ) -> Result<CommandResult> {
        let args: Vec<Value> = self.args.args.iter().map(|a| parse_arg(a)).collect();
        let results = container.invoke(&self.args.method, &args);
        let responded = results.iter().filter(|r| r.is_some()).count();

        if self.args.json {
            let rows: Vec<Value> = container
                .cids()
                .zip(&results)
                .map(|(cid, result)| {
                    json!({
                        "cid": cid,
                        "responded": result.is_some(),
                        "result": result,
                    })
                })
                .collect();
            show_json(reporter, &rows)?;
            return Ok(CommandResult::success());
        }

        for (cid, result) in container.cids().zip(&results) {
            let shown = match result {
                Some(value) => value.to_string(),
                None => "(no such method)".to_string(),
            };
            reporter.message(&format!("{}  {}", cid, shown));
        }
        reporter.message(&format!(
            "{} of {} views responded to {}",
            responded,
            results.len(),
            self.args.method
        ));

        Ok(CommandResult::success())
    }
}
