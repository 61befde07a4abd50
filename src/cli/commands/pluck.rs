//! Pluck command implementation.

use serde_json::{json, Value};

use crate::cli::args::PluckArgs;
use crate::container::Container;
use crate::error::Result;
use crate::report::Reporter;
use crate::view::{IndexKey, ViewRecord};

use super::dispatcher::{Command, CommandResult};
use super::display::{key_or_absent, show_json};

/// The pluck command implementation.
pub struct PluckCommand {
    args: PluckArgs,
}

impl PluckCommand {
    /// Create a new pluck command.
    pub fn new(args: PluckArgs) -> Self {
        Self { args }
    }
}

impl Command for PluckCommand {
    fn execute(
        &self,
        container: &mut Container<ViewRecord>,
        reporter: &mut dyn Reporter,
    ) -> Result<CommandResult> {
        let values = container.pluck(&self.args.attribute);
        let rows = container.cids().zip(values.iter());

        if self.args.json {
            let rows: Vec<Value> = rows
                .map(|(cid, value)| {
                    json!({
                        "cid": cid,
                        "value": value.as_ref().map(IndexKey::to_json),
                    })
                })
                .collect();
            show_json(reporter, &rows)?;
        } else {
            for (cid, value) in rows {
                reporter.message(&format!("{}  {}", cid, key_or_absent(value.as_ref())));
            }
        }

        Ok(CommandResult::success())
    }
}
