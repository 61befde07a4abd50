//! Find command implementation.
//!
//! The `viewsitter find` command runs one container lookup and prints the
//! view it lands on.

use crate::cli::args::{FindArgs, LookupArgs};
use crate::container::Container;
use crate::error::Result;
use crate::report::Reporter;
use crate::view::{Cid, IndexKey, ViewRecord};

use super::dispatcher::{Command, CommandResult};
use super::display::{describe, show_json};

/// The find command implementation.
pub struct FindCommand {
    args: FindArgs,
}

impl FindCommand {
    /// Create a new find command.
    pub fn new(args: FindArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &FindArgs {
        &self.args
    }

    /// Human-readable form of the lookup, for the not-found message.
    fn describe_lookup(lookup: &LookupArgs) -> String {
        if let Some(ref cid) = lookup.cid {
            format!("cid {}", cid)
        } else if let Some(ref model) = lookup.model {
            format!("model {}", model)
        } else if let Some(ref collection) = lookup.collection {
            format!("collection {}", collection)
        } else if let Some(ref custom) = lookup.custom {
            format!("custom key {}", custom)
        } else if let Some(index) = lookup.index {
            format!("position {}", index)
        } else {
            "empty lookup".to_string()
        }
    }
}

/// Run the lookup selected by `lookup`.
pub fn lookup<'a>(
    container: &'a Container<ViewRecord>,
    lookup: &LookupArgs,
) -> Option<&'a ViewRecord> {
    if let Some(ref cid) = lookup.cid {
        container.find_by_cid(cid.as_str())
    } else if let Some(ref model) = lookup.model {
        container.find_by_model(&Cid::from(model.as_str()))
    } else if let Some(ref collection) = lookup.collection {
        container.find_by_collection(&Cid::from(collection.as_str()))
    } else if let Some(ref custom) = lookup.custom {
        container.find_by_custom(&IndexKey::parse(custom))
    } else {
        lookup.index.and_then(|index| container.find_by_index(index))
    }
}

impl Command for FindCommand {
    fn execute(
        &self,
        container: &mut Container<ViewRecord>,
        reporter: &mut dyn Reporter,
    ) -> Result<CommandResult> {
        let Some(view) = lookup(container, &self.args.lookup) else {
            reporter.error(&format!(
                "No view found for {}",
                Self::describe_lookup(&self.args.lookup)
            ));
            return Ok(CommandResult::failure(1));
        };

        if self.args.json {
            show_json(reporter, view)?;
        } else {
            reporter.message(&describe(view));
        }

        Ok(CommandResult::success())
    }
}
