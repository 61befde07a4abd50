//! Shared display helpers for view output.
//!
//! Used by `list`, `find`, `pluck` and `call` so a view renders the same
//! way everywhere.

use serde_json::Value;

use crate::error::Result;
use crate::report::Reporter;
use crate::view::{IndexKey, ViewRecord};

/// Placeholder for an absent relation or value.
pub const ABSENT: &str = "-";

/// One-line description of a view.
pub fn describe(view: &ViewRecord) -> String {
    let mut line = format!(
        "{}  model={}  collection={}",
        view.cid,
        view.model.as_ref().map(|c| c.as_str()).unwrap_or(ABSENT),
        view.collection.as_ref().map(|c| c.as_str()).unwrap_or(ABSENT),
    );

    if !view.attributes.is_empty() {
        let attrs: Vec<String> = view
            .attributes
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect();
        line.push_str("  ");
        line.push_str(&attrs.join(","));
    }

    line
}

/// Display an optional key.
pub fn key_or_absent(key: Option<&IndexKey>) -> String {
    key.map(|k| k.to_string())
        .unwrap_or_else(|| ABSENT.to_string())
}

/// Parse a command-line argument as JSON, falling back to a plain string.
pub fn parse_arg(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Print a value as pretty JSON.
pub fn show_json<T: serde::Serialize + ?Sized>(reporter: &mut dyn Reporter, value: &T) -> Result<()> {
    reporter.message(&serde_json::to_string_pretty(value)?);
    Ok(())
}
