//! Plain data-backed view.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::{Cid, IndexKey, View};

/// A view described entirely by data.
///
/// Supports four methods through [`View::invoke`]:
/// - `render` bumps and returns the render counter
/// - `get <name>` returns an attribute (or null)
/// - `set <name> <value>` stores a scalar attribute and returns the previous one
/// - `close` does nothing and returns null
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewRecord {
    /// Identity token.
    pub cid: Cid,

    /// Attached model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<Cid>,

    /// Attached collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<Cid>,

    /// Free-form attributes, any of which may serve as a custom index.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, IndexKey>,

    /// Number of times `render` was invoked.
    #[serde(default)]
    pub renders: u64,
}

impl ViewRecord {
    /// Create a view with no relations or attributes.
    pub fn new(cid: impl Into<Cid>) -> Self {
        Self {
            cid: cid.into(),
            model: None,
            collection: None,
            attributes: BTreeMap::new(),
            renders: 0,
        }
    }

    /// Attach a model.
    pub fn with_model(mut self, model: impl Into<Cid>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Attach a collection.
    pub fn with_collection(mut self, collection: impl Into<Cid>) -> Self {
        self.collection = Some(collection.into());
        self
    }

    /// Set an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<IndexKey>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    fn set(&mut self, args: &[Value]) -> Value {
        let name = match args.first().and_then(Value::as_str) {
            Some(name) => name,
            None => return Value::Null,
        };
        let value = match args.get(1).and_then(IndexKey::from_json) {
            Some(value) => value,
            None => return Value::Null,
        };
        self.attributes
            .insert(name.to_string(), value)
            .map(|previous| previous.to_json())
            .unwrap_or(Value::Null)
    }
}

impl View for ViewRecord {
    fn cid(&self) -> &Cid {
        &self.cid
    }

    fn model(&self) -> Option<&Cid> {
        self.model.as_ref()
    }

    fn collection(&self) -> Option<&Cid> {
        self.collection.as_ref()
    }

    fn attribute(&self, name: &str) -> Option<IndexKey> {
        self.attributes.get(name).cloned()
    }

    fn invoke(&mut self, method: &str, args: &[Value]) -> Option<Value> {
        match method {
            "render" => {
                self.renders += 1;
                Some(Value::from(self.renders))
            }
            "get" => Some(
                args.first()
                    .and_then(Value::as_str)
                    .and_then(|name| self.attributes.get(name))
                    .map(IndexKey::to_json)
                    .unwrap_or(Value::Null),
            ),
            "set" => Some(self.set(args)),
            "close" => Some(Value::Null),
            _ => None,
        }
    }
}
