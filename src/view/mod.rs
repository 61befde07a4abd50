//! The view contract.
//!
//! The container never renders, closes or otherwise drives a view. It reads
//! an identity token, two optional relation tokens and, on demand, a named
//! attribute off each view. Those capabilities are expressed by the
//! [`View`] trait; [`ViewRecord`] is a plain data implementation used by the
//! manifest loader and the CLI.
//!
//! # Example
//!
//! ```
//! use viewsitter::view::{Cid, IndexKey, View, ViewRecord};
//!
//! let view = ViewRecord::new("view1")
//!     .with_model("model1")
//!     .with_attribute("customIndex", "sidebar");
//!
//! assert_eq!(view.cid(), &Cid::from("view1"));
//! assert_eq!(view.model(), Some(&Cid::from("model1")));
//! assert_eq!(view.attribute("customIndex"), Some(IndexKey::from("sidebar")));
//! ```

pub mod record;

pub use record::ViewRecord;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Borrow;
use std::fmt;

/// Identity token of a view, model or collection.
///
/// Assigned externally and stable for the lifetime of the object it names.
/// An empty token is not a recognizable identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cid(String);

impl Cid {
    /// Create a token from any string-like value.
    pub fn new(cid: impl Into<String>) -> Self {
        Self(cid.into())
    }

    /// Borrow the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the token is empty (and therefore unusable as an identity).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Cid {
    fn from(cid: &str) -> Self {
        Self(cid.to_string())
    }
}

impl From<String> for Cid {
    fn from(cid: String) -> Self {
        Self(cid)
    }
}

impl Borrow<str> for Cid {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Anything that exposes an identity token.
///
/// Models and collections implement this so views can be looked up by the
/// object they are attached to.
pub trait Identified {
    /// The object's identity token.
    fn cid(&self) -> &Cid;
}

impl Identified for Cid {
    fn cid(&self) -> &Cid {
        self
    }
}

/// Application-defined secondary key.
///
/// Deserializes from any YAML/JSON scalar except floats and null.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndexKey {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl IndexKey {
    /// Convert a JSON scalar into a key. Floats, null, arrays and objects
    /// are not hashable keys.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(Self::Bool(*b)),
            Value::Number(n) => n.as_i64().map(Self::Int),
            Value::String(s) => Some(Self::Str(s.clone())),
            _ => None,
        }
    }

    /// Read a key typed on a command line: integers and booleans are
    /// recognized, anything else is a string.
    pub fn parse(raw: &str) -> Self {
        if let Ok(i) = raw.parse::<i64>() {
            Self::Int(i)
        } else if let Ok(b) = raw.parse::<bool>() {
            Self::Bool(b)
        } else {
            Self::Str(raw.to_string())
        }
    }

    /// Render the key as a JSON value.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Bool(b) => Value::Bool(*b),
            Self::Int(i) => Value::from(*i),
            Self::Str(s) => Value::String(s.clone()),
        }
    }
}

impl From<&str> for IndexKey {
    fn from(key: &str) -> Self {
        Self::Str(key.to_string())
    }
}

impl From<String> for IndexKey {
    fn from(key: String) -> Self {
        Self::Str(key)
    }
}

impl From<i64> for IndexKey {
    fn from(key: i64) -> Self {
        Self::Int(key)
    }
}

impl From<i32> for IndexKey {
    fn from(key: i32) -> Self {
        Self::Int(i64::from(key))
    }
}

impl From<bool> for IndexKey {
    fn from(key: bool) -> Self {
        Self::Bool(key)
    }
}

impl fmt::Display for IndexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(i) => write!(f, "{}", i),
            Self::Str(s) => f.write_str(s),
        }
    }
}

/// Capabilities the container needs from a stored view.
///
/// Only [`View::cid`] is required. The relation accessors return the
/// identity token of the attached model or collection.
pub trait View {
    /// The view's identity token.
    fn cid(&self) -> &Cid;

    /// Identity token of the attached model, if any.
    fn model(&self) -> Option<&Cid> {
        None
    }

    /// Identity token of the attached collection, if any.
    fn collection(&self) -> Option<&Cid> {
        None
    }

    /// Read a named attribute usable as a custom index.
    fn attribute(&self, _name: &str) -> Option<IndexKey> {
        None
    }

    /// Call a named method on the view.
    ///
    /// Returns `None` when the view has no such method. A method that
    /// produces nothing returns `Some(Value::Null)`.
    fn invoke(&mut self, _method: &str, _args: &[Value]) -> Option<Value> {
        None
    }
}

impl<T: View + ?Sized> View for Box<T> {
    fn cid(&self) -> &Cid {
        (**self).cid()
    }

    fn model(&self) -> Option<&Cid> {
        (**self).model()
    }

    fn collection(&self) -> Option<&Cid> {
        (**self).collection()
    }

    fn attribute(&self, name: &str) -> Option<IndexKey> {
        (**self).attribute(name)
    }

    fn invoke(&mut self, method: &str, args: &[Value]) -> Option<Value> {
        (**self).invoke(method, args)
    }
}
