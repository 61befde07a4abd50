//! Container configuration.

use serde::{Deserialize, Serialize};

/// Attribute read for the custom index when `add` gets no explicit key.
pub const DEFAULT_CUSTOM_INDEX_PROPERTY: &str = "customIndex";

/// Plain-data container options.
///
/// Hooks (parser, initializer, reporter) are not data and live on
/// [`ContainerBuilder`](super::ContainerBuilder) instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerOptions {
    /// Name of the view attribute used as the custom index.
    pub custom_index_property: String,
}

impl Default for ContainerOptions {
    fn default() -> Self {
        Self {
            custom_index_property: DEFAULT_CUSTOM_INDEX_PROPERTY.to_string(),
        }
    }
}
