//! View manifests.
//!
//! A manifest is a YAML file describing container options and a list of
//! views. The CLI loads one to build a [`Container`] to inspect.
//!
//! ```yaml
//! options:
//!   custom_index_property: customIndex
//! views:
//!   - cid: view1
//!     model: m1
//!     attributes:
//!       customIndex: sidebar
//!   - cid: view2
//!     collection: c1
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::container::{Container, ContainerOptions};
use crate::error::{Result, SitterError};
use crate::report::Reporter;
use crate::view::ViewRecord;

/// Manifest file name looked up in the working directory.
pub const DEFAULT_MANIFEST: &str = "views.yml";

/// Parsed manifest contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Container options.
    pub options: ContainerOptions,

    /// Views in seeding order.
    pub views: Vec<ViewRecord>,
}

impl Manifest {
    /// Resolve the manifest path: `explicit` when given, else
    /// [`DEFAULT_MANIFEST`] under `root`.
    pub fn locate(root: &Path, explicit: Option<&Path>) -> PathBuf {
        match explicit {
            Some(path) if path.is_absolute() => path.to_path_buf(),
            Some(path) => root.join(path),
            None => root.join(DEFAULT_MANIFEST),
        }
    }

    /// Load a manifest from disk.
    ///
    /// # Errors
    ///
    /// Returns `ManifestNotFound` if the file doesn't exist,
    /// `ManifestUnreadable` if it exists but can't be read, and
    /// `ManifestParseError` if the YAML is invalid.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SitterError::ManifestNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                SitterError::ManifestUnreadable {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }
            }
        })?;

        Self::parse(&content, path)
    }

    /// Parse manifest YAML. `origin` is only used in error messages.
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| SitterError::ManifestParseError {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Build a container seeded with the manifest's views.
    pub fn into_container(self, reporter: impl Reporter + 'static) -> Container<ViewRecord> {
        let count = self.views.len();
        let container = Container::builder()
            .options(self.options)
            .reporter(reporter)
            .build(self.views);

        tracing::debug!("Seeded {} of {} manifest views", container.len(), count);
        container
    }
}
