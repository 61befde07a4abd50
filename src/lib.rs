//! viewsitter - a multi-index registry for transient child views.
//!
//! A [`Container`] stores views by identity token and indexes them by
//! attached model, attached collection and an application-defined custom
//! key. It can broadcast method calls to every stored view and hands out
//! its contents as an ordered sequence for standard iterator adapters.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface for inspecting view manifests
//! - [`container`] - The multi-index container and its builder
//! - [`error`] - Error types and result aliases
//! - [`manifest`] - YAML view manifests
//! - [`report`] - Injectable reporting collaborators
//! - [`view`] - The view contract and a data-backed view
//!
//! # Example
//!
//! ```
//! use viewsitter::{Cid, Container, IndexKey, ViewRecord};
//!
//! let mut container = Container::from_views([
//!     ViewRecord::new("v1").with_model("m1").with_attribute("customIndex", "x"),
//!     ViewRecord::new("v2").with_model("m2"),
//! ]);
//!
//! assert_eq!(container.len(), 2);
//! assert_eq!(container.find_by_custom(&IndexKey::from("x")).unwrap().cid.as_str(), "v1");
//!
//! let v1 = container.find_by_cid("v1").cloned().unwrap();
//! container.remove(&v1);
//! assert!(container.find_by_model(&Cid::from("m1")).is_none());
//! assert_eq!(container.len(), 1);
//! ```

pub mod cli;
pub mod container;
pub mod error;
pub mod manifest;
pub mod report;
pub mod view;

pub use container::{Container, ContainerBuilder, ContainerOptions};
pub use error::{Result, SitterError};
pub use view::{Cid, Identified, IndexKey, View, ViewRecord};
