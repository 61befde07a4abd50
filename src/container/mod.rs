//! Multi-index view container.
//!
//! A [`Container`] stores views by identity token and keeps three secondary
//! indexes: the attached model, the attached collection, and an
//! application-defined custom key.
//!
//! # Index rules
//!
//! - Every index entry points at a view currently stored in the container.
//! - Secondary indexes are last-write-wins: when two views share a model,
//!   collection or custom key, the index points at whichever was added last.
//!   The earlier view stays stored and reachable by cid.
//! - Removing a view deletes only the entries that still point at it.
//! - A cid owns at most one entry per index. Re-adding a view clears its old
//!   entries before indexing it again.
//! - Empty model and collection tokens are not indexed.
//!
//! Relations are read when a view is added. A view whose model or custom
//! attribute changes afterwards must be re-added to be re-indexed.
//!
//! # Example
//!
//! ```
//! use viewsitter::container::Container;
//! use viewsitter::view::{Cid, IndexKey, ViewRecord};
//!
//! let mut container = Container::new();
//! container.add(ViewRecord::new("v1").with_model("m1"), None).unwrap();
//! container.add(ViewRecord::new("v2").with_model("m1"), Some("main".into())).unwrap();
//!
//! assert_eq!(container.len(), 2);
//! assert_eq!(container.find_by_model(&Cid::from("m1")).unwrap().cid.as_str(), "v2");
//! assert_eq!(container.find_by_custom(&IndexKey::from("main")).unwrap().cid.as_str(), "v2");
//! ```

pub mod builder;
pub mod options;

pub use builder::ContainerBuilder;
pub use options::{ContainerOptions, DEFAULT_CUSTOM_INDEX_PROPERTY};

use indexmap::{map::Values, Equivalent, IndexMap};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::error::{Result, SitterError};
use crate::report::Reporter;
use crate::view::{Cid, Identified, IndexKey, View};

/// Converts raw input into a storable view; `None` rejects the input.
pub type Parser<V, R> = Box<dyn Fn(R) -> Option<V>>;

/// One-time setup hook run after the initial views are added.
pub type Initializer<V, R> = Box<dyn FnOnce(&mut Container<V, R>, &ContainerOptions)>;

/// Index keys a view was filed under when it was added.
#[derive(Debug, Default)]
struct Filed {
    model: Option<Cid>,
    collection: Option<Cid>,
    custom: Option<IndexKey>,
}

/// Registry of views with model, collection and custom-key indexes.
///
/// `R` is the raw input type accepted by [`Container::add`]. It defaults to
/// `V`, in which case views are stored as given.
pub struct Container<V, R = V> {
    views: IndexMap<Cid, V>,
    by_model: HashMap<Cid, Cid>,
    by_collection: HashMap<Cid, Cid>,
    by_custom: HashMap<IndexKey, Cid>,
    filed: HashMap<Cid, Filed>,
    options: ContainerOptions,
    parser: Parser<V, R>,
    reporter: Box<dyn Reporter>,
}

impl<V: View + 'static> Container<V> {
    /// Create an empty container that stores views as given.
    pub fn new() -> Self {
        ContainerBuilder::new().build([])
    }

    /// Create a container seeded with `views`.
    pub fn from_views(views: impl IntoIterator<Item = V>) -> Self {
        ContainerBuilder::new().build(views)
    }

    /// Start configuring a container that stores views as given.
    pub fn builder() -> ContainerBuilder<V> {
        ContainerBuilder::new()
    }
}

impl<V: View + 'static> Default for Container<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: View, R> Container<V, R> {
    pub(crate) fn from_parts(
        parser: Parser<V, R>,
        options: ContainerOptions,
        reporter: Box<dyn Reporter>,
    ) -> Self {
        Self {
            views: IndexMap::new(),
            by_model: HashMap::new(),
            by_collection: HashMap::new(),
            by_custom: HashMap::new(),
            filed: HashMap::new(),
            options,
            parser,
            reporter,
        }
    }

    /// The plain-data options this container was built with.
    pub fn options(&self) -> &ContainerOptions {
        &self.options
    }

    /// Add a view, converting it with the parser first.
    ///
    /// The custom index is `custom_index` when given, otherwise the view's
    /// attribute named by [`ContainerOptions::custom_index_property`], and
    /// absent when neither exists.
    ///
    /// A view with an already stored cid replaces the stored one in place.
    ///
    /// # Errors
    ///
    /// Returns [`SitterError::InvalidInput`] when the parser rejects `raw`
    /// and [`SitterError::NotAnItem`] when the view has an empty cid. Either
    /// failure is also sent to the reporter, and the container is unchanged.
    pub fn add(&mut self, raw: R, custom_index: Option<IndexKey>) -> Result<&V> {
        let view = match (self.parser)(raw) {
            Some(view) => view,
            None => {
                return Err(self.reject(SitterError::InvalidInput {
                    reason: "parser produced no view".to_string(),
                }))
            }
        };

        if view.cid().is_empty() {
            return Err(self.reject(SitterError::NotAnItem {
                reason: "view has an empty cid".to_string(),
            }));
        }

        let cid = view.cid().clone();
        let custom_index =
            custom_index.or_else(|| view.attribute(&self.options.custom_index_property));

        self.unindex(&cid);

        let filed = Filed {
            model: view.model().filter(|m| !m.is_empty()).cloned(),
            collection: view.collection().filter(|c| !c.is_empty()).cloned(),
            custom: custom_index,
        };
        if let Some(model) = &filed.model {
            self.by_model.insert(model.clone(), cid.clone());
        }
        if let Some(collection) = &filed.collection {
            self.by_collection.insert(collection.clone(), cid.clone());
        }
        if let Some(key) = &filed.custom {
            self.by_custom.insert(key.clone(), cid.clone());
        }
        self.filed.insert(cid.clone(), filed);

        tracing::debug!("Added view {}", cid);

        // Replacing an existing cid keeps its position.
        let (index, _) = self.views.insert_full(cid, view);
        Ok(&self.views[index])
    }

    /// Forget `view`, returning the stored instance.
    ///
    /// Unknown views and views with an empty cid are ignored.
    pub fn remove<T: View + ?Sized>(&mut self, view: &T) -> Option<V> {
        self.remove_by_cid(view.cid())
    }

    /// Forget the view stored under `cid`, returning it.
    pub fn remove_by_cid(&mut self, cid: &Cid) -> Option<V> {
        if cid.is_empty() {
            tracing::trace!("Ignoring removal of a view without a cid");
            return None;
        }

        let Some(view) = self.views.shift_remove(cid) else {
            tracing::trace!("Ignoring removal of unknown view {}", cid);
            return None;
        };

        self.unindex(cid);
        tracing::debug!("Removed view {}", cid);
        Some(view)
    }

    /// Look up a view by its cid.
    pub fn find_by_cid<Q>(&self, cid: &Q) -> Option<&V>
    where
        Q: ?Sized + Hash + Equivalent<Cid>,
    {
        self.views.get(cid)
    }

    /// Look up a view by its cid for in-place changes.
    ///
    /// Indexes are not refreshed; re-add the view if its relations change.
    pub fn find_by_cid_mut<Q>(&mut self, cid: &Q) -> Option<&mut V>
    where
        Q: ?Sized + Hash + Equivalent<Cid>,
    {
        self.views.get_mut(cid)
    }

    /// The view most recently added for `model`.
    pub fn find_by_model<M: Identified + ?Sized>(&self, model: &M) -> Option<&V> {
        self.by_model
            .get(model.cid())
            .and_then(|cid| self.views.get(cid))
    }

    /// The view most recently added for `collection`.
    pub fn find_by_collection<C: Identified + ?Sized>(&self, collection: &C) -> Option<&V> {
        self.by_collection
            .get(collection.cid())
            .and_then(|cid| self.views.get(cid))
    }

    /// The view most recently added under the custom key.
    pub fn find_by_custom(&self, key: &IndexKey) -> Option<&V> {
        self.by_custom.get(key).and_then(|cid| self.views.get(cid))
    }

    /// The view at `position` in the current iteration order.
    ///
    /// Positions are not stable: removing a view shifts every later view
    /// down by one.
    pub fn find_by_index(&self, position: usize) -> Option<&V> {
        self.views.get_index(position).map(|(_, view)| view)
    }

    /// Call `method` on every view that has it, discarding results.
    pub fn call(&mut self, method: &str, args: &[Value]) {
        let responded = self
            .views
            .values_mut()
            .filter_map(|view| view.invoke(method, args))
            .count();
        tracing::debug!("Called {} on {} of {} views", method, responded, self.views.len());
    }

    /// Like [`Container::call`], taking the arguments as a sequence.
    pub fn apply(&mut self, method: &str, args: impl IntoIterator<Item = Value>) {
        let args: Vec<Value> = args.into_iter().collect();
        self.call(method, &args);
    }

    /// Call `method` on every view and collect the results in order.
    ///
    /// Views without the method contribute `None`.
    pub fn invoke(&mut self, method: &str, args: &[Value]) -> Vec<Option<Value>> {
        self.views
            .values_mut()
            .map(|view| view.invoke(method, args))
            .collect()
    }

    /// Iterate over views in insertion order.
    pub fn iter(&self) -> Values<'_, Cid, V> {
        self.views.values()
    }

    /// Snapshot of the current views in insertion order.
    pub fn views(&self) -> Vec<&V> {
        self.views.values().collect()
    }

    /// Iterate over stored cids in insertion order.
    pub fn cids(&self) -> impl Iterator<Item = &Cid> + '_ {
        self.views.keys()
    }

    /// The earliest stored view.
    pub fn first(&self) -> Option<&V> {
        self.views.first().map(|(_, view)| view)
    }

    /// The view at the end of the iteration order.
    pub fn last(&self) -> Option<&V> {
        self.views.last().map(|(_, view)| view)
    }

    /// Whether a view with this cid is stored.
    pub fn contains<Q>(&self, cid: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<Cid>,
    {
        self.views.contains_key(cid)
    }

    /// Read one attribute from every view, in order.
    pub fn pluck(&self, attribute: &str) -> Vec<Option<IndexKey>> {
        self.views
            .values()
            .map(|view| view.attribute(attribute))
            .collect()
    }

    /// Number of stored views.
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Whether no views are stored.
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Model index: model cid to view cid.
    pub fn model_index(&self) -> &HashMap<Cid, Cid> {
        &self.by_model
    }

    /// Collection index: collection cid to view cid.
    pub fn collection_index(&self) -> &HashMap<Cid, Cid> {
        &self.by_collection
    }

    /// Custom index: custom key to view cid.
    pub fn custom_index(&self) -> &HashMap<IndexKey, Cid> {
        &self.by_custom
    }

    fn reject(&mut self, error: SitterError) -> SitterError {
        self.reporter.warning(&format!("Skipping view: {}", error));
        error
    }

    /// Drop the index entries `cid` was filed under that it still owns.
    fn unindex(&mut self, cid: &Cid) {
        let Some(filed) = self.filed.remove(cid) else {
            return;
        };
        if let Some(model) = filed.model {
            release(&mut self.by_model, &model, cid);
        }
        if let Some(collection) = filed.collection {
            release(&mut self.by_collection, &collection, cid);
        }
        if let Some(key) = filed.custom {
            release(&mut self.by_custom, &key, cid);
        }
    }
}

/// Remove `key` from `index` if it still points at `cid`.
fn release<K: Hash + Eq>(index: &mut HashMap<K, Cid>, key: &K, cid: &Cid) {
    if index.get(key) == Some(cid) {
        index.remove(key);
    }
}

impl<'a, V, R> IntoIterator for &'a Container<V, R> {
    type Item = &'a V;
    type IntoIter = Values<'a, Cid, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.views.values()
    }
}

impl<V, R> fmt::Debug for Container<V, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("cids", &self.views.keys().collect::<Vec<_>>())
            .field("by_model", &self.by_model)
            .field("by_collection", &self.by_collection)
            .field("by_custom", &self.by_custom)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
