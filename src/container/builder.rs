//! Container construction.

use crate::report::{Reporter, TracingReporter};
use crate::view::View;

use super::options::ContainerOptions;
use super::{Container, Initializer, Parser};

/// Builds a [`Container`], optionally seeding it.
///
/// The parser fixes the raw input type `R`, so it is chosen up front with
/// [`ContainerBuilder::with_parser`]; [`ContainerBuilder::new`] uses the
/// identity parser and accepts views directly.
///
/// # Example
///
/// ```
/// use viewsitter::container::ContainerBuilder;
/// use viewsitter::view::ViewRecord;
///
/// let container = ContainerBuilder::with_parser(|name: &str| {
///     (!name.is_empty()).then(|| ViewRecord::new(name))
/// })
/// .build(["header", "", "footer"]);
///
/// assert_eq!(container.len(), 2);
/// ```
pub struct ContainerBuilder<V, R = V> {
    parser: Parser<V, R>,
    initializer: Option<Initializer<V, R>>,
    options: ContainerOptions,
    reporter: Box<dyn Reporter>,
}

impl<V: View + 'static> ContainerBuilder<V> {
    /// Builder whose containers store views as given.
    pub fn new() -> Self {
        Self::with_parser(Some)
    }
}

impl<V: View + 'static> Default for ContainerBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: View, R> ContainerBuilder<V, R> {
    /// Builder whose containers convert raw input with `parser`.
    ///
    /// A parser returning `None` rejects the input.
    pub fn with_parser(parser: impl Fn(R) -> Option<V> + 'static) -> Self {
        Self {
            parser: Box::new(parser),
            initializer: None,
            options: ContainerOptions::default(),
            reporter: Box::new(TracingReporter),
        }
    }

    /// Run `initializer` once, after the initial views have been added.
    pub fn initialize(
        mut self,
        initializer: impl FnOnce(&mut Container<V, R>, &ContainerOptions) + 'static,
    ) -> Self {
        self.initializer = Some(Box::new(initializer));
        self
    }

    /// Replace all plain-data options.
    pub fn options(mut self, options: ContainerOptions) -> Self {
        self.options = options;
        self
    }

    /// Name of the view attribute used as the custom index.
    pub fn custom_index_property(mut self, name: impl Into<String>) -> Self {
        self.options.custom_index_property = name.into();
        self
    }

    /// Where skipped additions are reported.
    pub fn reporter(mut self, reporter: impl Reporter + 'static) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    /// Build the container and add every element of `initial`.
    ///
    /// Elements that fail to parse or validate are reported and skipped.
    pub fn build(self, initial: impl IntoIterator<Item = R>) -> Container<V, R> {
        let mut container = Container::from_parts(self.parser, self.options, self.reporter);

        for raw in initial {
            // Failures were already reported; seeding carries on.
            let _ = container.add(raw, None);
        }

        if let Some(initializer) = self.initializer {
            let options = container.options().clone();
            initializer(&mut container, &options);
        }

        container
    }
}
