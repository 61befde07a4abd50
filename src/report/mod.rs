//! Reporting collaborators.
//!
//! A container never writes to a process-wide sink on its own. Diagnostics
//! for skipped additions go through the [`Reporter`] injected at
//! construction, which defaults to [`TracingReporter`].
//!
//! - [`TracingReporter`] forwards to `tracing`
//! - [`NoopReporter`] discards everything
//! - [`TerminalReporter`] writes styled lines for the CLI
//! - [`MockReporter`] captures everything for assertions
//!
//! # Example
//!
//! ```
//! use viewsitter::report::{MockReporter, Reporter};
//!
//! let mock = MockReporter::new();
//! let mut reporter: Box<dyn Reporter> = Box::new(mock.clone());
//! reporter.warning("skipped view");
//!
//! assert_eq!(mock.warnings(), vec!["skipped view".to_string()]);
//! ```

pub mod mock;
pub mod terminal;

pub use mock::MockReporter;
pub use terminal::TerminalReporter;

/// Sink for user-facing diagnostics.
pub trait Reporter {
    /// Informational output.
    fn message(&mut self, msg: &str);

    /// Something was skipped but processing continues.
    fn warning(&mut self, msg: &str);

    /// Something failed.
    fn error(&mut self, msg: &str);
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn message(&mut self, msg: &str) {
        tracing::info!("{}", msg);
    }

    fn warning(&mut self, msg: &str) {
        tracing::warn!("{}", msg);
    }

    fn error(&mut self, msg: &str) {
        tracing::error!("{}", msg);
    }
}

/// Discards all diagnostics.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl Reporter for NoopReporter {
    fn message(&mut self, _msg: &str) {}

    fn warning(&mut self, _msg: &str) {}

    fn error(&mut self, _msg: &str) {}
}
