//! Mock reporter for testing.
//!
//! `MockReporter` captures every diagnostic for later assertion. Clones
//! share one buffer, so a test can hand a clone to a container and keep
//! the original for inspection.

use std::cell::RefCell;
use std::rc::Rc;

use super::Reporter;

#[derive(Debug, Default)]
struct Captured {
    messages: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

/// Capturing reporter.
#[derive(Debug, Default, Clone)]
pub struct MockReporter {
    captured: Rc<RefCell<Captured>>,
}

impl MockReporter {
    /// Create an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured messages.
    pub fn messages(&self) -> Vec<String> {
        self.captured.borrow().messages.clone()
    }

    /// Get all captured warnings.
    pub fn warnings(&self) -> Vec<String> {
        self.captured.borrow().warnings.clone()
    }

    /// Get all captured errors.
    pub fn errors(&self) -> Vec<String> {
        self.captured.borrow().errors.clone()
    }

    /// Check whether any captured line of any kind contains `needle`.
    pub fn has_output(&self, needle: &str) -> bool {
        let captured = self.captured.borrow();
        captured
            .messages
            .iter()
            .chain(&captured.warnings)
            .chain(&captured.errors)
            .any(|line| line.contains(needle))
    }
}

impl Reporter for MockReporter {
    fn message(&mut self, msg: &str) {
        self.captured.borrow_mut().messages.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.captured.borrow_mut().warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.captured.borrow_mut().errors.push(msg.to_string());
    }
}
