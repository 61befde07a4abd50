//! Terminal reporter for the CLI.

use console::Style;

use super::Reporter;

/// Writes messages to stdout and warnings/errors to stderr.
#[derive(Debug, Clone)]
pub struct TerminalReporter {
    warning: Style,
    error: Style,
}

impl TerminalReporter {
    /// Create a reporter, styled when `colors` is true.
    pub fn new(colors: bool) -> Self {
        if colors {
            Self {
                warning: Style::new().color256(208),
                error: Style::new().red().bold(),
            }
        } else {
            Self::plain()
        }
    }

    /// Create an unstyled reporter.
    pub fn plain() -> Self {
        Self {
            warning: Style::new(),
            error: Style::new(),
        }
    }

    /// Format a warning line.
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{} {}", self.warning.apply_to("⚠"), msg)
    }

    /// Format an error line.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{} {}", self.error.apply_to("✗"), msg)
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new(should_use_colors())
    }
}

impl Reporter for TerminalReporter {
    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{}", self.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.format_error(msg));
    }
}

/// Check if colors should be used.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stderr().is_term()
}
