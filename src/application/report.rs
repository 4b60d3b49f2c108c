//! Output of a demonstration, decoupled from printing

use std::fmt::Display;

use tracing::debug;

use crate::application::catalog::DemoKind;
use crate::domain::CollectionResult;

/// Lines a demonstration produced, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    pub demo: DemoKind,
    pub lines: Vec<String>,
}

impl DemoReport {
    pub fn new(demo: DemoKind) -> Self {
        Self {
            demo,
            lines: Vec::new(),
        }
    }

    pub fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Record the outcome of a deliberate misuse.
    ///
    /// The misuse is expected to fail; success is reported as such instead of
    /// being hidden.
    pub fn misuse<T>(&mut self, label: &str, outcome: CollectionResult<T>) {
        match outcome {
            Err(e) => {
                debug!(demo = %self.demo, label, error = %e, "misuse rejected");
                self.line(format!("{label}: rejected ({e})"));
            }
            Ok(_) => self.line(format!("{label}: unexpectedly accepted")),
        }
    }

    /// Append one line per item.
    pub fn lines<I>(&mut self, items: I)
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.lines.extend(items.into_iter().map(|item| item.to_string()));
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CollectionError;

    #[test]
    fn given_failed_misuse_when_recorded_then_error_is_in_line() {
        let mut report = DemoReport::new(DemoKind::ArrayView);
        report.misuse::<()>(
            "view.push",
            Err(CollectionError::UnsupportedOperation { operation: "push" }),
        );
        assert_eq!(
            report.lines,
            vec!["view.push: rejected (unsupported operation on fixed-size view: push)"]
        );
    }

    #[test]
    fn given_successful_misuse_when_recorded_then_flagged() {
        let mut report = DemoReport::new(DemoKind::ArrayView);
        report.misuse("noop", Ok(()));
        assert!(report.contains("unexpectedly accepted"));
    }
}
