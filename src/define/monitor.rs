use crate::define::queue::EvalQueue;
use miette::Diagnostic;
use thiserror::Error;

/// Evaluations that never succeeded before the builder finished.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("Could not eval {}", .names.join(", "))]
#[diagnostic(
    code(define::unresolved),
    severity(Warning),
    help("define the properties these evaluations read before the builder finishes")
)]
pub struct UnresolvedEvaluations {
    pub names: Vec<String>,
}

/// End-of-chain check over the eval queue. Fires at most once.
#[derive(Debug, Default)]
pub struct CompletionMonitor {
    checked: bool,
}

impl CompletionMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn check(&mut self, queue: &EvalQueue) -> Option<UnresolvedEvaluations> {
        if std::mem::replace(&mut self.checked, true) || queue.is_empty() {
            return None;
        }
        Some(UnresolvedEvaluations {
            names: queue.names(),
        })
    }
}
