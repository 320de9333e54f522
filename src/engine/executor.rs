#![forbid(unsafe_code)]

//! Execution engine for running lints against a certificate
//!
//! Lints run one after another in name order so repeated runs produce the
//! same report. A panicking lint is contained to its own entry.

use crate::certificate::Certificate;
use crate::engine::result_set::ResultSet;
use crate::rules::{LintDescriptor, LintResult, Registry};
use crate::types::LintStatus;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Runs the lints of one registry
pub struct ExecutionEngine {
    registry: Arc<Registry>,
}

impl ExecutionEngine {
    /// Creates a new ExecutionEngine over the provided registry
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Run every registered lint against the certificate
    pub fn lint(&self, cert: &Certificate) -> ResultSet {
        let lints = self.registry.snapshot();
        let mut result_set = ResultSet::new();

        for lint in &lints {
            result_set.add_result(lint.name.clone(), execute_isolated(lint, cert));
        }

        result_set.finish();
        tracing::debug!(
            lints = lints.len(),
            errors = result_set.errors_present(),
            fatals = result_set.fatals_present(),
            "linted certificate"
        );
        result_set
    }

    /// Run a single named lint against the certificate
    ///
    /// An unknown name yields an empty result set.
    pub fn lint_by_name(&self, lint_name: &str, cert: &Certificate) -> ResultSet {
        let mut result_set = ResultSet::new();

        match self.registry.get(lint_name) {
            Some(lint) => result_set.add_result(lint_name, execute_isolated(&lint, cert)),
            None => tracing::debug!(lint = lint_name, "no lint registered under this name"),
        }

        result_set.finish();
        result_set
    }
}

/// Execute one lint, turning a panic into a `Fatal` result
fn execute_isolated(lint: &LintDescriptor, cert: &Certificate) -> LintResult {
    match panic::catch_unwind(AssertUnwindSafe(|| lint.execute(cert))) {
        Ok(result) => result,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            tracing::error!(lint = %lint.name, %message, "lint panicked");
            LintResult::with_details(LintStatus::Fatal, format!("lint panicked: {}", message))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
