#![forbid(unsafe_code)]

//! Per-certificate report of lint outcomes

use crate::rules::LintResult;
use crate::types::LintStatus;
use chrono::Utc;
use serde::Serialize;
use std::collections::BTreeMap;

/// Bumped whenever the serialized shape of [`ResultSet`] changes
pub const RESULT_SET_VERSION: i64 = 3;

/// The output of running the lints in a registry against one certificate
///
/// The `*_present` flags always reflect the current entries: each is true
/// iff at least one result has exactly that status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultSet {
    version: i64,
    notices_present: bool,
    warnings_present: bool,
    errors_present: bool,
    fatals_present: bool,
    #[serde(rename = "lints")]
    results: BTreeMap<String, LintResult>,
    /// Unix seconds when linting started
    #[serde(rename = "timestamp")]
    start_timestamp: i64,
    /// Unix seconds when the last lint finished
    end_timestamp: i64,
}

impl ResultSet {
    /// Creates an empty result set stamped with the current time
    pub fn new() -> Self {
        let now = Utc::now().timestamp();
        Self {
            version: RESULT_SET_VERSION,
            notices_present: false,
            warnings_present: false,
            errors_present: false,
            fatals_present: false,
            results: BTreeMap::new(),
            start_timestamp: now,
            end_timestamp: now,
        }
    }

    /// Record the result of one lint
    ///
    /// Replacing an existing entry recomputes the flags so a stale status
    /// never leaves a flag set.
    pub fn add_result(&mut self, lint_name: impl Into<String>, result: LintResult) {
        let status = result.status;
        if let Some(previous) = self.results.insert(lint_name.into(), result) {
            if previous.status != status {
                self.recompute_flags();
                return;
            }
        }
        self.mark(status);
    }

    fn mark(&mut self, status: LintStatus) {
        match status {
            LintStatus::Notice => self.notices_present = true,
            LintStatus::Warn => self.warnings_present = true,
            LintStatus::Error => self.errors_present = true,
            LintStatus::Fatal => self.fatals_present = true,
            _ => {}
        }
    }

    fn recompute_flags(&mut self) {
        self.notices_present = false;
        self.warnings_present = false;
        self.errors_present = false;
        self.fatals_present = false;
        let statuses: Vec<LintStatus> = self.results.values().map(|r| r.status).collect();
        for status in statuses {
            self.mark(status);
        }
    }

    /// Stamp the end of the run
    pub fn finish(&mut self) {
        self.end_timestamp = Utc::now().timestamp();
    }

    /// Results whose status is strictly above `threshold`
    pub fn above(&self, threshold: LintStatus) -> BTreeMap<String, LintResult> {
        self.results
            .iter()
            .filter(|(_, result)| result.status > threshold)
            .map(|(name, result)| (name.clone(), result.clone()))
            .collect()
    }

    /// A new result set holding only the results strictly above `threshold`
    ///
    /// Timestamps are carried over; flags are derived from the kept results.
    pub fn filtered_above(&self, threshold: LintStatus) -> ResultSet {
        let mut filtered = self.clone_header();
        for (name, result) in self.above(threshold) {
            filtered.add_result(name, result);
        }
        filtered
    }

    fn clone_header(&self) -> ResultSet {
        ResultSet {
            version: self.version,
            notices_present: false,
            warnings_present: false,
            errors_present: false,
            fatals_present: false,
            results: BTreeMap::new(),
            start_timestamp: self.start_timestamp,
            end_timestamp: self.end_timestamp,
        }
    }

    pub fn version(&self) -> i64 {
        self.version
    }

    /// All results keyed by lint name
    pub fn results(&self) -> &BTreeMap<String, LintResult> {
        &self.results
    }

    pub fn get(&self, lint_name: &str) -> Option<&LintResult> {
        self.results.get(lint_name)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn notices_present(&self) -> bool {
        self.notices_present
    }

    pub fn warnings_present(&self) -> bool {
        self.warnings_present
    }

    pub fn errors_present(&self) -> bool {
        self.errors_present
    }

    pub fn fatals_present(&self) -> bool {
        self.fatals_present
    }

    pub fn start_timestamp(&self) -> i64 {
        self.start_timestamp
    }

    pub fn end_timestamp(&self) -> i64 {
        self.end_timestamp
    }
}

impl Default for ResultSet {
    fn default() -> Self {
        Self::new()
    }
}
