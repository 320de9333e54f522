#![forbid(unsafe_code)]

//! Selection of lints for a filtered registry
//!
//! Options are applied in this order of precedence:
//! exclude sources > include sources > name filter > exclude names > include names

use crate::error::FilterError;
use crate::rules::rule::LintDescriptor;
use crate::types::{LintSource, parse_source_list};
use regex::Regex;
use std::collections::HashSet;
use std::sync::Arc;

/// Criteria for deriving a filtered registry
///
/// Only one of `name_filter` or `include_names`/`exclude_names` may be given.
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    /// Keep only lints whose name matches. Exclusive with the name lists.
    pub name_filter: Option<Regex>,
    /// Case sensitive lint names to keep
    pub include_names: Vec<String>,
    /// Case sensitive lint names to drop
    pub exclude_names: Vec<String>,
    pub include_sources: Vec<LintSource>,
    pub exclude_sources: Vec<LintSource>,
}

impl FilterOptions {
    /// Build options from their textual forms
    ///
    /// `name_filter` is a regular expression; the name and source lists are
    /// comma separated, with items trimmed and empty items skipped.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::InvalidPattern` for a bad regex and
    /// `FilterError::UnknownSource` for an unknown source label. Unknown lint
    /// names are only detected when the options are applied to a registry.
    pub fn from_raw(
        name_filter: Option<&str>,
        include_names: &str,
        exclude_names: &str,
        include_sources: &str,
        exclude_sources: &str,
    ) -> Result<Self, FilterError> {
        let name_filter = match name_filter.map(str::trim) {
            Some(pattern) if !pattern.is_empty() => Some(compile_name_filter(pattern)?),
            _ => None,
        };

        Ok(Self {
            name_filter,
            include_names: split_names(include_names),
            exclude_names: split_names(exclude_names),
            include_sources: parse_source_list(include_sources)?,
            exclude_sources: parse_source_list(exclude_sources)?,
        })
    }

    /// Returns true if no criteria are set
    pub fn is_empty(&self) -> bool {
        self.name_filter.is_none()
            && self.include_names.is_empty()
            && self.exclude_names.is_empty()
            && self.include_sources.is_empty()
            && self.exclude_sources.is_empty()
    }

    /// Choose the lints to keep from `candidates`, preserving their order
    ///
    /// `candidates` is the full lint set of the registry being filtered; it
    /// also defines which names are known.
    pub fn select(
        &self,
        candidates: &[Arc<LintDescriptor>],
    ) -> Result<Vec<Arc<LintDescriptor>>, FilterError> {
        if self.name_filter.is_some()
            && (!self.include_names.is_empty() || !self.exclude_names.is_empty())
        {
            return Err(FilterError::ConflictingCriteria);
        }

        let known: HashSet<&str> = candidates.iter().map(|l| l.name.as_str()).collect();
        let name_excludes = names_to_set(&self.exclude_names, &known)?;
        let name_includes = names_to_set(&self.include_names, &known)?;
        let source_excludes: HashSet<LintSource> = self.exclude_sources.iter().copied().collect();
        let source_includes: HashSet<LintSource> = self.include_sources.iter().copied().collect();

        let selected = candidates
            .iter()
            .filter(|lint| {
                if source_excludes.contains(&lint.source) {
                    return false;
                }
                if !source_includes.is_empty() && !source_includes.contains(&lint.source) {
                    return false;
                }
                if let Some(pattern) = &self.name_filter {
                    if !pattern.is_match(&lint.name) {
                        return false;
                    }
                }
                if name_excludes.contains(lint.name.as_str()) {
                    return false;
                }
                if !name_includes.is_empty() && !name_includes.contains(lint.name.as_str()) {
                    return false;
                }
                true
            })
            .cloned()
            .collect();

        Ok(selected)
    }
}

/// Trim each name and check it against the known lint names
fn names_to_set<'a>(
    names: &'a [String],
    known: &HashSet<&str>,
) -> Result<HashSet<&'a str>, FilterError> {
    names
        .iter()
        .map(|name| {
            let name = name.trim();
            if known.contains(name) {
                Ok(name)
            } else {
                Err(FilterError::UnknownRuleName(name.to_string()))
            }
        })
        .collect()
}

/// Compile a name filter pattern
pub fn compile_name_filter(pattern: &str) -> Result<Regex, FilterError> {
    Regex::new(pattern).map_err(|e| FilterError::InvalidPattern(e.to_string()))
}

/// Split a comma separated list of lint names, trimming each item and
/// skipping empty ones
pub fn split_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
