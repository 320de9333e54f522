#![forbid(unsafe_code)]

//! Lint registry
//!
//! The Registry is responsible for:
//! - Validating and registering lints, running their one-time initializer
//! - Keeping the name index, sorted name list and source index consistent
//! - Providing access to lints by name and by source
//! - Deriving filtered sub-registries
//! - Exporting lint descriptors as JSON lines

use crate::error::{FilterError, RegistryError};
use crate::rules::filter::FilterOptions;
use crate::rules::rule::LintDescriptor;
use crate::types::LintSource;
use std::collections::HashMap;
use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// The three indexes guarded together by the registry lock
#[derive(Default)]
struct RegistryIndex {
    by_name: HashMap<String, Arc<LintDescriptor>>,
    /// Keys of `by_name`, sorted lexicographically
    names: Vec<String>,
    by_source: HashMap<LintSource, Vec<Arc<LintDescriptor>>>,
}

/// Thread-safe collection of lints keyed by unique name
///
/// Registration may race with other registrations and with reads; a single
/// lock keeps every index in step so readers never see a name present in
/// one index but missing from another.
#[derive(Default)]
pub struct Registry {
    index: RwLock<RegistryIndex>,
}

impl Registry {
    /// Create a new empty Registry
    pub fn new() -> Self {
        Self::default()
    }

    // Every mutation finishes before its guard drops, so a poisoned lock
    // still holds consistent indexes.
    fn read(&self) -> RwLockReadGuard<'_, RegistryIndex> {
        self.index.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, RegistryIndex> {
        self.index.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a lint
    ///
    /// When `initialize` is true the lint's initializer runs before it is
    /// inserted, and nothing is inserted if it fails.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError` if:
    /// - The name is empty or blank
    /// - A lint with the same name is already registered
    /// - The initializer fails
    pub fn register(
        &self,
        lint: impl Into<Arc<LintDescriptor>>,
        initialize: bool,
    ) -> Result<(), RegistryError> {
        let lint = lint.into();

        if lint.name.trim().is_empty() {
            return Err(RegistryError::InvalidDescriptor(
                "can not register a lint with an empty name".to_string(),
            ));
        }
        if self.contains(&lint.name) {
            return Err(RegistryError::DuplicateName(lint.name.clone()));
        }

        if initialize {
            lint.lint
                .initialize()
                .map_err(|source| RegistryError::InitializationFailed {
                    name: lint.name.clone(),
                    source,
                })?;
        }

        let mut index = self.write();
        // Re-checked under the write lock: another thread may have won the race
        if index.by_name.contains_key(&lint.name) {
            return Err(RegistryError::DuplicateName(lint.name.clone()));
        }
        let position = index
            .names
            .binary_search(&lint.name)
            .unwrap_or_else(|pos| pos);
        index.names.insert(position, lint.name.clone());
        index
            .by_source
            .entry(lint.source)
            .or_default()
            .push(Arc::clone(&lint));
        index.by_name.insert(lint.name.clone(), Arc::clone(&lint));
        drop(index);

        tracing::debug!(lint = %lint.name, source = %lint.source, initialize, "registered lint");
        Ok(())
    }

    /// Get a lint by name
    ///
    /// Returns `None` if no lint with that name is registered.
    pub fn get(&self, name: &str) -> Option<Arc<LintDescriptor>> {
        self.read().by_name.get(name).cloned()
    }

    /// Returns true if a lint with this name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.read().by_name.contains_key(name)
    }

    /// All registered lint names in sorted order
    pub fn names(&self) -> Vec<String> {
        self.read().names.clone()
    }

    /// Sources that have at least one registered lint
    ///
    /// The list is not sorted; callers can sort it if required.
    pub fn sources(&self) -> Vec<LintSource> {
        self.read().by_source.keys().copied().collect()
    }

    /// All lints registered under a source, in registration order
    pub fn lints_by_source(&self, source: LintSource) -> Vec<Arc<LintDescriptor>> {
        self.read()
            .by_source
            .get(&source)
            .cloned()
            .unwrap_or_default()
    }

    /// Consistent copy of every lint in name order
    pub fn snapshot(&self) -> Vec<Arc<LintDescriptor>> {
        let index = self.read();
        index
            .names
            .iter()
            .filter_map(|name| index.by_name.get(name).cloned())
            .collect()
    }

    /// Get the number of lints in the registry
    pub fn len(&self) -> usize {
        self.read().names.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.read().names.is_empty()
    }

    /// Derive a registry holding only the lints selected by `opts`
    ///
    /// Empty options return this same registry rather than a copy. Selected
    /// lints are shared with this registry and are not initialized again.
    ///
    /// # Errors
    ///
    /// Returns `FilterError` if the options are contradictory or name a lint
    /// that is not registered.
    pub fn filter(self: &Arc<Self>, opts: &FilterOptions) -> Result<Arc<Registry>, FilterError> {
        if opts.is_empty() {
            return Ok(Arc::clone(self));
        }

        let snapshot = self.snapshot();
        let selected = opts.select(&snapshot)?;

        let filtered = Registry::new();
        for lint in &selected {
            filtered.register(Arc::clone(lint), false)?;
        }

        tracing::debug!(
            kept = selected.len(),
            dropped = snapshot.len() - selected.len(),
            "filtered registry"
        );
        Ok(Arc::new(filtered))
    }

    /// Write a description of each lint as JSON, one object per line, in
    /// name order
    pub fn write_json<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for lint in self.snapshot() {
            serde_json::to_writer(&mut writer, lint.as_ref())?;
            writer.write_all(b"\n")?;
        }
        writer.flush()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let index = self.read();
        f.debug_struct("Registry")
            .field("len", &index.names.len())
            .field("names", &index.names)
            .finish()
    }
}

static DEFAULT_REGISTRY: OnceLock<Arc<Registry>> = OnceLock::new();

/// The process-wide registry shared by independently registered lints
///
/// It starts out empty; lints are added during start-up with
/// [`register_lint`] or `lints::register_builtin_lints`. Use
/// [`Registry::new`] instead when isolation is wanted.
pub fn default_registry() -> Arc<Registry> {
    Arc::clone(DEFAULT_REGISTRY.get_or_init(|| Arc::new(Registry::new())))
}

/// Register a lint with the default registry, running its initializer
///
/// An error here means the lint set is broken and start-up should abort.
pub fn register_lint(lint: LintDescriptor) -> Result<(), RegistryError> {
    default_registry().register(lint, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::certificate::Certificate;
    use crate::error::BoxError;
    use crate::rules::rule::{Lint, LintResult};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct PassLint;

    impl Lint for PassLint {
        fn check_applies(&self, _cert: &Certificate) -> bool {
            true
        }

        fn execute(&self, _cert: &Certificate) -> LintResult {
            LintResult::pass()
        }
    }

    struct CountingLint {
        calls: Arc<AtomicUsize>,
    }

    impl Lint for CountingLint {
        fn initialize(&self) -> Result<(), BoxError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn check_applies(&self, _cert: &Certificate) -> bool {
            true
        }

        fn execute(&self, _cert: &Certificate) -> LintResult {
            LintResult::pass()
        }
    }

    struct BrokenInitLint;

    impl Lint for BrokenInitLint {
        fn initialize(&self) -> Result<(), BoxError> {
            Err("missing reference data".into())
        }

        fn check_applies(&self, _cert: &Certificate) -> bool {
            true
        }

        fn execute(&self, _cert: &Certificate) -> LintResult {
            LintResult::pass()
        }
    }

    fn lint(name: &str, source: LintSource) -> LintDescriptor {
        LintDescriptor::new(name, source, PassLint)
    }

    #[test]
    fn test_debug_lists_names() {
        let registry = Registry::new();
        registry.register(lint("e_b", LintSource::Apple), true).unwrap();
        registry.register(lint("e_a", LintSource::Apple), true).unwrap();
        let debug = format!("{:?}", registry);
        assert!(debug.contains("len: 2"));
        assert!(debug.contains(r#"names: ["e_a", "e_b"]"#));
    }

    #[test]
    fn test_new_registry() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.names().is_empty());
        assert!(registry.sources().is_empty());
    }

    #[test]
    fn test_names_sorted_regardless_of_order() {
        let registry = Registry::new();
        for name in ["e_zeta", "w_alpha", "e_alpha", "n_mid"] {
            registry.register(lint(name, LintSource::Community), true).unwrap();
        }
        assert_eq!(registry.names(), vec!["e_alpha", "e_zeta", "n_mid", "w_alpha"]);
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_empty_name_rejected() {
        let registry = Registry::new();
        for name in ["", "   "] {
            let err = registry
                .register(lint(name, LintSource::Community), true)
                .unwrap_err();
            assert!(matches!(err, RegistryError::InvalidDescriptor(_)));
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let registry = Registry::new();
        registry.register(lint("e_dup", LintSource::Rfc5280), true).unwrap();
        let err = registry
            .register(lint("e_dup", LintSource::Mozilla), true)
            .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateName(ref name) if name == "e_dup"));

        // First registration is untouched
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("e_dup").unwrap().source, LintSource::Rfc5280);
        assert!(registry.lints_by_source(LintSource::Mozilla).is_empty());
    }

    #[test]
    fn test_initializer_runs_only_when_requested() {
        let calls = Arc::new(AtomicUsize::new(0));
        let registry = Registry::new();
        registry
            .register(
                LintDescriptor::new(
                    "e_counted",
                    LintSource::Community,
                    CountingLint {
                        calls: Arc::clone(&calls),
                    },
                ),
                false,
            )
            .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        registry
            .register(
                LintDescriptor::new(
                    "e_counted_2",
                    LintSource::Community,
                    CountingLint {
                        calls: Arc::clone(&calls),
                    },
                ),
                true,
            )
            .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_initializer_failure_blocks_registration() {
        let registry = Registry::new();
        let err = registry
            .register(
                LintDescriptor::new("e_broken", LintSource::Community, BrokenInitLint),
                true,
            )
            .unwrap_err();
        match err {
            RegistryError::InitializationFailed { name, source } => {
                assert_eq!(name, "e_broken");
                assert!(source.to_string().contains("missing reference data"));
            }
            other => panic!("Expected InitializationFailed, got {:?}", other),
        }
        assert!(registry.get("e_broken").is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_source_index() {
        let registry = Registry::new();
        registry.register(lint("e_a", LintSource::Rfc5280), true).unwrap();
        registry.register(lint("e_b", LintSource::Mozilla), true).unwrap();
        registry.register(lint("e_c", LintSource::Rfc5280), true).unwrap();

        let mut sources = registry.sources();
        sources.sort();
        assert_eq!(sources, vec![LintSource::Rfc5280, LintSource::Mozilla]);

        let names: Vec<String> = registry
            .lints_by_source(LintSource::Rfc5280)
            .iter()
            .map(|l| l.name.clone())
            .collect();
        assert_eq!(names, vec!["e_a", "e_c"]);
        assert!(registry.lints_by_source(LintSource::Apple).is_empty());
    }

    #[test]
    fn test_get_nonexistent() {
        let registry = Registry::new();
        assert!(registry.get("nonexistent").is_none());
        assert!(!registry.contains("nonexistent"));
    }

    #[test]
    fn test_empty_filter_returns_same_registry() {
        let registry = Arc::new(Registry::new());
        registry.register(lint("e_a", LintSource::Rfc5280), true).unwrap();
        let filtered = registry.filter(&FilterOptions::default()).unwrap();
        assert!(Arc::ptr_eq(&registry, &filtered));
    }

    #[test]
    fn test_filtered_registry_is_independent() {
        let registry = Arc::new(Registry::new());
        registry.register(lint("e_a", LintSource::Rfc5280), true).unwrap();
        registry.register(lint("e_b", LintSource::Mozilla), true).unwrap();

        let opts = FilterOptions {
            exclude_sources: vec![LintSource::Mozilla],
            ..Default::default()
        };
        let filtered = registry.filter(&opts).unwrap();
        assert_eq!(filtered.names(), vec!["e_a"]);

        registry.register(lint("e_c", LintSource::Rfc5280), true).unwrap();
        assert_eq!(filtered.names(), vec!["e_a"]);
        assert!(Arc::ptr_eq(
            &registry.get("e_a").unwrap(),
            &filtered.get("e_a").unwrap()
        ));
    }

    #[test]
    fn test_write_json_one_object_per_line() {
        let registry = Registry::new();
        registry
            .register(
                lint("w_second", LintSource::Apple).with_description("second"),
                true,
            )
            .unwrap();
        registry
            .register(
                lint("e_first", LintSource::Rfc5280).with_citation("RFC 5280: 4.1"),
                true,
            )
            .unwrap();

        let mut out = Vec::new();
        registry.write_json(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["name"], "e_first");
        assert_eq!(first["citation"], "RFC 5280: 4.1");
        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["name"], "w_second");
        assert_eq!(second["source"], "Apple");
    }

    #[test]
    fn test_concurrent_registration() {
        let registry = Arc::new(Registry::new());
        let handles: Vec<_> = (0..8)
            .map(|thread| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    for i in 0..25 {
                        let name = format!("e_t{}_{:02}", thread, i);
                        registry.register(lint(&name, LintSource::Community), true).unwrap();
                        assert!(registry.get(&name).is_some());
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let names = registry.names();
        assert_eq!(names.len(), 200);
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(registry.lints_by_source(LintSource::Community).len(), 200);
    }

    #[test]
    fn test_concurrent_duplicate_registration_single_winner() {
        let registry = Arc::new(Registry::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    registry
                        .register(lint("e_contested", LintSource::Community), true)
                        .is_ok()
                })
            })
            .collect();
        let wins = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|won| *won)
            .count();
        assert_eq!(wins, 1);
        assert_eq!(registry.len(), 1);
    }
}
