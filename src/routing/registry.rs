//! Route lookup and activation.
//!
//! # Responsibilities
//! - Validate and freeze the route table at construction
//! - Look up entries by path (exact, first match) or by name (indexed)
//! - Track the single piece of mutable state: the active entry
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(1) name lookup via HashMap
//! - O(n) ordered path scan keeps resolution deterministic
//! - Explicit NotFound rather than silent default
//! - Active entry is one atomic word; activation is last-write-wins

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::routing::types::{ConfigurationError, PathResolution, RouteEntry, UnknownRouteError};

/// Sentinel for "no activation has happened yet".
const UNINITIALIZED: usize = usize::MAX;

/// An immutable, validated route table with one mutable cell: the
/// currently active entry.
///
/// Constructed once at startup and shared read-only for the lifetime of
/// the application; `activate` is the only mutation and is a single
/// atomic store, so the registry can sit behind an `Arc` without locks.
#[derive(Debug)]
pub struct RouteRegistry<V> {
    entries: Vec<RouteEntry<V>>,
    by_name: HashMap<String, usize>,
    active: AtomicUsize,
}

impl<V> RouteRegistry<V> {
    /// Validate `entries` and freeze them into a registry.
    ///
    /// Every invariant violation is reported, not just the first.
    pub fn new(entries: Vec<RouteEntry<V>>) -> Result<Self, Vec<ConfigurationError>> {
        let errors = validate_entries(entries.iter().map(|e| (e.path(), e.name())));
        if !errors.is_empty() {
            return Err(errors);
        }

        let by_name = entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| (entry.name().to_string(), idx))
            .collect();

        Ok(Self {
            entries,
            by_name,
            active: AtomicUsize::new(UNINITIALIZED),
        })
    }

    /// Resolve a normalized path to the first entry bound to it.
    ///
    /// Pure lookup: no side effect until `activate` is called. Scans in
    /// insertion order, so resolution is first-match deterministic.
    pub fn resolve_path(&self, path: &str) -> PathResolution<'_, V> {
        self.entries
            .iter()
            .find(|entry| entry.path() == path)
            .map_or(PathResolution::NotFound, PathResolution::Matched)
    }

    /// Resolve a symbolic name to its unique entry.
    pub fn resolve_name(&self, name: &str) -> Result<&RouteEntry<V>, UnknownRouteError> {
        self.by_name
            .get(name)
            .map(|&idx| &self.entries[idx])
            .ok_or_else(|| UnknownRouteError(name.to_string()))
    }

    /// Record `entry` as the active route.
    ///
    /// Returns the previously active entry, or `None` on the first
    /// activation. The entry must belong to this table: an unknown name,
    /// or a known name bound to a different path, is rejected as foreign.
    pub fn activate(
        &self,
        entry: &RouteEntry<V>,
    ) -> Result<Option<&RouteEntry<V>>, ConfigurationError> {
        let idx = self
            .index_of(entry)
            .ok_or_else(|| ConfigurationError::ForeignEntry {
                name: entry.name().to_string(),
                path: entry.path().to_string(),
            })?;

        let prev = self.active.swap(idx, Ordering::AcqRel);
        Ok(self.entry_at(prev))
    }

    /// The currently active entry, or `None` before the first activation.
    pub fn current(&self) -> Option<&RouteEntry<V>> {
        self.entry_at(self.active.load(Ordering::Acquire))
    }

    /// All entries, in insertion order.
    pub fn entries(&self) -> &[RouteEntry<V>] {
        &self.entries
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table holds no routes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn index_of(&self, entry: &RouteEntry<V>) -> Option<usize> {
        let &idx = self.by_name.get(entry.name())?;
        (self.entries[idx].path() == entry.path()).then_some(idx)
    }

    fn entry_at(&self, idx: usize) -> Option<&RouteEntry<V>> {
        (idx != UNINITIALIZED).then(|| &self.entries[idx])
    }
}

/// Check the table-shape invariants over `(path, name)` pairs, collecting
/// every violation.
///
/// Shared by registry construction and config validation so both layers
/// reject the same tables.
pub fn validate_entries<'a>(
    pairs: impl Iterator<Item = (&'a str, &'a str)>,
) -> Vec<ConfigurationError> {
    let mut errors = Vec::new();
    let mut seen_names: HashSet<&str> = HashSet::new();
    let mut seen_paths: HashSet<&str> = HashSet::new();

    for (path, name) in pairs {
        if name.is_empty() {
            errors.push(ConfigurationError::EmptyName(path.to_string()));
        } else if !seen_names.insert(name) {
            errors.push(ConfigurationError::DuplicateName(name.to_string()));
        }

        if path.is_empty() {
            errors.push(ConfigurationError::EmptyPath(name.to_string()));
        } else if !path.starts_with('/') {
            errors.push(ConfigurationError::NotAbsolute {
                name: name.to_string(),
                path: path.to_string(),
            });
        } else if !seen_paths.insert(path) {
            errors.push(ConfigurationError::DuplicatePath(path.to_string()));
        }
    }

    errors
}
