//! Navigation driver.
//!
//! # Responsibilities
//! - Normalize incoming requests and resolve them against the registry
//! - Activate matched entries; map unmatched paths to the fallback view
//! - Keep the back-history of visited routes
//! - Tag every request with a navigation ID for the logs
//!
//! # Design Decisions
//! - Requests are processed one at a time; activation is last-write-wins
//! - NotFound renders the fallback without touching the active entry
//! - The fallback view is not a route: never in current() or history

use std::sync::Arc;

use uuid::Uuid;

use crate::navigation::target::normalize_path;
use crate::routing::{PathResolution, RouteEntry, RouteRegistry, UnknownRouteError};

/// What the presentation layer should render after a by-path navigation.
#[derive(Debug, PartialEq)]
pub enum NavigationOutcome<'a, V> {
    /// The matched entry, now active.
    Route(&'a RouteEntry<V>),
    /// No route matched; render the fallback view.
    Fallback(&'a V),
}

impl<'a, V> NavigationOutcome<'a, V> {
    /// The view to render.
    pub fn view(&self) -> &'a V {
        match *self {
            NavigationOutcome::Route(entry) => entry.view(),
            NavigationOutcome::Fallback(view) => view,
        }
    }

    /// True if the fallback view was selected.
    pub fn is_fallback(&self) -> bool {
        matches!(self, NavigationOutcome::Fallback(_))
    }
}

/// Drives the registry on behalf of the presentation layer.
///
/// The navigator owns the fallback view and the back-history; the
/// registry itself stays shareable behind an `Arc`.
#[derive(Debug)]
pub struct Navigator<V> {
    registry: Arc<RouteRegistry<V>>,
    fallback_view: V,
    base_path: String,
    history: Vec<String>,
}

impl<V> Navigator<V> {
    /// Create a navigator over a constructed registry.
    pub fn new(
        registry: Arc<RouteRegistry<V>>,
        fallback_view: V,
        base_path: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            fallback_view,
            base_path: base_path.into(),
            history: Vec::new(),
        }
    }

    /// Navigate to a raw path request.
    ///
    /// The input is normalized (URL reduced to its path, query/fragment
    /// stripped, base path removed) before resolution. A miss renders the
    /// fallback view and leaves the active entry untouched.
    pub fn navigate(&mut self, raw: &str) -> NavigationOutcome<'_, V> {
        let navigation_id = Uuid::new_v4();
        let path = normalize_path(raw, &self.base_path);

        match self.registry.resolve_path(&path) {
            PathResolution::Matched(entry) => {
                let previous = self
                    .registry
                    .activate(entry)
                    .expect("entry resolved from this table");
                if let Some(prev) = previous {
                    self.history.push(prev.name().to_string());
                }
                tracing::info!(
                    navigation_id = %navigation_id,
                    path = %path,
                    route = entry.name(),
                    "Route activated"
                );
                NavigationOutcome::Route(entry)
            }
            PathResolution::NotFound => {
                tracing::warn!(
                    navigation_id = %navigation_id,
                    path = %path,
                    "No route matched, rendering fallback"
                );
                NavigationOutcome::Fallback(&self.fallback_view)
            }
        }
    }

    /// Navigate to a route by symbolic name.
    ///
    /// A miss is surfaced as an error: symbolic names come from
    /// application code, so an unknown one is a defect.
    pub fn navigate_to_name(&mut self, name: &str) -> Result<&RouteEntry<V>, UnknownRouteError> {
        let navigation_id = Uuid::new_v4();
        let entry = self.registry.resolve_name(name)?;
        let previous = self
            .registry
            .activate(entry)
            .expect("entry resolved from this table");
        if let Some(prev) = previous {
            self.history.push(prev.name().to_string());
        }
        tracing::info!(
            navigation_id = %navigation_id,
            route = entry.name(),
            path = entry.path(),
            "Route activated by name"
        );
        Ok(entry)
    }

    /// Re-activate the most recently visited route, if any.
    pub fn back(&mut self) -> Option<&RouteEntry<V>> {
        let name = self.history.pop()?;
        let entry = self
            .registry
            .resolve_name(&name)
            .expect("history records names from this table");
        self.registry
            .activate(entry)
            .expect("entry resolved from this table");
        tracing::info!(route = entry.name(), path = entry.path(), "Navigated back");
        Some(entry)
    }

    /// The currently active route entry.
    pub fn current_route(&self) -> Option<&RouteEntry<V>> {
        self.registry.current()
    }

    /// The view of the currently active route.
    pub fn current_view(&self) -> Option<&V> {
        self.registry.current().map(|entry| entry.view())
    }

    /// The view rendered when nothing matches.
    pub fn fallback_view(&self) -> &V {
        &self.fallback_view
    }

    /// The registry this navigator drives.
    pub fn registry(&self) -> &RouteRegistry<V> {
        &self.registry
    }

    /// Number of entries in the back-history.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
