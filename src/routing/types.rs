//! Route table types and error definitions.

use thiserror::Error;

/// A single binding between a navigable path, a symbolic name, and a view.
///
/// The view is opaque to the routing layer: it is stored and handed back
/// for rendering, never inspected or mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry<V> {
    path: String,
    name: String,
    view: V,
}

impl<V> RouteEntry<V> {
    /// Create a new route entry.
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: V) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view,
        }
    }

    /// The literal path this entry is bound to.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The unique symbolic name used for programmatic navigation.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The view to render when this entry is active.
    pub fn view(&self) -> &V {
        &self.view
    }
}

/// Outcome of a by-path lookup.
///
/// An unmatched path is routine interactive input, not a failure, so the
/// miss case is an explicit variant rather than an error.
#[derive(Debug, PartialEq)]
pub enum PathResolution<'a, V> {
    /// The first entry whose path equals the input.
    Matched(&'a RouteEntry<V>),
    /// No entry matched; the caller decides what to render.
    NotFound,
}

impl<'a, V> PathResolution<'a, V> {
    /// The matched entry, if any.
    pub fn entry(&self) -> Option<&'a RouteEntry<V>> {
        match *self {
            PathResolution::Matched(entry) => Some(entry),
            PathResolution::NotFound => None,
        }
    }

    /// True if no entry matched.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PathResolution::NotFound)
    }
}

/// Violations of the route table invariants.
///
/// Fatal at construction time, defect signal at runtime (foreign
/// activation). Never a retry candidate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// An entry has an empty name.
    #[error("route for path `{0}` has an empty name")]
    EmptyName(String),

    /// An entry has an empty path.
    #[error("route `{0}` has an empty path")]
    EmptyPath(String),

    /// A path does not begin with `/`.
    #[error("route `{name}` has a non-absolute path `{path}`")]
    NotAbsolute { name: String, path: String },

    /// Two entries share a name.
    #[error("duplicate route name `{0}`")]
    DuplicateName(String),

    /// Two entries share a path.
    #[error("duplicate route path `{0}`")]
    DuplicatePath(String),

    /// Activation was requested for an entry foreign to the table.
    #[error("route `{name}` ({path}) is not part of this table")]
    ForeignEntry { name: String, path: String },
}

/// A symbolic name with no bound entry.
///
/// By-name lookups come from application code, so a miss indicates a
/// defect and is surfaced loudly instead of degraded to a fallback.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("no route named `{0}`")]
pub struct UnknownRouteError(pub String);
