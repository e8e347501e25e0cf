//! Navigation target parsing and normalization.
//!
//! # Responsibilities
//! - Classify raw input as a path or a symbolic name
//! - Reduce full URLs to their path component
//! - Strip query and fragment, apply the configured base path
//!
//! # Design Decisions
//! - Normalization happens once at ingress; the registry compares exactly
//! - Paths are case-sensitive; no percent-decoding is applied
//! - Empty input resolves to the root path

use url::Url;

/// A navigation request, after classification but before resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    /// Navigate to a literal path.
    Path(String),
    /// Navigate to a route by symbolic name.
    Name(String),
}

impl NavigationTarget {
    /// Parse a raw request: `@name` addresses a route by name, anything
    /// else is treated as a path.
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix('@') {
            Some(name) => NavigationTarget::Name(name.to_string()),
            None => NavigationTarget::Path(raw.to_string()),
        }
    }
}

/// Normalize a raw path request into the form the route table stores.
///
/// Accepts a bare path, a path with query/fragment, or an absolute URL;
/// returns a path beginning with `/` with the base path stripped.
pub fn normalize_path(raw: &str, base_path: &str) -> String {
    // Absolute URLs carry their own path component; everything else is
    // already a path.
    let mut path = match Url::parse(raw) {
        Ok(url) => url.path().to_string(),
        Err(_) => raw.to_string(),
    };

    if let Some((head, _)) = path.split_once(['?', '#']) {
        path = head.to_string();
    }

    if !base_path.is_empty() {
        if let Some(rest) = path.strip_prefix(base_path) {
            // Only strip at a segment boundary, so "/app" does not
            // swallow the front of "/application".
            if rest.is_empty() || rest.starts_with('/') {
                path = rest.to_string();
            }
        }
    }

    if path.is_empty() {
        return "/".to_string();
    }
    if !path.starts_with('/') {
        path.insert(0, '/');
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sigil() {
        assert_eq!(
            NavigationTarget::parse("@dashboard"),
            NavigationTarget::Name("dashboard".to_string())
        );
        assert_eq!(
            NavigationTarget::parse("/dashboard"),
            NavigationTarget::Path("/dashboard".to_string())
        );
    }

    #[test]
    fn test_bare_path_passthrough() {
        assert_eq!(normalize_path("/dashboard", ""), "/dashboard");
        assert_eq!(normalize_path("/", ""), "/");
    }

    #[test]
    fn test_query_and_fragment_stripped() {
        assert_eq!(normalize_path("/dashboard?tab=orders", ""), "/dashboard");
        assert_eq!(normalize_path("/register#form", ""), "/register");
        assert_eq!(normalize_path("/?redirect=/dashboard", ""), "/");
    }

    #[test]
    fn test_absolute_url_reduced_to_path() {
        assert_eq!(
            normalize_path("https://shop.example.com/dashboard?tab=1", ""),
            "/dashboard"
        );
        assert_eq!(normalize_path("https://shop.example.com", ""), "/");
    }

    #[test]
    fn test_base_path_stripped() {
        assert_eq!(normalize_path("/app/dashboard", "/app"), "/dashboard");
        assert_eq!(normalize_path("/app", "/app"), "/");
        // Not a segment boundary: left alone.
        assert_eq!(normalize_path("/application", "/app"), "/application");
    }

    #[test]
    fn test_missing_separator_added() {
        assert_eq!(normalize_path("dashboard", ""), "/dashboard");
        assert_eq!(normalize_path("", ""), "/");
    }
}
