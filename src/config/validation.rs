//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check referential integrity (initial route names a declared route)
//! - Enforce the route table invariants before the registry is built
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::routing::{validate_entries, ConfigurationError};

/// A single semantic problem with a configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The route table violates a registry invariant.
    #[error(transparent)]
    Table(#[from] ConfigurationError),

    /// No routes are defined.
    #[error("no routes defined")]
    NoRoutes,

    /// A route has an empty view reference.
    #[error("route `{0}` has an empty view")]
    EmptyView(String),

    /// The fallback view is empty.
    #[error("fallback view is empty")]
    EmptyFallbackView,

    /// The initial route does not name a declared route.
    #[error("initial route `{0}` is not a declared route name")]
    UnknownInitialRoute(String),

    /// The base path must be empty or begin with `/`.
    #[error("base path `{0}` is not absolute")]
    BasePathNotAbsolute(String),
}

/// Validate a configuration, returning every problem found.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.routes.is_empty() {
        errors.push(ValidationError::NoRoutes);
    }

    errors.extend(
        validate_entries(
            config
                .routes
                .iter()
                .map(|r| (r.path.as_str(), r.name.as_str())),
        )
        .into_iter()
        .map(ValidationError::Table),
    );

    for route in &config.routes {
        if route.view.is_empty() {
            errors.push(ValidationError::EmptyView(route.name.clone()));
        }
    }

    if config.fallback_view.is_empty() {
        errors.push(ValidationError::EmptyFallbackView);
    }

    if !config.routes.iter().any(|r| r.name == config.initial_route) {
        errors.push(ValidationError::UnknownInitialRoute(
            config.initial_route.clone(),
        ));
    }

    if !config.base_path.is_empty() && !config.base_path.starts_with('/') {
        errors.push(ValidationError::BasePathNotAbsolute(
            config.base_path.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RouteConfig;

    fn route(path: &str, name: &str, view: &str) -> RouteConfig {
        RouteConfig {
            path: path.to_string(),
            name: name.to_string(),
            view: view.to_string(),
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_duplicate_name_detected() {
        let config = AppConfig {
            routes: vec![
                route("/", "dashboard", "LogInView"),
                route("/dashboard", "dashboard", "DashboardView"),
            ],
            initial_route: "dashboard".to_string(),
            ..AppConfig::default()
        };

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::Table(ConfigurationError::DuplicateName(
                "dashboard".to_string()
            ))]
        );
    }

    #[test]
    fn test_all_problems_reported() {
        let config = AppConfig {
            routes: vec![route("/", "home", ""), route("dash", "dashboard", "DashboardView")],
            initial_route: "orders".to_string(),
            fallback_view: String::new(),
            base_path: "app".to_string(),
            ..AppConfig::default()
        };

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::Table(ConfigurationError::NotAbsolute {
            name: "dashboard".to_string(),
            path: "dash".to_string(),
        })));
        assert!(errors.contains(&ValidationError::EmptyView("home".to_string())));
        assert!(errors.contains(&ValidationError::EmptyFallbackView));
        assert!(errors.contains(&ValidationError::UnknownInitialRoute("orders".to_string())));
        assert!(errors.contains(&ValidationError::BasePathNotAbsolute("app".to_string())));
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn test_empty_table_rejected() {
        let config = AppConfig {
            routes: Vec::new(),
            ..AppConfig::default()
        };

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::NoRoutes));
        // The default initial route has nothing to point at either.
        assert!(errors.contains(&ValidationError::UnknownInitialRoute("home".to_string())));
    }
}
