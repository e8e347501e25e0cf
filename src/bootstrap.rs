//! Application bootstrap.
//!
//! # Responsibilities
//! - Turn a configuration into a validated registry and navigator
//! - Activate the configured initial route
//!
//! # Design Decisions
//! - Registry and navigator are owned instances, never globals
//! - Any failure here aborts startup; there is no degraded mode

use std::sync::Arc;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::navigation::navigator::Navigator;
use crate::routing::{RouteEntry, RouteRegistry, UnknownRouteError};

/// Error type for startup failures.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The configuration failed semantic validation.
    #[error("invalid configuration: {}", format_errors(.0))]
    InvalidConfig(Vec<ValidationError>),

    /// The initial route could not be activated.
    #[error("initial route: {0}")]
    InitialRoute(#[from] UnknownRouteError),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build the navigator from a configuration and activate the initial
/// route.
pub fn bootstrap(config: AppConfig) -> Result<Navigator<String>, BootstrapError> {
    validate_config(&config).map_err(BootstrapError::InvalidConfig)?;

    let entries = config
        .routes
        .iter()
        .map(|r| RouteEntry::new(r.path.clone(), r.name.clone(), r.view.clone()))
        .collect();

    // validate_config already enforced the table invariants; this is the
    // registry's own gate for tables built without a config.
    let registry = RouteRegistry::new(entries).map_err(|errors| {
        BootstrapError::InvalidConfig(errors.into_iter().map(ValidationError::Table).collect())
    })?;

    tracing::info!(
        routes = registry.len(),
        initial_route = %config.initial_route,
        "Route table constructed"
    );

    let mut navigator = Navigator::new(
        Arc::new(registry),
        config.fallback_view.clone(),
        config.base_path.clone(),
    );
    navigator.navigate_to_name(&config.initial_route)?;

    Ok(navigator)
}
