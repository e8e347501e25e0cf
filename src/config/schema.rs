//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! application. All types derive Serde traits for deserialization from
//! config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the application.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base path the application is served under (e.g. "/app").
    /// Empty means the application sits at the root.
    pub base_path: String,

    /// Name of the route activated at startup.
    pub initial_route: String,

    /// View rendered when a navigation path matches no route.
    pub fallback_view: String,

    /// Route definitions mapping paths to views.
    pub routes: Vec<RouteConfig>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_path: String::new(),
            initial_route: "home".to_string(),
            fallback_view: "NotFoundView".to_string(),
            routes: default_routes(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Route configuration binding a path and a name to a view.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Literal path to match (must begin with `/`).
    pub path: String,

    /// Unique route name for programmatic navigation.
    pub name: String,

    /// View component rendered when this route is active.
    pub view: String,
}

/// The table the application ships with.
fn default_routes() -> Vec<RouteConfig> {
    vec![
        RouteConfig {
            path: "/".to_string(),
            name: "home".to_string(),
            view: "LogInView".to_string(),
        },
        RouteConfig {
            path: "/register".to_string(),
            name: "register".to_string(),
            view: "RegisterView".to_string(),
        },
        RouteConfig {
            path: "/dashboard".to_string(),
            name: "dashboard".to_string(),
            view: "DashboardView".to_string(),
        },
    ]
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output for development.
    Pretty,
    /// JSON lines for production log aggregation.
    Json,
}
