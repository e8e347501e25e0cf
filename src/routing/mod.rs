//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation request (path or name)
//!     → registry.rs (table lookup)
//!     → Return: matched RouteEntry or NotFound
//!     → activate() records the new current entry
//!
//! Table construction (at startup):
//!     RouteConfig[]
//!     → Validate (unique names, unique absolute paths)
//!     → Freeze as immutable RouteRegistry
//! ```
//!
//! # Design Decisions
//! - Table compiled at startup, immutable at runtime
//! - Exact string matching only (no parameters, no nesting)
//! - Deterministic: same input always resolves the same entry
//! - Unknown path is an outcome; unknown name is an error

pub mod registry;
pub mod types;

pub use registry::{validate_entries, RouteRegistry};
pub use types::{ConfigurationError, PathResolution, RouteEntry, UnknownRouteError};
