//! Navigation subsystem.
//!
//! # Data Flow
//! ```text
//! Raw request ("/dashboard?tab=1", "@register", "back")
//!     → target.rs (classify, normalize)
//!     → navigator.rs (resolve against the registry)
//!     → matched: activate + record history
//!     → unmatched path: hand back the fallback view
//! ```
//!
//! # Design Decisions
//! - One navigation at a time; the last activation wins
//! - Fallback rendering is local recovery, never an error
//! - Navigation IDs correlate log lines, nothing else

pub mod navigator;
pub mod target;

pub use navigator::{NavigationOutcome, Navigator};
pub use target::{normalize_path, NavigationTarget};
