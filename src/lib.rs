//! Navigation core for the product dashboard single-page application.

pub mod bootstrap;
pub mod config;
pub mod navigation;
pub mod observability;
pub mod routing;

pub use config::schema::AppConfig;
pub use navigation::navigator::Navigator;
pub use routing::RouteRegistry;
