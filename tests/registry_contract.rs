//! Contract tests for the route registry public API.

use view_router::routing::{
    ConfigurationError, PathResolution, RouteEntry, RouteRegistry, UnknownRouteError,
};

fn table() -> RouteRegistry<&'static str> {
    RouteRegistry::new(vec![
        RouteEntry::new("/", "home", "LogInView"),
        RouteEntry::new("/dashboard", "dashboard", "DashboardView"),
    ])
    .expect("table is valid")
}

#[test]
fn resolve_by_path_returns_registered_entries() {
    let registry = table();
    for (path, name) in [("/", "home"), ("/dashboard", "dashboard")] {
        let entry = registry
            .resolve_path(path)
            .entry()
            .expect("registered path resolves");
        assert_eq!(entry.name(), name);
        assert_eq!(entry.path(), path);
    }
}

#[test]
fn unknown_path_is_an_outcome_not_an_error() {
    let registry = table();
    assert_eq!(registry.resolve_path("/missing"), PathResolution::NotFound);
    // The registry stays fully usable afterwards.
    assert!(registry.resolve_path("/").entry().is_some());
}

#[test]
fn duplicate_names_fail_construction() {
    let errors = RouteRegistry::new(vec![
        RouteEntry::new("/a", "dashboard", ()),
        RouteEntry::new("/b", "dashboard", ()),
    ])
    .unwrap_err();
    assert_eq!(
        errors,
        vec![ConfigurationError::DuplicateName("dashboard".to_string())]
    );
}

#[test]
fn resolution_has_no_side_effect_until_activation() {
    let registry = table();
    let first = registry.resolve_path("/dashboard");
    let second = registry.resolve_path("/dashboard");
    assert_eq!(first, second);
    assert!(registry.current().is_none());
}

#[test]
fn resolve_then_activate_then_current() {
    let registry = table();
    let home = registry.resolve_name("home").expect("home is registered");
    registry.activate(home).expect("home belongs to the table");
    assert_eq!(registry.current().expect("a route is active").name(), "home");
}

#[test]
fn activation_returns_previous_entry() {
    let registry = table();

    let home = registry.resolve_name("home").unwrap();
    assert!(registry.activate(home).unwrap().is_none());

    let dash = registry.resolve_name("dashboard").unwrap();
    let previous = registry.activate(dash).unwrap();
    assert_eq!(previous.unwrap().name(), "home");

    // Re-activating the same entry reports it as its own predecessor.
    let previous = registry.activate(dash).unwrap();
    assert_eq!(previous.unwrap().name(), "dashboard");
}

#[test]
fn unknown_name_is_an_error() {
    let registry = table();
    assert_eq!(
        registry.resolve_name("orders").unwrap_err(),
        UnknownRouteError("orders".to_string())
    );
}

#[test]
fn foreign_entry_cannot_be_activated() {
    let registry = table();
    let foreign = RouteEntry::new("/orders", "orders", "OrdersView");
    let err = registry.activate(&foreign).unwrap_err();
    assert!(matches!(err, ConfigurationError::ForeignEntry { .. }));
    assert!(registry.current().is_none());
}
