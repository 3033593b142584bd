//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::destination::{Destination, default_destinations};
use crate::core::state::App;

/// A destination whose title key and icons are derived from its route.
pub fn dest(route: &str) -> Destination {
    Destination::new(
        route,
        route,
        format!("{route}_filled"),
        format!("{route}_outlined"),
    )
}

/// `[home, library]`, the pair used by the nested-location examples.
pub fn home_and_library() -> Vec<Destination> {
    vec![dest("home"), dest("library")]
}

/// Creates a test App on the default destinations, located at `home`.
pub fn test_app() -> App {
    App::new(default_destinations(), Some("home".to_string()))
}
