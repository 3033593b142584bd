//! # Route Matching
//!
//! Decides which destinations are "active" for a current location.
//!
//! A destination is selected when the current location equals its route, or
//! when the location sits beneath it (`"<route>/..."`) and the route belongs
//! to one of the configured destinations. Routes are compared as literal
//! strings; `/` inside a route is not parsed.
//!
//! ```text
//! location            route       selected
//! ─────────────────   ─────────   ────────
//! None                home        false
//! "library"           library     true
//! "library/pl/42"     library     true
//! "libraryExtra"      library     false
//! ```
//!
//! Two destinations whose routes nest (`"a"` and `"a/b"`) can both be
//! selected at once. No tie-break is applied.

use crate::core::destination::Destination;

/// Returns whether `route` should be rendered as selected for `current_location`.
///
/// Pure: the result depends only on the arguments, so callers may memoize it
/// per `(current_location, route)` pair.
pub fn is_route_selected(
    current_location: Option<&str>,
    route: &str,
    destinations: &[Destination],
) -> bool {
    let Some(location) = current_location else {
        return false;
    };
    if location == route {
        return true;
    }
    destinations.iter().any(|d| d.route == route)
        && location
            .strip_prefix(route)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Evaluates [`is_route_selected`] once per destination, in input order.
pub fn selection(current_location: Option<&str>, destinations: &[Destination]) -> Vec<bool> {
    destinations
        .iter()
        .map(|d| is_route_selected(current_location, &d.route, destinations))
        .collect()
}
