//! # Destinations
//!
//! A destination is one top-level navigation target: a route, a localizable
//! title key, and two icon identifiers (active and inactive). Destinations are
//! configured outside the core and handed to the surfaces as a read-only,
//! ordered slice for each render.
//!
//! Route uniqueness is assumed, not enforced.

use serde::{Deserialize, Serialize};

/// One configured navigation target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Destination {
    /// Opaque route identifier matched against the current location.
    pub route: String,
    /// Resource key for the display label.
    pub title_key: String,
    /// Icon identifier used while the destination is selected.
    pub icon_active: String,
    /// Icon identifier used while the destination is not selected.
    pub icon_inactive: String,
}

impl Destination {
    pub fn new(
        route: impl Into<String>,
        title_key: impl Into<String>,
        icon_active: impl Into<String>,
        icon_inactive: impl Into<String>,
    ) -> Self {
        Self {
            route: route.into(),
            title_key: title_key.into(),
            icon_active: icon_active.into(),
            icon_inactive: icon_inactive.into(),
        }
    }

    /// The icon identifier for the given selection state.
    pub fn icon_for(&self, selected: bool) -> &str {
        if selected {
            &self.icon_active
        } else {
            &self.icon_inactive
        }
    }
}

/// The destinations used when the config file defines none.
pub fn default_destinations() -> Vec<Destination> {
    vec![
        Destination::new("home", "home", "home_filled", "home_outlined"),
        Destination::new("explore", "explore", "explore_filled", "explore_outlined"),
        Destination::new("library", "library", "library_filled", "library_outlined"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_for_selection_state() {
        let dest = Destination::new("home", "home", "home_filled", "home_outlined");
        assert_eq!(dest.icon_for(true), "home_filled");
        assert_eq!(dest.icon_for(false), "home_outlined");
    }

    #[test]
    fn test_default_destinations_have_unique_routes() {
        let dests = default_destinations();
        let mut routes: Vec<&str> = dests.iter().map(|d| d.route.as_str()).collect();
        routes.sort();
        routes.dedup();
        assert_eq!(routes.len(), dests.len());
    }

    #[test]
    fn test_destination_deserializes_from_toml() {
        let dest: Destination = toml::from_str(
            r#"
route = "library"
title_key = "library"
icon_active = "library_filled"
icon_inactive = "library_outlined"
"#,
        )
        .unwrap();
        assert_eq!(dest.route, "library");
        assert_eq!(dest.icon_inactive, "library_outlined");
    }
}
