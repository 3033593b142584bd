//! # Application State
//!
//! Core state for the demo router. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── destinations: Vec<Destination>   // configured, read-only
//! ├── current_location: Option<String> // router-owned location
//! ├── status_message: String           // title bar text
//! ├── layout: Layout                   // bar or rail
//! ├── high_contrast: bool              // pure black container
//! ├── compact_labels: bool             // icon-only bar
//! └── opened_details: u32              // counter for nested screens
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::Layout;
use crate::core::config::ResolvedConfig;
use crate::core::destination::Destination;

pub struct App {
    pub destinations: Vec<Destination>,
    pub current_location: Option<String>,
    pub status_message: String,
    pub layout: Layout,
    pub high_contrast: bool,
    pub compact_labels: bool,
    /// Number of detail screens opened so far; names the next one.
    pub opened_details: u32,
}

impl App {
    pub fn new(destinations: Vec<Destination>, current_location: Option<String>) -> Self {
        Self {
            destinations,
            current_location,
            status_message: String::from("Welcome to Waypoint!"),
            layout: Layout::default(),
            high_contrast: false,
            compact_labels: false,
            opened_details: 0,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            layout: config.layout,
            high_contrast: config.high_contrast,
            compact_labels: config.compact_labels,
            ..Self::new(config.destinations.clone(), config.start_location.clone())
        }
    }

    pub fn location(&self) -> Option<&str> {
        self.current_location.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use crate::Layout;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Welcome to Waypoint!");
        assert_eq!(app.location(), Some("home"));
        assert_eq!(app.layout, Layout::Bar);
        assert!(!app.high_contrast);
    }
}
