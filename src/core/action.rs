//! # Actions
//!
//! Everything the router can be asked to do becomes an `Action`.
//! User taps a destination? That's `Action::DestinationClicked`.
//! User opens a nested screen? That's `Action::OpenDetail`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` for the adapter to carry out.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```

use log::{debug, info};

use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Jump straight to a location.
    Navigate(String),
    /// A navigation surface item was activated.
    DestinationClicked { route: String, was_selected: bool },
    /// Push a nested screen under the current location.
    OpenDetail,
    /// Pop the last segment of the current location.
    Back,
    ToggleHighContrast,
    ToggleCompactLabels,
    ToggleLayout,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Navigate(location) => {
            info!("Navigate to {}", location);
            app.status_message.clear();
            app.current_location = Some(location);
        }
        Action::DestinationClicked {
            route,
            was_selected,
        } => {
            if was_selected {
                info!("Re-selected {}, returning to its root", route);
                app.status_message = format!("{route}: back to top");
            } else {
                info!("Switching to {}", route);
                app.status_message.clear();
            }
            app.current_location = Some(route);
        }
        Action::OpenDetail => match app.current_location.as_mut() {
            Some(location) => {
                app.opened_details += 1;
                location.push_str(&format!("/item-{}", app.opened_details));
                app.status_message.clear();
            }
            None => {
                app.status_message = String::from("Nothing to open");
            }
        },
        Action::Back => match app.current_location.as_mut() {
            Some(location) if location.contains('/') => {
                if let Some(index) = location.rfind('/') {
                    location.truncate(index);
                }
                app.status_message.clear();
            }
            _ => {
                app.status_message = String::from("Already at top level");
            }
        },
        Action::ToggleHighContrast => {
            app.high_contrast = !app.high_contrast;
            app.status_message = format!(
                "High contrast: {}",
                if app.high_contrast { "on" } else { "off" }
            );
        }
        Action::ToggleCompactLabels => {
            app.compact_labels = !app.compact_labels;
            app.status_message = format!(
                "Labels: {}",
                if app.compact_labels { "hidden" } else { "shown" }
            );
        }
        Action::ToggleLayout => {
            app.layout = app.layout.toggled();
            app.status_message = format!("Layout: {}", app.layout.label());
        }
        Action::Quit => return Effect::Quit,
    }
    Effect::None
}
