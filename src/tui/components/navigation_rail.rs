//! # Navigation Rail
//!
//! Vertical surface along the left edge. Icon only; the group of items is
//! vertically centred with equal flexible space above and below.

use ratatui::style::Color;

use crate::core::destination::Destination;
use crate::core::resources::ResourceProvider;
use crate::tui::components::nav_surface::{NavSurface, Orientation, SurfaceColors};
use crate::tui::theme::Theme;

/// Columns taken by the rail.
pub const RAIL_WIDTH: u16 = 7;

/// Display flags for [`render_rail`]. Labels never appear on the rail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RailOptions {
    /// Pure black container instead of the theme surface.
    pub high_contrast: bool,
}

/// Describe the navigation rail for `destinations` at `current_location`.
pub fn render_rail<'a>(
    destinations: &'a [Destination],
    current_location: Option<&str>,
    resources: &dyn ResourceProvider,
    theme: &Theme,
    options: RailOptions,
) -> NavSurface<'a> {
    // Only the container changes in high contrast; content keeps the theme colour
    let container = if options.high_contrast {
        Color::Black
    } else {
        theme.surface_container
    };
    NavSurface::build(
        Orientation::Vertical,
        SurfaceColors::new(theme, container, theme.on_surface_variant),
        destinations,
        current_location,
        resources,
        false,
    )
}
