//! # Navigation Bar
//!
//! Horizontal surface along the bottom edge: one equal-width item per
//! destination, icon on top and (unless compact) a single-line label below.
//!
//! ```text
//! ┌──────────────┬──────────────┬──────────────┐
//! │      ◇       │      △       │     ■■■      │  ◀ indicator behind the
//! │     Home     │   Explore    │   Library    │    selected icon
//! └──────────────┴──────────────┴──────────────┘
//! ```
//!
//! Labels that do not fit the item width are cut with `…`.

use ratatui::style::Color;

use crate::core::destination::Destination;
use crate::core::resources::ResourceProvider;
use crate::tui::components::nav_surface::{NavSurface, Orientation, SurfaceColors};
use crate::tui::theme::Theme;

/// Bar height with labels (padding, icon, label, padding).
pub const BAR_HEIGHT: u16 = 4;
/// Bar height in icon-only mode (padding, icon, padding).
pub const COMPACT_BAR_HEIGHT: u16 = 3;

/// Display flags for [`render_bar`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BarOptions {
    /// Pure black container with white content instead of the theme surface.
    pub high_contrast: bool,
    /// Icon-only mode: no labels at all.
    pub compact_labels: bool,
}

impl BarOptions {
    pub fn height(&self) -> u16 {
        if self.compact_labels {
            COMPACT_BAR_HEIGHT
        } else {
            BAR_HEIGHT
        }
    }
}

/// Describe the navigation bar for `destinations` at `current_location`.
pub fn render_bar<'a>(
    destinations: &'a [Destination],
    current_location: Option<&str>,
    resources: &dyn ResourceProvider,
    theme: &Theme,
    options: BarOptions,
) -> NavSurface<'a> {
    let (container, content) = if options.high_contrast {
        (Color::Black, Color::White)
    } else {
        (theme.surface_container, theme.on_surface_variant)
    };
    NavSurface::build(
        Orientation::Horizontal,
        SurfaceColors::new(theme, container, content),
        destinations,
        current_location,
        resources,
        !options.compact_labels,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::destination::default_destinations;
    use crate::core::resources::ResourceTable;
    use crate::tui::theme::{INDICATOR_ALPHA, composite};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    fn draw(surface: &NavSurface<'_>, width: u16, height: u16) -> Buffer {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(surface, f.area()))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn text(buffer: &Buffer) -> String {
        buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_bar_renders_icons_and_labels() {
        let dests = default_destinations();
        let resources = ResourceTable::builtin();
        let bar = render_bar(
            &dests,
            Some("library/playlist/42"),
            &resources,
            &Theme::default(),
            BarOptions::default(),
        );

        let content = text(&draw(&bar, 60, BAR_HEIGHT));
        assert!(content.contains("Home"));
        assert!(content.contains("Explore"));
        assert!(content.contains("Library"));
        // Library is active, the others inactive
        assert!(content.contains('■'));
        assert!(content.contains('◇'));
        assert!(content.contains('△'));
        assert!(!content.contains('□'));
    }

    #[test]
    fn test_compact_bar_has_no_labels() {
        let dests = default_destinations();
        let resources = ResourceTable::builtin();
        let options = BarOptions {
            compact_labels: true,
            ..Default::default()
        };
        let bar = render_bar(&dests, Some("home"), &resources, &Theme::default(), options);

        assert_eq!(bar.label_count(), 0);
        assert!(bar.items.iter().all(|item| item.label.is_none()));
        // Titles still resolve for descriptions
        assert_eq!(bar.items[0].content_description, "Home");

        let content = text(&draw(&bar, 60, options.height()));
        assert!(!content.contains("Home"));
        assert!(content.contains('◆'));
    }

    #[test]
    fn test_long_labels_are_ellipsized() {
        let dests = vec![Destination::new("home", "home", "h", "h_off")];
        let mut resources = ResourceTable::new();
        resources.insert_string("home", "A very long home title");
        let bar = render_bar(
            &dests,
            None,
            &resources,
            &Theme::default(),
            BarOptions::default(),
        );

        let buffer = draw(&bar, 10, BAR_HEIGHT);
        let content = text(&buffer);
        assert!(content.contains("A very lo…"));
        assert!(!content.contains("title"));
    }

    #[test]
    fn test_selected_item_colors() {
        let theme = Theme::default();
        let dests = default_destinations();
        let resources = ResourceTable::builtin();
        let bar = render_bar(&dests, Some("home"), &resources, &theme, BarOptions::default());

        assert_eq!(bar.colors.container, theme.surface_container);
        assert_eq!(bar.colors.selected, theme.primary);
        assert_eq!(bar.colors.unselected, theme.on_surface_variant);
        assert_eq!(
            bar.colors.indicator,
            composite(theme.primary, theme.surface_container, INDICATOR_ALPHA)
        );

        // Icon cell of the selected item sits on the indicator
        let buffer = draw(&bar, 30, BAR_HEIGHT);
        let icon_cell = buffer
            .content()
            .iter()
            .find(|c| c.symbol() == "◆")
            .unwrap();
        assert_eq!(icon_cell.fg, theme.primary);
        assert_eq!(icon_cell.bg, bar.colors.indicator);

        let idle_cell = buffer
            .content()
            .iter()
            .find(|c| c.symbol() == "△")
            .unwrap();
        assert_eq!(idle_cell.fg, theme.on_surface_variant);
        assert_eq!(idle_cell.bg, theme.surface_container);
    }

    #[test]
    fn test_high_contrast_bar() {
        let dests = default_destinations();
        let resources = ResourceTable::builtin();
        let options = BarOptions {
            high_contrast: true,
            ..Default::default()
        };
        let bar = render_bar(&dests, Some("home"), &resources, &Theme::default(), options);
        assert_eq!(bar.colors.container, Color::Black);
        assert_eq!(bar.colors.content, Color::White);

        let buffer = draw(&bar, 30, BAR_HEIGHT);
        assert_eq!(buffer[(0, 0)].bg, Color::Black);
    }

    #[test]
    fn test_no_location_nothing_selected() {
        let dests = default_destinations();
        let resources = ResourceTable::builtin();
        let bar = render_bar(&dests, None, &resources, &Theme::default(), BarOptions::default());
        assert!(bar.selected_indices().is_empty());
    }

    #[test]
    fn test_bar_height() {
        assert_eq!(BarOptions::default().height(), BAR_HEIGHT);
        let compact = BarOptions {
            compact_labels: true,
            high_contrast: false,
        };
        assert_eq!(compact.height(), COMPACT_BAR_HEIGHT);
    }
}
