use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::Layout as SurfaceLayout;
use crate::core::resources::ResourceProvider;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    BarOptions, NavSurface, RailOptions, ScreenView, TitleBar, render_bar, render_rail,
};
use crate::tui::components::navigation_rail::RAIL_WIDTH;
use crate::tui::theme::Theme;

/// Where each part of the screen goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameAreas {
    pub title: Rect,
    pub content: Rect,
    pub nav: Rect,
}

/// Split the frame: title on top, then either content over a bottom bar, or
/// a left rail beside the content.
pub fn split_frame(area: Rect, layout: SurfaceLayout, compact_labels: bool) -> FrameAreas {
    use Constraint::{Length, Min};
    match layout {
        SurfaceLayout::Bar => {
            let bar_height = BarOptions {
                compact_labels,
                ..Default::default()
            }
            .height();
            let [title, content, nav] =
                Layout::vertical([Length(1), Min(0), Length(bar_height)]).areas(area);
            FrameAreas {
                title,
                content,
                nav,
            }
        }
        SurfaceLayout::Rail => {
            let [title, body] = Layout::vertical([Length(1), Min(0)]).areas(area);
            let [nav, content] = Layout::horizontal([Length(RAIL_WIDTH), Min(0)]).areas(body);
            FrameAreas {
                title,
                content,
                nav,
            }
        }
    }
}

/// Build this frame's navigation surface from app state.
pub fn build_surface<'a>(
    app: &'a App,
    resources: &dyn ResourceProvider,
    theme: &Theme,
    focused: Option<usize>,
) -> NavSurface<'a> {
    let surface = match app.layout {
        SurfaceLayout::Bar => render_bar(
            &app.destinations,
            app.location(),
            resources,
            theme,
            BarOptions {
                high_contrast: app.high_contrast,
                compact_labels: app.compact_labels,
            },
        ),
        SurfaceLayout::Rail => render_rail(
            &app.destinations,
            app.location(),
            resources,
            theme,
            RailOptions {
                high_contrast: app.high_contrast,
            },
        ),
    };
    surface.with_focus(focused)
}

pub fn draw_ui(
    frame: &mut Frame,
    app: &App,
    tui: &TuiState,
    resources: &dyn ResourceProvider,
    theme: &Theme,
) {
    let areas = split_frame(frame.area(), app.layout, app.compact_labels);

    let surface = build_surface(app, resources, theme, Some(tui.focus.focused));
    let active_titles = surface
        .items
        .iter()
        .filter(|item| item.selected)
        .map(|item| item.content_description.clone())
        .collect();
    frame.render_widget(&surface, areas.nav);

    TitleBar::new(app.current_location.clone(), app.status_message.clone())
        .render(frame, areas.title);
    ScreenView::new(app.location(), active_titles).render(frame, areas.content);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resources::ResourceTable;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_split_bar_layout() {
        let areas = split_frame(Rect::new(0, 0, 80, 24), SurfaceLayout::Bar, false);
        assert_eq!(areas.title.height, 1);
        assert_eq!(areas.nav.height, 4);
        assert_eq!(areas.nav.bottom(), 24);
        assert_eq!(areas.content.height, 19);
    }

    #[test]
    fn test_split_rail_layout() {
        let areas = split_frame(Rect::new(0, 0, 80, 24), SurfaceLayout::Rail, false);
        assert_eq!(areas.nav.x, 0);
        assert_eq!(areas.nav.width, RAIL_WIDTH);
        assert_eq!(areas.nav.height, 23);
        assert_eq!(areas.content.x, RAIL_WIDTH);
    }

    #[test]
    fn test_draw_full_frame() {
        let mut app = test_app();
        app.current_location = Some("library/item-3".to_string());
        let tui = TuiState::new(app.destinations.len(), app.layout);
        let resources = ResourceTable::builtin();
        let theme = Theme::default();

        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| draw_ui(f, &app, &tui, &resources, &theme))
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Waypoint"));
        assert!(text.contains("in Library"));
        assert!(text.contains("Explore"));
    }

    #[test]
    fn test_click_in_bar_area_hits_item() {
        let app = test_app();
        let resources = ResourceTable::builtin();
        let theme = Theme::default();
        let areas = split_frame(Rect::new(0, 0, 90, 24), app.layout, app.compact_labels);
        let surface = build_surface(&app, &resources, &theme, None);

        // Third item occupies the right-hand 30 columns of the bar
        assert_eq!(surface.hit_test(areas.nav, 75, 22), Some(2));
        assert_eq!(surface.hit_test(areas.nav, 75, 10), None);
    }
}
