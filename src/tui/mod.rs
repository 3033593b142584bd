//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the navigation
//! surface and host chrome, and translates keyboard and mouse events into
//! `core::Action` values.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only redraws after an event (including
//! terminal resize). Between events it blocks in `poll` for up to 500ms.
//!
//! ## Click Flow
//!
//! ```text
//! MouseClick / Enter / digit
//!         │
//!         ▼
//! NavSurface::click(index) ──▶ NavClick { destination, was_selected }
//!         │
//!         ▼
//! Action::DestinationClicked ──▶ update(&mut app, action)
//! ```
//!
//! The surface used to resolve a click is rebuilt from the same state that
//! was last drawn, so `was_selected` matches what the user saw.

pub mod component;
pub mod components;
pub mod event;
pub mod theme;
pub mod ui;

use log::{debug, info};
use ratatui::DefaultTerminal;
use ratatui::layout::Rect;
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::Layout;
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::resources::ResourceTable;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{FocusEvent, NavFocus, Orientation};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::theme::Theme;

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core routing logic)
pub struct TuiState {
    /// Keyboard focus over the navigation items
    pub focus: NavFocus,
}

impl TuiState {
    pub fn new(item_count: usize, layout: Layout) -> Self {
        Self {
            focus: NavFocus::new(item_count, orientation_for(layout)),
        }
    }
}

fn orientation_for(layout: Layout) -> Orientation {
    match layout {
        Layout::Bar => Orientation::Horizontal,
        Layout::Rail => Orientation::Vertical,
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Translate one event into a router action, updating TUI-local state.
///
/// `nav_area` is where the surface was last drawn, for mouse hit testing.
fn action_for_event(
    event: &TuiEvent,
    app: &App,
    tui: &mut TuiState,
    resources: &ResourceTable,
    theme: &Theme,
    nav_area: Rect,
) -> Option<Action> {
    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => return Some(Action::Quit),
        TuiEvent::Resize => return None,
        TuiEvent::Back => return Some(Action::Back),
        TuiEvent::InputChar('o') => return Some(Action::OpenDetail),
        TuiEvent::InputChar('c') => return Some(Action::ToggleCompactLabels),
        TuiEvent::InputChar('h') => return Some(Action::ToggleHighContrast),
        TuiEvent::InputChar('l') => return Some(Action::ToggleLayout),
        _ => {}
    }

    let surface = ui::build_surface(app, resources, theme, Some(tui.focus.focused));
    let index = match event {
        TuiEvent::MouseClick(column, row) => {
            let index = surface.hit_test(nav_area, *column, *row)?;
            tui.focus.focused = index;
            index
        }
        other => match tui.focus.handle_event(other)? {
            FocusEvent::Activate(index) => index,
        },
    };

    let click = surface.click(index)?;
    debug!(
        "Activated {} (was_selected={})",
        click.destination.route, click.was_selected
    );
    Some(click.into())
}

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let mut app = App::from_config(&config);
    let theme = Theme::from_config(&config.theme);
    info!(
        "Starting {} layout at {:?} with {} destinations",
        app.layout.label(),
        app.current_location,
        app.destinations.len()
    );

    let mut terminal = ratatui::init();
    let result = match TerminalModeGuard::new() {
        Ok(_guard) => event_loop(&mut terminal, &mut app, &config.resources, &theme),
        Err(e) => Err(e),
    };
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    resources: &ResourceTable,
    theme: &Theme,
) -> io::Result<()> {
    let mut tui = TuiState::new(app.destinations.len(), app.layout);
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &*app, &tui, resources, theme))?;
            needs_redraw = false;
        }

        let Some(first_event) = poll_event_timeout(IDLE_POLL)? else {
            continue;
        };
        needs_redraw = true;

        // Process first event + drain ALL pending events before next draw
        let mut next = Some(first_event);
        while let Some(event) = next {
            let frame_area = terminal.get_frame().area();
            let nav_area = ui::split_frame(frame_area, app.layout, app.compact_labels).nav;

            if let Some(action) =
                action_for_event(&event, app, &mut tui, resources, theme, nav_area)
            {
                if update(app, action) == Effect::Quit {
                    info!("Quit requested");
                    return Ok(());
                }
                // Layout toggles change which keys move the focus
                tui.focus
                    .sync(app.destinations.len(), orientation_for(app.layout));
            }
            next = poll_event_immediate()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    fn nav_area(app: &App) -> Rect {
        ui::split_frame(Rect::new(0, 0, 90, 24), app.layout, app.compact_labels).nav
    }

    fn act(app: &App, tui: &mut TuiState, event: TuiEvent) -> Option<Action> {
        let resources = ResourceTable::builtin();
        let area = nav_area(app);
        action_for_event(&event, app, tui, &resources, &Theme::default(), area)
    }

    #[test]
    fn test_click_on_other_item_navigates() {
        let app = test_app();
        let mut tui = TuiState::new(app.destinations.len(), app.layout);
        // Bar occupies rows 20..24; the second item spans columns 30..60
        let action = act(&app, &mut tui, TuiEvent::MouseClick(45, 21));
        assert_eq!(
            action,
            Some(Action::DestinationClicked {
                route: "explore".to_string(),
                was_selected: false
            })
        );
        assert_eq!(tui.focus.focused, 1);
    }

    #[test]
    fn test_click_on_active_item_reports_reselect() {
        let mut app = test_app();
        app.current_location = Some("home/item-1".to_string());
        let mut tui = TuiState::new(app.destinations.len(), app.layout);
        let action = act(&app, &mut tui, TuiEvent::MouseClick(5, 22));
        assert_eq!(
            action,
            Some(Action::DestinationClicked {
                route: "home".to_string(),
                was_selected: true
            })
        );
    }

    #[test]
    fn test_click_outside_surface_is_ignored() {
        let app = test_app();
        let mut tui = TuiState::new(app.destinations.len(), app.layout);
        assert_eq!(act(&app, &mut tui, TuiEvent::MouseClick(45, 5)), None);
    }

    #[test]
    fn test_keyboard_activation() {
        let app = test_app();
        let mut tui = TuiState::new(app.destinations.len(), app.layout);
        assert_eq!(act(&app, &mut tui, TuiEvent::Right), None);
        assert_eq!(
            act(&app, &mut tui, TuiEvent::Activate),
            Some(Action::DestinationClicked {
                route: "explore".to_string(),
                was_selected: false
            })
        );
        assert_eq!(
            act(&app, &mut tui, TuiEvent::InputChar('3')),
            Some(Action::DestinationClicked {
                route: "library".to_string(),
                was_selected: false
            })
        );
    }

    #[test]
    fn test_rail_uses_vertical_keys() {
        let mut app = test_app();
        app.layout = Layout::Rail;
        let mut tui = TuiState::new(app.destinations.len(), app.layout);
        act(&app, &mut tui, TuiEvent::Right);
        assert_eq!(tui.focus.focused, 0);
        act(&app, &mut tui, TuiEvent::Down);
        assert_eq!(tui.focus.focused, 1);
    }

    #[test]
    fn test_command_keys() {
        let app = test_app();
        let mut tui = TuiState::new(app.destinations.len(), app.layout);
        assert_eq!(act(&app, &mut tui, TuiEvent::Quit), Some(Action::Quit));
        assert_eq!(act(&app, &mut tui, TuiEvent::ForceQuit), Some(Action::Quit));
        assert_eq!(act(&app, &mut tui, TuiEvent::Back), Some(Action::Back));
        assert_eq!(
            act(&app, &mut tui, TuiEvent::InputChar('o')),
            Some(Action::OpenDetail)
        );
        assert_eq!(
            act(&app, &mut tui, TuiEvent::InputChar('l')),
            Some(Action::ToggleLayout)
        );
        assert_eq!(act(&app, &mut tui, TuiEvent::Resize), None);
    }
}
