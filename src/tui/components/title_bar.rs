//! # TitleBar Component
//!
//! Top status bar showing where the router is and the latest status message.
//!
//! TitleBar is purely presentational: it receives all data as props and has
//! no internal state.
//!
//! The title text changes based on state:
//!
//! 1. **Location + status**: `"Waypoint ▸ library/item-1 | Labels: hidden"`
//! 2. **Location only**: `"Waypoint ▸ library/item-1"`
//! 3. **No location**: `"Waypoint ▸ (nowhere)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

/// Top status bar component.
pub struct TitleBar {
    /// Current location, if the router has one
    pub location: Option<String>,
    /// Status message (e.g. "library: back to top")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(location: Option<String>, status_message: String) -> Self {
        Self {
            location,
            status_message,
        }
    }

    fn title_text(&self) -> String {
        let location = self.location.as_deref().unwrap_or("(nowhere)");
        if self.status_message.is_empty() {
            format!("Waypoint ▸ {location}")
        } else {
            format!("Waypoint ▸ {location} | {}", self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::raw(self.title_text()), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new(
            Some("library/item-1".to_string()),
            "library: back to top".to_string(),
        );
        let text = rendered(&mut title_bar);
        assert!(text.contains("Waypoint"));
        assert!(text.contains("library/item-1"));
        assert!(text.contains("| library: back to top"));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new(Some("home".to_string()), String::new());
        let text = rendered(&mut title_bar);
        assert!(text.contains("home"));
        assert!(!text.contains('|'));
    }

    #[test]
    fn test_title_bar_without_location() {
        let mut title_bar = TitleBar::new(None, String::new());
        assert_eq!(title_bar.title_text(), "Waypoint ▸ (nowhere)");
        assert!(rendered(&mut title_bar).contains("(nowhere)"));
    }
}
