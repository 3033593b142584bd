//! # Screen View Component
//!
//! Placeholder content for the current location: the breadcrumb of the
//! location, the titles of the active destinations, and key hints. The group
//! is centred vertically.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

const HINTS: &[&str] = &[
    "←/→ ↑/↓ focus   Enter or 1-9 open   click to select",
    "o open detail   Backspace back",
    "c labels   h contrast   l bar/rail   q quit",
];

pub struct ScreenView<'a> {
    pub location: Option<&'a str>,
    /// Titles of the destinations currently selected.
    pub active_titles: Vec<String>,
}

impl<'a> ScreenView<'a> {
    pub fn new(location: Option<&'a str>, active_titles: Vec<String>) -> Self {
        Self {
            location,
            active_titles,
        }
    }

    fn breadcrumb(&self) -> String {
        match self.location {
            Some(location) => location.split('/').collect::<Vec<_>>().join(" › "),
            None => String::from("No location yet"),
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(Span::styled(
            self.breadcrumb(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))];

        let active = if self.active_titles.is_empty() {
            String::from("no destination selected")
        } else {
            format!("in {}", self.active_titles.join(" + "))
        };
        lines.push(Line::from(Span::styled(
            active,
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::default());
        lines.extend(
            HINTS
                .iter()
                .map(|hint| Line::from(Span::styled(*hint, Style::default().fg(Color::DarkGray)))),
        );
        lines
    }
}

impl Component for ScreenView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = self.lines();
        let [content] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, content);
    }
}
