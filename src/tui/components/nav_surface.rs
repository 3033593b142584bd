//! # Navigation Surface
//!
//! The renderable description shared by the bar and the rail.
//!
//! A [`NavSurface`] is built fresh for every frame from the destinations, the
//! current location and the display flags. It owns everything needed to draw
//! the surface (`Widget`), to map a terminal cell back to an item
//! (`hit_test`), and to produce the outward click event (`click`).
//!
//! ```text
//! destinations + location ──▶ render_bar / render_rail ──▶ NavSurface
//!                                                           │  │  │
//!                                                  Widget ◀─┘  │  └─▶ NavClick
//!                                                   hit_test ◀─┘
//! ```
//!
//! Selection is computed once per item when the surface is built, so the
//! `was_selected` flag of a click always agrees with what was drawn.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::action::Action;
use crate::core::destination::Destination;
use crate::core::resources::ResourceProvider;
use crate::core::route_matcher::selection;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;
use crate::tui::theme::{INDICATOR_ALPHA, Theme, composite};

/// Rows used by one rail item (padding, icon, padding).
pub const RAIL_ITEM_HEIGHT: u16 = 3;

const ELLIPSIS: char = '…';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Items side by side, equal widths (bar).
    Horizontal,
    /// Items stacked and vertically centred (rail).
    Vertical,
}

/// Resolved colours for one surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceColors {
    pub container: Color,
    pub content: Color,
    pub selected: Color,
    pub unselected: Color,
    pub indicator: Color,
}

impl SurfaceColors {
    /// Colours for a surface sitting on `container`.
    pub fn new(theme: &Theme, container: Color, content: Color) -> Self {
        Self {
            container,
            content,
            selected: theme.primary,
            unselected: theme.on_surface_variant,
            indicator: composite(theme.primary, container, INDICATOR_ALPHA),
        }
    }
}

/// One destination as it will be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct NavItem<'a> {
    pub destination: &'a Destination,
    pub selected: bool,
    /// Resolved glyph for the active or inactive icon.
    pub icon: String,
    /// Resolved title; `None` when labels are hidden.
    pub label: Option<String>,
    /// Resolved title, always present, for assistive output and logs.
    pub content_description: String,
}

impl<'a> NavItem<'a> {
    pub fn new(
        destination: &'a Destination,
        selected: bool,
        show_label: bool,
        resources: &dyn ResourceProvider,
    ) -> Self {
        let title = resources.string(&destination.title_key);
        Self {
            destination,
            selected,
            icon: resources.icon(destination.icon_for(selected)),
            label: show_label.then(|| title.clone()),
            content_description: title,
        }
    }
}

/// Outward event: an item was activated.
///
/// `was_selected` is the selection the item had when it was activated, so the
/// router can treat a re-tap on the active destination specially.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavClick<'a> {
    pub destination: &'a Destination,
    pub was_selected: bool,
}

impl From<NavClick<'_>> for Action {
    fn from(click: NavClick<'_>) -> Self {
        Action::DestinationClicked {
            route: click.destination.route.clone(),
            was_selected: click.was_selected,
        }
    }
}

/// Renderable description of a bar or rail.
#[derive(Debug, Clone, PartialEq)]
pub struct NavSurface<'a> {
    pub orientation: Orientation,
    pub colors: SurfaceColors,
    pub items: Vec<NavItem<'a>>,
    /// Keyboard focus, drawn underlined.
    pub focused: Option<usize>,
}

impl<'a> NavSurface<'a> {
    /// Build the items for `destinations`, evaluating selection once each.
    pub fn build(
        orientation: Orientation,
        colors: SurfaceColors,
        destinations: &'a [Destination],
        current_location: Option<&str>,
        resources: &dyn ResourceProvider,
        show_labels: bool,
    ) -> Self {
        let items = destinations
            .iter()
            .zip(selection(current_location, destinations))
            .map(|(destination, selected)| {
                NavItem::new(destination, selected, show_labels, resources)
            })
            .collect();
        Self {
            orientation,
            colors,
            items,
            focused: None,
        }
    }

    pub fn with_focus(mut self, focused: Option<usize>) -> Self {
        self.focused = focused.filter(|&i| i < self.items.len());
        self
    }

    /// Number of label elements this surface will draw.
    pub fn label_count(&self) -> usize {
        self.items.iter().filter(|item| item.label.is_some()).count()
    }

    /// Indices of the items currently rendered as selected.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| item.selected.then_some(i))
            .collect()
    }

    /// The click event for item `index`, or `None` if out of range.
    pub fn click(&self, index: usize) -> Option<NavClick<'a>> {
        self.items.get(index).map(|item| NavClick {
            destination: item.destination,
            was_selected: item.selected,
        })
    }

    /// Invoke `on_item_click` with the destination and its selection state.
    ///
    /// Returns `false` (and does not call back) when `index` is out of range.
    pub fn activate<F>(&self, index: usize, on_item_click: F) -> bool
    where
        F: FnOnce(&Destination, bool),
    {
        match self.click(index) {
            Some(click) => {
                on_item_click(click.destination, click.was_selected);
                true
            }
            None => false,
        }
    }

    /// Cell rectangle of each item when the surface is drawn into `area`.
    pub fn item_areas(&self, area: Rect) -> Vec<Rect> {
        let count = self.items.len();
        if count == 0 {
            return Vec::new();
        }
        match self.orientation {
            Orientation::Horizontal => {
                Layout::horizontal(vec![Constraint::Fill(1); count])
                    .split(area)
                    .to_vec()
            }
            Orientation::Vertical => {
                // Equal flexible space above and below the group
                let mut constraints = Vec::with_capacity(count + 2);
                constraints.push(Constraint::Fill(1));
                constraints.extend(vec![Constraint::Length(RAIL_ITEM_HEIGHT); count]);
                constraints.push(Constraint::Fill(1));
                let rows = Layout::vertical(constraints).split(area);
                rows[1..=count].to_vec()
            }
        }
    }

    /// Index of the item under the cell `(column, row)`.
    pub fn hit_test(&self, area: Rect, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.item_areas(area)
            .iter()
            .position(|rect| rect.contains(position))
    }

    fn icon_style(&self, item: &NavItem<'_>, focused: bool) -> Style {
        let style = if item.selected {
            Style::default()
                .fg(self.colors.selected)
                .bg(self.colors.indicator)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.colors.unselected)
        };
        if focused {
            style.add_modifier(Modifier::UNDERLINED)
        } else {
            style
        }
    }

    fn label_style(&self, item: &NavItem<'_>, focused: bool) -> Style {
        let color = if item.selected {
            self.colors.selected
        } else {
            self.colors.unselected
        };
        let style = Style::default().fg(color);
        if focused {
            style.add_modifier(Modifier::UNDERLINED)
        } else {
            style
        }
    }
}

impl Widget for &NavSurface<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        buf.set_style(
            area,
            Style::default()
                .bg(self.colors.container)
                .fg(self.colors.content),
        );

        for (index, (item, rect)) in self.items.iter().zip(self.item_areas(area)).enumerate() {
            if rect.is_empty() {
                continue;
            }
            let focused = self.focused == Some(index);

            // Icon row, then the label row if present; the pair is centred in the item
            let content_rows = if item.label.is_some() { 2 } else { 1 };
            let top = rect.y + rect.height.saturating_sub(content_rows) / 2;

            let icon_row = Rect::new(rect.x, top, rect.width, 1);
            Line::from(Span::styled(
                format!(" {} ", item.icon),
                self.icon_style(item, focused),
            ))
            .centered()
            .render(icon_row, buf);

            if let Some(label) = &item.label
                && top + 1 < rect.bottom()
            {
                let label_row = Rect::new(rect.x, top + 1, rect.width, 1);
                Line::from(Span::styled(
                    truncate_with_ellipsis(label, rect.width as usize),
                    self.label_style(item, focused),
                ))
                .centered()
                .render(label_row, buf);
            }
        }
    }
}

/// Fit `text` into `max_width` columns on one line, ending in `…` when cut.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push(ELLIPSIS);
    out
}

/// Keyboard focus over the items of a surface.
///
/// Props (`len`, `orientation`) are synced from the current surface each
/// frame; `focused` is persistent state.
#[derive(Debug, Clone)]
pub struct NavFocus {
    pub focused: usize,
    pub len: usize,
    pub orientation: Orientation,
}

/// Events emitted by [`NavFocus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusEvent {
    /// Activate the item at this index.
    Activate(usize),
}

impl NavFocus {
    pub fn new(len: usize, orientation: Orientation) -> Self {
        Self {
            focused: 0,
            len,
            orientation,
        }
    }

    /// Update props, clamping focus if the item count shrank.
    pub fn sync(&mut self, len: usize, orientation: Orientation) {
        self.len = len;
        self.orientation = orientation;
        self.focused = self.focused.min(len.saturating_sub(1));
    }

    fn step(&mut self, forward: bool) {
        if self.len == 0 {
            return;
        }
        self.focused = if forward {
            (self.focused + 1) % self.len
        } else {
            (self.focused + self.len - 1) % self.len
        };
    }
}

impl EventHandler for NavFocus {
    type Event = FocusEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FocusEvent> {
        let (back, forward) = match self.orientation {
            Orientation::Horizontal => (TuiEvent::Left, TuiEvent::Right),
            Orientation::Vertical => (TuiEvent::Up, TuiEvent::Down),
        };
        match event {
            e if *e == back => {
                self.step(false);
                None
            }
            e if *e == forward => {
                self.step(true);
                None
            }
            TuiEvent::Activate if self.len > 0 => Some(FocusEvent::Activate(self.focused)),
            TuiEvent::InputChar(c) => {
                let index = c.to_digit(10)?.checked_sub(1)? as usize;
                if index < self.len {
                    self.focused = index;
                    Some(FocusEvent::Activate(index))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}
