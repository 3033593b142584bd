//! Waypoint library exports: route selection and navigation surfaces

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Which navigation surface hosts the destinations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Horizontal bar along the bottom edge.
    #[default]
    Bar,
    /// Vertical rail along the left edge.
    Rail,
}

impl Layout {
    pub fn toggled(self) -> Self {
        match self {
            Layout::Bar => Layout::Rail,
            Layout::Rail => Layout::Bar,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Layout::Bar => "bar",
            Layout::Rail => "rail",
        }
    }
}
