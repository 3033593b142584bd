//! # Theme
//!
//! Colour roles used by the navigation surfaces, named after the Material
//! roles they stand in for. Defaults are the Material 3 dark baseline.
//!
//! Terminals have no alpha channel, so translucent colours (the selection
//! indicator) are composited against the container colour up front.

use log::warn;
use ratatui::style::Color;
use std::str::FromStr;

use crate::core::config::ThemeConfig;

/// Opacity of the selection indicator over the container.
pub const INDICATOR_ALPHA: f32 = 0.4;

pub const PRIMARY: Color = Color::Rgb(0xD0, 0xBC, 0xFF); // #D0BCFF
pub const ON_SURFACE_VARIANT: Color = Color::Rgb(0xCA, 0xC4, 0xD0); // #CAC4D0
pub const SURFACE_CONTAINER: Color = Color::Rgb(0x21, 0x1F, 0x26); // #211F26

/// Fallback indicator for colours that cannot be composited (indexed palette).
const OPAQUE_INDICATOR: Color = Color::DarkGray;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Selected icon and label colour.
    pub primary: Color,
    /// Unselected icon and label colour, and default content colour.
    pub on_surface_variant: Color,
    /// Default container background.
    pub surface_container: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: PRIMARY,
            on_surface_variant: ON_SURFACE_VARIANT,
            surface_container: SURFACE_CONTAINER,
        }
    }
}

impl Theme {
    /// Apply `[theme]` overrides. Unparseable colours are logged and skipped.
    pub fn from_config(config: &ThemeConfig) -> Self {
        let base = Self::default();
        Self {
            primary: parse_or(config.primary.as_deref(), base.primary, "primary"),
            on_surface_variant: parse_or(
                config.on_surface_variant.as_deref(),
                base.on_surface_variant,
                "on_surface_variant",
            ),
            surface_container: parse_or(
                config.surface_container.as_deref(),
                base.surface_container,
                "surface_container",
            ),
        }
    }
}

fn parse_or(value: Option<&str>, fallback: Color, role: &str) -> Color {
    match value {
        None => fallback,
        Some(s) => Color::from_str(s).unwrap_or_else(|_| {
            warn!("Ignoring theme.{} = {:?}: not a colour", role, s);
            fallback
        }),
    }
}

/// Composite `fg` at `alpha` over an opaque `bg`.
///
/// Both colours must map to RGB; otherwise a neutral indicator colour is
/// returned.
pub fn composite(fg: Color, bg: Color, alpha: f32) -> Color {
    let (Some((fr, fg_, fb)), Some((br, bg_, bb))) = (to_rgb(fg), to_rgb(bg)) else {
        return OPAQUE_INDICATOR;
    };
    let a = alpha.clamp(0.0, 1.0);
    let mix = |f: u8, b: u8| (f as f32 * a + b as f32 * (1.0 - a)).round().clamp(0.0, 255.0) as u8;
    Color::Rgb(mix(fr, br), mix(fg_, bg_), mix(fb, bb))
}

fn to_rgb(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        Color::Black => Some((0, 0, 0)),
        Color::White => Some((0xFF, 0xFF, 0xFF)),
        Color::Gray => Some((0xC0, 0xC0, 0xC0)),
        Color::DarkGray => Some((0x80, 0x80, 0x80)),
        Color::Red => Some((0x80, 0, 0)),
        Color::Green => Some((0, 0x80, 0)),
        Color::Yellow => Some((0x80, 0x80, 0)),
        Color::Blue => Some((0, 0, 0x80)),
        Color::Magenta => Some((0x80, 0, 0x80)),
        Color::Cyan => Some((0, 0x80, 0x80)),
        Color::LightRed => Some((0xFF, 0, 0)),
        Color::LightGreen => Some((0, 0xFF, 0)),
        Color::LightYellow => Some((0xFF, 0xFF, 0)),
        Color::LightBlue => Some((0, 0, 0xFF)),
        Color::LightMagenta => Some((0xFF, 0, 0xFF)),
        Color::LightCyan => Some((0, 0xFF, 0xFF)),
        _ => None,
    }
}
