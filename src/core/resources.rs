//! # Resources
//!
//! The surfaces never hard-code display text or glyphs. Title keys and icon
//! identifiers are resolved at render time through a [`ResourceProvider`].
//! What happens when a key is missing is the provider's business; the
//! surfaces render whatever comes back.

use log::debug;
use std::collections::HashMap;

/// Resolves localizable strings and icon identifiers.
pub trait ResourceProvider {
    /// Display text for a title key.
    fn string(&self, key: &str) -> String;

    /// Glyph (or short text) for an icon identifier.
    fn icon(&self, id: &str) -> String;
}

/// Map-backed resource provider, filled from the `[strings]` and `[icons]`
/// config tables on top of built-in defaults.
///
/// Missing entries fall back to the key itself.
#[derive(Debug, Clone, Default)]
pub struct ResourceTable {
    strings: HashMap<String, String>,
    icons: HashMap<String, String>,
}

impl ResourceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in strings and glyphs for the default destinations.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for (key, value) in [("home", "Home"), ("explore", "Explore"), ("library", "Library")] {
            table.insert_string(key, value);
        }
        for (id, glyph) in [
            ("home_filled", "◆"),
            ("home_outlined", "◇"),
            ("explore_filled", "▲"),
            ("explore_outlined", "△"),
            ("library_filled", "■"),
            ("library_outlined", "□"),
        ] {
            table.insert_icon(id, glyph);
        }
        table
    }

    pub fn insert_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }

    pub fn insert_icon(&mut self, id: impl Into<String>, glyph: impl Into<String>) {
        self.icons.insert(id.into(), glyph.into());
    }

    /// Overlay entries from another set of maps. Later entries win.
    pub fn extend(
        &mut self,
        strings: &HashMap<String, String>,
        icons: &HashMap<String, String>,
    ) {
        self.strings
            .extend(strings.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.icons
            .extend(icons.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
}

impl ResourceProvider for ResourceTable {
    fn string(&self, key: &str) -> String {
        match self.strings.get(key) {
            Some(value) => value.clone(),
            None => {
                debug!("No string resource for key '{}'", key);
                key.to_string()
            }
        }
    }

    fn icon(&self, id: &str) -> String {
        match self.icons.get(id) {
            Some(glyph) => glyph.clone(),
            None => {
                debug!("No icon resource for id '{}'", id);
                id.to_string()
            }
        }
    }
}
