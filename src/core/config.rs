//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.waypoint/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use clap::ValueEnum;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::Layout;
use crate::core::destination::{Destination, default_destinations};
use crate::core::resources::ResourceTable;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WaypointConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub destinations: Vec<Destination>,
    #[serde(default)]
    pub strings: HashMap<String, String>,
    #[serde(default)]
    pub icons: HashMap<String, String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub layout: Option<Layout>,
    pub start_route: Option<String>,
    pub high_contrast: Option<bool>,
    pub compact_labels: Option<bool>,
}

/// Colour overrides as strings (`"#d0bcff"`, `"cyan"`, ...). Parsed by the TUI.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ThemeConfig {
    pub primary: Option<String>,
    pub on_surface_variant: Option<String>,
    pub surface_container: Option<String>,
}

/// Values given on the command line. `None`/`false` means "not specified".
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub layout: Option<Layout>,
    pub location: Option<String>,
    pub high_contrast: bool,
    pub compact_labels: bool,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub layout: Layout,
    /// Initial location handed to the router. `None` when no destinations exist.
    pub start_location: Option<String>,
    pub high_contrast: bool,
    pub compact_labels: bool,
    pub theme: ThemeConfig,
    pub destinations: Vec<Destination>,
    pub resources: ResourceTable,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.waypoint/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".waypoint").join("config.toml"))
}

/// Load config from `~/.waypoint/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `WaypointConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<WaypointConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(WaypointConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(WaypointConfig::default());
    }

    load_config_from(&path)
}

/// Load and parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<WaypointConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: WaypointConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r##"# Waypoint Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# layout = "bar"                     # "bar" or "rail"
# start_route = "home"
# high_contrast = false              # pure black container
# compact_labels = false             # icon-only bar

# [theme]
# primary = "#d0bcff"
# on_surface_variant = "#cac4d0"
# surface_container = "#211f26"

# [[destinations]]
# route = "home"
# title_key = "home"
# icon_active = "home_filled"
# icon_inactive = "home_outlined"

# [strings]
# home = "Home"

# [icons]
# home_filled = "◆"
# home_outlined = "◇"
"##;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &WaypointConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Layout: CLI → env → config → default
    let layout = cli
        .layout
        .or_else(|| env_layout("WAYPOINT_LAYOUT"))
        .or(config.general.layout)
        .unwrap_or_default();

    let destinations = if config.destinations.is_empty() {
        default_destinations()
    } else {
        config.destinations.clone()
    };

    // Start location: CLI → env → config → first destination
    let start_location = cli
        .location
        .clone()
        .or_else(|| std::env::var("WAYPOINT_START_ROUTE").ok())
        .or_else(|| config.general.start_route.clone())
        .or_else(|| destinations.first().map(|d| d.route.clone()));

    // Flags: a CLI switch can only turn a setting on
    let high_contrast = cli.high_contrast
        || env_flag("WAYPOINT_HIGH_CONTRAST")
            .or(config.general.high_contrast)
            .unwrap_or(false);
    let compact_labels = cli.compact_labels || config.general.compact_labels.unwrap_or(false);

    let mut resources = ResourceTable::builtin();
    resources.extend(&config.strings, &config.icons);

    ResolvedConfig {
        layout,
        start_location,
        high_contrast,
        compact_labels,
        theme: config.theme.clone(),
        destinations,
        resources,
    }
}

fn env_layout(name: &str) -> Option<Layout> {
    let value = std::env::var(name).ok()?;
    match Layout::from_str(&value, true) {
        Ok(layout) => Some(layout),
        Err(e) => {
            warn!("Ignoring {}={}: {}", name, value, e);
            None
        }
    }
}

fn env_flag(name: &str) -> Option<bool> {
    let value = std::env::var(name).ok()?;
    parse_flag(&value).or_else(|| {
        warn!("Ignoring {}={}: expected true/false", name, value);
        None
    })
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
