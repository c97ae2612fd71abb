//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.playtab/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! Colours stay plain strings here; the TUI turns them into a theme once at
//! startup and rejects anything it cannot parse.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::tabs::TabKind;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PlaytabConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub colors: ColorsConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub library: LibraryConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub initial_tab: Option<TabKind>,
    pub show_layout_stats: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ColorsConfig {
    pub outer_border: Option<String>,
    pub highlight: Option<String>,
    pub active_dot: Option<String>,
    pub inactive_dot: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LayoutConfig {
    pub fallback_width: Option<u16>,
    pub fallback_height: Option<u16>,
    pub paginator: Option<PaginatorStyle>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LibraryConfig {
    pub demo_songs: Option<usize>,
    pub demo_stations: Option<usize>,
}

/// How the page indicator under a list is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaginatorStyle {
    /// One dot per page.
    #[default]
    Dots,
    /// `page/count`.
    Arabic,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_OUTER_BORDER: &str = "#00FFFF";
pub const DEFAULT_HIGHLIGHT: &str = "#FFFF00";
pub const DEFAULT_ACTIVE_DOT: &str = "252";
pub const DEFAULT_INACTIVE_DOT: &str = "238";
pub const DEFAULT_DEMO_SONGS: usize = 50;
pub const DEFAULT_DEMO_STATIONS: usize = 75;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub outer_border: String,
    pub highlight: String,
    pub active_dot: String,
    pub inactive_dot: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub initial_tab: TabKind,
    pub show_layout_stats: bool,
    pub palette: Palette,
    pub fallback_size: (u16, u16),
    pub paginator: PaginatorStyle,
    pub demo_songs: usize,
    pub demo_stations: usize,
}

/// Values given on the command line. `None` means "not specified".
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub initial_tab: Option<TabKind>,
    pub show_layout_stats: bool,
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

/// Returns the path to `~/.playtab/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".playtab").join("config.toml"))
}

/// Load config from `~/.playtab/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PlaytabConfig::default()`.
pub fn load_config() -> Result<PlaytabConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(PlaytabConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(PlaytabConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit path. A missing file is an error here.
pub fn load_config_from(path: &Path) -> Result<PlaytabConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: PlaytabConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r##"# playtab configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# initial_tab = "songs"              # "stations", "songs" or "placeholder"
# show_layout_stats = false          # pane/item/page numbers in the status line

# [colors]                           # "#RRGGBB", palette index or colour name
# outer_border = "#00FFFF"
# highlight = "#FFFF00"
# active_dot = "252"
# inactive_dot = "238"

# [layout]
# fallback_width = 80                # used when the terminal size is unknown
# fallback_height = 24
# paginator = "dots"                 # "dots" or "arabic"

# [library]
# demo_songs = 50
# demo_stations = 75
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
pub fn resolve(config: &PlaytabConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Initial tab: CLI → env → config → default
    let initial_tab = cli
        .initial_tab
        .or_else(|| env_tab("PLAYTAB_INITIAL_TAB"))
        .or(config.general.initial_tab)
        .unwrap_or_default();

    let colors = &config.colors;
    let palette = Palette {
        outer_border: pick(&colors.outer_border, DEFAULT_OUTER_BORDER),
        highlight: pick(&colors.highlight, DEFAULT_HIGHLIGHT),
        active_dot: pick(&colors.active_dot, DEFAULT_ACTIVE_DOT),
        inactive_dot: pick(&colors.inactive_dot, DEFAULT_INACTIVE_DOT),
    };

    ResolvedConfig {
        initial_tab,
        show_layout_stats: cli.show_layout_stats
            || config.general.show_layout_stats.unwrap_or(false),
        palette,
        fallback_size: (
            config
                .layout
                .fallback_width
                .unwrap_or(crate::core::geometry::FALLBACK_WIDTH),
            config
                .layout
                .fallback_height
                .unwrap_or(crate::core::geometry::FALLBACK_HEIGHT),
        ),
        paginator: config.layout.paginator.unwrap_or_default(),
        demo_songs: config.library.demo_songs.unwrap_or(DEFAULT_DEMO_SONGS),
        demo_stations: config.library.demo_stations.unwrap_or(DEFAULT_DEMO_STATIONS),
    }
}

fn pick(value: &Option<String>, default: &str) -> String {
    value.clone().unwrap_or_else(|| default.to_string())
}

fn env_tab(var: &str) -> Option<TabKind> {
    let value = std::env::var(var).ok()?;
    match TabKind::from_str_lenient(&value) {
        Some(tab) => Some(tab),
        None => {
            warn!("Ignoring {var}={value:?}: not a tab name");
            None
        }
    }
}

impl TabKind {
    fn from_str_lenient(value: &str) -> Option<TabKind> {
        TabKind::ALL
            .into_iter()
            .find(|tab| tab.label().eq_ignore_ascii_case(value.trim()))
    }
}
