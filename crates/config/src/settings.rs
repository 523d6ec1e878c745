//! Configuration structures for termshell settings.

use serde::{Deserialize, Deserializer, Serialize};

use crate::defaults;

/// Application configuration with nested sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// General application settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// Panel layout settings
    #[serde(default)]
    pub layout: LayoutSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// General application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Selected theme name
    #[serde(default = "default_theme_name")]
    pub theme: String,
}

/// Size bounds of one resizable panel, in terminal cells.
///
/// Values are passed through as-is: a file with `min > max` is accepted
/// and produces a panel pinned at `min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSizeSettings {
    pub initial: u16,
    pub min: u16,
    pub max: u16,
}

/// Panel section as written in the file; absent keys come from the
/// panel's own defaults.
#[derive(Deserialize)]
struct PartialPanelSize {
    initial: Option<u16>,
    min: Option<u16>,
    max: Option<u16>,
}

impl PartialPanelSize {
    fn or(self, fallback: PanelSizeSettings) -> PanelSizeSettings {
        PanelSizeSettings {
            initial: self.initial.unwrap_or(fallback.initial),
            min: self.min.unwrap_or(fallback.min),
            max: self.max.unwrap_or(fallback.max),
        }
    }
}

/// Panel layout settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSettings {
    /// Sidebar width (resized horizontally)
    #[serde(default = "default_sidebar", deserialize_with = "deserialize_sidebar")]
    pub sidebar: PanelSizeSettings,

    /// Editor height above the terminal (resized vertically)
    #[serde(default = "default_editor", deserialize_with = "deserialize_editor")]
    pub editor: PanelSizeSettings,

    /// Show the terminal panel on startup
    #[serde(default = "default_show_terminal")]
    pub show_terminal: bool,

    /// Cells moved per keyboard resize step
    #[serde(default = "default_nudge_step")]
    pub nudge_step: u16,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log file path (optional)
    #[serde(default)]
    pub file_path: Option<String>,

    /// Minimum log level (debug, info, warn, error)
    #[serde(default = "default_min_level")]
    pub min_level: String,

    /// In-memory log entries kept for the status line
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

// Default value functions for serde
fn default_theme_name() -> String {
    defaults::THEME_NAME.to_string()
}

fn default_sidebar() -> PanelSizeSettings {
    PanelSizeSettings {
        initial: defaults::SIDEBAR_WIDTH,
        min: defaults::SIDEBAR_MIN_WIDTH,
        max: defaults::SIDEBAR_MAX_WIDTH,
    }
}

fn default_editor() -> PanelSizeSettings {
    PanelSizeSettings {
        initial: defaults::EDITOR_HEIGHT,
        min: defaults::EDITOR_MIN_HEIGHT,
        max: defaults::EDITOR_MAX_HEIGHT,
    }
}

fn deserialize_sidebar<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<PanelSizeSettings, D::Error> {
    Ok(PartialPanelSize::deserialize(deserializer)?.or(default_sidebar()))
}

fn deserialize_editor<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<PanelSizeSettings, D::Error> {
    Ok(PartialPanelSize::deserialize(deserializer)?.or(default_editor()))
}

fn default_show_terminal() -> bool {
    defaults::SHOW_TERMINAL
}

fn default_nudge_step() -> u16 {
    defaults::NUDGE_STEP
}

fn default_min_level() -> String {
    defaults::MIN_LOG_LEVEL.to_string()
}

fn default_max_entries() -> usize {
    defaults::MAX_LOG_ENTRIES
}

// Default implementations
impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
        }
    }
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            sidebar: default_sidebar(),
            editor: default_editor(),
            show_terminal: default_show_terminal(),
            nudge_step: default_nudge_step(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file_path: None,
            min_level: default_min_level(),
            max_entries: default_max_entries(),
        }
    }
}
