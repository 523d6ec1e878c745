//! Theme loading from TOML files.

use anyhow::Result;
use ratatui::style::Color;
use serde::Deserialize;
use std::path::Path;

use crate::Theme;

/// Color representation in TOML: a name or hex string understood by
/// ratatui (`"DarkGray"`, `"light-cyan"`, `"#1e1e2e"`) or an RGB triple.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TomlColor {
    Named(String),
    Rgb { rgb: [u8; 3] },
}

impl TomlColor {
    /// Unrecognized names render as white.
    fn to_color(&self) -> Color {
        match self {
            TomlColor::Named(name) => name.parse().unwrap_or(Color::White),
            TomlColor::Rgb { rgb } => Color::Rgb(rgb[0], rgb[1], rgb[2]),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct TomlColors {
    bg: TomlColor,
    fg: TomlColor,
    accented_bg: TomlColor,
    accented_fg: TomlColor,
    disabled: TomlColor,
    handle: TomlColor,
    handle_hover: TomlColor,
    handle_dragging: TomlColor,
}

#[derive(Debug, Clone, Deserialize)]
struct TomlTheme {
    name: String,
    colors: TomlColors,
}

impl TomlColors {
    fn into_theme(self, name: &'static str) -> Theme {
        Theme {
            name,
            bg: self.bg.to_color(),
            fg: self.fg.to_color(),
            accented_bg: self.accented_bg.to_color(),
            accented_fg: self.accented_fg.to_color(),
            disabled: self.disabled.to_color(),
            handle: self.handle.to_color(),
            handle_hover: self.handle_hover.to_color(),
            handle_dragging: self.handle_dragging.to_color(),
        }
    }
}

/// Load theme from TOML file.
///
/// Returns the parsed theme with a leaked static name string.
pub fn load_theme(path: &Path) -> Result<Theme> {
    let content = std::fs::read_to_string(path)?;
    let toml_theme: TomlTheme = toml::from_str(&content)?;

    // Leak the name string to get 'static lifetime
    let name: &'static str = Box::leak(toml_theme.name.into_boxed_str());

    Ok(toml_theme.colors.into_theme(name))
}

/// Load theme from TOML string with a static name.
pub fn load_theme_from_str(content: &str, name: &'static str) -> Result<Theme> {
    let toml_theme: TomlTheme = toml::from_str(content)?;
    Ok(toml_theme.colors.into_theme(name))
}
