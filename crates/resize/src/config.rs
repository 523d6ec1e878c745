//! Static resize configuration.

use serde::{Deserialize, Serialize};
use termshell_config::PanelSizeSettings;

use crate::Axis;

/// Axis and size bounds of one resizable panel, in cells.
///
/// Callers are expected to keep `min_size <= initial_size <= max_size`.
/// Nothing here enforces it: with `min_size > max_size` every clamped
/// value resolves to `min_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeConfig {
    pub axis: Axis,
    pub initial_size: u16,
    pub min_size: u16,
    pub max_size: u16,
}

impl ResizeConfig {
    pub fn new(axis: Axis, initial_size: u16, min_size: u16, max_size: u16) -> Self {
        Self {
            axis,
            initial_size,
            min_size,
            max_size,
        }
    }

    /// Build from a `[layout.*]` section of the config file.
    pub fn from_settings(axis: Axis, settings: &PanelSizeSettings) -> Self {
        Self::new(axis, settings.initial, settings.min, settings.max)
    }

    /// Constrain a raw offset to the bounds: `max(min, min(max, raw))`.
    pub fn clamp(&self, raw: i32) -> u16 {
        let clamped = raw
            .min(i32::from(self.max_size))
            .max(i32::from(self.min_size));
        // Result lies within [min_size, max(min_size, max_size)]
        clamped as u16
    }

    /// Whether `min_size <= initial_size <= max_size` holds.
    pub fn is_consistent(&self) -> bool {
        self.min_size <= self.initial_size && self.initial_size <= self.max_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_within_bounds() {
        let config = ResizeConfig::new(Axis::Horizontal, 200, 100, 400);
        assert_eq!(config.clamp(450), 400);
        assert_eq!(config.clamp(70), 100);
        assert_eq!(config.clamp(250), 250);
        assert_eq!(config.clamp(-30), 100);
        assert_eq!(config.clamp(i32::MAX), 400);
    }

    #[test]
    fn test_inverted_bounds_resolve_to_min() {
        let config = ResizeConfig::new(Axis::Vertical, 20, 30, 10);
        assert!(!config.is_consistent());
        for raw in [-5, 0, 10, 20, 30, 1000] {
            assert_eq!(config.clamp(raw), 30);
        }
    }

    #[test]
    fn test_from_settings() {
        let settings = PanelSizeSettings {
            initial: 30,
            min: 16,
            max: 80,
        };
        let config = ResizeConfig::from_settings(Axis::Horizontal, &settings);
        assert_eq!(config, ResizeConfig::new(Axis::Horizontal, 30, 16, 80));
        assert!(config.is_consistent());
    }
}
