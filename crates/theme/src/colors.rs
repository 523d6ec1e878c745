//! Theme color definitions.

use ratatui::style::Color;

/// Application theme with semantic color assignments.
///
/// - 2 base colors (bg, fg)
/// - 2 accented colors (accented_bg, accented_fg)
/// - 1 disabled color
/// - 3 resize handle colors (idle, hover, dragging)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Theme name for display
    pub name: &'static str,

    // === Base ===
    /// Panel backgrounds
    pub bg: Color,
    /// Main text
    pub fg: Color,

    // === Accented ===
    /// Status bar background
    pub accented_bg: Color,
    /// Panel titles, directory entries
    pub accented_fg: Color,

    /// Inactive elements, secondary text
    pub disabled: Color,

    // === Resize handle ===
    pub handle: Color,
    pub handle_hover: Color,
    pub handle_dragging: Color,
}

impl Default for Theme {
    fn default() -> Self {
        *Self::get_by_name("default")
    }
}
