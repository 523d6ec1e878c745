//! Resize axis and the panel split it implies.

use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};

/// Dimension along which a panel is resized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Width, handle on the right edge
    #[default]
    Horizontal,
    /// Height, handle on the bottom edge
    Vertical,
}

/// Regions of an area split by a resizable panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelLayout {
    /// Sized region holding the panel content
    pub content: Rect,
    /// One-cell strip trailing the content
    pub handle: Rect,
    /// Whatever is left of the area after the handle
    pub rest: Rect,
}

impl Axis {
    /// Raw size for a pointer at (`column`, `row`): distance from the
    /// leading edge of `rect` along this axis. Negative when the pointer
    /// is before the edge.
    pub fn offset(self, column: u16, row: u16, rect: Rect) -> i32 {
        match self {
            Axis::Horizontal => i32::from(column) - i32::from(rect.x),
            Axis::Vertical => i32::from(row) - i32::from(rect.y),
        }
    }

    /// Extent of `rect` along this axis.
    pub fn extent(self, rect: Rect) -> u16 {
        match self {
            Axis::Horizontal => rect.width,
            Axis::Vertical => rect.height,
        }
    }

    /// Split `area` into content, handle and remainder for a panel of `size`.
    ///
    /// The handle occupies the cell right after the content, so a pointer
    /// resting on it measures exactly `size`. When `size` does not fit, the
    /// content shrinks so the handle stays on the last cell of the area.
    pub fn split(self, area: Rect, size: u16) -> PanelLayout {
        let extent = self.extent(area);
        if extent == 0 {
            let empty = Rect {
                width: 0,
                height: 0,
                ..area
            };
            return PanelLayout {
                content: area,
                handle: empty,
                rest: empty,
            };
        }

        let content_len = size.min(extent - 1);
        let rest_len = extent - content_len - 1;

        match self {
            Axis::Horizontal => PanelLayout {
                content: Rect {
                    width: content_len,
                    ..area
                },
                handle: Rect {
                    x: area.x + content_len,
                    width: 1,
                    ..area
                },
                rest: Rect {
                    x: area.x + content_len + 1,
                    width: rest_len,
                    ..area
                },
            },
            Axis::Vertical => PanelLayout {
                content: Rect {
                    height: content_len,
                    ..area
                },
                handle: Rect {
                    y: area.y + content_len,
                    height: 1,
                    ..area
                },
                rest: Rect {
                    y: area.y + content_len + 1,
                    height: rest_len,
                    ..area
                },
            },
        }
    }

    /// Handle glyph drawn along the strip.
    pub fn handle_symbol(self) -> &'static str {
        match self {
            Axis::Horizontal => "│",
            Axis::Vertical => "─",
        }
    }
}
