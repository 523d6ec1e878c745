//! Rendering of a resizable panel and its drag handle.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::Widget,
};
use termshell_theme::Theme;

use crate::{ResizeController, SurfaceHandle};

/// Handle appearance per interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HandleStyle {
    pub idle: Style,
    pub hover: Style,
    pub dragging: Style,
}

impl HandleStyle {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            idle: Style::default().fg(theme.handle).bg(theme.bg),
            hover: Style::default().fg(theme.handle_hover).bg(theme.bg),
            dragging: Style::default().fg(theme.handle_dragging).bg(theme.bg),
        }
    }
}

/// Host content drawn at the controller's current size, followed by the
/// handle strip on the trailing edge.
///
/// Rendering also records the content rect into the panel's
/// [`SurfaceHandle`], which is what the controller measures while dragging.
pub struct ResizablePanel<'a, W> {
    controller: &'a ResizeController,
    content: W,
    surface: Option<&'a SurfaceHandle>,
    handle_style: HandleStyle,
    style: Style,
    hovered: bool,
}

impl<'a, W: Widget> ResizablePanel<'a, W> {
    pub fn new(controller: &'a ResizeController, content: W) -> Self {
        Self {
            controller,
            content,
            surface: None,
            handle_style: HandleStyle::default(),
            style: Style::default(),
            hovered: false,
        }
    }

    /// Surface slot to update with the rendered content rect.
    pub fn surface(mut self, surface: &'a SurfaceHandle) -> Self {
        self.surface = Some(surface);
        self
    }

    pub fn handle_style(mut self, handle_style: HandleStyle) -> Self {
        self.handle_style = handle_style;
        self
    }

    /// Base style applied to the content region before the content draws.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Pointer is over the handle.
    pub fn hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }
}

impl<W: Widget> Widget for ResizablePanel<'_, W> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = self.controller.layout(area);

        if let Some(surface) = self.surface {
            surface.set_rect(layout.content);
        }

        buf.set_style(layout.content, self.style);
        self.content.render(layout.content, buf);

        let style = if self.controller.is_dragging() {
            self.handle_style.dragging
        } else if self.hovered {
            self.handle_style.hover
        } else {
            self.handle_style.idle
        };
        let symbol = self.controller.config().axis.handle_symbol();

        for y in layout.handle.top()..layout.handle.bottom() {
            for x in layout.handle.left()..layout.handle.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(symbol).set_style(style);
                }
            }
        }
    }
}
