//! Shell rendering.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use termshell_logger as logger;
use termshell_resize::{HandleStyle, PanelLayout, ResizablePanel, ResizeController};

use crate::app::{App, ResizablePane};

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellLayout {
    /// Everything above the status bar
    pub main: Rect,
    pub status: Rect,
    /// Sidebar split of `main`
    pub sidebar: PanelLayout,
    /// Editor split of the workspace, when the terminal is shown
    pub editor: Option<PanelLayout>,
}

impl ShellLayout {
    pub fn compute(
        screen: Rect,
        sidebar: &ResizeController,
        editor: Option<&ResizeController>,
    ) -> Self {
        let [main, status] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(screen);
        let sidebar = sidebar.layout(main);
        let editor = editor.map(|controller| controller.layout(sidebar.rest));

        Self {
            main,
            status,
            sidebar,
            editor,
        }
    }

    /// Area right of the sidebar handle.
    pub fn workspace(&self) -> Rect {
        self.sidebar.rest
    }
}

/// Render the whole shell.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let layout = app.layout();
    let theme = app.theme;
    let base = Style::default().fg(theme.fg).bg(theme.bg);
    let handle_style = HandleStyle::from_theme(theme);

    let sidebar = ResizablePanel::new(&app.sidebar.controller, sidebar_widget(app))
        .surface(&app.sidebar.surface)
        .handle_style(handle_style)
        .style(base)
        .hovered(app.sidebar.hovered);
    frame.render_widget(sidebar, layout.main);

    match (&app.editor, layout.editor) {
        (Some(editor), Some(editor_layout)) => {
            let panel = ResizablePanel::new(&editor.controller, editor_widget(app))
                .surface(&editor.surface)
                .handle_style(handle_style)
                .style(base)
                .hovered(editor.hovered);
            frame.render_widget(panel, layout.workspace());
            frame.render_widget(terminal_widget(app), editor_layout.rest);
        }
        _ => frame.render_widget(editor_widget(app), layout.workspace()),
    }

    frame.render_widget(status_widget(app), layout.status);
}

fn sidebar_widget(app: &App) -> List<'_> {
    let theme = app.theme;
    let items: Vec<ListItem> = app
        .entries
        .iter()
        .map(|entry| {
            let style = if entry.ends_with('/') {
                Style::default().fg(theme.accented_fg)
            } else {
                Style::default().fg(theme.fg)
            };
            ListItem::new(entry.as_str()).style(style)
        })
        .collect();

    List::new(items).block(
        Block::new()
            .title(" Explorer ")
            .title_style(Style::default().add_modifier(Modifier::BOLD)),
    )
}

fn editor_widget(app: &App) -> Paragraph<'static> {
    let theme = app.theme;
    let hint = Style::default().fg(theme.disabled);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  termshell",
            Style::default()
                .fg(theme.accented_fg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::styled("  Drag a handle to resize a panel", hint),
        Line::styled("  Alt+Left/Right   sidebar width", hint),
        Line::styled("  Alt+Up/Down      editor height", hint),
        Line::styled("  Alt+T            toggle terminal", hint),
        Line::styled("  Esc              cancel drag", hint),
        Line::styled("  q                quit", hint),
    ];

    Paragraph::new(lines)
        .block(Block::new().title(" Editor "))
        .style(Style::default().fg(theme.fg).bg(theme.bg))
}

fn terminal_widget(app: &App) -> Paragraph<'static> {
    let theme = app.theme;
    Paragraph::new("$ ")
        .block(
            Block::new()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.disabled))
                .title(" Terminal "),
        )
        .style(Style::default().fg(theme.fg).bg(theme.bg))
}

fn pane_status(name: &str, pane: &ResizablePane) -> String {
    match (pane.controller.is_dragging(), pane.reported.get()) {
        (true, Some(size)) => format!("{} {} (dragging)", name, size),
        _ => format!("{} {}", name, pane.controller.size()),
    }
}

fn status_widget(app: &App) -> Paragraph<'static> {
    let theme = app.theme;
    let mut parts = vec![pane_status("sidebar", &app.sidebar)];
    if let Some(editor) = &app.editor {
        parts.push(pane_status("editor", editor));
    }
    if app.is_dragging() {
        parts.push("Esc cancels".to_string());
    } else if let Some(entry) = logger::get_entries().last() {
        parts.push(entry.message.clone());
    }

    Paragraph::new(format!(" {}", parts.join(" │ ")))
        .style(Style::default().fg(theme.fg).bg(theme.accented_bg))
}
