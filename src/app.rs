//! Application state and event loop.

use std::cell::Cell;
use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{backend::Backend, layout::Rect, Terminal};

use termshell_config::Config;
use termshell_core::{Event, EventHandler, PointerEvent, PointerKind};
use termshell_logger as logger;
use termshell_resize::{Axis, PointerSource, ResizeConfig, ResizeController, SurfaceHandle};
use termshell_theme::Theme;

use crate::ui::{self, ShellLayout};

/// Event poll timeout.
const TICK_RATE: Duration = Duration::from_millis(250);

/// One mouse-resizable region of the shell.
pub struct ResizablePane {
    pub controller: ResizeController,
    /// Rect the controller measures, filled in by the render pass
    pub surface: SurfaceHandle,
    /// Last size delivered through the resize callback
    pub reported: Rc<Cell<Option<u16>>>,
    /// Pointer is over the handle
    pub hovered: bool,
}

impl ResizablePane {
    fn new(config: ResizeConfig, source: &PointerSource) -> Self {
        let surface = SurfaceHandle::new();
        let controller = ResizeController::new(config, surface.clone(), source.clone());

        let reported = Rc::new(Cell::new(None));
        let sink = Rc::clone(&reported);
        controller.on_resize(move |size| sink.set(Some(size)));

        Self {
            controller,
            surface,
            reported,
            hovered: false,
        }
    }
}

/// Terminal IDE shell: sidebar, editor and an optional terminal panel.
pub struct App {
    pub config: Config,
    pub theme: &'static Theme,
    /// Window-level pointer events
    pub pointer_source: PointerSource,
    /// Sidebar width
    pub sidebar: ResizablePane,
    /// Editor height; present only while the terminal panel is shown
    pub editor: Option<ResizablePane>,
    /// Top-level sidebar entries
    pub entries: Vec<String>,
    /// Whole terminal area
    pub screen: Rect,
    pub should_quit: bool,
}

impl App {
    /// Create the shell for a screen of `width` x `height` cells.
    pub fn new(config: Config, width: u16, height: u16) -> Self {
        let pointer_source = PointerSource::new();
        let sidebar = ResizablePane::new(
            ResizeConfig::from_settings(Axis::Horizontal, &config.layout.sidebar),
            &pointer_source,
        );
        let editor = config.layout.show_terminal.then(|| {
            ResizablePane::new(
                ResizeConfig::from_settings(Axis::Vertical, &config.layout.editor),
                &pointer_source,
            )
        });
        let theme = Theme::get_by_name(&config.general.theme);

        Self {
            config,
            theme,
            pointer_source,
            sidebar,
            editor,
            entries: Vec::new(),
            screen: Rect::new(0, 0, width, height),
            should_quit: false,
        }
    }

    /// Fill the sidebar with the entries of `dir`.
    pub fn load_entries(&mut self, dir: &Path) {
        match read_entries(dir) {
            Ok(entries) => self.entries = entries,
            Err(e) => logger::error(format!("Failed to read {}: {}", dir.display(), e)),
        }
    }

    /// Current screen split.
    pub fn layout(&self) -> ShellLayout {
        ShellLayout::compute(
            self.screen,
            &self.sidebar.controller,
            self.editor.as_ref().map(|pane| &pane.controller),
        )
    }

    /// Run the main loop until quit.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let size = terminal.size()?;
        self.screen = Rect::new(0, 0, size.width, size.height);
        let event_handler = EventHandler::new(TICK_RATE);

        while !self.should_quit {
            terminal.draw(|frame| ui::render(frame, self))?;
            self.handle_event(event_handler.next()?);
        }

        self.cancel_gestures();
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Resize(width, height) => {
                self.screen = Rect::new(0, 0, width, height);
            }
            Event::FocusLost => self.cancel_gestures(),
            Event::FocusGained | Event::Tick => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let step = i32::from(self.config.layout.nudge_step);

        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE)
            | (KeyCode::Char('c'), KeyModifiers::CONTROL) => self.should_quit = true,
            (KeyCode::Esc, _) => self.cancel_gestures(),
            (KeyCode::Left, KeyModifiers::ALT) => {
                self.sidebar.controller.nudge(-step);
            }
            (KeyCode::Right, KeyModifiers::ALT) => {
                self.sidebar.controller.nudge(step);
            }
            (KeyCode::Up, KeyModifiers::ALT) => {
                if let Some(editor) = &self.editor {
                    editor.controller.nudge(-step);
                }
            }
            (KeyCode::Down, KeyModifiers::ALT) => {
                if let Some(editor) = &self.editor {
                    editor.controller.nudge(step);
                }
            }
            (KeyCode::Char('t'), KeyModifiers::ALT) => self.toggle_terminal(),
            _ => {}
        }
    }

    /// Route a mouse event: handle-scoped presses first, then the
    /// window-level source.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let Some(event) = PointerEvent::from_mouse(mouse) else {
            return;
        };
        let layout = self.layout();

        if event.kind == PointerKind::Move {
            self.sidebar.hovered = event.is_inside(layout.sidebar.handle);
            if let (Some(editor), Some(editor_layout)) = (&mut self.editor, layout.editor) {
                editor.hovered = event.is_inside(editor_layout.handle);
            }
        }

        if event.kind == PointerKind::Down {
            let armed = self
                .sidebar
                .controller
                .pointer_down(&event, layout.sidebar.handle);
            if !armed {
                if let (Some(editor), Some(editor_layout)) = (&self.editor, layout.editor) {
                    editor.controller.pointer_down(&event, editor_layout.handle);
                }
            }
        }

        self.pointer_source.dispatch(&event);
    }

    /// Show or hide the terminal panel.
    ///
    /// Hiding drops the editor's controller, which releases any gesture
    /// listeners it holds.
    pub fn toggle_terminal(&mut self) {
        if self.editor.take().is_none() {
            self.editor = Some(ResizablePane::new(
                ResizeConfig::from_settings(Axis::Vertical, &self.config.layout.editor),
                &self.pointer_source,
            ));
            logger::info("Terminal panel shown");
        } else {
            logger::info("Terminal panel hidden");
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.sidebar.controller.is_dragging()
            || self
                .editor
                .as_ref()
                .is_some_and(|editor| editor.controller.is_dragging())
    }

    fn cancel_gestures(&mut self) {
        self.sidebar.controller.cancel();
        if let Some(editor) = &self.editor {
            editor.controller.cancel();
        }
    }
}

/// Sorted entry names of `dir`, directories first with a trailing `/`.
pub fn read_entries(dir: &Path) -> Result<Vec<String>> {
    let mut dirs = Vec::new();
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type()?.is_dir() {
            dirs.push(format!("{}/", name));
        } else {
            files.push(name);
        }
    }

    dirs.sort();
    files.sort();
    dirs.extend(files);
    Ok(dirs)
}
