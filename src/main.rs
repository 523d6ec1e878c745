mod app;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use termshell_config::Config;
use termshell_logger::{self as logger, LogLevel};
use termshell_theme::set_themes_dir;

use crate::app::App;

fn main() -> Result<()> {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config, using defaults: {:#}", e);
            Config::default()
        }
    };

    if let Ok(themes_dir) = Config::get_themes_dir() {
        set_themes_dir(themes_dir);
    }

    if let Ok(log_path) = config.log_file_path() {
        let min_level = config
            .logging
            .min_level
            .parse()
            .unwrap_or(LogLevel::Info);
        logger::init(log_path, config.logging.max_entries, min_level);
    }
    logger::info("termshell starting");

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let size = terminal.size()?;

    let mut app = App::new(config, size.width, size.height);
    if let Ok(cwd) = std::env::current_dir() {
        app.load_entries(&cwd);
    }

    let result = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        logger::error(format!("{:#}", err));
        eprintln!("Error: {:?}", err);
    }

    logger::info("termshell exiting");
    Ok(())
}
