//! Desktop shell: the keypad window in a terminal
//!
//! Keyboard and mouse events become [`Input`](crate::core::Input) presses;
//! errors open a modal dialog that must be dismissed before the keypad
//! accepts input again.

mod app;
mod input;
mod ui;

use std::io;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::info;

pub use app::DesktopApp;
pub use input::{InputHandler, KeyAction, Mode};
pub use ui::{hit_test, keypad_area, render, CalculatorUi, KEY_HINTS, WINDOW_TITLE};

/// Runs the desktop shell until the user quits
///
/// Takes over the terminal (raw mode, alternate screen, mouse capture) and
/// restores it on the way out, also when the event loop fails.
pub fn run() -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = DesktopApp::new();
    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Event loop: draw, read one event, apply it
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut DesktopApp) -> io::Result<()> {
    info!("desktop shell started");

    while !app.should_quit() {
        terminal.draw(|frame| render(app, frame))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                app.handle_mouse(mouse, Rect::new(0, 0, size.width, size.height));
            }
            _ => {}
        }
    }

    info!(display = app.display(), "desktop shell closed");
    Ok(())
}
