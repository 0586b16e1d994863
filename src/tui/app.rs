//! Interactive participant list viewer.

use std::io;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info};

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key, handle_mouse};
use super::render::render;
use super::state::AppState;

/// Owns the viewer state for the lifetime of the terminal session.
pub struct App {
    state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            should_quit: false,
        }
    }

    /// Runs the TUI application until the user quits.
    pub fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal, tick_rate);

        // Restore the terminal even if the loop failed.
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        tick_rate: Duration,
    ) -> io::Result<()> {
        let events = EventHandler::new(tick_rate);
        info!(tables = self.state.tables.len(), "viewer started");

        while !self.should_quit {
            terminal.draw(|frame| render(frame, &mut self.state))?;

            let action = match events.next() {
                Ok(Event::Key(key)) => handle_key(&mut self.state, key),
                Ok(Event::Mouse(mouse)) => handle_mouse(&mut self.state, mouse),
                Ok(Event::Tick) | Ok(Event::Resize) => KeyAction::None,
                Err(_) => {
                    debug!("event channel closed");
                    KeyAction::Quit
                }
            };
            if action == KeyAction::Quit {
                self.should_quit = true;
            }
        }

        info!("viewer stopped");
        Ok(())
    }
}
