//! Terminal input pump.
//!
//! A background thread polls crossterm and forwards key presses, mouse
//! events and resizes over a channel.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind, MouseEvent};

/// Input delivered to the viewer loop.
#[derive(Debug)]
pub enum Event {
    /// Poll timeout, used to redraw the status line.
    Tick,
    /// Keyboard input (presses only).
    Key(KeyEvent),
    /// Mouse input.
    Mouse(MouseEvent),
    /// Terminal resize.
    Resize,
}

/// Receiving end of the input pump.
pub struct EventHandler {
    rx: Receiver<Event>,
    /// Held so `next` never sees a closed channel while the thread runs.
    _tx: Sender<Event>,
}

impl EventHandler {
    /// Starts the polling thread. A `Tick` is sent when nothing arrives
    /// within `tick_rate`.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            loop {
                let event = if event::poll(tick_rate).unwrap_or(false) {
                    match event::read() {
                        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                            Event::Key(key)
                        }
                        Ok(CrosstermEvent::Mouse(mouse)) => Event::Mouse(mouse),
                        Ok(CrosstermEvent::Resize(_, _)) => Event::Resize,
                        _ => continue,
                    }
                } else {
                    Event::Tick
                };
                if event_tx.send(event).is_err() {
                    break;
                }
            }
        });

        Self { rx, _tx: tx }
    }

    /// Blocks until the next event.
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}
