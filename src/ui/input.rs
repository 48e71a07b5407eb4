//! Terminal input watcher
//!
//! Polls crossterm on the blocking pool. Quit keys cancel the shared
//! shutdown token; resizes ask the refresh loop for a redraw.

use crate::consts::cli_consts::timing;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Requests from the terminal to the refresh loop.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Repaint the current state without refreshing.
    Redraw,
}

/// `q`, `Esc` or `Ctrl-C`.
pub fn is_quit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

pub fn spawn_input_watcher(
    redraw: mpsc::Sender<InputEvent>,
    shutdown: CancellationToken,
) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        while !shutdown.is_cancelled() {
            match event::poll(timing::input_poll()) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(e) => {
                    log::error!("Terminal input failed: {}", e);
                    shutdown.cancel();
                    break;
                }
            }

            match event::read() {
                Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                    if is_quit_key(&key) {
                        log::info!("Quit requested");
                        shutdown.cancel();
                        break;
                    }
                }
                Ok(Event::Resize(..)) => {
                    // A full queue already holds a pending redraw
                    let _ = redraw.try_send(InputEvent::Redraw);
                }
                Ok(_) => {}
                Err(e) => {
                    log::error!("Terminal input failed: {}", e);
                    shutdown.cancel();
                    break;
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_keys() {
        assert!(is_quit_key(&KeyEvent::new(
            KeyCode::Char('q'),
            KeyModifiers::NONE
        )));
        assert!(is_quit_key(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_quit_key(&KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_quit_key(&KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::NONE
        )));
        assert!(!is_quit_key(&KeyEvent::new(
            KeyCode::Char('Q'),
            KeyModifiers::SHIFT
        )));
    }
}
