//! TUI mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
    setup::cancel_on_ctrl_c,
};
use crate::consts::cli_consts::INPUT_QUEUE_SIZE;
use crate::refresh::RefreshLoop;
use crate::ui::TerminalRenderer;
use crate::ui::input::spawn_input_watcher;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{error::Error, io};
use tokio::sync::mpsc;

/// Raw mode and the alternate screen, restored on drop so every exit path
/// leaves the terminal usable.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
    }
}

/// Runs the full-screen dashboard until a quit key or Ctrl+C.
pub async fn run_tui_mode(session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("TUI", &session.base_url, session.interval.as_secs());
    cancel_on_ctrl_c(&session.shutdown);

    let result = {
        let _guard = TerminalGuard::enter()?;
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

        let (redraw_tx, redraw_rx) = mpsc::channel(INPUT_QUEUE_SIZE);
        let watcher = spawn_input_watcher(redraw_tx, session.shutdown.clone());

        let mut refresh = RefreshLoop::new(
            session.source,
            TerminalRenderer::new(terminal),
            session.state,
            session.interval,
        );
        let result = refresh.run(redraw_rx, session.shutdown.clone()).await;

        // The watcher exits within one poll interval once cancelled
        session.shutdown.cancel();
        let _ = watcher.await;
        result
    };

    result?;
    print_session_shutdown();
    print_session_exit_success();
    Ok(())
}
