//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
    setup::cancel_on_ctrl_c,
};
use crate::refresh::RefreshLoop;
use crate::ui::ConsoleRenderer;
use std::error::Error;
use tokio::sync::mpsc;

/// Runs the refresh loop printing one line per cycle until Ctrl+C.
pub async fn run_headless_mode(session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.base_url, session.interval.as_secs());
    cancel_on_ctrl_c(&session.shutdown);

    // No terminal input in this mode
    let (_, input) = mpsc::channel(1);

    let mut refresh = RefreshLoop::new(
        session.source,
        ConsoleRenderer::stdout(),
        session.state,
        session.interval,
    );
    refresh.run(input, session.shutdown).await?;

    print_session_shutdown();
    print_session_exit_success();
    Ok(())
}
