//! Unified messaging system for session operations

use crate::cli_messages::{Tone, print_message};

/// Print session startup message
pub fn print_session_starting(mode: &str, base_url: &str, interval_secs: u64) {
    print_message(
        Tone::Info,
        &format!("Starting {} mode", mode),
        &format!("node {} every {}s", base_url, interval_secs),
    );
}

/// Print session shutdown message
pub fn print_session_shutdown() {
    print_message(Tone::Info, "Shutting down...", "");
}

/// Print session exit message
pub fn print_session_exit_success() {
    print_message(Tone::Success, "LightDash exited successfully", "");
}
