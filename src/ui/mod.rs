//! Rendering
//!
//! The refresh loop hands its state to a `Renderer` after every cycle and
//! on every redraw request. The terminal renderer draws the dashboard with
//! ratatui; the console renderer prints one line per cycle.

mod console;
pub mod dashboard;
pub mod input;
mod terminal;

pub use console::ConsoleRenderer;
pub use dashboard::{DashboardState, DashboardView};
pub use terminal::TerminalRenderer;

use std::io;

/// Paints a read-only view of the dashboard state.
pub trait Renderer {
    fn render(&mut self, state: &DashboardState) -> io::Result<()>;
}
