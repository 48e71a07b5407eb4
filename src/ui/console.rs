//! Headless renderer printing one summary line per refresh cycle

use super::Renderer;
use super::dashboard::{DashboardState, DashboardView};
use crate::events::EventType;
use std::io::{self, Write};

pub struct ConsoleRenderer<W: Write> {
    out: W,
    /// Cycle count at the last print; redraws of an unchanged state are skipped.
    printed_cycles: Option<u64>,
}

impl ConsoleRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            printed_cycles: None,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// `[timestamp] title | line | line | ... | Mem Usage: NN%`
pub fn summary_line(state: &DashboardState) -> String {
    let view = DashboardView::from_state(state);
    let mut parts = vec![view.title];
    parts.extend(view.lines);
    parts.push(format!("Mem Usage: {}", view.gauge_label));
    format!(
        "[{}] {}",
        state.last_refresh.as_deref().unwrap_or("-"),
        parts.join(" | ")
    )
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn render(&mut self, state: &DashboardState) -> io::Result<()> {
        if self.printed_cycles == Some(state.cycles) {
            return Ok(());
        }
        self.printed_cycles = Some(state.cycles);

        writeln!(self.out, "{}", summary_line(state))?;
        for event in state
            .last_cycle
            .iter()
            .filter(|e| e.event_type != EventType::Refresh && e.should_display())
        {
            writeln!(self.out, "  {}", event)?;
        }
        self.out.flush()
    }
}
