//! Full-screen terminal renderer

use super::Renderer;
use super::dashboard::{DashboardState, render_dashboard};
use ratatui::Terminal;
use ratatui::backend::Backend;
use std::io;

pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self { terminal }
    }

    #[cfg(test)]
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn render(&mut self, state: &DashboardState) -> io::Result<()> {
        self.terminal.draw(|f| render_dashboard(f, state))?;
        Ok(())
    }
}
