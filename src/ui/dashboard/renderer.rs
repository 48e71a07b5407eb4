//! Dashboard main renderer

use super::components::{footer, header, logs, metrics};
use super::state::DashboardState;
use super::view::DashboardView;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    let view = DashboardView::from_state(state);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(view.lines.len() as u16 + 2),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .split(f.area());

    header::render_header(f, chunks[0], &view);
    metrics::render_metrics(f, chunks[1], &view);
    metrics::render_memory_gauge(f, chunks[2], &view);
    logs::render_logs_panel(f, chunks[3], state);
    footer::render_footer(f, chunks[4], state);
}
