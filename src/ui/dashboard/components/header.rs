//! Dashboard header component
//!
//! Renders the node version as title with the help line below it

use super::super::view::DashboardView;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_header(f: &mut Frame, area: Rect, view: &DashboardView) {
    let header = Paragraph::new(view.help)
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .title(view.title.as_str())
                .title_style(Style::default().add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}
