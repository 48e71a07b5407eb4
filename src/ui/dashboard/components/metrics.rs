//! Dashboard metrics component
//!
//! Renders the metric lines and the memory gauge

use super::super::view::DashboardView;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render the metrics block in its single foreground color.
pub fn render_metrics(f: &mut Frame, area: Rect, view: &DashboardView) {
    let lines: Vec<Line> = view
        .lines
        .iter()
        .map(|line| Line::from(line.as_str()))
        .collect();

    let metrics = Paragraph::new(lines)
        .style(Style::default().fg(view.lines_color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(metrics, area);
}

/// Render the memory usage gauge.
pub fn render_memory_gauge(f: &mut Frame, area: Rect, view: &DashboardView) {
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title("Mem Usage")
                .title_style(Style::default().fg(Color::Cyan))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::White)),
        )
        .gauge_style(
            Style::default()
                .fg(view.gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(view.gauge_percent.min(100))
        .label(view.gauge_label.as_str());
    f.render_widget(gauge, area);
}
