//! Dashboard utility functions
//!
//! Color thresholds and small formatting helpers shared by the components

use crate::events::{EventType, Origin};
use crate::source::error::FetchTag;
use ratatui::prelude::Color;

/// Red at or above the warning threshold, green below it.
pub fn gauge_color(percent: u16, warning_percent: u16) -> Color {
    if percent >= warning_percent {
        Color::Red
    } else {
        Color::Green
    }
}

/// Red when the validator has been slashed, yellow otherwise.
pub fn metrics_color(slashed: bool) -> Color {
    if slashed { Color::Red } else { Color::Yellow }
}

/// Color of an activity log message.
pub fn event_color(origin: Origin, event_type: EventType) -> Color {
    match (origin, event_type) {
        (_, EventType::Success) => Color::Green,
        (_, EventType::Stale) => Color::LightRed,
        (Origin::Refresh, _) => Color::Cyan,
        (Origin::Source(FetchTag::DbSize), _) => Color::Magenta,
        (Origin::Source(_), _) => Color::Yellow,
    }
}

/// `"YYYY-MM-DD HH:MM:SS"` → `"HH:MM:SS"`.
pub fn format_compact_timestamp(timestamp: &str) -> String {
    match timestamp.split_once(' ') {
        Some((_, time)) if time.len() == 8 => time.to_string(),
        _ => timestamp.to_string(),
    }
}
