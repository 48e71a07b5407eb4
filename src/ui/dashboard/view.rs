//! Display-ready projection of the dashboard state.
//!
//! Every renderer draws from a `DashboardView`, so the terminal and the
//! headless output always agree on wording, thresholds and colors.

use super::state::DashboardState;
use super::utils::{gauge_color, metrics_color};
use crate::consts::cli_consts::{BALANCE_UNIT, DEFAULT_TITLE, HELP_TEXT};
use crate::source::error::FetchTag;
use crate::units;
use ratatui::prelude::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    /// Header title: the node version, or the application name.
    pub title: String,
    /// Header text.
    pub help: &'static str,
    /// Metrics block, one entry per line.
    pub lines: Vec<String>,
    /// Single foreground color of the metrics block.
    pub lines_color: Color,
    pub gauge_percent: u16,
    pub gauge_color: Color,
    pub gauge_label: String,
}

impl DashboardView {
    pub fn from_state(state: &DashboardState) -> Self {
        let metrics = &state.metrics;

        let (balance, validator, slashed) = match &metrics.validator {
            Some(record) => (
                format!(
                    "{} {}",
                    units::smallest_unit_to_display(record.balance_raw),
                    BALANCE_UNIT
                ),
                if record.is_slashed {
                    format!("#{} SLASHED", record.validator_index)
                } else {
                    format!("#{}", record.validator_index)
                },
                record.is_slashed,
            ),
            None => (String::new(), String::new(), false),
        };

        let memory = format!(
            "{} / {}",
            units::bytes_to_gb(metrics.memory_used_bytes),
            units::bytes_to_gb(metrics.memory_total_bytes)
        );

        let lines = vec![
            format!("Node Balance: {}", state.display(FetchTag::Balance, &balance)),
            format!("Validator   : {}", state.display(FetchTag::Balance, &validator)),
            format!(
                "System Load : {}",
                state.display(
                    FetchTag::Health,
                    &units::float_to_display(metrics.system_load_1m)
                )
            ),
            format!(
                "Peer Count  : {}",
                state.display(FetchTag::Peers, metrics.peer_count.trim())
            ),
            format!(
                "DB Size     : {}",
                state.display(FetchTag::DbSize, &metrics.db_size_display)
            ),
            format!("Memory      : {}", state.display(FetchTag::Health, &memory)),
        ];

        let version = metrics.node_version.trim();
        let title = if version.is_empty() {
            DEFAULT_TITLE.to_string()
        } else {
            version.to_string()
        };

        Self {
            title,
            help: HELP_TEXT,
            lines,
            lines_color: metrics_color(slashed),
            gauge_percent: state.memory_percent,
            gauge_color: gauge_color(state.memory_percent, state.memory_warning_percent()),
            gauge_label: format!("{}%", state.memory_percent),
        }
    }
}
