//! One-shot status report

use crate::config::Config;
use crate::metrics::Metrics;
use crate::node::NodeClient;
use crate::print_cmd_warn;
use crate::refresh::collect;
use crate::source::MetricSource;
use crate::source::error::FetchTag;
use crate::ui::{DashboardState, DashboardView};
use serde::Serialize;
use std::error::Error;
use std::time::Instant;

#[derive(Debug, Serialize)]
struct FetchErrorReport {
    tag: FetchTag,
    message: String,
}

#[derive(Debug, Serialize)]
struct StatusReport<'a> {
    metrics: &'a Metrics,
    memory_percent: u16,
    errors: Vec<FetchErrorReport>,
}

/// Runs exactly one refresh cycle and prints the result.
///
/// Fails only when every source failed.
pub async fn run_status(config: &Config, json: bool) -> Result<(), Box<dyn Error>> {
    let node = NodeClient::new(&config.base_url, config.request_timeout())?;
    let source = MetricSource::new(Box::new(node), config);
    let mut state = DashboardState::new(config);

    let started = Instant::now();
    let (metrics, errors) = collect(&source, &Metrics::default()).await;
    state.apply_cycle(metrics, &errors, started.elapsed());

    if json {
        let report = StatusReport {
            metrics: &state.metrics,
            memory_percent: state.memory_percent,
            errors: errors
                .iter()
                .map(|e| FetchErrorReport {
                    tag: e.tag,
                    message: e.cause.to_string(),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let view = DashboardView::from_state(&state);
        println!("{}", view.title);
        for line in &view.lines {
            println!("{}", line);
        }
        println!("Mem Usage   : {}", view.gauge_label);
        for error in &errors {
            print_cmd_warn!("Fetch failed", "{}", error);
        }
    }

    let all_failed = FetchTag::SOURCES
        .iter()
        .all(|tag| !state.has_succeeded(*tag));
    if all_failed {
        return Err(format!("no source could be read from {}", config.base_url).into());
    }
    Ok(())
}
