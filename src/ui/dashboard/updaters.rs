//! Dashboard state update logic
//!
//! Folds the result of one refresh cycle into the state and produces the
//! cycle's activity events.

use super::state::DashboardState;

use crate::error_classifier::ErrorClassifier;
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use crate::metrics::Metrics;
use crate::source::error::{FetchError, FetchTag};
use crate::units;

use chrono::Local;
use std::collections::BTreeSet;
use std::time::Duration;

impl DashboardState {
    /// Merge a cycle's snapshot and errors into the state.
    pub fn apply_cycle(&mut self, metrics: Metrics, errors: &[FetchError], elapsed: Duration) {
        let classifier = ErrorClassifier::new();
        let failed: BTreeSet<FetchTag> = errors.iter().map(|e| e.tag).collect();
        let mut events = Vec::new();

        for error in errors {
            let level = classifier.classify_fetch_error(error);
            log::log!(log::Level::from(level), "{}", error);
            events.push(Event::source_with_level(
                error.tag,
                error.to_string(),
                EventType::Error,
                level,
            ));
        }

        let mut refreshed = 0;
        for tag in FetchTag::SOURCES {
            if failed.contains(&tag) {
                if self.record_failure(tag) == self.stale_after() {
                    log::warn!("{} marked stale", tag);
                    events.push(Event::source_with_level(
                        tag,
                        format!(
                            "{} failed {} times in a row, showing last known value",
                            tag,
                            self.stale_after()
                        ),
                        EventType::Stale,
                        LogLevel::Warn,
                    ));
                }
            } else {
                refreshed += 1;
                let previous_failures = self.record_success(tag);
                if previous_failures > 0 {
                    log::info!("{} recovered after {} failures", tag, previous_failures);
                    events.push(Event::source_with_level(
                        tag,
                        format!("{} recovered after {} failed cycles", tag, previous_failures),
                        EventType::Success,
                        LogLevel::Info,
                    ));
                }
            }
        }

        self.memory_total_zero = failed.contains(&FetchTag::MemoryTotalZero);
        self.memory_percent =
            units::percent_used(metrics.memory_used_bytes, metrics.memory_total_bytes)
                .unwrap_or(0);
        self.metrics = metrics;

        let summary = format!(
            "Refreshed {}/{} sources in {} ms",
            refreshed,
            FetchTag::SOURCES.len(),
            elapsed.as_millis()
        );
        log::debug!("{}", summary);
        events.insert(0, Event::refresh(summary));

        for event in &events {
            self.add_to_activity_log(event.clone());
        }
        self.last_cycle = events;
        self.cycles += 1;
        self.last_refresh = Some(Local::now().format("%Y-%m-%d %H:%M:%S").to_string());
    }
}
