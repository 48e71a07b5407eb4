//! Dashboard state management
//!
//! Holds the latest metrics snapshot together with the per-source failure
//! bookkeeping used to mark fields stale.

use crate::config::Config;
use crate::consts::cli_consts::{MAX_ACTIVITY_LOGS, PLACEHOLDER, STALE_SUFFIX, UNKNOWN};
use crate::events::Event;
use crate::metrics::Metrics;
use crate::source::error::FetchTag;

use std::collections::{BTreeMap, BTreeSet, VecDeque};

/// How a field should currently be presented.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Freshness {
    /// Never fetched and not yet failing long enough to be stale.
    Pending,
    /// Last fetch (or a recent one) succeeded.
    Fresh,
    /// Failed `stale_after` or more consecutive cycles, with a prior value.
    Stale,
    /// Failed `stale_after` or more consecutive cycles, never had a value.
    Unknown,
}

/// Dashboard state owned by the refresh loop and read by renderers.
#[derive(Debug)]
pub struct DashboardState {
    /// Latest known good values.
    pub metrics: Metrics,
    /// Gauge percentage for the current snapshot, 0..=100.
    pub memory_percent: u16,
    /// The last health response reported a total memory of zero.
    pub memory_total_zero: bool,
    /// Activity logs for display (last `MAX_ACTIVITY_LOGS` events)
    pub activity_logs: VecDeque<Event>,
    /// Events produced by the most recent cycle only.
    pub last_cycle: Vec<Event>,
    /// Number of completed refresh cycles.
    pub cycles: u64,
    /// Local time of the last completed cycle.
    pub last_refresh: Option<String>,

    memory_warning_percent: u16,
    stale_after: u32,
    failures: BTreeMap<FetchTag, u32>,
    succeeded: BTreeSet<FetchTag>,
}

impl DashboardState {
    pub fn new(config: &Config) -> Self {
        Self {
            metrics: Metrics::default(),
            memory_percent: 0,
            memory_total_zero: false,
            activity_logs: VecDeque::new(),
            last_cycle: Vec::new(),
            cycles: 0,
            last_refresh: None,
            memory_warning_percent: config.memory_warning_percent,
            stale_after: config.stale_after_failures,
            failures: BTreeMap::new(),
            succeeded: BTreeSet::new(),
        }
    }

    pub fn memory_warning_percent(&self) -> u16 {
        self.memory_warning_percent
    }

    pub fn stale_after(&self) -> u32 {
        self.stale_after
    }

    /// Consecutive failed cycles for `tag`.
    pub fn consecutive_failures(&self, tag: FetchTag) -> u32 {
        self.failures.get(&tag).copied().unwrap_or(0)
    }

    pub fn has_succeeded(&self, tag: FetchTag) -> bool {
        self.succeeded.contains(&tag)
    }

    pub fn freshness(&self, tag: FetchTag) -> Freshness {
        let stale = self.consecutive_failures(tag) >= self.stale_after;
        match (self.has_succeeded(tag), stale) {
            (true, false) => Freshness::Fresh,
            (true, true) => Freshness::Stale,
            (false, true) => Freshness::Unknown,
            (false, false) => Freshness::Pending,
        }
    }

    /// `value` decorated according to the freshness of its source.
    pub fn display(&self, tag: FetchTag, value: &str) -> String {
        match self.freshness(tag) {
            Freshness::Fresh => value.to_string(),
            Freshness::Stale => format!("{}{}", value, STALE_SUFFIX),
            Freshness::Unknown => UNKNOWN.to_string(),
            Freshness::Pending => PLACEHOLDER.to_string(),
        }
    }

    pub(super) fn record_failure(&mut self, tag: FetchTag) -> u32 {
        let count = self.failures.entry(tag).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    /// Resets the failure counter, returning how many failures preceded.
    pub(super) fn record_success(&mut self, tag: FetchTag) -> u32 {
        self.succeeded.insert(tag);
        self.failures.remove(&tag).unwrap_or(0)
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> DashboardState {
        DashboardState::new(&Config::default())
    }

    #[test]
    fn test_never_fetched_shows_placeholder() {
        let state = state();
        assert_eq!(state.display(FetchTag::Peers, ""), PLACEHOLDER);
        assert_eq!(state.freshness(FetchTag::Peers), Freshness::Pending);
    }

    #[test]
    fn test_stale_after_threshold() {
        let mut state = state();
        state.record_success(FetchTag::Peers);
        state.record_failure(FetchTag::Peers);
        state.record_failure(FetchTag::Peers);
        assert_eq!(state.display(FetchTag::Peers, "52"), "52");

        state.record_failure(FetchTag::Peers);
        assert_eq!(state.display(FetchTag::Peers, "52"), "52 (stale)");

        assert_eq!(state.record_success(FetchTag::Peers), 3);
        assert_eq!(state.display(FetchTag::Peers, "52"), "52");
    }

    #[test]
    fn test_stale_without_value_is_unknown() {
        let mut state = state();
        for _ in 0..3 {
            state.record_failure(FetchTag::Version);
        }
        assert_eq!(state.display(FetchTag::Version, ""), UNKNOWN);
    }

    #[test]
    fn test_activity_log_is_bounded() {
        let mut state = state();
        for i in 0..(MAX_ACTIVITY_LOGS + 5) {
            state.add_to_activity_log(Event::refresh(format!("cycle {}", i)));
        }
        assert_eq!(state.activity_logs.len(), MAX_ACTIVITY_LOGS);
        assert_eq!(state.activity_logs.front().unwrap().msg, "cycle 5");
    }
}
