//! Event System
//!
//! Types and implementations for dashboard activity events

use crate::logging::{LogLevel, should_log_with_env};
use crate::source::error::FetchTag;
use chrono::Local;
use std::fmt::Display;

/// What produced an event.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Origin {
    /// The refresh loop itself (cycle summaries).
    Refresh,
    /// One of the metric sources.
    Source(FetchTag),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub origin: Origin,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(origin: Origin, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            origin,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn refresh(msg: String) -> Self {
        Self::new(Origin::Refresh, msg, EventType::Refresh, LogLevel::Info)
    }

    pub fn source_with_level(
        tag: FetchTag,
        msg: String,
        event_type: EventType,
        log_level: LogLevel,
    ) -> Self {
        Self::new(Origin::Source(tag), msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}
