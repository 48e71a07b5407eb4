use crate::node::error::NodeError;
use crate::source::error::{FetchCause, FetchError};
use log::Level;
use std::io::ErrorKind;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::Trace,
            LogLevel::Debug => Level::Debug,
            LogLevel::Info => Level::Info,
            LogLevel::Warn => Level::Warn,
            LogLevel::Error => Level::Error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_fetch_error(&self, error: &FetchError) -> LogLevel {
        match &error.cause {
            FetchCause::Node(node_error) => self.classify_node_error(node_error),

            // A wrong path is a setup mistake; anything else may clear up on its own
            FetchCause::Filesystem(e) if e.kind() == ErrorKind::NotFound => LogLevel::Error,
            FetchCause::Filesystem(_) => LogLevel::Warn,

            FetchCause::Timeout(_) => LogLevel::Warn,
            FetchCause::NoValidator => LogLevel::Warn,
            FetchCause::ZeroMemoryTotal => LogLevel::Warn,
        }
    }

    fn classify_node_error(&self, error: &NodeError) -> LogLevel {
        match error {
            // Node restarting or overloaded
            NodeError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Wrong endpoint or rejected request
            NodeError::Http { .. } => LogLevel::Error,

            // Unexpected payload shape
            NodeError::Decode(_) => LogLevel::Error,

            // Network issues - usually temporary
            NodeError::Network(_) => LogLevel::Warn,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}
