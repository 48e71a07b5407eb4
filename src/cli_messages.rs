//! CLI command messaging
//!
//! Colored one-line messages for `init`, `status` and session start/stop.
//! Errors go to stderr, everything else to stdout.

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Tone {
    Info,
    Warn,
    Error,
    Success,
}

impl Tone {
    fn label(self) -> &'static str {
        match self {
            Tone::Info => "\x1b[1;36m[INFO]\x1b[0m",
            Tone::Warn => "\x1b[1;33m[WARN]\x1b[0m",
            Tone::Error => "\x1b[1;31m[ERROR]\x1b[0m",
            Tone::Success => "\x1b[1;32m[SUCCESS]\x1b[0m",
        }
    }
}

/// `[TONE] title<TAB> details`, details omitted when empty.
pub fn format_message(tone: Tone, title: &str, details: &str) -> String {
    if details.is_empty() {
        format!("{} {}", tone.label(), title)
    } else {
        format!("{} {}\t {}", tone.label(), title, details)
    }
}

pub fn print_message(tone: Tone, title: &str, details: &str) {
    let line = format_message(tone, title, details);
    match tone {
        Tone::Error => eprintln!("{}", line),
        _ => println!("{}", line),
    }
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message($crate::cli_messages::Tone::Info, $title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message($crate::cli_messages::Tone::Warn, $title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_message($crate::cli_messages::Tone::Error, $title, "")
    };
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message($crate::cli_messages::Tone::Error, $title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message($crate::cli_messages::Tone::Success, $title, &format!($($details)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message() {
        assert_eq!(
            format_message(Tone::Warn, "Fetch failed", "peers: timed out"),
            "\x1b[1;33m[WARN]\x1b[0m Fetch failed\t peers: timed out"
        );
        assert_eq!(
            format_message(Tone::Success, "Saved", ""),
            "\x1b[1;32m[SUCCESS]\x1b[0m Saved"
        );
    }
}
