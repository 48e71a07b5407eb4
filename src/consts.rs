pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Defaults for every runtime setting plus the fixed display strings,
    //! organized by functional area.

    // =============================================================================
    // NODE CONNECTION DEFAULTS
    // =============================================================================

    /// Base URL of the beacon node HTTP API.
    pub const DEFAULT_BASE_URL: &str = "http://localhost:5052";

    /// Location of the beacon chain database on a stock Lighthouse install.
    pub const DEFAULT_DB_PATH: &str = "/var/lib/lighthouse/beacon-node/beacon/chain_db";

    /// Fixed client identifier sent with every request.
    pub const USER_AGENT: &str = "LightDash";

    /// Length of a `0x`-prefixed BLS public key (48 bytes, hex encoded).
    pub const PUBKEY_LEN: usize = 2 + 96;

    // =============================================================================
    // TIMING
    // =============================================================================

    /// Refresh period and deadlines for a single cycle
    pub mod timing {
        use std::time::Duration;

        /// Seconds between two refresh cycles
        pub const REFRESH_INTERVAL_SECS: u64 = 5;

        /// Deadline applied to every node request (milliseconds)
        pub const REQUEST_TIMEOUT_MS: u64 = 2_000;

        /// Deadline for the database directory walk (seconds)
        pub const DBSIZE_TIMEOUT_SECS: u64 = 10;

        /// How long the input watcher blocks waiting for a terminal event
        pub const INPUT_POLL_MS: u64 = 100;

        /// Helper function to get the input poll duration
        pub const fn input_poll() -> Duration {
            Duration::from_millis(INPUT_POLL_MS)
        }
    }

    // =============================================================================
    // THRESHOLDS
    // =============================================================================

    /// Memory usage percentage at which the gauge turns to the warning color.
    pub const MEMORY_WARNING_PERCENT: u16 = 75;

    /// Consecutive failures after which a field is shown as stale.
    pub const STALE_AFTER_FAILURES: u32 = 3;

    // =============================================================================
    // DISPLAY
    // =============================================================================

    /// Log filter used when `RUST_LOG` is unset or unparsable.
    pub const DEFAULT_LOG_FILTER: &str = "lightdash=info";

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Capacity of the channel carrying redraw requests from the input watcher.
    pub const INPUT_QUEUE_SIZE: usize = 16;

    /// Shown for a field that has never been fetched successfully.
    pub const PLACEHOLDER: &str = "—";

    /// Shown for a stale field that never had a value.
    pub const UNKNOWN: &str = "Unknown";

    /// Appended to a stale field's last known value.
    pub const STALE_SUFFIX: &str = " (stale)";

    /// Header title used until the node version is known.
    pub const DEFAULT_TITLE: &str = "LightDash";

    /// Header help line.
    pub const HELP_TEXT: &str = "PRESS q TO QUIT";

    /// Display unit for validator balances.
    pub const BALANCE_UNIT: &str = "ETH";
}
