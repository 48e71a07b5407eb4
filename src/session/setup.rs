//! Session setup and initialization

use crate::config::Config;
use crate::node::NodeClient;
use crate::source::MetricSource;
use crate::ui::DashboardState;
use std::error::Error;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Everything a TUI or headless session needs to run the refresh loop
pub struct SessionData {
    pub source: MetricSource,
    pub state: DashboardState,
    /// Cancelled on quit key, Ctrl-C, or input failure
    pub shutdown: CancellationToken,
    pub interval: Duration,
    pub base_url: String,
}

/// Builds the node client and metric source from a validated config.
///
/// The node is not contacted here; an unreachable node shows up as fetch
/// errors on the dashboard rather than failing startup.
pub fn setup_session(config: &Config) -> Result<SessionData, Box<dyn Error>> {
    let node = NodeClient::new(&config.base_url, config.request_timeout())?;
    let base_url = node.base_url().to_string();
    let source = MetricSource::new(Box::new(node), config);

    Ok(SessionData {
        source,
        state: DashboardState::new(config),
        shutdown: CancellationToken::new(),
        interval: config.refresh_interval(),
        base_url,
    })
}

/// Cancel `shutdown` on SIGINT.
pub fn cancel_on_ctrl_c(shutdown: &CancellationToken) {
    let shutdown = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::info!("Interrupt received");
            shutdown.cancel();
        }
    });
}
