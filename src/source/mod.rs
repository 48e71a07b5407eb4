//! Metric Source
//!
//! Performs the four node fetches and the database walk for one refresh
//! cycle. The five run concurrently, each under its own deadline, and a
//! failure in one never affects the others: the returned snapshot starts
//! from the previous one and only successful sources overwrite their fields.

pub mod dbsize;
pub mod error;

use crate::config::Config;
use crate::metrics::Metrics;
use crate::node::NodeApi;
use crate::node::error::NodeError;
use crate::source::dbsize::Walk;
use crate::source::error::{FetchCause, FetchError, FetchTag};
use crate::units;
use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

pub struct MetricSource {
    node: Box<dyn NodeApi>,
    pubkeys: Vec<String>,
    db_path: PathBuf,
    request_timeout: Duration,
    dbsize_timeout: Duration,
    db_walk: Walk,
}

impl MetricSource {
    pub fn new(node: Box<dyn NodeApi>, config: &Config) -> Self {
        Self {
            node,
            pubkeys: vec![config.validator_pubkey.clone()],
            db_path: config.db_path.clone(),
            request_timeout: config.request_timeout(),
            dbsize_timeout: config.dbsize_timeout(),
            db_walk: dbsize::dir_size,
        }
    }

    /// Fetch every source once, keeping `prior` values for the ones that fail.
    pub async fn fetch_all(&self, prior: &Metrics) -> (Metrics, Vec<FetchError>) {
        let (health, peers, version, validators, db_size) = tokio::join!(
            self.bounded(self.node.health()),
            self.bounded(self.node.peer_count()),
            self.bounded(self.node.version()),
            self.bounded(self.node.validators(&self.pubkeys)),
            dbsize::measure(self.db_path.clone(), self.dbsize_timeout, self.db_walk),
        );

        let mut metrics = prior.clone();
        let mut errors = Vec::new();

        match health {
            Ok(health) => metrics.apply_health(&health),
            Err(cause) => errors.push(FetchError::new(FetchTag::Health, cause)),
        }

        match peers {
            Ok(peers) => metrics.peer_count = peers,
            Err(cause) => errors.push(FetchError::new(FetchTag::Peers, cause)),
        }

        match version {
            Ok(version) => metrics.node_version = version,
            Err(cause) => errors.push(FetchError::new(FetchTag::Version, cause)),
        }

        match validators.map(|records| records.into_iter().next()) {
            Ok(Some(record)) => metrics.validator = Some(record.into()),
            Ok(None) => errors.push(FetchError::new(FetchTag::Balance, FetchCause::NoValidator)),
            Err(cause) => errors.push(FetchError::new(FetchTag::Balance, cause)),
        }

        match db_size {
            Ok(bytes) => metrics.db_size_display = units::bytes_to_gb(bytes),
            Err(cause) => errors.push(FetchError::new(FetchTag::DbSize, cause)),
        }

        (metrics, errors)
    }

    async fn bounded<T>(
        &self,
        call: impl Future<Output = Result<T, NodeError>>,
    ) -> Result<T, FetchCause> {
        match tokio::time::timeout(self.request_timeout, call).await {
            Ok(Err(e)) if e.is_timeout() => Err(FetchCause::Timeout(self.request_timeout)),
            Ok(result) => result.map_err(FetchCause::Node),
            Err(_) => Err(FetchCause::Timeout(self.request_timeout)),
        }
    }
}
