use crate::node::error::NodeError;
use crate::node::types::{NodeHealth, ValidatorResponse};

pub(crate) mod client;
pub use client::NodeClient;
pub mod error;
pub mod types;

#[cfg(test)]
use mockall::automock;

/// The beacon node endpoints the dashboard reads.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait NodeApi: Send + Sync {
    /// `GET /node/health`: memory and load figures.
    async fn health(&self) -> Result<NodeHealth, NodeError>;

    /// `GET /network/peer_count`: raw body text.
    async fn peer_count(&self) -> Result<String, NodeError>;

    /// `GET /node/version`: raw body text.
    async fn version(&self) -> Result<String, NodeError>;

    /// `POST /beacon/validators` for the given public keys.
    async fn validators(&self, pubkeys: &[String]) -> Result<Vec<ValidatorResponse>, NodeError>;
}
