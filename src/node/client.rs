//! Beacon Node Client
//!
//! A thin HTTP client for the handful of node endpoints the dashboard polls.

use crate::consts::cli_consts::USER_AGENT;
use crate::node::NodeApi;
use crate::node::error::NodeError;
use crate::node::types::{NodeHealth, ValidatorResponse, ValidatorsRequest};
use reqwest::{Client, ClientBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct NodeClient {
    client: Client,
    base_url: String,
}

impl NodeClient {
    /// Every request made through this client is bounded by `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, NodeError> {
        let client = ClientBuilder::new()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    fn decode_response<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, NodeError> {
        serde_json::from_slice(bytes).map_err(NodeError::Decode)
    }

    async fn handle_response_status(response: Response) -> Result<Response, NodeError> {
        if !response.status().is_success() {
            return Err(NodeError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_text(&self, endpoint: &str) -> Result<String, NodeError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        Ok(response.text().await?)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, NodeError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, NodeError> {
        let url = self.build_url(endpoint);
        let body = serde_json::to_vec(body)?;
        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("User-Agent", USER_AGENT)
            .body(body)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }
}

#[async_trait::async_trait]
impl NodeApi for NodeClient {
    async fn health(&self) -> Result<NodeHealth, NodeError> {
        self.get_json("node/health").await
    }

    async fn peer_count(&self) -> Result<String, NodeError> {
        self.get_text("network/peer_count").await
    }

    async fn version(&self) -> Result<String, NodeError> {
        self.get_text("node/version").await
    }

    async fn validators(&self, pubkeys: &[String]) -> Result<Vec<ValidatorResponse>, NodeError> {
        self.post_json("beacon/validators", &ValidatorsRequest { pubkeys })
            .await
    }
}
