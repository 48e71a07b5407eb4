//! Error handling for the node module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NodeError {
    /// Connection failure, timeout, or a body that could not be read.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The node answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// The body was not the JSON shape we expected.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl NodeError {
    pub async fn from_response(response: reqwest::Response) -> NodeError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        NodeError::Http { status, message }
    }

    /// True for connection and deadline failures.
    pub fn is_timeout(&self) -> bool {
        matches!(self, NodeError::Network(e) if e.is_timeout())
    }
}
