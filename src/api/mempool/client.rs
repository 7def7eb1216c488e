use async_trait::async_trait;
use reqwest::Client as HttpClient;
use thiserror::Error;
use tracing::debug;

use super::models::Transaction;

/// Errors raised while fetching a transaction
#[derive(Debug, Error)]
pub enum ApiError {
    /// Empty or whitespace-only txid, rejected before any request is made
    #[error("Missing txid")]
    MissingTxid,
    /// Non-success HTTP status from the API
    #[error("API error: {0}")]
    Status(u16),
    /// Network-level failure (connect, DNS, body read)
    #[error("Request failed: {0}")]
    Transport(String),
    /// Response body did not match the expected transaction shape
    #[error("Failed to parse response: {0}")]
    Deserialization(String),
}

/// Gateway seam in front of the HTTP client so the session can be tested
/// with a double.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TxGateway {
    async fn fetch_transaction(&self, txid: &str) -> Result<Transaction, ApiError>;
}

/// mempool.space Esplora API client
pub struct MempoolClient {
    http_client: HttpClient,
    base_url: String,
}

impl MempoolClient {
    const DEFAULT_BASE_URL: &'static str = "https://mempool.space/api";

    /// Create a client against the public mempool.space endpoint
    pub fn new() -> Self {
        Self::with_base_url(Self::DEFAULT_BASE_URL.to_string())
    }

    /// Create a client with a custom base URL (self-hosted instances, testing)
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url,
        }
    }
}

impl Default for MempoolClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TxGateway for MempoolClient {
    /// GET /tx/{txid}
    ///
    /// Issues exactly one request. No retry, no cache, no explicit timeout;
    /// the transport's defaults apply. An unresponsive endpoint therefore
    /// blocks the caller until the transport gives up.
    async fn fetch_transaction(&self, txid: &str) -> Result<Transaction, ApiError> {
        let trimmed = txid.trim();
        if trimmed.is_empty() {
            return Err(ApiError::MissingTxid);
        }

        let url = format!("{}/tx/{}", self.base_url, trimmed);
        debug!("Fetching transaction from {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }

        response
            .json::<Transaction>()
            .await
            .map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The empty-txid guard runs before any network activity, so these
    // exercise the real client without an endpoint. The gateway's lack of
    // retry and timeout handling is a known limitation carried over from
    // the upstream behavior, not covered here.

    #[tokio::test]
    async fn test_empty_txid_rejected_before_request() {
        let client = MempoolClient::with_base_url("http://127.0.0.1:0".to_string());
        let err = client.fetch_transaction("").await.unwrap_err();
        assert!(matches!(err, ApiError::MissingTxid));
    }

    #[tokio::test]
    async fn test_whitespace_txid_rejected_before_request() {
        let client = MempoolClient::with_base_url("http://127.0.0.1:0".to_string());
        let err = client.fetch_transaction("   \t ").await.unwrap_err();
        assert!(matches!(err, ApiError::MissingTxid));
    }

    #[test]
    fn test_error_messages_carry_detail() {
        assert_eq!(ApiError::MissingTxid.to_string(), "Missing txid");
        assert_eq!(ApiError::Status(404).to_string(), "API error: 404");
        assert_eq!(
            ApiError::Transport("connection refused".to_string()).to_string(),
            "Request failed: connection refused"
        );
    }
}
