use crate::config::{ConfigSource, LOKI_BASE_URL_KEY};
use crate::envelope::PushEnvelope;
use crate::error::ShipError;
use crate::sink::LogSink;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::sync::Arc;

/// Path of the push API relative to the Loki base URL.
pub const PUSH_PATH: &str = "/loki/api/v1/push";

/// Loki implementation of [`LogSink`] using the JSON push API.
///
/// The base URL is looked up in the configuration on every send, so a
/// value that appears after start-up is picked up without rebuilding the
/// sink. A missing value is not checked up front; the request simply
/// fails and that failure is what gets reported.
#[derive(Clone)]
pub struct LokiSink {
    client: Client,
    config: Arc<dyn ConfigSource>,
}

impl LokiSink {
    /// Construct a new sink reading its base URL from `config`.
    ///
    /// **Parameters**
    /// - `config`: source consulted for [`LOKI_BASE_URL_KEY`].
    ///
    /// **Returns**
    /// - A ready-to-use [`LokiSink`] sharing one pooled HTTP client
    ///   across all sends.
    pub fn new(config: Arc<dyn ConfigSource>) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Same as [`LokiSink::new`] with a caller-configured client
    /// (timeouts, proxies, TLS roots).
    pub fn with_client(client: Client, config: Arc<dyn ConfigSource>) -> Self {
        Self { client, config }
    }

    /// Full push URL for the currently configured base.
    pub fn endpoint(&self) -> String {
        let base = self.config.get(LOKI_BASE_URL_KEY).unwrap_or_default();
        format!("{}{}", base.trim_end_matches('/'), PUSH_PATH)
    }
}

#[async_trait]
impl LogSink for LokiSink {
    async fn send(&self, envelope: &PushEnvelope) -> Result<(), ShipError> {
        let body = serde_json::to_vec(envelope)?;
        let resp = self
            .client
            .post(self.endpoint())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        if resp.status().is_success() {
            Ok(())
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_else(|_| "<no body>".to_string());
            Err(ShipError::Status { status, body })
        }
    }
}
