//! HTTP transport for the transparency platform API.

use gridfeed_types::TimeRange;
use std::collections::BTreeMap;
use std::time::Duration;
use thiserror::Error;

use crate::period::period_str;

/// Default platform endpoint.
pub const DEFAULT_BASE_URL: &str = "https://transparency.entsoe.eu/api";

/// Opaque business parameters of one query, owned by the caller and never
/// mutated by the core. The security token travels here as well.
pub type QueryParams = BTreeMap<String, String>;

/// Raw result of one transport call: whatever the server answered, before
/// classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    /// HTTP status code.
    pub status: u16,
    /// Response body text.
    pub body: String,
}

/// Errors raised by a transport call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Connection-level failure: DNS, refused/reset connection, or a
    /// connect timeout. Transient; eligible for retry.
    #[error("connection failed: {0}")]
    Connection(String),

    /// Any other failure raised by the HTTP stack. Not retried.
    #[error("request failed: {0}")]
    Request(String),
}

impl TransportError {
    /// Returns true if the failure is transient and worth retrying.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    fn from_reqwest(error: &reqwest::Error) -> Self {
        if error.is_connect() || error.is_timeout() {
            Self::Connection(error.to_string())
        } else {
            Self::Request(error.to_string())
        }
    }
}

/// One network call for a chunk of the requested range.
///
/// Implementations serialize the period bounds, issue the request, and
/// hand back the raw status and body; classification happens one layer
/// up. The implementation owns whatever session state it needs and is
/// only ever read by the sequential pipeline.
pub trait Transport {
    /// Issues one request covering `range`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when no response was obtained at all;
    /// non-success responses come back as an [`HttpReply`].
    fn execute(&self, params: &QueryParams, range: TimeRange) -> Result<HttpReply, TransportError>;
}

/// Configuration for the HTTP transport.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Platform endpoint URL.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Connection timeout (separate from the request timeout).
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("gridfeed/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Blocking HTTP transport backed by a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    config: ClientConfig,
}

impl HttpTransport {
    /// Creates a new transport with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            // Keep connections alive for reuse across sequential chunks
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a transport with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the transport configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl Transport for HttpTransport {
    fn execute(&self, params: &QueryParams, range: TimeRange) -> Result<HttpReply, TransportError> {
        let period = [
            ("periodStart", period_str(&range.start)),
            ("periodEnd", period_str(&range.end)),
        ];
        let response = self
            .client
            .get(&self.config.base_url)
            .query(params)
            .query(&period)
            .send()
            .map_err(|e| TransportError::from_reqwest(&e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| TransportError::from_reqwest(&e))?;
        Ok(HttpReply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("gridfeed/"));
    }

    #[test]
    fn test_transport_creation() {
        assert!(HttpTransport::with_defaults().is_ok());
    }

    #[test]
    fn test_transport_error_transience() {
        assert!(TransportError::Connection("dns failure".to_string()).is_transient());
        assert!(!TransportError::Request("bad redirect".to_string()).is_transient());
    }
}
