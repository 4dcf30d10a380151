//! Builder for SimSimi service construction
//!
//! All configuration methods return `self`; `build()` validates the endpoints
//! and produces the service.
//!
//! # Examples
//!
//! ```no_run
//! use simsimi_http::{BufferPool, SimSimiBuilder};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! // Public endpoints, default timeout
//! let service = SimSimiBuilder::new().build().expect("Failed to build service");
//!
//! // Local stand-in with its own pool
//! let service = SimSimiBuilder::new()
//!     .base_url("http://127.0.0.1:8080")
//!     .timeout(Duration::from_secs(5))
//!     .with_pool(Arc::new(BufferPool::new()))
//!     .build()
//!     .expect("Failed to build service");
//! ```

use crate::buffer::BufferPool;
use crate::config::SimSimiConfig;
use crate::http::{HttpClient, ReqwestClient};
use crate::provider::SimSimi;
use simsimi_core::Result;
use std::sync::Arc;
use std::time::Duration;

/// Builder for [`SimSimi`]
#[derive(Default)]
pub struct SimSimiBuilder {
    config: SimSimiConfig,
    client: Option<Arc<dyn HttpClient>>,
    pool: Option<Arc<BufferPool>>,
}

impl SimSimiBuilder {
    /// Start from the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: SimSimiConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Set the identity endpoint
    pub fn uuid_url(mut self, url: impl Into<String>) -> Self {
        self.config = self.config.with_uuid_url(url);
        self
    }

    /// Set the relay endpoint
    pub fn relay_url(mut self, url: impl Into<String>) -> Self {
        self.config = self.config.with_relay_url(url);
        self
    }

    /// Point both endpoints at another host
    pub fn base_url(mut self, base: impl AsRef<str>) -> Self {
        self.config = self.config.with_base_url(base);
        self
    }

    /// Set the per-request timeout
    ///
    /// Ignored when a custom client is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_timeout(timeout);
        self
    }

    /// Set the `User-Agent` header
    ///
    /// Ignored when a custom client is supplied.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config = self.config.with_user_agent(user_agent);
        self
    }

    /// Use a custom HTTP client
    pub fn with_client(mut self, client: Arc<dyn HttpClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// Use a dedicated buffer pool instead of the process-wide one
    pub fn with_pool(mut self, pool: Arc<BufferPool>) -> Self {
        self.pool = Some(pool);
        self
    }

    /// Build the service
    pub fn build(self) -> Result<SimSimi> {
        let client: Arc<dyn HttpClient> = match self.client {
            Some(client) => client,
            None => Arc::new(ReqwestClient::from_config(&self.config)?),
        };

        let service = SimSimi::new(self.config, client)?;
        Ok(match self.pool {
            Some(pool) => service.with_pool(pool),
            None => service,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use simsimi_core::Error;

    #[test]
    fn test_builder_defaults() {
        let service = SimSimiBuilder::new().build().unwrap();
        assert_eq!(service.config(), &SimSimiConfig::default());
        assert!(Arc::ptr_eq(service.pool(), &BufferPool::shared()));
    }

    #[test]
    fn test_builder_overrides() {
        let pool = Arc::new(BufferPool::new());
        let service = SimSimiBuilder::new()
            .base_url("http://localhost:9000")
            .timeout(Duration::from_secs(3))
            .user_agent("test-agent")
            .with_pool(pool.clone())
            .build()
            .unwrap();

        let config = service.config();
        assert_eq!(config.uuid_url, "http://localhost:9000/getUUID");
        assert_eq!(config.relay_url, "http://localhost:9000/getRealtimeReq");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.user_agent.as_deref(), Some("test-agent"));
        assert!(Arc::ptr_eq(service.pool(), &pool));
    }

    #[test]
    fn test_builder_with_custom_client() {
        let client = Arc::new(ReqwestClient::new().unwrap());
        let service = SimSimiBuilder::from_config(SimSimiConfig::new())
            .with_client(client)
            .build();
        assert!(service.is_ok());
    }

    #[test]
    fn test_builder_rejects_bad_url() {
        let err = SimSimiBuilder::new().uuid_url("::nope").build().unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }
}
