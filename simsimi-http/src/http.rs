//! HTTP client abstraction and the reqwest implementation

use crate::config::SimSimiConfig;
use crate::error;
use async_trait::async_trait;
use futures::StreamExt;
use simsimi_core::Error;
use tracing::{debug, trace};
use url::Url;

/// HTTP client abstraction
///
/// Both endpoints are plain GETs whose body is read to the end. The body is
/// appended to a caller-supplied buffer so that the caller decides what
/// happens to that buffer when the read fails.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Send a GET request and append the complete response body to `body`
    ///
    /// The response is fully consumed and released before this returns,
    /// whether it succeeds or not.
    async fn get(&self, url: &Url, body: &mut Vec<u8>) -> Result<(), Error>;
}

/// Default HTTP client implementation using reqwest
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Create a client with the default timeout
    pub fn new() -> Result<Self, Error> {
        Self::from_config(&SimSimiConfig::default())
    }

    /// Create a client using the timeout and user agent from `config`
    pub fn from_config(config: &SimSimiConfig) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder().timeout(config.timeout);
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }

        let client = builder.build().map_err(error::transport_error)?;
        Ok(Self { client })
    }

    /// Wrap an already configured reqwest client
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &Url, body: &mut Vec<u8>) -> Result<(), Error> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(error::transport_error)?;

        // The service reports failures in the body, so the HTTP status is
        // only logged.
        let status = response.status();
        if !status.is_success() {
            debug!(%status, path = url.path(), "Non-success HTTP status");
        }

        let mut chunks = response.bytes_stream();
        while let Some(chunk) = chunks.next().await {
            let chunk = chunk.map_err(error::transport_error)?;
            body.extend_from_slice(&chunk);
        }

        trace!(len = body.len(), path = url.path(), "Response body absorbed");
        Ok(())
    }
}
