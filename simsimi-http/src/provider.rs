//! SimSimi service implementation
//!
//! Each call is one GET. The body is absorbed into a pooled buffer, parsed in
//! place, and the buffer goes back to the pool once parsing is over. A failed
//! body read discards the buffer instead.

use crate::buffer::{BufferPool, PooledBuffer};
use crate::config::SimSimiConfig;
use crate::constants::{
    PROTOCOL_VERSION, QUERY_LOCALE, QUERY_STATUS, QUERY_TEXT, QUERY_UUID, QUERY_VERSION,
    STATUS_FLAG,
};
use crate::http::{HttpClient, ReqwestClient};
use crate::parser::SimSimiParser;
use async_trait::async_trait;
use simsimi_core::{ChatService, Error, Identifier, Result};
use std::sync::Arc;
use tracing::{debug, trace};
use url::Url;

/// Client for the SimSimi identity and relay endpoints
///
/// Cheap to clone; clones share the HTTP client and buffer pool.
///
/// # Example
///
/// ```no_run
/// use simsimi_core::{locale, ChatService};
/// use simsimi_http::SimSimi;
///
/// # async fn example() -> Result<(), simsimi_core::Error> {
/// let service = SimSimi::with_defaults()?;
/// let id = service.generate_id().await?;
/// let reply = service.relay(&id, "hello", locale::ENGLISH).await?;
/// println!("{reply}");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SimSimi {
    client: Arc<dyn HttpClient>,
    config: SimSimiConfig,
    uuid_url: Url,
    relay_url: Url,
    pool: Arc<BufferPool>,
    parser: SimSimiParser,
}

impl SimSimi {
    /// Create a service from a configuration and HTTP client
    ///
    /// Fails with [`Error::Configuration`] if either endpoint is not a valid
    /// URL.
    pub fn new(config: SimSimiConfig, client: Arc<dyn HttpClient>) -> Result<Self> {
        let uuid_url = Url::parse(&config.uuid_url)?;
        let relay_url = Url::parse(&config.relay_url)?;

        Ok(Self {
            client,
            config,
            uuid_url,
            relay_url,
            pool: BufferPool::shared(),
            parser: SimSimiParser,
        })
    }

    /// Create a service against the public endpoints with a reqwest client
    pub fn with_defaults() -> Result<Self> {
        let config = SimSimiConfig::default();
        let client = Arc::new(ReqwestClient::from_config(&config)?);
        Self::new(config, client)
    }

    /// Use a dedicated buffer pool instead of the process-wide one
    #[must_use]
    pub fn with_pool(mut self, pool: Arc<BufferPool>) -> Self {
        self.pool = pool;
        self
    }

    /// The configuration this service was built from
    pub const fn config(&self) -> &SimSimiConfig {
        &self.config
    }

    /// The buffer pool used for response bodies
    pub const fn pool(&self) -> &Arc<BufferPool> {
        &self.pool
    }

    /// Build the relay URL for one utterance
    pub fn relay_url(&self, id: &Identifier, text: &str, locale: &str) -> Url {
        let mut url = self.relay_url.clone();
        url.query_pairs_mut()
            .clear()
            .append_pair(QUERY_UUID, id.uuid())
            .append_pair(QUERY_TEXT, text)
            .append_pair(QUERY_LOCALE, locale)
            .append_pair(QUERY_VERSION, PROTOCOL_VERSION)
            .append_pair(QUERY_STATUS, STATUS_FLAG);
        url
    }

    async fn fetch(&self, url: &Url) -> Result<PooledBuffer<'_>> {
        let mut body = self.pool.acquire();
        match self.client.get(url, &mut body).await {
            Ok(()) => Ok(body),
            Err(err) => {
                // Partially filled; not safe to recycle
                body.discard();
                Err(err)
            }
        }
    }
}

#[async_trait]
impl ChatService for SimSimi {
    async fn generate_id(&self) -> Result<Identifier> {
        debug!(url = %self.uuid_url, "Requesting session identifier");

        let body = self.fetch(&self.uuid_url).await?;
        let id = self.parser.parse_identifier(&body);
        drop(body);

        match &id {
            Ok(id) => debug!(uid = id.uid(), "Obtained session identifier"),
            Err(err) => debug!(error = %err, "Identifier response rejected"),
        }
        id
    }

    async fn relay(&self, id: &Identifier, text: &str, locale: &str) -> Result<String> {
        debug!(uid = id.uid(), locale, "Relaying utterance");
        trace!(text, "Utterance");

        let url = self.relay_url(id, text, locale);
        let body = self.fetch(&url).await?;
        let reply = self.parser.parse_relay(&body);
        drop(body);

        match &reply {
            Ok(reply) => trace!(reply = reply.as_str(), "Relay reply"),
            Err(Error::Relay(err)) => debug!(
                code = err.code.as_str(),
                errno = err.errno,
                sql_state = err.sql_state.as_str(),
                index = err.index,
                "Relay rejected by service"
            ),
            Err(err) => debug!(error = %err, "Relay failed"),
        }
        reply
    }
}

impl std::fmt::Debug for SimSimi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimSimi")
            .field("config", &self.config)
            .field("pool", &self.pool)
            .finish_non_exhaustive()
    }
}
