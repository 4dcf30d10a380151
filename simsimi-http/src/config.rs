//! SimSimi client configuration

use crate::constants::{
    DEFAULT_RELAY_URL, DEFAULT_TIMEOUT, DEFAULT_UUID_URL, ENV_RELAY_URL, ENV_TIMEOUT_SECS,
    ENV_UUID_URL,
};
use simsimi_core::{Error, Result};
use std::time::Duration;

/// Configuration for the SimSimi client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimSimiConfig {
    /// Identity endpoint
    pub uuid_url: String,
    /// Relay endpoint
    pub relay_url: String,
    /// Per-request timeout, covering connect and body read
    pub timeout: Duration,
    /// Optional `User-Agent` header value
    pub user_agent: Option<String>,
}

impl Default for SimSimiConfig {
    fn default() -> Self {
        Self {
            uuid_url: DEFAULT_UUID_URL.to_string(),
            relay_url: DEFAULT_RELAY_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }
}

impl SimSimiConfig {
    /// Create a configuration pointing at the public endpoints
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the defaults, overridden by `SIMSIMI_UUID_URL`,
    /// `SIMSIMI_RELAY_URL` and `SIMSIMI_TIMEOUT_SECS` when set
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) but reading values through `lookup`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_UUID_URL) {
            config.uuid_url = url;
        }
        if let Some(url) = lookup(ENV_RELAY_URL) {
            config.relay_url = url;
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = secs.trim().parse().map_err(|e| {
                Error::configuration(format!("{ENV_TIMEOUT_SECS} must be whole seconds: {e}"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Set the identity endpoint
    pub fn with_uuid_url(mut self, url: impl Into<String>) -> Self {
        self.uuid_url = url.into();
        self
    }

    /// Set the relay endpoint
    pub fn with_relay_url(mut self, url: impl Into<String>) -> Self {
        self.relay_url = url.into();
        self
    }

    /// Point both endpoints at another host, keeping the service's paths
    pub fn with_base_url(self, base: impl AsRef<str>) -> Self {
        let base = base.as_ref().trim_end_matches('/');
        self.with_uuid_url(format!("{base}/getUUID"))
            .with_relay_url(format!("{base}/getRealtimeReq"))
    }

    /// Set the per-request timeout
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the `User-Agent` header
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SimSimiConfig::new();
        assert_eq!(config.uuid_url, "http://www.simsimi.com/getUUID");
        assert_eq!(config.relay_url, "http://www.simsimi.com/getRealtimeReq");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.user_agent, None);
    }

    #[test]
    fn test_with_base_url() {
        let config = SimSimiConfig::new().with_base_url("http://127.0.0.1:8080/");
        assert_eq!(config.uuid_url, "http://127.0.0.1:8080/getUUID");
        assert_eq!(config.relay_url, "http://127.0.0.1:8080/getRealtimeReq");
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = SimSimiConfig::from_lookup(lookup_from(&[
            ("SIMSIMI_UUID_URL", "http://a/id"),
            ("SIMSIMI_RELAY_URL", "http://a/relay"),
            ("SIMSIMI_TIMEOUT_SECS", " 5 "),
        ]))
        .unwrap();

        assert_eq!(config.uuid_url, "http://a/id");
        assert_eq!(config.relay_url, "http://a/relay");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_from_lookup_empty_keeps_defaults() {
        let config = SimSimiConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, SimSimiConfig::default());
    }

    #[test]
    fn test_from_lookup_bad_timeout() {
        let err =
            SimSimiConfig::from_lookup(lookup_from(&[("SIMSIMI_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert!(matches!(err, Error::Configuration(msg) if msg.contains("SIMSIMI_TIMEOUT_SECS")));
    }
}
