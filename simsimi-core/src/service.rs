//! Core service trait for the two-step relay protocol

use crate::error::Result;
use crate::types::identifier::Identifier;
use async_trait::async_trait;

/// The two operations of the relay protocol
///
/// Implementations perform one round trip per call and never retry. Callers
/// may share an implementation across tasks.
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Obtain a fresh user id and session token
    async fn generate_id(&self) -> Result<Identifier>;

    /// Submit an utterance and return the generated reply
    ///
    /// `locale` is forwarded as-is; see [`crate::locale`] for the documented
    /// values.
    async fn relay(&self, id: &Identifier, text: &str, locale: &str) -> Result<String>;
}
