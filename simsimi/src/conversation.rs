//! A session bound to one identifier

use simsimi_core::{locale, ChatService, Identifier, Result};
use tracing::debug;

/// A conversation: a service, the identifier it handed out, and a locale
///
/// The identifier is fetched once by [`start`](Self::start) and reused for
/// every [`chat`](Self::chat). Nothing is persisted; when the service expires
/// the session the next relay fails and a new conversation must be started.
///
/// # Examples
///
/// ```no_run
/// use simsimi::{locale, Conversation, SimSimi};
///
/// # async fn example() -> Result<(), simsimi::Error> {
/// let mut conversation = Conversation::start(SimSimi::with_defaults()?)
///     .await?
///     .with_locale(locale::KOREAN);
///
/// let reply = conversation.chat("안녕").await?;
/// println!("{reply}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Conversation<S: ChatService> {
    service: S,
    id: Identifier,
    locale: String,
    turns: usize,
}

impl<S: ChatService> Conversation<S> {
    /// Fetch a new identifier from `service` and start a conversation
    pub async fn start(service: S) -> Result<Self> {
        let id = service.generate_id().await?;
        debug!(uid = id.uid(), "Started conversation");
        Ok(Self::resume(service, id))
    }

    /// Continue a conversation with an identifier obtained earlier
    pub fn resume(service: S, id: Identifier) -> Self {
        Self {
            service,
            id,
            locale: locale::ENGLISH.to_string(),
            turns: 0,
        }
    }

    /// Set the locale used by [`chat`](Self::chat)
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Relay `text` with the conversation's locale
    pub async fn chat(&mut self, text: &str) -> Result<String> {
        let locale = self.locale.clone();
        self.chat_in(text, &locale).await
    }

    /// Relay `text` with an explicit locale, leaving the default unchanged
    pub async fn chat_in(&mut self, text: &str, locale: &str) -> Result<String> {
        let reply = self.service.relay(&self.id, text, locale).await?;
        self.turns += 1;
        Ok(reply)
    }

    /// The identifier this conversation relays with
    pub const fn identifier(&self) -> &Identifier {
        &self.id
    }

    /// The default locale
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Number of successful replies so far
    pub const fn turns(&self) -> usize {
        self.turns
    }

    /// The underlying service
    pub const fn service(&self) -> &S {
        &self.service
    }

    /// Give back the identifier, dropping the service
    pub fn into_identifier(self) -> Identifier {
        self.id
    }
}
