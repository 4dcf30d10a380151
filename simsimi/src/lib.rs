//! SimSimi - an async client for the SimSimi conversational relay service
//!
//! The protocol has two steps: fetch a session [`Identifier`] once, then relay
//! utterances with it. Each step is a single GET whose JSON body is decoded
//! into a typed result or one of the [`Error`] variants.
//!
//! # Quick Start
//!
//! ```no_run
//! # use simsimi::prelude::*;
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), simsimi::Error> {
//!     let service = SimSimi::with_defaults()?;
//!
//!     // One round trip for the identifier, one per utterance
//!     let mut conversation = Conversation::start(service).await?;
//!     let reply = conversation.chat("Hello!").await?;
//!     println!("{reply}");
//! #     Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod conversation;

pub use conversation::Conversation;

// Re-export core types
pub use simsimi_core::*;

#[cfg(feature = "http")]
#[cfg_attr(docsrs, doc(cfg(feature = "http")))]
pub mod http {
    //! reqwest transport, buffer pool and response decoding
    pub use simsimi_http::*;
}

#[cfg(feature = "http")]
pub use simsimi_http::{SimSimi, SimSimiBuilder, SimSimiConfig};

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::Conversation;
    pub use simsimi_core::{locale, ChatService, Error, Identifier, RelayError};

    #[cfg(feature = "http")]
    pub use simsimi_http::{SimSimi, SimSimiBuilder, SimSimiConfig};
}
