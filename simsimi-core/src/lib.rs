//! Core traits and types for the SimSimi relay client
//!
//! This crate holds the pieces shared by every transport: the error taxonomy,
//! the session [`Identifier`], and the [`ChatService`] trait.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod service;
pub mod types;

// Re-export commonly used items
pub use error::{Error, RelayError, Result};
pub use service::ChatService;
pub use types::{
    identifier::Identifier,
    locale::{self, ENGLISH, KOREAN},
};
