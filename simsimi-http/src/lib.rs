//! HTTP transport for the SimSimi relay client
//!
//! [`SimSimi`] implements [`simsimi_core::ChatService`] on top of reqwest.
//! Response bodies are absorbed into buffers from a shared [`BufferPool`] and
//! decoded in place with the permissive object decoder in [`decoder`].

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod buffer;
pub mod builder;
pub mod config;
pub mod constants;
pub mod decoder;
pub mod error;
pub mod http;
pub mod parser;
pub mod provider;

pub use buffer::{BufferPool, PoolConfig, PooledBuffer};
pub use builder::SimSimiBuilder;
pub use config::SimSimiConfig;
pub use http::{HttpClient, ReqwestClient};
pub use parser::SimSimiParser;
pub use provider::SimSimi;
