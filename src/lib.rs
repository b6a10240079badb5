//! Skald - client for the Skald knowledge-management API
//!
//! Stores memos (titled text documents with metadata) in a remote service
//! that indexes them for semantic retrieval, then searches, chats and
//! generates documents over them. Chat and document generation can stream
//! their output as a sequence of [`StreamEvent`]s.
//!
//! # Module structure
//! - `client` - [`SkaldClient`], one method per remote action
//! - `config` - [`ClientConfig`] and environment loading
//! - `error` - [`SkaldError`] and [`SkaldResult`]
//! - `models` - request and response types
//! - `sse` - incremental decoder for the streaming protocol
//! - `traits` - the [`HttpClient`] transport seam
//! - `adapters` - reqwest and mock transports

pub mod adapters;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod sse;
pub mod traits;

pub use client::SkaldClient;
pub use config::ClientConfig;
pub use error::{SkaldError, SkaldResult};
pub use models::*;
pub use sse::{EventStream, FrameDecoder, StreamEvent};
pub use traits::{HttpClient, HttpError};
