//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP transport operations (GET, POST, PATCH, DELETE, streaming)

pub mod http;

pub use http::{ByteStream, Headers, HttpClient, HttpError, Response};
