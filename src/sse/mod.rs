//! Streaming protocol support for chat and document generation.
//!
//! # Module structure
//! - `events` - [`StreamEvent`] and line classification ([`SseLine`])
//! - `decoder` - the incremental [`FrameDecoder`] and line/payload parsing
//! - `stream` - [`decode_event_stream`], which drives a decoder from a
//!   transport byte stream

mod decoder;
mod events;
mod stream;

pub use decoder::{decode_all, parse_data_payload, parse_sse_line, FrameDecoder};
pub use events::{SseLine, StreamEvent};
pub use stream::{decode_event_stream, EventStream};
