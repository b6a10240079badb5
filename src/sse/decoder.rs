//! Incremental frame decoder for the Skald streaming protocol.
//!
//! The server writes newline-terminated frames:
//! - `data: <json>` - a payload with a `type` field (`token` or `done`)
//! - `: <text>` - keep-alive comment (ignored)
//! - blank lines and anything else are ignored
//!
//! Chunks from the transport have no alignment with frames or with UTF-8
//! character boundaries, so the decoder keeps raw bytes and only decodes a
//! line once its `\n` has arrived. `\n` never occurs inside a multi-byte
//! UTF-8 sequence, which makes splitting on the byte safe.

use super::events::{SseLine, StreamEvent, WirePayload};

const DATA_PREFIX: &str = "data: ";
const HEARTBEAT_PREFIX: &str = ": ";

/// Classify one line of the stream. Surrounding whitespace (including a
/// trailing `\r`) is trimmed first.
pub fn parse_sse_line(line: &str) -> SseLine<'_> {
    let line = line.trim();

    if line.is_empty() {
        return SseLine::Empty;
    }

    if let Some(comment) = line.strip_prefix(HEARTBEAT_PREFIX) {
        return SseLine::Heartbeat(comment);
    }

    if let Some(payload) = line.strip_prefix(DATA_PREFIX) {
        return SseLine::Data(payload);
    }

    SseLine::Other(line)
}

/// Decode the JSON payload of a data frame.
///
/// Malformed JSON and unknown event types yield `None`; neither may end
/// the stream.
pub fn parse_data_payload(payload: &str) -> Option<StreamEvent> {
    match serde_json::from_str::<WirePayload>(payload) {
        Ok(WirePayload::Token { content }) => Some(StreamEvent::Token { content }),
        Ok(WirePayload::Done) => Some(StreamEvent::Done),
        Ok(WirePayload::Unknown) => {
            tracing::debug!(payload, "Dropping stream event with unknown type");
            None
        }
        Err(e) => {
            tracing::trace!(error = %e, payload, "Dropping malformed data frame");
            None
        }
    }
}

fn decode_line(raw: &[u8]) -> Option<StreamEvent> {
    let Ok(line) = std::str::from_utf8(raw) else {
        tracing::trace!(len = raw.len(), "Dropping frame that is not valid UTF-8");
        return None;
    };

    match parse_sse_line(line) {
        SseLine::Data(payload) => parse_data_payload(payload),
        SseLine::Empty | SseLine::Heartbeat(_) | SseLine::Other(_) => None,
    }
}

/// Stateful decoder that turns raw byte chunks into [`StreamEvent`]s.
///
/// Push chunks in arrival order with [`push`](Self::push); each push returns
/// the events completed by that chunk. Once a `done` event has been returned
/// the decoder is finished and ignores further input. Call
/// [`end_stream`](Self::end_stream) when the transport closes; an
/// unterminated trailing line is discarded.
///
/// The decoder is independent of any async runtime, so it can be driven from
/// a futures stream, a callback or a plain loop.
///
/// # Example
///
/// ```ignore
/// use skald::sse::{FrameDecoder, StreamEvent};
///
/// let mut decoder = FrameDecoder::new();
/// assert!(decoder.push(b"data: {\"type\":\"token\",").is_empty());
/// assert_eq!(
///     decoder.push(b"\"content\":\"Hello\"}\n"),
///     vec![StreamEvent::token("Hello")]
/// );
/// ```
#[derive(Debug, Default)]
pub struct FrameDecoder {
    /// Bytes after the last `\n` seen so far
    buffer: Vec<u8>,
    /// Prefix of `buffer` already searched for `\n`
    scanned: usize,
    finished: bool,
}

impl FrameDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next chunk and collect every event it completes.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<StreamEvent> {
        let mut events = Vec::new();
        if self.finished {
            return events;
        }

        self.buffer.extend_from_slice(chunk);

        let mut consumed = 0;
        let mut search_from = self.scanned;
        while let Some(offset) = self.buffer[search_from..].iter().position(|&b| b == b'\n') {
            let line_end = search_from + offset;
            let event = decode_line(&self.buffer[consumed..line_end]);
            consumed = line_end + 1;
            search_from = consumed;

            if let Some(event) = event {
                let done = event.is_done();
                events.push(event);
                if done {
                    self.end_stream();
                    return events;
                }
            }
        }

        self.buffer.drain(..consumed);
        self.scanned = self.buffer.len();
        events
    }

    /// Signal that the transport has closed. Never produces an event.
    pub fn end_stream(&mut self) {
        if !self.buffer.is_empty() {
            tracing::trace!(
                len = self.buffer.len(),
                "Discarding unterminated trailing frame"
            );
        }
        self.buffer = Vec::new();
        self.scanned = 0;
        self.finished = true;
    }

    /// True after `done` was decoded or [`end_stream`](Self::end_stream) was called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Number of buffered bytes waiting for a line terminator.
    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }
}

/// Decode a complete byte stream in one go.
pub fn decode_all(bytes: &[u8]) -> Vec<StreamEvent> {
    let mut decoder = FrameDecoder::new();
    let events = decoder.push(bytes);
    decoder.end_stream();
    events
}
