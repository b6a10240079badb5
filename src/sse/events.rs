//! Event and line types for the Skald streaming protocol.

use serde::{Deserialize, Serialize};

/// A decoded event from a streamed chat or document generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamEvent {
    /// Next fragment of generated text
    Token { content: String },
    /// Generation finished; nothing follows
    Done,
}

impl StreamEvent {
    pub fn token(content: impl Into<String>) -> Self {
        StreamEvent::Token {
            content: content.into(),
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, StreamEvent::Done)
    }

    /// Text of a token event.
    pub fn as_token(&self) -> Option<&str> {
        match self {
            StreamEvent::Token { content } => Some(content.as_str()),
            StreamEvent::Done => None,
        }
    }

    /// Returns the event type name as it appears on the wire.
    pub fn event_type_name(&self) -> &'static str {
        match self {
            StreamEvent::Token { .. } => "token",
            StreamEvent::Done => "done",
        }
    }
}

/// Classification of one complete, trimmed protocol line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SseLine<'a> {
    /// Blank line
    Empty,
    /// `: ` keep-alive comment
    Heartbeat(&'a str),
    /// `data: ` frame; holds the JSON text after the prefix
    Data(&'a str),
    /// Any other shape; ignored for forward compatibility
    Other(&'a str),
}

/// JSON payload of a data frame as sent by the server.
///
/// `Unknown` catches event types this client does not understand yet. They
/// are dropped by the decoder; new variants belong here and in [`StreamEvent`].
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum WirePayload {
    Token {
        #[serde(default)]
        content: String,
    },
    Done,
    #[serde(other)]
    Unknown,
}
