//! Adapter from a transport byte stream to a stream of decoded events.

use futures::stream::{self, Stream, StreamExt};
use std::collections::VecDeque;
use std::pin::Pin;

use super::decoder::FrameDecoder;
use super::events::StreamEvent;
use crate::error::SkaldResult;
use crate::traits::ByteStream;

/// Events of one streamed call.
///
/// Ends after `done`, when the transport closes, or after yielding a single
/// transport error. Dropping it early releases the connection.
pub type EventStream = Pin<Box<dyn Stream<Item = SkaldResult<StreamEvent>> + Send>>;

struct DecodeState {
    /// Set to `None` as soon as no more bytes are needed, which drops the
    /// connection without waiting for the consumer to drop the stream.
    source: Option<ByteStream>,
    decoder: FrameDecoder,
    pending: VecDeque<StreamEvent>,
}

impl DecodeState {
    fn close(&mut self) {
        self.decoder.end_stream();
        self.source = None;
    }
}

/// Drive a [`FrameDecoder`] from `source`, one chunk at a time.
pub fn decode_event_stream(source: ByteStream) -> EventStream {
    let state = DecodeState {
        source: Some(source),
        decoder: FrameDecoder::new(),
        pending: VecDeque::new(),
    };

    let events = stream::unfold(state, |mut state| async move {
        loop {
            if let Some(event) = state.pending.pop_front() {
                return Some((Ok(event), state));
            }

            let next = match state.source.as_mut() {
                Some(source) => source.next().await,
                None => return None,
            };

            match next {
                Some(Ok(chunk)) => {
                    state.pending.extend(state.decoder.push(&chunk));
                    if state.decoder.is_finished() {
                        tracing::debug!("Stream completed with done event");
                        state.close();
                    }
                }
                Some(Err(e)) => {
                    tracing::debug!(error = %e, "Stream transport failed");
                    state.close();
                    return Some((Err(e.into()), state));
                }
                None => {
                    tracing::debug!("Stream closed by server");
                    state.close();
                }
            }
        }
    });

    Box::pin(events)
}
