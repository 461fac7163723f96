//! Line codec for the engine's prefix-tagged JSON frames.
//!
//! Inbound, every line is `<prefix>{...}`: free text up to the first `{`,
//! followed by one JSON object. Outbound, every line is
//! `__command__ <payload>` where the payload is `READY`, `RESET`, or a
//! compact JSON action command.
//!
//! # Usage
//!
//! Use [`FrameCodec`] as the codec parameter for
//! [`tokio_util::codec::FramedRead`] (inbound, yields raw lines) and
//! [`tokio_util::codec::FramedWrite`] (outbound, takes [`OutboundFrame`]s).
//! Prefix handling lives in [`parse_tagged_line`] so that the line framing
//! stays a pure `\n` splitter.

use std::io;

use bytes::{BufMut, BytesMut};
use serde_json::Value;
use tokio_util::codec::{Decoder, Encoder, LinesCodec, LinesCodecError};

use crate::models::command::RESET;
use crate::models::{ActionCommand, Command};
use crate::{AppError, Result};

/// Default maximum inbound line length: 1 MiB.
pub const MAX_LINE_BYTES: usize = 1_048_576;

/// Prefix of every outbound line.
pub const COMMAND_TAG: &str = "__command__";

/// Prefix the engine puts on the one-time init line.
pub const INIT_TAG: &str = "__init__";

/// Prefix the engine puts on every scene line.
pub const SCENE_TAG: &str = "__scene_info__";

/// Literal readiness payload.
pub const READY: &str = "READY";

/// One decoded inbound line.
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedFrame {
    /// Text before the first `{`, trimmed of surrounding whitespace.
    pub tag: String,
    /// JSON value parsed from the first `{` onward.
    pub value: Value,
}

/// One outbound line, before the `__command__ ` prefix is applied.
#[derive(Debug, Clone, PartialEq)]
pub enum OutboundFrame {
    /// `__command__ READY`
    Ready,
    /// `__command__ RESET`
    Reset,
    /// `__command__ {"frame": N, "command": [...]}`
    Action(ActionCommand),
}

impl From<Command> for OutboundFrame {
    fn from(command: Command) -> Self {
        match command {
            Command::Reset => Self::Reset,
            Command::Action(action) => Self::Action(action),
        }
    }
}

/// Split an inbound line into its prefix tag and JSON payload.
///
/// The prefix is never interpreted here; callers that care about the tag
/// compare [`TaggedFrame::tag`] themselves.
///
/// # Errors
///
/// Returns `AppError::MalformedFrame` if the line holds no `{` or the text
/// from the first `{` onward is not valid JSON.
pub fn parse_tagged_line(line: &str) -> Result<TaggedFrame> {
    let start = line
        .find('{')
        .ok_or_else(|| AppError::MalformedFrame("no JSON object start in line".into()))?;
    let (tag, payload) = line.split_at(start);

    let value = serde_json::from_str(payload)
        .map_err(|e| AppError::MalformedFrame(format!("invalid json: {e}")))?;

    Ok(TaggedFrame {
        tag: tag.trim().to_owned(),
        value,
    })
}

/// Parse an outbound line the way the engine does.
///
/// Accepts the line with or without its trailing newline.
///
/// # Errors
///
/// Returns `AppError::MalformedFrame` if the line lacks the
/// `__command__ ` prefix or carries an unparseable payload.
pub fn parse_outbound_line(line: &str) -> Result<OutboundFrame> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let payload = line
        .strip_prefix(COMMAND_TAG)
        .and_then(|rest| rest.strip_prefix(' '))
        .ok_or_else(|| AppError::MalformedFrame(format!("missing {COMMAND_TAG} prefix")))?;

    match payload {
        READY => Ok(OutboundFrame::Ready),
        RESET => Ok(OutboundFrame::Reset),
        json => serde_json::from_str(json)
            .map(OutboundFrame::Action)
            .map_err(|e| AppError::MalformedFrame(format!("invalid action command: {e}"))),
    }
}

/// Codec for the engine's stdio streams.
///
/// # Decoder
///
/// Delegates line framing to [`LinesCodec`] with a maximum length. Lines
/// over the limit return [`AppError::MalformedFrame`]. Unlike
/// [`LinesCodec`], bytes left over at EOF without a terminating `\n` are
/// not yielded as a final line: they return [`AppError::StreamClosed`].
///
/// # Encoder
///
/// Writes `__command__ <payload>\n` for each [`OutboundFrame`].
#[derive(Debug)]
pub struct FrameCodec {
    lines: LinesCodec,
    max_length: usize,
}

impl FrameCodec {
    /// Create a codec with the default [`MAX_LINE_BYTES`] limit.
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_length(MAX_LINE_BYTES)
    }

    /// Create a codec with a custom inbound line limit.
    #[must_use]
    pub fn with_max_length(max_length: usize) -> Self {
        Self {
            lines: LinesCodec::new_with_max_length(max_length),
            max_length,
        }
    }

    fn map_codec_error(&self, e: LinesCodecError) -> AppError {
        match e {
            LinesCodecError::MaxLineLengthExceeded => AppError::MalformedFrame(format!(
                "line too long: exceeded {} bytes",
                self.max_length
            )),
            LinesCodecError::Io(io_err) if io_err.kind() == io::ErrorKind::InvalidData => {
                AppError::MalformedFrame(format!("invalid utf-8: {io_err}"))
            }
            LinesCodecError::Io(io_err) => AppError::Io(io_err.to_string()),
        }
    }
}

impl Default for FrameCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for FrameCodec {
    type Item = String;
    type Error = AppError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>> {
        self.lines.decode(src).map_err(|e| self.map_codec_error(e))
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>> {
        if let Some(line) = self.decode(src)? {
            return Ok(Some(line));
        }

        if src.is_empty() {
            Ok(None)
        } else {
            Err(AppError::StreamClosed(format!(
                "stream ended after {} bytes of an unterminated line",
                src.len()
            )))
        }
    }
}

impl Encoder<OutboundFrame> for FrameCodec {
    type Error = AppError;

    fn encode(&mut self, item: OutboundFrame, dst: &mut BytesMut) -> Result<()> {
        let payload = match item {
            OutboundFrame::Ready => READY.to_owned(),
            OutboundFrame::Reset => RESET.to_owned(),
            OutboundFrame::Action(action) => serde_json::to_string(&action).map_err(|e| {
                AppError::Serialization(format!("failed to serialise action command: {e}"))
            })?,
        };

        dst.reserve(COMMAND_TAG.len() + payload.len() + 2);
        dst.put_slice(COMMAND_TAG.as_bytes());
        dst.put_u8(b' ');
        dst.put_slice(payload.as_bytes());
        dst.put_u8(b'\n');
        Ok(())
    }
}
