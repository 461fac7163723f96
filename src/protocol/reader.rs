//! Inbound half of the engine protocol.
//!
//! Reads one `\n`-terminated line per call from the engine's side of the
//! pipe (normally the process's stdin) and decodes it into a JSON value.
//! The reader is driven by [`FramedRead`] backed by [`FrameCodec`], which
//! enforces the per-line limit before any JSON parsing happens.
//!
//! Reads block until a full line is available. By default there is no
//! timeout: a stalled engine stalls the client.
//! [`FrameReader::with_timeout`] opts in to a deadline.

use std::time::Duration;

use futures_util::StreamExt;
use serde_json::Value;
use tokio::io::AsyncRead;
use tokio_util::codec::FramedRead;
use tracing::{debug, trace};

use crate::protocol::codec::{parse_tagged_line, FrameCodec, TaggedFrame};
use crate::{AppError, Result};

/// Line reader over the engine's output stream.
#[derive(Debug)]
pub struct FrameReader<R> {
    framed: FramedRead<R, FrameCodec>,
    timeout: Option<Duration>,
}

impl<R> FrameReader<R>
where
    R: AsyncRead + Unpin,
{
    /// Wrap `inner` with the default codec and no read timeout.
    pub fn new(inner: R) -> Self {
        Self::with_codec(inner, FrameCodec::new())
    }

    /// Wrap `inner` with a specific codec (e.g. a custom line limit).
    pub fn with_codec(inner: R, codec: FrameCodec) -> Self {
        Self {
            framed: FramedRead::new(inner, codec),
            timeout: None,
        }
    }

    /// Fail reads that wait longer than `timeout`; `None` waits forever.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read one raw line, without its terminator.
    ///
    /// # Errors
    ///
    /// - `AppError::StreamClosed`: EOF before a complete line.
    /// - `AppError::Timeout`: the configured timeout elapsed.
    /// - `AppError::MalformedFrame`: the line exceeded the length limit.
    /// - `AppError::Io`: the underlying stream failed.
    pub async fn read_line(&mut self) -> Result<String> {
        let next = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.framed.next())
                .await
                .map_err(|_| AppError::Timeout(format!("no line received within {limit:?}")))?,
            None => self.framed.next().await,
        };

        match next {
            Some(Ok(line)) => {
                trace!(bytes = line.len(), "frame reader: line received");
                Ok(line)
            }
            Some(Err(e)) => Err(e),
            None => {
                debug!("frame reader: EOF detected");
                Err(AppError::StreamClosed(
                    "engine closed the stream while a line was expected".into(),
                ))
            }
        }
    }

    /// Read one line and split it into prefix tag and JSON payload.
    ///
    /// # Errors
    ///
    /// Everything [`FrameReader::read_line`] returns, plus
    /// `AppError::MalformedFrame` when the line holds no parseable object.
    pub async fn read_frame(&mut self) -> Result<TaggedFrame> {
        let line = self.read_line().await?;
        parse_tagged_line(&line)
    }

    /// Read one line and return its JSON payload, discarding the prefix.
    ///
    /// # Errors
    ///
    /// See [`FrameReader::read_frame`].
    pub async fn read_tagged_value(&mut self) -> Result<Value> {
        self.read_frame().await.map(|frame| frame.value)
    }

    /// Consume the reader, returning the wrapped stream.
    ///
    /// Bytes already buffered past the last decoded line are dropped.
    pub fn into_inner(self) -> R {
        self.framed.into_inner()
    }
}
