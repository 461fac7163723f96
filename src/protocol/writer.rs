//! Outbound half of the engine protocol.
//!
//! Every call writes exactly one `__command__ ...` line and flushes it
//! before returning, so the engine sees each message as soon as it is
//! produced. Nothing is batched across calls.

use futures_util::SinkExt;
use tokio::io::AsyncWrite;
use tokio_util::codec::FramedWrite;
use tracing::{debug, warn};

use crate::models::Command;
use crate::protocol::codec::{FrameCodec, OutboundFrame};
use crate::Result;

/// Line writer over the engine's input stream.
#[derive(Debug)]
pub struct FrameWriter<W> {
    framed: FramedWrite<W, FrameCodec>,
}

impl<W> FrameWriter<W>
where
    W: AsyncWrite + Unpin,
{
    /// Wrap `inner` (normally the process's stdout).
    pub fn new(inner: W) -> Self {
        Self {
            framed: FramedWrite::new(inner, FrameCodec::new()),
        }
    }

    /// Write `__command__ READY`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Io` if the write or flush fails.
    pub async fn write_ready(&mut self) -> Result<()> {
        self.send(OutboundFrame::Ready).await
    }

    /// Write `__command__ RESET`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Io` if the write or flush fails.
    pub async fn write_reset_ack(&mut self) -> Result<()> {
        self.send(OutboundFrame::Reset).await
    }

    /// Write a player command: `RESET` or the JSON action command.
    ///
    /// # Errors
    ///
    /// - `AppError::Serialization`: the action command could not be encoded.
    /// - `AppError::Io`: the write or flush fails.
    pub async fn write_command(&mut self, command: Command) -> Result<()> {
        self.send(command.into()).await
    }

    /// Consume the writer, returning the wrapped stream.
    pub fn into_inner(self) -> W {
        self.framed.into_inner()
    }

    /// Borrow the wrapped stream.
    pub fn get_ref(&self) -> &W {
        self.framed.get_ref()
    }

    async fn send(&mut self, frame: OutboundFrame) -> Result<()> {
        debug!(?frame, "frame writer: sending");
        // `SinkExt::send` flushes after encoding, so the line is complete on return.
        self.framed.send(frame).await.map_err(|e| {
            warn!(error = %e, "frame writer: write failed");
            e
        })
    }
}
