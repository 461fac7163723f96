//! Engine wire protocol over the two standard streams.
//!
//! - `codec`: [`LinesCodec`](tokio_util::codec::LinesCodec)-based line framing,
//!   prefix stripping for inbound frames, and `__command__` encoding for
//!   outbound ones.
//! - `reader`: blocking-per-line reads of tagged JSON values.
//! - `writer`: one flushed line per outbound message.

pub mod codec;
pub mod reader;
pub mod writer;

pub use codec::{FrameCodec, OutboundFrame, TaggedFrame};
pub use reader::FrameReader;
pub use writer::FrameWriter;
