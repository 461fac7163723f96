//! Error types shared across the client.

use std::fmt::{Display, Formatter};

/// Shared client result type.
pub type Result<T> = std::result::Result<T, AppError>;

/// Client error enumeration covering every failure mode of a session.
///
/// None of these are recoverable mid-session: the wire protocol carries no
/// sequence numbers, so a lost or garbled line cannot be resynchronized.
#[derive(Debug)]
pub enum AppError {
    /// Configuration parsing or validation failure.
    Config(String),
    /// The engine closed its end of the stream where a line was expected.
    StreamClosed(String),
    /// An inbound line held no JSON object, or the JSON did not parse.
    MalformedFrame(String),
    /// A command could not be encoded as (or decoded from) JSON.
    Serialization(String),
    /// No inbound line arrived within the configured read timeout.
    Timeout(String),
    /// The player failed while producing a command or resetting.
    Player(String),
    /// File-system or stream I/O failure.
    Io(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::StreamClosed(msg) => write!(f, "stream closed: {msg}"),
            Self::MalformedFrame(msg) => write!(f, "malformed frame: {msg}"),
            Self::Serialization(msg) => write!(f, "serialization failure: {msg}"),
            Self::Timeout(msg) => write!(f, "timeout: {msg}"),
            Self::Player(msg) => write!(f, "player: {msg}"),
            Self::Io(msg) => write!(f, "io: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(format!("invalid config: {err}"))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
