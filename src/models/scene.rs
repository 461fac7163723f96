//! Inbound engine payloads: the one-time init arguments and per-frame scenes.

use serde_json::{Map, Value};

use crate::{AppError, Result};

/// Engine-supplied configuration, read once at startup.
///
/// The engine conventionally wraps the player's constructor arguments as
/// `{"args": [...], "kwargs": {...}}`; [`InitArgs::args`] and
/// [`InitArgs::kwargs`] read that envelope, while [`InitArgs::as_value`]
/// exposes the raw object for anything else.
#[derive(Debug, Clone, PartialEq)]
pub struct InitArgs(Value);

impl InitArgs {
    /// Wrap a raw init payload.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Positional arguments, or an empty slice when absent.
    #[must_use]
    pub fn args(&self) -> &[Value] {
        self.0
            .get("args")
            .and_then(Value::as_array)
            .map_or(&[][..], Vec::as_slice)
    }

    /// Keyword arguments, if the payload carries a `kwargs` object.
    #[must_use]
    pub fn kwargs(&self) -> Option<&Map<String, Value>> {
        self.0.get("kwargs").and_then(Value::as_object)
    }

    /// Look up a top-level field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Borrow the raw payload.
    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consume into the raw payload.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }
}

/// Snapshot of the game state for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneInfo {
    frame: i64,
    value: Value,
}

impl SceneInfo {
    /// Build a scene from a decoded payload.
    ///
    /// # Errors
    ///
    /// Returns `AppError::MalformedFrame` if the payload has no integer
    /// `frame` field.
    pub fn from_value(value: Value) -> Result<Self> {
        let frame = value
            .get("frame")
            .and_then(Value::as_i64)
            .ok_or_else(|| {
                AppError::MalformedFrame("scene info has no integer `frame` field".into())
            })?;
        Ok(Self { frame, value })
    }

    /// Frame number assigned by the engine.
    #[must_use]
    pub fn frame(&self) -> i64 {
        self.frame
    }

    /// Game status string (`GAME_ALIVE`, `GAME_OVER`, ...), if present.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.value.get("status").and_then(Value::as_str)
    }

    /// Look up a top-level field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.value.get(key)
    }

    /// Borrow the raw payload.
    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.value
    }

    /// Consume into the raw payload.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.value
    }
}
