//! Player output for one frame: either an action command or the reset signal.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::{AppError, Result};

/// Literal payload of the control command that restarts the decision cycle.
pub const RESET: &str = "RESET";

/// Action command echoed back to the engine for a given frame.
///
/// Serializes with `frame` and `command` first, followed by any extra fields
/// the player attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionCommand {
    /// Frame number this command answers; should equal the scene's frame.
    pub frame: i64,
    /// Ordered action identifiers, e.g. `["MOVE_LEFT"]`.
    pub command: Vec<String>,
    /// Game-specific fields carried through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ActionCommand {
    /// Build a command carrying several actions for `frame`.
    #[must_use]
    pub fn new<I, S>(frame: i64, actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            frame,
            command: actions.into_iter().map(Into::into).collect(),
            extra: Map::new(),
        }
    }

    /// Build a command carrying a single action for `frame`.
    #[must_use]
    pub fn single(frame: i64, action: impl Into<String>) -> Self {
        Self::new(frame, [action.into()])
    }
}

/// Result of [`Player::update`](crate::player::Player::update).
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Control command: acknowledge, reset the player, signal ready again.
    Reset,
    /// Normal per-frame action.
    Action(ActionCommand),
}

impl Command {
    /// Whether this is the reset control command.
    #[must_use]
    pub fn is_reset(&self) -> bool {
        matches!(self, Self::Reset)
    }

    /// Interpret a JSON value produced by a JSON-speaking player.
    ///
    /// `"RESET"` maps to [`Command::Reset`]; an object with `frame` and
    /// `command` maps to [`Command::Action`].
    ///
    /// # Errors
    ///
    /// Returns `AppError::Serialization` for any other shape.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::String(s) if s == RESET => Ok(Self::Reset),
            Value::String(s) => Err(AppError::Serialization(format!(
                "unknown control command: {s}"
            ))),
            Value::Object(_) => serde_json::from_value::<ActionCommand>(value)
                .map(Self::Action)
                .map_err(|e| AppError::Serialization(format!("invalid action command: {e}"))),
            other => Err(AppError::Serialization(format!(
                "command must be \"{RESET}\" or an object, got: {other}"
            ))),
        }
    }
}

impl From<ActionCommand> for Command {
    fn from(action: ActionCommand) -> Self {
        Self::Action(action)
    }
}

impl TryFrom<Value> for Command {
    type Error = AppError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(value)
    }
}

impl Serialize for Command {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Reset => serializer.serialize_str(RESET),
            Self::Action(action) => action.serialize(serializer),
        }
    }
}
