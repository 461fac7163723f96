//! Client configuration parsing and validation.
//!
//! Every field has a default, so a client started without a config file
//! speaks the bare two-stream protocol: no read timeout,
//! prefix tags ignored, and the stock template player commands.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::protocol::codec::MAX_LINE_BYTES;
use crate::{AppError, Result};

/// Settings for the bundled [`TemplatePlayer`](crate::player::template::TemplatePlayer).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct PlayerConfig {
    /// Command sent on the first frame of each round.
    #[serde(default = "default_serve_command")]
    pub serve_command: String,
    /// Command sent on every later frame of the round.
    #[serde(default = "default_move_command")]
    pub move_command: String,
    /// Scene `status` values that end the round and trigger a reset.
    #[serde(default = "default_reset_statuses")]
    pub reset_statuses: Vec<String>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            serve_command: default_serve_command(),
            move_command: default_move_command(),
            reset_statuses: default_reset_statuses(),
        }
    }
}

fn default_serve_command() -> String {
    "SERVE_TO_LEFT".into()
}

fn default_move_command() -> String {
    "MOVE_LEFT".into()
}

fn default_reset_statuses() -> Vec<String> {
    vec!["GAME_OVER".into(), "GAME_PASS".into()]
}

fn default_max_line_bytes() -> usize {
    MAX_LINE_BYTES
}

/// Client configuration parsed from an optional `client.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct ClientConfig {
    /// Per-line read timeout in milliseconds; 0 means wait forever.
    #[serde(default)]
    pub read_timeout_ms: u64,
    /// Longest inbound line accepted before the frame is rejected.
    #[serde(default = "default_max_line_bytes")]
    pub max_line_bytes: usize,
    /// Reject lines whose prefix tag does not match the expected message kind.
    #[serde(default)]
    pub strict_tags: bool,
    /// Template player settings.
    #[serde(default)]
    pub player: PlayerConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            read_timeout_ms: 0,
            max_line_bytes: default_max_line_bytes(),
            strict_tags: false,
            player: PlayerConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Load and validate configuration from a TOML file path.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the file cannot be read or contains
    /// invalid TOML, or if validation fails.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|err| AppError::Config(format!("failed to read config: {err}")))?;
        Self::from_toml_str(&raw)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if parsing or validation fails.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Read timeout as a [`Duration`], or `None` when reads may block forever.
    #[must_use]
    pub fn read_timeout(&self) -> Option<Duration> {
        (self.read_timeout_ms > 0).then(|| Duration::from_millis(self.read_timeout_ms))
    }

    fn validate(&self) -> Result<()> {
        if self.max_line_bytes == 0 {
            return Err(AppError::Config(
                "max_line_bytes must be greater than zero".into(),
            ));
        }

        if self.player.serve_command.trim().is_empty()
            || self.player.move_command.trim().is_empty()
        {
            return Err(AppError::Config(
                "player commands must not be empty".into(),
            ));
        }

        Ok(())
    }
}
