//! The engine's stock template player.
//!
//! Serves on the first frame of each round, then repeats a single move.
//! When the scene reports a round-ending status it asks for a reset.

use tracing::debug;

use crate::config::PlayerConfig;
use crate::models::{ActionCommand, Command, InitArgs, SceneInfo};
use crate::player::Player;
use crate::Result;

/// Minimal player used when no custom decision logic is linked in.
#[derive(Debug, Clone)]
pub struct TemplatePlayer {
    init: InitArgs,
    config: PlayerConfig,
    ball_served: bool,
}

impl TemplatePlayer {
    /// Build the player from the engine's init payload.
    #[must_use]
    pub fn new(init: InitArgs, config: PlayerConfig) -> Self {
        debug!(args = ?init.args(), "template player: created");
        Self {
            init,
            config,
            ball_served: false,
        }
    }

    /// Init payload this player was built with.
    #[must_use]
    pub fn init_args(&self) -> &InitArgs {
        &self.init
    }

    /// Whether the serve command has been sent this round.
    #[must_use]
    pub fn ball_served(&self) -> bool {
        self.ball_served
    }

    fn round_over(&self, scene: &SceneInfo) -> bool {
        scene
            .status()
            .is_some_and(|status| self.config.reset_statuses.iter().any(|s| s == status))
    }
}

impl Player for TemplatePlayer {
    fn update(&mut self, scene: SceneInfo) -> Result<Command> {
        if self.round_over(&scene) {
            return Ok(Command::Reset);
        }

        let action = if self.ball_served {
            &self.config.move_command
        } else {
            self.ball_served = true;
            &self.config.serve_command
        };

        Ok(ActionCommand::single(scene.frame(), action.clone()).into())
    }

    fn reset(&mut self) -> Result<()> {
        self.ball_served = false;
        Ok(())
    }
}
