//! Player capability interface.
//!
//! The [`Player`] trait is the only seam between the session controller and
//! the decision logic. A player is built once from the engine's
//! [`InitArgs`] through a [`PlayerFactory`], then receives exactly one
//! [`Player::update`] per frame and one [`Player::reset`] per reset cycle.

pub mod template;

use crate::models::{Command, InitArgs, SceneInfo};
use crate::Result;

/// Decision-making module driven by the session controller.
pub trait Player {
    /// Produce the command for `scene`.
    ///
    /// Return [`Command::Reset`] to end the round; the controller then
    /// acknowledges, calls [`Player::reset`], and signals ready again.
    ///
    /// # Errors
    ///
    /// Any error is fatal to the session: there is no recovery action
    /// mid-protocol.
    fn update(&mut self, scene: SceneInfo) -> Result<Command>;

    /// Clear all per-round state. Invoked once per reset cycle.
    ///
    /// # Errors
    ///
    /// Any error is fatal to the session.
    fn reset(&mut self) -> Result<()>;
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn update(&mut self, scene: SceneInfo) -> Result<Command> {
        (**self).update(scene)
    }

    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }
}

/// Construction contract: builds the player from the engine's init payload.
///
/// Implemented for any `FnOnce(InitArgs) -> Result<P>`.
pub trait PlayerFactory {
    /// Player type produced by this factory.
    type Player: Player;

    /// Build the player.
    ///
    /// # Errors
    ///
    /// Any error aborts the session before the ready signal is sent.
    fn create(self, init: InitArgs) -> Result<Self::Player>;
}

impl<F, P> PlayerFactory for F
where
    F: FnOnce(InitArgs) -> Result<P>,
    P: Player,
{
    type Player = P;

    fn create(self, init: InitArgs) -> Result<P> {
        self(init)
    }
}
