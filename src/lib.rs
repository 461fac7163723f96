#![forbid(unsafe_code)]

//! Client adapter that lets a Rust [`Player`] take part in an MLGame
//! session over the engine's stdio protocol.
//!
//! ```rust,ignore
//! use mlgame_client::{run_session, ClientConfig, Command, InitArgs, Player, SceneInfo};
//!
//! let config = ClientConfig::default();
//! run_session(tokio::io::stdin(), tokio::io::stdout(), &config, |init: InitArgs| {
//!     Ok(MyPlayer::new(init))
//! })
//! .await?;
//! ```

pub mod config;
pub mod errors;
pub mod models;
pub mod player;
pub mod protocol;
pub mod session;

pub use config::ClientConfig;
pub use errors::{AppError, Result};
pub use models::{ActionCommand, Command, InitArgs, SceneInfo};
pub use player::{Player, PlayerFactory};
pub use session::{run_session, SessionController, SessionState};
