//! Domain model module declarations.

pub mod command;
pub mod scene;

pub use command::{ActionCommand, Command};
pub use scene::{InitArgs, SceneInfo};
