//! Session controller - owns the player and both stream cursors.
//!
//! The loop is strictly request/response: a scene is read only after the
//! previous frame's command (or reset acknowledgment plus ready signal) has
//! been written and flushed. There is no pipelining and no look-ahead.
//!
//! | State       | Action                                                      |
//! |-------------|-------------------------------------------------------------|
//! | `Init`      | read init line, build the player                            |
//! | `Ready`     | write `__command__ READY`                                   |
//! | `Active`    | read scene, `update`, write the action command              |
//! | `Resetting` | write `__command__ RESET`, `reset`, then back to `Ready`    |

use std::convert::Infallible;

use serde_json::Value;
use tokio::io::{AsyncRead, AsyncWrite};
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::models::{Command, InitArgs, SceneInfo};
use crate::player::{Player, PlayerFactory};
use crate::protocol::codec::{FrameCodec, INIT_TAG, SCENE_TAG};
use crate::protocol::{FrameReader, FrameWriter};
use crate::session::{SessionState, SessionStats};
use crate::{AppError, Result};

/// Drives one player through the engine protocol.
#[derive(Debug)]
pub struct SessionController<P, R, W> {
    player: P,
    reader: FrameReader<R>,
    writer: FrameWriter<W>,
    strict_tags: bool,
    state: SessionState,
    stats: SessionStats,
}

impl<P, R, W> SessionController<P, R, W>
where
    P: Player,
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Wrap raw streams according to `config`, then run the init and ready
    /// steps.
    ///
    /// # Errors
    ///
    /// See [`SessionController::start`].
    pub async fn connect<F>(input: R, output: W, config: &ClientConfig, factory: F) -> Result<Self>
    where
        F: PlayerFactory<Player = P>,
    {
        let reader = FrameReader::with_codec(input, FrameCodec::with_max_length(config.max_line_bytes))
            .with_timeout(config.read_timeout());
        let writer = FrameWriter::new(output);
        Self::start(reader, writer, factory, config.strict_tags).await
    }

    /// Read the init line, build the player, and signal readiness.
    ///
    /// On return the controller is `Active` and exactly one
    /// `__command__ READY` line has been written.
    ///
    /// # Errors
    ///
    /// - Any read error from [`FrameReader::read_frame`].
    /// - `AppError::MalformedFrame` if `strict_tags` is set and the line is
    ///   not tagged `__init__`.
    /// - Whatever the factory returns.
    /// - `AppError::Io` if the ready signal cannot be written.
    pub async fn start<F>(
        mut reader: FrameReader<R>,
        writer: FrameWriter<W>,
        factory: F,
        strict_tags: bool,
    ) -> Result<Self>
    where
        F: PlayerFactory<Player = P>,
    {
        debug!(state = ?SessionState::Init, "session: awaiting init args");
        let init = read_payload(&mut reader, INIT_TAG, strict_tags).await?;
        info!("session: init args received");

        let player = factory.create(InitArgs::new(init)).map_err(|e| {
            warn!(error = %e, "session: player construction failed");
            e
        })?;

        let mut controller = Self::assemble(player, reader, writer, strict_tags);
        controller.signal_ready().await?;
        Ok(controller)
    }

    /// Run the control loop forever.
    ///
    /// There is no clean-shutdown path: the only way out is an error (the
    /// engine closing its stream included), which is why the success type
    /// is [`Infallible`].
    ///
    /// # Errors
    ///
    /// The first error from [`SessionController::step`].
    pub async fn run(&mut self) -> Result<Infallible> {
        loop {
            self.step().await?;
        }
    }

    /// Handle exactly one scene: read it, ask the player, and either send
    /// the action command or perform the full reset sequence.
    ///
    /// # Errors
    ///
    /// - Any read error from [`FrameReader::read_frame`].
    /// - `AppError::MalformedFrame` for a scene without an integer `frame`,
    ///   or an unexpected tag when `strict_tags` is set.
    /// - Whatever the player returns.
    /// - `AppError::Serialization` / `AppError::Io` from the writer.
    pub async fn step(&mut self) -> Result<()> {
        let value = read_payload(&mut self.reader, SCENE_TAG, self.strict_tags).await?;
        let scene = SceneInfo::from_value(value)?;
        let frame = scene.frame();
        self.stats.frames += 1;

        let command = self.player.update(scene).map_err(|e| {
            warn!(frame, error = %e, "session: player update failed");
            e
        })?;

        match command {
            Command::Reset => self.reset_cycle(frame).await,
            Command::Action(action) => {
                if action.frame != frame {
                    self.stats.frame_mismatches += 1;
                    warn!(
                        scene_frame = frame,
                        command_frame = action.frame,
                        "session: command frame does not match scene frame"
                    );
                }
                self.writer.write_command(Command::Action(action)).await
            }
        }
    }

    /// Current position in the state machine.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Counters accumulated so far.
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Borrow the player.
    pub fn player(&self) -> &P {
        &self.player
    }

    /// Borrow the output stream.
    pub fn output(&self) -> &W {
        self.writer.get_ref()
    }

    /// Tear the controller down into its player and streams.
    pub fn into_parts(self) -> (P, R, W) {
        (self.player, self.reader.into_inner(), self.writer.into_inner())
    }

    fn assemble(player: P, reader: FrameReader<R>, writer: FrameWriter<W>, strict_tags: bool) -> Self {
        Self {
            player,
            reader,
            writer,
            strict_tags,
            state: SessionState::Init,
            stats: SessionStats::default(),
        }
    }

    async fn signal_ready(&mut self) -> Result<()> {
        self.transition(SessionState::Ready);
        self.writer.write_ready().await?;
        self.transition(SessionState::Active);
        Ok(())
    }

    async fn reset_cycle(&mut self, frame: i64) -> Result<()> {
        self.transition(SessionState::Resetting);
        self.writer.write_reset_ack().await?;

        self.player.reset().map_err(|e| {
            warn!(frame, error = %e, "session: player reset failed");
            e
        })?;
        self.stats.resets += 1;
        info!(frame, resets = self.stats.resets, "session: player reset");

        self.signal_ready().await
    }

    fn transition(&mut self, next: SessionState) {
        debug!(from = ?self.state, to = ?next, frames = self.stats.frames, "session: state change");
        self.state = next;
    }
}

/// Read one line and return its payload, checking the tag only when asked.
async fn read_payload<R>(reader: &mut FrameReader<R>, expected: &str, strict_tags: bool) -> Result<Value>
where
    R: AsyncRead + Unpin,
{
    let frame = reader.read_frame().await?;
    if strict_tags && frame.tag != expected {
        return Err(AppError::MalformedFrame(format!(
            "expected a {expected} line, got tag {:?}",
            frame.tag
        )));
    }
    Ok(frame.value)
}

/// Connect to the engine over `input` / `output` and run until an error.
///
/// # Errors
///
/// The first error raised while starting or running the session.
pub async fn run_session<F, R, W>(
    input: R,
    output: W,
    config: &ClientConfig,
    factory: F,
) -> Result<Infallible>
where
    F: PlayerFactory,
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut controller = SessionController::connect(input, output, config, factory).await?;
    controller.run().await
}
