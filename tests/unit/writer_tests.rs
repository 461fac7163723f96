//! Unit tests for `FrameWriter`: each call emits one complete, flushed line.

use tokio::io::{AsyncBufReadExt, BufReader};

use mlgame_client::protocol::FrameWriter;
use mlgame_client::{ActionCommand, Command};

fn written(writer: &FrameWriter<Vec<u8>>) -> String {
    String::from_utf8(writer.get_ref().clone()).unwrap()
}

#[tokio::test]
async fn ready_line() {
    let mut writer = FrameWriter::new(Vec::new());
    writer.write_ready().await.unwrap();
    assert_eq!(written(&writer), "__command__ READY\n");
}

#[tokio::test]
async fn reset_ack_line() {
    let mut writer = FrameWriter::new(Vec::new());
    writer.write_reset_ack().await.unwrap();
    assert_eq!(written(&writer), "__command__ RESET\n");
}

#[tokio::test]
async fn reset_command_is_written_as_literal() {
    let mut writer = FrameWriter::new(Vec::new());
    writer.write_command(Command::Reset).await.unwrap();
    assert_eq!(written(&writer), "__command__ RESET\n");
}

#[tokio::test]
async fn action_command_line() {
    let mut writer = FrameWriter::new(Vec::new());
    writer
        .write_command(ActionCommand::single(5, "LEFT").into())
        .await
        .unwrap();
    assert_eq!(
        written(&writer),
        "__command__ {\"frame\":5,\"command\":[\"LEFT\"]}\n"
    );
}

#[tokio::test]
async fn each_call_is_visible_to_the_peer_immediately() {
    let (client, engine) = tokio::io::duplex(256);
    let mut writer = FrameWriter::new(client);
    let mut lines = BufReader::new(engine).lines();

    writer.write_ready().await.unwrap();
    assert_eq!(
        lines.next_line().await.unwrap().as_deref(),
        Some("__command__ READY")
    );

    writer
        .write_command(ActionCommand::new(1, ["A", "B"]).into())
        .await
        .unwrap();
    assert_eq!(
        lines.next_line().await.unwrap().as_deref(),
        Some("__command__ {\"frame\":1,\"command\":[\"A\",\"B\"]}")
    );
}

#[tokio::test]
async fn write_to_closed_peer_is_io_error() {
    let (client, engine) = tokio::io::duplex(16);
    drop(engine);
    let mut writer = FrameWriter::new(client);

    assert!(matches!(
        writer.write_ready().await,
        Err(mlgame_client::AppError::Io(_))
    ));
}
