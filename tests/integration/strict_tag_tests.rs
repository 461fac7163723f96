//! Opt-in prefix tag validation.

use mlgame_client::{AppError, ClientConfig, SessionController};

use super::test_helpers::{new_log, recording_factory};

fn strict() -> ClientConfig {
    ClientConfig {
        strict_tags: true,
        ..ClientConfig::default()
    }
}

#[tokio::test]
async fn correctly_tagged_lines_are_accepted() {
    let input: &[u8] = b"__init__ {\"level\":1}\n__scene_info__ {\"frame\":0}\n";
    let log = new_log();

    let mut controller =
        SessionController::connect(input, Vec::new(), &strict(), recording_factory(&log, vec![]))
            .await
            .unwrap();
    controller.step().await.unwrap();

    assert_eq!(controller.stats().frames, 1);
}

#[tokio::test]
async fn scene_tag_on_init_line_is_rejected() {
    let input: &[u8] = b"__scene_info__{\"frame\":0}\n";
    let log = new_log();

    let result =
        SessionController::connect(input, Vec::new(), &strict(), recording_factory(&log, vec![]))
            .await;

    match result {
        Err(AppError::MalformedFrame(msg)) => {
            assert!(msg.contains("__init__"), "message must name the expected tag: {msg}");
        }
        Err(other) => panic!("expected MalformedFrame, got: {other:?}"),
        Ok(_) => panic!("strict mode must reject a mistagged init line"),
    }
}

#[tokio::test]
async fn init_tag_on_scene_line_is_rejected() {
    let input: &[u8] = b"__init__{}\n__init__{\"frame\":0}\n";
    let log = new_log();

    let mut controller =
        SessionController::connect(input, Vec::new(), &strict(), recording_factory(&log, vec![]))
            .await
            .unwrap();

    assert!(matches!(
        controller.step().await,
        Err(AppError::MalformedFrame(_))
    ));
    assert_eq!(controller.stats().frames, 0);
}
