use std::io::Write;
use std::time::Duration;

use mlgame_client::protocol::codec::MAX_LINE_BYTES;
use mlgame_client::{AppError, ClientConfig};

fn sample_toml() -> &'static str {
    r#"
read_timeout_ms = 2500
max_line_bytes = 4096
strict_tags = true

[player]
serve_command = "SERVE_TO_RIGHT"
move_command = "MOVE_RIGHT"
reset_statuses = ["GAME_OVER"]
"#
}

#[test]
fn defaults_keep_bare_protocol_behavior() {
    let config = ClientConfig::default();
    assert_eq!(config.read_timeout_ms, 0);
    assert!(config.read_timeout().is_none(), "reads must block forever by default");
    assert_eq!(config.max_line_bytes, MAX_LINE_BYTES);
    assert!(!config.strict_tags, "prefix tags must be ignored by default");
    assert_eq!(config.player.serve_command, "SERVE_TO_LEFT");
    assert_eq!(config.player.move_command, "MOVE_LEFT");
    assert_eq!(config.player.reset_statuses, vec!["GAME_OVER", "GAME_PASS"]);
}

#[test]
fn empty_toml_equals_defaults() {
    let config = ClientConfig::from_toml_str("").expect("empty config is valid");
    assert_eq!(config, ClientConfig::default());
}

#[test]
fn parses_full_config() {
    let config = ClientConfig::from_toml_str(sample_toml()).expect("valid config");
    assert_eq!(config.read_timeout(), Some(Duration::from_millis(2500)));
    assert_eq!(config.max_line_bytes, 4096);
    assert!(config.strict_tags);
    assert_eq!(config.player.serve_command, "SERVE_TO_RIGHT");
    assert_eq!(config.player.move_command, "MOVE_RIGHT");
    assert_eq!(config.player.reset_statuses, vec!["GAME_OVER"]);
}

#[test]
fn partial_player_section_keeps_other_defaults() {
    let config = ClientConfig::from_toml_str("[player]\nmove_command = \"NONE\"\n")
        .expect("valid config");
    assert_eq!(config.player.move_command, "NONE");
    assert_eq!(config.player.serve_command, "SERVE_TO_LEFT");
}

#[test]
fn zero_line_limit_is_rejected() {
    let result = ClientConfig::from_toml_str("max_line_bytes = 0");
    assert!(matches!(result, Err(AppError::Config(_))));
}

#[test]
fn blank_player_command_is_rejected() {
    let result = ClientConfig::from_toml_str("[player]\nserve_command = \"  \"\n");
    assert!(matches!(result, Err(AppError::Config(_))));
}

#[test]
fn invalid_toml_is_config_error() {
    match ClientConfig::from_toml_str("read_timeout_ms = \"soon\"") {
        Err(AppError::Config(msg)) => assert!(msg.starts_with("invalid config")),
        other => panic!("expected Config error, got: {other:?}"),
    }
}

#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(sample_toml().as_bytes()).expect("write config");

    let config = ClientConfig::load_from_path(file.path()).expect("load config");
    assert_eq!(config.max_line_bytes, 4096);
}

#[test]
fn missing_file_is_config_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let result = ClientConfig::load_from_path(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(AppError::Config(ref msg)) if msg.contains("failed to read config")));
}
