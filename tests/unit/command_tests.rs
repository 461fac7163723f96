//! Unit tests for `Command` conversion from and to JSON.

use serde_json::json;

use mlgame_client::models::command::RESET;
use mlgame_client::{ActionCommand, AppError, Command};

#[test]
fn reset_string_is_control_command() {
    let command = Command::from_value(json!("RESET")).unwrap();
    assert!(command.is_reset());
    assert_eq!(command, Command::Reset);
}

#[test]
fn object_with_frame_and_command_is_action() {
    let command = Command::try_from(json!({"frame": 5, "command": ["LEFT"]})).unwrap();
    assert_eq!(command, Command::Action(ActionCommand::single(5, "LEFT")));
}

#[test]
fn extra_fields_are_preserved() {
    let command = Command::from_value(json!({"frame": 1, "command": [], "ball": [3, 4]})).unwrap();
    match command {
        Command::Action(action) => {
            assert!(action.command.is_empty());
            assert_eq!(action.extra.get("ball"), Some(&json!([3, 4])));
        }
        Command::Reset => panic!("expected an action command"),
    }
}

#[test]
fn other_strings_are_rejected() {
    assert!(matches!(
        Command::from_value(json!("reset")),
        Err(AppError::Serialization(_))
    ));
}

#[test]
fn non_object_non_string_is_rejected() {
    for value in [json!(null), json!(7), json!(["LEFT"]), json!(true)] {
        assert!(
            matches!(Command::from_value(value.clone()), Err(AppError::Serialization(_))),
            "{value} must be rejected"
        );
    }
}

#[test]
fn object_missing_frame_is_rejected() {
    match Command::from_value(json!({"command": ["LEFT"]})) {
        Err(AppError::Serialization(msg)) => assert!(msg.contains("invalid action command")),
        other => panic!("expected Serialization error, got: {other:?}"),
    }
}

#[test]
fn command_serializes_to_wire_shape() {
    assert_eq!(serde_json::to_value(Command::Reset).unwrap(), json!(RESET));
    assert_eq!(
        serde_json::to_value(Command::from(ActionCommand::single(9, "NONE"))).unwrap(),
        json!({"frame": 9, "command": ["NONE"]})
    );
}
