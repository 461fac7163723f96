//! Unit tests for `AppError` display format and conversions.

use mlgame_client::AppError;

#[test]
fn display_prefixes_name_the_error_kind() {
    let cases = [
        (AppError::Config("x".into()), "config: x"),
        (AppError::StreamClosed("x".into()), "stream closed: x"),
        (AppError::MalformedFrame("x".into()), "malformed frame: x"),
        (AppError::Serialization("x".into()), "serialization failure: x"),
        (AppError::Timeout("x".into()), "timeout: x"),
        (AppError::Player("x".into()), "player: x"),
        (AppError::Io("x".into()), "io: x"),
    ];

    for (err, expected) in cases {
        assert_eq!(err.to_string(), expected);
    }
}

#[test]
fn error_message_no_trailing_period() {
    let err = AppError::StreamClosed("engine closed the stream".into());
    let s = err.to_string();
    assert!(!s.ends_with('.'), "error message must not end with a period: {s}");
}

#[test]
fn io_error_converts_to_io_variant() {
    let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe gone");
    let err = AppError::from(io);
    assert!(matches!(err, AppError::Io(ref msg) if msg.contains("pipe gone")));
}

#[test]
fn json_error_converts_to_serialization_variant() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    assert!(matches!(AppError::from(json_err), AppError::Serialization(_)));
}

#[test]
fn implements_std_error_trait() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    let err = AppError::MalformedFrame("no JSON object start in line".into());
    assert_error(&err);
    assert!(format!("{err:?}").contains("MalformedFrame"));
}
