use std::error::Error;
use timetext_core::errors::{TextError, TextResult};

#[test]
fn test_text_error_display() {
    let validation = TextError::Validation("Invalid input".to_string());
    let unknown = TextError::UnknownTimezone("Mars/Olympus".to_string());
    let remote = TextError::Remote {
        status: 503,
        body: "unavailable".to_string(),
    };
    let clipboard = TextError::Clipboard("xclip not found".to_string());
    let config = TextError::Config("TIMETEXT_API_KEY must be set".to_string());
    let transport = TextError::Transport(eyre::eyre!("connection refused"));

    assert_eq!(validation.to_string(), "Validation error: Invalid input");
    assert_eq!(unknown.to_string(), "Unknown timezone: Mars/Olympus");
    assert_eq!(remote.to_string(), "Remote service returned 503: unavailable");
    assert_eq!(clipboard.to_string(), "Clipboard error: xclip not found");
    assert_eq!(
        config.to_string(),
        "Configuration error: TIMETEXT_API_KEY must be set"
    );
    assert!(transport.to_string().contains("connection refused"));
}

#[test]
fn test_box_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let boxed_error: Box<dyn Error + Send + Sync> = Box::new(io_error);
    let text_error: TextError = boxed_error.into();

    assert!(text_error.to_string().contains("IO error"));
    assert!(text_error.source().is_some());
}

#[test]
fn test_eyre_conversion() {
    fn fails() -> TextResult<()> {
        Err(eyre::eyre!("socket closed"))?
    }

    match fails() {
        Err(TextError::Transport(report)) => assert!(report.to_string().contains("socket closed")),
        other => panic!("Expected Transport error, got: {:?}", other),
    }
}
