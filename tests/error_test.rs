use std::io;

use mason::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::Io(_) => (),
        _ => panic!("Expected Io variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::Validation("bad project name".to_string());
    assert_eq!(err.to_string(), "Validation error: bad project name");

    let err = Error::Config("missing table entry".to_string());
    assert_eq!(err.to_string(), "Configuration error: missing table entry");

    let err = Error::Tool { command: "git init".to_string(), details: "not found".to_string() };
    assert_eq!(err.to_string(), "External tool failure: `git init`: not found");
}
