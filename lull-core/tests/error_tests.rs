// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lull_core::{LullError, Result};

#[test]
fn test_error_display() {
    let err = LullError::no_runtime("debounce timer");
    assert_eq!(err.to_string(), "No timer runtime available: debounce timer");

    let err = LullError::invalid_path("a[0", "unclosed bracket");
    assert_eq!(
        err.to_string(),
        "Invalid object path 'a[0': unclosed bracket"
    );
}

#[test]
fn test_error_constructors() {
    let err = LullError::no_runtime("throttle timer");
    assert!(matches!(err, LullError::NoRuntime { .. }));

    let err = LullError::invalid_path("a..b", "empty segment");
    assert!(matches!(
        err,
        LullError::InvalidPath { ref path, .. } if path == "a..b"
    ));
}

#[test]
fn test_is_recoverable() {
    assert!(LullError::no_runtime("test").is_recoverable());
    assert!(!LullError::invalid_path("]", "test").is_recoverable());
}

#[test]
fn test_result_alias_propagates_with_question_mark() {
    fn inner() -> Result<u8> {
        Err(LullError::no_runtime("inner"))
    }

    fn outer() -> Result<u8> {
        let value = inner()?;
        Ok(value + 1)
    }

    assert_eq!(outer(), Err(LullError::no_runtime("inner")));
}

#[test]
fn test_error_converts_into_anyhow() {
    let result: anyhow::Result<()> = Err(LullError::invalid_path("x[", "unclosed bracket").into());
    let err = result.unwrap_err();
    assert!(err.to_string().contains("unclosed bracket"));
    assert!(err.downcast_ref::<LullError>().is_some());
}
