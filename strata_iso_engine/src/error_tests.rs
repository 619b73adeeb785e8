//! Unit tests for error.rs

use super::*;

// ============================================================================
// Display
// ============================================================================

#[test]
fn test_display_backend_error() {
    let error = StrataError::BackendError("batch rejected matrix".to_string());
    assert_eq!(error.to_string(), "Backend error: batch rejected matrix");
}

#[test]
fn test_display_invalid_resource() {
    let error = StrataError::InvalidResource("unknown object key".to_string());
    assert_eq!(error.to_string(), "Invalid resource: unknown object key");
}

#[test]
fn test_display_initialization_failed() {
    let error = StrataError::InitializationFailed("entity not spawned".to_string());
    assert_eq!(error.to_string(), "Initialization failed: entity not spawned");
}

// ============================================================================
// Trait impls
// ============================================================================

#[test]
fn test_error_clone_and_eq() {
    let error = StrataError::InvalidResource("x".to_string());
    assert_eq!(error.clone(), error);
    assert_ne!(error, StrataError::BackendError("x".to_string()));
}

#[test]
fn test_error_is_std_error() {
    fn assert_std_error<E: std::error::Error>(_: &E) {}
    assert_std_error(&StrataError::BackendError("x".to_string()));
}

#[test]
fn test_result_alias() {
    fn fails() -> StrataResult<i32> {
        Err(StrataError::InitializationFailed("nope".to_string()))
    }
    assert!(fails().is_err());
}

// ============================================================================
// Macros
// ============================================================================

#[test]
fn test_engine_err_builds_invalid_resource() {
    let error = crate::engine_err!("strata::Test", "missing {}", "thing");
    assert_eq!(error, StrataError::InvalidResource("missing thing".to_string()));
}

#[test]
fn test_engine_bail_returns_early() {
    fn bails() -> StrataResult<()> {
        crate::engine_bail!("strata::Test", "gone");
    }
    assert_eq!(
        bails(),
        Err(StrataError::InvalidResource("gone".to_string()))
    );
}
