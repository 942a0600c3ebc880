//! Unit tests for error.rs
//!
//! Tests Error variants, Display formatting, and the engine_err!/
//! engine_bail! macros.

use crate::error::{Error, Result};
use crate::{engine_bail, engine_err};

// ============================================================================
// DISPLAY FORMATTING
// ============================================================================

#[test]
fn test_error_display_capacity_exceeded() {
    let error = Error::CapacityExceeded("view queue is full".to_string());
    assert_eq!(format!("{}", error), "Capacity exceeded: view queue is full");
}

#[test]
fn test_error_display_duplicate_resource() {
    let error = Error::DuplicateResource("texture 'hdr' already exists".to_string());
    assert_eq!(
        format!("{}", error),
        "Duplicate resource: texture 'hdr' already exists"
    );
}

#[test]
fn test_error_display_resource_not_found() {
    let error = Error::ResourceNotFound("no such framebuffer".to_string());
    assert_eq!(format!("{}", error), "Resource not found: no such framebuffer");
}

#[test]
fn test_error_display_invalid_resource() {
    let error = Error::InvalidResource("write past end".to_string());
    assert_eq!(format!("{}", error), "Invalid resource: write past end");
}

#[test]
fn test_error_display_initialization_failed() {
    let error = Error::InitializationFailed("shader compile failed".to_string());
    assert_eq!(
        format!("{}", error),
        "Initialization failed: shader compile failed"
    );
}

#[test]
fn test_error_display_backend_error() {
    let error = Error::BackendError("device lost".to_string());
    assert_eq!(format!("{}", error), "Backend error: device lost");
}

// ============================================================================
// TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_implements_std_error() {
    let error: Box<dyn std::error::Error> =
        Box::new(Error::BackendError("device lost".to_string()));
    assert!(format!("{}", error).contains("device lost"));
}

#[test]
fn test_error_equality() {
    let a = Error::DuplicateResource("x".to_string());
    let b = Error::DuplicateResource("x".to_string());
    let c = Error::DuplicateResource("y".to_string());
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, Error::ResourceNotFound("x".to_string()));
}

#[test]
fn test_error_clone() {
    let error = Error::CapacityExceeded("full".to_string());
    assert_eq!(error.clone(), error);
}

// ============================================================================
// MACROS
// ============================================================================

#[test]
fn test_engine_err_builds_variant_with_formatted_message() {
    let error = engine_err!("nebula::Test", CapacityExceeded, "limit is {}", 64);
    assert_eq!(error, Error::CapacityExceeded("limit is 64".to_string()));
}

#[test]
fn test_engine_bail_early_returns() {
    fn failing() -> Result<u32> {
        engine_bail!("nebula::Test", ResourceNotFound, "missing '{}'", "thing");
    }

    let result = failing();
    assert_eq!(
        result,
        Err(Error::ResourceNotFound("missing 'thing'".to_string()))
    );
}

#[test]
fn test_engine_bail_not_reached_on_success_path() {
    fn conditional(fail: bool) -> Result<u32> {
        if fail {
            engine_bail!("nebula::Test", InvalidResource, "forced failure");
        }
        Ok(7)
    }

    assert_eq!(conditional(false), Ok(7));
    assert!(conditional(true).is_err());
}
