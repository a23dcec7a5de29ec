//! Unit tests for the `DgError` enum and its associated `Display` trait implementation.

use dglab_rs::error::DgError;

/// Tests that the `NoDeviceFound` variant is correctly formatted.
#[test]
fn test_no_device_found_error() {
    let err = DgError::NoDeviceFound;
    assert_eq!(err.to_string(), "No DG-Lab device found");
}

/// Tests that the `UnknownGeneration` variant is correctly formatted.
#[test]
fn test_unknown_generation_error() {
    let err = DgError::UnknownGeneration("v9".to_string());
    assert_eq!(err.to_string(), "Unknown device generation: v9");
}

/// Tests that the `Transport` variant carries the transport message verbatim.
#[test]
fn test_transport_error() {
    let err = DgError::Transport("characteristic not found".to_string());
    assert_eq!(err.to_string(), "Transport error: characteristic not found");
}
