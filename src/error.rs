//! # DG-Lab Error Handling
//!
//! This module defines the DgError enum, which represents the different error
//! types that can occur in the dglab-rs crate.

use thiserror::Error;

/// Represents the different error types that can occur in the DG-Lab crate.
#[derive(Debug, Error)]
pub enum DgError {
    /// Indicates that a discovery scan produced no matching device.
    #[error("No DG-Lab device found")]
    NoDeviceFound,

    /// Indicates a profile lookup for an unsupported device generation.
    #[error("Unknown device generation: {0}")]
    UnknownGeneration(String),

    /// Indicates a failure reported by the underlying BLE transport.
    /// Carried through unmodified; this crate never reinterprets it.
    #[error("Transport error: {0}")]
    Transport(String),
}
