//! # BLE Transport Seam
//!
//! This module defines the trait boundary between the protocol core and the
//! actual BLE stack. Connection establishment, characteristic subscription and
//! link-level retry policy all live behind this trait; the core only issues
//! scans, reads and writes and propagates any failure unmodified.

use crate::error::DgError;
use std::time::Duration;

/// A single radio advertisement as observed during a scan window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advertisement {
    /// Peripheral address, opaque to this crate.
    pub address: String,
    /// Advertised local name, if the peripheral broadcast one.
    pub local_name: Option<String>,
    /// Received signal strength indicator in dBm; values nearer 0 are
    /// stronger (closer) signals.
    pub rssi: i16,
}

/// Trait for the four transport primitives this crate relies on.
///
/// Implementations wrap a concrete BLE client. Every failure must surface as
/// [`DgError::Transport`]; the core performs no retries of its own.
#[async_trait::async_trait]
pub trait BleTransport: Send {
    /// Scans advertisements for the given window and returns everything seen.
    async fn discover(&mut self, timeout: Duration) -> Result<Vec<Advertisement>, DgError>;

    /// Connects to the peripheral at `address`.
    async fn connect(&mut self, address: &str) -> Result<(), DgError>;

    /// Tears down the connection, if any.
    async fn disconnect(&mut self) -> Result<(), DgError>;

    /// Reads the current value of a characteristic endpoint.
    async fn read(&mut self, endpoint: &str) -> Result<Vec<u8>, DgError>;

    /// Writes a payload to a characteristic endpoint.
    async fn write(&mut self, endpoint: &str, payload: &[u8]) -> Result<(), DgError>;
}
