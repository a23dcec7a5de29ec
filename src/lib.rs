//! # dglab-rs - A Rust Crate for DG-Lab Coyote Device Control
//!
//! The dglab-rs crate provides a Rust-based implementation of the control
//! protocol for the DG-Lab "Coyote" two-channel electrical-stimulation device,
//! which talks to the device's GATT characteristics over a BLE link.
//!
//! ## Features
//!
//! - Static profiles for the two supported device generations (Coyote 2.0 and 3.0)
//! - Scan for advertised devices and select a target from the candidates
//! - Encode and decode the 3-byte power frame (two 11-bit channel intensities)
//! - Encode waveform frames, per channel or synchronized across both channels
//! - Read the raw battery status endpoint
//! - Support for logging and error handling
//!
//! The BLE link itself is an external collaborator behind the [`BleTransport`]
//! trait: this crate issues scans, reads and writes and never manages the
//! connection lifecycle beyond forwarding connect/disconnect calls.
//!
//! ## Usage
//!
//! To use the dglab-rs crate in your Rust project, add the following to your
//! Cargo.toml file:
//!
//! ```toml
//! [dependencies]
//! dglab-rs = "0.2.0"
//! ```
//!
//! Then, in your Rust code, you can import the necessary modules and functions:
//!
//! ```rust
//! use dglab_rs::{
//!     DgDevice, DgError, Generation, Channel, Waveform,
//!     encode_power, decode_power, init_logger,
//! };
//! ```

pub mod ble;
pub mod constants;
pub mod device;
pub mod error;
pub mod logging;
pub mod profile;
pub mod protocol;

pub use crate::error::DgError;
pub use crate::logging::{init_logger, log_info};

// Core device types
pub use ble::{Advertisement, BleTransport, DiscoveryCandidate, SelectionPolicy};
pub use device::DgDevice;
pub use profile::{profile_for, profile_for_tag, DeviceProfile, Generation};
pub use protocol::{
    decode_power, encode_channel, encode_power, encode_synchronized, Channel, EncodedPower,
    Waveform,
};

use std::time::Duration;

/// Scan for devices of the given generation over any transport.
///
/// # Arguments
/// * `transport` - BLE transport to scan with
/// * `generation` - Device generation whose advertised name is matched
/// * `timeout` - Scan window
///
/// # Returns
/// * `Ok(Vec<DiscoveryCandidate>)` - Matching devices, possibly empty
/// * `Err(DgError)` - Scanning failed at the transport level
pub async fn scan<T: BleTransport>(
    transport: &mut T,
    generation: Generation,
    timeout: Duration,
) -> Result<Vec<DiscoveryCandidate>, DgError> {
    ble::discovery::scan(transport, profile_for(generation), timeout).await
}

/// Select a single target address from scan candidates using the default
/// selection policy.
///
/// # Arguments
/// * `candidates` - Candidates returned by [`scan`]
///
/// # Returns
/// * `Ok(String)` - Address of the selected device
/// * `Err(DgError)` - No candidate was available
pub fn select_target(candidates: &[DiscoveryCandidate]) -> Result<String, DgError> {
    ble::discovery::select_target(candidates)
}
