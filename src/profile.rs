//! # Device Profile Registry
//!
//! Static descriptions of the supported Coyote device generations. Each
//! profile carries the advertised device name used during discovery and the
//! four GATT characteristic UUIDs this crate talks to: battery status, channel
//! power, and the two per-channel waveform endpoints.
//!
//! Profiles are immutable; they are built once at first access and looked up
//! by [`Generation`] for the lifetime of the process.

use crate::error::DgError;
use once_cell::sync::Lazy;
use std::str::FromStr;

/// Supported Coyote device generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Generation {
    /// Coyote 2.0 ("D-LAB ESTIM01")
    V2,
    /// Coyote 3.0 ("47L121000")
    V3,
}

impl FromStr for Generation {
    type Err = DgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "v2" | "2" | "coyote-v2" => Ok(Generation::V2),
            "v3" | "3" | "coyote-v3" => Ok(Generation::V3),
            other => Err(DgError::UnknownGeneration(other.to_string())),
        }
    }
}

/// Immutable description of one device generation: the advertised name
/// matched during discovery plus the transport endpoints used by the codecs.
///
/// Endpoint identifiers are opaque to this crate; they are handed verbatim to
/// the transport's read/write primitives.
#[derive(Debug, PartialEq, Eq)]
pub struct DeviceProfile {
    /// Exact, case-sensitive advertised device name.
    pub discovery_name: &'static str,
    /// Battery status endpoint (read).
    pub battery_endpoint: &'static str,
    /// Channel power endpoint (read/write).
    pub power_endpoint: &'static str,
    /// Channel A waveform endpoint (write).
    pub wave_a_endpoint: &'static str,
    /// Channel B waveform endpoint (write).
    pub wave_b_endpoint: &'static str,
}

static COYOTE_V2: Lazy<DeviceProfile> = Lazy::new(|| DeviceProfile {
    discovery_name: "D-LAB ESTIM01",
    battery_endpoint: "955a1500-0fe2-f5aa-a094-84b8d4f3e8ad",
    power_endpoint: "955a1504-0fe2-f5aa-a094-84b8d4f3e8ad",
    wave_a_endpoint: "955a1505-0fe2-f5aa-a094-84b8d4f3e8ad",
    wave_b_endpoint: "955a1506-0fe2-f5aa-a094-84b8d4f3e8ad",
});

static COYOTE_V3: Lazy<DeviceProfile> = Lazy::new(|| DeviceProfile {
    discovery_name: "47L121000",
    battery_endpoint: "00001500-0000-1000-8000-00805f9b34fb",
    power_endpoint: "0000150a-0000-1000-8000-00805f9b34fb",
    wave_a_endpoint: "0000150b-0000-1000-8000-00805f9b34fb",
    wave_b_endpoint: "0000150c-0000-1000-8000-00805f9b34fb",
});

/// Returns the static profile for the given device generation.
pub fn profile_for(generation: Generation) -> &'static DeviceProfile {
    match generation {
        Generation::V2 => &COYOTE_V2,
        Generation::V3 => &COYOTE_V3,
    }
}

/// Resolves a textual generation tag and returns its profile.
///
/// Fails with [`DgError::UnknownGeneration`] for unsupported tags.
pub fn profile_for_tag(tag: &str) -> Result<&'static DeviceProfile, DgError> {
    Ok(profile_for(tag.parse()?))
}
