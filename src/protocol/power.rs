//! # Power Frame Codec
//!
//! Packs the two channel intensities into the 3-byte power frame and unpacks
//! the battery-power status frame back into physical readings.
//!
//! On the wire an intensity is carried as "protocol units": the physical
//! value multiplied by 11, packed into an 11-bit field. The two fields sit
//! adjacent in one little-endian 3-byte value, channel A in the upper field.

use crate::constants::{DGLAB_STRENGTH_BITS, DGLAB_STRENGTH_MASK, DGLAB_STRENGTH_MAX, DGLAB_STRENGTH_SCALE};

/// Result of encoding a power frame: the wire bytes plus the intensities
/// actually used after clamping, so callers can observe what was sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPower {
    /// The 3-byte little-endian power frame.
    pub frame: [u8; 3],
    /// Channel A intensity after clamping.
    pub channel_a: u16,
    /// Channel B intensity after clamping.
    pub channel_b: u16,
}

/// Clamp-to-zero: absent, negative or above-maximum intensities become 0.
/// Deliberately not clamped to the boundary; this mirrors the device's
/// reference behavior.
fn clamp_strength(value: Option<i32>) -> u16 {
    match value {
        Some(v) if (0..=i32::from(DGLAB_STRENGTH_MAX)).contains(&v) => v as u16,
        _ => 0,
    }
}

/// Encodes the two channel intensities into a power frame.
///
/// Each intensity is clamped to zero when absent or outside `[0, 2047]`,
/// scaled to protocol units, and packed as `(unitsA << 11) + unitsB` in
/// little-endian byte order. Pure function: the clamped values are returned
/// alongside the frame, never written back to the caller.
pub fn encode_power(channel_a: Option<i32>, channel_b: Option<i32>) -> EncodedPower {
    let a = clamp_strength(channel_a);
    let b = clamp_strength(channel_b);
    let units_a = u32::from(a) * DGLAB_STRENGTH_SCALE;
    let units_b = u32::from(b) * DGLAB_STRENGTH_SCALE;
    // Units above 11 bits spill into the neighboring field; the frame keeps
    // the low 24 bits. Exact only while units fit their field (intensity
    // 0..=186).
    let combined = (units_a << DGLAB_STRENGTH_BITS).wrapping_add(units_b);
    let bytes = combined.to_le_bytes();
    EncodedPower {
        frame: [bytes[0], bytes[1], bytes[2]],
        channel_a: a,
        channel_b: b,
    }
}

/// Decodes a 3-byte power status frame into the two physical readings.
///
/// The frame is read little-endian (equivalently: bytes reversed, then
/// interpreted as a big-endian bit string); channel A occupies the 11 bits
/// above the low 11 channel B bits, and each field is divided by 11 to
/// recover the physical value. The topmost 2 bits are ignored.
pub fn decode_power(frame: &[u8; 3]) -> (f64, f64) {
    let value = u32::from_le_bytes([frame[0], frame[1], frame[2], 0]);
    let units_a = (value >> DGLAB_STRENGTH_BITS) & DGLAB_STRENGTH_MASK;
    let units_b = value & DGLAB_STRENGTH_MASK;
    (
        f64::from(units_a) / f64::from(DGLAB_STRENGTH_SCALE),
        f64::from(units_b) / f64::from(DGLAB_STRENGTH_SCALE),
    )
}
