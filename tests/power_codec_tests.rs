//! Unit tests for the power frame codec: clamping, bit packing, and the
//! encode/decode round trip.

use dglab_rs::{decode_power, encode_power};
use proptest::prelude::*;

/// Tests that in-domain intensities are packed as adjacent 11-bit unit fields.
#[test]
fn test_encode_packs_unit_fields() {
    let encoded = encode_power(Some(3), Some(7));
    // units: 33 and 77, combined (33 << 11) + 77
    let combined: u32 = (33 << 11) + 77;
    assert_eq!(encoded.frame, combined.to_le_bytes()[..3]);
    assert_eq!((encoded.channel_a, encoded.channel_b), (3, 7));
}

/// Tests that out-of-domain intensities clamp to zero, not to the boundary.
#[test]
fn test_clamp_to_zero() {
    let encoded = encode_power(Some(-5), Some(3000));
    assert_eq!(encoded.frame, encode_power(Some(0), Some(0)).frame);
    assert_eq!((encoded.channel_a, encoded.channel_b), (0, 0));
}

/// Tests that an absent intensity is treated as zero.
#[test]
fn test_absent_is_zero() {
    let encoded = encode_power(None, None);
    assert_eq!(encoded.frame, [0, 0, 0]);
}

/// Tests that the boundary value 2047 is accepted, not clamped.
#[test]
fn test_boundary_value_accepted() {
    let encoded = encode_power(Some(2047), Some(0));
    assert_eq!(encoded.channel_a, 2047);
}

/// Tests that 2048 is out of domain and clamps to zero.
#[test]
fn test_above_boundary_clamps() {
    let encoded = encode_power(Some(2048), Some(0));
    assert_eq!(encoded.channel_a, 0);
}

/// Tests decoding against a hand-built frame: bytes are read little-endian,
/// channel A in the upper 11-bit field, each field divided by 11.
#[test]
fn test_decode_known_frame() {
    let combined: u32 = (55 << 11) + 22; // 5.0 and 2.0
    let bytes = combined.to_le_bytes();
    let (a, b) = decode_power(&[bytes[0], bytes[1], bytes[2]]);
    assert_eq!((a, b), (5.0, 2.0));
}

/// Tests that the topmost 2 bits of the frame are ignored on decode.
#[test]
fn test_decode_ignores_top_bits() {
    let combined: u32 = (11 << 11) + 11;
    let bytes = combined.to_le_bytes();
    let clean = decode_power(&[bytes[0], bytes[1], bytes[2]]);
    let dirty = decode_power(&[bytes[0], bytes[1], bytes[2] | 0xC0]);
    assert_eq!(clean, dirty);
}

/// Tests that a non-multiple of 11 in a unit field decodes to a fractional
/// physical value.
#[test]
fn test_decode_fractional_units() {
    let combined: u32 = 5; // channel B units = 5
    let bytes = combined.to_le_bytes();
    let (_, b) = decode_power(&[bytes[0], bytes[1], bytes[2]]);
    assert!((b - 5.0 / 11.0).abs() < 1e-12);
}

proptest! {
    /// Round trip is exact while the scaled units fit their 11-bit field,
    /// i.e. for intensities 0..=186.
    #[test]
    fn prop_round_trip_exact(a in 0i32..=186, b in 0i32..=186) {
        let encoded = encode_power(Some(a), Some(b));
        let (da, db) = decode_power(&encoded.frame);
        prop_assert_eq!(da, f64::from(a));
        prop_assert_eq!(db, f64::from(b));
    }

    /// Clamping never reports values outside the intensity domain.
    #[test]
    fn prop_used_values_in_domain(a in i32::MIN..=i32::MAX, b in i32::MIN..=i32::MAX) {
        let encoded = encode_power(Some(a), Some(b));
        prop_assert!(encoded.channel_a <= 2047);
        prop_assert!(encoded.channel_b <= 2047);
    }
}
