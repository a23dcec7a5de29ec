//! # Waveform Frame Codec
//!
//! Packs a channel's waveform triple into the 3-byte waveform frame. Two
//! serializations of the same logical fields exist and both are part of the
//! protocol: the single-channel form is little-endian, the synchronized form
//! prepends a 4-bit zero prefix and is big-endian. Which one goes on the wire
//! depends on which API the caller invokes.

use crate::constants::{DGLAB_WAVE_Y_SHIFT, DGLAB_WAVE_Z_SHIFT};

/// One channel's waveform parameters: 5-bit x, 10-bit y, 5-bit z.
///
/// No domain validation is performed anywhere in this codec. A field outside
/// its bit width overflows into the adjacent field and silently corrupts the
/// frame; callers must keep values within `x: 0-31`, `y: 0-1023`, `z: 0-31`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Waveform {
    pub x: u8,
    pub y: u16,
    pub z: u8,
}

impl Waveform {
    pub fn new(x: u8, y: u16, z: u8) -> Self {
        Waveform { x, y, z }
    }
}

/// Explicit channel role, passed alongside the parameters to select the
/// target waveform endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    A,
    B,
}

fn pack(wave: &Waveform) -> u32 {
    (u32::from(wave.z) << DGLAB_WAVE_Z_SHIFT)
        + (u32::from(wave.y) << DGLAB_WAVE_Y_SHIFT)
        + u32::from(wave.x)
}

/// Encodes one channel's waveform as the single-channel (little-endian)
/// frame: `(z << 15) + (y << 5) + x`, low 3 bytes.
pub fn encode_channel(wave: &Waveform) -> [u8; 3] {
    let bytes = pack(wave).to_le_bytes();
    [bytes[0], bytes[1], bytes[2]]
}

/// Encodes both channels' waveforms in the synchronized (big-endian) form:
/// a 4-bit zero prefix followed by z, y, x packed high-to-low into 24 bits.
///
/// The two frames are independent; writing them to the device is two separate
/// operations with no transactional guarantee (see the device handle).
pub fn encode_synchronized(channel_a: &Waveform, channel_b: &Waveform) -> ([u8; 3], [u8; 3]) {
    (encode_sync_frame(channel_a), encode_sync_frame(channel_b))
}

fn encode_sync_frame(wave: &Waveform) -> [u8; 3] {
    let bytes = pack(wave).to_be_bytes();
    [bytes[1], bytes[2], bytes[3]]
}
