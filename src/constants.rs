//! DG-Lab Protocol Constants
//!
//! This module defines constants used in the Coyote control protocol,
//! based on the observed behavior of the official device firmware.

/// Length in bytes of every power and waveform frame
pub const DGLAB_FRAME_LENGTH: usize = 3;

/// Maximum accepted channel intensity; anything above clamps to zero
pub const DGLAB_STRENGTH_MAX: u16 = 2047;

/// Scale factor between physical intensity and on-wire protocol units
pub const DGLAB_STRENGTH_SCALE: u32 = 11;

/// Bit width of each strength field in the power frame
pub const DGLAB_STRENGTH_BITS: u32 = 11;

/// Mask for one strength field
pub const DGLAB_STRENGTH_MASK: u32 = 0x7FF;

/// Waveform X field width (bits)
pub const DGLAB_WAVE_X_BITS: u32 = 5;

/// Waveform Y field width (bits)
pub const DGLAB_WAVE_Y_BITS: u32 = 10;

/// Waveform Z field width (bits)
pub const DGLAB_WAVE_Z_BITS: u32 = 5;

/// Shift of the Y field within a packed waveform value
pub const DGLAB_WAVE_Y_SHIFT: u32 = 5;

/// Shift of the Z field within a packed waveform value
pub const DGLAB_WAVE_Z_SHIFT: u32 = 15;

/// Zero-prefix width in the synchronized (big-endian) waveform frame
pub const DGLAB_WAVE_SYNC_PREFIX_BITS: u32 = 4;

/// Maximum waveform X value that fits its field without corrupting neighbors
pub const DGLAB_WAVE_X_MAX: u8 = 31;

/// Maximum waveform Y value that fits its field without corrupting neighbors
pub const DGLAB_WAVE_Y_MAX: u16 = 1023;

/// Maximum waveform Z value that fits its field without corrupting neighbors
pub const DGLAB_WAVE_Z_MAX: u8 = 31;
