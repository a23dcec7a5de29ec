//! # DG-Lab Device Handle
//!
//! This module provides the DgDevice struct, the main entry point for talking
//! to one Coyote device: it composes the power and waveform codecs with a
//! caller-supplied transport and the active generation profile.
//!
//! The handle is generic over [`BleTransport`] so the same code path runs
//! against real hardware or the mock transport in tests.

use crate::ble::discovery::{scan, select_target, DiscoveryCandidate};
use crate::ble::transport::BleTransport;
use crate::error::DgError;
use crate::profile::{profile_for, DeviceProfile, Generation};
use crate::protocol::power::{decode_power, encode_power};
use crate::protocol::waveform::{encode_channel, encode_synchronized, Channel, Waveform};
use log::debug;
use std::time::Duration;

/// Handle to one Coyote device over a BLE transport.
pub struct DgDevice<T: BleTransport> {
    transport: T,
    profile: &'static DeviceProfile,
}

impl<T: BleTransport> DgDevice<T> {
    /// Creates a handle for the given device generation.
    pub fn new(transport: T, generation: Generation) -> Self {
        DgDevice {
            transport,
            profile: profile_for(generation),
        }
    }

    /// The active device profile.
    pub fn profile(&self) -> &'static DeviceProfile {
        self.profile
    }

    /// Scans for the given window and reduces the candidates to one target
    /// address using the default selection policy.
    pub async fn scan_and_select(&mut self, timeout: Duration) -> Result<String, DgError> {
        let candidates = self.scan(timeout).await?;
        select_target(&candidates)
    }

    /// Scans for devices matching the active profile's advertised name.
    pub async fn scan(&mut self, timeout: Duration) -> Result<Vec<DiscoveryCandidate>, DgError> {
        scan(&mut self.transport, self.profile, timeout).await
    }

    /// Connects to the peripheral at `address`.
    pub async fn connect(&mut self, address: &str) -> Result<(), DgError> {
        self.transport.connect(address).await
    }

    /// Tears down the transport connection.
    pub async fn disconnect(&mut self) -> Result<(), DgError> {
        self.transport.disconnect().await
    }

    /// Reads the battery endpoint and returns its raw bytes undecoded.
    /// Interpretation, if any, is up to the caller.
    pub async fn read_battery(&mut self) -> Result<Vec<u8>, DgError> {
        self.transport.read(self.profile.battery_endpoint).await
    }

    /// Reads the power endpoint and decodes the two channel intensities as
    /// reported by the device.
    pub async fn get_strength(&mut self) -> Result<(f64, f64), DgError> {
        let raw = self.transport.read(self.profile.power_endpoint).await?;
        let frame: [u8; 3] = raw
            .as_slice()
            .try_into()
            .map_err(|_| DgError::Transport(format!("power frame length {} != 3", raw.len())))?;
        Ok(decode_power(&frame))
    }

    /// Encodes and writes both channel intensities, returning the clamped
    /// values actually sent.
    pub async fn set_strength(
        &mut self,
        channel_a: Option<i32>,
        channel_b: Option<i32>,
    ) -> Result<(u16, u16), DgError> {
        let encoded = encode_power(channel_a, channel_b);
        debug!("Sending power frame {}", hex::encode(encoded.frame));
        self.transport
            .write(self.profile.power_endpoint, &encoded.frame)
            .await?;
        Ok((encoded.channel_a, encoded.channel_b))
    }

    /// Writes one channel's waveform in the single-channel frame form.
    pub async fn set_wave(&mut self, channel: Channel, wave: &Waveform) -> Result<(), DgError> {
        let frame = encode_channel(wave);
        let endpoint = self.wave_endpoint(channel);
        debug!("Sending wave frame {} to channel {channel:?}", hex::encode(frame));
        self.transport.write(endpoint, &frame).await
    }

    /// Writes both channels' waveforms in the synchronized frame form, as
    /// two sequential writes: channel A first, then channel B.
    ///
    /// The writes are not atomic. If the second write fails, channel A's
    /// waveform has already changed on the device and is not reverted; the
    /// error surfaced is whichever write failed. Callers that need atomicity
    /// must layer a compensating write above this handle.
    pub async fn set_wave_sync(
        &mut self,
        channel_a: &Waveform,
        channel_b: &Waveform,
    ) -> Result<(), DgError> {
        let (frame_a, frame_b) = encode_synchronized(channel_a, channel_b);
        self.transport
            .write(self.profile.wave_a_endpoint, &frame_a)
            .await?;
        self.transport
            .write(self.profile.wave_b_endpoint, &frame_b)
            .await
    }

    fn wave_endpoint(&self, channel: Channel) -> &'static str {
        match channel {
            Channel::A => self.profile.wave_a_endpoint,
            Channel::B => self.profile.wave_b_endpoint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ble::transport_mock::MockTransport;

    #[tokio::test]
    async fn test_set_strength_writes_power_endpoint() {
        let mock = MockTransport::new();
        let mut device = DgDevice::new(mock.clone(), Generation::V2);

        let used = device.set_strength(Some(1), Some(2)).await.unwrap();
        assert_eq!(used, (1, 2));

        let writes = mock.written();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].0, device.profile().power_endpoint);
        assert_eq!(writes[0].1, 22550u32.to_le_bytes()[..3]);
    }

    #[tokio::test]
    async fn test_get_strength_decodes_frame() {
        let mock = MockTransport::new();
        let combined: u32 = (22 << 11) + 11;
        let bytes = combined.to_le_bytes();
        let mut device = DgDevice::new(mock.clone(), Generation::V2);
        mock.set_read_value(
            device.profile().power_endpoint,
            &[bytes[0], bytes[1], bytes[2]],
        );

        let (a, b) = device.get_strength().await.unwrap();
        assert_eq!(a, 2.0);
        assert_eq!(b, 1.0);
    }

    #[tokio::test]
    async fn test_get_strength_rejects_short_frame() {
        let mock = MockTransport::new();
        let mut device = DgDevice::new(mock.clone(), Generation::V2);
        mock.set_read_value(device.profile().power_endpoint, &[0x01, 0x02]);

        let result = device.get_strength().await;
        assert!(matches!(result, Err(DgError::Transport(_))));
    }

    #[tokio::test]
    async fn test_read_battery_is_passthrough() {
        let mock = MockTransport::new();
        let mut device = DgDevice::new(mock.clone(), Generation::V2);
        mock.set_read_value(device.profile().battery_endpoint, &[0x5A]);

        assert_eq!(device.read_battery().await.unwrap(), vec![0x5A]);
    }
}
