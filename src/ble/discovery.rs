//! # Device Discovery
//!
//! Scans radio advertisements, filters them against the active profile's
//! advertised name, and reduces the surviving candidates to a single target
//! address.
//!
//! The reference selection policy sorts candidates ascending by RSSI and takes
//! the first, which picks the *weakest* signal when several devices are in
//! range. That ordering is preserved here as the default so existing behavior
//! is reproducible; [`SelectionPolicy::StrongestSignal`] flips the sort for
//! callers that actually want the nearest device.

use crate::ble::transport::BleTransport;
use crate::error::DgError;
use crate::profile::DeviceProfile;
use log::{error, info, warn};
use std::time::Duration;

/// One device that survived the advertisement filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryCandidate {
    pub address: String,
    /// Received signal strength in dBm; nearer 0 means closer.
    pub rssi: i16,
}

/// Sort direction used when several candidates are found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPolicy {
    /// Ascending by RSSI, first element wins: the reference behavior, which
    /// selects the weakest signal among the candidates.
    #[default]
    WeakestSignal,
    /// Descending by RSSI: selects the strongest (closest) signal.
    StrongestSignal,
}

/// Scans for the given window and returns every advertisement whose local
/// name exactly matches the profile's discovery name.
///
/// An empty result is not an error; it is logged and returned for the caller
/// to surface.
pub async fn scan<T: BleTransport>(
    transport: &mut T,
    profile: &DeviceProfile,
    timeout: Duration,
) -> Result<Vec<DiscoveryCandidate>, DgError> {
    let advertisements = transport.discover(timeout).await?;
    let mut candidates = Vec::new();
    for adv in advertisements {
        if adv.local_name.as_deref() == Some(profile.discovery_name) {
            info!("Found {} at {} ({} dBm)", profile.discovery_name, adv.address, adv.rssi);
            candidates.push(DiscoveryCandidate {
                address: adv.address,
                rssi: adv.rssi,
            });
        }
    }
    if candidates.is_empty() {
        error!("No {} found", profile.discovery_name);
    }
    Ok(candidates)
}

/// Reduces a candidate list to one target address using the default
/// (reference) selection policy.
///
/// Fails with [`DgError::NoDeviceFound`] on an empty list. Multiple
/// candidates log a warning and selection proceeds regardless.
pub fn select_target(candidates: &[DiscoveryCandidate]) -> Result<String, DgError> {
    select_target_with_policy(candidates, SelectionPolicy::default())
}

/// Reduces a candidate list to one target address with an explicit policy.
pub fn select_target_with_policy(
    candidates: &[DiscoveryCandidate],
    policy: SelectionPolicy,
) -> Result<String, DgError> {
    if candidates.is_empty() {
        return Err(DgError::NoDeviceFound);
    }
    if candidates.len() > 1 {
        warn!("Multiple devices found ({}), selecting one", candidates.len());
    }
    let mut ranked: Vec<&DiscoveryCandidate> = candidates.iter().collect();
    match policy {
        SelectionPolicy::WeakestSignal => ranked.sort_by_key(|c| c.rssi),
        SelectionPolicy::StrongestSignal => ranked.sort_by_key(|c| std::cmp::Reverse(c.rssi)),
    }
    Ok(ranked[0].address.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(address: &str, rssi: i16) -> DiscoveryCandidate {
        DiscoveryCandidate {
            address: address.to_string(),
            rssi,
        }
    }

    #[test]
    fn test_select_single_candidate() {
        let candidates = vec![candidate("AA:BB", -50)];
        assert_eq!(select_target(&candidates).unwrap(), "AA:BB");
    }

    #[test]
    fn test_select_empty_fails() {
        let result = select_target(&[]);
        assert!(matches!(result, Err(DgError::NoDeviceFound)));
    }

    #[test]
    fn test_default_policy_picks_weakest_signal() {
        // Reference behavior: ascending RSSI sort, so the most negative
        // (weakest) candidate wins.
        let candidates = vec![candidate("A1", -40), candidate("A2", -80)];
        assert_eq!(select_target(&candidates).unwrap(), "A2");
    }

    #[test]
    fn test_strongest_signal_policy() {
        let candidates = vec![candidate("A1", -40), candidate("A2", -80)];
        let target =
            select_target_with_policy(&candidates, SelectionPolicy::StrongestSignal).unwrap();
        assert_eq!(target, "A1");
    }
}
