/// Radio census scoring — how busy is the air around the device.
///
/// Two heuristic scores over one Wi-Fi/BLE scan snapshot: a crowd score from
/// raw radio counts and an RF-energy score from beacon signal strengths,
/// plus a per-channel congestion histogram. Everything here is a pure
/// function of its inputs; nothing is retained between calls. The scores
/// are proxies — no payloads are decoded and no true noise floor is
/// measured.
use serde::Serialize;

use crate::scan::{AccessPointRecord, Severity};

/// Highest 2.4 GHz channel tracked by the histogram
pub const MAX_CHANNEL: u8 = 14;

/// Per-BLE-device weight in the crowd score (an advertisement says less
/// about occupancy than a beaconing AP)
pub const BLE_CROWD_WEIGHT: f32 = 0.5;

/// Crowd classification derived from raw radio counts.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CrowdReport {
    pub score: f32,
    pub label: &'static str,
    pub severity: Severity,
}

/// RF-energy classification derived from beacon signal strengths.
///
/// An empty snapshot is a distinguished state, not a zero score — "found
/// no networks" must not read as a measured "low".
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RfEnergyReport {
    NoNetworks,
    Measured {
        score: f32,
        label: &'static str,
        severity: Severity,
    },
}

/// How contested a single channel is within one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChannelLoad {
    /// APs sharing the channel
    pub count: u16,
    pub label: &'static str,
    pub severity: Severity,
}

/// AP count per channel 1..=[`MAX_CHANNEL`] within one snapshot.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChannelHistogram {
    counts: [u16; MAX_CHANNEL as usize + 1],
}

impl ChannelHistogram {
    /// Count of APs on the given channel. Out-of-range channels report 0,
    /// symmetrical with ingest ignoring them.
    pub fn count(&self, channel: u8) -> u16 {
        if (1..=MAX_CHANNEL).contains(&channel) {
            self.counts[channel as usize]
        } else {
            0
        }
    }

    /// `(channel, count)` pairs for channels 1..=[`MAX_CHANNEL`].
    pub fn iter(&self) -> impl Iterator<Item = (u8, u16)> + '_ {
        (1..=MAX_CHANNEL).map(move |ch| (ch, self.counts[ch as usize]))
    }

    /// Total APs counted (excludes channel-0/out-of-range records).
    pub fn total(&self) -> u16 {
        self.counts.iter().sum()
    }
}

/// Score crowd density from raw radio counts.
///
/// `score = wifi_count * 1.0 + ble_count * 0.5`
pub fn classify_crowd(wifi_count: usize, ble_count: usize) -> CrowdReport {
    let score = wifi_count as f32 + ble_count as f32 * BLE_CROWD_WEIGHT;

    let label = if score < 3.0 {
        "very quiet"
    } else if score < 8.0 {
        "light activity"
    } else if score < 16.0 {
        "moderate crowd"
    } else if score < 30.0 {
        "busy environment"
    } else {
        "highly crowded / RF noisy"
    };

    let severity = if score < 16.0 {
        Severity::Ok
    } else if score < 30.0 {
        Severity::Warn
    } else {
        Severity::Bad
    };

    CrowdReport {
        score,
        label,
        severity,
    }
}

/// Score RF energy from beacon signal strengths.
///
/// `score = Σ max(0, 100 + rssi)` over the snapshot — stronger signals
/// contribute more, signals at or below the -100 dBm floor contribute
/// nothing (clamped, not a penalty).
pub fn classify_rf_energy(snapshot: &[AccessPointRecord]) -> RfEnergyReport {
    if snapshot.is_empty() {
        return RfEnergyReport::NoNetworks;
    }

    let score: f32 = snapshot
        .iter()
        .map(|ap| (100 + ap.rssi as i32).max(0) as f32)
        .sum();

    let label = if score < 50.0 {
        "low"
    } else if score < 150.0 {
        "moderate"
    } else if score < 300.0 {
        "high"
    } else {
        "very high / noisy"
    };

    let severity = if score < 150.0 {
        Severity::Ok
    } else if score < 300.0 {
        Severity::Warn
    } else {
        Severity::Bad
    };

    RfEnergyReport::Measured {
        score,
        label,
        severity,
    }
}

/// Count APs per channel within one snapshot.
///
/// Records with a channel outside 1..=[`MAX_CHANNEL`] are silently ignored:
/// drivers commonly report channel 0 for "unknown" and it must not corrupt
/// the histogram.
pub fn channel_histogram(snapshot: &[AccessPointRecord]) -> ChannelHistogram {
    let mut histogram = ChannelHistogram::default();
    for ap in snapshot {
        if (1..=MAX_CHANNEL).contains(&ap.channel) {
            histogram.counts[ap.channel as usize] += 1;
        }
    }
    histogram
}

/// Classify how contested one channel is: count the APs sharing it.
pub fn channel_load(snapshot: &[AccessPointRecord], channel: u8) -> ChannelLoad {
    let count = snapshot.iter().filter(|ap| ap.channel == channel).count() as u16;

    let (label, severity) = if count <= 2 {
        ("light (few neighbors)", Severity::Ok)
    } else if count <= 5 {
        ("moderate (shared channel)", Severity::Warn)
    } else {
        ("heavy (crowded channel)", Severity::Bad)
    };

    ChannelLoad {
        count,
        label,
        severity,
    }
}

/// Channel load for the AP at a snapshot index.
///
/// `None` for an out-of-range index — a normal outcome (the caller followed
/// a stale link into a fresh scan), never a fault.
pub fn channel_load_for_ap(snapshot: &[AccessPointRecord], idx: usize) -> Option<ChannelLoad> {
    let ap = snapshot.get(idx)?;
    Some(channel_load(snapshot, ap.channel))
}
