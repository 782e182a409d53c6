/// Report types handed to the presentation layer, plus display helpers.
///
/// Reports are plain values with `Serialize` derives; the presentation
/// layer renders them however it likes. `serialize_report` offers an
/// NDJSON encoding into a caller-provided buffer for hosts that speak
/// newline-delimited JSON. Uses `heapless` types throughout — no
/// allocation.
use core::fmt::Write;

use heapless::{String, Vec};
use serde::Serialize;

use crate::census::{ChannelHistogram, ChannelLoad, CrowdReport, RfEnergyReport};
use crate::classify::{DeviceCategory, VendorGuess};
use crate::scan::{AuthMode, MacString, NameString, OuiString, Severity};
use crate::temperature::TEMP_HISTORY_LEN;

/// Maximum length for formatted byte/uptime strings
pub type ShortString = String<16>;

/// Maximum size of a serialized JSON report
pub const MAX_REPORT_LEN: usize = 1024;

/// Chip temperature, hall sensor, and memory state — one pull.
#[derive(Debug, Serialize)]
pub struct EnvironmentReport {
    /// Die temperature (not room air)
    pub temp_c: f32,
    pub temp_f: f32,
    /// All-time bounds; `None` while still collecting the first sample
    pub temp_min_c: Option<f32>,
    pub temp_max_c: Option<f32>,
    /// History window, oldest first
    pub history: Vec<f32, TEMP_HISTORY_LEN>,
    /// Raw hall-effect reading
    pub hall_raw: i32,
    pub heap: HeapHealth,
}

/// Crowd-density survey over one Wi-Fi + BLE scan pair.
#[derive(Debug, Serialize)]
pub struct CrowdSurvey {
    pub wifi_count: usize,
    pub ble_count: usize,
    pub crowd: CrowdReport,
}

/// RF interference survey over one Wi-Fi snapshot.
#[derive(Debug, Serialize)]
pub struct RfSurvey {
    pub network_count: usize,
    pub energy: RfEnergyReport,
    pub channels: ChannelHistogram,
}

/// Detail view for one access point out of a snapshot.
#[derive(Debug, Serialize)]
pub struct ApDetail {
    pub ssid: NameString,
    pub bssid: MacString,
    pub rssi: i8,
    pub channel: u8,
    pub auth: AuthMode,
    pub oui: OuiString,
    pub vendor: VendorGuess,
    pub load: ChannelLoad,
}

/// Detail view for one BLE advertiser.
#[derive(Debug, Serialize)]
pub struct BleDetail {
    /// Advertised name, empty if the device sent none
    pub name: NameString,
    pub addr: MacString,
    pub rssi: i8,
    pub category: DeviceCategory,
    /// Advertised TX power; `None` means the distance estimate used the
    /// default 1 m reference
    pub tx_power_dbm: Option<i8>,
    /// Log-distance estimate, clamped to 0.1–20 m — very approximate
    pub distance_m: f32,
    /// Leading manufacturer-data bytes, if any were advertised
    pub manufacturer_data: Vec<u8, 16>,
}

/// Heap state classified for display.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HeapHealth {
    pub free: u32,
    pub total: u32,
    pub label: &'static str,
    pub severity: Severity,
}

/// Classify heap pressure from the free/total ratio.
pub fn heap_health(free: u32, total: u32) -> HeapHealth {
    let ratio = if total > 0 {
        free as f32 / total as f32
    } else {
        0.0
    };

    let (label, severity) = if ratio < 0.3 {
        ("low", Severity::Bad)
    } else if ratio < 0.6 {
        ("moderate", Severity::Warn)
    } else {
        ("healthy", Severity::Ok)
    };

    HeapHealth {
        free,
        total,
        label,
        severity,
    }
}

/// Format a byte count as "N.NN B" / "KB" / "MB".
pub fn format_bytes(bytes: u32, buf: &mut ShortString) {
    const UNITS: [&str; 3] = ["B", "KB", "MB"];
    let mut value = bytes as f32;
    let mut order = 0;
    while value >= 1024.0 && order < UNITS.len() - 1 {
        value /= 1024.0;
        order += 1;
    }
    let _ = write!(buf, "{value:.2} {}", UNITS[order]);
}

/// Format a millisecond uptime as "D d HH:MM:SS".
pub fn format_uptime(ms: u64, buf: &mut ShortString) {
    let seconds = ms / 1000;
    let s = seconds % 60;
    let minutes = (seconds / 60) % 60;
    let hours = (seconds / 3600) % 24;
    let days = seconds / 86400;
    let _ = write!(buf, "{days} d {hours:02}:{minutes:02}:{s:02}");
}

/// Serialize a report to JSON bytes with a trailing newline (NDJSON).
/// Returns the number of bytes written, or `None` if the buffer is too
/// small or the value failed to serialize.
pub fn serialize_report<T: Serialize>(report: &T, buf: &mut [u8]) -> Option<usize> {
    match serde_json_core::to_slice(report, buf) {
        Ok(len) => {
            if len < buf.len() {
                buf[len] = b'\n';
                Some(len + 1)
            } else {
                Some(len)
            }
        }
        Err(_) => None,
    }
}
