/// Driver seam — the radio and sensor access the platform layer provides.
///
/// The core never touches hardware. Platform binaries (ESP32 firmware, a
/// Linux daemon) implement these traits and hand the core fresh snapshots;
/// the core ships only mock implementations in its tests.
///
/// Scans fill a caller-owned snapshot and return `Result`, so "scan found
/// nothing" (`Ok` with an empty snapshot) and "scan could not run" (`Err`)
/// stay distinct outcomes all the way up to the reports.
use crate::scan::{BleSnapshot, ScanSnapshot};

/// Why a scan could not run. A scan that ran and found nothing is not an
/// error — it returns `Ok` with an empty snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// The radio is not initialized or is held by another function
    RadioUnavailable,
    /// The driver gave up waiting for the radio
    Timeout,
}

impl ScanError {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanError::RadioUnavailable => "radio unavailable",
            ScanError::Timeout => "scan timeout",
        }
    }
}

/// Wi-Fi scan access.
pub trait WifiScanner {
    /// Run a blocking scan, appending results to `out` in driver-reported
    /// order. `out` is cleared first. Results beyond the snapshot capacity
    /// are dropped by the driver.
    fn scan(&mut self, out: &mut ScanSnapshot) -> Result<(), ScanError>;
}

/// BLE advertisement scan access.
pub trait BleScanner {
    /// Listen for advertisements for `duration_s` seconds, appending
    /// deduplicated results to `out`. `out` is cleared first.
    fn scan(&mut self, duration_s: u8, out: &mut BleSnapshot) -> Result<(), ScanError>;
}

/// On-chip sensor and memory introspection.
pub trait ChipSensors {
    /// Die temperature in Celsius (not room air)
    fn temperature_c(&mut self) -> f32;
    /// Raw hall-effect sensor reading
    fn hall_raw(&mut self) -> i32;
    /// Free heap in bytes
    fn heap_free(&self) -> u32;
    /// Total heap in bytes
    fn heap_size(&self) -> u32;
}
