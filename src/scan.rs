/// Raw scan record types shared by all analysis components.
///
/// Everything here is ephemeral: records are produced fresh per scan by the
/// platform driver, handed to the scorers by reference, and dropped. Nothing
/// retains a record past the call that received it.
use core::fmt::Write;

use heapless::{String, Vec};
use serde::Serialize;

/// Maximum length for MAC address strings ("AA:BB:CC:DD:EE:FF")
pub type MacString = String<18>;

/// Maximum length for SSID / device name strings
pub type NameString = String<33>;

/// Maximum length for an OUI prefix string ("AA:BB:CC")
pub type OuiString = String<9>;

/// Maximum access points kept from a single Wi-Fi scan
pub const MAX_APS: usize = 32;

/// Maximum advertisements kept from a single BLE scan
pub const MAX_BLE_DEVICES: usize = 32;

/// Maximum manufacturer-specific bytes kept per BLE advertisement
/// (31 = legacy advertising PDU payload limit)
pub const MAX_MFR_DATA: usize = 31;

/// One Wi-Fi scan result set, in driver-reported (arrival) order.
pub type ScanSnapshot = Vec<AccessPointRecord, MAX_APS>;

/// One BLE scan result set, in driver-reported order.
pub type BleSnapshot = Vec<BleAdvertisement, MAX_BLE_DEVICES>;

/// Wi-Fi authentication mode reported by the scan driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AuthMode {
    Open,
    Wep,
    WpaPsk,
    Wpa2Psk,
    WpaWpa2Psk,
    Wpa2Enterprise,
    Wpa3Psk,
    Wpa2Wpa3Psk,
    Unknown,
}

impl AuthMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMode::Open => "OPEN",
            AuthMode::Wep => "WEP",
            AuthMode::WpaPsk => "WPA-PSK",
            AuthMode::Wpa2Psk => "WPA2-PSK",
            AuthMode::WpaWpa2Psk => "WPA/WPA2-PSK",
            AuthMode::Wpa2Enterprise => "WPA2-ENT",
            AuthMode::Wpa3Psk => "WPA3-PSK",
            AuthMode::Wpa2Wpa3Psk => "WPA2/WPA3-PSK",
            AuthMode::Unknown => "UNKNOWN",
        }
    }
}

/// One access point seen in a Wi-Fi scan.
#[derive(Debug, Clone)]
pub struct AccessPointRecord {
    /// Advertised network name. Empty for hidden networks — display
    /// substitution is the presentation layer's job.
    pub ssid: NameString,
    pub bssid: [u8; 6],
    /// Received signal strength in dBm (typically negative)
    pub rssi: i8,
    /// 2.4 GHz channel 1–14. Drivers report 0 for "unknown".
    pub channel: u8,
    pub auth: AuthMode,
}

/// One BLE advertisement seen in a scan.
#[derive(Debug, Clone)]
pub struct BleAdvertisement {
    pub addr: [u8; 6],
    /// Advertised local name. Empty if the advertiser sent none.
    pub name: NameString,
    /// Received signal strength in dBm
    pub rssi: i8,
    /// Advertised transmit power in dBm. `None` means not advertised —
    /// callers that want a ranging estimate opt into a fallback reference
    /// explicitly (see [`crate::proximity::DEFAULT_TX_POWER_DBM`]).
    pub tx_power: Option<i8>,
    /// Raw manufacturer-specific data, may be empty
    pub manufacturer_data: Vec<u8, MAX_MFR_DATA>,
}

/// Three-level classification attached to a score for display purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Ok,
    Warn,
    Bad,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Ok => "ok",
            Severity::Warn => "warn",
            Severity::Bad => "bad",
        }
    }
}

/// Format a 6-byte MAC address into "AA:BB:CC:DD:EE:FF"
pub fn format_mac(mac: &[u8; 6], buf: &mut MacString) {
    let _ = write!(
        buf,
        "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
        mac[0], mac[1], mac[2], mac[3], mac[4], mac[5]
    );
}

/// Format the vendor-assigned OUI prefix of a MAC address into "AA:BB:CC"
pub fn oui_prefix(mac: &[u8; 6], buf: &mut OuiString) {
    let _ = write!(buf, "{:02X}:{:02X}:{:02X}", mac[0], mac[1], mac[2]);
}
