/// Heuristic name-based classification for BLE devices and routers.
///
/// Case-insensitive substring matching over the ordered keyword tables in
/// [`crate::defaults`]. These are guesses from advertised strings, not
/// fingerprints — the labels say so.
use core::fmt;

use heapless::Vec;
use serde::Serialize;

use crate::defaults::{DEVICE_NAME_CATEGORIES, ROUTER_VENDOR_KEYWORDS};
use crate::scan::OuiString;

/// Device category guessed from an advertised name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceCategory {
    PhoneIos,
    PhoneAndroid,
    Wearable,
    Audio,
    SmartHome,
    Unknown,
}

impl DeviceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceCategory::PhoneIos => "phone / iOS device",
            DeviceCategory::PhoneAndroid => "phone / Android device",
            DeviceCategory::Wearable => "watch / wearable",
            DeviceCategory::Audio => "earbuds / audio",
            DeviceCategory::SmartHome => "smart home / appliance",
            DeviceCategory::Unknown => "unknown category",
        }
    }
}

/// Router vendor guessed from an SSID, or the bare OUI prefix when no
/// keyword matched — the OUI is the only fallback signal and is carried
/// verbatim, never dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VendorGuess {
    Named(&'static str),
    UnknownOui(OuiString),
}

impl fmt::Display for VendorGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VendorGuess::Named(vendor) => write!(f, "{vendor} (SSID guess)"),
            VendorGuess::UnknownOui(oui) => write!(f, "Unknown (OUI {oui})"),
        }
    }
}

/// Lowercase the first 33 bytes of a name into a stack buffer.
/// ASCII-only fold, matching what advertised names and SSIDs contain.
fn lowercase<'a>(name: &str, buf: &'a mut Vec<u8, 33>) -> &'a str {
    buf.clear();
    for b in name.bytes().take(33) {
        let _ = buf.push(b.to_ascii_lowercase());
    }
    core::str::from_utf8(buf).unwrap_or("")
}

/// Guess a device category from its advertised name.
///
/// First matching table row wins, in declared order. An empty name never
/// matches; the caller substitutes a placeholder for display.
pub fn classify_device_by_name(name: &str) -> DeviceCategory {
    if name.is_empty() {
        return DeviceCategory::Unknown;
    }

    let mut buf = Vec::new();
    let name_lower = lowercase(name, &mut buf);

    for (keywords, category) in DEVICE_NAME_CATEGORIES {
        if keywords.iter().any(|kw| name_lower.contains(kw)) {
            return *category;
        }
    }

    DeviceCategory::Unknown
}

/// Guess a router vendor from its SSID, falling back to the OUI prefix.
///
/// `oui` is the formatted BSSID prefix (see [`crate::scan::oui_prefix`]).
pub fn guess_router_vendor(ssid: &str, oui: &OuiString) -> VendorGuess {
    let mut buf = Vec::new();
    let ssid_lower = lowercase(ssid, &mut buf);

    for (keywords, vendor) in ROUTER_VENDOR_KEYWORDS {
        if keywords.iter().any(|kw| ssid_lower.contains(kw)) {
            return VendorGuess::Named(vendor);
        }
    }

    VendorGuess::UnknownOui(oui.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oui(s: &str) -> OuiString {
        OuiString::try_from(s).unwrap()
    }

    // ── device category ─────────────────────────────────────────────

    #[test]
    fn iphone_name_is_ios_phone() {
        assert_eq!(
            classify_device_by_name("My iPhone 12"),
            DeviceCategory::PhoneIos
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify_device_by_name("IPAD"), DeviceCategory::PhoneIos);
        assert_eq!(
            classify_device_by_name("GARMIN Forerunner"),
            DeviceCategory::Wearable
        );
    }

    #[test]
    fn empty_name_never_matches() {
        assert_eq!(classify_device_by_name(""), DeviceCategory::Unknown);
    }

    #[test]
    fn unrecognized_name_is_unknown() {
        assert_eq!(
            classify_device_by_name("XK-3000 beacon"),
            DeviceCategory::Unknown
        );
    }

    #[test]
    fn each_category_reachable() {
        assert_eq!(
            classify_device_by_name("Pixel 7"),
            DeviceCategory::PhoneAndroid
        );
        assert_eq!(classify_device_by_name("Fitbit Versa"), DeviceCategory::Wearable);
        assert_eq!(classify_device_by_name("AirPods Pro"), DeviceCategory::Audio);
        assert_eq!(
            classify_device_by_name("Smart Bulb A19"),
            DeviceCategory::SmartHome
        );
    }

    #[test]
    fn ambiguous_name_resolves_by_table_order() {
        // "Pixel Watch" hits both the Android row and the wearable row;
        // the Android row comes first, so it wins.
        assert_eq!(
            classify_device_by_name("Pixel Watch"),
            DeviceCategory::PhoneAndroid
        );
        // "ear" (audio) beats "light" (smart home) the same way
        assert_eq!(
            classify_device_by_name("Earlight speaker"),
            DeviceCategory::Audio
        );
    }

    #[test]
    fn mi_keyword_requires_trailing_space() {
        assert_eq!(
            classify_device_by_name("Mi 11 Lite"),
            DeviceCategory::PhoneAndroid
        );
        // "mi" inside a word must not match the Android row
        assert_eq!(
            classify_device_by_name("Thermistor node"),
            DeviceCategory::Unknown
        );
    }

    #[test]
    fn display_labels() {
        assert_eq!(DeviceCategory::PhoneIos.as_str(), "phone / iOS device");
        assert_eq!(DeviceCategory::Unknown.as_str(), "unknown category");
    }

    // ── router vendor ───────────────────────────────────────────────

    #[test]
    fn known_vendor_from_ssid() {
        assert_eq!(
            guess_router_vendor("TP-Link_5FA2", &oui("A0:21:B7")),
            VendorGuess::Named("TP-Link")
        );
        assert_eq!(
            guess_router_vendor("NETGEAR87", &oui("00:00:00")),
            VendorGuess::Named("Netgear")
        );
        assert_eq!(
            guess_router_vendor("FRITZ!Box 7590", &oui("00:00:00")),
            VendorGuess::Named("AVM FRITZ!Box")
        );
    }

    #[test]
    fn vendor_keyword_variants() {
        // Both spellings in the same row map to one vendor
        assert_eq!(
            guess_router_vendor("tplink-guest", &oui("00:00:00")),
            VendorGuess::Named("TP-Link")
        );
        assert_eq!(
            guess_router_vendor("dlink-home", &oui("00:00:00")),
            VendorGuess::Named("D-Link")
        );
        assert_eq!(
            guess_router_vendor("D-Link DIR-882", &oui("00:00:00")),
            VendorGuess::Named("D-Link")
        );
    }

    #[test]
    fn unknown_ssid_falls_back_to_oui_verbatim() {
        let guess = guess_router_vendor("CoffeeShopGuest", &oui("B4:1E:52"));
        assert_eq!(guess, VendorGuess::UnknownOui(oui("B4:1E:52")));
    }

    #[test]
    fn hidden_ssid_falls_back_to_oui() {
        let guess = guess_router_vendor("", &oui("8C:1D:55"));
        assert!(matches!(guess, VendorGuess::UnknownOui(ref o) if o.as_str() == "8C:1D:55"));
    }

    #[test]
    fn vendor_guess_display() {
        assert_eq!(
            format!("{}", VendorGuess::Named("ASUS")),
            "ASUS (SSID guess)"
        );
        assert_eq!(
            format!("{}", VendorGuess::UnknownOui(oui("B4:1E:52"))),
            "Unknown (OUI B4:1E:52)"
        );
    }
}
