/// Default keyword tables for heuristic classification.
///
/// Both tables are **ordered** and evaluated first-match-wins, top to
/// bottom. The order is a behavioral contract: an ambiguous name (one
/// matching several rows) resolves to the earliest row, so reordering
/// entries changes classification results.
use crate::classify::DeviceCategory;

/// Device-category keyword sets, matched case-insensitively against BLE
/// advertised names. Row order decides ambiguous names — "Pixel Watch"
/// is a phone because the Android row precedes the wearable row.
///
/// Note "mi " keeps its trailing space (Xiaomi phone names like "Mi 11");
/// without it, "mi" would swallow words like "thermostat".
pub static DEVICE_NAME_CATEGORIES: &[(&[&str], DeviceCategory)] = &[
    (&["iphone", "ipad", "ios"], DeviceCategory::PhoneIos),
    (&["android", "pixel", "mi "], DeviceCategory::PhoneAndroid),
    (&["watch", "wear", "fitbit", "garmin"], DeviceCategory::Wearable),
    (&["airpods", "buds", "ear"], DeviceCategory::Audio),
    (&["tv", "light", "bulb", "plug"], DeviceCategory::SmartHome),
];

/// Router-vendor keywords, matched case-insensitively against SSIDs.
/// First match wins.
pub static ROUTER_VENDOR_KEYWORDS: &[(&[&str], &str)] = &[
    (&["tp-link", "tplink"], "TP-Link"),
    (&["netgear"], "Netgear"),
    (&["linksys"], "Linksys"),
    (&["asus"], "ASUS"),
    (&["fritz"], "AVM FRITZ!Box"),
    (&["dlink", "d-link"], "D-Link"),
];
