/// Pull-model orchestration: one scan in, one classified report out.
///
/// `Monitor` owns the temperature tracker and the platform driver handles.
/// Every method runs synchronously on the caller's context — a scan is
/// triggered, the snapshot is fed through the pure scorers, and a report
/// value comes back. Nothing runs in the background and no snapshot
/// outlives the call that produced it.
///
/// Driver failures propagate as `Err(ScanError)` — distinct from a scan
/// that ran and found nothing.
use heapless::Vec;

use crate::census::{channel_histogram, channel_load, classify_crowd, classify_rf_energy};
use crate::classify::{classify_device_by_name, guess_router_vendor};
use crate::driver::{BleScanner, ChipSensors, ScanError, WifiScanner};
use crate::proximity::{estimate_distance_m, DEFAULT_TX_POWER_DBM};
use crate::report::{
    heap_health, ApDetail, BleDetail, CrowdSurvey, EnvironmentReport, RfSurvey,
};
use crate::scan::{format_mac, oui_prefix, BleSnapshot, MacString, OuiString, ScanSnapshot};
use crate::temperature::TemperatureTracker;

/// BLE listen window for device surveys, in seconds
pub const BLE_SURVEY_SECS: u8 = 3;

/// Shorter BLE listen window for the crowd survey — a coarse count does
/// not need the full window
pub const BLE_CROWD_SECS: u8 = 2;

pub struct Monitor<W, B, S> {
    wifi: W,
    ble: B,
    sensors: S,
    temps: TemperatureTracker,
}

impl<W: WifiScanner, B: BleScanner, S: ChipSensors> Monitor<W, B, S> {
    pub fn new(wifi: W, ble: B, sensors: S) -> Self {
        Self {
            wifi,
            ble,
            sensors,
            temps: TemperatureTracker::new(),
        }
    }

    /// Read the chip sensors, record the temperature sample, and report
    /// the environment state. Sensor reads cannot fail, so neither can
    /// this.
    pub fn environment(&mut self) -> EnvironmentReport {
        let temp_c = self.sensors.temperature_c();
        self.temps.record(temp_c);

        let (temp_min_c, temp_max_c) = match self.temps.extremes() {
            Some((min, max)) => (Some(min), Some(max)),
            None => (None, None),
        };

        log::debug!("environment pull: {temp_c:.1} C, {} samples", self.temps.len());

        EnvironmentReport {
            temp_c,
            temp_f: temp_c * 9.0 / 5.0 + 32.0,
            temp_min_c,
            temp_max_c,
            history: self.temps.samples().collect(),
            hall_raw: self.sensors.hall_raw(),
            heap: heap_health(self.sensors.heap_free(), self.sensors.heap_size()),
        }
    }

    /// Run a Wi-Fi scan and return the raw snapshot, driver order.
    pub fn wifi_survey(&mut self) -> Result<ScanSnapshot, ScanError> {
        let mut snapshot = ScanSnapshot::new();
        self.wifi.scan(&mut snapshot)?;
        log::info!("wifi scan found {} network(s)", snapshot.len());
        Ok(snapshot)
    }

    /// Run a BLE scan and return the raw snapshot, driver order.
    pub fn ble_survey(&mut self) -> Result<BleSnapshot, ScanError> {
        let mut snapshot = BleSnapshot::new();
        self.ble.scan(BLE_SURVEY_SECS, &mut snapshot)?;
        log::info!("ble scan found {} device(s)", snapshot.len());
        Ok(snapshot)
    }

    /// Score crowd density from fresh Wi-Fi and BLE scans.
    pub fn crowd(&mut self) -> Result<CrowdSurvey, ScanError> {
        let mut wifi = ScanSnapshot::new();
        self.wifi.scan(&mut wifi)?;
        let mut ble = BleSnapshot::new();
        self.ble.scan(BLE_CROWD_SECS, &mut ble)?;

        let crowd = classify_crowd(wifi.len(), ble.len());
        log::info!(
            "crowd survey: {} wifi + {} ble -> {}",
            wifi.len(),
            ble.len(),
            crowd.label
        );

        Ok(CrowdSurvey {
            wifi_count: wifi.len(),
            ble_count: ble.len(),
            crowd,
        })
    }

    /// Score 2.4 GHz interference from a fresh Wi-Fi scan.
    pub fn rf_interference(&mut self) -> Result<RfSurvey, ScanError> {
        let mut snapshot = ScanSnapshot::new();
        self.wifi.scan(&mut snapshot)?;

        Ok(RfSurvey {
            network_count: snapshot.len(),
            energy: classify_rf_energy(&snapshot),
            channels: channel_histogram(&snapshot),
        })
    }

    /// Detail view for the AP at `idx` of a fresh scan.
    ///
    /// `Ok(None)` when the index no longer exists — the snapshot is fresh
    /// per call, so a stale link is a normal outcome.
    pub fn ap_detail(&mut self, idx: usize) -> Result<Option<ApDetail>, ScanError> {
        let mut snapshot = ScanSnapshot::new();
        self.wifi.scan(&mut snapshot)?;

        let Some(ap) = snapshot.get(idx) else {
            log::debug!("ap detail: index {idx} out of range ({} found)", snapshot.len());
            return Ok(None);
        };

        let mut bssid = MacString::new();
        format_mac(&ap.bssid, &mut bssid);
        let mut oui = OuiString::new();
        oui_prefix(&ap.bssid, &mut oui);
        let vendor = guess_router_vendor(&ap.ssid, &oui);

        Ok(Some(ApDetail {
            ssid: ap.ssid.clone(),
            bssid,
            rssi: ap.rssi,
            channel: ap.channel,
            auth: ap.auth,
            oui,
            vendor,
            load: channel_load(&snapshot, ap.channel),
        }))
    }

    /// Detail view for the advertiser with the given address, from a fresh
    /// BLE scan.
    ///
    /// `Ok(None)` when the device is absent — it may simply have stopped
    /// advertising since the caller last saw it.
    pub fn ble_detail(&mut self, addr: &[u8; 6]) -> Result<Option<BleDetail>, ScanError> {
        let mut snapshot = BleSnapshot::new();
        self.ble.scan(BLE_SURVEY_SECS, &mut snapshot)?;

        let Some(dev) = snapshot.iter().find(|d| d.addr == *addr) else {
            return Ok(None);
        };

        // Explicit fallback: advertisers that omit TX power get the common
        // 1 m reference. The estimator itself never assumes one.
        let reference = dev.tx_power.unwrap_or(DEFAULT_TX_POWER_DBM);

        let mut addr_str = MacString::new();
        format_mac(&dev.addr, &mut addr_str);

        let mut mfr = Vec::new();
        for &b in dev.manufacturer_data.iter().take(16) {
            let _ = mfr.push(b);
        }

        Ok(Some(BleDetail {
            name: dev.name.clone(),
            addr: addr_str,
            rssi: dev.rssi,
            category: classify_device_by_name(&dev.name),
            tx_power_dbm: dev.tx_power,
            distance_m: estimate_distance_m(dev.rssi, reference),
            manufacturer_data: mfr,
        }))
    }

    /// The owned temperature tracker, for direct rendering.
    pub fn temperatures(&self) -> &TemperatureTracker {
        &self.temps
    }

    /// Restart temperature collection from scratch.
    pub fn reset_temperatures(&mut self) {
        self.temps.reset();
    }
}
