/// Log-distance path-loss ranging for BLE advertisers.
///
/// `d = 10 ^ ((tx_power - rssi) / (10 * n))` with a fixed path-loss
/// exponent. The result is clamped to a short-range window because that is
/// the only regime where a single-sample RSSI estimate means anything —
/// the clamp communicates "very approximate" instead of producing
/// nonsensical extremes.

/// Path-loss exponent: 2.0 is free space; indoor environments run 2.5–3.0.
pub const PATH_LOSS_EXPONENT: f32 = 2.0;

/// Common "RSSI at 1 meter" reference for advertisers that do not include
/// a TX-power field. The estimator never applies this itself — callers
/// without an advertised value opt in by passing it explicitly.
pub const DEFAULT_TX_POWER_DBM: i8 = -59;

/// Shortest distance the model will report, in meters
pub const MIN_DISTANCE_M: f32 = 0.1;

/// Longest distance the model will report, in meters
pub const MAX_DISTANCE_M: f32 = 20.0;

/// Estimate the distance to an advertiser in meters.
///
/// Pure: same inputs, same output. `tx_power_dbm` is the advertised
/// reference ([`DEFAULT_TX_POWER_DBM`] when the advertiser sent none).
pub fn estimate_distance_m(rssi_dbm: i8, tx_power_dbm: i8) -> f32 {
    let ratio_db = tx_power_dbm as f32 - rssi_dbm as f32;
    let exponent = ratio_db / (10.0 * PATH_LOSS_EXPONENT);
    libm::powf(10.0, exponent).clamp(MIN_DISTANCE_M, MAX_DISTANCE_M)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rssi_equal_to_reference_is_one_meter() {
        // d = 10^0 = 1 by construction of the model
        let d = estimate_distance_m(-59, DEFAULT_TX_POWER_DBM);
        assert!((d - 1.0).abs() < 1e-5);
    }

    #[test]
    fn very_weak_signal_clamps_to_max() {
        // (-59 - (-100)) / 20 = 2.05 → 10^2.05 ≈ 112 m, clamped
        let d = estimate_distance_m(-100, DEFAULT_TX_POWER_DBM);
        assert_eq!(d, MAX_DISTANCE_M);
    }

    #[test]
    fn implausibly_strong_signal_clamps_to_min() {
        // (-59 - 0) / 20 = -2.95 → 10^-2.95 ≈ 1 mm, clamped
        let d = estimate_distance_m(0, DEFAULT_TX_POWER_DBM);
        assert_eq!(d, MIN_DISTANCE_M);
    }

    #[test]
    fn ten_db_of_loss_is_about_three_point_two_meters() {
        // 10 dB over the reference: 10^(10/20) = sqrt(10)
        let d = estimate_distance_m(-69, DEFAULT_TX_POWER_DBM);
        assert!((d - 3.1623).abs() < 0.01, "got {d}");
    }

    #[test]
    fn weaker_signal_never_reads_closer() {
        let mut prev = 0.0f32;
        for rssi in (-100..=-40).rev() {
            let d = estimate_distance_m(rssi, DEFAULT_TX_POWER_DBM);
            assert!(d >= prev, "distance must be monotone in signal loss");
            prev = d;
        }
    }

    #[test]
    fn advertised_reference_shifts_the_estimate() {
        // Same RSSI, stronger advertised TX power → farther away
        let near = estimate_distance_m(-70, -59);
        let far = estimate_distance_m(-70, -50);
        assert!(far > near);
    }

    #[test]
    fn result_always_within_clamp_window() {
        for rssi in -127..=0 {
            for tx in [-80i8, -59, -40, 0] {
                let d = estimate_distance_m(rssi, tx);
                assert!((MIN_DISTANCE_M..=MAX_DISTANCE_M).contains(&d));
            }
        }
    }
}
