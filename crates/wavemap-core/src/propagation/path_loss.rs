// ── Log-distance path loss ──

/// Distances below this are treated as this, in meters.
pub const PATH_LOSS_FLOOR_M: f64 = 0.1;

/// Free-space loss at the 1 m reference distance, in dB.
///
/// `32.44 + 20·log10(f_MHz)` is the Friis figure at 1 km; subtracting 60 dB
/// brings it to 1 m.
pub fn reference_loss_db(freq_ghz: f64) -> f64 {
    32.44 + 20.0 * (freq_ghz * 1000.0).log10() - 60.0
}

/// Log-distance path loss in dB for `distance_m` at `freq_ghz` with
/// exponent `exponent`.
pub fn path_loss_db(distance_m: f64, freq_ghz: f64, exponent: f64) -> f64 {
    let d = distance_m.max(PATH_LOSS_FLOOR_M);
    reference_loss_db(freq_ghz) + 10.0 * exponent * d.log10()
}

pub fn dbm_to_mw(dbm: f64) -> f64 {
    10f64.powf(dbm / 10.0)
}

/// Linear power back to dBm. Zero and negative inputs clamp to the smallest
/// positive `f64`, so the result is always finite.
pub fn mw_to_dbm(mw: f64) -> f64 {
    10.0 * mw.max(f64::MIN_POSITIVE).log10()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn reference_loss_at_2_4_ghz() {
        // 32.44 + 20·log10(2400) − 60 ≈ 40.04 dB
        assert!((reference_loss_db(2.4) - 40.0442).abs() < 1e-3);
    }

    #[test]
    fn one_meter_has_no_distance_term() {
        assert!((path_loss_db(1.0, 5.0, 3.0) - reference_loss_db(5.0)).abs() < 1e-12);
    }

    #[test]
    fn monotonic_in_distance() {
        let mut prev = path_loss_db(0.1, 2.4, 2.5);
        for step in 1..200 {
            let d = 0.1 + f64::from(step) * 0.25;
            let loss = path_loss_db(d, 2.4, 2.5);
            assert!(loss > prev, "loss must grow with distance ({d} m)");
            prev = loss;
        }
    }

    #[test]
    fn monotonic_in_frequency() {
        let at = |f| path_loss_db(7.0, f, 2.5);
        assert!(at(2.4) < at(5.0));
        assert!(at(5.0) < at(6.0));
    }

    #[test]
    fn distance_is_floored() {
        assert_eq!(path_loss_db(0.0, 2.4, 2.5), path_loss_db(0.1, 2.4, 2.5));
        assert_eq!(path_loss_db(0.05, 2.4, 2.5), path_loss_db(0.1, 2.4, 2.5));
    }

    #[test]
    fn mw_dbm_conversions() {
        assert!((dbm_to_mw(20.0) - 100.0).abs() < 1e-9);
        assert!((mw_to_dbm(1.0)).abs() < 1e-12);
        assert!(mw_to_dbm(0.0).is_finite());
        assert!(mw_to_dbm(-5.0).is_finite());
    }
}
