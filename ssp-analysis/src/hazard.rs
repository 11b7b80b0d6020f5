//! Sea-state and rig advisories derived from a single forecast sample.

use serde::{Deserialize, Serialize};
use ssp_meteo::forecast::{normalize_degrees, ForecastSample};

/// Wind and current count as opposed when their headings sit within this
/// angle of each other (wind "from" vs. current "to").
pub const OPPOSITION_ANGLE_DEG: f64 = 50.0;

/// Minimum current speed for the steep-wave advisory to fire.
pub const STEEP_WAVE_CURRENT_KN: f64 = 2.5;

/// Shortest angular distance between two headings, in [0, 180].
pub fn angular_distance(a_deg: f64, b_deg: f64) -> f64 {
    let diff = (normalize_degrees(a_deg) - normalize_degrees(b_deg)).abs();
    diff.min(360.0 - diff)
}

/// True when the wind blows against the current: the current's down-stream
/// heading lies within [`OPPOSITION_ANGLE_DEG`] of the wind's origin.
pub fn is_wind_against_current(wind_from_deg: f64, current_to_deg: f64) -> bool {
    angular_distance(wind_from_deg, current_to_deg) < OPPOSITION_ANGLE_DEG
}

/// Combined steep-wave advisory: wind-against-current geometry plus a
/// current strong enough to matter. Both conditions must hold.
pub fn steep_wave_hazard(sample: &ForecastSample) -> bool {
    is_wind_against_current(sample.wind_dir_deg, sample.current_dir_deg)
        && sample.current_speed_kn > STEEP_WAVE_CURRENT_KN
}

/// Reefing recommendation from the gust forecast.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum ReefAdvisory {
    FullSail,
    Reef1,
    Reef2,
    Reef3,
}

impl ReefAdvisory {
    /// Gust thresholds: 20 kn -> reef 1, 25 kn -> reef 2, 30 kn -> reef 3.
    pub fn from_gust(gust_kn: f64) -> Self {
        if gust_kn >= 30.0 {
            ReefAdvisory::Reef3
        } else if gust_kn >= 25.0 {
            ReefAdvisory::Reef2
        } else if gust_kn >= 20.0 {
            ReefAdvisory::Reef1
        } else {
            ReefAdvisory::FullSail
        }
    }

    /// One-line rig guidance shown in the advisory banner.
    pub fn headline(&self) -> &'static str {
        match self {
            ReefAdvisory::FullSail => "Full sail: wind conditions are stable.",
            ReefAdvisory::Reef1 => "REEF 1: strong gusts! Main: reef 1, jib: 3/4.",
            ReefAdvisory::Reef2 => "REEF 2: very strong gusts! Main: reef 2, jib: 1/2.",
            ReefAdvisory::Reef3 => "REEF 3: very strong gusts! Main: reef 3, jib: 1/3.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample(wind_dir: f64, current_dir: f64, current_kn: f64) -> ForecastSample {
        ForecastSample {
            time: NaiveDate::from_ymd_opt(2026, 8, 23)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
            wind_speed_kn: 16.0,
            wind_dir_deg: wind_dir,
            wind_gust_kn: 22.0,
            wave_height_m: 1.1,
            wave_dir_deg: wind_dir,
            current_speed_kn: current_kn,
            current_dir_deg: current_dir,
            precipitation_mm: 0.0,
            pressure_hpa: 1012.0,
        }
    }

    #[test]
    fn test_wind_against_current() {
        assert!(is_wind_against_current(10.0, 40.0)); // diff 30
        assert!(!is_wind_against_current(10.0, 200.0)); // diff 170
        assert!(!is_wind_against_current(0.0, 50.0)); // exactly at the bound
    }

    #[test]
    fn test_wind_against_current_wraps_at_north() {
        // 350 vs 20 is only 30 degrees apart across the 0/360 seam
        assert!(is_wind_against_current(350.0, 20.0));
        assert!(is_wind_against_current(5.0, 340.0));
    }

    #[test]
    fn test_steep_wave_needs_both_conditions() {
        assert!(steep_wave_hazard(&sample(10.0, 40.0, 3.0)));
        // opposed but weak current
        assert!(!steep_wave_hazard(&sample(10.0, 40.0, 2.5)));
        // strong current but not opposed
        assert!(!steep_wave_hazard(&sample(10.0, 200.0, 3.0)));
    }

    #[test]
    fn test_reef_advisory_tiers() {
        assert_eq!(ReefAdvisory::from_gust(12.0), ReefAdvisory::FullSail);
        assert_eq!(ReefAdvisory::from_gust(19.9), ReefAdvisory::FullSail);
        assert_eq!(ReefAdvisory::from_gust(20.0), ReefAdvisory::Reef1);
        assert_eq!(ReefAdvisory::from_gust(25.0), ReefAdvisory::Reef2);
        assert_eq!(ReefAdvisory::from_gust(31.0), ReefAdvisory::Reef3);
    }
}
