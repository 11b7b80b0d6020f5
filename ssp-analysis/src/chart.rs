//! Polar vector construction for the nautical "center view" chart.
//!
//! The chart draws four arrows toward the boat at the center: own course,
//! wind, wave and current. Raw magnitudes span very different scales
//! (knots vs. meters), so each is compressed into a small fixed radial
//! range that keeps near-zero vectors visible and clips large ones.

use serde::Serialize;
use ssp_meteo::forecast::{normalize_degrees, ForecastSample};

/// Which physical quantity a chart vector represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VectorKind {
    Course,
    Wind,
    Wave,
    Current,
}

/// One renderable polar vector: a normalized direction and a compressed
/// radial magnitude. Recomputed per render, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartVector {
    pub kind: VectorKind,
    pub direction_deg: f64,
    pub magnitude: f64,
}

/// The four vectors of one chart frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NauticalChart {
    pub course: ChartVector,
    pub wind: ChartVector,
    pub wave: ChartVector,
    pub current: ChartVector,
}

impl NauticalChart {
    pub fn vectors(&self) -> [&ChartVector; 4] {
        [&self.course, &self.wind, &self.wave, &self.current]
    }

    /// Radial axis upper bound: the longest of the four arrows. Usually
    /// the course arrow (compressed wind + 1), but the current compressor
    /// reaches 10, so a strong current in light wind can exceed it.
    pub fn radial_max(&self) -> f64 {
        self.vectors()
            .iter()
            .map(|vector| vector.magnitude)
            .fold(0.0, f64::max)
    }
}

/// Two-tier compression for wind (kn) and wave (m) magnitudes:
/// small values are exaggerated, anything beyond 2 collapses to unit
/// length so the chart stays legible at a fixed radial scale.
pub fn compress_wind_wave(magnitude: f64) -> f64 {
    let m = magnitude.max(0.0);
    if m <= 1.0 {
        m * 5.0
    } else if m <= 2.0 {
        m * 2.0
    } else {
        1.0
    }
}

/// Three-tier compression for current magnitudes (kn); currents are weak,
/// so the exaggeration is stronger and the clip length larger.
pub fn compress_current(magnitude: f64) -> f64 {
    let m = magnitude.max(0.0);
    if m <= 1.0 {
        m * 10.0
    } else if m <= 2.0 {
        m * 5.0
    } else {
        2.0
    }
}

/// Convert a current set ("going to") into the "coming from" convention
/// used for plotting. The current is the only inverted field; wind and
/// wave directions already arrive as "coming from".
pub fn current_origin_deg(to_deg: f64) -> f64 {
    normalize_degrees(to_deg + 180.0)
}

/// Build the chart frame for one forecast hour and the boat's course.
///
/// The course arrow's length is weather-independent: one unit beyond the
/// compressed wind magnitude, so it always clears the wind arrow.
pub fn build_nautical_chart(course_deg: f64, sample: &ForecastSample) -> NauticalChart {
    let wind_magnitude = compress_wind_wave(sample.wind_speed_kn);
    NauticalChart {
        course: ChartVector {
            kind: VectorKind::Course,
            direction_deg: normalize_degrees(course_deg),
            magnitude: wind_magnitude + 1.0,
        },
        wind: ChartVector {
            kind: VectorKind::Wind,
            direction_deg: normalize_degrees(sample.wind_dir_deg),
            magnitude: wind_magnitude,
        },
        wave: ChartVector {
            kind: VectorKind::Wave,
            direction_deg: normalize_degrees(sample.wave_dir_deg),
            magnitude: compress_wind_wave(sample.wave_height_m),
        },
        current: ChartVector {
            kind: VectorKind::Current,
            direction_deg: current_origin_deg(sample.current_dir_deg),
            magnitude: compress_current(sample.current_speed_kn),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> ForecastSample {
        ForecastSample {
            time: NaiveDate::from_ymd_opt(2026, 8, 23)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
            wind_speed_kn: 0.5,
            wind_dir_deg: 315.0,
            wind_gust_kn: 1.0,
            wave_height_m: 1.5,
            wave_dir_deg: -30.0,
            current_speed_kn: 5.0,
            current_dir_deg: 90.0,
            precipitation_mm: 0.0,
            pressure_hpa: 1016.0,
        }
    }

    #[test]
    fn test_wind_wave_compression_tiers() {
        assert_eq!(compress_wind_wave(0.5), 2.5);
        assert_eq!(compress_wind_wave(1.0), 5.0);
        assert_eq!(compress_wind_wave(1.5), 3.0);
        assert_eq!(compress_wind_wave(2.0), 4.0);
        assert_eq!(compress_wind_wave(5.0), 1.0); // clipped
        assert_eq!(compress_wind_wave(-0.3), 0.0); // clamped
    }

    #[test]
    fn test_current_compression_tiers() {
        assert_eq!(compress_current(0.4), 4.0);
        assert_eq!(compress_current(1.0), 10.0);
        assert_eq!(compress_current(1.5), 7.5);
        assert_eq!(compress_current(3.0), 2.0); // clipped
        assert_eq!(compress_current(-1.0), 0.0);
    }

    #[test]
    fn test_current_set_to_origin() {
        assert_eq!(current_origin_deg(90.0), 270.0);
        assert_eq!(current_origin_deg(270.0), 90.0);
        assert_eq!(current_origin_deg(350.0), 170.0);
    }

    #[test]
    fn test_radial_max_covers_strong_current_in_light_wind() {
        let mut drift = sample();
        drift.wind_speed_kn = 0.0;
        drift.wave_height_m = 0.1;
        drift.current_speed_kn = 1.0;

        let chart = build_nautical_chart(0.0, &drift);
        assert_eq!(chart.course.magnitude, 1.0);
        assert_eq!(chart.current.magnitude, 10.0);
        // the axis must still cover the current arrow
        assert_eq!(chart.radial_max(), 10.0);
    }

    #[test]
    fn test_chart_frame() {
        let chart = build_nautical_chart(-30.0, &sample());

        assert_eq!(chart.course.direction_deg, 330.0);
        assert_eq!(chart.wind.magnitude, 2.5);
        assert_eq!(chart.course.magnitude, 3.5);
        assert_eq!(chart.wave.direction_deg, 330.0);
        assert_eq!(chart.wave.magnitude, 3.0);
        assert_eq!(chart.current.direction_deg, 270.0);
        assert_eq!(chart.current.magnitude, 2.0);
        assert_eq!(chart.radial_max(), 3.5);

        for vector in chart.vectors() {
            assert!((0.0..360.0).contains(&vector.direction_deg));
            assert!(vector.magnitude >= 0.0);
        }
    }
}
