//! Barometric pressure trend analysis over a window around "now".

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use ssp_meteo::forecast::ForecastSample;

/// How far the barograph window reaches around the reference hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendConfig {
    pub lookback_hours: i64,
    pub lookahead_hours: i64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            lookback_hours: 6,
            lookahead_hours: 12,
        }
    }
}

/// Minimum window length for the trend delta: the fixed-offset lookup
/// reads indices 2 and 5 of the time-sorted window.
pub const MIN_TREND_SAMPLES: usize = 6;

const LATER_IDX: usize = 5;
const EARLIER_IDX: usize = 2;

/// One pressure reading, projected out of a [`ForecastSample`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressureSample {
    pub time: NaiveDateTime,
    pub pressure_hpa: f64,
}

/// Trend severity tier for a 3-hour pressure delta.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Tier {
    Stable,
    Watch,
    Alarm,
}

/// Outcome of the trend analysis. Too few samples degrade gracefully to
/// [`Trend::InsufficientData`] instead of an error.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Trend {
    InsufficientData,
    Evaluated { delta_hpa: f64, tier: Tier },
}

/// Project forecast samples into the barograph window
/// [now - lookback, now + lookahead], sorted by time.
pub fn pressure_window(
    samples: &[ForecastSample],
    now: NaiveDateTime,
    config: &TrendConfig,
) -> Vec<PressureSample> {
    let start = now - Duration::hours(config.lookback_hours);
    let end = now + Duration::hours(config.lookahead_hours);
    let mut window: Vec<PressureSample> = samples
        .iter()
        .filter(|sample| sample.time >= start && sample.time <= end)
        .map(|sample| PressureSample {
            time: sample.time,
            pressure_hpa: sample.pressure_hpa,
        })
        .collect();
    window.sort_by_key(|sample| sample.time);
    window
}

/// Classify a pressure delta in hPa per 3 hours.
pub fn classify_delta(delta_hpa: f64) -> Tier {
    if delta_hpa <= -3.0 {
        Tier::Alarm
    } else if delta_hpa <= -1.5 {
        Tier::Watch
    } else {
        Tier::Stable
    }
}

/// Compute the trend over a time-sorted barograph window.
///
/// The delta is `window[5] - window[2]`, a fixed-offset pair approximating
/// a 3-hour comparison. This assumes the window is on an hourly, gap-free
/// grid, which holds for the Open-Meteo hourly feed. Windows shorter than
/// [`MIN_TREND_SAMPLES`] report [`Trend::InsufficientData`].
pub fn analyze_trend(window: &[PressureSample]) -> Trend {
    if window.len() < MIN_TREND_SAMPLES {
        return Trend::InsufficientData;
    }
    let delta_hpa = window[LATER_IDX].pressure_hpa - window[EARLIER_IDX].pressure_hpa;
    Trend::Evaluated {
        delta_hpa,
        tier: classify_delta(delta_hpa),
    }
}
