use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Time format used by Open-Meteo hourly series: "2026-08-23T14:00"
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Errors that can occur when fetching or merging forecast data.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ForecastError {
    HttpRequest,
    ResponseParse,
    /// An expected hourly field is absent or null in the API response.
    MissingField(&'static str),
    /// The weather and marine series do not share the same hourly grid.
    SeriesMismatch,
}

/// Hourly arrays from the Open-Meteo weather forecast API.
///
/// Values are `Option<f64>` because Open-Meteo encodes gaps as JSON null;
/// a null in any requested field is treated as a hard error on merge.
#[derive(Debug, Clone, Deserialize)]
pub struct HourlyWeather {
    pub time: Vec<String>,
    pub wind_speed_10m: Vec<Option<f64>>,
    pub wind_direction_10m: Vec<Option<f64>>,
    pub wind_gusts_10m: Vec<Option<f64>>,
    pub pressure_msl: Vec<Option<f64>>,
    pub precipitation: Vec<Option<f64>>,
}

/// Hourly arrays from the Open-Meteo marine API.
#[derive(Debug, Clone, Deserialize)]
pub struct HourlyMarine {
    pub time: Vec<String>,
    pub wave_height: Vec<Option<f64>>,
    pub wave_direction: Vec<Option<f64>>,
    pub ocean_current_velocity: Vec<Option<f64>>,
    pub ocean_current_direction: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherResponse {
    pub hourly: HourlyWeather,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarineResponse {
    pub hourly: HourlyMarine,
}

/// One hourly forecast record, merged from the weather and marine feeds.
///
/// Wind and wave directions are "coming from", current direction is the
/// set ("going to"). All directions are normalized to [0, 360).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    pub time: NaiveDateTime,
    pub wind_speed_kn: f64,
    pub wind_dir_deg: f64,
    pub wind_gust_kn: f64,
    pub wave_height_m: f64,
    pub wave_dir_deg: f64,
    pub current_speed_kn: f64,
    pub current_dir_deg: f64,
    pub precipitation_mm: f64,
    pub pressure_hpa: f64,
}

/// Normalize an angle in degrees into [0, 360) for any real input.
pub fn normalize_degrees(deg: f64) -> f64 {
    let normalized = deg.rem_euclid(360.0);
    // rem_euclid can return 360.0 when deg is a tiny negative number
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Zero out minutes and seconds, matching the hourly forecast grid.
pub fn truncate_to_hour(time: NaiveDateTime) -> NaiveDateTime {
    time.with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(time)
}

fn field(
    values: &[Option<f64>],
    idx: usize,
    name: &'static str,
) -> Result<f64, ForecastError> {
    values
        .get(idx)
        .copied()
        .flatten()
        .ok_or(ForecastError::MissingField(name))
}

/// Merge the weather and marine hourly series into forecast samples.
///
/// Both feeds must be on the same hourly grid (same length, same
/// timestamps); the fetch requests identical `past_days`/timezone settings
/// to guarantee that. Any missing field fails the whole merge.
pub fn merge_hourly(
    weather: &HourlyWeather,
    marine: &HourlyMarine,
) -> Result<Vec<ForecastSample>, ForecastError> {
    if weather.time.len() != marine.time.len() {
        return Err(ForecastError::SeriesMismatch);
    }

    let mut samples = Vec::with_capacity(weather.time.len());
    for (i, time_str) in weather.time.iter().enumerate() {
        if marine.time[i] != *time_str {
            return Err(ForecastError::SeriesMismatch);
        }
        let time = NaiveDateTime::parse_from_str(time_str, TIME_FORMAT)
            .map_err(|_| ForecastError::ResponseParse)?;

        samples.push(ForecastSample {
            time,
            wind_speed_kn: field(&weather.wind_speed_10m, i, "wind_speed_10m")?,
            wind_dir_deg: normalize_degrees(field(
                &weather.wind_direction_10m,
                i,
                "wind_direction_10m",
            )?),
            wind_gust_kn: field(&weather.wind_gusts_10m, i, "wind_gusts_10m")?,
            wave_height_m: field(&marine.wave_height, i, "wave_height")?,
            wave_dir_deg: normalize_degrees(field(
                &marine.wave_direction,
                i,
                "wave_direction",
            )?),
            current_speed_kn: field(
                &marine.ocean_current_velocity,
                i,
                "ocean_current_velocity",
            )?,
            current_dir_deg: normalize_degrees(field(
                &marine.ocean_current_direction,
                i,
                "ocean_current_direction",
            )?),
            precipitation_mm: field(&weather.precipitation, i, "precipitation")?,
            pressure_hpa: field(&weather.pressure_msl, i, "pressure_msl")?,
        });
    }
    Ok(samples)
}

/// Keep samples at or after `start`, capped at `max_hours` records.
pub fn filter_from(
    samples: &[ForecastSample],
    start: NaiveDateTime,
    max_hours: usize,
) -> Vec<ForecastSample> {
    samples
        .iter()
        .filter(|sample| sample.time >= start)
        .take(max_hours)
        .cloned()
        .collect()
}
