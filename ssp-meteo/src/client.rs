//! Open-Meteo API client for the weather and marine hourly feeds.
//!
//! Both endpoints are requested with the same hourly grid settings
//! (`past_days=1`, `timezone=auto`) so the two series can be merged
//! index-by-index. Wind speeds are requested in knots.

use crate::forecast::{
    merge_hourly, ForecastError, ForecastSample, MarineResponse, WeatherResponse,
};
use crate::region::Region;
use log::info;
use reqwest::Client;

/// Open-Meteo weather forecast endpoint.
pub const WEATHER_API: &str = "https://api.open-meteo.com/v1/forecast";

/// Open-Meteo marine forecast endpoint.
pub const MARINE_API: &str = "https://marine-api.open-meteo.com/v1/marine";

/// Build the weather API URL for a region.
pub fn weather_url(region: &Region) -> String {
    format!(
        "{WEATHER_API}?latitude={}&longitude={}\
         &hourly=wind_speed_10m,wind_gusts_10m,wind_direction_10m,pressure_msl,precipitation\
         &wind_speed_unit=kn&past_days=1&timezone=auto",
        region.latitude, region.longitude
    )
}

/// Build the marine API URL for a region.
pub fn marine_url(region: &Region) -> String {
    format!(
        "{MARINE_API}?latitude={}&longitude={}\
         &hourly=wave_height,wave_direction,ocean_current_velocity,ocean_current_direction\
         &past_days=1&timezone=auto",
        region.latitude, region.longitude
    )
}

async fn get_json<T: serde::de::DeserializeOwned>(
    client: &Client,
    url: &str,
) -> Result<T, ForecastError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|_| ForecastError::HttpRequest)?;
    if !response.status().is_success() {
        info!("Bad response from {}: {}", url, response.status());
        return Err(ForecastError::HttpRequest);
    }
    response
        .json::<T>()
        .await
        .map_err(|_| ForecastError::ResponseParse)
}

/// Fetch and merge the weather and marine forecasts for a region.
pub async fn fetch_forecast(
    client: &Client,
    region: &Region,
) -> Result<Vec<ForecastSample>, ForecastError> {
    info!(
        "Fetching forecast for {} ({}, {})",
        region.name, region.latitude, region.longitude
    );

    let weather: WeatherResponse = get_json(client, &weather_url(region)).await?;
    let marine: MarineResponse = get_json(client, &marine_url(region)).await?;

    let samples = merge_hourly(&weather.hourly, &marine.hourly)?;
    info!("Merged {} hourly samples for {}", samples.len(), region.name);
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::{marine_url, weather_url};
    use crate::region::Region;

    #[test]
    fn test_urls_carry_region_coordinates() {
        let region = Region {
            name: "Solent".to_string(),
            latitude: 50.78,
            longitude: -1.26,
        };
        let weather = weather_url(&region);
        assert!(weather.contains("latitude=50.78"));
        assert!(weather.contains("longitude=-1.26"));
        assert!(weather.contains("wind_speed_unit=kn"));

        let marine = marine_url(&region);
        assert!(marine.contains("ocean_current_velocity"));
        assert!(marine.contains("past_days=1"));
    }
}
