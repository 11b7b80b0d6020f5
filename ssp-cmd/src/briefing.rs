//! Terminal briefing: hourly forecast table, barometer trend and the
//! advisories for the selected hour.

use anyhow::Context;
use chrono::{Local, NaiveDateTime};
use log::info;
use ssp_analysis::beaufort::beaufort;
use ssp_analysis::chart::{build_nautical_chart, ChartVector, VectorKind};
use ssp_analysis::compass::direction_arrow;
use ssp_analysis::hazard::{steep_wave_hazard, ReefAdvisory};
use ssp_analysis::pressure::{analyze_trend, pressure_window, Tier, Trend, TrendConfig};
use ssp_analysis::severity::{severity_band, Band};
use ssp_meteo::client::fetch_forecast;
use ssp_meteo::forecast::{filter_from, truncate_to_hour, ForecastSample, TIME_FORMAT};
use ssp_meteo::region::Region;
use ssp_meteo::session::ForecastSession;

pub async fn run_briefing(
    region_name: &str,
    course_deg: f64,
    hours: usize,
    at: Option<String>,
) -> anyhow::Result<()> {
    let region = Region::find(region_name)
        .with_context(|| format!("unknown region '{region_name}', try the `regions` command"))?;

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()?;

    let samples = fetch_forecast(&client, &region)
        .await
        .map_err(|e| anyhow::anyhow!("forecast fetch for {} failed: {:?}", region.name, e))?;

    let now = truncate_to_hour(Local::now().naive_local());
    let start = match at {
        Some(s) => NaiveDateTime::parse_from_str(&s, TIME_FORMAT)
            .context("start time must look like 2026-08-23T14:00")?,
        None => now,
    };

    let mut session = ForecastSession::new();
    session.load(filter_from(&samples, start, hours));
    if session.is_empty() {
        anyhow::bail!("no forecast hours at or after {start}");
    }
    info!(
        "Briefing for {}: {} hours from {}",
        region.name,
        session.len(),
        start
    );

    println!("Strategic briefing: {}\n", region.name);
    print_table(session.samples());
    println!();
    print_trend(&samples, now);
    println!();
    // the table starts at the requested hour, so the first row is "current"
    if let Some(current) = session.current() {
        print_advisories(current, course_deg);
    }
    Ok(())
}

fn band_label(band: Band) -> &'static str {
    match band {
        Band::Calm => "calm",
        Band::Chill => "chill",
        Band::Ideal => "ideal",
        Band::Strong => "strong",
        Band::Gale => "GALE",
    }
}

fn format_row(sample: &ForecastSample) -> String {
    format!(
        "{}  {} {:>3.0}°  {:>5.1} kn  Bft {:>2}  {:<6}  {:>5.1} kn  {:>4.1} m {:>3.0}°  {:>4.1} kn {:>3.0}°  {:>4.1} mm  {:>6.1} hPa",
        sample.time.format("%d.%m. %H:%M"),
        direction_arrow(sample.wind_dir_deg),
        sample.wind_dir_deg,
        sample.wind_speed_kn,
        beaufort(sample.wind_speed_kn),
        band_label(severity_band(sample.wind_speed_kn)),
        sample.wind_gust_kn,
        sample.wave_height_m,
        sample.wave_dir_deg,
        sample.current_speed_kn,
        sample.current_dir_deg,
        sample.precipitation_mm,
        sample.pressure_hpa,
    )
}

fn print_table(samples: &[ForecastSample]) {
    println!(
        "{:<12}  {:<10}  {:<8}  {:<6}  {:<6}  {:<8}  {:<11}  {:<10}  {:<7}  {}",
        "TIME", "WIND FROM", "WIND", "BFT", "BAND", "GUSTS", "WAVE", "CURRENT", "RAIN", "PRESSURE"
    );
    for sample in samples {
        println!("{}", format_row(sample));
    }
}

fn print_trend(samples: &[ForecastSample], now: NaiveDateTime) {
    let window = pressure_window(samples, now, &TrendConfig::default());
    match analyze_trend(&window) {
        Trend::InsufficientData => {
            println!("Barometer: not enough readings for a 3h trend.");
        }
        Trend::Evaluated { delta_hpa, tier } => match tier {
            Tier::Alarm => println!(
                "BAROMETER ALARM: pressure fell {delta_hpa:.1} hPa in 3h. Strong wind risk!"
            ),
            Tier::Watch => println!(
                "Caution: pressure falling ({delta_hpa:.1} hPa/3h). Watch the weather."
            ),
            Tier::Stable => println!("Pressure stable ({delta_hpa:+.1} hPa/3h)."),
        },
    }
}

fn vector_label(kind: VectorKind) -> &'static str {
    match kind {
        VectorKind::Course => "course",
        VectorKind::Wind => "wind",
        VectorKind::Wave => "wave",
        VectorKind::Current => "current",
    }
}

fn format_vector(vector: &ChartVector) -> String {
    format!(
        "  {:<8} from {:>5.1}°  r={:.1}",
        vector_label(vector.kind),
        vector.direction_deg,
        vector.magnitude
    )
}

fn print_advisories(current: &ForecastSample, course_deg: f64) {
    println!("{}", ReefAdvisory::from_gust(current.wind_gust_kn).headline());

    if steep_wave_hazard(current) {
        println!("WARNING: wind against current! Expect steep, short waves.");
    } else {
        println!("Sea state: no critical wind-current setup.");
    }

    println!("\nNautical chart vectors for {}:", current.time.format("%d.%m. %H:%M"));
    let chart = build_nautical_chart(course_deg, current);
    for vector in chart.vectors() {
        println!("{}", format_vector(vector));
    }
}

#[cfg(test)]
mod tests {
    use super::{format_row, format_vector};
    use ssp_analysis::chart::{ChartVector, VectorKind};
    use ssp_meteo::forecast::ForecastSample;
    use chrono::NaiveDate;

    #[test]
    fn test_format_row() {
        let sample = ForecastSample {
            time: NaiveDate::from_ymd_opt(2026, 8, 23)
                .unwrap()
                .and_hms_opt(14, 0, 0)
                .unwrap(),
            wind_speed_kn: 16.3,
            wind_dir_deg: 320.0,
            wind_gust_kn: 21.0,
            wave_height_m: 1.2,
            wave_dir_deg: 310.0,
            current_speed_kn: 0.4,
            current_dir_deg: 140.0,
            precipitation_mm: 0.0,
            pressure_hpa: 1013.4,
        };
        let row = format_row(&sample);
        assert!(row.starts_with("23.08. 14:00"));
        assert!(row.contains("Bft  5"));
        assert!(row.contains("strong"));
        assert!(row.contains("1013.4 hPa"));
    }

    #[test]
    fn test_format_vector() {
        let vector = ChartVector {
            kind: VectorKind::Current,
            direction_deg: 270.0,
            magnitude: 2.0,
        };
        assert_eq!(format_vector(&vector), "  current  from 270.0°  r=2.0");
    }
}
