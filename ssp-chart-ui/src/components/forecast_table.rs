//! The hourly forecast table with severity-colored wind columns.

use crate::palette::band_color;
use crate::state::AppState;
use dioxus::prelude::*;
use ssp_analysis::beaufort::beaufort;
use ssp_analysis::compass::direction_arrow;
use ssp_analysis::severity::severity_band;
use ssp_meteo::forecast::ForecastSample;

const CELL: &str = "padding: 4px 8px; border-bottom: 1px solid #eee; text-align: right;";
const HEAD: &str = "padding: 6px 8px; border-bottom: 2px solid #999; text-align: right;";

fn severity_cell(value: f64) -> String {
    format!("{CELL} background: {};", band_color(severity_band(value)))
}

fn row(index: usize, cursor: usize, sample: &ForecastSample) -> Element {
    let row_style = if index == cursor {
        "outline: 2px solid #555;"
    } else {
        ""
    };
    let time = sample.time.format("%d.%m. %H:%M").to_string();
    let wind_from = format!(
        "{} {:.0}°",
        direction_arrow(sample.wind_dir_deg),
        sample.wind_dir_deg
    );
    let wind = format!("{:.1}", sample.wind_speed_kn);
    let wind_style = severity_cell(sample.wind_speed_kn);
    let bft = beaufort(sample.wind_speed_kn).to_string();
    let gusts = format!("{:.1}", sample.wind_gust_kn);
    let gust_style = severity_cell(sample.wind_gust_kn);
    let wave = format!("{:.1}", sample.wave_height_m);
    let wave_from = format!(
        "{} {:.0}°",
        direction_arrow(sample.wave_dir_deg),
        sample.wave_dir_deg
    );
    let current = format!("{:.1}", sample.current_speed_kn);
    let current_to = format!("{:.0}°", sample.current_dir_deg);
    let rain = format!("{:.1}", sample.precipitation_mm);
    let pressure = format!("{:.1}", sample.pressure_hpa);

    rsx! {
        tr {
            style: row_style,
            td { style: CELL, "{time}" }
            td { style: CELL, "{wind_from}" }
            td { style: wind_style, "{wind}" }
            td { style: CELL, "{bft}" }
            td { style: gust_style, "{gusts}" }
            td { style: CELL, "{wave}" }
            td { style: CELL, "{wave_from}" }
            td { style: CELL, "{current}" }
            td { style: CELL, "{current_to}" }
            td { style: CELL, "{rain}" }
            td { style: CELL, "{pressure}" }
        }
    }
}

/// One row per loaded forecast hour. Wind and gust cells carry the
/// severity band background; the row under the cursor is outlined.
#[component]
pub fn ForecastTable() -> Element {
    let state = use_context::<AppState>();
    let session = state.session.read();
    if session.is_empty() {
        return rsx! {};
    }
    let cursor = session.cursor();

    rsx! {
        table {
            style: "border-collapse: collapse; width: 100%; font-size: 13px;",
            thead {
                tr {
                    th { style: HEAD, "Time" }
                    th { style: HEAD, "Wind from" }
                    th { style: HEAD, "Wind (kn)" }
                    th { style: HEAD, "Bft" }
                    th { style: HEAD, "Gusts (kn)" }
                    th { style: HEAD, "Wave (m)" }
                    th { style: HEAD, "Wave from" }
                    th { style: HEAD, "Current (kn)" }
                    th { style: HEAD, "Current to" }
                    th { style: HEAD, "Rain (mm)" }
                    th { style: HEAD, "Pressure" }
                }
            }
            tbody {
                for (i, sample) in session.samples().iter().enumerate() {
                    {row(i, cursor, sample)}
                }
            }
        }
    }
}
