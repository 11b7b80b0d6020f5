//! Strategic Sail Planner dashboard.
//!
//! One page composing the planner: region/course/span controls, a load
//! button, the hourly forecast table with severity-colored wind columns,
//! the barograph with the falling-pressure alarm, the rig and sea-state
//! advisories, and the polar nautical chart navigable hour by hour.
//!
//! Data flow:
//! 1. The load button fetches the Open-Meteo weather + marine feeds and
//!    merges them into `ForecastSession` (replacing any prior snapshot).
//! 2. The barograph window around "now" is projected once per load.
//! 3. `use_effect` hooks re-render the D3 charts whenever the snapshot,
//!    the cursor or the course changes.

use chrono::{Local, NaiveDateTime};
use dioxus::prelude::*;
use ssp_analysis::chart::build_nautical_chart;
use ssp_analysis::pressure::{pressure_window, TrendConfig};
use ssp_chart_ui::components::{
    AdvisoryBanner, ChartContainer, ChartHeader, CourseInput, ErrorDisplay, ForecastTable,
    HourNavigator, HoursSelector, LoadingSpinner, RegionSelector,
};
use ssp_chart_ui::js_bridge;
use ssp_chart_ui::state::AppState;
use ssp_meteo::client::fetch_forecast;
use ssp_meteo::forecast::{filter_from, truncate_to_hour, TIME_FORMAT};
use ssp_meteo::region::Region;

/// Chart container DOM element IDs used by D3.js to render into.
const BAROGRAPH_ID: &str = "barograph-chart";
const POLAR_CHART_ID: &str = "nautical-chart";

/// Fixed barograph y-range in hPa, so excursions read at the same scale
/// across loads.
const PRESSURE_Y_MIN: f64 = 980.0;
const PRESSURE_Y_MAX: f64 = 1045.0;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("planner-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // One complete load cycle: fetch, window, replace the session wholesale.
    let on_load = move |_| {
        let region_name = (state.selected_region)();
        let hours = (state.hours_to_show)();
        let start_str = (state.start_time)();
        state.loading.set(true);
        state.error_msg.set(None);

        spawn(async move {
            let Some(region) = Region::find(&region_name) else {
                state
                    .error_msg
                    .set(Some(format!("Unknown region: {region_name}")));
                state.loading.set(false);
                return;
            };

            let client = reqwest::Client::new();
            match fetch_forecast(&client, &region).await {
                Ok(samples) => {
                    let now = truncate_to_hour(Local::now().naive_local());
                    let start = NaiveDateTime::parse_from_str(&start_str, TIME_FORMAT)
                        .map(truncate_to_hour)
                        .unwrap_or(now);

                    state
                        .pressure
                        .set(pressure_window(&samples, now, &TrendConfig::default()));
                    state
                        .session
                        .write()
                        .load(filter_from(&samples, start, hours));
                    state.loading.set(false);
                }
                Err(e) => {
                    log::error!("Forecast fetch for {} failed: {:?}", region.name, e);
                    state
                        .error_msg
                        .set(Some(format!("Forecast fetch failed: {e:?}")));
                    state.loading.set(false);
                }
            }
        });
    };

    // Re-render the barograph whenever the pressure window changes.
    use_effect(move || {
        let window = state.pressure.read().clone();
        if window.is_empty() {
            js_bridge::destroy_chart(BAROGRAPH_ID);
            return;
        }

        js_bridge::init_charts();

        let points: Vec<serde_json::Value> = window
            .iter()
            .map(|sample| {
                serde_json::json!({
                    "time": sample.time.format(TIME_FORMAT).to_string(),
                    "pressure_hpa": sample.pressure_hpa,
                })
            })
            .collect();
        let data_json = serde_json::to_string(&points).unwrap_or_default();

        let now = truncate_to_hour(Local::now().naive_local());
        let config_json = serde_json::to_string(&serde_json::json!({
            "title": "Barograph",
            "yMin": PRESSURE_Y_MIN,
            "yMax": PRESSURE_Y_MAX,
            "nowTime": now.format(TIME_FORMAT).to_string(),
        }))
        .unwrap_or_default();

        js_bridge::render_barograph(BAROGRAPH_ID, &data_json, &config_json);
    });

    // Re-render the polar chart on cursor or course changes.
    use_effect(move || {
        let course = (state.course_deg)();
        let session = state.session.read();
        let Some(sample) = session.current() else {
            js_bridge::destroy_chart(POLAR_CHART_ID);
            return;
        };

        js_bridge::init_charts();

        let chart = build_nautical_chart(course, sample);
        let data_json = serde_json::to_string(&chart.vectors()).unwrap_or_default();
        let config_json = serde_json::to_string(&serde_json::json!({
            "title": format!("Center view for {}", sample.time.format("%d.%m. %H:%M")),
            "radialMax": chart.radial_max(),
            "colors": {
                "course": "gray",
                "wind": "blue",
                "wave": "green",
                "current": "red",
            },
        }))
        .unwrap_or_default();

        js_bridge::render_polar_chart(POLAR_CHART_ID, &data_json, &config_json);
    });

    let has_data = !state.session.read().is_empty();

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "⛵ Strategic Sail Planner".to_string(),
                unit_description: "Open-Meteo wind + marine forecast; speeds in knots, pressure in hPa".to_string(),
            }

            div {
                style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: flex-end; margin-bottom: 8px;",
                RegionSelector {}
                CourseInput {}
                HoursSelector {}
                button {
                    style: "padding: 6px 16px; font-weight: bold;",
                    onclick: on_load,
                    "Load strategy data"
                }
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else if has_data {
                AdvisoryBanner {}

                ChartContainer {
                    id: BAROGRAPH_ID.to_string(),
                    loading: false,
                    min_height: 340,
                }

                ForecastTable {}

                HourNavigator {}

                ChartContainer {
                    id: POLAR_CHART_ID.to_string(),
                    loading: false,
                    min_height: 500,
                }
            } else {
                div {
                    style: "padding: 24px; color: #666;",
                    "Pick a region and press \"Load strategy data\" to fetch the forecast."
                }
            }
        }
    }
}
