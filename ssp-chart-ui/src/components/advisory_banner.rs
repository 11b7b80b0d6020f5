//! Advisory banners: rig (reefing), sea state and barometer trend.

use crate::palette::tier_color;
use crate::state::AppState;
use dioxus::prelude::*;
use ssp_analysis::hazard::{steep_wave_hazard, ReefAdvisory};
use ssp_analysis::pressure::{analyze_trend, Tier, Trend};

fn reef_color(advisory: ReefAdvisory) -> &'static str {
    match advisory {
        ReefAdvisory::FullSail => "#78E94C",
        ReefAdvisory::Reef1 | ReefAdvisory::Reef2 => "#ffa500",
        ReefAdvisory::Reef3 => "#ff4b4b",
    }
}

const BOX_STYLE: &str =
    "flex: 1; min-width: 220px; padding: 10px 14px; border-radius: 4px; color: #222;";

fn boxed(background: &str) -> String {
    format!("{BOX_STYLE} background: {background};")
}

/// Advisories for the hour under the cursor plus the barometer trend
/// over the window around now.
#[component]
pub fn AdvisoryBanner() -> Element {
    let state = use_context::<AppState>();
    let session = state.session.read();
    let Some(current) = session.current() else {
        return rsx! {};
    };

    let reef = ReefAdvisory::from_gust(current.wind_gust_kn);
    let reef_text = reef.headline();
    let reef_style = boxed(reef_color(reef));

    let (sea_text, sea_color) = if steep_wave_hazard(current) {
        (
            "❗ WARNING: wind against current! Expect steep, short waves.",
            "#ff4b4b",
        )
    } else {
        ("Sea state: no critical wind-current setup.", "#56dbec")
    };
    let sea_style = boxed(sea_color);

    let (trend_text, trend_color) = match analyze_trend(&state.pressure.read()) {
        Trend::InsufficientData => (
            "Barometer: not enough readings for a 3h trend.".to_string(),
            "#CECECE",
        ),
        Trend::Evaluated { delta_hpa, tier } => {
            let text = match tier {
                Tier::Alarm => format!(
                    "🚨 BAROMETER ALARM: pressure fell {delta_hpa:.1} hPa in 3h. Strong wind risk!"
                ),
                Tier::Watch => format!(
                    "⚠️ Caution: pressure falling ({delta_hpa:.1} hPa/3h). Watch the weather."
                ),
                Tier::Stable => format!("⚖️ Pressure stable ({delta_hpa:+.1} hPa/3h)."),
            };
            (text, tier_color(tier))
        }
    };
    let trend_style = boxed(trend_color);

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 12px; margin: 12px 0;",
            div {
                style: reef_style,
                "{reef_text}"
            }
            div {
                style: sea_style,
                "{sea_text}"
            }
            div {
                style: trend_style,
                "{trend_text}"
            }
        }
    }
}
