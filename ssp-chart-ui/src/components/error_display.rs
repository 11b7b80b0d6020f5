//! Error banner for failed fetches and unknown regions.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    /// Message from the load cycle, e.g. "Forecast fetch failed: ..."
    pub message: String,
}

/// Red banner shown instead of the dashboard body until the next load
/// attempt. The border picks up the palette's alarm red.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #ffe5e5; color: #a32020; border-radius: 4px; border: 1px solid #ff4b4b;",
            strong { "⚠️ Could not load the forecast: " }
            "{props.message}"
        }
    }
}
