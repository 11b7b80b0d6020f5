//! Container div the D3 charts render into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id the render call targets (barograph or nautical chart)
    pub id: String,
    /// Show the overlay while a fetch is still in flight
    #[props(default = false)]
    pub loading: bool,
    /// Reserved height so the layout holds still until D3 draws;
    /// the barograph fits in 340px, the polar rose wants 500px
    #[props(default = 340)]
    pub min_height: u32,
}

fn container_style(min_height: u32) -> String {
    format!("min-height: {min_height}px; position: relative; width: 100%;")
}

/// Placeholder the JS bridge draws into. The bridge polls for the id
/// before rendering, so the div only has to exist, not be sized yet.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = container_style(props.min_height);

    rsx! {
        div {
            style: "{style}",
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
                    "Waiting for forecast data..."
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::container_style;

    #[test]
    fn test_container_reserves_height() {
        assert_eq!(
            container_style(500),
            "min-height: 500px; position: relative; width: 100%;"
        );
    }
}
