//! Dropdown selector for choosing a forecast region.

use crate::state::AppState;
use dioxus::prelude::*;
use ssp_meteo::region::Region;

/// Region dropdown selector.
/// Lists the embedded catalog and updates selected_region on change.
#[component]
pub fn RegionSelector() -> Element {
    let mut state = use_context::<AppState>();
    let regions = Region::catalog();
    let selected = (state.selected_region)();

    let on_change = move |evt: Event<FormData>| {
        state.selected_region.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "region-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Region: "
            }
            select {
                id: "region-select",
                onchange: on_change,
                for region in regions.iter() {
                    option {
                        value: "{region.name}",
                        selected: region.name == selected,
                        "{region.name}"
                    }
                }
            }
        }
    }
}
