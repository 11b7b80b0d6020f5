//! Number input for the boat's course over ground.

use crate::state::AppState;
use dioxus::prelude::*;

/// Course over ground input, 0-360 degrees.
#[component]
pub fn CourseInput() -> Element {
    let mut state = use_context::<AppState>();
    let course = (state.course_deg)();

    let on_change = move |evt: Event<FormData>| {
        if let Ok(deg) = evt.value().parse::<f64>() {
            state.course_deg.set(deg.clamp(0.0, 360.0));
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                style: "font-weight: bold;",
                "My CoG [°]: "
                input {
                    r#type: "number",
                    value: "{course}",
                    min: "0",
                    max: "360",
                    step: "1",
                    style: "width: 70px;",
                    onchange: on_change,
                }
            }
        }
    }
}
