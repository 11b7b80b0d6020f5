//! Selector for the forecast span shown in the table.

use crate::state::{AppState, HOUR_SPANS};
use dioxus::prelude::*;

/// Dropdown for the number of forecast hours plus the start hour input.
#[component]
pub fn HoursSelector() -> Element {
    let mut state = use_context::<AppState>();
    let hours = (state.hours_to_show)();
    let start = (state.start_time)();

    let on_hours_change = move |evt: Event<FormData>| {
        if let Ok(h) = evt.value().parse::<usize>() {
            state.hours_to_show.set(h);
        }
    };

    let on_start_change = move |evt: Event<FormData>| {
        state.start_time.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "Span [h]: "
                select {
                    onchange: on_hours_change,
                    for span in HOUR_SPANS.iter() {
                        option {
                            value: "{span}",
                            selected: *span == hours,
                            "{span}"
                        }
                    }
                }
            }
            label {
                style: "font-weight: bold;",
                "From: "
                input {
                    r#type: "datetime-local",
                    value: "{start}",
                    onchange: on_start_change,
                }
            }
        }
    }
}
