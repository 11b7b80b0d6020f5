//! Earlier/later navigation over the loaded forecast hours.

use crate::state::AppState;
use dioxus::prelude::*;

/// Buttons stepping the session cursor, with the selected hour in between.
/// The cursor is clamped inside `ForecastSession`, so the buttons are
/// always safe to click.
#[component]
pub fn HourNavigator() -> Element {
    let mut state = use_context::<AppState>();
    let label = state
        .session
        .read()
        .current()
        .map(|sample| sample.time.format("%d.%m. %H:%M").to_string())
        .unwrap_or_default();

    let on_earlier = move |_| {
        state.session.write().step_earlier();
    };
    let on_later = move |_| {
        state.session.write().step_later();
    };

    rsx! {
        div {
            style: "display: flex; gap: 16px; align-items: center; justify-content: center; margin: 8px 0;",
            button {
                onclick: on_earlier,
                "⬅️ Earlier"
            }
            strong { "Showing: {label}" }
            button {
                onclick: on_later,
                "Later ➡️"
            }
        }
    }
}
