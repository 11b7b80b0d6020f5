//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use ssp_analysis::pressure::PressureSample;
use ssp_meteo::session::ForecastSession;

/// Hour-span choices offered by the dashboard.
pub const HOUR_SPANS: [usize; 4] = [8, 24, 48, 72];

/// Shared application state for the planner dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// The loaded forecast snapshot plus the cursor into it
    pub session: Signal<ForecastSession>,
    /// Barograph window around "now", rebuilt on each load
    pub pressure: Signal<Vec<PressureSample>>,
    /// Whether a fetch is in flight
    pub loading: Signal<bool>,
    /// Error message if the last fetch went wrong
    pub error_msg: Signal<Option<String>>,
    /// Currently selected region name (catalog key)
    pub selected_region: Signal<String>,
    /// Own course over ground in degrees
    pub course_deg: Signal<f64>,
    /// How many forecast hours to show in the table
    pub hours_to_show: Signal<usize>,
    /// Start hour as entered in the datetime-local input (empty = now)
    pub start_time: Signal<String>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            session: Signal::new(ForecastSession::new()),
            pressure: Signal::new(Vec::new()),
            loading: Signal::new(false),
            error_msg: Signal::new(None),
            selected_region: Signal::new("Corfu (North)".to_string()),
            course_deg: Signal::new(0.0),
            hours_to_show: Signal::new(24),
            start_time: Signal::new(String::new()),
        }
    }
}
