//! Reusable Dioxus RSX components for the planner dashboard.

mod advisory_banner;
mod chart_container;
mod chart_header;
mod course_input;
mod error_display;
mod forecast_table;
mod hour_navigator;
mod hours_selector;
mod loading_spinner;
mod region_selector;

pub use advisory_banner::AdvisoryBanner;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use course_input::CourseInput;
pub use error_display::ErrorDisplay;
pub use forecast_table::ForecastTable;
pub use hour_navigator::HourNavigator;
pub use hours_selector::HoursSelector;
pub use loading_spinner::LoadingSpinner;
pub use region_selector::RegionSelector;
