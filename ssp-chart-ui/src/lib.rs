//! Shared Dioxus components and D3.js bridge for the sail planner dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3 barograph and polar chart via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `palette`: severity band and trend tier colors
//! - `components`: Reusable RSX components (selectors, table, advisories, etc.)

pub mod components;
pub mod js_bridge;
pub mod palette;
pub mod state;
