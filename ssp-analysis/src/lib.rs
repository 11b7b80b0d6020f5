//! Pure classification and chart math for the sail planner.
//!
//! Everything in this crate is a stateless function of forecast values:
//! Beaufort forces, severity bands, wind-against-current and reefing
//! advisories, the barometric trend, compass sectors and the scaled polar
//! vectors for the nautical chart.

pub mod beaufort;
pub mod chart;
pub mod compass;
pub mod hazard;
pub mod pressure;
pub mod severity;
