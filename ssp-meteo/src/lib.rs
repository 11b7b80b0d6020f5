pub mod forecast;
pub mod region;
pub mod session;

#[cfg(feature = "api")]
pub mod client;
