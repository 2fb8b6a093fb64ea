//! Weather domain module.
//!
//! Upstream access for the weather tools:
//! - `client.rs` - the WeatherAPI.com HTTP client and the [`WeatherApi`] seam
//! - `date.rs` - `YYYY-MM-DD` validation for date parameters
//! - `error.rs` - the error taxonomy surfaced to tool callers

pub mod client;
pub mod date;
mod error;

pub use client::{DEFAULT_BASE_URL, Endpoint, QueryParams, WeatherApi, WeatherApiClient};
pub use date::validate_date;
pub use error::{WeatherError, WeatherResult};
