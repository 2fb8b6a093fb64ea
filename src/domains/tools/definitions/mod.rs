//! Tool definitions module.
//!
//! Each weather tool is defined in its own file with:
//! - a parameters struct (deserialized from the call, schema via schemars)
//! - a [`ToolDefinition`] impl naming the tool and running the operation
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file (e.g., `marine.rs`)
//! 2. Implement the `ToolDefinition` trait
//! 3. Export it here
//! 4. Register it in `registry.rs` and `router.rs`

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domains::weather::{WeatherApi, WeatherResult};

pub mod air_quality;
pub mod alerts;
pub mod astronomy;
pub mod common;
pub mod current;
pub mod forecast;
pub mod history;
pub mod search;
pub mod sports;
pub mod timezone;

pub use air_quality::{WeatherAirQualityParams, WeatherAirQualityTool};
pub use alerts::{WeatherAlertsParams, WeatherAlertsTool};
pub use astronomy::{WeatherAstronomyParams, WeatherAstronomyTool};
pub use current::{WeatherCurrentParams, WeatherCurrentTool};
pub use forecast::{WeatherForecastParams, WeatherForecastTool};
pub use history::{WeatherHistoryParams, WeatherHistoryTool};
pub use search::{WeatherSearchParams, WeatherSearchTool};
pub use sports::{WeatherSportsParams, WeatherSportsTool};
pub use timezone::{WeatherTimezoneParams, WeatherTimezoneTool};

/// Trait for weather tool definitions.
///
/// Each tool must implement this trait to provide its metadata and the
/// upstream call it performs.
#[async_trait]
pub trait ToolDefinition: Send + Sync + 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Arguments accepted by the tool.
    type Params: DeserializeOwned + JsonSchema + Send + Sync + 'static;

    /// Validate the arguments and fetch the upstream document unchanged.
    async fn execute(params: &Self::Params, api: &dyn WeatherApi) -> WeatherResult<Value>;
}
