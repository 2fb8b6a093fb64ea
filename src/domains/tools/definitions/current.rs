//! Current weather tool.
//!
//! Real-time conditions for a location, optionally with air quality.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use super::ToolDefinition;
use super::common::default_flag;
use crate::domains::weather::{Endpoint, WeatherApi, WeatherResult};

/// Parameters for the current weather tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WeatherCurrentParams {
    /// Location query.
    #[schemars(description = "Location: city name, 'lat,lon', postcode, IATA code or IP address")]
    pub q: String,

    /// Include air quality data ("yes" or "no").
    #[schemars(description = "Include air quality data: \"yes\" or \"no\" (default: \"no\")")]
    #[serde(default = "default_flag")]
    pub aqi: String,
}

/// Current weather tool - forwards to `current.json`.
#[derive(Debug, Clone)]
pub struct WeatherCurrentTool;

#[async_trait]
impl ToolDefinition for WeatherCurrentTool {
    const NAME: &'static str = "weather_current";
    const DESCRIPTION: &'static str = "Get current weather for a location.";

    type Params = WeatherCurrentParams;

    #[instrument(skip_all, fields(q = %params.q))]
    async fn execute(params: &Self::Params, api: &dyn WeatherApi) -> WeatherResult<Value> {
        api.fetch(
            Endpoint::Current,
            vec![("q", params.q.clone()), ("aqi", params.aqi.clone())],
        )
        .await
    }
}
