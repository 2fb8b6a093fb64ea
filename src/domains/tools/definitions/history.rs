//! Historical weather tool.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use super::ToolDefinition;
use crate::domains::weather::{Endpoint, WeatherApi, WeatherResult, validate_date};

/// Parameters for the history tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WeatherHistoryParams {
    #[schemars(description = "Location: city name, 'lat,lon', postcode, IATA code or IP address")]
    pub q: String,

    #[schemars(description = "Date in YYYY-MM-DD format")]
    pub dt: String,
}

/// History tool - forwards to `history.json`.
#[derive(Debug, Clone)]
pub struct WeatherHistoryTool;

#[async_trait]
impl ToolDefinition for WeatherHistoryTool {
    const NAME: &'static str = "weather_history";
    const DESCRIPTION: &'static str =
        "Get historical weather for a location on a given date (YYYY-MM-DD).";

    type Params = WeatherHistoryParams;

    #[instrument(skip_all, fields(q = %params.q, dt = %params.dt))]
    async fn execute(params: &Self::Params, api: &dyn WeatherApi) -> WeatherResult<Value> {
        validate_date(&params.dt)?;

        api.fetch(
            Endpoint::History,
            vec![("q", params.q.clone()), ("dt", params.dt.clone())],
        )
        .await
    }
}
