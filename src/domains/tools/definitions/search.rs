//! Location search tool.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use super::ToolDefinition;
use crate::domains::weather::{Endpoint, WeatherApi, WeatherResult};

/// Parameters for the search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WeatherSearchParams {
    #[schemars(description = "Location: city name, 'lat,lon', postcode, IATA code or IP address")]
    pub q: String,
}

/// Location search tool - forwards to `search.json`.
#[derive(Debug, Clone)]
pub struct WeatherSearchTool;

#[async_trait]
impl ToolDefinition for WeatherSearchTool {
    const NAME: &'static str = "weather_search";
    const DESCRIPTION: &'static str = "Search for locations matching query.";

    type Params = WeatherSearchParams;

    #[instrument(skip_all, fields(q = %params.q))]
    async fn execute(params: &Self::Params, api: &dyn WeatherApi) -> WeatherResult<Value> {
        api.fetch(Endpoint::Search, vec![("q", params.q.clone())]).await
    }
}
