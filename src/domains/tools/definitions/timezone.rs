//! Time zone tool.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use super::ToolDefinition;
use crate::domains::weather::{Endpoint, WeatherApi, WeatherResult};

/// Parameters for the timezone tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WeatherTimezoneParams {
    #[schemars(description = "Location: city name, 'lat,lon', postcode, IATA code or IP address")]
    pub q: String,
}

#[derive(Debug, Clone)]
pub struct WeatherTimezoneTool;

#[async_trait]
impl ToolDefinition for WeatherTimezoneTool {
    const NAME: &'static str = "weather_timezone";
    const DESCRIPTION: &'static str = "Get timezone info for a location.";

    type Params = WeatherTimezoneParams;

    #[instrument(skip_all, fields(q = %params.q))]
    async fn execute(params: &Self::Params, api: &dyn WeatherApi) -> WeatherResult<Value> {
        api.fetch(Endpoint::Timezone, vec![("q", params.q.clone())]).await
    }
}
