//! Air quality tool.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use super::ToolDefinition;
use crate::domains::weather::{Endpoint, WeatherApi, WeatherResult};

/// Parameters for the air quality tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WeatherAirQualityParams {
    #[schemars(description = "Location: city name, 'lat,lon', postcode, IATA code or IP address")]
    pub q: String,
}

/// Air quality tool - current conditions with `aqi=yes` forced on.
#[derive(Debug, Clone)]
pub struct WeatherAirQualityTool;

#[async_trait]
impl ToolDefinition for WeatherAirQualityTool {
    const NAME: &'static str = "weather_airquality";
    const DESCRIPTION: &'static str = "Get air quality for a location.";

    type Params = WeatherAirQualityParams;

    #[instrument(skip_all, fields(q = %params.q))]
    async fn execute(params: &Self::Params, api: &dyn WeatherApi) -> WeatherResult<Value> {
        api.fetch(
            Endpoint::Current,
            vec![("q", params.q.clone()), ("aqi", "yes".to_string())],
        )
        .await
    }
}
