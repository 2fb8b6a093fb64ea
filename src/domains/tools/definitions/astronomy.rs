//! Astronomy tool.
//!
//! Sunrise, sunset, moonrise, moonset and moon phase for a date.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use super::ToolDefinition;
use crate::domains::weather::{Endpoint, WeatherApi, WeatherResult, validate_date};

/// Parameters for the astronomy tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WeatherAstronomyParams {
    #[schemars(description = "Location: city name, 'lat,lon', postcode, IATA code or IP address")]
    pub q: String,

    #[schemars(description = "Date in YYYY-MM-DD format")]
    pub dt: String,
}

#[derive(Debug, Clone)]
pub struct WeatherAstronomyTool;

#[async_trait]
impl ToolDefinition for WeatherAstronomyTool {
    const NAME: &'static str = "weather_astronomy";
    const DESCRIPTION: &'static str =
        "Get astronomy data (sunrise, sunset, moon) for a date (YYYY-MM-DD).";

    type Params = WeatherAstronomyParams;

    #[instrument(skip_all, fields(q = %params.q, dt = %params.dt))]
    async fn execute(params: &Self::Params, api: &dyn WeatherApi) -> WeatherResult<Value> {
        validate_date(&params.dt)?;

        api.fetch(
            Endpoint::Astronomy,
            vec![("q", params.q.clone()), ("dt", params.dt.clone())],
        )
        .await
    }
}
