//! Weather alerts tool.
//!
//! WeatherAPI.com has no dedicated alerts endpoint; alerts ride along with a
//! one-day forecast requested with `alerts=yes`.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use super::ToolDefinition;
use crate::domains::weather::{Endpoint, WeatherApi, WeatherResult};

/// Parameters for the alerts tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WeatherAlertsParams {
    #[schemars(description = "Location: city name, 'lat,lon', postcode, IATA code or IP address")]
    pub q: String,
}

/// Alerts tool - forwards to `forecast.json` with `days=1&alerts=yes`.
#[derive(Debug, Clone)]
pub struct WeatherAlertsTool;

#[async_trait]
impl ToolDefinition for WeatherAlertsTool {
    const NAME: &'static str = "weather_alerts";
    const DESCRIPTION: &'static str = "Get weather alerts for a location.";

    type Params = WeatherAlertsParams;

    #[instrument(skip_all, fields(q = %params.q))]
    async fn execute(params: &Self::Params, api: &dyn WeatherApi) -> WeatherResult<Value> {
        api.fetch(
            Endpoint::Forecast,
            vec![
                ("q", params.q.clone()),
                ("days", "1".to_string()),
                ("alerts", "yes".to_string()),
            ],
        )
        .await
    }
}
