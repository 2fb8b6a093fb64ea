//! Sports events tool.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use super::ToolDefinition;
use crate::domains::weather::{Endpoint, WeatherApi, WeatherResult};

/// Parameters for the sports tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WeatherSportsParams {
    #[schemars(description = "Location: city name, 'lat,lon', postcode, IATA code or IP address")]
    pub q: String,
}

/// Sports tool - upcoming football, cricket and golf events near a location.
#[derive(Debug, Clone)]
pub struct WeatherSportsTool;

#[async_trait]
impl ToolDefinition for WeatherSportsTool {
    const NAME: &'static str = "weather_sports";
    const DESCRIPTION: &'static str = "Get sports events (e.g., football, cricket) for a location.";

    type Params = WeatherSportsParams;

    #[instrument(skip_all, fields(q = %params.q))]
    async fn execute(params: &Self::Params, api: &dyn WeatherApi) -> WeatherResult<Value> {
        api.fetch(Endpoint::Sports, vec![("q", params.q.clone())]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::testing::RecordingApi;

    #[tokio::test]
    async fn test_sports_endpoint() {
        let api = RecordingApi::default();
        let p = WeatherSportsParams {
            q: "Manchester".to_string(),
        };
        let doc = WeatherSportsTool::execute(&p, &api).await.unwrap();
        assert_eq!(doc["endpoint"], "sports.json");
    }
}
