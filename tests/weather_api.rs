//! Integration tests for the weather tools using wiremock
//!
//! These tests drive the real reqwest client against a mock WeatherAPI.com
//! server and check what reaches the upstream and what the caller sees.

use std::sync::Arc;

use serde_json::{Value, json};
use weather_mcp_server::domains::tools::ToolRegistry;
use weather_mcp_server::domains::tools::definitions::common::result_text;
use weather_mcp_server::domains::weather::{Endpoint, WeatherApi, WeatherApiClient, WeatherError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{any, method, path, query_param},
};

const TEST_KEY: &str = "test-key";

fn create_test_client(mock_server: &MockServer, key: Option<&str>) -> WeatherApiClient {
    #[allow(clippy::expect_used)]
    WeatherApiClient::new(mock_server.uri(), key.map(str::to_string))
        .expect("Failed to create client")
}

fn create_registry(mock_server: &MockServer, key: Option<&str>) -> ToolRegistry {
    ToolRegistry::new(Arc::new(create_test_client(mock_server, key)))
}

fn sample_current_response() -> Value {
    json!({
        "location": {
            "name": "London",
            "region": "City of London, Greater London",
            "country": "United Kingdom",
            "lat": 51.52,
            "lon": -0.11,
            "tz_id": "Europe/London",
            "localtime": "2024-01-15 12:00"
        },
        "current": {
            "temp_c": 5.0,
            "condition": { "text": "Partly cloudy", "code": 1003 },
            "air_quality": { "co": 230.3, "pm2_5": 4.5, "us-epa-index": 1 }
        }
    })
}

/// Parse the document carried in a tool result's text content.
fn payload(result: &rmcp::model::CallToolResult) -> Value {
    serde_json::from_str(result_text(result).unwrap_or_default()).unwrap_or(Value::Null)
}

// ============================================================================
// Parameter forwarding
// ============================================================================

#[tokio::test]
async fn test_airquality_calls_current_with_aqi_yes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/current.json"))
        .and(query_param("q", "London"))
        .and(query_param("aqi", "yes"))
        .and(query_param("key", TEST_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_current_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let registry = create_registry(&mock_server, Some(TEST_KEY));
    let result = registry
        .call_tool("weather_airquality", json!({ "q": "London" }))
        .await
        .unwrap();

    assert_eq!(result.is_error, Some(false));
    assert_eq!(payload(&result), sample_current_response());
}

#[tokio::test]
async fn test_alerts_calls_forecast_with_one_day_and_alerts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .and(query_param("q", "Paris"))
        .and(query_param("days", "1"))
        .and(query_param("alerts", "yes"))
        .and(query_param("key", TEST_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "alerts": { "alert": [] } })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let registry = create_registry(&mock_server, Some(TEST_KEY));
    let result = registry
        .call_tool("weather_alerts", json!({ "q": "Paris" }))
        .await
        .unwrap();

    assert_eq!(result.is_error, Some(false));
    assert_eq!(payload(&result), json!({ "alerts": { "alert": [] } }));
}

#[tokio::test]
async fn test_forecast_forwards_every_valid_day_count() {
    let mock_server = MockServer::start().await;

    for days in 1..=14 {
        Mock::given(method("GET"))
            .and(path("/forecast.json"))
            .and(query_param("days", days.to_string()))
            .and(query_param("aqi", "no"))
            .and(query_param("alerts", "no"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "days": days })))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let registry = create_registry(&mock_server, Some(TEST_KEY));
    for days in 1..=14 {
        let result = registry
            .call_tool("weather_forecast", json!({ "q": "Berlin", "days": days }))
            .await
            .unwrap();
        assert_eq!(payload(&result), json!({ "days": days }));
    }
}

#[tokio::test]
async fn test_forecast_rejects_out_of_range_days_without_network() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let registry = create_registry(&mock_server, Some(TEST_KEY));
    for days in [
        json!(-3),
        json!(0),
        json!(15),
        json!(365),
        json!(15.0),
        json!(u64::MAX),
    ] {
        let result = registry
            .call_tool("weather_forecast", json!({ "q": "Berlin", "days": days }))
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
        let error = &result.structured_content.unwrap()["error"];
        assert_eq!(error["kind"], "invalid_argument");
        assert_eq!(error["status"], 400);
    }
}

#[tokio::test]
async fn test_forecast_whole_float_days_forwarded_as_integer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .and(query_param("days", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "days": 3 })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let registry = create_registry(&mock_server, Some(TEST_KEY));
    let result = registry
        .call_tool("weather_forecast", json!({ "q": "Oslo", "days": 3.0 }))
        .await
        .unwrap();
    assert_eq!(result.is_error, Some(false));
}

#[tokio::test]
async fn test_history_and_astronomy_validate_dates_without_network() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let registry = create_registry(&mock_server, Some(TEST_KEY));
    for tool in ["weather_history", "weather_astronomy"] {
        let result = registry
            .call_tool(tool, json!({ "q": "Rome", "dt": "2024-02-30" }))
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            result.structured_content.unwrap()["error"]["message"],
            "Invalid date: 2024-02-30. Use YYYY-MM-DD."
        );
    }
}

// ============================================================================
// Configuration errors
// ============================================================================

#[tokio::test]
async fn test_missing_key_fails_every_tool_without_network() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let registry = create_registry(&mock_server, None);
    let calls = [
        ("weather_current", json!({ "q": "London" })),
        ("weather_forecast", json!({ "q": "London", "days": 3 })),
        ("weather_history", json!({ "q": "London", "dt": "2024-01-15" })),
        ("weather_alerts", json!({ "q": "London" })),
        ("weather_airquality", json!({ "q": "London" })),
        ("weather_astronomy", json!({ "q": "London", "dt": "2024-01-15" })),
        ("weather_search", json!({ "q": "London" })),
        ("weather_timezone", json!({ "q": "London" })),
        ("weather_sports", json!({ "q": "London" })),
    ];

    for (tool, arguments) in calls {
        let result = registry.call_tool(tool, arguments).await.unwrap();
        assert_eq!(result.is_error, Some(true), "{tool} should fail");
        let error = &result.structured_content.unwrap()["error"];
        assert_eq!(error["kind"], "configuration", "{tool}");
        assert_eq!(error["status"], 500, "{tool}");
    }

    let received = mock_server.received_requests().await.unwrap_or_default();
    assert!(received.is_empty());
}

// ============================================================================
// Upstream errors
// ============================================================================

#[tokio::test]
async fn test_upstream_error_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/current.json"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "code": 1006, "message": "No matching location found." }
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server, Some(TEST_KEY));
    let err = client
        .fetch(Endpoint::Current, vec![("q", "Nowhere".to_string())])
        .await
        .unwrap_err();

    match err {
        WeatherError::Upstream { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "No matching location found.");
        }
        other => panic!("expected upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_upstream_error_surfaces_through_tool() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "code": 2006, "message": "API key is invalid." }
        })))
        .mount(&mock_server)
        .await;

    let registry = create_registry(&mock_server, Some("wrong-key"));
    let result = registry
        .call_tool("weather_search", json!({ "q": "Lima" }))
        .await
        .unwrap();

    assert_eq!(result.is_error, Some(true));
    assert_eq!(
        result.structured_content.unwrap(),
        json!({
            "error": { "kind": "upstream", "status": 401, "message": "API key is invalid." }
        })
    );
}

#[tokio::test]
async fn test_upstream_error_plain_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server, Some(TEST_KEY));
    let err = client
        .fetch(Endpoint::Timezone, vec![("q", "Oslo".to_string())])
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        WeatherError::Upstream { status: 503, ref message } if message == "Service Unavailable"
    ));
}

#[tokio::test]
async fn test_malformed_success_body_is_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server, Some(TEST_KEY));
    let err = client
        .fetch(Endpoint::Sports, vec![("q", "Leeds".to_string())])
        .await
        .unwrap_err();

    assert!(matches!(err, WeatherError::Transport(_)));
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn test_success_document_returned_unchanged() {
    let mock_server = MockServer::start().await;

    let document = json!({
        "location": { "name": "Cairo", "localtime_epoch": 1_705_320_000 },
        "astronomy": {
            "astro": {
                "sunrise": "06:49 AM",
                "sunset": "05:20 PM",
                "moon_phase": "Waxing Crescent",
                "moon_illumination": 21,
                "is_moon_up": 1
            }
        },
        "nested": [1, "two", null, { "three": [3.5] }, true]
    });

    Mock::given(method("GET"))
        .and(path("/astronomy.json"))
        .and(query_param("q", "Cairo"))
        .and(query_param("dt", "2024-01-15"))
        .respond_with(ResponseTemplate::new(200).set_body_json(document.clone()))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server, Some(TEST_KEY));
    let registry = ToolRegistry::new(Arc::new(client.clone()));

    let direct = client
        .fetch(
            Endpoint::Astronomy,
            vec![("q", "Cairo".to_string()), ("dt", "2024-01-15".to_string())],
        )
        .await
        .unwrap();
    assert_eq!(direct, document);

    let result = registry
        .call_tool("weather_astronomy", json!({ "q": "Cairo", "dt": "2024-01-15" }))
        .await
        .unwrap();
    assert_eq!(result.is_error, Some(false));
    assert_eq!(result.structured_content, Some(document.clone()));
    assert_eq!(payload(&result), document);
}

#[tokio::test]
async fn test_search_array_response() {
    let mock_server = MockServer::start().await;

    let locations = json!([
        { "id": 2801268, "name": "London", "country": "United Kingdom" },
        { "id": 315398, "name": "London", "country": "Canada" }
    ]);

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("q", "Lond"))
        .respond_with(ResponseTemplate::new(200).set_body_json(locations.clone()))
        .mount(&mock_server)
        .await;

    let registry = create_registry(&mock_server, Some(TEST_KEY));
    let result = registry
        .call_tool("weather_search", json!({ "q": "Lond" }))
        .await
        .unwrap();

    assert_eq!(result.is_error, Some(false));
    assert_eq!(payload(&result), locations);
}

#[tokio::test]
async fn test_current_default_aqi_and_sports_timezone_endpoints() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/current.json"))
        .and(query_param("aqi", "no"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": "current" })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sports.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "football": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/timezone.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "location": {} })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/history.json"))
        .and(query_param("dt", "2024-01-15"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "forecast": {} })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let registry = create_registry(&mock_server, Some(TEST_KEY));
    let checks = [
        ("weather_current", json!({ "q": "Dublin" }), json!({ "ok": "current" })),
        ("weather_sports", json!({ "q": "Dublin" }), json!({ "football": [] })),
        ("weather_timezone", json!({ "q": "Dublin" }), json!({ "location": {} })),
        (
            "weather_history",
            json!({ "q": "Dublin", "dt": "2024-01-15" }),
            json!({ "forecast": {} }),
        ),
    ];

    for (tool, arguments, expected) in checks {
        let result = registry.call_tool(tool, arguments).await.unwrap();
        assert_eq!(payload(&result), expected, "{tool}");
    }
}
