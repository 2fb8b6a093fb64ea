//! Common utilities shared across weather tools.
//!
//! Argument parsing, result envelopes, and the generic glue that turns a
//! [`ToolDefinition`] into tool metadata and an rmcp route.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, JsonObject, RawContent, Tool},
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{info, warn};

use super::ToolDefinition;
use crate::domains::tools::{ToolError, ToolRegistry};
use crate::domains::weather::{WeatherApi, WeatherError, WeatherResult};

/// Default for the `"yes"`/`"no"` flags forwarded to the upstream API.
pub fn default_flag() -> String {
    "no".to_string()
}

/// Deserialize tool arguments into a params struct.
pub fn parse_params<P: DeserializeOwned>(arguments: JsonObject) -> Result<P, ToolError> {
    serde_json::from_value(Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Wrap an upstream document in a successful tool result.
///
/// The text content always carries the document; object documents are also
/// exposed as structured content.
pub fn success_result(payload: Value) -> CallToolResult {
    let mut result = CallToolResult::success(vec![Content::text(payload.to_string())]);
    if payload.is_object() {
        result.structured_content = Some(payload);
    }
    result
}

/// Translate a weather error into a failed tool result.
pub fn error_result(err: &WeatherError) -> CallToolResult {
    warn!("{}", err);
    let mut result = CallToolResult::error(vec![Content::text(err.to_string())]);
    result.structured_content = Some(json!({
        "error": {
            "kind": err.kind(),
            "status": err.status_code(),
            "message": err.message(),
        }
    }));
    result
}

/// Convert the outcome of an operation into a tool result.
pub fn into_call_result(outcome: WeatherResult<Value>) -> CallToolResult {
    match outcome {
        Ok(payload) => success_result(payload),
        Err(e) => error_result(&e),
    }
}

/// Create a Tool model for a definition (metadata).
pub fn to_tool<T: ToolDefinition>() -> Tool {
    Tool {
        name: T::NAME.into(),
        description: Some(T::DESCRIPTION.into()),
        input_schema: cached_schema_for_type::<T::Params>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Parse the arguments and run a tool end to end.
pub async fn call<T: ToolDefinition>(
    arguments: JsonObject,
    api: &dyn WeatherApi,
) -> Result<CallToolResult, ToolError> {
    let params: T::Params = parse_params(arguments)?;
    info!("Tool called: {}", T::NAME);
    Ok(into_call_result(T::execute(&params, api).await))
}

/// Create a ToolRoute that hands the call to the registry under `T::NAME`.
pub fn create_route<T, S>(registry: ToolRegistry) -> ToolRoute<S>
where
    T: ToolDefinition,
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(to_tool::<T>(), move |ctx: ToolCallContext<'_, S>| {
        let registry = registry.clone();
        let args = ctx.arguments.clone().unwrap_or_default();
        async move {
            registry
                .call_tool(T::NAME, Value::Object(args))
                .await
                .map_err(McpError::from)
        }
        .boxed()
    })
}

/// Extract the text of the first content item (the serialized document).
pub fn result_text(result: &CallToolResult) -> Option<&str> {
    result
        .content
        .first()
        .and_then(|c| match &c.raw {
            RawContent::Text(text) => Some(text.text.as_str()),
            _ => None,
        })
}
